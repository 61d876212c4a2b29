// ABOUTME: Preference and saved-recipe route handlers
// ABOUTME: Reads and writes the local stores on behalf of the web client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Preference routes
//!
//! Preferences are a single document replaced on every `PUT`. The cookbook
//! accepts one recipe or an array of recipes per `POST`.

use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chef_core::models::{SavedRecipe, UserPreferences};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Body of `POST /saved-recipes`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SaveRecipesRequest {
    /// Several recipes at once
    Many(Vec<SavedRecipe>),
    /// A single recipe
    One(SavedRecipe),
}

impl SaveRecipesRequest {
    fn into_vec(self) -> Vec<SavedRecipe> {
        match self {
            Self::Many(recipes) => recipes,
            Self::One(recipe) => vec![recipe],
        }
    }
}

/// Preference and cookbook routes
pub struct PreferenceRoutes;

impl PreferenceRoutes {
    /// Create preference and cookbook routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/preferences",
                get(Self::handle_get_preferences).put(Self::handle_put_preferences),
            )
            .route(
                "/saved-recipes",
                get(Self::handle_list_saved)
                    .post(Self::handle_save_recipes)
                    .delete(Self::handle_clear_saved),
            )
            .with_state(resources)
    }

    async fn handle_get_preferences(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let preferences = resources.preferences.load().await?;
        Ok((StatusCode::OK, Json(preferences)).into_response())
    }

    async fn handle_put_preferences(
        State(resources): State<Arc<ServerResources>>,
        Json(preferences): Json<UserPreferences>,
    ) -> Result<Response, AppError> {
        let saved = resources.preferences.save(&preferences).await?;
        Ok((StatusCode::OK, Json(saved)).into_response())
    }

    async fn handle_list_saved(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let recipes = resources.saved_recipes.list().await?;
        Ok((
            StatusCode::OK,
            Json(json!({ "total": recipes.len(), "recipes": recipes })),
        )
            .into_response())
    }

    async fn handle_save_recipes(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<SaveRecipesRequest>,
    ) -> Result<Response, AppError> {
        let saved = resources.saved_recipes.append(request.into_vec()).await?;
        let total = resources.saved_recipes.list().await?.len();
        let status = if saved > 0 {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        };
        Ok((status, Json(json!({ "saved": saved, "total": total }))).into_response())
    }

    async fn handle_clear_saved(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        resources.saved_recipes.clear().await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
