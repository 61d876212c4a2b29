// ABOUTME: Recipe generation route handler
// ABOUTME: Translates the generate-recipe request into a selection and renders the outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, ErrorCode};
use crate::resources::ServerResources;
use crate::services::GenerationOutcome;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chef_core::models::{Provenance, Recipe, SelectionContext};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, Instrument};
use uuid::Uuid;

/// Body of `POST /generate-recipe`; missing and `null` fields both mean empty
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateRecipeRequest {
    /// Selected ingredients
    pub ingredients: Option<Vec<String>>,
    /// Dietary preference, empty for none
    pub dietary_preference: Option<String>,
    /// Comma-delimited allergies
    pub allergies: Option<String>,
}

/// Response of `POST /generate-recipe`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeResponse {
    /// Ordered, non-empty recipe list
    pub recipes: Vec<Recipe>,
    /// "Spoonacular" or "Fallback"
    pub api_source: String,
    /// Fine-grained origin of the recipes
    pub provenance: Provenance,
    /// Provider search hits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_found: Option<usize>,
    /// Recipes left after filtering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_filtering: Option<usize>,
    /// Informational message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Provider failure diagnostic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<GenerationOutcome> for GenerateRecipeResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        Self {
            api_source: outcome.provenance.api_source().to_owned(),
            recipes: outcome.recipes,
            provenance: outcome.provenance,
            total_found: outcome.total_found,
            after_filtering: outcome.after_filtering,
            message: outcome.message,
            error: outcome.error,
        }
    }
}

/// Recipe generation routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create recipe generation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/generate-recipe", post(Self::handle_generate))
            .with_state(resources)
    }

    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<GenerateRecipeRequest>,
    ) -> Result<Response, AppError> {
        let request_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!("generate_recipe", request_id = %request_id);

        let selection = SelectionContext::new(
            request.ingredients.unwrap_or_default(),
            request.dietary_preference.unwrap_or_default(),
            request.allergies.as_deref().unwrap_or_default(),
        );
        info!(
            parent: &span,
            ingredients = selection.selected_ingredients.len(),
            dietary_preference = %selection.dietary_preference,
            allergies = selection.allergies.len(),
            "Generating recipes"
        );

        match resources.generator.generate(&selection).instrument(span).await {
            Ok(outcome) => {
                Ok((StatusCode::OK, Json(GenerateRecipeResponse::from(outcome))).into_response())
            }
            Err(error) if error.code == ErrorCode::InvalidInput => Ok((
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": error.message,
                    "code": error.code,
                    "requestId": request_id,
                    "recipes": [],
                })),
            )
                .into_response()),
            Err(error) => Err(error.with_request_id(request_id)),
        }
    }
}
