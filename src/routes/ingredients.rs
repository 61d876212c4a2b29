// ABOUTME: Ingredient catalog route handler
// ABOUTME: Filters the built-in catalog by search text while hiding allergy matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::resources::ServerResources;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chef_core::models::parse_allergies;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Query parameters for `GET /ingredients`
#[derive(Debug, Deserialize, Default)]
struct IngredientQuery {
    /// Case-insensitive search text
    #[serde(default)]
    q: String,
    /// Comma-delimited allergies to hide
    #[serde(default)]
    allergies: String,
}

/// Ingredient catalog routes
pub struct IngredientRoutes;

impl IngredientRoutes {
    /// Create ingredient catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/ingredients", get(Self::handle_search))
            .with_state(resources)
    }

    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<IngredientQuery>,
    ) -> Json<Value> {
        let allergies = parse_allergies(&query.allergies);
        let ingredients = resources.catalog.search(&query.q, &allergies);

        Json(json!({
            "total": ingredients.len(),
            "ingredients": ingredients,
        }))
    }
}
