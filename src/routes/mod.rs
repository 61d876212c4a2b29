// ABOUTME: Route module organization for the HTTP surface
// ABOUTME: Groups handlers by domain and provides the not-found fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route modules
//!
//! Each module exposes a `*Routes` type whose `routes` function returns an
//! `axum::Router` already bound to its state.

/// Health, readiness, and provider status
pub mod health;
/// Ingredient catalog search
pub mod ingredients;
/// Preference and saved-recipe persistence
pub mod preferences;
/// Recipe generation
pub mod recipes;

pub use health::HealthRoutes;
pub use ingredients::IngredientRoutes;
pub use preferences::PreferenceRoutes;
pub use recipes::RecipeRoutes;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Endpoints listed in the not-found response
pub const AVAILABLE_ENDPOINTS: [&str; 11] = [
    "POST /generate-recipe - Generate recipes",
    "GET /health - Server health check",
    "GET /ready - Readiness probe",
    "GET /api-status - API connection status",
    "GET /ingredients - Search the ingredient catalog",
    "GET /preferences - Load saved preferences",
    "PUT /preferences - Save preferences",
    "GET /saved-recipes - List saved recipes",
    "POST /saved-recipes - Save recipes",
    "DELETE /saved-recipes - Clear saved recipes",
    "OPTIONS * - CORS preflight",
];

/// Fallback handler for unknown paths
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "availableEndpoints": AVAILABLE_ENDPOINTS,
        })),
    )
}
