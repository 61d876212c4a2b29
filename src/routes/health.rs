// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Reports liveness, readiness, and reachability of the recipe provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `/health` and `/ready` never touch the provider; `/api-status` issues one
//! probe request and reports what came back.

use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

/// Features advertised by the health endpoint
const FEATURES: [&str; 6] = [
    "Spoonacular Recipe API Integration",
    "Ingredient Catalog Search",
    "Dietary Preference Filtering",
    "Allergy Awareness",
    "Recipe Saving",
    "Offline Demo Recipes",
];

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .route("/api-status", get(Self::handle_api_status))
            .with_state(resources)
    }

    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "apiKey": if resources.has_api_key() { "Configured" } else { "Missing" },
            "version": env!("CARGO_PKG_VERSION"),
            "features": FEATURES,
        }))
    }

    async fn handle_ready() -> Json<Value> {
        Json(json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn handle_api_status(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        let timestamp = chrono::Utc::now().to_rfc3339();

        match resources.lookup().probe().await {
            Ok(report) => Json(json!({
                "spoonacularAPI": if report.is_success() { "Connected" } else { "Failed" },
                "statusCode": report.status_code,
                "dailyLimit": report.requests_remaining.as_deref().unwrap_or("Unknown"),
                "timestamp": timestamp,
            })),
            Err(error) => {
                warn!(error = %error, "Recipe provider probe failed");
                Json(json!({
                    "spoonacularAPI": "Connection Failed",
                    "error": error.to_string(),
                    "timestamp": timestamp,
                }))
            }
        }
    }
}
