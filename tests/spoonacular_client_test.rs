// ABOUTME: Integration tests for the Spoonacular client against a local fake provider
// ABOUTME: Checks request parameters, caching, error mapping, probing, and end-to-end generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chef_core::models::{Provenance, SelectionContext};
use serde_json::json;
use smarty_chef::external::{LookupError, RecipeLookup, SpoonacularClient, SpoonacularClientConfig};
use smarty_chef::services::RecipeGenerator;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const API_KEY: &str = "test-key";

#[derive(Default)]
struct FakeProvider {
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    last_search_query: Mutex<HashMap<String, String>>,
}

type Params = Query<HashMap<String, String>>;

fn authorized(params: &HashMap<String, String>) -> bool {
    params.get("apiKey").map(String::as_str) == Some(API_KEY)
}

async fn find_by_ingredients(
    State(provider): State<Arc<FakeProvider>>,
    Query(params): Params,
) -> Response {
    provider.search_calls.fetch_add(1, Ordering::SeqCst);
    if !authorized(&params) {
        return (StatusCode::UNAUTHORIZED, "invalid api key").into_response();
    }
    *provider.last_search_query.lock().unwrap() = params;

    Json(json!([
        { "id": 11, "title": "Palak Paneer", "usedIngredientCount": 2, "missedIngredientCount": 3 },
        { "id": 12, "title": "Broken Recipe", "usedIngredientCount": 1, "missedIngredientCount": 0 },
        { "id": 13, "title": "Garbled Recipe", "usedIngredientCount": 1, "missedIngredientCount": 0 }
    ]))
    .into_response()
}

async fn information(
    State(provider): State<Arc<FakeProvider>>,
    Path(id): Path<u64>,
    Query(params): Params,
) -> Response {
    provider.detail_calls.fetch_add(1, Ordering::SeqCst);
    if !authorized(&params) {
        return (StatusCode::UNAUTHORIZED, "invalid api key").into_response();
    }

    match id {
        11 => Json(json!({
            "id": 11,
            "title": "Palak Paneer",
            "summary": "<b>Creamy</b> spinach with paneer",
            "extendedIngredients": [
                { "original": "500g spinach", "name": "spinach" },
                { "original": "200g paneer", "name": "paneer" }
            ],
            "analyzedInstructions": [
                { "name": "", "steps": [
                    { "number": 1, "step": "Blanch the spinach" },
                    { "number": 2, "step": "Simmer with paneer" }
                ]}
            ],
            "readyInMinutes": 35,
            "servings": 4,
            "vegetarian": true,
            "glutenFree": true,
            "dishTypes": ["main course"],
            "cuisines": ["Indian"],
            "image": "https://img.example/palak.jpg",
            "sourceUrl": "https://recipes.example/palak",
            "spoonacularScore": 92.5,
            "healthScore": 40
        }))
        .into_response(),
        12 => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        _ => (StatusCode::OK, "<html>not json</html>").into_response(),
    }
}

async fn random(Query(params): Params) -> Response {
    if !authorized(&params) {
        return (StatusCode::UNAUTHORIZED, "invalid api key").into_response();
    }
    (
        [("X-RateLimit-Requests-Remaining", "149")],
        Json(json!({ "recipes": [] })),
    )
        .into_response()
}

/// Start the fake provider on an ephemeral port and return its base URL
async fn spawn_fake_provider() -> (String, Arc<FakeProvider>) {
    let provider = Arc::new(FakeProvider::default());
    let app = Router::new()
        .route("/recipes/findByIngredients", get(find_by_ingredients))
        .route("/recipes/:id/information", get(information))
        .route("/recipes/random", get(random))
        .with_state(Arc::clone(&provider));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{address}"), provider)
}

fn client(base_url: String, api_key: &str) -> SpoonacularClient {
    SpoonacularClient::new(SpoonacularClientConfig {
        api_key: Some(api_key.to_owned()),
        base_url,
        ..SpoonacularClientConfig::default()
    })
}

fn ingredients(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

#[tokio::test]
async fn test_search_sends_provider_parameters() {
    let (base_url, provider) = spawn_fake_provider().await;
    let client = client(base_url, API_KEY);

    let hits = client
        .search_by_ingredients(&ingredients(&["Paneer", "Spinach"]))
        .await
        .unwrap();

    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].id, 11);
    assert_eq!(hits[0].missed_ingredient_count, Some(3));

    let query = provider.last_search_query.lock().unwrap().clone();
    assert_eq!(query["ingredients"], "Paneer,+Spinach");
    assert_eq!(query["number"], "8");
    assert_eq!(query["ranking"], "2");
    assert_eq!(query["ignorePantry"], "true");
}

#[tokio::test]
async fn test_search_is_cached_case_insensitively() {
    let (base_url, provider) = spawn_fake_provider().await;
    let client = client(base_url, API_KEY);

    client
        .search_by_ingredients(&ingredients(&["Paneer", "Spinach"]))
        .await
        .unwrap();
    client
        .search_by_ingredients(&ingredients(&["paneer", "SPINACH"]))
        .await
        .unwrap();

    assert_eq!(provider.search_calls.load(Ordering::SeqCst), 1);
    assert_eq!(client.cache_stats().await, (1, 0));

    client.clear_caches().await;
    client
        .search_by_ingredients(&ingredients(&["paneer", "spinach"]))
        .await
        .unwrap();
    assert_eq!(provider.search_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_detail_is_fetched_once_and_cached() {
    let (base_url, provider) = spawn_fake_provider().await;
    let client = client(base_url, API_KEY);

    let first = client.recipe_information(11).await.unwrap();
    let second = client.recipe_information(11).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.title.as_deref(), Some("Palak Paneer"));
    assert_eq!(first.ready_in_minutes, Some(35.0));
    assert_eq!(provider.detail_calls.load(Ordering::SeqCst), 1);
    assert_eq!(client.cache_stats().await, (0, 1));
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let (base_url, _provider) = spawn_fake_provider().await;
    let client = client(base_url, API_KEY);

    let error = client.recipe_information(12).await.unwrap_err();
    match error {
        LookupError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    let (base_url, provider) = spawn_fake_provider().await;
    let client = client(base_url, API_KEY);

    let error = client.recipe_information(13).await.unwrap_err();
    assert!(matches!(error, LookupError::Malformed(_)));

    // failures are not cached
    let _ = client.recipe_information(13).await;
    assert_eq!(provider.detail_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_rejected_key_is_a_status_error() {
    let (base_url, _provider) = spawn_fake_provider().await;
    let client = client(base_url, "wrong-key");

    let error = client
        .search_by_ingredients(&ingredients(&["rice"]))
        .await
        .unwrap_err();
    assert!(matches!(error, LookupError::Status { status: 401, .. }));
    assert!(!error.is_rate_limited());
}

#[tokio::test]
async fn test_probe_reports_quota() {
    let (base_url, _provider) = spawn_fake_provider().await;

    let report = client(base_url.clone(), API_KEY).probe().await.unwrap();
    assert!(report.is_success());
    assert_eq!(report.status_code, 200);
    assert_eq!(report.requests_remaining.as_deref(), Some("149"));

    let report = client(base_url, "wrong-key").probe().await.unwrap();
    assert!(!report.is_success());
    assert_eq!(report.status_code, 401);
    assert_eq!(report.requests_remaining, None);
}

#[tokio::test]
async fn test_unreachable_provider_is_unavailable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = client(format!("http://{address}"), API_KEY);
    let error = client
        .search_by_ingredients(&ingredients(&["rice"]))
        .await
        .unwrap_err();
    assert!(matches!(error, LookupError::Unavailable(_)));
}

#[tokio::test]
async fn test_unconfigured_client_makes_no_requests() {
    let (base_url, provider) = spawn_fake_provider().await;
    let client = SpoonacularClient::new(SpoonacularClientConfig {
        api_key: None,
        base_url,
        ..SpoonacularClientConfig::default()
    });

    assert!(!client.is_configured());
    let error = client.probe().await.unwrap_err();
    assert!(matches!(error, LookupError::NotConfigured(_)));
    assert_eq!(provider.search_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generator_against_fake_provider() {
    let (base_url, provider) = spawn_fake_provider().await;
    let generator = RecipeGenerator::new(Arc::new(client(base_url, API_KEY)));
    let selection = SelectionContext::new(["Paneer", "Spinach"], "vegetarian", "");

    let outcome = generator.generate(&selection).await.unwrap();

    assert_eq!(outcome.provenance, Provenance::External);
    assert_eq!(outcome.total_found, Some(3));
    assert_eq!(outcome.after_filtering, Some(1));
    assert_eq!(provider.detail_calls.load(Ordering::SeqCst), 3);

    let recipe = &outcome.recipes[0];
    assert_eq!(recipe.title, "Palak Paneer");
    assert_eq!(recipe.description, "Creamy spinach with paneer...");
    assert_eq!(recipe.instructions, vec!["Blanch the spinach", "Simmer with paneer"]);
    assert_eq!(
        recipe.dietary_labels,
        vec!["Vegetarian", "Gluten-Free", "main course", "Indian"]
    );
    assert_eq!(recipe.category, "main course");
    assert_eq!(recipe.time_minutes_label, "35 minutes");
    assert_eq!(recipe.servings, "4");
    assert_eq!(recipe.source_url, "https://recipes.example/palak");
}

#[tokio::test]
async fn test_exhausted_window_fails_fast_to_demo_corpus() {
    let (base_url, provider) = spawn_fake_provider().await;
    let client = Arc::new(SpoonacularClient::new(SpoonacularClientConfig {
        api_key: Some(API_KEY.to_owned()),
        base_url,
        rate_limit_per_minute: 1,
        ..SpoonacularClientConfig::default()
    }));

    client
        .search_by_ingredients(&ingredients(&["rice"]))
        .await
        .unwrap();

    let started = std::time::Instant::now();
    let error = client.probe().await.unwrap_err();
    assert!(matches!(error, LookupError::Throttled { .. }));
    assert!(error.is_rate_limited());

    let generator = RecipeGenerator::new(client);
    let selection = SelectionContext::new(["Chicken"], "", "");
    let outcome = generator.generate(&selection).await.unwrap();

    assert!(started.elapsed() < std::time::Duration::from_secs(5));
    assert_eq!(outcome.provenance, Provenance::LocalDemo);
    assert!(!outcome.recipes.is_empty());
    assert_eq!(provider.search_calls.load(Ordering::SeqCst), 1);
}
