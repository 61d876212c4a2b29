// ABOUTME: Builders for server resources backed by mock lookups and in-memory stores
// ABOUTME: Lets route tests run without network access or files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chef_core::models::{ExtendedIngredient, RawRecipeRecord};
use smarty_chef::config::ServerConfig;
use smarty_chef::external::{MockRecipeLookup, RecipeLookup};
use smarty_chef::resources::ServerResources;
use smarty_chef::server::build_router;
use smarty_chef::stores::{InMemoryPreferenceStore, InMemorySavedRecipeStore};
use std::sync::Arc;

/// Resources with in-memory stores around the given lookup
pub fn resources_with_lookup(lookup: impl RecipeLookup + 'static) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        ServerConfig::default(),
        Arc::new(lookup),
        Arc::new(InMemoryPreferenceStore::default()),
        Arc::new(InMemorySavedRecipeStore::default()),
    ))
}

/// Full application router around the given lookup
pub fn app_with_lookup(lookup: impl RecipeLookup + 'static) -> axum::Router {
    build_router(&resources_with_lookup(lookup))
}

/// Provider record with ingredient lines and optional vegetarian flag
pub fn provider_record(title: &str, ingredients: &[&str], vegetarian: bool) -> RawRecipeRecord {
    RawRecipeRecord {
        title: Some(title.to_owned()),
        summary: Some(format!("<p>A tasty <b>{title}</b></p>")),
        extended_ingredients: Some(
            ingredients
                .iter()
                .map(|line| ExtendedIngredient {
                    original: Some((*line).to_owned()),
                    name: None,
                })
                .collect(),
        ),
        vegetarian: Some(vegetarian),
        ready_in_minutes: Some(30.0),
        servings: Some(4.0),
        ..RawRecipeRecord::default()
    }
}
