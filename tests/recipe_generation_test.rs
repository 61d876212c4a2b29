// ABOUTME: End-to-end tests for the recipe generator across all three provenance paths
// ABOUTME: Drives the generator with mock lookups and checks the non-empty result guarantee
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use chef_core::models::{Provenance, SelectionContext};
use chef_intelligence::RecipeMatcher;
use helpers::test_utils::provider_record;
use smarty_chef::external::MockRecipeLookup;
use smarty_chef::services::RecipeGenerator;
use std::sync::Arc;

fn generator(lookup: MockRecipeLookup) -> RecipeGenerator {
    RecipeGenerator::new(Arc::new(lookup))
}

#[tokio::test]
async fn test_palak_paneer_from_demo_corpus() {
    let selection = SelectionContext::new(["Paneer", "Spinach"], "vegetarian", "");

    let outcome = generator(MockRecipeLookup::failing(500))
        .generate(&selection)
        .await
        .unwrap();

    assert_eq!(outcome.provenance, Provenance::LocalDemo);
    assert_eq!(outcome.recipes.len(), 1);
    assert_eq!(outcome.recipes[0].title, "Palak Paneer");
    assert_eq!(outcome.recipes[0].time_minutes_label, "35 minutes");
}

#[tokio::test]
async fn test_every_path_returns_recipes() {
    let selections = [
        SelectionContext::new(["chicken"], "", ""),
        SelectionContext::new(["chicken"], "vegan", "chicken"),
        SelectionContext::new(["saffron", "rice"], "gluten-free", "milk"),
        SelectionContext::new(["tofu"], "indian", ""),
    ];
    let lookups = [
        MockRecipeLookup::failing(503),
        MockRecipeLookup::unconfigured(),
        MockRecipeLookup::with_records(Vec::new()),
        MockRecipeLookup::with_records(vec![
            provider_record("Chicken Pulao", &["2 cups rice", "300g chicken"], false),
            provider_record("Veg Pulao", &["2 cups rice", "1 cup peas"], true),
        ]),
        MockRecipeLookup::with_records(vec![provider_record("Bread", &["flour"], true)])
            .with_failing_detail(1),
    ];

    for lookup in lookups {
        let generator = generator(lookup);
        for selection in &selections {
            let outcome = generator.generate(selection).await.unwrap();
            assert!(
                !outcome.recipes.is_empty(),
                "empty result for {selection:?} via {}",
                outcome.provenance
            );
        }
    }
}

#[tokio::test]
async fn test_allergy_elimination_synthesizes() {
    let lookup = MockRecipeLookup::with_records(vec![
        provider_record("Shrimp Scampi", &["1 lb shrimp", "4 cloves garlic"], false),
        provider_record("Garlic Shrimp", &["shrimp", "butter"], false),
    ]);
    let selection = SelectionContext::new(["shrimp", "garlic"], "", "Shrimp");

    let outcome = generator(lookup).generate(&selection).await.unwrap();

    assert_eq!(outcome.provenance, Provenance::Synthesized);
    assert_eq!(outcome.total_found, Some(2));
    assert_eq!(outcome.recipes.len(), 1);
    assert_eq!(outcome.recipes[0].title, "Shrimp Delight");
    assert_eq!(
        outcome.recipes[0].ingredients.first().map(String::as_str),
        Some("1-2 portions shrimp")
    );
}

#[tokio::test]
async fn test_unmet_preference_keeps_provider_results() {
    let lookup = MockRecipeLookup::with_records(vec![provider_record(
        "Egg Fried Rice",
        &["2 eggs", "2 cups rice"],
        false,
    )]);
    let selection = SelectionContext::new(["rice"], "vegan", "");

    let outcome = generator(lookup).generate(&selection).await.unwrap();

    assert_eq!(outcome.provenance, Provenance::External);
    assert_eq!(outcome.recipes[0].title, "Egg Fried Rice");
}

#[tokio::test]
async fn test_custom_matcher_limit_applies_to_demo_path() {
    let generator = generator(MockRecipeLookup::failing(500)).with_matcher(RecipeMatcher::with_limit(1));
    let selection = SelectionContext::new(["durian"], "", "");

    let outcome = generator.generate(&selection).await.unwrap();

    assert_eq!(outcome.recipes.len(), 1);
    assert_eq!(outcome.recipes[0].title, "Butter Chicken (Murgh Makhani)");
}

#[tokio::test]
async fn test_invalid_selection_is_rejected_before_lookup() {
    let selection = SelectionContext::new(Vec::<String>::new(), "", "");

    let error = generator(MockRecipeLookup::default())
        .generate(&selection)
        .await
        .unwrap_err();

    assert_eq!(error.http_status(), 400);
}
