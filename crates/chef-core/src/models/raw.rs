// ABOUTME: Raw recipe records as returned by the external recipe provider
// ABOUTME: Every field is optional so that deserialization tolerates sparse provider payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Lightweight hit from the ingredient search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSearchHit {
    /// Provider recipe identifier used for the detail call
    pub id: u64,
    /// Recipe title
    #[serde(default)]
    pub title: Option<String>,
    /// Number of the query's ingredients the recipe uses
    #[serde(default)]
    pub used_ingredient_count: Option<u32>,
    /// Number of extra ingredients the recipe needs
    #[serde(default)]
    pub missed_ingredient_count: Option<u32>,
}

/// Full recipe record from the detail endpoint
///
/// Field names mirror the provider's payload.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecipeRecord {
    pub id: Option<u64>,
    pub title: Option<String>,
    /// HTML summary
    pub summary: Option<String>,
    pub extended_ingredients: Option<Vec<ExtendedIngredient>>,
    pub analyzed_instructions: Option<Vec<AnalyzedInstruction>>,
    /// Free-form instruction text, one step per line
    pub instructions: Option<String>,
    pub ready_in_minutes: Option<f64>,
    pub servings: Option<f64>,
    pub vegetarian: Option<bool>,
    pub vegan: Option<bool>,
    pub gluten_free: Option<bool>,
    pub dairy_free: Option<bool>,
    pub very_healthy: Option<bool>,
    pub dish_types: Option<Vec<String>>,
    pub cuisines: Option<Vec<String>>,
    pub image: Option<String>,
    pub source_url: Option<String>,
    pub spoonacular_score: Option<f64>,
    pub health_score: Option<f64>,
}

/// Structured ingredient entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedIngredient {
    /// Human-readable line, e.g. "2 cups basmati rice"
    pub original: Option<String>,
    /// Bare ingredient name
    pub name: Option<String>,
}

/// One structured instruction set
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzedInstruction {
    /// Optional sub-recipe name ("For the sauce")
    pub name: Option<String>,
    pub steps: Vec<InstructionStep>,
}

/// Single numbered step
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstructionStep {
    pub number: Option<u32>,
    pub step: String,
}
