// ABOUTME: Core data models for the recipe service
// ABOUTME: Re-exports recipe, selection, raw lookup record, and user preference types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common data structures shared by the matching engine, the lookup client,
//! and the HTTP layer.

/// Raw records returned by the external recipe provider
pub mod raw;
/// Normalized recipe shape and result provenance
pub mod recipe;
/// Per-request selection context
pub mod selection;
/// Persisted user preferences and saved recipes
pub mod user;

pub use raw::{AnalyzedInstruction, ExtendedIngredient, InstructionStep, RawRecipeRecord, RecipeSearchHit};
pub use recipe::{Provenance, Recipe};
pub use selection::{parse_allergies, SelectionContext};
pub use user::{SavedRecipe, UserPreferences};
