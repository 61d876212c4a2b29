// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Hosts the recipe generation orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold the business rules; route handlers only translate HTTP
//! requests into service calls and service results into responses.

/// Recipe generation: provider lookup with local and synthesized fallbacks
pub mod recipe_generation;

pub use recipe_generation::{GenerationOutcome, GenerationPhase, RecipeGenerator};
