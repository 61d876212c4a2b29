// ABOUTME: Recipe intelligence engine for ingredient matching and fallback synthesis
// ABOUTME: Hosts the matcher, provider-record normalizer, demo corpus, and ingredient catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Chef Intelligence
//!
//! The deterministic core of the recipe service. Nothing in this crate performs
//! I/O: the orchestrator in the main crate feeds it candidates and a
//! [`SelectionContext`](chef_core::models::SelectionContext) and gets ordered
//! recipe lists back.
//!
//! ## Modules
//!
//! - **matcher**: relevance, dietary, and allergy filtering plus result bounding
//! - **normalizer**: converts provider records into the common [`Recipe`](chef_core::models::Recipe) shape
//! - **synthesizer**: builds a templated recipe when nothing else survives
//! - **corpus**: bundled demonstration recipes used when the provider is unavailable
//! - **catalog**: selectable ingredient catalog with allergy-aware search

/// Selectable ingredient catalog
pub mod catalog;
/// Bundled demonstration recipes
pub mod corpus;
/// Substring-based recipe matching and filtering
pub mod matcher;
/// Provider record normalization
pub mod normalizer;
/// Deterministic fallback recipe synthesis
pub mod synthesizer;

pub use catalog::{CatalogEntry, IngredientCatalog, IngredientCategory};
pub use corpus::demo_corpus;
pub use matcher::{allergy_filter, dietary_filter, relevance_filter, RecipeMatcher};
pub use normalizer::normalize_record;
pub use synthesizer::synthesize_fallback;
