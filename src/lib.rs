// ABOUTME: Main library entry point for the Smarty-Chef recipe service
// ABOUTME: Wires recipe lookup, local fallbacks, stores, and HTTP routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Smarty-Chef
//!
//! Turns a set of selected ingredients, a dietary preference, and a list of
//! allergies into an ordered list of recipes.
//!
//! ## Architecture
//!
//! - **external**: Spoonacular client behind the [`external::RecipeLookup`] trait
//! - **services**: the generation orchestrator choosing between provider
//!   results, the bundled demo corpus, and a synthesized recipe
//! - **stores**: persisted preferences and saved recipes
//! - **routes**: axum handlers for the HTTP surface
//! - **server**: router assembly, middleware, and graceful shutdown
//!
//! Matching and synthesis live in `chef-intelligence`; shared models, errors,
//! and constants live in `chef-core`.

/// Environment-driven server configuration
pub mod config;

/// Application constants re-exported from `chef-core`
pub use chef_core::constants;

/// Unified error handling re-exported from `chef-core`
pub mod errors;

/// External recipe provider clients
pub mod external;

/// Structured logging setup
pub mod logging;

/// Shared handles used by every route
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Recipe generation orchestration
pub mod services;

/// Preference and saved-recipe persistence
pub mod stores;
