// ABOUTME: External API client modules (Spoonacular recipe provider)
// ABOUTME: Provides the RecipeLookup seam, the HTTP client, and a mock for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! The orchestrator only sees [`RecipeLookup`]; the HTTP client and the mock
//! are interchangeable behind it.

/// Lookup failure taxonomy
pub mod errors;
/// Spoonacular HTTP client and mock lookup
pub mod spoonacular_client;

pub use errors::LookupError;
pub use spoonacular_client::{
    MockRecipeLookup, ProbeReport, RecipeLookup, SpoonacularClient, SpoonacularClientConfig,
};
