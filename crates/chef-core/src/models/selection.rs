// ABOUTME: Per-request selection context carrying ingredients, diet, and allergies
// ABOUTME: Built at the request boundary and passed explicitly into matching and orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Ingredients, dietary preference, and allergens for a single request
///
/// The context lives only for the duration of one generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionContext {
    /// Selected ingredients in the order the user picked them
    pub selected_ingredients: Vec<String>,
    /// Dietary preference; empty means no preference
    pub dietary_preference: String,
    /// Lowercase, trimmed allergen tokens
    pub allergies: Vec<String>,
}

impl SelectionContext {
    /// Build a context from raw request fields
    ///
    /// Ingredients are trimmed and blank entries dropped; `allergies` is the
    /// comma-delimited string typed by the user.
    pub fn new(
        ingredients: impl IntoIterator<Item = impl AsRef<str>>,
        dietary_preference: impl Into<String>,
        allergies: &str,
    ) -> Self {
        Self {
            selected_ingredients: ingredients
                .into_iter()
                .map(|ingredient| ingredient.as_ref().trim().to_owned())
                .filter(|ingredient| !ingredient.is_empty())
                .collect(),
            dietary_preference: dietary_preference.into(),
            allergies: parse_allergies(allergies),
        }
    }

    /// Reject contexts that carry no ingredients
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when no ingredient was selected
    pub fn validate(&self) -> AppResult<()> {
        if self.selected_ingredients.is_empty() {
            return Err(AppError::invalid_input(messages::NO_INGREDIENTS));
        }
        Ok(())
    }

    /// Dietary preference, or `None` when empty
    #[must_use]
    pub fn preference(&self) -> Option<&str> {
        Some(self.dietary_preference.as_str()).filter(|p| !p.is_empty())
    }
}

/// Split a comma-delimited allergy string into lowercase, trimmed, non-empty tokens
#[must_use]
pub fn parse_allergies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}
