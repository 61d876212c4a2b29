// ABOUTME: Persisted user preferences and saved-recipe records
// ABOUTME: Shapes match what the web client reads back on startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ingredient and allergy selections remembered between sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    /// Ingredients currently selected
    pub selected_ingredients: Vec<String>,
    /// Allergy tokens as entered by the user
    pub allergies: Vec<String>,
    /// When the preferences were last written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

/// A recipe saved to the user's cookbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipe {
    /// Recipe title
    pub title: String,
    /// Recipe description
    #[serde(default)]
    pub description: String,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Instruction steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// When the recipe was saved; stamped by the store when absent
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
    /// The ingredient selection that produced this recipe
    #[serde(default)]
    pub saved_ingredients: Vec<String>,
}
