// ABOUTME: Normalized recipe record that every recipe source converts into
// ABOUTME: Also defines the provenance tag describing where a result set came from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{recipe_defaults, service_names};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recipe in the common display shape
///
/// Field names on the wire follow the web client's contract, which is why
/// `time` and `dietary_labels` do not use camel case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Display title, never empty
    pub title: String,
    /// Free-text description, sanitized of markup
    #[serde(default)]
    pub description: String,
    /// Display-ready ingredient lines, in order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// One instruction step per entry, in order
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Preparation time label such as "45 minutes"; may be empty
    #[serde(default, rename = "time")]
    pub time_minutes_label: String,
    /// Dietary, dish-type, and cuisine labels in display order
    #[serde(default, rename = "dietary_labels")]
    pub dietary_labels: Vec<String>,
    /// Course category
    #[serde(default = "default_category")]
    pub category: String,
    /// Servings label; may be empty
    #[serde(default)]
    pub servings: String,
    /// Image URL; empty when absent
    #[serde(default)]
    pub image: String,
    /// Original recipe URL; empty when absent
    #[serde(default)]
    pub source_url: String,
    /// Provider popularity score
    #[serde(default)]
    pub spoonacular_score: f64,
    /// Provider health score
    #[serde(default)]
    pub health_score: f64,
}

fn default_category() -> String {
    recipe_defaults::CATEGORY.to_owned()
}

impl Recipe {
    /// Create a recipe with the given title and every other field at its default
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            time_minutes_label: String::new(),
            dietary_labels: Vec::new(),
            category: default_category(),
            servings: String::new(),
            image: String::new(),
            source_url: String::new(),
            spoonacular_score: 0.0,
            health_score: 0.0,
        }
    }

    /// Lowercased title and ingredient text, used for allergen scanning
    #[must_use]
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.ingredients.join(" ")).to_lowercase()
    }
}

/// Where a result set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// Normalized records from the external provider
    External,
    /// Entries from the bundled demo corpus
    LocalDemo,
    /// A single recipe built by the fallback synthesizer
    Synthesized,
}

impl Provenance {
    /// Value of the `apiSource` field the web client displays
    #[must_use]
    pub const fn api_source(self) -> &'static str {
        match self {
            Self::External => service_names::SPOONACULAR,
            Self::LocalDemo | Self::Synthesized => service_names::FALLBACK,
        }
    }

    /// Stable string form used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::External => "external",
            Self::LocalDemo => "local-demo",
            Self::Synthesized => "synthesized",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
