// ABOUTME: Converts raw provider recipe records into the common Recipe shape
// ABOUTME: Total conversion: every missing field has a documented default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Provider Record Normalization
//!
//! | Field          | Source                                            | Default                  |
//! |----------------|---------------------------------------------------|--------------------------|
//! | `ingredients`  | `extendedIngredients[].original`                  | `[]`                     |
//! | `instructions` | first `analyzedInstructions` set, else text lines | `[]`                     |
//! | `description`  | `summary` without tags, 200 chars + "..."         | generic sentence         |
//! | `dietary_labels` | boolean flags, then dish types, then cuisines   | `[]`                     |
//! | `category`     | first dish type                                   | "Main Course"            |
//! | `time`         | "{readyInMinutes} minutes"                        | `""`                     |
//! | `servings`     | `servings`                                        | `""`                     |

use chef_core::constants::{dietary_labels, limits::DESCRIPTION_MAX_CHARS, recipe_defaults};
use chef_core::models::{RawRecipeRecord, Recipe};
use regex::Regex;
use std::sync::LazyLock;

static MARKUP_TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]*>").ok());

/// Normalize a provider detail record
#[must_use]
pub fn normalize_record(record: RawRecipeRecord) -> Recipe {
    let instructions = normalize_instructions(&record);
    let dietary_labels = collect_labels(&record);
    let category = record
        .dish_types
        .as_ref()
        .and_then(|types| types.first())
        .cloned()
        .unwrap_or_else(|| recipe_defaults::CATEGORY.to_owned());

    Recipe {
        title: record
            .title
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| recipe_defaults::TITLE.to_owned()),
        description: record
            .summary
            .as_deref()
            .filter(|summary| !summary.is_empty())
            .map_or_else(|| recipe_defaults::DESCRIPTION.to_owned(), summarize),
        ingredients: record
            .extended_ingredients
            .unwrap_or_default()
            .into_iter()
            .filter_map(|ingredient| ingredient.original)
            .collect(),
        instructions,
        time_minutes_label: positive(record.ready_in_minutes)
            .map(|minutes| format!("{} minutes", display_number(minutes)))
            .unwrap_or_default(),
        dietary_labels,
        category,
        servings: positive(record.servings)
            .map(display_number)
            .unwrap_or_default(),
        image: record.image.unwrap_or_default(),
        source_url: record.source_url.unwrap_or_default(),
        spoonacular_score: record.spoonacular_score.unwrap_or(0.0),
        health_score: record.health_score.unwrap_or(0.0),
    }
}

fn normalize_instructions(record: &RawRecipeRecord) -> Vec<String> {
    if let Some(first_set) = record
        .analyzed_instructions
        .as_ref()
        .and_then(|sets| sets.first())
    {
        return first_set.steps.iter().map(|step| step.step.clone()).collect();
    }

    record
        .instructions
        .as_deref()
        .map(split_instruction_text)
        .unwrap_or_default()
}

/// Split free-form instruction text into trimmed, non-empty lines
#[must_use]
pub fn split_instruction_text(text: &str) -> Vec<String> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Remove markup tags
#[must_use]
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.as_ref().map_or_else(
        || text.to_owned(),
        |pattern| pattern.replace_all(text, "").into_owned(),
    )
}

/// Strip tags, keep the first 200 characters, and append the ellipsis marker
fn summarize(summary: &str) -> String {
    let mut description: String = strip_markup(summary)
        .chars()
        .take(DESCRIPTION_MAX_CHARS)
        .collect();
    description.push_str(recipe_defaults::ELLIPSIS);
    description
}

fn collect_labels(record: &RawRecipeRecord) -> Vec<String> {
    let flags = [
        (record.vegetarian, dietary_labels::VEGETARIAN),
        (record.vegan, dietary_labels::VEGAN),
        (record.gluten_free, dietary_labels::GLUTEN_FREE),
        (record.dairy_free, dietary_labels::DAIRY_FREE),
        (record.very_healthy, dietary_labels::HEALTHY),
    ];

    flags
        .iter()
        .filter(|(flag, _)| flag.unwrap_or(false))
        .map(|(_, label)| (*label).to_owned())
        .chain(record.dish_types.iter().flatten().cloned())
        .chain(record.cuisines.iter().flatten().cloned())
        .collect()
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && v.abs() > f64::EPSILON)
}

/// Render whole numbers without a fractional part
fn display_number(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
