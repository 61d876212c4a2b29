// ABOUTME: Substring-based recipe matching against selected ingredients and dietary labels
// ABOUTME: Relevance and dietary filters never empty a non-empty set; the allergy filter may
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Matcher
//!
//! Matching is deliberately literal: lowercase substring tests, no tokenization
//! and no stemming. "Chicken" matches "500g chicken breast, cut into cubes" and
//! "Chicken Thighs" matches an ingredient line that is just "chicken thighs".
//!
//! All filters preserve the relative order of their input.

use chef_core::constants::limits::LOCAL_RESULT_LIMIT;
use chef_core::models::{Recipe, SelectionContext};
use tracing::debug;

/// Matches the bundled corpus against a selection
#[derive(Debug, Clone, Copy)]
pub struct RecipeMatcher {
    result_limit: usize,
}

impl Default for RecipeMatcher {
    fn default() -> Self {
        Self {
            result_limit: LOCAL_RESULT_LIMIT,
        }
    }
}

impl RecipeMatcher {
    /// Create a matcher returning at most `result_limit` recipes
    #[must_use]
    pub const fn with_limit(result_limit: usize) -> Self {
        Self { result_limit }
    }

    /// Maximum number of recipes returned by [`Self::match_candidates`]
    #[must_use]
    pub const fn result_limit(&self) -> usize {
        self.result_limit
    }

    /// Run the full local pipeline: relevance, then dietary, then bounding
    ///
    /// Returns a non-empty list whenever `candidates` is non-empty.
    #[must_use]
    pub fn match_candidates(&self, candidates: &[Recipe], selection: &SelectionContext) -> Vec<Recipe> {
        let relevant = relevance_filter(candidates, &selection.selected_ingredients);
        let mut matched = dietary_filter(relevant, selection.preference());
        matched.truncate(self.result_limit);

        debug!(
            candidates = candidates.len(),
            matched = matched.len(),
            "Matched local recipe candidates"
        );
        matched
    }
}

/// True when any selected ingredient matches the recipe's ingredient lines or title
#[must_use]
pub fn is_relevant(recipe: &Recipe, selected_ingredients: &[String]) -> bool {
    let title = recipe.title.to_lowercase();
    let lines: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|line| line.to_lowercase())
        .collect();

    selected_ingredients.iter().any(|selected| {
        let selected = selected.to_lowercase();
        lines
            .iter()
            .any(|line| line.contains(&selected) || selected.contains(line.as_str()))
            || title.contains(&selected)
    })
}

/// Keep recipes relevant to the selection, or all candidates when none are
#[must_use]
pub fn relevance_filter(candidates: &[Recipe], selected_ingredients: &[String]) -> Vec<Recipe> {
    let relevant: Vec<Recipe> = candidates
        .iter()
        .filter(|recipe| is_relevant(recipe, selected_ingredients))
        .cloned()
        .collect();

    if relevant.is_empty() {
        candidates.to_vec()
    } else {
        relevant
    }
}

/// Lowercase and turn hyphens into spaces
///
/// Applied to both the preference and the labels, so "gluten-free" matches
/// "Gluten-Free" and "Gluten Free" but not "GlutenFree".
#[must_use]
pub fn normalize_dietary_term(term: &str) -> String {
    term.to_lowercase().replace('-', " ")
}

/// Keep recipes carrying a label that contains the preference
///
/// An empty or absent preference leaves the list untouched, and so does a
/// preference no recipe satisfies.
#[must_use]
pub fn dietary_filter(recipes: Vec<Recipe>, preference: Option<&str>) -> Vec<Recipe> {
    let Some(preference) = preference.filter(|p| !p.is_empty()) else {
        return recipes;
    };
    let wanted = normalize_dietary_term(preference);

    let filtered: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| {
            recipe
                .dietary_labels
                .iter()
                .any(|label| normalize_dietary_term(label).contains(&wanted))
        })
        .cloned()
        .collect();

    if filtered.is_empty() {
        recipes
    } else {
        filtered
    }
}

/// Drop recipes whose title or ingredient text mentions an allergen
///
/// Unlike the other filters this one may return an empty list.
#[must_use]
pub fn allergy_filter(recipes: Vec<Recipe>, allergens: &[String]) -> Vec<Recipe> {
    if allergens.is_empty() {
        return recipes;
    }
    let allergens: Vec<String> = allergens.iter().map(|a| a.to_lowercase()).collect();

    recipes
        .into_iter()
        .filter(|recipe| {
            let text = recipe.searchable_text();
            !allergens.iter().any(|allergen| text.contains(allergen.as_str()))
        })
        .collect()
}
