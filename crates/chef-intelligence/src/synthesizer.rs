// ABOUTME: Deterministic fallback recipe built from the raw ingredient list
// ABOUTME: Terminal fallback of the generation pipeline; total and free of randomness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chef_core::constants::{dietary_labels, recipe_defaults};
use chef_core::models::Recipe;

/// Preference value that switches on the Indian-style template (exact match)
const INDIAN_PREFERENCE: &str = "indian";

/// Title prefix for the Indian-style template
const INDIAN_TITLE_PREFIX: &str = "Indian-Style ";

/// Placeholder main ingredient when the list is empty
const PLACEHOLDER_INGREDIENT: &str = "ingredients";

/// Pantry staples appended after the user's ingredients, in order
const PANTRY_STAPLES: [&str; 4] = [
    "Salt and pepper to taste",
    "2 tbsp cooking oil",
    "Fresh herbs (optional)",
    "Spices as needed",
];

const TIME_LABEL: &str = "25-30 minutes";
const SERVINGS_LABEL: &str = "2-4";

/// Build a single templated recipe from the ingredient list and dietary preference
///
/// Callers validate that `ingredients` is non-empty; an empty list still
/// produces a recipe built around the placeholder "ingredients".
#[must_use]
pub fn synthesize_fallback(ingredients: &[String], dietary_preference: &str) -> Recipe {
    let main_ingredient = ingredients
        .first()
        .map_or(PLACEHOLDER_INGREDIENT, String::as_str);
    let is_indian = dietary_preference == INDIAN_PREFERENCE;
    let cuisine_hint = if is_indian { INDIAN_TITLE_PREFIX } else { "" };

    let featured = ingredients
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let mut recipe_ingredients: Vec<String> = ingredients
        .iter()
        .map(|ingredient| format!("1-2 portions {ingredient}"))
        .collect();
    recipe_ingredients.extend(PANTRY_STAPLES.iter().map(|s| (*s).to_owned()));

    let dietary_labels = if dietary_preference.is_empty() {
        vec![dietary_labels::HOMEMADE.to_owned()]
    } else {
        vec![dietary_preference.to_owned()]
    };

    Recipe {
        title: format!(
            "{cuisine_hint}{} Delight",
            capitalize_first(main_ingredient)
        ),
        description: format!(
            "A delicious homemade {}dish featuring {featured} and more fresh ingredients.",
            cuisine_hint.to_lowercase()
        ),
        ingredients: recipe_ingredients,
        instructions: instructions(main_ingredient, ingredients, is_indian),
        time_minutes_label: TIME_LABEL.to_owned(),
        dietary_labels,
        category: recipe_defaults::CATEGORY.to_owned(),
        servings: SERVINGS_LABEL.to_owned(),
        image: String::new(),
        source_url: String::new(),
        spoonacular_score: 0.0,
        health_score: 0.0,
    }
}

fn instructions(main_ingredient: &str, ingredients: &[String], is_indian: bool) -> Vec<String> {
    let remaining = ingredients.get(1..).unwrap_or_default();
    let second_step = if remaining.is_empty() {
        "Continue cooking for 5-7 minutes".to_owned()
    } else {
        format!("Add {} and cook for 5-7 minutes", remaining.join(", "))
    };
    let spice_step = if is_indian {
        "Add Indian spices like turmeric, cumin, or garam masala"
    } else {
        "Add herbs and spices to taste"
    };

    vec![
        "Wash and prepare all your fresh ingredients".to_owned(),
        "Heat oil in a large pan or pot over medium heat".to_owned(),
        format!("Add {main_ingredient} and cook until lightly golden"),
        second_step,
        "Season with salt, pepper, and your favorite spices".to_owned(),
        spice_step.to_owned(),
        "Cook until all ingredients are tender and well combined".to_owned(),
        "Taste and adjust seasoning as needed".to_owned(),
        "Serve hot and enjoy your homemade creation!".to_owned(),
    ]
}

/// Uppercase the first character, leaving the rest untouched
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
