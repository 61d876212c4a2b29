// ABOUTME: Bundled demonstration recipes served when the recipe provider is unreachable
// ABOUTME: The corpus is never empty, which lets the local path always answer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chef_core::constants::recipe_defaults;
use chef_core::models::Recipe;
use std::sync::LazyLock;

static DEMO_CORPUS: LazyLock<Vec<Recipe>> = LazyLock::new(|| {
    vec![
        demo_recipe(
            "Butter Chicken (Murgh Makhani)",
            "Creamy and rich chicken curry in aromatic tomato-based sauce with authentic Indian spices",
            &[
                "500g chicken breast, cut into cubes",
                "2 large onions, finely chopped",
                "4 large tomatoes, pureed",
                "4 cloves garlic, minced",
                "1 inch ginger, grated",
                "2 tbsp butter",
                "1/2 cup heavy cream",
                "1 tsp garam masala",
                "1 tsp cumin powder",
                "1 tsp coriander powder",
                "1/2 tsp turmeric",
                "1 tsp red chili powder",
                "Salt to taste",
            ],
            &[
                "Marinate chicken with yogurt, ginger-garlic paste, and spices for 30 minutes",
                "Heat oil in a pan and cook marinated chicken until golden brown",
                "In the same pan, melt butter and sauté onions until golden",
                "Add tomato puree and cook until oil separates",
                "Add all spices and cook for 2 minutes",
                "Return chicken to pan and add cream",
                "Simmer for 10 minutes until sauce thickens",
                "Garnish with cilantro and serve hot",
            ],
            "45 minutes",
            &["Indian", "Non-Vegetarian"],
            "4-6",
        ),
        demo_recipe(
            "Palak Paneer",
            "Creamy spinach curry with soft cottage cheese cubes, flavored with aromatic Indian spices",
            &[
                "500g fresh spinach leaves",
                "200g paneer, cubed",
                "2 onions, chopped",
                "3 tomatoes, chopped",
                "4 cloves garlic",
                "1 inch ginger",
                "2 green chilies",
                "1 tsp cumin seeds",
                "1 tsp garam masala",
                "1/2 tsp turmeric",
                "1 tsp red chili powder",
                "2 tbsp cream",
                "Salt to taste",
            ],
            &[
                "Blanch spinach leaves in boiling water for 2 minutes",
                "Blend blanched spinach into a smooth puree",
                "Heat oil and lightly fry paneer cubes until golden",
                "In same pan, add cumin seeds and sauté onions",
                "Add ginger-garlic paste and cook for 2 minutes",
                "Add tomatoes and cook until soft",
                "Add spinach puree and all spices",
                "Simmer for 10 minutes, add paneer and cream",
                "Serve hot with rice or roti",
            ],
            "35 minutes",
            &["Vegetarian", "Indian"],
            "4",
        ),
        demo_recipe(
            "Chicken Biryani",
            "Aromatic basmati rice layered with spiced chicken and cooked to perfection",
            &[
                "500g basmati rice",
                "750g chicken, cut into pieces",
                "2 large onions, sliced",
                "1 cup yogurt",
                "2 tsp ginger-garlic paste",
                "1 tsp red chili powder",
                "1/2 tsp turmeric",
                "1 tsp garam masala",
                "4-5 green cardamom",
                "2 black cardamom",
                "4 cloves",
                "2 bay leaves",
                "1 cinnamon stick",
                "Mint and coriander leaves",
                "Saffron soaked in warm milk",
            ],
            &[
                "Marinate chicken with yogurt, ginger-garlic paste, and spices for 1 hour",
                "Deep fry onions until golden brown and crispy",
                "Cook marinated chicken until 70% done",
                "Boil rice with whole spices until 70% cooked",
                "Layer rice and chicken alternately in a heavy-bottomed pot",
                "Sprinkle fried onions, mint, coriander, and saffron milk",
                "Cover with foil and lid, cook on high heat for 3 minutes",
                "Reduce heat and cook for 45 minutes",
                "Let it rest for 10 minutes before serving",
            ],
            "90 minutes",
            &["Indian", "Non-Vegetarian"],
            "6-8",
        ),
    ]
});

/// The bundled demonstration recipes, in display order
#[must_use]
pub fn demo_corpus() -> &'static [Recipe] {
    &DEMO_CORPUS
}

fn demo_recipe(
    title: &str,
    description: &str,
    ingredients: &[&str],
    instructions: &[&str],
    time: &str,
    labels: &[&str],
    servings: &str,
) -> Recipe {
    Recipe {
        title: title.to_owned(),
        description: description.to_owned(),
        ingredients: ingredients.iter().map(|s| (*s).to_owned()).collect(),
        instructions: instructions.iter().map(|s| (*s).to_owned()).collect(),
        time_minutes_label: time.to_owned(),
        dietary_labels: labels.iter().map(|s| (*s).to_owned()).collect(),
        category: recipe_defaults::CATEGORY.to_owned(),
        servings: servings.to_owned(),
        image: String::new(),
        source_url: String::new(),
        spoonacular_score: 0.0,
        health_score: 0.0,
    }
}
