// ABOUTME: Catalog of selectable ingredients grouped by category
// ABOUTME: Supports case-insensitive search that hides entries matching the user's allergies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Grouping shown in the ingredient picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Meat, fish, eggs, paneer, tofu
    Proteins,
    /// Rice, flours, breads, pasta
    Grains,
    /// Vegetables and leafy herbs
    Vegetables,
    /// Lentils, beans, peas
    Legumes,
    /// Whole and ground spices, dried herbs
    Spices,
    /// Milk products and alternatives
    Dairy,
    /// Cooking oils and fats
    Oils,
    /// Fruits
    Fruits,
    /// Nuts and seeds
    Nuts,
    /// Sweeteners, condiments, and everything else
    Pantry,
}

/// One selectable ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Display name
    pub name: &'static str,
    /// Picker grouping
    pub category: IngredientCategory,
}

const SECTIONS: &[(IngredientCategory, &[&str])] = &[
    (
        IngredientCategory::Proteins,
        &[
            "Chicken", "Chicken Breast", "Chicken Thighs", "Mutton", "Lamb", "Beef", "Fish",
            "Salmon", "Prawns", "Eggs", "Paneer", "Tofu", "Turkey", "Duck",
        ],
    ),
    (
        IngredientCategory::Grains,
        &[
            "Basmati Rice", "Brown Rice", "Quinoa", "Bulgur", "Wheat Flour", "All-Purpose Flour",
            "Semolina", "Bread", "Naan", "Roti", "Pasta", "Noodles",
        ],
    ),
    (
        IngredientCategory::Vegetables,
        &[
            "Onions", "Red Onions", "Garlic", "Ginger", "Tomatoes", "Bell Peppers",
            "Green Chilies", "Potatoes", "Sweet Potatoes", "Carrots", "Celery", "Cucumber",
            "Okra", "Eggplant", "Bitter Gourd", "Bottle Gourd", "Drumsticks", "Curry Leaves",
            "Coriander Leaves", "Mint Leaves", "Spinach", "Fenugreek Leaves", "Broccoli",
            "Cauliflower", "Green Beans", "Peas", "Corn", "Mushrooms", "Zucchini",
        ],
    ),
    (
        IngredientCategory::Legumes,
        &[
            "Chickpeas", "Black Lentils", "Red Lentils", "Yellow Lentils", "Kidney Beans",
            "Black Beans", "Green Moong", "Pigeon Peas",
        ],
    ),
    (
        IngredientCategory::Spices,
        &[
            "Turmeric", "Cumin", "Coriander Seeds", "Mustard Seeds", "Fennel Seeds", "Cardamom",
            "Cinnamon", "Cloves", "Bay Leaves", "Asafoetida", "Red Chili Powder", "Garam Masala",
            "Black Pepper", "Paprika", "Oregano", "Thyme", "Rosemary", "Basil", "Parsley",
            "Saffron", "Vanilla", "Nutmeg",
        ],
    ),
    (
        IngredientCategory::Dairy,
        &[
            "Milk", "Yogurt", "Heavy Cream", "Butter", "Ghee", "Cheese", "Mozzarella", "Cheddar",
            "Parmesan", "Coconut Milk",
        ],
    ),
    (
        IngredientCategory::Oils,
        &["Olive Oil", "Vegetable Oil", "Coconut Oil", "Sesame Oil", "Mustard Oil"],
    ),
    (
        IngredientCategory::Fruits,
        &[
            "Lemons", "Limes", "Tomatoes", "Coconut", "Mango", "Banana", "Apples", "Onions",
        ],
    ),
    (
        IngredientCategory::Nuts,
        &["Almonds", "Cashews", "Peanuts", "Sesame Seeds", "Poppy Seeds"],
    ),
    (
        IngredientCategory::Pantry,
        &[
            "Sugar", "Jaggery", "Honey", "Salt", "Vinegar", "Soy Sauce", "Tamarind",
        ],
    ),
];

static CATALOG: LazyLock<IngredientCatalog> = LazyLock::new(|| {
    let mut seen = HashSet::new();
    let entries = SECTIONS
        .iter()
        .flat_map(|(category, names)| {
            names.iter().map(move |name| CatalogEntry {
                name: *name,
                category: *category,
            })
        })
        .filter(|entry| seen.insert(entry.name))
        .collect();
    IngredientCatalog { entries }
});

/// Ingredient catalog; names appear once, in their first section
#[derive(Debug, Clone)]
pub struct IngredientCatalog {
    entries: Vec<CatalogEntry>,
}

impl IngredientCatalog {
    /// The built-in catalog
    #[must_use]
    pub fn builtin() -> &'static Self {
        &CATALOG
    }

    /// All entries in display order
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entries containing `filter_text` that do not mention any allergy token
    ///
    /// Both comparisons are case-insensitive substring tests; an empty filter
    /// matches everything.
    #[must_use]
    pub fn search(&self, filter_text: &str, allergies: &[String]) -> Vec<CatalogEntry> {
        let filter_text = filter_text.trim().to_lowercase();
        let allergies: Vec<String> = allergies
            .iter()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();

        self.entries
            .iter()
            .filter(|entry| {
                let name = entry.name.to_lowercase();
                name.contains(&filter_text)
                    && !allergies.iter().any(|allergy| name.contains(allergy.as_str()))
            })
            .copied()
            .collect()
    }
}
