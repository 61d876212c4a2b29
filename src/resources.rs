// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Bundles configuration, the recipe generator, stores, and the ingredient catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::external::{RecipeLookup, SpoonacularClient};
use crate::services::RecipeGenerator;
use crate::stores::{open_stores, PreferenceStore, SavedRecipeStore};
use chef_intelligence::IngredientCatalog;
use std::sync::Arc;

/// Long-lived handles shared across requests
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Recipe generation orchestrator
    pub generator: RecipeGenerator,
    /// Preference persistence
    pub preferences: Arc<dyn PreferenceStore>,
    /// Saved-recipe persistence
    pub saved_recipes: Arc<dyn SavedRecipeStore>,
    /// Selectable ingredient catalog
    pub catalog: &'static IngredientCatalog,
}

impl ServerResources {
    /// Assemble resources from explicit parts
    #[must_use]
    pub fn new(
        config: ServerConfig,
        lookup: Arc<dyn RecipeLookup>,
        preferences: Arc<dyn PreferenceStore>,
        saved_recipes: Arc<dyn SavedRecipeStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            generator: RecipeGenerator::new(lookup),
            preferences,
            saved_recipes,
            catalog: IngredientCatalog::builtin(),
        }
    }

    /// Build the production resources described by `config`
    #[must_use]
    pub fn from_config(config: ServerConfig) -> Self {
        let lookup: Arc<dyn RecipeLookup> =
            Arc::new(SpoonacularClient::new(config.spoonacular.clone()));
        let (preferences, saved_recipes) = open_stores(config.data_dir.as_deref());
        Self::new(config, lookup, preferences, saved_recipes)
    }

    /// The recipe lookup used by the generator
    #[must_use]
    pub fn lookup(&self) -> &Arc<dyn RecipeLookup> {
        self.generator.lookup()
    }

    /// Whether a provider API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.lookup().is_configured()
    }
}
