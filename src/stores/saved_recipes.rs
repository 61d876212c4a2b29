// ABOUTME: Saved-recipe cookbook store with append, list, and clear operations
// ABOUTME: Recipes without a title are ignored; savedAt is stamped when missing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{read_document, set_aside_corrupt, write_document};
use crate::errors::AppResult;
use async_trait::async_trait;
use chef_core::models::SavedRecipe;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// Persistence for the user's cookbook
#[async_trait]
pub trait SavedRecipeStore: Send + Sync {
    /// All saved recipes in the order they were saved
    async fn list(&self) -> AppResult<Vec<SavedRecipe>>;

    /// Append recipes and return how many were actually saved
    async fn append(&self, recipes: Vec<SavedRecipe>) -> AppResult<usize>;

    /// Remove every saved recipe
    async fn clear(&self) -> AppResult<()>;
}

/// Drop untitled recipes and stamp `saved_at`
fn prepare(recipes: Vec<SavedRecipe>) -> Vec<SavedRecipe> {
    let now = Utc::now();
    recipes
        .into_iter()
        .filter(|recipe| !recipe.title.trim().is_empty())
        .map(|mut recipe| {
            recipe.saved_at = recipe.saved_at.or(Some(now));
            recipe
        })
        .collect()
}

/// JSON file-backed cookbook
pub struct FileSavedRecipeStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSavedRecipeStore {
    /// Create a store persisting to `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Document location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the stored list; `None` when the document is corrupt
    async fn read_stored(&self) -> AppResult<Option<Vec<SavedRecipe>>> {
        let Some(contents) = read_document(&self.path).await? else {
            return Ok(Some(Vec::new()));
        };
        Ok(serde_json::from_str(&contents)
            .map_err(|e| {
                warn!(path = %self.path.display(), error = %e, "Saved recipes are corrupt, starting empty");
            })
            .ok())
    }

    async fn write_all(&self, recipes: &[SavedRecipe]) -> AppResult<()> {
        let contents = serde_json::to_vec_pretty(recipes)?;
        write_document(&self.path, &contents).await?;
        Ok(())
    }
}

#[async_trait]
impl SavedRecipeStore for FileSavedRecipeStore {
    async fn list(&self) -> AppResult<Vec<SavedRecipe>> {
        Ok(self.read_stored().await?.unwrap_or_default())
    }

    async fn append(&self, recipes: Vec<SavedRecipe>) -> AppResult<usize> {
        let additions = prepare(recipes);
        if additions.is_empty() {
            return Ok(0);
        }

        let _guard = self.write_lock.lock().await;
        let mut stored = match self.read_stored().await? {
            Some(stored) => stored,
            None => {
                set_aside_corrupt(&self.path).await;
                Vec::new()
            }
        };
        let saved = additions.len();
        stored.extend(additions);
        self.write_all(&stored).await?;
        debug!(saved, total = stored.len(), "Saved recipes to cookbook");
        Ok(saved)
    }

    async fn clear(&self) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        self.write_all(&[]).await
    }
}

/// Cookbook kept in process memory
#[derive(Default)]
pub struct InMemorySavedRecipeStore {
    recipes: RwLock<Vec<SavedRecipe>>,
}

#[async_trait]
impl SavedRecipeStore for InMemorySavedRecipeStore {
    async fn list(&self) -> AppResult<Vec<SavedRecipe>> {
        Ok(self.recipes.read().await.clone())
    }

    async fn append(&self, recipes: Vec<SavedRecipe>) -> AppResult<usize> {
        let additions = prepare(recipes);
        let saved = additions.len();
        self.recipes.write().await.extend(additions);
        Ok(saved)
    }

    async fn clear(&self) -> AppResult<()> {
        self.recipes.write().await.clear();
        Ok(())
    }
}
