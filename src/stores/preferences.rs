// ABOUTME: Preference store holding the user's selected ingredients and allergies
// ABOUTME: Loads defaults for a missing or corrupt document and stamps lastUsed on save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{read_document, set_aside_corrupt, write_document};
use crate::errors::AppResult;
use async_trait::async_trait;
use chef_core::models::UserPreferences;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// Persistence for [`UserPreferences`]
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read the stored preferences, or defaults when nothing usable is stored
    async fn load(&self) -> AppResult<UserPreferences>;

    /// Replace the stored preferences and return them with `lastUsed` stamped
    async fn save(&self, preferences: &UserPreferences) -> AppResult<UserPreferences>;
}

fn stamped(preferences: &UserPreferences) -> UserPreferences {
    UserPreferences {
        last_used: Some(Utc::now()),
        ..preferences.clone()
    }
}

/// JSON file-backed preference store
pub struct FilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
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
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn load(&self) -> AppResult<UserPreferences> {
        let Some(contents) = read_document(&self.path).await? else {
            debug!(path = %self.path.display(), "No stored preferences, using defaults");
            return Ok(UserPreferences::default());
        };

        match serde_json::from_str(&contents) {
            Ok(preferences) => Ok(preferences),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Stored preferences are corrupt, using defaults");
                let _guard = self.write_lock.lock().await;
                set_aside_corrupt(&self.path).await;
                Ok(UserPreferences::default())
            }
        }
    }

    async fn save(&self, preferences: &UserPreferences) -> AppResult<UserPreferences> {
        let stamped = stamped(preferences);
        let contents = serde_json::to_vec_pretty(&stamped)?;

        let _guard = self.write_lock.lock().await;
        write_document(&self.path, &contents).await?;
        debug!(
            path = %self.path.display(),
            ingredients = stamped.selected_ingredients.len(),
            allergies = stamped.allergies.len(),
            "Saved preferences"
        );
        Ok(stamped)
    }
}

/// Preference store kept in process memory
#[derive(Default)]
pub struct InMemoryPreferenceStore {
    preferences: RwLock<UserPreferences>,
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn load(&self) -> AppResult<UserPreferences> {
        Ok(self.preferences.read().await.clone())
    }

    async fn save(&self, preferences: &UserPreferences) -> AppResult<UserPreferences> {
        let stamped = stamped(preferences);
        *self.preferences.write().await = stamped.clone();
        Ok(stamped)
    }
}
