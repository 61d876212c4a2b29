// ABOUTME: Local persistence for user preferences and saved recipes
// ABOUTME: File-backed JSON stores with in-memory counterparts behind async traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Local stores
//!
//! Both stores are single-writer, last-write-wins key-value documents. The
//! file-backed variants serialize writes behind an async mutex.

/// Ingredient and allergy preferences
pub mod preferences;
/// Saved-recipe cookbook
pub mod saved_recipes;

pub use preferences::{FilePreferenceStore, InMemoryPreferenceStore, PreferenceStore};
pub use saved_recipes::{FileSavedRecipeStore, InMemorySavedRecipeStore, SavedRecipeStore};

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// File name of the preference document inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.json";
/// File name of the saved-recipe document inside the data directory
pub const SAVED_RECIPES_FILE: &str = "saved-recipes.json";

/// Open both stores under `data_dir`, or in memory when no directory is given
#[must_use]
pub fn open_stores(
    data_dir: Option<&Path>,
) -> (Arc<dyn PreferenceStore>, Arc<dyn SavedRecipeStore>) {
    match data_dir {
        Some(dir) => (
            Arc::new(FilePreferenceStore::new(dir.join(PREFERENCES_FILE))),
            Arc::new(FileSavedRecipeStore::new(dir.join(SAVED_RECIPES_FILE))),
        ),
        None => (
            Arc::new(InMemoryPreferenceStore::default()),
            Arc::new(InMemorySavedRecipeStore::default()),
        ),
    }
}

/// `path` with `suffix` appended to its file name
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// Write `contents` to a temporary sibling and rename it over `path`
///
/// Parent directories are created first. Readers see either the old or the
/// new document, never a partial one.
async fn write_document(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let staging = sibling(path, ".tmp");
    tokio::fs::write(&staging, contents).await?;
    tokio::fs::rename(&staging, path).await
}

/// Move an unreadable document to `<name>.corrupt` so the next write cannot destroy it
async fn set_aside_corrupt(path: &Path) {
    let target = sibling(path, ".corrupt");
    match tokio::fs::rename(path, &target).await {
        Ok(()) => warn!(path = %path.display(), kept_at = %target.display(), "Corrupt document set aside"),
        Err(error) => warn!(path = %path.display(), error = %error, "Failed to set aside corrupt document"),
    }
}

/// Read `path`, treating a missing file as `None`
async fn read_document(path: &Path) -> std::io::Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error),
    }
}
