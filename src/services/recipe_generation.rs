// ABOUTME: Recipe generation orchestrator choosing between provider, demo corpus, and synthesis
// ABOUTME: Always answers a valid selection with a non-empty, provenance-tagged recipe list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Generation
//!
//! ```text
//! Idle -> AwaitingExternalLookup -> Filtering -> Responding
//!                 |                     ^
//!                 +-- lookup failed ----+ (local corpus)
//! ```
//!
//! - Provider success: normalize detail records, drop allergens, narrow by
//!   diet; synthesize one recipe if nothing survives.
//! - Provider failure (transport, status, malformed body, no API key): match
//!   the bundled demo corpus. The corpus is never empty so synthesis is not
//!   needed on this path.

use crate::constants::limits::MAX_DETAIL_FETCHES;
use crate::constants::messages;
use crate::errors::AppResult;
use crate::external::{LookupError, RecipeLookup};
use chef_core::models::{Provenance, Recipe, RecipeSearchHit, SelectionContext};
use chef_intelligence::{
    allergy_filter, demo_corpus, dietary_filter, normalize_record, synthesize_fallback,
    RecipeMatcher,
};
use futures_util::future::join_all;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Orchestrator phase, reported in debug logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    /// Request accepted, nothing issued yet
    Idle,
    /// Waiting on the provider search and detail fan-out
    AwaitingExternalLookup,
    /// Applying allergy, dietary, and bounding filters
    Filtering,
    /// Result assembled
    Responding,
}

impl fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::AwaitingExternalLookup => "awaiting-external-lookup",
            Self::Filtering => "filtering",
            Self::Responding => "responding",
        };
        f.write_str(name)
    }
}

/// Terminal result of one generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    /// Ordered, non-empty recipe list
    pub recipes: Vec<Recipe>,
    /// Where the recipes came from
    pub provenance: Provenance,
    /// Number of provider search hits, on the provider path
    pub total_found: Option<usize>,
    /// Number of recipes returned after filtering, on the provider path
    pub after_filtering: Option<usize>,
    /// Informational message for the user
    pub message: Option<String>,
    /// Diagnostic for a failed provider lookup
    pub error: Option<String>,
}

/// What the provider phase produced
enum LookupResult {
    Success {
        hits: Vec<RecipeSearchHit>,
        recipes: Vec<Recipe>,
    },
    Failure(LookupError),
}

/// Coordinates the provider lookup, matcher, and synthesizer
#[derive(Clone)]
pub struct RecipeGenerator {
    lookup: Arc<dyn RecipeLookup>,
    matcher: RecipeMatcher,
    max_detail_fetches: usize,
}

impl RecipeGenerator {
    /// Create a generator over the given lookup with default bounds
    #[must_use]
    pub fn new(lookup: Arc<dyn RecipeLookup>) -> Self {
        Self {
            lookup,
            matcher: RecipeMatcher::default(),
            max_detail_fetches: MAX_DETAIL_FETCHES,
        }
    }

    /// Override the local-corpus matcher
    #[must_use]
    pub fn with_matcher(mut self, matcher: RecipeMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// The lookup this generator queries
    #[must_use]
    pub fn lookup(&self) -> &Arc<dyn RecipeLookup> {
        &self.lookup
    }

    /// Produce recipes for a selection
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when the selection has no ingredients.
    /// Provider failures are never returned as errors.
    pub async fn generate(&self, selection: &SelectionContext) -> AppResult<GenerationOutcome> {
        selection.validate()?;
        debug!(phase = %GenerationPhase::Idle, ingredients = selection.selected_ingredients.len());

        debug!(phase = %GenerationPhase::AwaitingExternalLookup);
        let lookup = self.external_lookup(selection).await;

        debug!(phase = %GenerationPhase::Filtering);
        let outcome = match lookup {
            LookupResult::Success { hits, recipes } => {
                Self::filter_external(selection, &hits, recipes)
            }
            LookupResult::Failure(error) => self.local_fallback(selection, &error),
        };

        info!(
            phase = %GenerationPhase::Responding,
            provenance = %outcome.provenance,
            recipes = outcome.recipes.len(),
            total_found = ?outcome.total_found,
            "Recipe generation complete"
        );
        Ok(outcome)
    }

    async fn external_lookup(&self, selection: &SelectionContext) -> LookupResult {
        if !self.lookup.is_configured() {
            return LookupResult::Failure(LookupError::NotConfigured(
                "no recipe provider API key".into(),
            ));
        }

        let hits = match self
            .lookup
            .search_by_ingredients(&selection.selected_ingredients)
            .await
        {
            Ok(hits) => hits,
            Err(error) => return LookupResult::Failure(error),
        };
        debug!(hits = hits.len(), "Provider search returned");

        let recipes = self.fetch_details(&hits).await;
        LookupResult::Success { hits, recipes }
    }

    /// Fetch up to `max_detail_fetches` records concurrently; failures drop out
    async fn fetch_details(&self, hits: &[RecipeSearchHit]) -> Vec<Recipe> {
        let fetches = hits.iter().take(self.max_detail_fetches).map(|hit| {
            let lookup = Arc::clone(&self.lookup);
            let id = hit.id;
            async move {
                match lookup.recipe_information(id).await {
                    Ok(record) => Some(normalize_record(record)),
                    Err(error) => {
                        warn!(recipe_id = id, error = %error, "Recipe detail fetch failed");
                        None
                    }
                }
            }
        });

        join_all(fetches).await.into_iter().flatten().collect()
    }

    fn filter_external(
        selection: &SelectionContext,
        hits: &[RecipeSearchHit],
        recipes: Vec<Recipe>,
    ) -> GenerationOutcome {
        if hits.is_empty() {
            return Self::synthesized(selection, messages::NO_MATCHES_SYNTHESIZED, None);
        }

        let fetched = recipes.len();
        let safe = allergy_filter(recipes, &selection.allergies);
        let matched = dietary_filter(safe, selection.preference());
        debug!(fetched, surviving = matched.len(), "Filtered provider recipes");

        if matched.is_empty() {
            return Self::synthesized(
                selection,
                messages::FILTERED_SYNTHESIZED,
                Some(hits.len()),
            );
        }

        GenerationOutcome {
            after_filtering: Some(matched.len()),
            total_found: Some(hits.len()),
            recipes: matched,
            provenance: Provenance::External,
            message: None,
            error: None,
        }
    }

    fn local_fallback(&self, selection: &SelectionContext, error: &LookupError) -> GenerationOutcome {
        if error.is_rate_limited() {
            warn!(error = %error, "Recipe provider quota exhausted, using demo corpus");
        } else {
            warn!(error = %error, "Recipe lookup unavailable, using demo corpus");
        }
        let recipes = self.matcher.match_candidates(demo_corpus(), selection);

        GenerationOutcome {
            recipes,
            provenance: Provenance::LocalDemo,
            total_found: None,
            after_filtering: None,
            message: Some(messages::LOOKUP_UNAVAILABLE.to_owned()),
            error: Some(error.to_string()),
        }
    }

    fn synthesized(
        selection: &SelectionContext,
        message: &str,
        total_found: Option<usize>,
    ) -> GenerationOutcome {
        GenerationOutcome {
            recipes: vec![synthesize_fallback(
                &selection.selected_ingredients,
                &selection.dietary_preference,
            )],
            provenance: Provenance::Synthesized,
            after_filtering: total_found.map(|_| 1),
            total_found,
            message: Some(message.to_owned()),
            error: None,
        }
    }
}
