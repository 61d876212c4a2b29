// ABOUTME: Spoonacular API client for ingredient search and recipe detail retrieval
// ABOUTME: Implements TTL caching, sliding-window rate limiting, and a mock lookup for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Spoonacular Recipe API Client
//!
//! # Features
//! - Ingredient search (`findByIngredients`, at most 8 hits)
//! - Recipe detail retrieval (`/recipes/{id}/information`)
//! - Connectivity probe (`/recipes/random?number=1`)
//! - 24-hour caching of search and detail responses
//! - Rate limiting (60 requests per minute by default)
//! - Mock lookup for testing
//!
//! # Example
//! ```rust,no_run
//! use smarty_chef::external::{RecipeLookup, SpoonacularClient, SpoonacularClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SpoonacularClientConfig {
//!     api_key: Some("your_api_key".to_owned()),
//!     ..SpoonacularClientConfig::default()
//! };
//!
//! let client = SpoonacularClient::new(config);
//! let hits = client
//!     .search_by_ingredients(&["paneer".to_owned(), "spinach".to_owned()])
//!     .await?;
//! # Ok(())
//! # }
//! ```

use super::errors::LookupError;
use crate::constants::cache::{DEFAULT_CACHE_MAX_ENTRIES, TTL_RECIPE_DETAILS_SECS};
use crate::constants::limits::{DEFAULT_RATE_LIMIT_PER_MINUTE, MAX_SEARCH_RESULTS};
use async_trait::async_trait;
use chef_core::models::{RawRecipeRecord, RecipeSearchHit};
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Public Spoonacular endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Header carrying the remaining daily quota
const REQUESTS_REMAINING_HEADER: &str = "X-RateLimit-Requests-Remaining";

/// Separator the provider expects between search ingredients
const INGREDIENT_SEPARATOR: &str = ",+";

/// Spoonacular client configuration
#[derive(Debug, Clone)]
pub struct SpoonacularClientConfig {
    /// API key; `None` disables the provider
    pub api_key: Option<String>,
    /// Base URL without trailing slash (default: <https://api.spoonacular.com>)
    pub base_url: String,
    /// Cache TTL in seconds (default: 86400 = 24 hours)
    pub cache_ttl_secs: u64,
    /// Rate limit per minute (default: 60)
    pub rate_limit_per_minute: u32,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_secs: u64,
}

impl Default for SpoonacularClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            cache_ttl_secs: TTL_RECIPE_DETAILS_SECS,
            rate_limit_per_minute: DEFAULT_RATE_LIMIT_PER_MINUTE,
            request_timeout_secs: 10,
        }
    }
}

/// Result of a connectivity probe that reached the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// HTTP status returned by the provider
    pub status_code: u16,
    /// Remaining daily quota, when the provider reports it
    pub requests_remaining: Option<String>,
}

impl ProbeReport {
    /// Whether the probe returned a success status
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }
}

/// Source of external recipe records
#[async_trait]
pub trait RecipeLookup: Send + Sync {
    /// Whether the lookup has credentials and may be called
    fn is_configured(&self) -> bool;

    /// Find recipes that use the given ingredients (at most 8 hits)
    async fn search_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<RecipeSearchHit>, LookupError>;

    /// Fetch the full record for one search hit
    async fn recipe_information(&self, id: u64) -> Result<RawRecipeRecord, LookupError>;

    /// Check connectivity and quota without consuming a search
    async fn probe(&self) -> Result<ProbeReport, LookupError>;
}

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

/// Insert into a TTL cache, evicting expired entries and then the soonest-expiring one when full
fn insert_bounded<K, T>(cache: &mut HashMap<K, CacheEntry<T>>, key: K, entry: CacheEntry<T>)
where
    K: Eq + std::hash::Hash + Clone,
{
    if cache.len() >= DEFAULT_CACHE_MAX_ENTRIES {
        let now = Instant::now();
        cache.retain(|_, cached| cached.expires_at > now);
    }
    if cache.len() >= DEFAULT_CACHE_MAX_ENTRIES {
        if let Some(oldest) = cache
            .iter()
            .min_by_key(|(_, cached)| cached.expires_at)
            .map(|(key, _)| key.clone())
        {
            cache.remove(&oldest);
        }
    }
    cache.insert(key, entry);
}

/// Rate limiter for API requests
#[derive(Debug)]
struct RateLimiter {
    requests: Vec<Instant>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    const fn new(limit: u32, window: Duration) -> Self {
        Self {
            requests: Vec::new(),
            limit,
            window,
        }
    }

    /// Check if a request can be made, removing expired entries
    fn can_request(&mut self) -> bool {
        let now = Instant::now();
        self.requests
            .retain(|&t| now.duration_since(t) < self.window);
        self.requests.len() < self.limit.max(1) as usize
    }

    /// Time until the oldest request leaves the window
    fn time_until_slot(&self) -> Duration {
        self.requests.first().map_or(Duration::ZERO, |oldest| {
            self.window.saturating_sub(oldest.elapsed())
        })
    }

    /// Claim a slot in the window, or report how long until one frees up
    fn try_acquire(&mut self) -> Result<(), Duration> {
        if self.can_request() {
            self.requests.push(Instant::now());
            Ok(())
        } else {
            Err(self.time_until_slot())
        }
    }
}

/// Spoonacular Recipe API Client
pub struct SpoonacularClient {
    config: SpoonacularClientConfig,
    http_client: reqwest::Client,
    search_cache: Arc<RwLock<HashMap<String, CacheEntry<Vec<RecipeSearchHit>>>>>,
    details_cache: Arc<RwLock<HashMap<u64, CacheEntry<RawRecipeRecord>>>>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl SpoonacularClient {
    /// Create a new Spoonacular API client
    #[must_use]
    pub fn new(config: SpoonacularClientConfig) -> Self {
        let rate_limiter = RateLimiter::new(config.rate_limit_per_minute, Duration::from_secs(60));
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build configured HTTP client, using defaults: {e}");
                reqwest::Client::new()
            });

        Self {
            config,
            http_client,
            search_cache: Arc::new(RwLock::new(HashMap::new())),
            details_cache: Arc::new(RwLock::new(HashMap::new())),
            rate_limiter: Arc::new(RwLock::new(rate_limiter)),
        }
    }

    fn api_key(&self) -> Result<&str, LookupError> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| LookupError::NotConfigured("SPOONACULAR_API_KEY is not set".into()))
    }

    fn cache_expiry(&self) -> Instant {
        Instant::now() + Duration::from_secs(self.config.cache_ttl_secs)
    }

    /// Issue a rate-limited GET and return the raw response
    async fn send(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, LookupError> {
        let api_key = self.api_key()?;

        let acquired = self.rate_limiter.write().await.try_acquire();
        if let Err(wait) = acquired {
            debug!(wait_ms = wait.as_millis(), "Spoonacular rate limit reached");
            return Err(LookupError::Throttled {
                retry_after_ms: u64::try_from(wait.as_millis()).unwrap_or(u64::MAX),
            });
        }

        let url = format!("{}{path}", self.config.base_url);
        debug!(%url, "Calling Spoonacular");
        let response = self
            .http_client
            .get(&url)
            .query(query)
            .query(&[("apiKey", api_key)])
            .send()
            .await?;
        Ok(response)
    }

    /// GET a JSON document, mapping non-2xx and parse failures
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, LookupError> {
        let response = self.send(path, query).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| LookupError::Malformed(e.to_string()))
    }

    /// Clear all caches (useful for testing)
    pub async fn clear_caches(&self) {
        self.search_cache.write().await.clear();
        self.details_cache.write().await.clear();
    }

    /// Get cache statistics as (search entries, detail entries)
    pub async fn cache_stats(&self) -> (usize, usize) {
        let search_count = self.search_cache.read().await.len();
        let details_count = self.details_cache.read().await.len();
        (search_count, details_count)
    }
}

#[async_trait]
impl RecipeLookup for SpoonacularClient {
    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn search_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<RecipeSearchHit>, LookupError> {
        let joined = ingredients.join(INGREDIENT_SEPARATOR);

        // Check cache first
        let cache_key = joined.to_lowercase();
        {
            let cache = self.search_cache.read().await;
            if let Some(entry) = cache.get(&cache_key) {
                if Instant::now() < entry.expires_at {
                    debug!(ingredients = %joined, "Search served from cache");
                    return Ok(entry.data.clone());
                }
            }
        }

        let mut hits: Vec<RecipeSearchHit> = self
            .get_json(
                "/recipes/findByIngredients",
                &[
                    ("ingredients", joined),
                    ("number", MAX_SEARCH_RESULTS.to_string()),
                    ("ranking", "2".to_owned()),
                    ("ignorePantry", "true".to_owned()),
                ],
            )
            .await?;
        hits.truncate(MAX_SEARCH_RESULTS);

        insert_bounded(
            &mut *self.search_cache.write().await,
            cache_key,
            CacheEntry {
                data: hits.clone(),
                expires_at: self.cache_expiry(),
            },
        );

        Ok(hits)
    }

    async fn recipe_information(&self, id: u64) -> Result<RawRecipeRecord, LookupError> {
        // Check cache first
        {
            let cache = self.details_cache.read().await;
            if let Some(entry) = cache.get(&id) {
                if Instant::now() < entry.expires_at {
                    debug!(recipe_id = id, "Recipe detail served from cache");
                    return Ok(entry.data.clone());
                }
            }
        }

        let record: RawRecipeRecord = self
            .get_json(
                &format!("/recipes/{id}/information"),
                &[("includeNutrition", "false".to_owned())],
            )
            .await?;

        insert_bounded(
            &mut *self.details_cache.write().await,
            id,
            CacheEntry {
                data: record.clone(),
                expires_at: self.cache_expiry(),
            },
        );

        Ok(record)
    }

    async fn probe(&self) -> Result<ProbeReport, LookupError> {
        let response = self
            .send("/recipes/random", &[("number", "1".to_owned())])
            .await?;

        Ok(ProbeReport {
            status_code: response.status().as_u16(),
            requests_remaining: response
                .headers()
                .get(REQUESTS_REMAINING_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned),
        })
    }
}

/// Mock recipe lookup for testing (no API calls)
///
/// Search returns every stored record in insertion order; detail calls for ids
/// marked as failing return [`LookupError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct MockRecipeLookup {
    records: Vec<RawRecipeRecord>,
    failing_details: HashSet<u64>,
    search_failure: Option<u16>,
    unconfigured: bool,
}

impl MockRecipeLookup {
    /// Create a mock serving the given records
    ///
    /// Records without an id are assigned their position (starting at 1).
    #[must_use]
    pub fn with_records(records: Vec<RawRecipeRecord>) -> Self {
        let records = records
            .into_iter()
            .zip(1_u64..)
            .map(|(mut record, position)| {
                record.id = record.id.or(Some(position));
                record
            })
            .collect();
        Self {
            records,
            ..Self::default()
        }
    }

    /// Create a mock whose search always fails with the given HTTP status
    #[must_use]
    pub fn failing(status: u16) -> Self {
        Self {
            search_failure: Some(status),
            ..Self::default()
        }
    }

    /// Create a mock that reports no API key
    #[must_use]
    pub fn unconfigured() -> Self {
        Self {
            unconfigured: true,
            ..Self::default()
        }
    }

    /// Make detail calls for `id` fail
    #[must_use]
    pub fn with_failing_detail(mut self, id: u64) -> Self {
        self.failing_details.insert(id);
        self
    }
}

#[async_trait]
impl RecipeLookup for MockRecipeLookup {
    fn is_configured(&self) -> bool {
        !self.unconfigured
    }

    async fn search_by_ingredients(
        &self,
        _ingredients: &[String],
    ) -> Result<Vec<RecipeSearchHit>, LookupError> {
        if self.unconfigured {
            return Err(LookupError::NotConfigured("mock has no API key".into()));
        }
        if let Some(status) = self.search_failure {
            return Err(LookupError::Status {
                status,
                body: "mock search failure".into(),
            });
        }

        Ok(self
            .records
            .iter()
            .filter_map(|record| {
                Some(RecipeSearchHit {
                    id: record.id?,
                    title: record.title.clone(),
                    used_ingredient_count: None,
                    missed_ingredient_count: None,
                })
            })
            .take(MAX_SEARCH_RESULTS)
            .collect())
    }

    async fn recipe_information(&self, id: u64) -> Result<RawRecipeRecord, LookupError> {
        if self.failing_details.contains(&id) {
            return Err(LookupError::Unavailable(format!(
                "mock detail failure for {id}"
            )));
        }
        self.records
            .iter()
            .find(|record| record.id == Some(id))
            .cloned()
            .ok_or(LookupError::Status {
                status: 404,
                body: format!("recipe {id} not found"),
            })
    }

    async fn probe(&self) -> Result<ProbeReport, LookupError> {
        if self.unconfigured {
            return Err(LookupError::NotConfigured("mock has no API key".into()));
        }
        Ok(ProbeReport {
            status_code: self.search_failure.unwrap_or(200),
            requests_remaining: Some("150".to_owned()),
        })
    }
}
