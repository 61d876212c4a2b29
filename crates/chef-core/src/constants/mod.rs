// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for matching limits, recipe defaults, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Cache-related constants (TTL, capacity)
pub mod cache;

/// Service identity used in logs and health responses
pub mod service_names {
    /// Service name for structured logging
    pub const SMARTY_CHEF_SERVER: &str = "smarty-chef-server";
    /// Display name of the external recipe provider
    pub const SPOONACULAR: &str = "Spoonacular";
    /// `apiSource` value reported when results did not come from the provider
    pub const FALLBACK: &str = "Fallback";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 3000;
}

/// Result-size limits for matching and external lookups
pub mod limits {
    /// Maximum recipes requested from the provider search
    pub const MAX_SEARCH_RESULTS: usize = 8;
    /// Maximum detail fetches issued per request
    pub const MAX_DETAIL_FETCHES: usize = 5;
    /// Maximum recipes returned from the bundled demo corpus
    pub const LOCAL_RESULT_LIMIT: usize = 3;
    /// Maximum description length (in characters) before the ellipsis
    pub const DESCRIPTION_MAX_CHARS: usize = 200;
    /// Default provider requests allowed per minute
    pub const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 60;
}

/// Default values for recipe fields
pub mod recipe_defaults {
    /// Title used when an external record has none
    pub const TITLE: &str = "Delicious Recipe";
    /// Description used when an external record has no summary
    pub const DESCRIPTION: &str = "A delicious recipe made with your selected ingredients.";
    /// Category used when no dish type is known
    pub const CATEGORY: &str = "Main Course";
    /// Marker appended to truncated descriptions
    pub const ELLIPSIS: &str = "...";
}

/// Labels derived from provider boolean flags, in emission order
pub mod dietary_labels {
    /// Vegetarian flag label
    pub const VEGETARIAN: &str = "Vegetarian";
    /// Vegan flag label
    pub const VEGAN: &str = "Vegan";
    /// Gluten-free flag label
    pub const GLUTEN_FREE: &str = "Gluten-Free";
    /// Dairy-free flag label
    pub const DAIRY_FREE: &str = "Dairy-Free";
    /// Very-healthy flag label
    pub const HEALTHY: &str = "Healthy";
    /// Label given to synthesized recipes when no preference was supplied
    pub const HOMEMADE: &str = "Homemade";
}

/// User-facing messages
pub mod messages {
    /// Rejection message for requests without ingredients
    pub const NO_INGREDIENTS: &str = "Please provide at least one ingredient";
    /// Message when the provider had no candidates and a recipe was synthesized
    pub const NO_MATCHES_SYNTHESIZED: &str = "No matches found, showing custom recipe";
    /// Message when filtering removed every provider candidate
    pub const FILTERED_SYNTHESIZED: &str =
        "No recipes matched your preferences, showing custom recipe";
    /// Message when the provider was unavailable
    pub const LOOKUP_UNAVAILABLE: &str = "API unavailable, showing demo recipes";
}
