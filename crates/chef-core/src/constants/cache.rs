// ABOUTME: Cache-related constants for the recipe detail cache
// ABOUTME: TTL and capacity defaults for provider response caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recipe detail cache TTL (24 hours) - published recipes rarely change
pub const TTL_RECIPE_DETAILS_SECS: u64 = 86_400;

/// Maximum cached recipe detail records
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1_000;
