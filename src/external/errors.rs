// ABOUTME: Failure modes of the external recipe lookup
// ABOUTME: Every variant routes the orchestrator to the local demo corpus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Why a lookup call produced no usable data
#[derive(Debug, Error)]
pub enum LookupError {
    /// No API key was configured
    #[error("recipe lookup is not configured: {0}")]
    NotConfigured(String),
    /// Transport failure: DNS, connect, TLS, or timeout
    #[error("recipe lookup unavailable: {0}")]
    Unavailable(String),
    /// The provider answered with a non-success status
    #[error("recipe lookup failed with HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },
    /// The local request window is exhausted; no request was sent
    #[error("recipe lookup throttled locally, next slot in {retry_after_ms} ms")]
    Throttled {
        /// Time until the oldest request leaves the window
        retry_after_ms: u64,
    },
    /// The provider answered 2xx with a body that does not parse
    #[error("recipe lookup returned a malformed body: {0}")]
    Malformed(String),
}

impl LookupError {
    /// Whether the provider rejected the call for quota reasons
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            Self::Throttled { .. } | Self::Status { status: 429 | 402, .. }
        )
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Malformed(error.to_string())
        } else {
            Self::Unavailable(error.to_string())
        }
    }
}
