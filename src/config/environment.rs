// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, provider credentials, cache and rate limits, and the data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment
//!
//! | Variable                            | Default                           |
//! |-------------------------------------|-----------------------------------|
//! | `PORT` / `HTTP_PORT`                | 3000                              |
//! | `HOST`                              | 0.0.0.0                           |
//! | `SPOONACULAR_API_KEY`               | unset (provider disabled)         |
//! | `SPOONACULAR_BASE_URL`              | <https://api.spoonacular.com>     |
//! | `SPOONACULAR_CACHE_TTL_SECS`        | 86400                             |
//! | `SPOONACULAR_RATE_LIMIT_PER_MINUTE` | 60                                |
//! | `SPOONACULAR_TIMEOUT_SECS`          | 10                                |
//! | `SMARTY_CHEF_DATA_DIR`              | platform data dir + `smarty-chef` |
//! | `ENVIRONMENT`                       | development                       |
//!
//! An empty `SMARTY_CHEF_DATA_DIR` selects in-memory stores.

use crate::constants::ports::DEFAULT_HTTP_PORT;
use crate::external::SpoonacularClientConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

/// Directory name created under the platform data directory
const DATA_DIR_NAME: &str = "smarty-chef";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// HTTP listen address
    pub host: IpAddr,
    /// Deployment environment
    pub environment: Environment,
    /// Log level, as reported in the summary
    pub log_level: LogLevel,
    /// Recipe provider settings
    pub spoonacular: SpoonacularClientConfig,
    /// Directory for preference and saved-recipe files; `None` keeps them in memory
    pub data_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            environment: Environment::Development,
            log_level: LogLevel::Info,
            spoonacular: SpoonacularClientConfig::default(),
            data_dir: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or address variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        let port_value = env::var("PORT")
            .or_else(|_| env::var("HTTP_PORT"))
            .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string());
        let http_port = port_value
            .parse()
            .with_context(|| format!("Invalid HTTP port: {port_value}"))?;

        let host_value = env_var_or("HOST", "0.0.0.0");
        let host = host_value
            .parse()
            .with_context(|| format!("Invalid HOST address: {host_value}"))?;

        let defaults = SpoonacularClientConfig::default();
        let spoonacular = SpoonacularClientConfig {
            api_key: env::var("SPOONACULAR_API_KEY")
                .ok()
                .map(|key| key.trim().to_owned())
                .filter(|key| !key.is_empty()),
            base_url: env_var_or("SPOONACULAR_BASE_URL", &defaults.base_url)
                .trim_end_matches('/')
                .to_owned(),
            cache_ttl_secs: parse_env("SPOONACULAR_CACHE_TTL_SECS", defaults.cache_ttl_secs)?,
            rate_limit_per_minute: parse_env(
                "SPOONACULAR_RATE_LIMIT_PER_MINUTE",
                defaults.rate_limit_per_minute,
            )?,
            request_timeout_secs: parse_env(
                "SPOONACULAR_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
        };

        let data_dir = match env::var("SMARTY_CHEF_DATA_DIR") {
            Ok(dir) if dir.trim().is_empty() => None,
            Ok(dir) => Some(PathBuf::from(dir)),
            Err(_) => dirs::data_dir().map(|dir| dir.join(DATA_DIR_NAME)),
        };

        Ok(Self {
            http_port,
            host,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            spoonacular,
            data_dir,
        })
    }

    /// Socket address the server binds to
    #[must_use]
    pub const fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Whether a provider API key is configured
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.spoonacular.api_key.is_some()
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Smarty-Chef Server Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Spoonacular API Key: {}\n\
             - Spoonacular Base URL: {}\n\
             - Cache TTL: {}s\n\
             - Rate Limit: {}/min\n\
             - Storage: {}",
            self.bind_address(),
            self.environment,
            self.log_level,
            if self.has_api_key() {
                "Configured"
            } else {
                "Missing"
            },
            self.spoonacular.base_url,
            self.spoonacular.cache_ttl_secs,
            self.spoonacular.rate_limit_per_minute,
            self.data_dir
                .as_ref()
                .map_or_else(|| "in-memory".to_owned(), |dir| dir.display().to_string()),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env::var(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {key}: {value}"))
    })
}
