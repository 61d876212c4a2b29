// ABOUTME: Integration tests for environment-driven server configuration
// ABOUTME: Serialized because each test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use smarty_chef::config::{Environment, LogLevel, ServerConfig};
use std::env;
use std::path::PathBuf;

const MANAGED_VARS: [&str; 11] = [
    "PORT",
    "HTTP_PORT",
    "HOST",
    "SPOONACULAR_API_KEY",
    "SPOONACULAR_BASE_URL",
    "SPOONACULAR_CACHE_TTL_SECS",
    "SPOONACULAR_RATE_LIMIT_PER_MINUTE",
    "SPOONACULAR_TIMEOUT_SECS",
    "SMARTY_CHEF_DATA_DIR",
    "ENVIRONMENT",
    "RUST_LOG",
];

fn clear_env() {
    for var in MANAGED_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.bind_address().to_string(), "0.0.0.0:3000");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(!config.has_api_key());
    assert_eq!(config.spoonacular.base_url, "https://api.spoonacular.com");
    assert_eq!(config.spoonacular.cache_ttl_secs, 86_400);
}

#[test]
#[serial]
fn test_port_prefers_port_over_http_port() {
    clear_env();
    env::set_var("HTTP_PORT", "8080");
    assert_eq!(ServerConfig::from_env().unwrap().http_port, 8080);

    env::set_var("PORT", "9090");
    assert_eq!(ServerConfig::from_env().unwrap().http_port, 9090);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_port_is_an_error() {
    clear_env();
    env::set_var("PORT", "not-a-port");

    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("Invalid HTTP port"));
    clear_env();
}

#[test]
#[serial]
fn test_api_key_is_trimmed_and_blank_is_missing() {
    clear_env();
    env::set_var("SPOONACULAR_API_KEY", "  abc123 \n");
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.spoonacular.api_key.as_deref(), Some("abc123"));
    assert!(config.has_api_key());

    env::set_var("SPOONACULAR_API_KEY", "   ");
    assert!(!ServerConfig::from_env().unwrap().has_api_key());
    clear_env();
}

#[test]
#[serial]
fn test_provider_overrides() {
    clear_env();
    env::set_var("SPOONACULAR_BASE_URL", "http://127.0.0.1:9999/");
    env::set_var("SPOONACULAR_CACHE_TTL_SECS", "60");
    env::set_var("SPOONACULAR_RATE_LIMIT_PER_MINUTE", "5");
    env::set_var("SPOONACULAR_TIMEOUT_SECS", "2");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.spoonacular.base_url, "http://127.0.0.1:9999");
    assert_eq!(config.spoonacular.cache_ttl_secs, 60);
    assert_eq!(config.spoonacular.rate_limit_per_minute, 5);
    assert_eq!(config.spoonacular.request_timeout_secs, 2);

    env::set_var("SPOONACULAR_CACHE_TTL_SECS", "a day");
    assert!(ServerConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_data_dir_selection() {
    clear_env();
    env::set_var("SMARTY_CHEF_DATA_DIR", "/tmp/smarty-chef-test");
    assert_eq!(
        ServerConfig::from_env().unwrap().data_dir,
        Some(PathBuf::from("/tmp/smarty-chef-test"))
    );

    env::set_var("SMARTY_CHEF_DATA_DIR", "");
    assert_eq!(ServerConfig::from_env().unwrap().data_dir, None);
    clear_env();
}

#[test]
#[serial]
fn test_environment_and_log_level() {
    clear_env();
    env::set_var("ENVIRONMENT", "prod");
    env::set_var("RUST_LOG", "DEBUG");

    let config = ServerConfig::from_env().unwrap();
    assert!(config.environment.is_production());
    assert_eq!(config.log_level, LogLevel::Debug);
    clear_env();
}

#[test]
#[serial]
fn test_summary_hides_api_key() {
    clear_env();
    env::set_var("SPOONACULAR_API_KEY", "super-secret-key");
    env::set_var("SMARTY_CHEF_DATA_DIR", "");

    let summary = ServerConfig::from_env().unwrap().summary();
    assert!(summary.contains("Spoonacular API Key: Configured"));
    assert!(summary.contains("Storage: in-memory"));
    assert!(!summary.contains("super-secret-key"));
    clear_env();
}
