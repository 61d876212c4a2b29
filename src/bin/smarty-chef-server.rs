// ABOUTME: Server binary for the Smarty-Chef recipe service
// ABOUTME: Loads environment configuration, initializes logging, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Smarty-Chef Server Binary
//!
//! Starts the HTTP API. Configuration comes from the environment; see
//! `smarty_chef::config::environment` for the variables.

use anyhow::Result;
use clap::Parser;
use smarty_chef::{
    config::ServerConfig, logging, resources::ServerResources, routes::AVAILABLE_ENDPOINTS, server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "smarty-chef-server")]
#[command(about = "Smarty-Chef - ingredient-driven recipe service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;
    info!("{}", config.summary());
    if !config.has_api_key() {
        info!("SPOONACULAR_API_KEY is not set; serving demo and synthesized recipes only");
    }

    let address = config.bind_address();
    let resources = Arc::new(ServerResources::from_config(config));

    info!("Available endpoints:");
    for endpoint in AVAILABLE_ENDPOINTS {
        info!("  {endpoint}");
    }

    if let Err(e) = server::run(resources, address).await {
        error!("Server error: {e:#}");
        return Err(e);
    }
    Ok(())
}
