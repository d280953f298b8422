// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use ai_art_node::{
    api::http_server::{start_server, AppState},
    config::NodeConfig,
    diffusion::DiffusionClient,
    gallery::Gallery,
    storage::build_store,
    version,
};
use anyhow::Result;
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    tracing::info!("Starting {}", version::get_version_string());

    let config = NodeConfig::from_env()?;

    let diffusion = Arc::new(DiffusionClient::new(
        &config.inference.endpoint,
        &config.inference.model,
        &config.inference.token,
    )?);
    let store = build_store(&config.storage)?;
    let gallery = Arc::new(Gallery::curated());

    let state = AppState {
        diffusion,
        store,
        gallery,
        gateway_url: config.storage.gateway_url.trim_end_matches('/').to_string(),
    };

    start_server(&config.api, state).await
}
