use anyhow::Result;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::gallery::gallery_handler;
use super::generate::generate_art_handler;
use super::styles::styles_handler;
use crate::config::ApiConfig;
use crate::diffusion::DiffusionClient;
use crate::gallery::Gallery;
use crate::storage::ContentStore;
use crate::version;

/// Shared per-process service handles. Clients are constructed once at
/// startup and injected here; requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub diffusion: Arc<DiffusionClient>,
    pub store: Arc<dyn ContentStore>,
    pub gallery: Arc<Gallery>,
    pub gateway_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn start_server(config: &ApiConfig, state: AppState) -> Result<()> {
    let app = Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Style list
        .route("/api/styles", get(styles_handler))
        // Gallery listing
        .route("/api/gallery", get(gallery_handler))
        // Generation endpoint
        .route("/api/generate", post(generate_art_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: version::VERSION_NUMBER.to_string(),
    })
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
