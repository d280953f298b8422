// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration assembled from environment variables

use anyhow::{anyhow, Context, Result};
use std::env;
use std::str::FromStr;
use url::Url;

use crate::diffusion::client::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Default IPFS HTTP API endpoint (Infura-hosted node)
pub const DEFAULT_IPFS_API_URL: &str = "https://ipfs.infura.io:5001";

/// Default public gateway used to build display URLs
pub const DEFAULT_GATEWAY_URL: &str = "https://ipfs.io";

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
}

/// Inference API configuration
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub endpoint: String,
    pub model: String,
    pub token: String,
}

/// Which content-addressed storage backend to upload to.
///
/// The deployment choice between a raw IPFS HTTP API node and a pinning
/// service is explicit configuration, never picked silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    IpfsApi,
    Pinata,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ipfs" | "ipfs-api" => Ok(StorageBackend::IpfsApi),
            "pinata" => Ok(StorageBackend::Pinata),
            other => Err(format!(
                "unknown storage backend '{}'; expected 'ipfs' or 'pinata'",
                other
            )),
        }
    }
}

/// Content storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub ipfs_api_url: String,
    pub pinata_jwt: Option<String>,
    pub gateway_url: String,
}

/// Full node configuration
#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub api: ApiConfig,
    pub inference: InferenceConfig,
    pub storage: StorageConfig,
}

impl NodeConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Result<Self> {
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("invalid API_PORT")?;

        let token = env::var("HUGGING_FACE_TOKEN")
            .map_err(|_| anyhow!("HUGGING_FACE_TOKEN must be set"))?;
        let endpoint =
            env::var("INFERENCE_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let model = env::var("DIFFUSION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let backend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "ipfs".to_string())
            .parse::<StorageBackend>()
            .map_err(|e| anyhow!(e))?;
        let ipfs_api_url =
            env::var("IPFS_API_URL").unwrap_or_else(|_| DEFAULT_IPFS_API_URL.to_string());
        let pinata_jwt = env::var("PINATA_JWT").ok();
        let gateway_url =
            env::var("IPFS_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());

        let config = Self {
            api: ApiConfig { port },
            inference: InferenceConfig {
                endpoint,
                model,
                token,
            },
            storage: StorageConfig {
                backend,
                ipfs_api_url,
                pinata_jwt,
                gateway_url,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate field values; called once at startup
    pub fn validate(&self) -> Result<()> {
        if self.inference.token.trim().is_empty() {
            return Err(anyhow!("HUGGING_FACE_TOKEN must not be empty"));
        }
        Url::parse(&self.inference.endpoint)
            .with_context(|| format!("invalid INFERENCE_ENDPOINT '{}'", self.inference.endpoint))?;
        Url::parse(&self.storage.ipfs_api_url)
            .with_context(|| format!("invalid IPFS_API_URL '{}'", self.storage.ipfs_api_url))?;
        Url::parse(&self.storage.gateway_url)
            .with_context(|| format!("invalid IPFS_GATEWAY_URL '{}'", self.storage.gateway_url))?;

        if self.storage.backend == StorageBackend::Pinata {
            let has_jwt = self
                .storage
                .pinata_jwt
                .as_deref()
                .map(|jwt| !jwt.trim().is_empty())
                .unwrap_or(false);
            if !has_jwt {
                return Err(anyhow!("PINATA_JWT must be set when STORAGE_BACKEND=pinata"));
            }
        }
        Ok(())
    }
}
