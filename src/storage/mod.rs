// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Content-addressed storage backends

pub mod ipfs_client;
pub mod pinata;

pub use ipfs_client::IpfsApiStore;
pub use pinata::PinataStore;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::config::{StorageBackend, StorageConfig};

/// Identifier of one uploaded object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub cid: String,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("storage endpoint returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("unexpected storage response: {0}")]
    UnexpectedResponse(String),

    #[error("failed to encode metadata: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A remote store that accepts content and returns its CID.
///
/// Each call either succeeds with a content identifier or fails the whole
/// request; there is no partial-success state and no rollback of earlier
/// uploads.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Upload raw bytes, returning the content identifier
    async fn add_bytes(&self, bytes: Vec<u8>, file_name: &str)
        -> Result<UploadResult, StorageError>;

    /// Upload a JSON document, returning the content identifier
    async fn add_json(&self, value: serde_json::Value) -> Result<UploadResult, StorageError>;
}

/// Construct the configured storage backend
pub fn build_store(config: &StorageConfig) -> Result<Arc<dyn ContentStore>> {
    match config.backend {
        StorageBackend::IpfsApi => Ok(Arc::new(IpfsApiStore::new(&config.ipfs_api_url)?)),
        StorageBackend::Pinata => {
            let jwt = config
                .pinata_jwt
                .as_deref()
                .ok_or_else(|| anyhow!("PINATA_JWT is required for the pinata backend"))?;
            Ok(Arc::new(PinataStore::new(jwt)?))
        }
    }
}
