// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Raw IPFS HTTP API backend (`/api/v0/add`)

use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::{ContentStore, StorageError, UploadResult};

/// Client for an IPFS-HTTP-API-compatible node
pub struct IpfsApiStore {
    client: Client,
    api_url: String,
}

impl IpfsApiStore {
    /// Create a new store pointed at an IPFS HTTP API endpoint
    pub fn new(api_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Parse an `add` response line like
    /// `{"Name":"art.png","Hash":"Qm...","Size":"123"}`
    pub fn parse_add_response(text: &str) -> Result<UploadResult, StorageError> {
        let json: Value = serde_json::from_str(text)
            .map_err(|_| StorageError::UnexpectedResponse(text.to_string()))?;
        json.get("Hash")
            .and_then(Value::as_str)
            .map(|hash| UploadResult {
                cid: hash.to_string(),
            })
            .ok_or_else(|| StorageError::UnexpectedResponse(text.to_string()))
    }
}

#[async_trait]
impl ContentStore for IpfsApiStore {
    async fn add_bytes(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<UploadResult, StorageError> {
        let url = format!("{}/api/v0/add", self.api_url);
        debug!("IPFS add POST {} ({} bytes)", url, bytes.len());

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Rejected { status, body });
        }

        let text = response.text().await?;
        Self::parse_add_response(&text)
    }

    async fn add_json(&self, value: Value) -> Result<UploadResult, StorageError> {
        let bytes = serde_json::to_vec(&value)?;
        self.add_bytes(bytes, "metadata.json").await
    }
}
