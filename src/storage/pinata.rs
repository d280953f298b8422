// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pinata pinning-service backend (`pinFileToIPFS` / `pinJSONToIPFS`)

use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use super::{ContentStore, StorageError, UploadResult};

/// Pinata API base URL
pub const PINATA_API_BASE: &str = "https://api.pinata.cloud";

/// Client for the Pinata pinning-service HTTP API
pub struct PinataStore {
    client: Client,
    base_url: String,
    jwt: String,
}

impl PinataStore {
    /// Create a new store authenticated with a Pinata JWT
    pub fn new(jwt: &str) -> Result<Self> {
        Self::with_base_url(PINATA_API_BASE, jwt)
    }

    /// Create a store against a non-default API base (used by tests)
    pub fn with_base_url(base_url: &str, jwt: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            jwt: jwt.to_string(),
        })
    }

    /// Parse a pinning response like `{"IpfsHash":"Qm...","PinSize":123}`
    pub fn parse_pin_response(text: &str) -> Result<UploadResult, StorageError> {
        let json: Value = serde_json::from_str(text)
            .map_err(|_| StorageError::UnexpectedResponse(text.to_string()))?;
        json.get("IpfsHash")
            .and_then(Value::as_str)
            .map(|hash| UploadResult {
                cid: hash.to_string(),
            })
            .ok_or_else(|| StorageError::UnexpectedResponse(text.to_string()))
    }
}

#[async_trait]
impl ContentStore for PinataStore {
    async fn add_bytes(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<UploadResult, StorageError> {
        let url = format!("{}/pinning/pinFileToIPFS", self.base_url);
        debug!("Pinata pinFileToIPFS POST {} ({} bytes)", url, bytes.len());

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.jwt)
            .multipart(form)
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Rejected { status, body });
        }

        let text = response.text().await?;
        Self::parse_pin_response(&text)
    }

    async fn add_json(&self, value: Value) -> Result<UploadResult, StorageError> {
        let url = format!("{}/pinning/pinJSONToIPFS", self.base_url);
        debug!("Pinata pinJSONToIPFS POST {}", url);

        let body = json!({ "pinataContent": value });
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.jwt)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Rejected { status, body });
        }

        let text = response.text().await?;
        Self::parse_pin_response(&text)
    }
}
