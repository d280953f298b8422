// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Client for a hosted text-to-image diffusion API

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::normalize::{ByteSource, InferenceOutput, NormalizeError};

/// Default hosted inference endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co";

/// Default diffusion model identifier
pub const DEFAULT_MODEL: &str = "stabilityai/stable-diffusion-2-1";

/// Fixed negative prompt sent with every generation
pub const NEGATIVE_PROMPT: &str = "blurry, low quality, distorted";

/// Fixed inference step count
pub const NUM_INFERENCE_STEPS: u32 = 30;

/// Fixed classifier-free guidance scale
pub const GUIDANCE_SCALE: f32 = 7.5;

/// Quality-boosting suffix appended to every composed prompt
pub const PROMPT_SUFFIX: &str = "masterpiece, high quality";

/// Compose the final inference prompt from the user prompt and style
pub fn compose_prompt(prompt: &str, style: &str) -> String {
    format!("{}, {} style, {}", prompt, style, PROMPT_SUFFIX)
}

/// Fixed sampling parameters sent with every request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceParameters {
    pub negative_prompt: String,
    pub num_inference_steps: u32,
    pub guidance_scale: f32,
}

impl Default for InferenceParameters {
    fn default() -> Self {
        Self {
            negative_prompt: NEGATIVE_PROMPT.to_string(),
            num_inference_steps: NUM_INFERENCE_STEPS,
            guidance_scale: GUIDANCE_SCALE,
        }
    }
}

/// Request body for the hosted inference API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequestBody {
    pub inputs: String,
    pub parameters: InferenceParameters,
}

/// Client for calling a hosted diffusion model over HTTP
pub struct DiffusionClient {
    client: Client,
    endpoint: String,
    model: String,
    token: String,
}

impl DiffusionClient {
    /// Create a new DiffusionClient
    pub fn new(endpoint: &str, model: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!(
            "Diffusion client configured: endpoint={}, model={}",
            endpoint, model
        );

        Ok(Self {
            client,
            endpoint,
            model: model.to_string(),
            token: token.to_string(),
        })
    }

    /// Get the model identifier
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Generate an image for the given prompt and style.
    ///
    /// Exactly one request per invocation, no retry; any error propagates
    /// to the caller. The response body is captured as an [`InferenceOutput`]
    /// without committing to a shape; normalization happens separately.
    pub async fn generate(&self, prompt: &str, style: &str) -> Result<InferenceOutput> {
        let body = InferenceRequestBody {
            inputs: compose_prompt(prompt, style),
            parameters: InferenceParameters::default(),
        };

        let url = format!("{}/models/{}", self.endpoint, self.model);
        debug!("Diffusion generate POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "inference API returned {}: {}",
                status,
                text
            ));
        }

        capture_output(response).await
    }
}

/// Capture the upstream response as an [`InferenceOutput`].
///
/// The upstream contract is loose: the body may be raw image bytes, a JSON
/// string (bare base64 or a data URI), or a JSON object wrapping bytes. The
/// shape is recorded here; deciding what to do with it is the normalizer's
/// job so the priority order lives in one place.
async fn capture_output(response: Response) -> Result<InferenceOutput> {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();

    if content_type.starts_with("image/") {
        // Defer the body read; the normalizer drains the source
        return Ok(InferenceOutput::Stream(Box::new(ResponseByteSource::new(
            response,
        ))));
    }
    if content_type.starts_with("application/octet-stream") {
        return Ok(InferenceOutput::Raw(response.bytes().await?));
    }

    let text = response.text().await?;
    Ok(match serde_json::from_str::<Value>(&text) {
        Ok(Value::String(s)) => InferenceOutput::Text(s),
        Ok(value) => InferenceOutput::Json(value),
        // Not JSON at all: treat as a bare textual payload
        Err(_) => InferenceOutput::Text(text),
    })
}

/// Byte source backed by an un-read HTTP response body
struct ResponseByteSource {
    response: Response,
}

impl ResponseByteSource {
    fn new(response: Response) -> Self {
        Self { response }
    }
}

#[async_trait]
impl ByteSource for ResponseByteSource {
    async fn read_all(self: Box<Self>) -> Result<Bytes, NormalizeError> {
        self.response
            .bytes()
            .await
            .map_err(|e| NormalizeError::SourceRead(e.to_string()))
    }
}
