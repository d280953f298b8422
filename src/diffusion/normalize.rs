// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Normalization of heterogeneous inference responses into image bytes

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bytes::Bytes;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Errors raised while normalizing an inference response
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The response matched none of the recognized shapes. New upstream
    /// shapes must fail loudly here rather than silently produce corrupt
    /// bytes.
    #[error("unsupported inference response shape: {0}")]
    UnsupportedShape(String),

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("failed to read response bytes: {0}")]
    SourceRead(String),
}

/// An asynchronously resolvable byte buffer, the Blob analog of the
/// upstream API. Consumed exactly once.
#[async_trait]
pub trait ByteSource: Send {
    async fn read_all(self: Box<Self>) -> Result<Bytes, NormalizeError>;
}

/// The opaque result of an inference call, tagged by observed shape.
///
/// The upstream API's response shape is not statically known; this union
/// covers every shape it has been observed to produce.
pub enum InferenceOutput {
    /// A textual payload: bare base64 or a data URI with a `base64,` marker
    Text(String),
    /// An async byte accessor (body not yet read)
    Stream(Box<dyn ByteSource>),
    /// Already-buffered raw bytes
    Raw(Bytes),
    /// Any other JSON value; only an object carrying a byte array under
    /// `data` is usable
    Json(Value),
}

impl InferenceOutput {
    /// Short shape name for logging
    pub fn shape(&self) -> &'static str {
        match self {
            InferenceOutput::Text(_) => "text",
            InferenceOutput::Stream(_) => "stream",
            InferenceOutput::Raw(_) => "raw",
            InferenceOutput::Json(_) => "json",
        }
    }
}

impl fmt::Debug for InferenceOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InferenceOutput").field(&self.shape()).finish()
    }
}

/// Convert an [`InferenceOutput`] into raw image bytes.
///
/// Shape checks apply in a fixed priority order, stopping at the first
/// match: text, async accessor, raw bytes, `data` field, error. Textual and
/// accessor shapes must be ruled out before the generic `data`-field check
/// so they are never misclassified.
pub async fn normalize(output: InferenceOutput) -> Result<Bytes, NormalizeError> {
    match output {
        InferenceOutput::Text(s) => {
            // A data URI carries its payload after the first `base64,`;
            // anything else is decoded as-is
            let payload = match s.find("base64,") {
                Some(idx) => &s[idx + "base64,".len()..],
                None => s.as_str(),
            };
            let decoded = BASE64.decode(payload.trim())?;
            Ok(Bytes::from(decoded))
        }
        InferenceOutput::Stream(source) => source.read_all().await,
        InferenceOutput::Raw(bytes) => Ok(bytes),
        InferenceOutput::Json(value) => {
            if let Some(field) = value.get("data") {
                return match byte_array(field) {
                    Some(data) => Ok(Bytes::from(data)),
                    None => Err(NormalizeError::UnsupportedShape(
                        "object with a non-byte `data` field".to_string(),
                    )),
                };
            }
            Err(NormalizeError::UnsupportedShape(json_shape(&value)))
        }
    }
}

/// Interpret a JSON value as a byte array, if every element fits in a u8
fn byte_array(value: &Value) -> Option<Vec<u8>> {
    let arr = value.as_array()?;
    arr.iter()
        .map(|v| v.as_u64().and_then(|n| u8::try_from(n).ok()))
        .collect()
}

fn json_shape(value: &Value) -> String {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object without a `data` field",
    };
    kind.to_string()
}
