// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diffusion::NormalizeError;
use crate::storage::StorageError;

/// The single generic message surfaced to callers for every pipeline
/// failure. Upstream error text is logged server-side only, never leaked.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate art";

/// JSON error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error taxonomy for the generation endpoint.
///
/// Only `InvalidRequest` is a client error; every other kind collapses to
/// an identical generic 500 at the response boundary. No kind is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("inference failed: {0}")]
    InferenceFailure(String),

    #[error("unsupported inference response shape: {0}")]
    UnsupportedResponseShape(String),

    #[error("upload failed: {0}")]
    UploadFailure(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InferenceFailure(_)
            | ApiError::UnsupportedResponseShape(_)
            | ApiError::UploadFailure(_)
            | ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message surfaced to the caller
    pub fn public_message(&self) -> String {
        match self {
            ApiError::InvalidRequest(msg) => msg.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<NormalizeError> for ApiError {
    fn from(err: NormalizeError) -> Self {
        match err {
            NormalizeError::UnsupportedShape(shape) => ApiError::UnsupportedResponseShape(shape),
            other => ApiError::InferenceFailure(other.to_string()),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::UploadFailure(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
