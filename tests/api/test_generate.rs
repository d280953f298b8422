// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for the generation endpoint types, error mapping and upload ordering

use ai_art_node::api::{
    upload_art, ApiError, ErrorBody, GenerateArtRequest, GenerateArtResponse,
    GENERIC_FAILURE_MESSAGE,
};
use ai_art_node::diffusion::NormalizeError;
use ai_art_node::storage::{ContentStore, StorageError, UploadResult};
use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// ===== Request validation =====

#[test]
fn test_validate_accepts_well_formed_request() {
    let request = GenerateArtRequest {
        prompt: "a red fox".to_string(),
        style: "Anime".to_string(),
    };
    assert!(request.validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_prompt() {
    let request = GenerateArtRequest {
        prompt: "".to_string(),
        style: "Anime".to_string(),
    };
    assert!(request.validate().unwrap_err().contains("prompt"));
}

#[test]
fn test_validate_rejects_whitespace_style() {
    let request = GenerateArtRequest {
        prompt: "a red fox".to_string(),
        style: "   ".to_string(),
    };
    assert!(request.validate().unwrap_err().contains("style"));
}

// ===== Response assembly =====

#[test]
fn test_response_urls() {
    let response = GenerateArtResponse::new("https://ipfs.io", "QmImage", "QmMeta");
    assert_eq!(response.image_url, "https://ipfs.io/ipfs/QmImage");
    assert_eq!(response.cid, "QmMeta");
    assert_eq!(response.metadata_url, "ipfs://QmMeta");
}

#[test]
fn test_response_gateway_trailing_slash_trimmed() {
    let response = GenerateArtResponse::new("https://ipfs.io/", "QmImage", "QmMeta");
    assert_eq!(response.image_url, "https://ipfs.io/ipfs/QmImage");
}

#[test]
fn test_response_serializes_camel_case() {
    let response = GenerateArtResponse::new("https://ipfs.io", "QmImage", "QmMeta");
    let json = serde_json::to_value(&response).unwrap();
    assert!(json.get("imageUrl").is_some());
    assert!(json.get("cid").is_some());
    assert!(json.get("metadataUrl").is_some());
}

// ===== Error mapping =====

#[test]
fn test_status_codes() {
    assert_eq!(
        ApiError::InvalidRequest("x".into()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        ApiError::InferenceFailure("x".into()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        ApiError::UnsupportedResponseShape("number".into()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        ApiError::UploadFailure("x".into()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_unsupported_shape_maps_to_its_own_kind() {
    let err = ApiError::from(NormalizeError::UnsupportedShape("number".into()));
    assert!(matches!(err, ApiError::UnsupportedResponseShape(_)));
}

#[test]
fn test_storage_error_maps_to_upload_failure() {
    let err = ApiError::from(StorageError::Rejected {
        status: 502,
        body: "bad gateway".into(),
    });
    assert!(matches!(err, ApiError::UploadFailure(_)));
}

async fn response_parts(error: ApiError) -> (StatusCode, ErrorBody) {
    let response = error.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_every_pipeline_failure_collapses_to_generic_500() {
    for error in [
        ApiError::InferenceFailure("model timed out".into()),
        ApiError::UnsupportedResponseShape("number".into()),
        ApiError::UploadFailure("pin rejected".into()),
        ApiError::InternalError("oops".into()),
    ] {
        let (status, body) = response_parts(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, GENERIC_FAILURE_MESSAGE);
    }
}

#[tokio::test]
async fn test_invalid_request_keeps_its_message() {
    let (status, body) = response_parts(ApiError::InvalidRequest("prompt must not be empty".into()))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "prompt must not be empty");
}

// ===== Upload ordering =====

#[derive(Default)]
struct RecordingStore {
    fail_bytes: bool,
    fail_json: bool,
    bytes_calls: AtomicUsize,
    json_calls: AtomicUsize,
    last_json: Mutex<Option<Value>>,
}

#[async_trait]
impl ContentStore for RecordingStore {
    async fn add_bytes(
        &self,
        bytes: Vec<u8>,
        _file_name: &str,
    ) -> Result<UploadResult, StorageError> {
        self.bytes_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_bytes {
            return Err(StorageError::Rejected {
                status: 500,
                body: "image upload refused".into(),
            });
        }
        Ok(UploadResult {
            cid: format!("image-cid-{}", bytes.len()),
        })
    }

    async fn add_json(&self, value: Value) -> Result<UploadResult, StorageError> {
        self.json_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_json.lock().unwrap() = Some(value);
        if self.fail_json {
            return Err(StorageError::Rejected {
                status: 500,
                body: "metadata upload refused".into(),
            });
        }
        Ok(UploadResult {
            cid: "metadata-cid".to_string(),
        })
    }
}

#[tokio::test]
async fn test_metadata_never_uploaded_when_image_upload_fails() {
    let store = RecordingStore {
        fail_bytes: true,
        ..Default::default()
    };
    let result = upload_art(&store, &[1, 2, 3], "a red fox", "Anime").await;
    assert!(result.is_err());
    assert_eq!(store.bytes_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.json_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_metadata_embeds_image_cid() {
    let store = RecordingStore::default();
    let (image_cid, metadata_cid) = upload_art(&store, &[1, 2, 3], "a red fox", "Anime")
        .await
        .unwrap();
    assert_eq!(image_cid, "image-cid-3");
    assert_eq!(metadata_cid, "metadata-cid");

    let uploaded = store.last_json.lock().unwrap().clone().unwrap();
    assert_eq!(uploaded["image"], "ipfs://image-cid-3");
    assert_eq!(uploaded["attributes"].as_array().unwrap().len(), 3);
    assert_eq!(uploaded["attributes"][0]["value"], "Anime");
}

#[tokio::test]
async fn test_image_not_rolled_back_when_metadata_upload_fails() {
    let store = RecordingStore {
        fail_json: true,
        ..Default::default()
    };
    let result = upload_art(&store, &[1, 2, 3], "a red fox", "Anime").await;
    assert!(result.is_err());
    // Image upload already happened; the orphan is an accepted side effect
    assert_eq!(store.bytes_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.json_calls.load(Ordering::SeqCst), 1);
}
