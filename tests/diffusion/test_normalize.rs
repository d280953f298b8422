// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for inference response normalization

use ai_art_node::diffusion::{normalize, ByteSource, InferenceOutput, NormalizeError};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bytes::Bytes;
use serde_json::json;

// PNG-ish payload used across the shape tests
const PAYLOAD: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];

struct StaticSource(Vec<u8>);

#[async_trait]
impl ByteSource for StaticSource {
    async fn read_all(self: Box<Self>) -> Result<Bytes, NormalizeError> {
        Ok(Bytes::from(self.0))
    }
}

#[test]
fn test_data_uri_string_decodes_to_payload() {
    let uri = format!("data:image/png;base64,{}", BASE64.encode(PAYLOAD));
    let bytes = tokio_test::block_on(normalize(InferenceOutput::Text(uri))).unwrap();
    assert_eq!(&bytes[..], PAYLOAD);
}

#[test]
fn test_bare_base64_string_decodes_to_payload() {
    let encoded = BASE64.encode(PAYLOAD);
    let bytes = tokio_test::block_on(normalize(InferenceOutput::Text(encoded))).unwrap();
    assert_eq!(&bytes[..], PAYLOAD);
}

#[test]
fn test_base64_marker_payload_starts_after_first_occurrence() {
    // Everything before the first "base64," marker is prefix, not payload
    let text = format!("anything;base64,{}", BASE64.encode(b"Hello"));
    let bytes = tokio_test::block_on(normalize(InferenceOutput::Text(text))).unwrap();
    assert_eq!(&bytes[..], b"Hello");
}

#[test]
fn test_base64_payload_surrounding_whitespace_tolerated() {
    let encoded = format!(" {}\n", BASE64.encode(PAYLOAD));
    let bytes = tokio_test::block_on(normalize(InferenceOutput::Text(encoded))).unwrap();
    assert_eq!(&bytes[..], PAYLOAD);
}

#[tokio::test]
async fn test_stream_source_drained_to_payload() {
    let output = InferenceOutput::Stream(Box::new(StaticSource(PAYLOAD.to_vec())));
    let bytes = normalize(output).await.unwrap();
    assert_eq!(&bytes[..], PAYLOAD);
}

#[test]
fn test_raw_bytes_passed_through() {
    let bytes =
        tokio_test::block_on(normalize(InferenceOutput::Raw(Bytes::from_static(PAYLOAD)))).unwrap();
    assert_eq!(&bytes[..], PAYLOAD);
}

#[test]
fn test_data_field_object_decodes_to_payload() {
    let value = json!({ "data": PAYLOAD });
    let bytes = tokio_test::block_on(normalize(InferenceOutput::Json(value))).unwrap();
    assert_eq!(&bytes[..], PAYLOAD);
}

#[test]
fn test_number_is_unsupported() {
    let err = tokio_test::block_on(normalize(InferenceOutput::Json(json!(42)))).unwrap_err();
    match err {
        NormalizeError::UnsupportedShape(shape) => assert!(shape.contains("number")),
        other => panic!("expected UnsupportedShape, got {:?}", other),
    }
}

#[test]
fn test_null_is_unsupported() {
    let err = tokio_test::block_on(normalize(InferenceOutput::Json(json!(null)))).unwrap_err();
    match err {
        NormalizeError::UnsupportedShape(shape) => assert!(shape.contains("null")),
        other => panic!("expected UnsupportedShape, got {:?}", other),
    }
}

#[test]
fn test_object_without_data_field_is_unsupported() {
    let err = tokio_test::block_on(normalize(InferenceOutput::Json(json!({"image": "x"}))))
        .unwrap_err();
    match err {
        NormalizeError::UnsupportedShape(shape) => assert!(shape.contains("object")),
        other => panic!("expected UnsupportedShape, got {:?}", other),
    }
}

#[test]
fn test_object_with_non_byte_data_is_unsupported() {
    let err = tokio_test::block_on(normalize(InferenceOutput::Json(json!({"data": [1, 999]}))))
        .unwrap_err();
    assert!(matches!(err, NormalizeError::UnsupportedShape(_)));
}

#[test]
fn test_corrupt_base64_fails_loudly() {
    let err = tokio_test::block_on(normalize(InferenceOutput::Text("not$$base64".to_string())))
        .unwrap_err();
    assert!(matches!(err, NormalizeError::InvalidBase64(_)));
}

#[test]
fn test_shape_names_for_logging() {
    assert_eq!(InferenceOutput::Text(String::new()).shape(), "text");
    assert_eq!(InferenceOutput::Raw(Bytes::new()).shape(), "raw");
    assert_eq!(InferenceOutput::Json(json!(null)).shape(), "json");
}
