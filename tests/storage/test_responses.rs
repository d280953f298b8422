// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for storage backend response parsing

use ai_art_node::storage::{IpfsApiStore, PinataStore, StorageError};

#[test]
fn test_ipfs_add_response_parsed() {
    let result = IpfsApiStore::parse_add_response(
        r#"{"Name":"art.png","Hash":"QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG","Size":"123"}"#,
    )
    .unwrap();
    assert_eq!(result.cid, "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG");
}

#[test]
fn test_ipfs_add_response_missing_hash() {
    let err = IpfsApiStore::parse_add_response(r#"{"Name":"art.png"}"#).unwrap_err();
    assert!(matches!(err, StorageError::UnexpectedResponse(_)));
}

#[test]
fn test_ipfs_add_response_not_json() {
    let err = IpfsApiStore::parse_add_response("<html>gateway timeout</html>").unwrap_err();
    assert!(matches!(err, StorageError::UnexpectedResponse(_)));
}

#[test]
fn test_pinata_pin_response_parsed() {
    let result = PinataStore::parse_pin_response(
        r#"{"IpfsHash":"QmTzQ1bT9YxW","PinSize":345,"Timestamp":"2025-08-24T10:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(result.cid, "QmTzQ1bT9YxW");
}

#[test]
fn test_pinata_pin_response_missing_hash() {
    let err = PinataStore::parse_pin_response(r#"{"error":"Invalid JWT"}"#).unwrap_err();
    assert!(matches!(err, StorageError::UnexpectedResponse(_)));
}

#[test]
fn test_store_construction() {
    assert!(IpfsApiStore::new("https://ipfs.infura.io:5001/").is_ok());
    assert!(PinataStore::new("jwt-token").is_ok());
}
