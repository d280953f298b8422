// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Art generation response type

use serde::{Deserialize, Serialize};

/// Success response from art generation.
///
/// `cid` is the metadata document's identifier; the image's own CID only
/// appears inside `imageUrl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateArtResponse {
    /// Gateway URL for displaying the generated image
    pub image_url: String,
    /// CID of the uploaded metadata document
    pub cid: String,
    /// `ipfs://` URI of the metadata document
    pub metadata_url: String,
}

impl GenerateArtResponse {
    /// Assemble the response from the two upload identifiers
    pub fn new(gateway_url: &str, image_cid: &str, metadata_cid: &str) -> Self {
        Self {
            image_url: format!("{}/ipfs/{}", gateway_url.trim_end_matches('/'), image_cid),
            cid: metadata_cid.to_string(),
            metadata_url: format!("ipfs://{}", metadata_cid),
        }
    }
}
