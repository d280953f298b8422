// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! NFT metadata document derived from a generation request

use serde::{Deserialize, Serialize};

/// Fixed `Generator` attribute value
pub const GENERATOR: &str = "Stable Diffusion";

/// Fixed `AI Model` attribute value
pub const MODEL_LABEL: &str = "SD 2.1";

/// Prompt characters kept in the metadata name
const NAME_PROMPT_CHARS: usize = 50;

/// One NFT trait, serialized with the conventional `trait_type` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

impl Attribute {
    pub fn new(trait_type: &str, value: &str) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: value.to_string(),
        }
    }
}

/// NFT-style metadata document uploaded alongside the image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<Attribute>,
}

impl ArtMetadata {
    /// Derive the metadata document for a generated artwork.
    ///
    /// Deterministic in its inputs: the name truncates the prompt to 50
    /// characters (the `...` suffix is unconditional), the image is an
    /// `ipfs://` URI, and the attributes are always exactly Style,
    /// Generator and AI Model.
    pub fn new(prompt: &str, style: &str, image_cid: &str) -> Self {
        let head: String = prompt.chars().take(NAME_PROMPT_CHARS).collect();
        Self {
            name: format!("AI Art: {}...", head),
            description: prompt.to_string(),
            image: format!("ipfs://{}", image_cid),
            attributes: vec![
                Attribute::new("Style", style),
                Attribute::new("Generator", GENERATOR),
                Attribute::new("AI Model", MODEL_LABEL),
            ],
        }
    }
}
