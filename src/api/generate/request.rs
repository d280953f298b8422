// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Art generation request type and validation

use serde::{Deserialize, Serialize};

/// Request for art generation via POST /api/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateArtRequest {
    /// Text prompt describing the desired artwork
    pub prompt: String,

    /// Style name mixed into the prompt and recorded in the metadata
    pub style: String,
}

impl GenerateArtRequest {
    /// Validate the generation request
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("prompt must not be empty".to_string());
        }
        if self.style.trim().is_empty() {
            return Err("style must not be empty".to_string());
        }
        Ok(())
    }
}
