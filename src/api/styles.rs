// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Style list endpoint

use axum::Json;
use serde::{Deserialize, Serialize};

/// Styles offered for generation
pub const STYLES: &[&str] = &[
    "Cyberpunk",
    "Impressionist",
    "Abstract",
    "Realistic",
    "Anime",
    "Oil Painting",
    "Watercolor",
    "Pixel Art",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylesResponse {
    pub styles: Vec<String>,
}

/// GET /api/styles - List the styles offered for generation
pub async fn styles_handler() -> Json<StylesResponse> {
    Json(StylesResponse {
        styles: STYLES.iter().map(|s| s.to_string()).collect(),
    })
}
