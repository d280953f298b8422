// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gallery listing endpoint

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::gallery::{Artwork, SortBy};

/// Query parameters for GET /api/gallery
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryQuery {
    /// Style filter; "All" or absent passes everything
    pub style: Option<String>,
    /// Free-text search over title, prompt and artist
    pub q: Option<String>,
    /// Sort order; defaults to newest
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryResponse {
    pub total: usize,
    pub artworks: Vec<Artwork>,
}

/// GET /api/gallery - List curated artworks with filtering and sorting
pub async fn gallery_handler(
    State(state): State<AppState>,
    Query(params): Query<GalleryQuery>,
) -> Result<Json<GalleryResponse>, ApiError> {
    let sort = match params.sort.as_deref() {
        None => SortBy::Newest,
        Some(s) => s.parse().map_err(ApiError::InvalidRequest)?,
    };

    let artworks = state
        .gallery
        .query(params.style.as_deref(), params.q.as_deref(), sort);
    Ok(Json(GalleryResponse {
        total: artworks.len(),
        artworks,
    }))
}
