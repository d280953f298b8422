// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Art generation endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::request::GenerateArtRequest;
use super::response::GenerateArtResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::diffusion::normalize;
use crate::metadata::ArtMetadata;
use crate::storage::{ContentStore, StorageError};

/// POST /api/generate - Generate an artwork from a prompt and style
///
/// Pipeline:
/// 1. Validate request
/// 2. Call the diffusion API
/// 3. Normalize the response into image bytes
/// 4. Upload image, then metadata (strictly in that order)
/// 5. Build and return GenerateArtResponse
///
/// Any failure after validation is logged with full detail and surfaced
/// as the one generic 500 body. Identical requests are not deduplicated;
/// each run uploads fresh objects.
pub async fn generate_art_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateArtRequest>,
) -> Result<Json<GenerateArtResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    debug!(
        "[{}] art generation request: prompt_len={}, style={}",
        request_id,
        request.prompt.len(),
        request.style
    );

    // 1. Validate request
    if let Err(e) = request.validate() {
        warn!("[{}] art generation validation failed: {}", request_id, e);
        return Err(ApiError::InvalidRequest(e));
    }

    // 2. Inference call
    let output = state
        .diffusion
        .generate(&request.prompt, &request.style)
        .await
        .map_err(|e| {
            warn!("[{}] inference call failed: {}", request_id, e);
            ApiError::InferenceFailure(e.to_string())
        })?;
    debug!(
        "[{}] inference response captured: shape={}",
        request_id,
        output.shape()
    );

    // 3. Normalize to image bytes
    let image = normalize(output).await.map_err(|e| {
        warn!("[{}] response normalization failed: {}", request_id, e);
        ApiError::from(e)
    })?;

    // 4. Upload image then metadata
    let (image_cid, metadata_cid) =
        upload_art(state.store.as_ref(), &image, &request.prompt, &request.style)
            .await
            .map_err(|e| {
                warn!("[{}] upload failed: {}", request_id, e);
                ApiError::from(e)
            })?;

    info!(
        "[{}] art generated: {} bytes, image_cid={}, metadata_cid={}",
        request_id,
        image.len(),
        image_cid,
        metadata_cid
    );

    // 5. Build response
    Ok(Json(GenerateArtResponse::new(
        &state.gateway_url,
        &image_cid,
        &metadata_cid,
    )))
}

/// Upload the image bytes, then the derived metadata document.
///
/// The metadata embeds the image CID, so the order is a correctness
/// requirement: the metadata upload must not start unless the image upload
/// succeeded. A failed metadata upload leaves the image orphaned; it is
/// not rolled back.
pub async fn upload_art(
    store: &dyn ContentStore,
    image: &[u8],
    prompt: &str,
    style: &str,
) -> Result<(String, String), StorageError> {
    let image_upload = store.add_bytes(image.to_vec(), "art.png").await?;

    let metadata = ArtMetadata::new(prompt, style, &image_upload.cid);
    let metadata_upload = store.add_json(serde_json::to_value(&metadata)?).await?;

    Ok((image_upload.cid, metadata_upload.cid))
}
