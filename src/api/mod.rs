// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod gallery;
pub mod generate;
pub mod http_server;
pub mod styles;

pub use errors::{ApiError, ErrorBody, GENERIC_FAILURE_MESSAGE};
pub use gallery::{gallery_handler, GalleryQuery, GalleryResponse};
pub use generate::{generate_art_handler, upload_art, GenerateArtRequest, GenerateArtResponse};
pub use http_server::{start_server, AppState, HealthResponse};
pub use styles::{styles_handler, StylesResponse, STYLES};
