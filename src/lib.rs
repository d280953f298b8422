// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod diffusion;
pub mod gallery;
pub mod metadata;
pub mod storage;
pub mod version;

// Re-export main types for convenience
pub use api::{
    generate_art_handler, ApiError, AppState, ErrorBody, GenerateArtRequest, GenerateArtResponse,
};
pub use config::{NodeConfig, StorageBackend, StorageConfig};
pub use diffusion::{
    compose_prompt, normalize, ByteSource, DiffusionClient, InferenceOutput, NormalizeError,
};
pub use gallery::{Artwork, Gallery, SortBy};
pub use metadata::{ArtMetadata, Attribute};
pub use storage::{build_store, ContentStore, StorageError, UploadResult};
