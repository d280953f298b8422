// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Art generation endpoint

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{generate_art_handler, upload_art};
pub use request::GenerateArtRequest;
pub use response::GenerateArtResponse;
