// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Hosted diffusion inference client and response normalization

pub mod client;
pub mod normalize;

pub use client::{compose_prompt, DiffusionClient, InferenceParameters, InferenceRequestBody};
pub use normalize::{normalize, ByteSource, InferenceOutput, NormalizeError};
