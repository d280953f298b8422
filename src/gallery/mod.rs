// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Curated in-memory gallery with filtering and sorting

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::metadata::Attribute;

/// Styles offered by the gallery filter; `All` disables the filter
pub const STYLE_FILTERS: &[&str] = &[
    "All",
    "Cyberpunk",
    "Abstract",
    "Fantasy",
    "Realistic",
    "Anime",
    "Impressionist",
    "Glitch",
    "Pixel Art",
];

/// One gallery artwork
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub image: String,
    pub price_matic: f64,
    pub likes: u32,
    pub views: u32,
    pub style: String,
    pub created_at: DateTime<Utc>,
    pub royalty_percent: u8,
    pub token_id: u64,
    pub prompt: String,
    pub attributes: Vec<Attribute>,
}

/// Gallery sort orders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Newest,
    Trending,
    Popular,
    PriceHigh,
    PriceLow,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortBy::Newest),
            "trending" => Ok(SortBy::Trending),
            "popular" => Ok(SortBy::Popular),
            "price-high" => Ok(SortBy::PriceHigh),
            "price-low" => Ok(SortBy::PriceLow),
            other => Err(format!(
                "unknown sort '{}'; expected newest, trending, popular, price-high or price-low",
                other
            )),
        }
    }
}

/// The curated artwork set. Nothing here is persisted; generated pieces
/// live on IPFS and are not written back into this list.
pub struct Gallery {
    artworks: Vec<Artwork>,
}

impl Gallery {
    /// Build the curated gallery
    pub fn curated() -> Self {
        Self {
            artworks: curated_artworks(),
        }
    }

    /// Number of artworks before filtering
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Filter by style and free-text query, then sort.
    ///
    /// The query matches title, prompt or artist case-insensitively; a
    /// style of `All` (or none) passes everything.
    pub fn query(&self, style: Option<&str>, q: Option<&str>, sort: SortBy) -> Vec<Artwork> {
        let needle = q.map(str::to_lowercase);
        let mut matches: Vec<Artwork> = self
            .artworks
            .iter()
            .filter(|art| {
                let style_ok = match style {
                    None | Some("All") => true,
                    Some(s) => art.style == s,
                };
                let search_ok = match &needle {
                    None => true,
                    Some(n) => {
                        art.title.to_lowercase().contains(n)
                            || art.prompt.to_lowercase().contains(n)
                            || art.artist.to_lowercase().contains(n)
                    }
                };
                style_ok && search_ok
            })
            .cloned()
            .collect();

        match sort {
            SortBy::Newest => matches.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortBy::Trending => matches.sort_by(|a, b| b.views.cmp(&a.views)),
            SortBy::Popular => matches.sort_by(|a, b| b.likes.cmp(&a.likes)),
            SortBy::PriceHigh => matches.sort_by(|a, b| cmp_price(b, a)),
            SortBy::PriceLow => matches.sort_by(|a, b| cmp_price(a, b)),
        }
        matches
    }
}

fn cmp_price(a: &Artwork, b: &Artwork) -> Ordering {
    a.price_matic
        .partial_cmp(&b.price_matic)
        .unwrap_or(Ordering::Equal)
}

fn art(
    id: u64,
    title: &str,
    artist: &str,
    image: &str,
    price_matic: f64,
    likes: u32,
    views: u32,
    style: &str,
    created_at: DateTime<Utc>,
    prompt: &str,
    extra: [(&str, &str); 2],
) -> Artwork {
    Artwork {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        image: image.to_string(),
        price_matic,
        likes,
        views,
        style: style.to_string(),
        created_at,
        royalty_percent: 5,
        token_id: id,
        prompt: prompt.to_string(),
        attributes: vec![
            Attribute::new("Style", style),
            Attribute::new(extra[0].0, extra[0].1),
            Attribute::new(extra[1].0, extra[1].1),
        ],
    }
}

fn curated_artworks() -> Vec<Artwork> {
    let day = |d: u32, h: u32| Utc.with_ymd_and_hms(2025, 8, d, h, 0, 0).unwrap();
    vec![
        art(
            1,
            "Neon Dreams",
            "0x8f1...c3d2",
            "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=800&auto=format&fit=crop",
            0.5,
            142,
            1500,
            "Cyberpunk",
            day(22, 9),
            "A futuristic city with neon lights and flying cars",
            [("Mood", "Futuristic"), ("Colors", "Neon")],
        ),
        art(
            2,
            "Cosmic Waves",
            "0x5a9...b8e1",
            "https://images.unsplash.com/photo-1541701494587-cb58502866ab?w=800&auto=format&fit=crop",
            1.2,
            89,
            890,
            "Abstract",
            day(17, 14),
            "Abstract representation of cosmic energy waves",
            [("Mood", "Cosmic"), ("Colors", "Blue")],
        ),
        art(
            3,
            "Forest Guardian",
            "0x3d2...f7c4",
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&auto=format&fit=crop",
            0.8,
            234,
            2100,
            "Fantasy",
            day(21, 11),
            "Magical forest spirit watching over ancient woods",
            [("Mood", "Mystical"), ("Colors", "Green")],
        ),
        art(
            4,
            "Digital Rain",
            "0x9b1...e5d3",
            "https://images.unsplash.com/photo-1618005198919-d3d4b5a92ead?w=800&auto=format&fit=crop",
            0.3,
            67,
            750,
            "Glitch",
            day(24, 5),
            "Matrix-style digital rain with green code",
            [("Mood", "Digital"), ("Colors", "Green")],
        ),
        art(
            5,
            "Sunset Symphony",
            "0x2c4...a9f8",
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&auto=format&fit=crop",
            1.5,
            312,
            3200,
            "Impressionist",
            day(10, 18),
            "Colorful sunset over ocean with impressionist brush strokes",
            [("Mood", "Peaceful"), ("Colors", "Warm")],
        ),
        art(
            6,
            "Quantum Realm",
            "0x7e3...d1a6",
            "https://images.unsplash.com/photo-1518834103328-6340cce5a14c?w=800&auto=format&fit=crop",
            2.1,
            421,
            4500,
            "Abstract",
            Utc.with_ymd_and_hms(2025, 7, 24, 12, 0, 0).unwrap(),
            "Visualization of quantum particles and energy fields",
            [("Mood", "Scientific"), ("Colors", "Purple")],
        ),
    ]
}
