// Version information for the AI Art Node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-ipfs-pinning-2025-08-24";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-08-24";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "stable-diffusion-inference",
    "response-normalization",
    "ipfs-http-api",
    "pinata-pinning",
    "nft-metadata",
    "gallery",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("AI Art Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}

/// Get full version info for API responses
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "version": VERSION_NUMBER,
        "build": VERSION,
        "date": BUILD_DATE,
        "features": FEATURES,
    })
}
