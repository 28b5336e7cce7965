//! HTTP client for the game catalog backend.
//!
//! Provides typed access to the two listing endpoints the UI consumes:
//! filtered/search listings and lookup by explicit id list.

mod client;

pub mod models;
pub mod source;

pub use client::CatalogClient;
pub use models::{Cover, GameId, GameQuery, GameSummary};
pub use source::GameSource;

/// Unified error type for the catalog-client crate.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog API error (status {status}): {message}")]
    Api { status: u16, message: String },
}
