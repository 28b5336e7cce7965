//! Data models for the catalog API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque game identifier. The backend issues numeric ids, but older user
/// records carry them as strings, so both forms are accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameId {
    Num(u64),
    Text(String),
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for GameId {
    fn from(n: u64) -> Self {
        Self::Num(n)
    }
}

/// Cover art reference as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cover {
    pub url: String,
}

impl Cover {
    /// URL suitable for card-sized display.
    ///
    /// The backend hands out thumbnail variants and sometimes
    /// protocol-relative URLs; upscale to the big cover variant and pin
    /// the scheme.
    pub fn display_url(&self) -> String {
        let url = self
            .url
            .replace("t_thumb", "t_cover_big")
            .replace("t_cover_small", "t_cover_big");
        if url.starts_with("http") {
            url
        } else {
            format!("https:{url}")
        }
    }
}

/// A game as listed in browse/search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: GameId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<Cover>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Query parameters for the filtered/search listing endpoint.
///
/// Unset filters are omitted from the query string; the menu flags are
/// always sent so the backend applies exactly one ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub recent: bool,
    pub popular: bool,
    pub best: bool,
    pub limit: u32,
    pub offset: u32,
}

/// Response envelope used by all catalog endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogResponse<T> {
    pub data: Vec<T>,
}
