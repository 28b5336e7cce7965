//! Stateful view controllers and the collaborator seams they depend on.

pub mod browse;
pub mod favorites;
pub mod navigation;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

use catalog_client::models::GameSummary;

/// Snapshot of a view's fetch lifecycle, replaced wholesale per fetch.
///
/// An empty `games` with no error and not loading is the explicit
/// "no results" state, distinct from a failure.
#[derive(Debug, Clone, Default)]
pub struct FetchResult {
    pub games: Vec<GameSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FetchResult {
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.games.is_empty()
    }
}
