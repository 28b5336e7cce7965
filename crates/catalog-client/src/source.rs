//! Fetch seam the view controllers depend on.
//!
//! Controllers take a [`GameSource`] rather than the concrete HTTP client
//! so tests can substitute scripted sources.

use async_trait::async_trait;

use crate::CatalogError;
use crate::client::CatalogClient;
use crate::models::{GameId, GameQuery, GameSummary};

#[async_trait]
pub trait GameSource: Send + Sync {
    /// Fetch a page of games matching the given filters or search term.
    async fn fetch_games(&self, query: &GameQuery) -> Result<Vec<GameSummary>, CatalogError>;

    /// Fetch games by explicit id list; unresolvable ids come back as `None`.
    async fn fetch_games_by_ids(
        &self,
        ids: &[GameId],
    ) -> Result<Vec<Option<GameSummary>>, CatalogError>;
}

#[async_trait]
impl GameSource for CatalogClient {
    async fn fetch_games(&self, query: &GameQuery) -> Result<Vec<GameSummary>, CatalogError> {
        CatalogClient::fetch_games(self, query).await
    }

    async fn fetch_games_by_ids(
        &self,
        ids: &[GameId],
    ) -> Result<Vec<Option<GameSummary>>, CatalogError> {
        CatalogClient::fetch_games_by_ids(self, ids).await
    }
}
