use serde_json::json;

use crate::CatalogError;
use crate::models::{CatalogResponse, GameId, GameQuery, GameSummary};

/// Catalog backend client.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch a page of games matching the given filters or search term.
    pub async fn fetch_games(&self, query: &GameQuery) -> Result<Vec<GameSummary>, CatalogError> {
        let url = format!("{}/games", self.base_url);
        tracing::debug!(limit = query.limit, offset = query.offset, "fetching game listing");

        let resp = self.http.get(&url).query(query).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let envelope: CatalogResponse<GameSummary> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    /// Fetch games by explicit id list, in the given order.
    ///
    /// The backend returns `null` for ids it cannot resolve; callers filter
    /// those out before display. An empty id list short-circuits without a
    /// request.
    pub async fn fetch_games_by_ids(
        &self,
        ids: &[GameId],
    ) -> Result<Vec<Option<GameSummary>>, CatalogError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/games/by-ids", self.base_url);
        tracing::debug!(count = ids.len(), "fetching games by id");

        let resp = self
            .http
            .post(&url)
            .json(&json!({ "ids": ids }))
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let envelope: CatalogResponse<Option<GameSummary>> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }
}
