//! Profile favorites panel controller.
//!
//! Watches the session user's favorites field and keeps the panel's game
//! list in sync: the raw field is normalized to ids, ids are resolved via
//! the catalog, and unresolvable entries are dropped. A favorites field
//! whose identity has not changed never triggers a re-fetch.

use std::sync::Arc;

use catalog_client::source::GameSource;
use favorite_games::extract_ids;
use serde_json::Value;

use super::FetchResult;
use super::session::Session;

/// User-visible message when the favorites fetch fails.
const FETCH_ERROR: &str = "Failed to load favorite games.";

pub struct FavoritesPanel<S> {
    source: Arc<S>,
    state: FetchResult,
    /// Raw favorites field at the last sync; `None` before the first.
    last_seen: Option<Option<Value>>,
}

impl<S: GameSource> FavoritesPanel<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            state: FetchResult::default(),
            last_seen: None,
        }
    }

    pub fn snapshot(&self) -> &FetchResult {
        &self.state
    }

    /// Re-fetch if the identity of the user's favorites field changed.
    ///
    /// An empty id list short-circuits to an empty panel without calling
    /// the catalog.
    pub async fn sync(&mut self, session: &Session) {
        let raw = session.user().and_then(|u| u.favorite_games.clone());
        if self.last_seen.as_ref() == Some(&raw) {
            return;
        }
        self.last_seen = Some(raw.clone());

        let ids = extract_ids(raw.as_ref());
        if ids.is_empty() {
            self.state = FetchResult::default();
            return;
        }

        self.state.loading = true;
        self.state.error = None;
        match self.source.fetch_games_by_ids(&ids).await {
            Ok(games) => {
                self.state.games = games.into_iter().flatten().collect();
            }
            Err(err) => {
                tracing::warn!(%err, "favorite games fetch failed");
                self.state.error = Some(FETCH_ERROR.to_owned());
                self.state.games = Vec::new();
            }
        }
        self.state.loading = false;
    }
}
