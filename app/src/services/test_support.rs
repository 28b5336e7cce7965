//! Scripted [`GameSource`] implementations for controller tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use catalog_client::CatalogError;
use catalog_client::models::{GameId, GameQuery, GameSummary};
use catalog_client::source::GameSource;
use tokio::sync::oneshot;

pub fn game(id: u64, name: &str) -> GameSummary {
    GameSummary {
        id: GameId::Num(id),
        name: name.to_owned(),
        cover: None,
        rating: None,
    }
}

pub fn page_of(count: usize) -> Vec<GameSummary> {
    (1..=count as u64)
        .map(|i| game(i, &format!("Game {i}")))
        .collect()
}

/// Records every call; replies are popped per call and default to an
/// empty success.
#[derive(Default)]
pub struct StubSource {
    pub queries: Mutex<Vec<GameQuery>>,
    pub id_calls: Mutex<Vec<Vec<GameId>>>,
    listing_replies: Mutex<VecDeque<Result<Vec<GameSummary>, CatalogError>>>,
    id_replies: Mutex<VecDeque<Result<Vec<Option<GameSummary>>, CatalogError>>>,
}

impl StubSource {
    pub fn push_listing(&self, reply: Result<Vec<GameSummary>, CatalogError>) {
        self.listing_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_ids(&self, reply: Result<Vec<Option<GameSummary>>, CatalogError>) {
        self.id_replies.lock().unwrap().push_back(reply);
    }
}

#[async_trait]
impl GameSource for StubSource {
    async fn fetch_games(&self, query: &GameQuery) -> Result<Vec<GameSummary>, CatalogError> {
        self.queries.lock().unwrap().push(query.clone());
        self.listing_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_games_by_ids(
        &self,
        ids: &[GameId],
    ) -> Result<Vec<Option<GameSummary>>, CatalogError> {
        self.id_calls.lock().unwrap().push(ids.to_vec());
        self.id_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Listing source whose replies block on a gate, for supersession tests.
pub struct GatedSource {
    gates: Mutex<VecDeque<(oneshot::Receiver<()>, Result<Vec<GameSummary>, CatalogError>)>>,
}

impl GatedSource {
    pub fn new() -> Self {
        Self {
            gates: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue a reply; the returned sender releases it.
    pub fn push_gated(&self, reply: Result<Vec<GameSummary>, CatalogError>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back((rx, reply));
        tx
    }
}

#[async_trait]
impl GameSource for GatedSource {
    async fn fetch_games(&self, _query: &GameQuery) -> Result<Vec<GameSummary>, CatalogError> {
        let (gate, reply) = self
            .gates
            .lock()
            .unwrap()
            .pop_front()
            .expect("no gated reply queued");
        let _ = gate.await;
        reply
    }

    async fn fetch_games_by_ids(
        &self,
        _ids: &[GameId],
    ) -> Result<Vec<Option<GameSummary>>, CatalogError> {
        Ok(Vec::new())
    }
}
