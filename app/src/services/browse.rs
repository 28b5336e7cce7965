//! Game-list browsing controller.
//!
//! Watches route and query state, picks exactly one fetch strategy
//! (explicit id override > search > filtered listing), and keeps the
//! result state safe against out-of-order responses: a superseded fetch
//! is cancelled and its late result discarded.

use std::borrow::Cow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use catalog_client::models::{GameId, GameQuery};
use catalog_client::source::GameSource;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::FetchResult;
use super::navigation::Navigator;

/// Games fetched per page.
pub const PAGE_SIZE: u32 = 48;
/// Route prefix that puts the browser in search mode.
pub const SEARCH_PREFIX: &str = "/games/search/";
/// Default listing route.
pub const GAMES_PATH: &str = "/games";

/// Top-level listing selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Menu {
    #[default]
    Popular,
    New,
    Best,
}

impl Menu {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "popular" => Some(Self::Popular),
            "new" => Some(Self::New),
            "best" => Some(Self::Best),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::New => "New Releases",
            Self::Best => "Top Rated",
        }
    }
}

/// User-adjustable listing filters. All free-form, forwarded verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub genre: Option<String>,
    pub year: Option<String>,
    pub rating: Option<String>,
    pub platform: Option<String>,
}

/// Composite of everything that determines the fetch strategy and its
/// parameters. A fetch is (re)issued only when this changes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QueryKey {
    menu: Menu,
    filters: Filters,
    page: u32,
    path: String,
    search_param: Option<String>,
    explicit_ids: Option<Vec<GameId>>,
}

enum FetchPlan {
    ByIds(Vec<GameId>),
    Listing(GameQuery),
}

pub struct GameBrowser<S, N> {
    source: Arc<S>,
    nav: N,
    menu: Menu,
    filters: Filters,
    page: u32,
    /// Explicit id override (e.g. "filter by review average"); while set,
    /// it wins over search and listing.
    explicit_ids: Option<Vec<GameId>>,
    state: Arc<Mutex<FetchResult>>,
    /// Token owned by the in-flight fetch, cancelled on supersession.
    active: CancellationToken,
    last_key: Option<QueryKey>,
    last_task: Option<JoinHandle<()>>,
}

impl<S, N> GameBrowser<S, N>
where
    S: GameSource + 'static,
    N: Navigator,
{
    /// Create an idle browser. Call [`sync`](Self::sync) to start the
    /// first fetch once a runtime is available.
    pub fn new(source: Arc<S>, nav: N) -> Self {
        Self {
            source,
            nav,
            menu: Menu::default(),
            filters: Filters::default(),
            page: 1,
            explicit_ids: None,
            state: Arc::new(Mutex::new(FetchResult {
                loading: true,
                ..FetchResult::default()
            })),
            active: CancellationToken::new(),
            last_key: None,
            last_task: None,
        }
    }

    /// Re-derive route-driven state and re-fetch if anything changed.
    ///
    /// Transient navigation state (menu preselected by a calling view) is
    /// consumed exactly once here.
    pub fn sync(&mut self) {
        if let Some(transient) = self.nav.take_transient() {
            if let Some(menu) = transient.menu.as_deref().and_then(Menu::parse) {
                self.menu = menu;
            }
        }
        self.maybe_refresh();
    }

    /// Select a listing menu. Resets to page 1 and leaves search mode.
    pub fn select_menu(&mut self, menu: Menu) {
        self.menu = menu;
        self.page = 1;
        if self.in_search() {
            self.nav.navigate(GAMES_PATH);
        }
        self.maybe_refresh();
    }

    /// Replace the listing filters. Resets to page 1 without navigating.
    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters;
        self.page = 1;
        self.maybe_refresh();
    }

    /// Set or clear the explicit id override.
    pub fn filter_by_ids(&mut self, ids: Option<Vec<GameId>>) {
        self.explicit_ids = ids;
        self.maybe_refresh();
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
            self.maybe_refresh();
        }
    }

    /// Advance one page. Refused while the current page is short, the
    /// heuristic for "no further pages" (there is no authoritative count).
    pub fn next_page(&mut self) {
        if !self.can_advance() {
            return;
        }
        self.page += 1;
        self.maybe_refresh();
    }

    pub fn can_advance(&self) -> bool {
        self.lock_state().games.len() >= PAGE_SIZE as usize
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn menu(&self) -> Menu {
        self.menu
    }

    pub fn navigator(&self) -> &N {
        &self.nav
    }

    pub fn in_search(&self) -> bool {
        self.nav.path().starts_with(SEARCH_PREFIX)
    }

    /// Search term while in search mode: an explicit route param wins,
    /// else the decoded trailing path segment.
    pub fn search_term(&self) -> Option<String> {
        let rest = self.nav.path().strip_prefix(SEARCH_PREFIX)?;
        if let Some(term) = self.nav.path_param("searchTerm") {
            return Some(term.to_owned());
        }
        Some(
            urlencoding::decode(rest)
                .map(Cow::into_owned)
                .unwrap_or_else(|_| rest.to_owned()),
        )
    }

    pub fn section_title(&self) -> String {
        match self.search_term() {
            Some(term) => format!("Results for \"{term}\""),
            None => self.menu.label().to_owned(),
        }
    }

    pub fn snapshot(&self) -> FetchResult {
        self.lock_state().clone()
    }

    /// Wait for the most recently started fetch to finish. Rendering code
    /// polls [`snapshot`](Self::snapshot) instead.
    pub async fn settled(&mut self) {
        if let Some(task) = self.last_task.take() {
            let _ = task.await;
        }
    }

    fn query_key(&self) -> QueryKey {
        QueryKey {
            menu: self.menu,
            filters: self.filters.clone(),
            page: self.page,
            path: self.nav.path().to_owned(),
            search_param: self.nav.path_param("searchTerm").map(str::to_owned),
            explicit_ids: self.explicit_ids.clone(),
        }
    }

    /// Pick exactly one fetch strategy, in priority order.
    fn plan(&self) -> FetchPlan {
        if let Some(ids) = &self.explicit_ids {
            return FetchPlan::ByIds(ids.clone());
        }

        let offset = (self.page - 1) * PAGE_SIZE;
        if let Some(term) = self.search_term() {
            return FetchPlan::Listing(GameQuery {
                search: Some(term),
                limit: PAGE_SIZE,
                offset,
                ..GameQuery::default()
            });
        }

        FetchPlan::Listing(GameQuery {
            genre: self.filters.genre.clone(),
            year: self.filters.year.clone(),
            rating: self.filters.rating.clone(),
            platform: self.filters.platform.clone(),
            search: None,
            recent: self.menu == Menu::New,
            popular: self.menu == Menu::Popular,
            best: self.menu == Menu::Best,
            limit: PAGE_SIZE,
            offset,
        })
    }

    fn maybe_refresh(&mut self) {
        let key = self.query_key();
        if self.last_key.as_ref() == Some(&key) {
            return;
        }
        self.last_key = Some(key);
        self.refresh();
    }

    /// Start a new fetch, superseding any in-flight one.
    fn refresh(&mut self) {
        let plan = self.plan();
        let token = CancellationToken::new();
        {
            // Cancelling under the state lock makes supersession atomic
            // with respect to a stale task's commit.
            let mut state = self.lock_state();
            self.active.cancel();
            state.loading = true;
            state.error = None;
        }
        self.active = token.clone();

        let source = Arc::clone(&self.source);
        let shared = Arc::clone(&self.state);
        self.last_task = Some(tokio::spawn(async move {
            let outcome = match plan {
                FetchPlan::ByIds(ids) => {
                    tracing::debug!(count = ids.len(), "fetching games by explicit ids");
                    source
                        .fetch_games_by_ids(&ids)
                        .await
                        .map(|games| games.into_iter().flatten().collect())
                }
                FetchPlan::Listing(query) => source.fetch_games(&query).await,
            };

            let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if token.is_cancelled() {
                tracing::debug!("discarding superseded fetch result");
                return;
            }
            match outcome {
                Ok(games) => {
                    state.games = games;
                }
                Err(err) => {
                    tracing::warn!(%err, "game fetch failed");
                    state.error = Some(err.to_string());
                    state.games = Vec::new();
                }
            }
            state.loading = false;
        }));
    }

    fn lock_state(&self) -> MutexGuard<'_, FetchResult> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
