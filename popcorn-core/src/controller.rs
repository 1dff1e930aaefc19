//! Query Fetch Controller
//!
//! Turns search-box input and movie selection into fetch cycles against a
//! `MovieApi`. Only the newest query and the newest selection may publish
//! state; everything older is aborted and, if it resolves anyway, ignored.

use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::debug;

use crate::error::FetchError;
use crate::fetch::{CycleOutcome, FetchController};
use crate::models::{MovieDetail, SearchResult};
use crate::omdb::MovieApi;
use crate::FetchState;

pub type SearchState = FetchState<Vec<SearchResult>>;
pub type DetailState = FetchState<Option<MovieDetail>>;

pub struct QueryFetchController<A> {
    api: A,
    results: FetchController<Vec<SearchResult>>,
    detail: FetchController<Option<MovieDetail>>,
    query: Arc<Mutex<String>>,
    selected: Arc<Mutex<Option<String>>>,
}

impl<A: Clone> Clone for QueryFetchController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            results: self.results.clone(),
            detail: self.detail.clone(),
            query: self.query.clone(),
            selected: self.selected.clone(),
        }
    }
}

impl<A: MovieApi> QueryFetchController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            results: FetchController::new("search"),
            detail: FetchController::new("detail"),
            query: Arc::new(Mutex::new(String::new())),
            selected: Arc::new(Mutex::new(None)),
        }
    }

    pub fn subscribe_results(&self) -> watch::Receiver<SearchState> {
        self.results.subscribe()
    }

    pub fn subscribe_detail(&self) -> watch::Receiver<DetailState> {
        self.detail.subscribe()
    }

    pub fn results(&self) -> SearchState {
        self.results.state()
    }

    pub fn detail(&self) -> DetailState {
        self.detail.state()
    }

    /// The id whose detail is shown or loading.
    pub fn selected_id(&self) -> Option<String> {
        self.selected
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// React to new search-box input.
    ///
    /// Returns the cycle to run when the trimmed query differs from the last
    /// one. A changed query also closes the detail panel. A blank query cancels
    /// any outstanding search and goes back to idle without a request.
    pub fn set_query(&self, query: &str) -> Option<impl Future<Output = CycleOutcome> + 'static> {
        let query = query.trim().to_string();
        {
            let mut current = self.query.lock().unwrap_or_else(|p| p.into_inner());
            if *current == query {
                return None;
            }
            current.clone_from(&query);
        }
        self.close_detail();

        if query.is_empty() {
            debug!("search: blank query, back to idle");
            self.results.reset();
            return None;
        }

        let api = self.api.clone();
        Some(self.results.begin(async move {
            api.search(&query)
                .await
                .map_err(|e| FetchError::from_search(&e))
        }))
    }

    /// Load the detail for `id`, superseding any previous selection.
    pub fn fetch_detail(&self, id: &str) -> impl Future<Output = CycleOutcome> + 'static {
        *self.selected.lock().unwrap_or_else(|p| p.into_inner()) = Some(id.to_string());

        let api = self.api.clone();
        let id = id.to_string();
        self.detail.begin(async move {
            api.detail(&id)
                .await
                .map(Some)
                .map_err(|e| FetchError::from_detail(&e))
        })
    }

    /// Clear the selection and drop its detail, cancelling a pending load.
    pub fn close_detail(&self) {
        let previous = self
            .selected
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .take();
        if previous.is_some() || self.detail.is_active() {
            self.detail.reset();
        }
    }

    /// Cancel everything in flight. Call on teardown.
    pub fn shutdown(&self) {
        self.results.cancel();
        self.detail.cancel();
    }
}
