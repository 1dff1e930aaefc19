//! Search box and results state

use dioxus::prelude::*;
use popcorn_core::controller::SearchState;
use popcorn_core::models::SearchResult;

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SearchUiState {
    /// Raw search-box text
    pub query: String,
    pub results: Vec<SearchResult>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SearchUiState {
    /// Copy a published fetch state, leaving the query untouched.
    pub fn apply_fetch(&mut self, state: SearchState) {
        self.results = state.data;
        self.loading = state.is_loading;
        self.error = state.error;
    }
}
