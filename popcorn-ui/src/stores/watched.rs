//! Watched list state

use dioxus::prelude::*;
use popcorn_core::models::{WatchStats, WatchedEntry};
use popcorn_core::storage::KeyValueStore;
use popcorn_core::watchlist::Watchlist;

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct WatchedUiState {
    pub entries: Vec<WatchedEntry>,
    pub stats: WatchStats,
    /// Set when the last change could not be saved
    pub warning: Option<String>,
}

impl WatchedUiState {
    pub fn from_watchlist<S: KeyValueStore>(watchlist: &Watchlist<S>) -> Self {
        Self {
            entries: watchlist.list().to_vec(),
            stats: watchlist.stats(),
            warning: watchlist.persist_warning().map(str::to_string),
        }
    }

    /// The user's rating for `id` if it is on the list.
    pub fn rating_for(&self, id: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.user_rating)
    }
}
