//! Watched-movie list with write-through persistence
//!
//! Every mutation serializes the whole list into the `"watched"` slot. There
//! is no read-repair: a blob that fails to decode at startup is logged and
//! replaced by the next write.

use popcorn_common::mean;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{MovieDetail, WatchStats, WatchedEntry};
use crate::storage::KeyValueStore;

/// Storage slot holding the JSON-encoded list
pub const WATCHED_KEY: &str = "watched";

pub const MIN_USER_RATING: u8 = 1;
pub const MAX_USER_RATING: u8 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WatchlistError {
    #[error("{0} is already in the watched list")]
    AlreadyWatched(String),
    #[error("Rating must be between 1 and 10, got {0}")]
    InvalidRating(u8),
    #[error("{0} has no usable IMDb rating")]
    InvalidImdbRating(String),
}

impl WatchedEntry {
    /// Build an entry from the selected movie and the user's rating.
    /// Missing OMDb figures are recorded as 0.
    pub fn from_detail(detail: &MovieDetail, user_rating: u8) -> Result<Self, WatchlistError> {
        if !(MIN_USER_RATING..=MAX_USER_RATING).contains(&user_rating) {
            return Err(WatchlistError::InvalidRating(user_rating));
        }
        Ok(Self {
            id: detail.id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster_url: detail.poster_url.clone(),
            imdb_rating: detail.imdb_rating.unwrap_or(0.0),
            user_rating,
            runtime_minutes: detail.runtime_minutes.unwrap_or(0),
        })
    }
}

pub struct Watchlist<S> {
    entries: Vec<WatchedEntry>,
    storage: S,
    persist_warning: Option<String>,
}

impl<S: KeyValueStore> Watchlist<S> {
    /// An empty list bound to `storage`. Nothing is read until `restore`.
    pub fn new(storage: S) -> Self {
        Self {
            entries: Vec::new(),
            storage,
            persist_warning: None,
        }
    }

    /// Bind to `storage` and read back whatever it holds.
    pub fn load(storage: S) -> Self {
        let mut watchlist = Self::new(storage);
        watchlist.restore();
        watchlist
    }

    /// Replace the in-memory list with the persisted one.
    pub fn restore(&mut self) {
        self.entries = match self.storage.get_item(WATCHED_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<WatchedEntry>>(&blob) {
                Ok(entries) => {
                    info!("Restored {} watched movie(s)", entries.len());
                    entries
                }
                Err(e) => {
                    warn!("Ignoring unreadable watched list: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read watched list: {}", e);
                Vec::new()
            }
        };
    }

    pub fn list(&self) -> &[WatchedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&WatchedEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Append `entry`. Ids are unique: adding a watched movie again is refused.
    /// The entry must also survive a JSON round trip, so a non-finite IMDb
    /// rating is refused as well.
    pub fn add(&mut self, entry: WatchedEntry) -> Result<(), WatchlistError> {
        if self.contains(&entry.id) {
            return Err(WatchlistError::AlreadyWatched(entry.id));
        }
        if !(MIN_USER_RATING..=MAX_USER_RATING).contains(&entry.user_rating) {
            return Err(WatchlistError::InvalidRating(entry.user_rating));
        }
        if !entry.imdb_rating.is_finite() {
            return Err(WatchlistError::InvalidImdbRating(entry.id));
        }
        info!("Adding {} ({}) to watched list", entry.title, entry.id);
        self.entries.push(entry);
        self.persist();
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<WatchedEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let removed = self.entries.remove(index);
        info!("Removed {} from watched list", removed.id);
        self.persist();
        Some(removed)
    }

    /// Means over the current list; all zero when it is empty.
    pub fn stats(&self) -> WatchStats {
        let imdb: Vec<f64> = self.entries.iter().map(|e| e.imdb_rating).collect();
        let user: Vec<f64> = self.entries.iter().map(|e| f64::from(e.user_rating)).collect();
        let runtime: Vec<f64> = self
            .entries
            .iter()
            .map(|e| f64::from(e.runtime_minutes))
            .collect();

        WatchStats {
            avg_imdb_rating: mean(&imdb),
            avg_user_rating: mean(&user),
            avg_runtime: mean(&runtime),
        }
    }

    /// Last failed write, if the most recent mutation could not be persisted.
    pub fn persist_warning(&self) -> Option<&str> {
        self.persist_warning.as_deref()
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.storage
                    .set_item(WATCHED_KEY, &json)
                    .map_err(|e| e.to_string())
            });

        self.persist_warning = match result {
            Ok(()) => None,
            Err(e) => {
                warn!("Failed to persist watched list: {}", e);
                Some(format!("Your watched list could not be saved: {e}"))
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};

    fn entry(id: &str, imdb: f64, user: u8, runtime: u32) -> WatchedEntry {
        WatchedEntry {
            id: id.to_string(),
            title: format!("Movie {id}"),
            year: "2000".to_string(),
            poster_url: "p".to_string(),
            imdb_rating: imdb,
            user_rating: user,
            runtime_minutes: runtime,
        }
    }

    fn detail(id: &str) -> MovieDetail {
        MovieDetail {
            id: id.to_string(),
            title: "Inception".to_string(),
            year: "2010".to_string(),
            poster_url: "p".to_string(),
            runtime_minutes: Some(148),
            imdb_rating: Some(8.8),
            plot: String::new(),
            release_date: String::new(),
            actors: String::new(),
            director: String::new(),
            genre: String::new(),
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut list = Watchlist::new(MemoryStore::new());
        list.add(entry("tt2", 7.0, 8, 100)).unwrap();
        list.add(entry("tt1", 6.0, 5, 90)).unwrap();
        let ids: Vec<&str> = list.list().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["tt2", "tt1"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut list = Watchlist::new(MemoryStore::new());
        list.add(entry("tt1", 7.0, 8, 100)).unwrap();
        assert_eq!(
            list.add(entry("tt1", 7.0, 3, 100)),
            Err(WatchlistError::AlreadyWatched("tt1".to_string()))
        );
        assert_eq!(list.len(), 1);
        assert_eq!(list.get("tt1").unwrap().user_rating, 8);
    }

    #[test]
    fn test_add_persists_and_reads_back() {
        let store = MemoryStore::new();
        let mut list = Watchlist::new(store.clone());
        list.add(entry("tt1", 8.8, 9, 148)).unwrap();
        list.add(entry("tt2", 7.5, 6, 95)).unwrap();

        let blob = store.get_item(WATCHED_KEY).unwrap().unwrap();
        let stored: Vec<WatchedEntry> = serde_json::from_str(&blob).unwrap();
        assert_eq!(stored, list.list());

        let reloaded = Watchlist::load(store);
        assert_eq!(reloaded.list(), list.list());
    }

    #[test]
    fn test_remove_persists() {
        let store = MemoryStore::new();
        let mut list = Watchlist::new(store.clone());
        list.add(entry("tt1", 8.8, 9, 148)).unwrap();
        list.add(entry("tt2", 7.5, 6, 95)).unwrap();

        assert_eq!(list.remove("tt1").map(|e| e.id), Some("tt1".to_string()));
        assert_eq!(list.remove("tt1"), None);
        assert_eq!(Watchlist::load(store).list(), list.list());
    }

    #[test]
    fn test_empty_stats_are_zero() {
        let list = Watchlist::new(MemoryStore::new());
        assert_eq!(list.stats(), WatchStats::default());
    }

    #[test]
    fn test_stats() {
        let mut list = Watchlist::new(MemoryStore::new());
        list.add(entry("tt1", 8.0, 10, 150)).unwrap();
        list.add(entry("tt2", 6.0, 5, 90)).unwrap();
        let stats = list.stats();
        assert_eq!(stats.avg_imdb_rating, 7.0);
        assert_eq!(stats.avg_user_rating, 7.5);
        assert_eq!(stats.avg_runtime, 120.0);
    }

    #[test]
    fn test_corrupted_blob_starts_empty() {
        let store = MemoryStore::new();
        store.set_item(WATCHED_KEY, "{not json").unwrap();
        let mut list = Watchlist::load(store.clone());
        assert!(list.is_empty());

        list.add(entry("tt1", 8.0, 10, 150)).unwrap();
        assert_eq!(Watchlist::load(store).len(), 1);
    }

    #[test]
    fn test_write_failure_is_a_warning() {
        let mut list = Watchlist::load(BrokenStore);
        assert!(list.is_empty());
        list.add(entry("tt1", 8.0, 10, 150)).unwrap();
        assert_eq!(list.len(), 1);
        assert!(list.persist_warning().unwrap().contains("quota exceeded"));
    }

    #[test]
    fn test_non_finite_imdb_rating_rejected() {
        let store = MemoryStore::new();
        let mut list = Watchlist::new(store.clone());
        list.add(entry("tt1", 8.0, 7, 100)).unwrap();

        assert_eq!(
            list.add(entry("tt2", f64::NAN, 7, 100)),
            Err(WatchlistError::InvalidImdbRating("tt2".to_string()))
        );
        assert_eq!(
            list.add(entry("tt3", f64::INFINITY, 7, 100)),
            Err(WatchlistError::InvalidImdbRating("tt3".to_string()))
        );
        assert_eq!(list.len(), 1);

        let reloaded = Watchlist::load(store);
        assert_eq!(reloaded.list(), list.list());
    }

    #[test]
    fn test_add_checks_user_rating() {
        let mut list = Watchlist::new(MemoryStore::new());
        assert_eq!(
            list.add(entry("tt1", 8.0, 0, 100)),
            Err(WatchlistError::InvalidRating(0))
        );
        assert_eq!(
            list.add(entry("tt1", 8.0, 11, 100)),
            Err(WatchlistError::InvalidRating(11))
        );
        assert!(list.is_empty());
    }

    #[test]
    fn test_legacy_blob_loads() {
        let store = MemoryStore::new();
        store
            .set_item(
                WATCHED_KEY,
                r#"[{"imdbID":"tt1","title":"A","year":"2010","poster":"p","imdbRating":8.8,"runtime":148},
                    {"imdbID":"tt2","title":"B","year":"2011","poster":"N/A","imdbRating":null,"runtime":null}]"#,
            )
            .unwrap();
        let list = Watchlist::load(store);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get("tt2").unwrap().imdb_rating, 0.0);
        assert_eq!(list.stats().avg_imdb_rating, 4.4);
    }

    #[test]
    fn test_from_detail() {
        let watched = WatchedEntry::from_detail(&detail("tt1375666"), 9).unwrap();
        assert_eq!(watched.id, "tt1375666");
        assert_eq!(watched.imdb_rating, 8.8);
        assert_eq!(watched.runtime_minutes, 148);
        assert_eq!(watched.user_rating, 9);
    }

    #[test]
    fn test_from_detail_missing_numbers() {
        let mut d = detail("tt9");
        d.imdb_rating = None;
        d.runtime_minutes = None;
        let watched = WatchedEntry::from_detail(&d, 1).unwrap();
        assert_eq!(watched.imdb_rating, 0.0);
        assert_eq!(watched.runtime_minutes, 0);
    }

    #[test]
    fn test_from_detail_rating_bounds() {
        assert_eq!(
            WatchedEntry::from_detail(&detail("tt1"), 0),
            Err(WatchlistError::InvalidRating(0))
        );
        assert_eq!(
            WatchedEntry::from_detail(&detail("tt1"), 11),
            Err(WatchlistError::InvalidRating(11))
        );
    }
}
