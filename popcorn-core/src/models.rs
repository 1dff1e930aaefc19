//! Movie data as the app sees it
//!
//! OMDb's wire format lives in `omdb`; these are the shapes handed to the
//! controller, the watchlist and the views.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of a title search, in endpoint relevance order
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
}

/// Full record for the selected movie
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    /// Leading integer of OMDb's `Runtime` ("148 min"), absent for "N/A"
    pub runtime_minutes: Option<u32>,
    pub imdb_rating: Option<f64>,
    pub plot: String,
    pub release_date: String,
    pub actors: String,
    pub director: String,
    pub genre: String,
}

/// A movie the user has watched and rated.
///
/// Serialized with the key names the widget has always written to
/// `localStorage`. Older entries may lack `userRating` and carry `null` for
/// figures OMDb reported as "N/A"; both read back as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedEntry {
    #[serde(rename = "imdbID")]
    pub id: String,
    pub title: String,
    pub year: String,
    #[serde(rename = "poster")]
    pub poster_url: String,
    #[serde(rename = "imdbRating", default, deserialize_with = "null_as_zero")]
    pub imdb_rating: f64,
    #[serde(rename = "userRating", default, deserialize_with = "null_as_zero")]
    pub user_rating: u8,
    #[serde(rename = "runtime", default, deserialize_with = "null_as_zero")]
    pub runtime_minutes: u32,
}

fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Averages shown in the watched summary
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchStats {
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime: f64,
}
