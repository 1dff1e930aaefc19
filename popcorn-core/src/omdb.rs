//! OMDb API client
//!
//! Search: `GET <base>?apikey=<key>&s=<query>`
//! Detail: `GET <base>?apikey=<key>&i=<imdb id>`

use std::future::Future;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::OmdbConfig;
use crate::models::{MovieDetail, SearchResult};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OmdbError {
    #[error("HTTP request failed: {0}")]
    Network(String),
    #[error("OMDb API returned status {0}")]
    Status(u16),
    #[error("Failed to parse OMDb response: {0}")]
    Decode(String),
    /// OMDb answered `Response: "False"`; carries its `Error` text
    #[error("OMDb reported no match: {0}")]
    NotFound(String),
}

/// The two lookups the fetch controller needs.
///
/// `OmdbClient` is the real implementation; tests script their own.
pub trait MovieApi: Clone + 'static {
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<SearchResult>, OmdbError>>;

    fn detail(&self, id: &str) -> impl Future<Output = Result<MovieDetail, OmdbError>>;
}

#[derive(Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Search")]
    search: Option<Vec<OmdbSearchItem>>,
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Deserialize)]
struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
}

#[derive(Deserialize)]
struct OmdbDetail {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
    #[serde(rename = "Runtime", default)]
    runtime: String,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: String,
    #[serde(rename = "Plot", default)]
    plot: String,
    #[serde(rename = "Released", default)]
    released: String,
    #[serde(rename = "Actors", default)]
    actors: String,
    #[serde(rename = "Director", default)]
    director: String,
    #[serde(rename = "Genre", default)]
    genre: String,
}

fn is_false(response: &Option<String>) -> bool {
    response.as_deref() == Some("False")
}

/// Interpret a search payload.
///
/// `Response: "False"` means no match. A payload without `Search` is an
/// empty result, not an error.
pub fn parse_search_body(body: &str) -> Result<Vec<SearchResult>, OmdbError> {
    let envelope: SearchEnvelope =
        serde_json::from_str(body).map_err(|e| OmdbError::Decode(e.to_string()))?;

    if is_false(&envelope.response) {
        return Err(OmdbError::NotFound(
            envelope.error.unwrap_or_else(|| "Movie not found!".to_string()),
        ));
    }

    Ok(envelope
        .search
        .unwrap_or_default()
        .into_iter()
        .map(|item| SearchResult {
            id: item.imdb_id,
            title: item.title,
            year: item.year,
            poster_url: item.poster,
        })
        .collect())
}

/// Interpret a detail payload for `id`.
pub fn parse_detail_body(id: &str, body: &str) -> Result<MovieDetail, OmdbError> {
    let detail: OmdbDetail =
        serde_json::from_str(body).map_err(|e| OmdbError::Decode(e.to_string()))?;

    if is_false(&detail.response) {
        return Err(OmdbError::NotFound(
            detail.error.unwrap_or_else(|| "Incorrect IMDb ID.".to_string()),
        ));
    }

    Ok(MovieDetail {
        id: detail.imdb_id.unwrap_or_else(|| id.to_string()),
        title: detail.title,
        year: detail.year,
        poster_url: detail.poster,
        runtime_minutes: parse_runtime(&detail.runtime),
        imdb_rating: parse_rating(&detail.imdb_rating),
        plot: detail.plot,
        release_date: detail.released,
        actors: detail.actors,
        director: detail.director,
        genre: detail.genre,
    })
}

/// "148 min" -> 148. "N/A" and anything without a leading number -> None.
pub fn parse_runtime(runtime: &str) -> Option<u32> {
    runtime.split_whitespace().next()?.parse().ok()
}

/// "8.8" -> 8.8. "N/A" -> None.
pub fn parse_rating(rating: &str) -> Option<f64> {
    rating.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

#[derive(Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(config: &OmdbConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &OmdbConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    async fn get(&self, params: &[(&str, &str)]) -> Result<String, OmdbError> {
        let mut query: Vec<(&str, &str)> = vec![("apikey", self.api_key.as_str())];
        query.extend_from_slice(params);
        debug!("OMDb API request: {} {:?}", self.base_url, params);

        let response = self
            .http
            .get(&self.base_url)
            .query(&query)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| OmdbError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("OMDb API error response ({})", status);
            return Err(OmdbError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| OmdbError::Network(e.to_string()))
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, OmdbError> {
        info!("🎬 OMDb: Searching for '{}'", query);
        let body = self.get(&[("s", query)]).await?;
        let results = parse_search_body(&body)?;
        info!("🎬 OMDb: {} result(s) for '{}'", results.len(), query);
        Ok(results)
    }

    pub async fn detail(&self, id: &str) -> Result<MovieDetail, OmdbError> {
        info!("🎬 OMDb: Fetching details for {}", id);
        let body = self.get(&[("i", id)]).await?;
        parse_detail_body(id, &body)
    }
}

impl MovieApi for OmdbClient {
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<SearchResult>, OmdbError>> {
        OmdbClient::search(self, query)
    }

    fn detail(&self, id: &str) -> impl Future<Output = Result<MovieDetail, OmdbError>> {
        OmdbClient::detail(self, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results() {
        let body = r#"{"Search":[{"imdbID":"tt1","Title":"X","Year":"2000","Poster":"p","Type":"movie"}],"totalResults":"1","Response":"True"}"#;
        let results = parse_search_body(body).unwrap();
        assert_eq!(
            results,
            vec![SearchResult {
                id: "tt1".to_string(),
                title: "X".to_string(),
                year: "2000".to_string(),
                poster_url: "p".to_string(),
            }]
        );
    }

    #[test]
    fn test_search_not_found() {
        let body = r#"{"Response":"False","Error":"Movie not found!"}"#;
        assert_eq!(
            parse_search_body(body),
            Err(OmdbError::NotFound("Movie not found!".to_string()))
        );
    }

    #[test]
    fn test_search_too_many_results_is_not_found() {
        let body = r#"{"Response":"False","Error":"Too many results."}"#;
        assert!(matches!(parse_search_body(body), Err(OmdbError::NotFound(_))));
    }

    #[test]
    fn test_search_without_results_field_is_empty() {
        assert_eq!(parse_search_body(r#"{"Response":"True"}"#), Ok(vec![]));
        assert_eq!(parse_search_body("{}"), Ok(vec![]));
    }

    #[test]
    fn test_search_garbage_is_decode_error() {
        assert!(matches!(
            parse_search_body("<html>"),
            Err(OmdbError::Decode(_))
        ));
    }

    #[test]
    fn test_detail_fields() {
        let body = r#"{
            "Title":"Inception","Year":"2010","Released":"16 Jul 2010","Runtime":"148 min",
            "Genre":"Action, Adventure, Sci-Fi","Director":"Christopher Nolan",
            "Actors":"Leonardo DiCaprio, Joseph Gordon-Levitt","Plot":"A thief...",
            "Poster":"https://example.com/p.jpg","imdbRating":"8.8","imdbID":"tt1375666",
            "Response":"True"
        }"#;
        let detail = parse_detail_body("tt1375666", body).unwrap();
        assert_eq!(detail.id, "tt1375666");
        assert_eq!(detail.title, "Inception");
        assert_eq!(detail.runtime_minutes, Some(148));
        assert_eq!(detail.imdb_rating, Some(8.8));
        assert_eq!(detail.release_date, "16 Jul 2010");
        assert_eq!(detail.director, "Christopher Nolan");
        assert_eq!(detail.genre, "Action, Adventure, Sci-Fi");
    }

    #[test]
    fn test_detail_not_available_fields() {
        let body = r#"{"Title":"Obscure","Runtime":"N/A","imdbRating":"N/A","Response":"True"}"#;
        let detail = parse_detail_body("tt9", body).unwrap();
        assert_eq!(detail.id, "tt9");
        assert_eq!(detail.runtime_minutes, None);
        assert_eq!(detail.imdb_rating, None);
        assert_eq!(detail.plot, "");
    }

    #[test]
    fn test_detail_incorrect_id() {
        let body = r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#;
        assert_eq!(
            parse_detail_body("bogus", body),
            Err(OmdbError::NotFound("Incorrect IMDb ID.".to_string()))
        );
    }

    #[test]
    fn test_parse_runtime() {
        assert_eq!(parse_runtime("90 min"), Some(90));
        assert_eq!(parse_runtime("N/A"), None);
        assert_eq!(parse_runtime(""), None);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("7.4"), Some(7.4));
        assert_eq!(parse_rating("N/A"), None);
        assert_eq!(parse_rating("NaN"), None);
    }
}
