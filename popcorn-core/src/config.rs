use thiserror::Error;
use tracing::info;

pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com/";

const API_KEY_VAR: &str = "POPCORN_OMDB_API_KEY";
const BASE_URL_VAR: &str = "POPCORN_OMDB_BASE_URL";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No OMDb API key configured (set POPCORN_OMDB_API_KEY)")]
    MissingApiKey,
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Connection settings for the OMDb API.
///
/// Built once at startup and handed to `OmdbClient::new`; nothing else reads
/// the credential.
#[derive(Clone, Debug, PartialEq)]
pub struct OmdbConfig {
    pub api_key: String,
    pub base_url: String,
}

impl OmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_OMDB_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read `POPCORN_OMDB_API_KEY` / `POPCORN_OMDB_BASE_URL` from the process
    /// environment, loading `.env` first if one exists.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            info!("Loaded OMDb settings from .env");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like `from_env`, but with the dotenv values read from `path`. Variables
    /// already set in the process environment take precedence.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let entries = dotenvy::from_path_iter(path)
            .map_err(|e| ConfigError::Config(format!("Cannot read {}: {e}", path.display())))?;

        let mut file_vars = std::collections::HashMap::new();
        for entry in entries {
            let (key, value) = entry
                .map_err(|e| ConfigError::Config(format!("Bad line in {}: {e}", path.display())))?;
            file_vars.insert(key, value);
        }
        info!("Loaded OMDb settings from {}", path.display());

        Self::from_lookup(|name| {
            std::env::var(name)
                .ok()
                .or_else(|| file_vars.get(name).cloned())
        })
    }

    /// Read the same variables as baked in at compile time. Used by the
    /// browser build, which has no process environment.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| match name {
            API_KEY_VAR => option_env!("POPCORN_OMDB_API_KEY").map(str::to_string),
            BASE_URL_VAR => option_env!("POPCORN_OMDB_BASE_URL").map(str::to_string),
            _ => None,
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let base_url = match lookup(BASE_URL_VAR).filter(|s| !s.trim().is_empty()) {
            Some(url) => {
                reqwest::Url::parse(url.trim())
                    .map_err(|e| ConfigError::Config(format!("Invalid {BASE_URL_VAR}: {e}")))?;
                url.trim().to_string()
            }
            None => DEFAULT_OMDB_BASE_URL.to_string(),
        };

        info!("OMDb endpoint: {}", base_url);
        Ok(Self { api_key, base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_base_url() {
        let config = OmdbConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "abc123")])).unwrap();
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.base_url, DEFAULT_OMDB_BASE_URL);
    }

    #[test]
    fn test_custom_base_url() {
        let config = OmdbConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "abc123"),
            (BASE_URL_VAR, "http://127.0.0.1:8080/"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(
            OmdbConfig::from_lookup(lookup_from(&[])),
            Err(ConfigError::MissingApiKey)
        );
        assert_eq!(
            OmdbConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")])),
            Err(ConfigError::MissingApiKey)
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = OmdbConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "abc123"),
            (BASE_URL_VAR, "not a url"),
        ]));
        assert!(matches!(result, Err(ConfigError::Config(_))));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_env_file_and_process_env() {
        // The only test that touches these process variables
        std::env::remove_var(API_KEY_VAR);
        std::env::remove_var(BASE_URL_VAR);

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "# OMDb\nPOPCORN_OMDB_API_KEY=from-file\nPOPCORN_OMDB_BASE_URL=http://127.0.0.1:9000/\n",
        )
        .unwrap();

        let config = OmdbConfig::from_env_file(&path).unwrap();
        assert_eq!(config.api_key, "from-file");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/");

        std::env::set_var(API_KEY_VAR, "from-env");
        let config = OmdbConfig::from_env_file(&path).unwrap();
        assert_eq!(config.api_key, "from-env");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/");

        let config = OmdbConfig::from_env().unwrap();
        assert_eq!(config.api_key, "from-env");

        std::env::remove_var(API_KEY_VAR);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_env_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = OmdbConfig::from_env_file(dir.path().join("nope.env"));
        assert!(matches!(result, Err(ConfigError::Config(_))));
    }

    #[test]
    fn test_builder() {
        let config = OmdbConfig::new("k").with_base_url("http://localhost/");
        assert_eq!(config.api_key, "k");
        assert_eq!(config.base_url, "http://localhost/");
    }
}
