use crate::omdb::OmdbError;
use thiserror::Error;

/// User-facing outcome of a failed fetch cycle.
///
/// The display text is exactly what the error surface shows. Cancellation is
/// deliberately absent: a cancelled cycle never produces an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Could not fetch movies")]
    Transport,
    #[error("Movie Not Found")]
    NotFound,
    #[error("Details not Found")]
    DetailUnavailable,
}

impl FetchError {
    /// Classify a search failure.
    pub fn from_search(error: &OmdbError) -> Self {
        match error {
            OmdbError::NotFound(_) => FetchError::NotFound,
            OmdbError::Network(_) | OmdbError::Status(_) | OmdbError::Decode(_) => {
                FetchError::Transport
            }
        }
    }

    /// Any detail failure collapses into one message.
    pub fn from_detail(_error: &OmdbError) -> Self {
        FetchError::DetailUnavailable
    }
}
