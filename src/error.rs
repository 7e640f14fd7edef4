//! Error types for cafe-finder

use thiserror::Error;

/// Main error type for cafe-finder operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid location format: {0} (expected \"lat,lng\")")]
    InvalidLocationFormat(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error(
        "Could not fetch cafes from any of {attempts} endpoint(s). Try again later or reduce radius."
    )]
    FetchExhausted { attempts: usize },

    #[error("Could not auto-detect location: {0}")]
    ProviderUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for cafe-finder operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_exhausted_message() {
        let err = Error::FetchExhausted { attempts: 2 };
        let msg = err.to_string();
        assert!(msg.contains("2 endpoint"));
        assert!(msg.contains("reduce radius"));
    }
}
