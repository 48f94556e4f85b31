//! Error Types
//!
//! Failures surfaced by the character API and the collection loader.

use thiserror::Error;

/// A single page request failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Request(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// The load sequence stopped before producing a collection
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("page {page}: {source}")]
    Api { page: u32, source: ApiError },

    #[error("load cancelled")]
    Cancelled,
}
