//! Bhagavad Gita API client
//!
//! This crate is the gateway facade for the RapidAPI-hosted Bhagavad Gita
//! service: a fixed base URL, fixed request headers, and typed projections
//! of the chapter and verse records it returns.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;
pub mod types;

pub use api::{ApiClient, ApiConfig, GitaApi};
pub use types::{Chapter, Commentary, Translation, Verse};

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for API operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Non-success HTTP status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },
}

impl Error {
    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
