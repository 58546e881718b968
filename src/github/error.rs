//! Error types for GitHub operations

use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while talking to the GitHub REST API
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure (connection, timeout, body decoding)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response to a GET
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Response body does not have the expected shape
    #[error("Unexpected response: {0}")]
    Malformed(#[from] serde_json::Error),
}
