//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-200 status code received
    #[error("request to {url} failed with status {status}")]
    InvalidStatus {
        /// The URL that was requested
        url: String,
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
