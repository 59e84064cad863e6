//! Error types for medvoy-client.

use thiserror::Error;

/// Result type alias for medvoy-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in medvoy-client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with its error envelope
    #[error("API error {status} ({category}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Envelope category, e.g. "ownership"
        category: String,
        /// Human-readable message
        message: String,
    },
}
