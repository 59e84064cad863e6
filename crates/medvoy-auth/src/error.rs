//! Error types for medvoy-auth.

use thiserror::Error;

/// Authentication failures. All of them map to HTTP 401.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AuthError {
    /// No Authorization header, or not a Bearer scheme.
    #[error("missing or invalid bearer token")]
    MissingToken,

    /// The token did not validate.
    #[error("token rejected: {0}")]
    InvalidToken(String),
}
