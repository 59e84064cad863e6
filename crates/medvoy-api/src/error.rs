//! API error type and HTTP status mapping.
//!
//! Every error renders as the JSON envelope
//! `{"error": {"category": ..., "message": ...}}`. Auth failures (401)
//! are produced by the middleware in `medvoy-auth` with the same shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Result type alias for medvoy-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling a request.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error bubbled up from storage or content processing.
    #[error(transparent)]
    Core(#[from] medvoy_core::Error),

    /// The request body or parameters were malformed.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The caller is authenticated but does not own the resource.
    #[error("you do not own this clinic")]
    Forbidden,

    /// An upload exceeded the size cap.
    #[error("upload exceeds the {limit_bytes} byte limit")]
    PayloadTooLarge {
        /// The configured cap.
        limit_bytes: usize,
    },

    /// Multipart decoding failed.
    #[error("multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl Error {
    fn status_and_category(&self) -> (StatusCode, &'static str) {
        match self {
            Error::Core(core) if core.is_not_found() => (StatusCode::NOT_FOUND, "not_found"),
            Error::Core(medvoy_core::Error::Invalid(_)) => (StatusCode::BAD_REQUEST, "invalid"),
            Error::Core(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
            Error::BadRequest(_) => (StatusCode::BAD_REQUEST, "invalid"),
            Error::Forbidden => (StatusCode::FORBIDDEN, "ownership"),
            Error::PayloadTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "upload"),
            Error::Multipart(_) => (StatusCode::BAD_REQUEST, "upload"),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, category) = self.status_and_category();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        let body = json!({
            "error": {
                "category": category,
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = Error::Core(medvoy_core::Error::not_found("clinic", "x"));
        assert_eq!(err.status_and_category().0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_maps_to_400() {
        let err = Error::Core(medvoy_core::Error::Invalid("bad".into()));
        assert_eq!(err.status_and_category().0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_io_maps_to_500() {
        let io = std::io::Error::other("disk on fire");
        let err = Error::Core(medvoy_core::Error::Io(io));
        assert_eq!(
            err.status_and_category().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_forbidden_maps_to_403() {
        assert_eq!(Error::Forbidden.status_and_category().0, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_payload_too_large_maps_to_413() {
        let err = Error::PayloadTooLarge { limit_bytes: 5 };
        assert_eq!(err.status_and_category().0, StatusCode::PAYLOAD_TOO_LARGE);
    }
}
