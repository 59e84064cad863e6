//! Error types for medvoy-core.

use thiserror::Error;

/// Result type alias for medvoy-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors shared across the Medvoy crates.
///
/// Leaf crates either use this type directly (pure content processing) or
/// wrap it in their own `Error` with a `#[from]` conversion.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Filesystem or network I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML frontmatter decoding failure
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A named resource does not exist
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource kind, e.g. "post" or "clinic"
        resource: &'static str,
        /// The identifier that failed to resolve
        id: String,
    },

    /// Input failed validation before reaching storage
    #[error("invalid input: {0}")]
    Invalid(String),
}

impl Error {
    /// Shorthand for [`Error::NotFound`].
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Returns `true` if this error maps to a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
