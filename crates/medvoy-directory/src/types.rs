//! Directory configuration and query filter.

use serde::{Deserialize, Serialize};

/// Search configuration, loaded from the platform config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Enable the Jaro-Winkler fallback for tokens with no substring hit.
    #[serde(default = "default_true")]
    pub fuzzy_enabled: bool,

    /// Minimum Jaro-Winkler similarity for a fuzzy token match.
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,

    /// Result limit when the request does not specify one.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

fn default_true() -> bool {
    true
}

fn default_fuzzy_threshold() -> f64 {
    0.88
}

fn default_limit() -> usize {
    20
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            fuzzy_enabled: default_true(),
            fuzzy_threshold: default_fuzzy_threshold(),
            default_limit: default_limit(),
        }
    }
}

/// Query parameters for a directory search.
///
/// All filters are optional; an empty filter lists every clinic up to
/// the limit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClinicFilter {
    /// Free-text query.
    pub q: Option<String>,
    /// Procedure filter, display name or slug.
    pub procedure: Option<String>,
    /// Country filter, display name or slug.
    pub country: Option<String>,
    /// City filter, display name or slug.
    pub city: Option<String>,
    /// Result limit override.
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = DirectoryConfig::default();
        assert!(config.fuzzy_enabled);
        assert_eq!(config.default_limit, 20);
    }

    #[test]
    fn test_config_partial_source_fills_defaults() {
        let config: DirectoryConfig =
            serde_json::from_value(serde_json::json!({ "fuzzy_enabled": false })).unwrap();
        assert!(!config.fuzzy_enabled);
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.fuzzy_threshold, 0.88);
    }
}
