//! YAML frontmatter extraction from post markdown.
//!
//! Frontmatter is metadata at the start of a markdown file, delimited by `---`:
//!
//! ```markdown
//! ---
//! title: Dental Veneers in Turkey
//! category: dental
//! ---
//!
//! Body of the post starts here.
//! ```
//!
//! The extraction returns a generic `serde_yaml::Value`; the store crate
//! defines the concrete post metadata struct and deserializes from it.
//!
//! # Usage
//!
//! ```rust
//! use medvoy_content::frontmatter::extract_frontmatter;
//!
//! let content = "---\ntitle: Test\n---\n\nBody";
//! let result = extract_frontmatter(content);
//!
//! assert!(result.has_frontmatter());
//! assert_eq!(result.get_str("title"), Some("Test"));
//! assert_eq!(result.body().trim(), "Body");
//! ```

use medvoy_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_yaml::Value;

/// Result of frontmatter extraction.
///
/// Holds the parsed YAML value (if present) and the body content after
/// the closing delimiter.
#[derive(Debug, Clone)]
pub struct FrontmatterResult<'a> {
    /// Parsed YAML frontmatter, if present and valid.
    value: Option<Value>,
    /// Body content after the frontmatter delimiter.
    body: &'a str,
}

impl<'a> FrontmatterResult<'a> {
    fn with_frontmatter(value: Value, body: &'a str) -> Self {
        Self {
            value: Some(value),
            body,
        }
    }

    fn without_frontmatter(body: &'a str) -> Self {
        Self { value: None, body }
    }

    /// Check if valid frontmatter was found and parsed.
    pub fn has_frontmatter(&self) -> bool {
        self.value.is_some()
    }

    /// Get the raw YAML value, if present.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Get the body content (everything after the frontmatter).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Get a string field from the frontmatter.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.value.as_ref()?.get(key)?.as_str()
    }

    /// Deserialize the frontmatter into a concrete metadata type.
    ///
    /// Returns `None` if no frontmatter was found, `Err` if the YAML does
    /// not match the target type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.value {
            Some(value) => {
                let parsed: T = serde_yaml::from_value(value.clone())
                    .map_err(|e| Error::Invalid(format!("frontmatter mismatch: {e}")))?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }
}

/// Extract YAML frontmatter from markdown content.
///
/// # Behavior
///
/// - No opening `---` on the first line: body is the whole input,
///   `has_frontmatter() == false`
/// - Delimiters present but YAML invalid: logs a warning, returns the body
///   after the closing delimiter with no frontmatter value
/// - Opening delimiter without a closing one: the whole input is the body
pub fn extract_frontmatter(content: &str) -> FrontmatterResult<'_> {
    if !content.starts_with("---") {
        return FrontmatterResult::without_frontmatter(content);
    }

    let after_open = match content[3..].find('\n') {
        Some(pos) => &content[3 + pos + 1..],
        None => return FrontmatterResult::without_frontmatter(content),
    };

    // Closing delimiter: either immediately (empty frontmatter) or after
    // the YAML block.
    let (yaml, after_close) = if let Some(rest) = after_open.strip_prefix("---") {
        ("", rest)
    } else if let Some(pos) = after_open.find("\n---") {
        (&after_open[..pos], &after_open[pos + 4..])
    } else {
        log::warn!("frontmatter opened but never closed; treating whole file as body");
        return FrontmatterResult::without_frontmatter(content);
    };

    let body = after_close.strip_prefix('\n').unwrap_or(after_close);

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(value) => FrontmatterResult::with_frontmatter(value, body),
        Err(e) => {
            log::warn!("unparseable frontmatter YAML: {e}");
            FrontmatterResult::without_frontmatter(body)
        }
    }
}

/// Strip frontmatter from content, returning only the body.
pub fn strip_frontmatter(content: &str) -> &str {
    extract_frontmatter(content).body()
}

// ============================================================================
// Tests
// ============================================================================
