//! Slug normalization utilities.
//!
//! Provides functions for normalizing arbitrary text to URL-safe,
//! lowercase kebab-case slugs. Used for heading anchors, post slugs,
//! and clinic profile URLs.

use std::path::Path;

/// Normalize arbitrary text to a URL-safe slug.
///
/// Performs the following transformations:
/// 1. Lowercases alphanumeric characters
/// 2. Replaces every run of non-alphanumeric characters with a single hyphen
/// 3. Strips leading and trailing hyphens
///
/// The result is lowercase, hyphen-separated, and never starts or ends
/// with a hyphen. Input consisting only of punctuation yields an empty
/// string.
///
/// # Examples
///
/// ```
/// use medvoy_core::util::slug::slugify;
///
/// assert_eq!(slugify("Dental Implants in Turkey"), "dental-implants-in-turkey");
/// assert_eq!(slugify("Cost & Recovery: What to Expect?"), "cost-recovery-what-to-expect");
/// assert_eq!(slugify("  --Hip Replacement--  "), "hip-replacement");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Compute a slug from a file path's stem.
///
/// Extracts the file stem (filename without extension) and slugifies it.
/// Returns `None` if the path has no file stem. Used to derive post slugs
/// from files in the content directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use medvoy_core::util::slug::slug_from_path;
///
/// assert_eq!(
///     slug_from_path(Path::new("/content/posts/Hair_Transplant Guide.md")),
///     Some("hair-transplant-guide".to_string())
/// );
/// assert_eq!(slug_from_path(Path::new("/")), None);
/// ```
pub fn slug_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(slugify)
        .filter(|s| !s.is_empty())
}
