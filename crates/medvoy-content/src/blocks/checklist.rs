//! Pre-travel checklist extraction.
//!
//! ```markdown
//! <!-- checklist -->
//! - Passport valid for six months
//! - Travel insurance with medical cover
//! <!-- /checklist -->
//! ```
//!
//! Items are plain strings, one per leading-dash bullet.

use regex::Regex;

use super::split_delimited;

/// Extract all `<!-- checklist -->` blocks.
///
/// Returns the items in source order and the markdown with the matched
/// blocks removed. Non-bullet interior lines are skipped.
pub fn extract_checklist(content: &str) -> (Vec<String>, String) {
    let (interiors, remainder) = split_delimited(content, "checklist");

    let item_re = Regex::new(r"^\s*-\s+(.+)$").expect("invalid checklist item regex");

    let mut items = Vec::new();
    for interior in &interiors {
        for line in interior.lines() {
            if let Some(caps) = item_re.captures(line) {
                items.push(caps[1].trim().to_string());
            }
        }
    }
    (items, remainder)
}

// ============================================================================
// Tests
// ============================================================================
