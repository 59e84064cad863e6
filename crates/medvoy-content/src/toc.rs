//! Table-of-contents construction.
//!
//! Scans rendered article HTML for heading tags that carry ids (see
//! [`crate::render::inject_heading_ids`]) and builds a flat outline in
//! document order. Nesting is expressed through the `level` field; the
//! page template indents accordingly.

use regex::Regex;
use serde::Serialize;

/// One entry of the article outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocItem {
    /// Anchor id of the heading.
    pub id: String,
    /// Heading text with inline tags stripped.
    pub label: String,
    /// Heading level, 2–6.
    pub level: u8,
}

/// Build the outline from rendered HTML.
///
/// Headings without an id attribute are skipped.
pub fn build_toc(html: &str) -> Vec<TocItem> {
    let heading_re = Regex::new(r#"(?s)<h([2-6]) id="([^"]*)">(.*?)</h[2-6]>"#)
        .expect("invalid TOC heading regex");
    let tag_re = Regex::new(r"<[^>]+>").expect("invalid tag regex");

    heading_re
        .captures_iter(html)
        .map(|caps| TocItem {
            id: caps[2].to_string(),
            label: tag_re.replace_all(&caps[3], "").trim().to_string(),
            level: caps[1].parse().unwrap_or(2),
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toc_in_document_order() {
        let html = "<h2 id=\"costs\">Costs</h2><p>x</p>\
                    <h3 id=\"deposits\">Deposits</h3>\
                    <h2 id=\"recovery\">Recovery</h2>";
        let toc = build_toc(html);
        assert_eq!(toc.len(), 3);
        assert_eq!(toc[0].id, "costs");
        assert_eq!(toc[0].level, 2);
        assert_eq!(toc[1].id, "deposits");
        assert_eq!(toc[1].level, 3);
        assert_eq!(toc[2].label, "Recovery");
    }

    #[test]
    fn test_headings_without_ids_skipped() {
        let html = "<h2>No anchor</h2><h2 id=\"yes\">Yes</h2>";
        let toc = build_toc(html);
        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].id, "yes");
    }

    #[test]
    fn test_inline_tags_stripped_from_label() {
        let html = r#"<h2 id="implants">Using <code>implants</code> well</h2>"#;
        let toc = build_toc(html);
        assert_eq!(toc[0].label, "Using implants well");
    }

    #[test]
    fn test_empty_html() {
        assert!(build_toc("").is_empty());
    }
}
