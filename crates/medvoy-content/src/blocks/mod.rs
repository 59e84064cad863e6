//! Comment-delimited block extraction.
//!
//! Post bodies embed structured regions between HTML comment markers:
//!
//! ```markdown
//! <!-- checklist -->
//! - Passport valid for six months
//! - Travel insurance with medical cover
//! <!-- /checklist -->
//! ```
//!
//! Each extractor finds all non-overlapping `<!-- NAME -->…<!-- /NAME -->`
//! regions for its block name, parses the interior with line-level rules,
//! and returns the records in source order together with the input text
//! with every matched region removed.
//!
//! Malformed interior lines are skipped without error; an absent delimiter
//! pair yields an empty list and the original text unchanged. Running an
//! extractor twice over the same source yields the same records.

pub mod checklist;
pub mod cost_table;
pub mod testimonial;
pub mod timeline;
pub mod warning;

use regex::Regex;

/// Collect the interiors of all `<!-- name -->…<!-- /name -->` regions and
/// return them together with the source text with those regions removed.
///
/// Matching is non-overlapping and first-to-first-close: a stray opening
/// marker without a closing partner matches nothing and is left in place.
pub(crate) fn split_delimited(source: &str, name: &str) -> (Vec<String>, String) {
    let escaped = regex::escape(name);
    let pattern = format!(r"(?s)<!--\s*{escaped}\s*-->\r?\n?(.*?)<!--\s*/{escaped}\s*-->\r?\n?");
    let re = Regex::new(&pattern).expect("invalid block delimiter regex");

    let mut interiors = Vec::new();
    for caps in re.captures_iter(source) {
        interiors.push(caps[1].to_string());
    }

    let remainder = re.replace_all(source, "").into_owned();
    (interiors, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_single_region() {
        let src = "before\n<!-- checklist -->\ninner\n<!-- /checklist -->\nafter";
        let (interiors, rest) = split_delimited(src, "checklist");
        assert_eq!(interiors, vec!["inner\n"]);
        assert_eq!(rest, "before\nafter");
    }

    #[test]
    fn test_split_multiple_regions_in_order() {
        let src = "<!-- x -->\na\n<!-- /x -->\nmid\n<!-- x -->\nb\n<!-- /x -->";
        let (interiors, rest) = split_delimited(src, "x");
        assert_eq!(interiors, vec!["a\n", "b\n"]);
        assert_eq!(rest, "mid\n");
    }

    #[test]
    fn test_split_absent_region() {
        let src = "no blocks here";
        let (interiors, rest) = split_delimited(src, "cost-table");
        assert!(interiors.is_empty());
        assert_eq!(rest, src);
    }

    #[test]
    fn test_split_unclosed_marker_left_in_place() {
        let src = "text\n<!-- timeline -->\nnever closed";
        let (interiors, rest) = split_delimited(src, "timeline");
        assert!(interiors.is_empty());
        assert_eq!(rest, src);
    }

    #[test]
    fn test_split_does_not_match_other_names() {
        let src = "<!-- timeline -->\nt\n<!-- /timeline -->";
        let (interiors, rest) = split_delimited(src, "checklist");
        assert!(interiors.is_empty());
        assert_eq!(rest, src);
    }
}
