//! Patient testimonial extraction.
//!
//! Testimonials are authored as blockquote lines in a fixed shape:
//!
//! ```markdown
//! > "Great results and half the price" — **Jane, London** (Rhinoplasty, 2023)
//! ```
//!
//! The pattern is literal: straight double quotes around the quote, an em
//! dash, bold `Name, City`, and parenthesized `Treatment, Year`. A line
//! that deviates (en dash, curly quotes, missing bold) is not a
//! testimonial and is left in the prose untouched.

use regex::Regex;
use serde::Serialize;

/// All testimonials carry the same rating; it is not parsed from source.
const FIXED_RATING: u8 = 5;

/// A patient testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    /// The quoted text, without the surrounding quotes.
    pub quote: String,
    /// Patient first name.
    pub name: String,
    /// Patient home city.
    pub city: String,
    /// Treatment received.
    pub treatment: String,
    /// Year of treatment, verbatim.
    pub year: String,
    /// Star rating; always 5.
    pub rating: u8,
}

/// Extract testimonial blockquotes.
///
/// Returns the testimonials in source order and the markdown with the
/// matched lines removed. Lines that do not match the exact pattern are
/// left in place.
pub fn extract_testimonials(content: &str) -> (Vec<Testimonial>, String) {
    let re = Regex::new(
        r#"^>\s*"([^"]+)"\s+—\s+\*\*([^,*]+),\s*([^*]+?)\*\*\s+\(([^,)]+),\s*([^)]+)\)\s*$"#,
    )
    .expect("invalid testimonial regex");

    let mut testimonials = Vec::new();
    let mut kept = Vec::new();

    for line in content.lines() {
        match re.captures(line) {
            Some(caps) => testimonials.push(Testimonial {
                quote: caps[1].trim().to_string(),
                name: caps[2].trim().to_string(),
                city: caps[3].trim().to_string(),
                treatment: caps[4].trim().to_string(),
                year: caps[5].trim().to_string(),
                rating: FIXED_RATING,
            }),
            None => kept.push(line),
        }
    }

    let mut remainder = kept.join("\n");
    if content.ends_with('\n') && !remainder.is_empty() {
        remainder.push('\n');
    }
    (testimonials, remainder)
}

// ============================================================================
// Tests
// ============================================================================
