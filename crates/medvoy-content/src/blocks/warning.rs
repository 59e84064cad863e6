//! Warning callout extraction.
//!
//! ```markdown
//! <!-- warning -->
//! **Never fly within 48 hours of surgery**
//! Cabin pressure increases the risk of complications. Always get a
//! fit-to-fly certificate first.
//! <!-- /warning -->
//! ```
//!
//! The bolded first line is the title; the severity is inferred from the
//! title with a fixed keyword table, first match wins.

use regex::Regex;
use serde::Serialize;

use super::split_delimited;

/// Severity of a warning callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    /// Informational note.
    Info,
    /// Needs attention but not dangerous.
    Caution,
    /// Risk of harm if ignored.
    Danger,
}

/// A warning callout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// Inferred severity.
    pub severity: WarningSeverity,
    /// Title from the bolded first line.
    pub title: String,
    /// Remaining interior text, joined.
    pub text: String,
}

/// Title keyword → severity. First match wins; anything else is Info.
const SEVERITY_KEYWORDS: &[(&str, WarningSeverity)] = &[
    ("never", WarningSeverity::Danger),
    ("do not", WarningSeverity::Danger),
    ("danger", WarningSeverity::Danger),
    ("avoid", WarningSeverity::Danger),
    ("risk", WarningSeverity::Caution),
    ("caution", WarningSeverity::Caution),
    ("careful", WarningSeverity::Caution),
    ("before you book", WarningSeverity::Caution),
];

/// Extract all `<!-- warning -->` blocks.
///
/// Returns the warnings in source order and the markdown with the matched
/// blocks removed. A block whose first non-empty line is not fully bolded
/// is dropped (the region is still removed from the remainder).
pub fn extract_warnings(content: &str) -> (Vec<Warning>, String) {
    let (interiors, remainder) = split_delimited(content, "warning");

    let title_re = Regex::new(r"^\*\*(.+?)\*\*$").expect("invalid warning title regex");

    let mut warnings = Vec::new();
    for interior in &interiors {
        let mut lines = interior.lines().filter(|l| !l.trim().is_empty());
        let Some(first) = lines.next() else {
            continue;
        };
        let Some(caps) = title_re.captures(first.trim()) else {
            continue;
        };
        let title = caps[1].trim().to_string();
        let text = lines.map(str::trim).collect::<Vec<_>>().join(" ");

        warnings.push(Warning {
            severity: infer_severity(&title),
            title,
            text,
        });
    }
    (warnings, remainder)
}

fn infer_severity(title: &str) -> WarningSeverity {
    let lower = title.to_lowercase();
    SEVERITY_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, severity)| *severity)
        .unwrap_or(WarningSeverity::Info)
}

// ============================================================================
// Tests
// ============================================================================
