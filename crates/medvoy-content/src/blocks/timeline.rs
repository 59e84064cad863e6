//! Treatment timeline extraction.
//!
//! A timeline block lists the stages of a treatment trip as bold
//! `Label: Title` bullets:
//!
//! ```markdown
//! <!-- timeline -->
//! - **Day 1: Arrival** Airport pickup and hotel check-in.
//! - **Day 2: Consultation** Scans, blood work, treatment plan.
//! - **Day 3: Surgery** The procedure itself.
//! <!-- /timeline -->
//! ```
//!
//! Each step carries an icon tag inferred from its text via a fixed
//! keyword table, first match wins.

use regex::Regex;
use serde::Serialize;

use super::split_delimited;

/// One step of a treatment timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineStep {
    /// The day label, e.g. "Day 1" or "Week 2".
    pub day: String,
    /// Step title, e.g. "Arrival".
    pub title: String,
    /// Free-text description; may be empty.
    pub description: String,
    /// Icon tag inferred from the step text.
    pub icon: String,
}

/// Keyword → icon table. Matched against the combined lowercase
/// `day title description` text; first match wins.
const ICON_KEYWORDS: &[(&str, &str)] = &[
    ("arriv", "plane-arrival"),
    ("flight", "plane-arrival"),
    ("airport", "plane-arrival"),
    ("consult", "stethoscope"),
    ("assessment", "stethoscope"),
    ("scan", "microscope"),
    ("blood", "microscope"),
    ("surgery", "scalpel"),
    ("operation", "scalpel"),
    ("procedure", "scalpel"),
    ("implant", "scalpel"),
    ("recover", "bed"),
    ("rest", "bed"),
    ("heal", "bandage"),
    ("follow", "calendar-check"),
    ("check-up", "calendar-check"),
    ("aftercare", "calendar-check"),
    ("return", "plane-departure"),
    ("depart", "plane-departure"),
    ("home", "plane-departure"),
];

const DEFAULT_ICON: &str = "circle";

/// Extract all `<!-- timeline -->` blocks.
///
/// Returns the steps in source order and the markdown with the matched
/// blocks removed. Bullet lines that do not match the
/// `- **Label: Title** description` shape are skipped.
pub fn extract_timeline(content: &str) -> (Vec<TimelineStep>, String) {
    let (interiors, remainder) = split_delimited(content, "timeline");

    let step_re = Regex::new(r"^\s*-\s+\*\*([^:*]+):\s*([^*]+?)\s*\*\*\s*(.*)$")
        .expect("invalid timeline step regex");

    let mut steps = Vec::new();
    for interior in &interiors {
        for line in interior.lines() {
            let Some(caps) = step_re.captures(line) else {
                continue;
            };
            let day = caps[1].trim().to_string();
            let title = caps[2].trim().to_string();
            let description = caps[3].trim().to_string();
            let icon = infer_icon(&format!("{day} {title} {description}"));
            steps.push(TimelineStep {
                day,
                title,
                description,
                icon: icon.to_string(),
            });
        }
    }
    (steps, remainder)
}

/// First matching keyword in the table decides the icon.
fn infer_icon(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    ICON_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

// ============================================================================
// Tests
// ============================================================================
