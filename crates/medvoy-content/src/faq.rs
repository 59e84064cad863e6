//! FAQ section extraction and schema generation.
//!
//! Posts carry an FAQ section authored as plain markdown:
//!
//! ```markdown
//! ## Frequently Asked Questions
//!
//! ### How long do veneers last?
//!
//! Typically 10–15 years with good care.
//!
//! ### Is the procedure painful?
//!
//! Local anaesthetic is used throughout.
//! ```
//!
//! Question blocks run until the next `##` heading or a horizontal rule.
//! The section itself stays in the markdown — it renders to HTML like the
//! rest of the body and is removed there (see [`crate::render`]) so the
//! page can show the structured FAQ component instead.

use regex::Regex;
use serde::Serialize;
use serde_json::{Value, json};

/// The section heading the extractor keys on. The downstream HTML removal
/// is keyed to this heading's slug; rewording the heading breaks both.
pub const FAQ_HEADING: &str = "Frequently Asked Questions";

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    /// Question text from the `###` heading.
    pub question: String,
    /// Answer markdown, as authored.
    pub answer: String,
}

impl FaqItem {
    /// The answer with markdown emphasis and link syntax stripped, for
    /// plain-text schema output.
    pub fn plain_answer(&self) -> String {
        plain_text(&self.answer)
    }
}

/// Extract the FAQ section from post markdown.
///
/// Looks for a `## Frequently Asked Questions` heading and collects each
/// `### question` block until the next `##` heading or a horizontal rule.
/// Returns an empty list when the section is absent. The input is not
/// modified — deduplication happens on the rendered HTML.
pub fn extract_faq(content: &str) -> Vec<FaqItem> {
    let section_re = Regex::new(r"^##\s+(.+?)\s*$").expect("invalid section heading regex");
    let question_re = Regex::new(r"^###\s+(.+?)\s*$").expect("invalid question heading regex");
    let rule_re = Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})\s*$").expect("invalid rule regex");

    fn flush(question: &mut Option<String>, answer_lines: &mut Vec<&str>, items: &mut Vec<FaqItem>) {
        if let Some(q) = question.take() {
            items.push(FaqItem {
                question: q,
                answer: answer_lines.join("\n").trim().to_string(),
            });
        }
        answer_lines.clear();
    }

    let mut items = Vec::new();
    let mut in_section = false;
    let mut question: Option<String> = None;
    let mut answer_lines: Vec<&str> = Vec::new();

    for line in content.lines() {
        if let Some(caps) = section_re.captures(line) {
            if in_section {
                // Next top-level heading ends the section.
                break;
            }
            in_section = caps[1].eq_ignore_ascii_case(FAQ_HEADING);
            continue;
        }

        if !in_section {
            continue;
        }

        if rule_re.is_match(line.trim()) {
            break;
        }

        if let Some(caps) = question_re.captures(line) {
            flush(&mut question, &mut answer_lines, &mut items);
            question = Some(caps[1].to_string());
        } else if question.is_some() {
            answer_lines.push(line);
        }
    }
    flush(&mut question, &mut answer_lines, &mut items);

    items
}

/// Build a schema.org `FAQPage` JSON-LD value from extracted items.
///
/// Answers are emitted as plain text.
pub fn faq_schema(items: &[FaqItem]) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": items
            .iter()
            .map(|item| {
                json!({
                    "@type": "Question",
                    "name": item.question,
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": item.plain_answer(),
                    }
                })
            })
            .collect::<Vec<_>>(),
    })
}

/// Strip markdown emphasis, inline code, and link syntax, leaving plain
/// text. Whitespace is collapsed to single spaces.
pub fn plain_text(markdown: &str) -> String {
    let link_re = Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("invalid link regex");
    let text = link_re.replace_all(markdown, "$1");
    let text = text.replace("**", "").replace("__", "");
    let text: String = text.chars().filter(|&c| c != '*' && c != '`').collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Tests
// ============================================================================
