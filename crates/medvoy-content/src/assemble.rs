//! Full article assembly and the mid-article CTA split.
//!
//! [`compose_body`] runs the whole pipeline over one post body: block
//! extraction in a fixed order, FAQ extraction, rendering, TOC, and the
//! CTA split. The page template interleaves the structured pieces with
//! the two HTML halves.

use serde::Serialize;
use serde_json::Value;

use crate::blocks::checklist::extract_checklist;
use crate::blocks::cost_table::{CostRow, extract_cost_tables};
use crate::blocks::testimonial::{Testimonial, extract_testimonials};
use crate::blocks::timeline::{TimelineStep, extract_timeline};
use crate::blocks::warning::{Warning, extract_warnings};
use crate::faq::{FaqItem, extract_faq, faq_schema};
use crate::render::render_article_html;
use crate::toc::{TocItem, build_toc};

/// Rendered HTML split around the call-to-action insertion point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaSplit {
    /// HTML before the CTA.
    pub before: String,
    /// HTML after the CTA; empty when the CTA is appended at the end.
    pub after: String,
}

/// Everything derived from one post body.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleBody {
    /// Article outline from rendered heading anchors.
    pub toc: Vec<TocItem>,
    /// HTML up to the CTA insertion point.
    pub html_before_cta: String,
    /// HTML after the CTA insertion point.
    pub html_after_cta: String,
    /// Cost comparison rows, in source order.
    pub cost_rows: Vec<CostRow>,
    /// Treatment timeline steps.
    pub timeline: Vec<TimelineStep>,
    /// Pre-travel checklist items.
    pub checklist: Vec<String>,
    /// Warning callouts.
    pub warnings: Vec<Warning>,
    /// Patient testimonials.
    pub testimonials: Vec<Testimonial>,
    /// FAQ items; the rendered FAQ section is stripped from the HTML.
    pub faq: Vec<FaqItem>,
    /// schema.org FAQPage JSON-LD, present when the post has FAQs.
    pub faq_schema: Option<Value>,
}

/// Run the extraction/render pipeline over a post body (markdown after
/// frontmatter removal).
pub fn compose_body(markdown: &str) -> ArticleBody {
    let (cost_rows, md) = extract_cost_tables(markdown);
    let (timeline, md) = extract_timeline(&md);
    let (checklist, md) = extract_checklist(&md);
    let (warnings, md) = extract_warnings(&md);
    let (testimonials, md) = extract_testimonials(&md);

    let faq = extract_faq(&md);
    let faq_schema = (!faq.is_empty()).then(|| faq_schema(&faq));

    let html = render_article_html(&md);
    let toc = build_toc(&html);
    let CtaSplit { before, after } = split_for_cta(&html);

    ArticleBody {
        toc,
        html_before_cta: before,
        html_after_cta: after,
        cost_rows,
        timeline,
        checklist,
        warnings,
        testimonials,
        faq,
        faq_schema,
    }
}

/// Split rendered HTML at the `<h2>` nearest 40% through the heading
/// sequence (never before the second heading). With fewer than two
/// `<h2>` headings there is no sensible midpoint and the CTA is appended:
/// `after` comes back empty.
pub fn split_for_cta(html: &str) -> CtaSplit {
    let offsets: Vec<usize> = html.match_indices("<h2").map(|(i, _)| i).collect();

    if offsets.len() < 2 {
        return CtaSplit {
            before: html.to_string(),
            after: String::new(),
        };
    }

    let target = (offsets.len() as f64 * 0.4).round() as usize;
    let index = target.clamp(1, offsets.len() - 1);
    let split_at = offsets[index];

    CtaSplit {
        before: html[..split_at].to_string(),
        after: html[split_at..].to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn h2(id: &str) -> String {
        format!("<h2 id=\"{id}\">{id}</h2><p>body of {id}</p>")
    }

    // ------------------------------------------------------------------------
    // split_for_cta tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_split_five_headings_at_second() {
        let html: String = ["a", "b", "c", "d", "e"].iter().map(|s| h2(s)).collect();
        let split = split_for_cta(&html);
        // 5 * 0.4 = 2 → split before the third heading
        assert!(split.before.ends_with("<p>body of b</p>"));
        assert!(split.after.starts_with("<h2 id=\"c\">"));
    }

    #[test]
    fn test_split_two_headings_at_minimum_index() {
        let html = format!("{}{}", h2("a"), h2("b"));
        let split = split_for_cta(&html);
        assert!(split.before.contains("body of a"));
        assert!(split.after.starts_with("<h2 id=\"b\">"));
    }

    #[test]
    fn test_single_heading_appends() {
        let html = h2("only");
        let split = split_for_cta(&html);
        assert_eq!(split.before, html);
        assert_eq!(split.after, "");
    }

    #[test]
    fn test_no_headings_appends() {
        let split = split_for_cta("<p>prose only</p>");
        assert_eq!(split.before, "<p>prose only</p>");
        assert_eq!(split.after, "");
    }

    #[test]
    fn test_halves_reassemble_exactly() {
        let html: String = ["a", "b", "c"].iter().map(|s| h2(s)).collect();
        let split = split_for_cta(&html);
        assert_eq!(format!("{}{}", split.before, split.after), html);
    }

    // ------------------------------------------------------------------------
    // compose_body tests
    // ------------------------------------------------------------------------

    const POST: &str = r#"Medical travel can halve the bill.

<!-- cost-table -->
| Procedure | UK Price | Abroad Price | Savings |
|-----------|----------|--------------|---------|
| Veneers * | £6,000 | £2,100 | 65% |
<!-- /cost-table -->

## What It Costs

Prices vary by clinic.

<!-- timeline -->
- **Day 1: Arrival** Airport pickup.
- **Day 3: Surgery** The procedure.
<!-- /timeline -->

## Planning Your Trip

<!-- checklist -->
- Passport
- Insurance
<!-- /checklist -->

<!-- warning -->
**Never fly within 48 hours of surgery**
Cabin pressure increases risk.
<!-- /warning -->

> "Great results" — **Jane, London** (Rhinoplasty, 2023)

## Frequently Asked Questions

### Is it safe?

Accredited clinics follow the same standards.

## Final Thoughts

Do your research.
"#;

    #[test]
    fn test_compose_extracts_all_block_types() {
        let body = compose_body(POST);
        assert_eq!(body.cost_rows.len(), 1);
        assert_eq!(body.timeline.len(), 2);
        assert_eq!(body.checklist, vec!["Passport", "Insurance"]);
        assert_eq!(body.warnings.len(), 1);
        assert_eq!(body.testimonials.len(), 1);
        assert_eq!(body.faq.len(), 1);
        assert!(body.faq_schema.is_some());
    }

    #[test]
    fn test_compose_html_has_no_block_markup() {
        let body = compose_body(POST);
        let html = format!("{}{}", body.html_before_cta, body.html_after_cta);
        assert!(!html.contains("cost-table"));
        assert!(!html.contains("Jane, London"));
        assert!(!html.contains("frequently-asked-questions"));
        assert!(html.contains(r#"<h2 id="what-it-costs">"#));
        assert!(html.contains(r#"<h2 id="final-thoughts">"#));
    }

    #[test]
    fn test_compose_toc_skips_stripped_faq() {
        let body = compose_body(POST);
        let ids: Vec<&str> = body.toc.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["what-it-costs", "planning-your-trip", "final-thoughts"]);
    }

    #[test]
    fn test_compose_without_faq_has_no_schema() {
        let body = compose_body("## Only Section\n\nProse.");
        assert!(body.faq.is_empty());
        assert!(body.faq_schema.is_none());
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose_body(POST);
        let b = compose_body(POST);
        assert_eq!(a.cost_rows, b.cost_rows);
        assert_eq!(a.html_before_cta, b.html_before_cta);
    }
}
