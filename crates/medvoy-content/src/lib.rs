//! Markdown block extraction, rendering, and page assembly.
//!
//! Blog posts on the platform are markdown documents whose bodies embed
//! comment-delimited structured regions alongside ordinary prose:
//!
//! ```markdown
//! <!-- cost-table -->
//! | Procedure | UK Price | Abroad Price | Savings |
//! |-----------|----------|--------------|---------|
//! | Veneers * | £6,000   | £2,100       | 65%     |
//! <!-- /cost-table -->
//! ```
//!
//! This crate turns one such document into everything a rendered article
//! page needs:
//!
//! - [`blocks`]: extractors for cost tables, timelines, checklists,
//!   warnings, and blockquote testimonials — each returns typed records
//!   in source order plus the markdown with the matched regions removed
//! - [`faq`]: FAQ section extraction and plain-text answers for schema
//!   output
//! - [`render`]: markdown → HTML with heading-ID injection, external-link
//!   rewriting, and FAQ section removal
//! - [`toc`]: table-of-contents built from rendered heading anchors
//! - [`assemble`]: the full pipeline plus the mid-article CTA split
//! - [`frontmatter`]: YAML frontmatter extraction
//! - [`seo`]: landing-page metadata and schema.org JSON-LD
//!
//! # Error policy
//!
//! Extraction never fails: malformed interior lines are skipped, absent
//! delimiter pairs yield empty results and the unchanged input. Errors
//! surface only from frontmatter deserialization.

pub mod assemble;
pub mod blocks;
pub mod faq;
pub mod frontmatter;
pub mod render;
pub mod seo;
pub mod toc;

// Re-export commonly used types
pub use assemble::{ArticleBody, CtaSplit, compose_body, split_for_cta};
pub use blocks::checklist::extract_checklist;
pub use blocks::cost_table::{CostRow, extract_cost_tables};
pub use blocks::testimonial::{Testimonial, extract_testimonials};
pub use blocks::timeline::{TimelineStep, extract_timeline};
pub use blocks::warning::{Warning, WarningSeverity, extract_warnings};
pub use faq::{FaqItem, extract_faq};
pub use frontmatter::{FrontmatterResult, extract_frontmatter, strip_frontmatter};
pub use render::render_article_html;
pub use toc::{TocItem, build_toc};
