//! Markdown to HTML rendering and post-processing.
//!
//! Conversion itself is delegated to `pulldown-cmark`; the post-processing
//! passes are regex rewrites over the emitted HTML:
//!
//! 1. [`inject_heading_ids`] — slugified `id` attributes on `<h2>`–`<h6>`.
//!    Ids are not de-duplicated; two identical headings collide.
//! 2. [`rewrite_external_links`] — absolute `http(s)` links open in a new
//!    tab with safe `rel` attributes.
//! 3. [`strip_faq_section`] — removes the rendered FAQ section, which the
//!    page shows separately from structured data. Keyed to the literal
//!    `frequently-asked-questions` heading id.

use pulldown_cmark::{Options, Parser, html};
use regex::Regex;

use medvoy_core::slugify;

/// The heading id the FAQ stripper keys on.
const FAQ_HEADING_ID: &str = "frequently-asked-questions";

/// Render post markdown (after block extraction) to article HTML.
///
/// Runs the conversion plus all three post-processing passes.
pub fn render_article_html(markdown: &str) -> String {
    let html = render_markdown(markdown);
    let html = inject_heading_ids(&html);
    let html = rewrite_external_links(&html);
    strip_faq_section(&html)
}

/// Convert markdown to HTML with tables and strikethrough enabled.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Assign slugified ids to `<h2>`–`<h6>` tags.
///
/// The slug is computed from the heading's text content (inline tags
/// stripped, entities decoded). Ids are intentionally not de-duplicated.
pub fn inject_heading_ids(html: &str) -> String {
    let heading_re =
        Regex::new(r"(?s)<h([2-6])>(.*?)</h[2-6]>").expect("invalid heading regex");

    heading_re
        .replace_all(html, |caps: &regex::Captures| {
            let level = &caps[1];
            let inner = &caps[2];
            let id = slugify(&decode_entities(&strip_tags(inner)));
            format!(r#"<h{level} id="{id}">{inner}</h{level}>"#)
        })
        .into_owned()
}

/// Rewrite absolute external links to open in a new tab.
pub fn rewrite_external_links(html: &str) -> String {
    let link_re =
        Regex::new(r#"<a href="(https?://[^"]+)"([^>]*)>"#).expect("invalid link regex");

    link_re
        .replace_all(html, r#"<a href="$1"$2 target="_blank" rel="noopener noreferrer">"#)
        .into_owned()
}

/// Remove the rendered FAQ section: everything from the
/// `frequently-asked-questions` heading up to the next `<h2>` or the end
/// of the document. The structured FAQ component replaces it on the page.
pub fn strip_faq_section(html: &str) -> String {
    let faq_re = Regex::new(&format!(
        r#"(?s)<h2 id="{FAQ_HEADING_ID}">.*?(<h2[\s>]|\z)"#
    ))
    .expect("invalid FAQ section regex");

    faq_re.replace_all(html, "$1").into_owned()
}

/// Drop inline tags, keeping text content.
fn strip_tags(html: &str) -> String {
    let tag_re = Regex::new(r"<[^>]+>").expect("invalid tag regex");
    tag_re.replace_all(html, "").into_owned()
}

/// Decode the entities `pulldown-cmark` escapes in text content.
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

// ============================================================================
// Tests
// ============================================================================
