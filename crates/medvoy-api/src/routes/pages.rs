//! Server-rendered pages and the directory search endpoint.
//!
//! Article pages run the whole content pipeline per request: block
//! extraction, rendering, TOC, CTA split. The structured pieces render
//! as plain HTML components interleaved with the two article halves.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::Html;

use medvoy_content::assemble::{ArticleBody, compose_body};
use medvoy_content::blocks::cost_table::CostRow;
use medvoy_content::blocks::testimonial::Testimonial;
use medvoy_content::blocks::timeline::TimelineStep;
use medvoy_content::blocks::warning::{Warning, WarningSeverity};
use medvoy_content::faq::FaqItem;
use medvoy_content::seo::article_schema;
use medvoy_content::toc::TocItem;
use medvoy_core::Error as CoreError;
use medvoy_directory::{ClinicFilter, SearchHit};
use medvoy_store::BlogPost;

use crate::error::Result;
use crate::state::AppState;

/// `GET /blog` — post listing.
pub async fn blog_index(State(state): State<AppState>) -> Result<Html<String>> {
    let posts = state.posts.list_posts().await?;

    let mut items = String::new();
    for post in &posts {
        items.push_str(&format!(
            "<li><a href=\"/blog/{slug}\">{title}</a> <span class=\"excerpt\">{excerpt}</span></li>\n",
            slug = escape(&post.slug),
            title = escape(&post.title),
            excerpt = escape(&post.excerpt),
        ));
    }

    let body = format!("<h1>Medvoy Journal</h1>\n<ul class=\"posts\">\n{items}</ul>");
    Ok(Html(layout("Medvoy Journal", "Guides to treatment abroad.", &[], &body)))
}

/// `GET /blog/{slug}` — one rendered article.
pub async fn blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    let post = state.posts.post_by_slug(&slug).await?;
    let body = compose_body(&post.body);
    Ok(Html(render_article_page(&post, &body)))
}

/// `GET /clinics` — directory search, JSON.
pub async fn search_clinics(
    State(state): State<AppState>,
    Query(filter): Query<ClinicFilter>,
) -> Result<Json<Vec<SearchHit>>> {
    let clinics = state.clinics.list_clinics().await?;
    Ok(Json(state.directory.search(&clinics, &filter)))
}

/// `GET /go/{procedure}/{destination}` — landing page.
pub async fn landing(
    State(state): State<AppState>,
    Path((procedure, destination)): Path<(String, String)>,
) -> Result<Html<String>> {
    let page = state
        .catalog
        .page(&procedure, &destination)
        .ok_or_else(|| CoreError::not_found("landing page", format!("{procedure}/{destination}")))?;

    let directory_link = format!(
        "/clinics?procedure={}&country={}",
        escape(&procedure),
        escape(&destination)
    );
    let body = format!(
        "<h1>{heading}</h1>\n\
         <p>{description}</p>\n\
         <p><a class=\"cta-button\" href=\"{directory_link}\">Browse accredited clinics</a></p>",
        heading = escape(&page.heading),
        description = escape(&page.meta_description),
    );

    let schemas = vec![page.schema.clone()];
    Ok(Html(layout(&page.title, &page.meta_description, &schemas, &body)))
}

// ============================================================================
// Article page assembly
// ============================================================================

fn render_article_page(post: &BlogPost, body: &ArticleBody) -> String {
    let url = format!("https://medvoy.io/blog/{}", post.slug);
    let mut schemas = vec![article_schema(
        post.page_title(),
        post.page_description(),
        &post.author,
        &url,
        post.image.as_deref(),
        &post.published_at.to_rfc3339(),
        &post.updated_at.to_rfc3339(),
    )];
    if let Some(faq_schema) = &body.faq_schema {
        schemas.push(faq_schema.clone());
    }

    let mut article = String::new();
    article.push_str(&format!("<h1>{}</h1>\n", escape(&post.title)));
    article.push_str(&render_toc(&body.toc));
    article.push_str(&body.html_before_cta);
    article.push_str(CTA_HTML);
    article.push_str(&body.html_after_cta);
    article.push_str(&render_cost_table(&body.cost_rows));
    article.push_str(&render_timeline(&body.timeline));
    article.push_str(&render_checklist(&body.checklist));
    article.push_str(&render_warnings(&body.warnings));
    article.push_str(&render_testimonials(&body.testimonials));
    article.push_str(&render_faq(&body.faq));

    layout(post.page_title(), post.page_description(), &schemas, &article)
}

/// The mid-article promotional block.
const CTA_HTML: &str = "<aside class=\"cta\">\
<p>Ready to compare prices? Get free quotes from accredited clinics.</p>\
<a class=\"cta-button\" href=\"/clinics\">Find a clinic</a>\
</aside>\n";

fn render_toc(toc: &[TocItem]) -> String {
    if toc.is_empty() {
        return String::new();
    }
    let mut out = String::from("<nav class=\"toc\"><ol>\n");
    for item in toc {
        out.push_str(&format!(
            "<li class=\"toc-level-{}\"><a href=\"#{}\">{}</a></li>\n",
            item.level,
            escape(&item.id),
            escape(&item.label)
        ));
    }
    out.push_str("</ol></nav>\n");
    out
}

fn render_cost_table(rows: &[CostRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let mut out = String::from(
        "<section class=\"cost-table\"><table>\
         <thead><tr><th>Procedure</th><th>At home</th><th>Abroad</th><th>Savings</th></tr></thead><tbody>\n",
    );
    for row in rows {
        let class = if row.popular { " class=\"popular\"" } else { "" };
        out.push_str(&format!(
            "<tr{class}><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&row.procedure),
            escape(&row.price_home),
            escape(&row.price_abroad),
            escape(&row.savings),
        ));
    }
    out.push_str("</tbody></table></section>\n");
    out
}

fn render_timeline(steps: &[TimelineStep]) -> String {
    if steps.is_empty() {
        return String::new();
    }
    let mut out = String::from("<section class=\"timeline\"><ol>\n");
    for step in steps {
        out.push_str(&format!(
            "<li data-icon=\"{}\"><strong>{}: {}</strong> {}</li>\n",
            escape(&step.icon),
            escape(&step.day),
            escape(&step.title),
            escape(&step.description),
        ));
    }
    out.push_str("</ol></section>\n");
    out
}

fn render_checklist(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = String::from("<section class=\"checklist\"><ul>\n");
    for item in items {
        out.push_str(&format!("<li>{}</li>\n", escape(item)));
    }
    out.push_str("</ul></section>\n");
    out
}

fn render_warnings(warnings: &[Warning]) -> String {
    let mut out = String::new();
    for warning in warnings {
        let class = match warning.severity {
            WarningSeverity::Info => "info",
            WarningSeverity::Caution => "caution",
            WarningSeverity::Danger => "danger",
        };
        out.push_str(&format!(
            "<aside class=\"warning warning-{class}\"><strong>{}</strong><p>{}</p></aside>\n",
            escape(&warning.title),
            escape(&warning.text),
        ));
    }
    out
}

fn render_testimonials(testimonials: &[Testimonial]) -> String {
    let mut out = String::new();
    for t in testimonials {
        out.push_str(&format!(
            "<figure class=\"testimonial\" data-rating=\"{}\">\
             <blockquote>{}</blockquote>\
             <figcaption>{}, {} — {} ({})</figcaption></figure>\n",
            t.rating,
            escape(&t.quote),
            escape(&t.name),
            escape(&t.city),
            escape(&t.treatment),
            escape(&t.year),
        ));
    }
    out
}

fn render_faq(faq: &[FaqItem]) -> String {
    if faq.is_empty() {
        return String::new();
    }
    let mut out = String::from("<section class=\"faq\"><h2>Frequently Asked Questions</h2>\n");
    for item in faq {
        out.push_str(&format!(
            "<details><summary>{}</summary><div>{}</div></details>\n",
            escape(&item.question),
            medvoy_content::render::render_markdown(&item.answer),
        ));
    }
    out.push_str("</section>\n");
    out
}

// ============================================================================
// Layout
// ============================================================================

fn layout(title: &str, description: &str, schemas: &[serde_json::Value], body: &str) -> String {
    let mut schema_tags = String::new();
    for schema in schemas {
        schema_tags.push_str(&format!(
            "<script type=\"application/ld+json\">{schema}</script>\n"
        ));
    }
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <meta name=\"description\" content=\"{description}\">\n\
         {schema_tags}</head>\n<body>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
        description = escape(description),
    )
}

/// Minimal HTML escaping for interpolated text content and attributes.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use medvoy_store::PostFrontmatter;

    fn post_with_body(body: &str) -> BlogPost {
        let fm = PostFrontmatter {
            title: "Veneers in Turkey".to_string(),
            excerpt: "What it costs.".to_string(),
            ..Default::default()
        };
        fm.into_post("veneers-in-turkey".to_string(), body.to_string())
    }

    #[test]
    fn test_article_page_contains_cta_between_halves() {
        let md = "## One\n\nAlpha.\n\n## Two\n\nBeta.\n\n## Three\n\nGamma.";
        let post = post_with_body(md);
        let page = render_article_page(&post, &compose_body(&post.body));

        let cta_at = page.find("class=\"cta\"").unwrap();
        let one_at = page.find("id=\"one\"").unwrap();
        let three_at = page.find("id=\"three\"").unwrap();
        assert!(one_at < cta_at && cta_at < three_at);
    }

    #[test]
    fn test_article_page_renders_structured_blocks() {
        let md = "## Costs\n\n<!-- checklist -->\n- Passport\n<!-- /checklist -->\n\n> \"Great\" — **Jane, London** (Veneers, 2023)\n";
        let post = post_with_body(md);
        let page = render_article_page(&post, &compose_body(&post.body));

        assert!(page.contains("class=\"checklist\""));
        assert!(page.contains("<li>Passport</li>"));
        assert!(page.contains("class=\"testimonial\""));
        assert!(page.contains("data-rating=\"5\""));
    }

    #[test]
    fn test_article_page_has_article_schema() {
        let post = post_with_body("## Only\n\nProse.");
        let page = render_article_page(&post, &compose_body(&post.body));
        assert!(page.contains("application/ld+json"));
        assert!(page.contains("\"@type\":\"Article\""));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<b>&"x"</b>"#), "&lt;b&gt;&amp;&quot;x&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_empty_components_render_nothing() {
        assert_eq!(render_cost_table(&[]), "");
        assert_eq!(render_toc(&[]), "");
        assert_eq!(render_faq(&[]), "");
    }
}
