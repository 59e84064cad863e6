//! Landing-page metadata and schema.org structured data.
//!
//! Landing pages exist per procedure/destination combination ("Dental
//! Implants in Turkey"). Their copy is templated — the catalog only
//! stores display names; titles, meta descriptions, and JSON-LD are
//! generated. Unknown combinations are a 404 at the route layer.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use medvoy_core::slugify;

/// Display names a landing page can be generated for. Loaded from the
/// platform config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandingCatalog {
    /// Procedure display names, e.g. "Dental Implants".
    #[serde(default)]
    pub procedures: Vec<String>,
    /// Destination display names, e.g. "Turkey".
    #[serde(default)]
    pub destinations: Vec<String>,
}

/// Generated metadata for one procedure/destination landing page.
#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    /// Procedure display name.
    pub procedure: String,
    /// Destination display name.
    pub destination: String,
    /// URL path, e.g. `/go/dental-implants/turkey`.
    pub path: String,
    /// `<title>` content.
    pub title: String,
    /// Meta description.
    pub meta_description: String,
    /// Page `<h1>`.
    pub heading: String,
    /// schema.org JSON-LD for the page.
    pub schema: Value,
}

impl LandingCatalog {
    /// Look up a combination by slug and generate its page metadata.
    ///
    /// Returns `None` when either slug is unknown to the catalog.
    pub fn page(&self, procedure_slug: &str, destination_slug: &str) -> Option<LandingPage> {
        let procedure = self.find(&self.procedures, procedure_slug)?;
        let destination = self.find(&self.destinations, destination_slug)?;
        Some(landing_page(&procedure, &destination))
    }

    /// All valid combinations, for sitemap generation.
    pub fn all_pages(&self) -> Vec<LandingPage> {
        self.procedures
            .iter()
            .flat_map(|p| self.destinations.iter().map(move |d| landing_page(p, d)))
            .collect()
    }

    fn find(&self, names: &[String], slug: &str) -> Option<String> {
        names.iter().find(|n| slugify(n) == slug).cloned()
    }
}

/// Generate the templated landing-page metadata for a combination.
pub fn landing_page(procedure: &str, destination: &str) -> LandingPage {
    let heading = format!("{procedure} in {destination}");
    let path = format!("/go/{}/{}", slugify(procedure), slugify(destination));
    let schema = json!({
        "@context": "https://schema.org",
        "@type": "MedicalWebPage",
        "name": &heading,
        "about": {
            "@type": "MedicalProcedure",
            "name": procedure,
        },
        "contentLocation": {
            "@type": "Country",
            "name": destination,
        },
    });

    LandingPage {
        procedure: procedure.to_string(),
        destination: destination.to_string(),
        title: format!("{heading} — Compare Accredited Clinics | Medvoy"),
        meta_description: format!(
            "Compare accredited clinics for {} in {}. Transparent pricing, \
             verified patient reviews, and free quotes from Medvoy partners.",
            procedure.to_lowercase(),
            destination
        ),
        schema,
        heading,
        path,
    }
}

/// schema.org `Article` JSON-LD for a blog post page.
pub fn article_schema(
    title: &str,
    description: &str,
    author: &str,
    url: &str,
    image: Option<&str>,
    published: &str,
    modified: &str,
) -> Value {
    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": title,
        "description": description,
        "author": {
            "@type": "Person",
            "name": author,
        },
        "mainEntityOfPage": url,
        "datePublished": published,
        "dateModified": modified,
    });
    if let Some(image) = image {
        schema["image"] = json!([image]);
    }
    schema
}

// ============================================================================
// Tests
// ============================================================================
