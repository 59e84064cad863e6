//! Record types for posts, clinics, doctors, and photos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Blog posts
// ============================================================================

/// A published blog post. Authored externally; read-only at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Stable identifier; equal to the slug for file-backed posts.
    pub id: String,
    /// Post title.
    pub title: String,
    /// URL slug, derived from the source file name.
    pub slug: String,
    /// Short teaser shown in listings.
    pub excerpt: String,
    /// Markdown body (frontmatter removed).
    pub body: String,
    /// Hero image URL.
    pub image: Option<String>,
    /// Author display name.
    pub author: String,
    /// Editorial category, e.g. "dental".
    pub category: String,
    /// First publication time.
    pub published_at: DateTime<Utc>,
    /// Last edit time.
    pub updated_at: DateTime<Utc>,
    /// Override for the page `<title>`; falls back to `title`.
    pub seo_title: Option<String>,
    /// Override for the meta description; falls back to `excerpt`.
    pub seo_description: Option<String>,
}

impl BlogPost {
    /// Effective `<title>` content.
    pub fn page_title(&self) -> &str {
        self.seo_title.as_deref().unwrap_or(&self.title)
    }

    /// Effective meta description.
    pub fn page_description(&self) -> &str {
        self.seo_description.as_deref().unwrap_or(&self.excerpt)
    }
}

/// Frontmatter schema for post markdown files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostFrontmatter {
    /// Post title; required.
    pub title: String,
    /// Listing teaser.
    #[serde(default)]
    pub excerpt: String,
    /// Hero image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Author display name.
    #[serde(default = "default_author")]
    pub author: String,
    /// Editorial category.
    #[serde(default = "default_category")]
    pub category: String,
    /// Publication time, RFC 3339.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Last edit time, RFC 3339.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    /// `<title>` override.
    #[serde(default)]
    pub seo_title: Option<String>,
    /// Meta description override.
    #[serde(default)]
    pub seo_description: Option<String>,
}

fn default_author() -> String {
    "Medvoy Editorial".to_string()
}

fn default_category() -> String {
    "general".to_string()
}

impl PostFrontmatter {
    /// Build the full record from parsed frontmatter, the file-derived
    /// slug, and the body.
    pub fn into_post(self, slug: String, body: String) -> BlogPost {
        let published_at = self.date.unwrap_or(DateTime::UNIX_EPOCH);
        BlogPost {
            id: slug.clone(),
            title: self.title,
            slug,
            excerpt: self.excerpt,
            body,
            image: self.image,
            author: self.author,
            category: self.category,
            published_at,
            updated_at: self.updated.unwrap_or(published_at),
            seo_title: self.seo_title,
            seo_description: self.seo_description,
        }
    }
}

// ============================================================================
// Clinics
// ============================================================================

/// A clinic profile, owned by the authenticated account that created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clinic {
    /// Record identifier.
    pub id: Uuid,
    /// Auth subject of the owning account; mutations require a match.
    pub owner: String,
    /// Display name.
    pub name: String,
    /// URL slug derived from the name.
    pub slug: String,
    /// City the clinic operates in.
    pub city: String,
    /// Country the clinic operates in.
    pub country: String,
    /// Procedures offered, display names.
    pub procedures: Vec<String>,
    /// Free-text profile description.
    pub description: String,
    /// Accreditation bodies, e.g. "JCI".
    pub accreditations: Vec<String>,
    /// Practicing doctors.
    pub doctors: Vec<Doctor>,
    /// Gallery photos.
    pub photos: Vec<ClinicPhoto>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last profile edit.
    pub updated_at: DateTime<Utc>,
}

/// Fields a clinic owner submits when creating or updating a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicDraft {
    /// Display name.
    pub name: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Procedures offered.
    #[serde(default)]
    pub procedures: Vec<String>,
    /// Profile description.
    #[serde(default)]
    pub description: String,
    /// Accreditation bodies.
    #[serde(default)]
    pub accreditations: Vec<String>,
}

/// A doctor on a clinic profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Record identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Professional title, e.g. "DDS".
    pub title: String,
    /// Specialty display names.
    pub specialties: Vec<String>,
    /// Years in practice.
    pub years_experience: u32,
    /// Portrait URL.
    pub photo_url: Option<String>,
}

/// Fields submitted when adding or editing a doctor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorDraft {
    /// Full name.
    pub name: String,
    /// Professional title.
    #[serde(default)]
    pub title: String,
    /// Specialty display names.
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Years in practice.
    #[serde(default)]
    pub years_experience: u32,
    /// Portrait URL.
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl DoctorDraft {
    /// Materialize a new doctor record.
    pub fn into_doctor(self) -> Doctor {
        Doctor {
            id: Uuid::new_v4(),
            name: self.name,
            title: self.title,
            specialties: self.specialties,
            years_experience: self.years_experience,
            photo_url: self.photo_url,
        }
    }
}

/// An uploaded gallery photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicPhoto {
    /// Record identifier.
    pub id: Uuid,
    /// Public URL the page embeds.
    pub url: String,
    /// Optional caption.
    pub caption: Option<String>,
    /// Upload time.
    pub uploaded_at: DateTime<Utc>,
}

// ============================================================================
// Tests
// ============================================================================
