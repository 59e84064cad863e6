//! Storage seams.
//!
//! The API server holds `Arc<dyn PostStore>` / `Arc<dyn ClinicStore>`;
//! backends implement these traits. Lookups return
//! [`medvoy_core::Error::NotFound`] for unknown ids, which the HTTP layer
//! maps to 404.

use async_trait::async_trait;
use uuid::Uuid;

use medvoy_core::Result;

use crate::models::{BlogPost, Clinic, ClinicDraft, ClinicPhoto, Doctor, DoctorDraft};

/// Read-only access to published posts.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, newest first.
    async fn list_posts(&self) -> Result<Vec<BlogPost>>;

    /// Look up one post by slug.
    async fn post_by_slug(&self, slug: &str) -> Result<BlogPost>;
}

/// Read/write access to clinic profiles.
#[async_trait]
pub trait ClinicStore: Send + Sync {
    /// All clinic profiles.
    async fn list_clinics(&self) -> Result<Vec<Clinic>>;

    /// Look up one clinic by id.
    async fn clinic(&self, id: Uuid) -> Result<Clinic>;

    /// Create a profile owned by `owner` (an auth subject).
    async fn create_clinic(&self, owner: &str, draft: ClinicDraft) -> Result<Clinic>;

    /// Replace the profile fields of an existing clinic.
    async fn update_clinic(&self, id: Uuid, draft: ClinicDraft) -> Result<Clinic>;

    /// Delete a clinic and its uploaded media.
    async fn delete_clinic(&self, id: Uuid) -> Result<()>;

    /// Add a doctor to a clinic.
    async fn add_doctor(&self, clinic_id: Uuid, draft: DoctorDraft) -> Result<Doctor>;

    /// Replace a doctor's fields.
    async fn update_doctor(
        &self,
        clinic_id: Uuid,
        doctor_id: Uuid,
        draft: DoctorDraft,
    ) -> Result<Doctor>;

    /// Remove a doctor from a clinic.
    async fn remove_doctor(&self, clinic_id: Uuid, doctor_id: Uuid) -> Result<()>;

    /// Store uploaded image bytes and attach the photo to a clinic.
    ///
    /// The caller has already validated type and size; the store picks
    /// the file extension from `content_type` and returns the public URL.
    async fn add_photo(
        &self,
        clinic_id: Uuid,
        bytes: Vec<u8>,
        content_type: &str,
        caption: Option<String>,
    ) -> Result<ClinicPhoto>;

    /// Detach and delete a photo.
    async fn remove_photo(&self, clinic_id: Uuid, photo_id: Uuid) -> Result<()>;
}

/// Map an image content type to a file extension.
///
/// Returns `None` for anything the gallery does not accept.
pub(crate) fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}
