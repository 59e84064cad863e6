//! In-memory storage for tests.
//!
//! Mirrors the filesystem backend's semantics (ownership, NotFound
//! mapping, photo URL shape) without touching disk. Photo bytes are kept
//! in a map keyed by URL so upload tests can assert on them.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use medvoy_core::{Error, Result, slugify};

use crate::models::{BlogPost, Clinic, ClinicDraft, ClinicPhoto, Doctor, DoctorDraft};
use crate::traits::{ClinicStore, PostStore, extension_for};

/// In-memory backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    posts: Vec<BlogPost>,
    clinics: HashMap<Uuid, Clinic>,
    media: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a post.
    pub async fn insert_post(&self, post: BlogPost) {
        self.inner.write().await.posts.push(post);
    }

    /// Stored bytes for an uploaded photo URL, if any.
    pub async fn media_bytes(&self, url: &str) -> Option<Vec<u8>> {
        self.inner.read().await.media.get(url).cloned()
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn list_posts(&self) -> Result<Vec<BlogPost>> {
        let mut posts = self.inner.read().await.posts.clone();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(posts)
    }

    async fn post_by_slug(&self, slug: &str) -> Result<BlogPost> {
        self.inner
            .read()
            .await
            .posts
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or_else(|| Error::not_found("post", slug))
    }
}

#[async_trait]
impl ClinicStore for MemoryStore {
    async fn list_clinics(&self) -> Result<Vec<Clinic>> {
        let mut clinics: Vec<Clinic> = self.inner.read().await.clinics.values().cloned().collect();
        clinics.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clinics)
    }

    async fn clinic(&self, id: Uuid) -> Result<Clinic> {
        self.inner
            .read()
            .await
            .clinics
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::not_found("clinic", id.to_string()))
    }

    async fn create_clinic(&self, owner: &str, draft: ClinicDraft) -> Result<Clinic> {
        let now = Utc::now();
        let clinic = Clinic {
            id: Uuid::new_v4(),
            owner: owner.to_string(),
            slug: slugify(&draft.name),
            name: draft.name,
            city: draft.city,
            country: draft.country,
            procedures: draft.procedures,
            description: draft.description,
            accreditations: draft.accreditations,
            doctors: Vec::new(),
            photos: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.inner.write().await.clinics.insert(clinic.id, clinic.clone());
        Ok(clinic)
    }

    async fn update_clinic(&self, id: Uuid, draft: ClinicDraft) -> Result<Clinic> {
        let mut inner = self.inner.write().await;
        let clinic = inner
            .clinics
            .get_mut(&id)
            .ok_or_else(|| Error::not_found("clinic", id.to_string()))?;
        clinic.slug = slugify(&draft.name);
        clinic.name = draft.name;
        clinic.city = draft.city;
        clinic.country = draft.country;
        clinic.procedures = draft.procedures;
        clinic.description = draft.description;
        clinic.accreditations = draft.accreditations;
        clinic.updated_at = Utc::now();
        Ok(clinic.clone())
    }

    async fn delete_clinic(&self, id: Uuid) -> Result<()> {
        let mut inner = self.inner.write().await;
        let clinic = inner
            .clinics
            .remove(&id)
            .ok_or_else(|| Error::not_found("clinic", id.to_string()))?;
        for photo in &clinic.photos {
            inner.media.remove(&photo.url);
        }
        Ok(())
    }

    async fn add_doctor(&self, clinic_id: Uuid, draft: DoctorDraft) -> Result<Doctor> {
        let mut inner = self.inner.write().await;
        let clinic = inner
            .clinics
            .get_mut(&clinic_id)
            .ok_or_else(|| Error::not_found("clinic", clinic_id.to_string()))?;
        let doctor = draft.into_doctor();
        clinic.doctors.push(doctor.clone());
        clinic.updated_at = Utc::now();
        Ok(doctor)
    }

    async fn update_doctor(
        &self,
        clinic_id: Uuid,
        doctor_id: Uuid,
        draft: DoctorDraft,
    ) -> Result<Doctor> {
        let mut inner = self.inner.write().await;
        let clinic = inner
            .clinics
            .get_mut(&clinic_id)
            .ok_or_else(|| Error::not_found("clinic", clinic_id.to_string()))?;
        let doctor = clinic
            .doctors
            .iter_mut()
            .find(|d| d.id == doctor_id)
            .ok_or_else(|| Error::not_found("doctor", doctor_id.to_string()))?;
        doctor.name = draft.name;
        doctor.title = draft.title;
        doctor.specialties = draft.specialties;
        doctor.years_experience = draft.years_experience;
        doctor.photo_url = draft.photo_url;
        let updated = doctor.clone();
        clinic.updated_at = Utc::now();
        Ok(updated)
    }

    async fn remove_doctor(&self, clinic_id: Uuid, doctor_id: Uuid) -> Result<()> {
        let mut inner = self.inner.write().await;
        let clinic = inner
            .clinics
            .get_mut(&clinic_id)
            .ok_or_else(|| Error::not_found("clinic", clinic_id.to_string()))?;
        let before = clinic.doctors.len();
        clinic.doctors.retain(|d| d.id != doctor_id);
        if clinic.doctors.len() == before {
            return Err(Error::not_found("doctor", doctor_id.to_string()));
        }
        clinic.updated_at = Utc::now();
        Ok(())
    }

    async fn add_photo(
        &self,
        clinic_id: Uuid,
        bytes: Vec<u8>,
        content_type: &str,
        caption: Option<String>,
    ) -> Result<ClinicPhoto> {
        let ext = extension_for(content_type)
            .ok_or_else(|| Error::Invalid(format!("unsupported image type: {content_type}")))?;

        let mut inner = self.inner.write().await;
        let clinic = inner
            .clinics
            .get_mut(&clinic_id)
            .ok_or_else(|| Error::not_found("clinic", clinic_id.to_string()))?;

        let id = Uuid::new_v4();
        let photo = ClinicPhoto {
            id,
            url: format!("/media/{id}.{ext}"),
            caption,
            uploaded_at: Utc::now(),
        };
        clinic.photos.push(photo.clone());
        clinic.updated_at = Utc::now();
        let url = photo.url.clone();
        inner.media.insert(url, bytes);
        Ok(photo)
    }

    async fn remove_photo(&self, clinic_id: Uuid, photo_id: Uuid) -> Result<()> {
        let mut inner = self.inner.write().await;
        let clinic = inner
            .clinics
            .get_mut(&clinic_id)
            .ok_or_else(|| Error::not_found("clinic", clinic_id.to_string()))?;
        let Some(pos) = clinic.photos.iter().position(|p| p.id == photo_id) else {
            return Err(Error::not_found("photo", photo_id.to_string()));
        };
        let photo = clinic.photos.remove(pos);
        clinic.updated_at = Utc::now();
        inner.media.remove(&photo.url);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostFrontmatter;

    fn draft() -> ClinicDraft {
        ClinicDraft {
            name: "Smile Istanbul".to_string(),
            city: "Istanbul".to_string(),
            country: "Turkey".to_string(),
            procedures: vec!["Veneers".to_string()],
            description: String::new(),
            accreditations: vec![],
        }
    }

    #[tokio::test]
    async fn test_post_lookup() {
        let store = MemoryStore::new();
        let fm = PostFrontmatter {
            title: "Guide".to_string(),
            ..Default::default()
        };
        store.insert_post(fm.into_post("guide".to_string(), "Body".to_string())).await;

        assert_eq!(store.post_by_slug("guide").await.unwrap().title, "Guide");
        assert!(store.post_by_slug("nope").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_clinic_crud() {
        let store = MemoryStore::new();
        let clinic = store.create_clinic("sub_1", draft()).await.unwrap();
        assert_eq!(store.list_clinics().await.unwrap().len(), 1);

        store.delete_clinic(clinic.id).await.unwrap();
        assert!(store.clinic(clinic.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_photo_bytes_retained_until_removed() {
        let store = MemoryStore::new();
        let clinic = store.create_clinic("sub_1", draft()).await.unwrap();
        let photo = store
            .add_photo(clinic.id, vec![1, 2, 3], "image/png", None)
            .await
            .unwrap();
        assert_eq!(store.media_bytes(&photo.url).await, Some(vec![1, 2, 3]));

        store.remove_photo(clinic.id, photo.id).await.unwrap();
        assert!(store.media_bytes(&photo.url).await.is_none());
    }
}
