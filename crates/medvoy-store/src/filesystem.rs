//! Filesystem-backed storage.
//!
//! Layout under the store root:
//!
//! ```text
//! root/
//!   posts/      one .md file per post, YAML frontmatter + body
//!   clinics/    one pretty-printed .json file per clinic, named by id
//!   media/      uploaded photos, named by photo id
//! ```
//!
//! Posts are read on demand — the platform renders one post per request
//! and the content tree is small. Clinic writes rewrite the whole JSON
//! file. Uploaded media is served under the public `/media/` prefix.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use medvoy_content::extract_frontmatter;
use medvoy_core::{Error, Result, slug_from_path, slugify};

use crate::models::{BlogPost, Clinic, ClinicDraft, ClinicPhoto, Doctor, DoctorDraft, PostFrontmatter};
use crate::traits::{ClinicStore, PostStore, extension_for};

/// Filesystem store rooted at a content directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    posts_dir: PathBuf,
    clinics_dir: PathBuf,
    media_dir: PathBuf,
}

impl FsStore {
    /// Open a store, creating the directory layout if needed.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let store = Self {
            posts_dir: root.join("posts"),
            clinics_dir: root.join("clinics"),
            media_dir: root.join("media"),
        };
        tokio::fs::create_dir_all(&store.posts_dir).await?;
        tokio::fs::create_dir_all(&store.clinics_dir).await?;
        tokio::fs::create_dir_all(&store.media_dir).await?;
        Ok(store)
    }

    /// Directory uploaded media lands in, for static file serving.
    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    fn clinic_path(&self, id: Uuid) -> PathBuf {
        self.clinics_dir.join(format!("{id}.json"))
    }

    async fn load_clinic(&self, id: Uuid) -> Result<Clinic> {
        let raw = match tokio::fs::read_to_string(self.clinic_path(id)).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::not_found("clinic", id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    async fn write_clinic(&self, clinic: &Clinic) -> Result<()> {
        let raw = serde_json::to_string_pretty(clinic)?;
        tokio::fs::write(self.clinic_path(clinic.id), raw).await?;
        Ok(())
    }

    async fn delete_media_file(&self, url: &str) {
        let Some(name) = url.strip_prefix("/media/") else {
            return;
        };
        if let Err(e) = tokio::fs::remove_file(self.media_dir.join(name)).await {
            log::warn!("failed to delete media file {name}: {e}");
        }
    }

    fn parse_post(slug: String, raw: &str) -> Result<BlogPost> {
        let result = extract_frontmatter(raw);
        let fm: PostFrontmatter = result
            .deserialize()?
            .ok_or_else(|| Error::Invalid(format!("post '{slug}' has no frontmatter")))?;
        Ok(fm.into_post(slug, result.body().to_string()))
    }
}

#[async_trait]
impl PostStore for FsStore {
    async fn list_posts(&self) -> Result<Vec<BlogPost>> {
        let pattern = self.posts_dir.join("*.md");
        let pattern = pattern.to_string_lossy();
        let paths =
            glob::glob(&pattern).map_err(|e| Error::Invalid(format!("bad posts glob: {e}")))?;

        let mut posts = Vec::new();
        for entry in paths {
            let Ok(path) = entry else { continue };
            let Some(slug) = slug_from_path(&path) else {
                continue;
            };
            let raw = tokio::fs::read_to_string(&path).await?;
            match Self::parse_post(slug, &raw) {
                Ok(post) => posts.push(post),
                Err(e) => log::warn!("skipping unparseable post {}: {e}", path.display()),
            }
        }
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(posts)
    }

    async fn post_by_slug(&self, slug: &str) -> Result<BlogPost> {
        let path = self.posts_dir.join(format!("{slug}.md"));
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::not_found("post", slug));
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse_post(slug.to_string(), &raw)
    }
}

#[async_trait]
impl ClinicStore for FsStore {
    async fn list_clinics(&self) -> Result<Vec<Clinic>> {
        let pattern = self.clinics_dir.join("*.json");
        let pattern = pattern.to_string_lossy();
        let paths =
            glob::glob(&pattern).map_err(|e| Error::Invalid(format!("bad clinics glob: {e}")))?;

        let mut clinics = Vec::new();
        for entry in paths {
            let Ok(path) = entry else { continue };
            let raw = tokio::fs::read_to_string(&path).await?;
            match serde_json::from_str::<Clinic>(&raw) {
                Ok(clinic) => clinics.push(clinic),
                Err(e) => log::warn!("skipping unparseable clinic {}: {e}", path.display()),
            }
        }
        clinics.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clinics)
    }

    async fn clinic(&self, id: Uuid) -> Result<Clinic> {
        self.load_clinic(id).await
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
        self.write_clinic(&clinic).await?;
        Ok(clinic)
    }

    async fn update_clinic(&self, id: Uuid, draft: ClinicDraft) -> Result<Clinic> {
        let mut clinic = self.load_clinic(id).await?;
        clinic.slug = slugify(&draft.name);
        clinic.name = draft.name;
        clinic.city = draft.city;
        clinic.country = draft.country;
        clinic.procedures = draft.procedures;
        clinic.description = draft.description;
        clinic.accreditations = draft.accreditations;
        clinic.updated_at = Utc::now();
        self.write_clinic(&clinic).await?;
        Ok(clinic)
    }

    async fn delete_clinic(&self, id: Uuid) -> Result<()> {
        let clinic = self.load_clinic(id).await?;
        for photo in &clinic.photos {
            self.delete_media_file(&photo.url).await;
        }
        tokio::fs::remove_file(self.clinic_path(id)).await?;
        Ok(())
    }

    async fn add_doctor(&self, clinic_id: Uuid, draft: DoctorDraft) -> Result<Doctor> {
        let mut clinic = self.load_clinic(clinic_id).await?;
        let doctor = draft.into_doctor();
        clinic.doctors.push(doctor.clone());
        clinic.updated_at = Utc::now();
        self.write_clinic(&clinic).await?;
        Ok(doctor)
    }

    async fn update_doctor(
        &self,
        clinic_id: Uuid,
        doctor_id: Uuid,
        draft: DoctorDraft,
    ) -> Result<Doctor> {
        let mut clinic = self.load_clinic(clinic_id).await?;
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
        self.write_clinic(&clinic).await?;
        Ok(updated)
    }

    async fn remove_doctor(&self, clinic_id: Uuid, doctor_id: Uuid) -> Result<()> {
        let mut clinic = self.load_clinic(clinic_id).await?;
        let before = clinic.doctors.len();
        clinic.doctors.retain(|d| d.id != doctor_id);
        if clinic.doctors.len() == before {
            return Err(Error::not_found("doctor", doctor_id.to_string()));
        }
        clinic.updated_at = Utc::now();
        self.write_clinic(&clinic).await
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

        let mut clinic = self.load_clinic(clinic_id).await?;

        let id = Uuid::new_v4();
        let file_name = format!("{id}.{ext}");
        tokio::fs::write(self.media_dir.join(&file_name), bytes).await?;

        let photo = ClinicPhoto {
            id,
            url: format!("/media/{file_name}"),
            caption,
            uploaded_at: Utc::now(),
        };
        clinic.photos.push(photo.clone());
        clinic.updated_at = Utc::now();
        self.write_clinic(&clinic).await?;
        Ok(photo)
    }

    async fn remove_photo(&self, clinic_id: Uuid, photo_id: Uuid) -> Result<()> {
        let mut clinic = self.load_clinic(clinic_id).await?;
        let Some(pos) = clinic.photos.iter().position(|p| p.id == photo_id) else {
            return Err(Error::not_found("photo", photo_id.to_string()));
        };
        let photo = clinic.photos.remove(pos);
        clinic.updated_at = Utc::now();
        self.write_clinic(&clinic).await?;
        self.delete_media_file(&photo.url).await;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ClinicDraft {
        ClinicDraft {
            name: name.to_string(),
            city: "Istanbul".to_string(),
            country: "Turkey".to_string(),
            procedures: vec!["Dental Implants".to_string()],
            description: "Full-service dental clinic.".to_string(),
            accreditations: vec!["JCI".to_string()],
        }
    }

    async fn store() -> (tempfile::TempDir, FsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::open(dir.path()).await.unwrap();
        (dir, store)
    }

    // ------------------------------------------------------------------------
    // Post tests
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_post_roundtrip() {
        let (dir, store) = store().await;
        let raw = "---\ntitle: Veneers Abroad\nexcerpt: A guide.\ndate: 2024-03-01T00:00:00Z\n---\n\n## Costs\n\nProse.";
        tokio::fs::write(dir.path().join("posts/veneers-abroad.md"), raw)
            .await
            .unwrap();

        let post = store.post_by_slug("veneers-abroad").await.unwrap();
        assert_eq!(post.title, "Veneers Abroad");
        assert_eq!(post.slug, "veneers-abroad");
        assert!(post.body.contains("## Costs"));

        let posts = store.list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
    }

    #[tokio::test]
    async fn test_post_missing_is_not_found() {
        let (_dir, store) = store().await;
        let err = store.post_by_slug("nope").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_posts_newest_first_and_skips_bad_files() {
        let (dir, store) = store().await;
        let old = "---\ntitle: Old\ndate: 2023-01-01T00:00:00Z\n---\nx";
        let new = "---\ntitle: New\ndate: 2024-01-01T00:00:00Z\n---\nx";
        tokio::fs::write(dir.path().join("posts/old.md"), old).await.unwrap();
        tokio::fs::write(dir.path().join("posts/new.md"), new).await.unwrap();
        tokio::fs::write(dir.path().join("posts/broken.md"), "no frontmatter")
            .await
            .unwrap();

        let posts = store.list_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "New");
        assert_eq!(posts[1].title, "Old");
    }

    // ------------------------------------------------------------------------
    // Clinic tests
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_clinic_crud_roundtrip() {
        let (_dir, store) = store().await;
        let clinic = store.create_clinic("sub_1", draft("Smile Istanbul")).await.unwrap();
        assert_eq!(clinic.slug, "smile-istanbul");
        assert_eq!(clinic.owner, "sub_1");

        let loaded = store.clinic(clinic.id).await.unwrap();
        assert_eq!(loaded, clinic);

        let updated = store
            .update_clinic(clinic.id, draft("Smile Istanbul Dental"))
            .await
            .unwrap();
        assert_eq!(updated.slug, "smile-istanbul-dental");
        assert_eq!(updated.owner, "sub_1");

        store.delete_clinic(clinic.id).await.unwrap();
        assert!(store.clinic(clinic.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_doctor_lifecycle() {
        let (_dir, store) = store().await;
        let clinic = store.create_clinic("sub_1", draft("Smile")).await.unwrap();

        let doctor = store
            .add_doctor(
                clinic.id,
                DoctorDraft {
                    name: "Dr. Aylin Demir".to_string(),
                    title: "DDS".to_string(),
                    specialties: vec![],
                    years_experience: 12,
                    photo_url: None,
                },
            )
            .await
            .unwrap();

        let renamed = store
            .update_doctor(
                clinic.id,
                doctor.id,
                DoctorDraft {
                    name: "Dr. A. Demir".to_string(),
                    title: "DDS".to_string(),
                    specialties: vec![],
                    years_experience: 13,
                    photo_url: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.name, "Dr. A. Demir");

        store.remove_doctor(clinic.id, doctor.id).await.unwrap();
        let err = store.remove_doctor(clinic.id, doctor.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_photo_upload_writes_media_file() {
        let (_dir, store) = store().await;
        let clinic = store.create_clinic("sub_1", draft("Smile")).await.unwrap();

        let photo = store
            .add_photo(clinic.id, vec![0xFF, 0xD8, 0xFF], "image/jpeg", Some("Lobby".into()))
            .await
            .unwrap();
        assert!(photo.url.starts_with("/media/"));
        assert!(photo.url.ends_with(".jpg"));

        let file = store.media_dir().join(photo.url.strip_prefix("/media/").unwrap());
        assert!(file.exists());

        store.remove_photo(clinic.id, photo.id).await.unwrap();
        assert!(!file.exists());
    }

    #[tokio::test]
    async fn test_photo_unsupported_type_rejected() {
        let (_dir, store) = store().await;
        let clinic = store.create_clinic("sub_1", draft("Smile")).await.unwrap();
        let err = store
            .add_photo(clinic.id, vec![1, 2, 3], "application/pdf", None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Invalid(_)));
    }
}
