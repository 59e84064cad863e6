//! Shared application state.

use std::sync::Arc;

use medvoy_content::seo::LandingCatalog;
use medvoy_core::service::ServiceHandle;
use medvoy_directory::Directory;
use medvoy_store::{ClinicStore, PostStore};

/// Uploaded images are capped at 5 MB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// State shared by all request handlers. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Read-only post storage.
    pub posts: Arc<dyn PostStore>,
    /// Clinic profile storage.
    pub clinics: Arc<dyn ClinicStore>,
    /// Directory search engine.
    pub directory: Arc<Directory>,
    /// Valid landing-page combinations.
    pub catalog: Arc<LandingCatalog>,
    /// Lifecycle handle for the health endpoint.
    pub health: ServiceHandle,
}

impl AppState {
    /// Assemble state from its parts.
    pub fn new(
        posts: Arc<dyn PostStore>,
        clinics: Arc<dyn ClinicStore>,
        directory: Directory,
        catalog: LandingCatalog,
    ) -> Self {
        Self {
            posts,
            clinics,
            directory: Arc::new(directory),
            catalog: Arc::new(catalog),
            health: ServiceHandle::new("medvoy-api"),
        }
    }
}
