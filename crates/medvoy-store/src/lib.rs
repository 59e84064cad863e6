//! Data model and storage backends.
//!
//! Posts are read-only markdown files with YAML frontmatter; clinics are
//! mutable records the dashboard edits through the API. Both live behind
//! async traits so the server does not care which backend it runs on:
//!
//! - [`filesystem::FsStore`]: markdown posts directory, one JSON file per
//!   clinic, uploaded media on disk under a public `/media/` mapping
//! - [`memory::MemoryStore`]: in-memory backend for tests
//!
//! All write operations rewrite the affected record whole; there is no
//! partial update.

pub mod filesystem;
pub mod memory;
pub mod models;
pub mod traits;

pub use filesystem::FsStore;
pub use memory::MemoryStore;
pub use models::{
    BlogPost, Clinic, ClinicDraft, ClinicPhoto, Doctor, DoctorDraft, PostFrontmatter,
};
pub use traits::{ClinicStore, PostStore};

// Storage errors are the shared core error; this crate adds no variants.
pub use medvoy_core::{Error, Result};
