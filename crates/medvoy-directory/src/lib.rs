//! Clinic directory search and filtering.
//!
//! The directory is small enough to search in memory: equality filters
//! narrow the candidate set, then free-text query tokens are matched
//! against the clinic's text fields — substring first, with a
//! Jaro-Winkler fuzzy fallback so "implnts" still finds implant clinics.
//!
//! # Modules
//!
//! - [`types`]: configuration and the query filter
//! - [`search`]: matching and ranking
//!
//! # Example
//!
//! ```no_run
//! use medvoy_directory::{Directory, ClinicFilter};
//!
//! let directory = Directory::default();
//! let filter = ClinicFilter {
//!     q: Some("implants".to_string()),
//!     country: Some("Turkey".to_string()),
//!     ..Default::default()
//! };
//! # let clinics = vec![];
//! let hits = directory.search(&clinics, &filter);
//! ```

pub mod search;
pub mod types;

pub use search::{Directory, SearchHit};
pub use types::{ClinicFilter, DirectoryConfig};
