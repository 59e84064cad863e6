//! Request handlers.
//!
//! - [`health`]: readiness endpoint
//! - [`pages`]: server-rendered HTML (blog, landing pages) and the
//!   directory search endpoint
//! - [`clinics`]: authenticated dashboard CRUD under `/api/clinic`

pub mod clinics;
pub mod health;
pub mod pages;
