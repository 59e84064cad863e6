//! # medvoy-client
//!
//! Typed HTTP client for the Medvoy dashboard API. Used by internal
//! tooling and the CLI to drive the same `/api/clinic` surface the
//! dashboard uses.

pub mod client;
pub mod error;

pub use client::MedvoyClient;
pub use error::{Error, Result};
