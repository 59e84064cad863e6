//! # medvoy-api
//!
//! HTTP server for the Medvoy platform:
//!
//! - Server-rendered pages: blog articles, procedure/destination landing
//!   pages, the clinic directory search endpoint
//! - The authenticated dashboard API under `/api/clinic`: profile,
//!   doctors, and photo CRUD with ownership enforcement
//! - Static serving of uploaded media under `/media`
//! - A health endpoint backed by the content store's lifecycle handle

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{Error, Result};
pub use server::{Server, build_router};
pub use state::AppState;
