//! Medvoy platform — umbrella crate.
//!
//! Re-exports the Medvoy components for convenience. The content
//! pipeline is always available; use feature flags for the rest.

pub use medvoy_content as content;
pub use medvoy_core as core;

#[cfg(feature = "store")]
pub use medvoy_store as store;

#[cfg(feature = "directory")]
pub use medvoy_directory as directory;

#[cfg(feature = "auth")]
pub use medvoy_auth as auth;

#[cfg(feature = "api")]
pub use medvoy_api as api;

#[cfg(feature = "client")]
pub use medvoy_client as client;
