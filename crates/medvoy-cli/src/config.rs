//! Platform configuration file.
//!
//! Loaded from TOML; every section has serde defaults so a minimal file
//! (or none at all) still boots a development server:
//!
//! ```toml
//! listen_addr = "127.0.0.1:8080"
//! content_dir = "./content"
//!
//! [auth]
//! enabled = true
//!
//! [[auth.tokens]]
//! token = "tok_dev"
//! subject = "sub_dev"
//! email = "dev@medvoy.io"
//!
//! [directory]
//! fuzzy_threshold = 0.9
//!
//! [landing]
//! procedures = ["Dental Implants", "Rhinoplasty"]
//! destinations = ["Turkey", "Hungary"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use medvoy_content::seo::LandingCatalog;
use medvoy_directory::DirectoryConfig;

/// Top-level platform configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Root of the content tree (posts/, clinics/, media/).
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthSection,

    /// Directory search settings.
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Landing-page catalog.
    #[serde(default)]
    pub landing: LandingCatalog,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("./content")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            content_dir: default_content_dir(),
            auth: AuthSection::default(),
            directory: DirectoryConfig::default(),
            landing: LandingCatalog::default(),
        }
    }
}

/// `[auth]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSection {
    /// Require bearer tokens on the dashboard routes.
    #[serde(default)]
    pub enabled: bool,

    /// Accepted tokens and their identities.
    #[serde(default)]
    pub tokens: Vec<TokenEntry>,
}

/// One `[[auth.tokens]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenEntry {
    /// The opaque bearer token.
    pub token: String,
    /// Subject recorded as clinic owner.
    pub subject: String,
    /// Contact email.
    pub email: String,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}
