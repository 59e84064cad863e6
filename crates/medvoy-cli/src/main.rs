//! Medvoy CLI
//!
//! Runs the platform server and offers content tooling for editors:
//! render one post locally, or check the whole content tree.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use medvoy_api::{AppState, Server, build_router};
use medvoy_auth::{AuthConfig, StaticTokenValidator};
use medvoy_content::assemble::compose_body;
use medvoy_content::frontmatter::extract_frontmatter;
use medvoy_core::service::ServiceState;
use medvoy_directory::Directory;
use medvoy_store::{FsStore, PostFrontmatter, PostStore};

use crate::config::Config;

/// Medvoy platform administration tool
#[derive(Parser, Debug)]
#[command(name = "medvoy")]
#[command(about = "Medvoy platform server and content tooling", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "MEDVOY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Override the configured listen address
        #[arg(long)]
        addr: Option<String>,
    },
    /// Render one post markdown file to article HTML on stdout
    Render {
        /// The .md file to render
        file: PathBuf,
        /// Print the structured blocks as JSON instead of HTML
        #[arg(long)]
        blocks: bool,
    },
    /// Parse every post in the content tree and report problems
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match args.command {
        Command::Serve { addr } => serve(config, addr).await,
        Command::Render { file, blocks } => render(&file, blocks),
        Command::Check => check(config).await,
    }
}

async fn serve(config: Config, addr_override: Option<String>) -> Result<()> {
    let store = FsStore::open(&config.content_dir)
        .await
        .with_context(|| format!("opening content dir {}", config.content_dir.display()))?;
    let media_dir = store.media_dir().to_path_buf();

    let state = AppState::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Directory::new(config.directory.clone()),
        config.landing.clone(),
    );

    // Warm the post cache once so a broken content tree fails loudly.
    state.health.set_state(ServiceState::Loading);
    match store.list_posts().await {
        Ok(posts) => {
            tracing::info!("loaded {} posts from {}", posts.len(), config.content_dir.display());
            state.health.set_state(ServiceState::Ready);
        }
        Err(e) => {
            state.health.set_state(ServiceState::Failed(e.to_string()));
            bail!("content tree failed to load: {e}");
        }
    }

    let mut validator = StaticTokenValidator::new();
    for entry in &config.auth.tokens {
        validator = validator.with_token(&entry.token, &entry.subject, &entry.email);
    }
    if config.auth.enabled && config.auth.tokens.is_empty() {
        tracing::warn!("auth is enabled but no tokens are configured; dashboard is unusable");
    }

    let router = build_router(
        state,
        Arc::new(validator),
        AuthConfig {
            enabled: config.auth.enabled,
        },
        Some(media_dir),
    );

    let addr = addr_override.unwrap_or(config.listen_addr);
    let addr = addr.parse().with_context(|| format!("invalid listen address {addr}"))?;
    Server::new(router, addr).run().await?;
    Ok(())
}

fn render(file: &Path, blocks: bool) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let result = extract_frontmatter(&raw);
    let body = compose_body(result.body());

    if blocks {
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}{}", body.html_before_cta, body.html_after_cta);
    }
    Ok(())
}

async fn check(config: Config) -> Result<()> {
    let store = FsStore::open(&config.content_dir).await?;
    let posts_dir = config.content_dir.join("posts");

    let mut total = 0usize;
    let mut failures = 0usize;
    for entry in std::fs::read_dir(&posts_dir)
        .with_context(|| format!("reading {}", posts_dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        total += 1;
        let raw = std::fs::read_to_string(&path)?;
        let result = extract_frontmatter(&raw);
        match result.deserialize::<PostFrontmatter>() {
            Ok(Some(fm)) => {
                let body = compose_body(result.body());
                println!(
                    "ok   {} — \"{}\": {} sections, {} cost rows, {} steps, {} faq",
                    path.display(),
                    fm.title,
                    body.toc.len(),
                    body.cost_rows.len(),
                    body.timeline.len(),
                    body.faq.len(),
                );
            }
            Ok(None) => {
                failures += 1;
                println!("FAIL {} — missing frontmatter", path.display());
            }
            Err(e) => {
                failures += 1;
                println!("FAIL {} — {e}", path.display());
            }
        }
    }

    // The served list endpoint skips broken posts; surface that too.
    let served = store.list_posts().await?.len();
    println!("{total} posts checked, {failures} failures, {served} servable");

    if failures > 0 {
        bail!("{failures} of {total} posts failed to parse");
    }
    Ok(())
}
