//! Router assembly and the server entry point.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use medvoy_auth::{AuthConfig, AuthLayer, TokenValidator};

use crate::error::{Error, Result};
use crate::routes::{clinics, health, pages};
use crate::state::{AppState, MAX_UPLOAD_BYTES};

/// Build the full application router.
///
/// Public page routes are unauthenticated; everything under `/api/clinic`
/// goes through the bearer-token middleware. When `media_dir` is given,
/// uploaded files are served under `/media`.
pub fn build_router<V: TokenValidator>(
    state: AppState,
    validator: Arc<V>,
    auth: AuthConfig,
    media_dir: Option<PathBuf>,
) -> Router {
    let dashboard = Router::new()
        .route("/api/clinic", post(clinics::create_clinic))
        .route(
            "/api/clinic/{id}",
            put(clinics::update_clinic).delete(clinics::delete_clinic),
        )
        .route("/api/clinic/{id}/doctors", post(clinics::add_doctor))
        .route(
            "/api/clinic/{id}/doctors/{doctor_id}",
            put(clinics::update_doctor).delete(clinics::remove_doctor),
        )
        .route("/api/clinic/{id}/photos", post(clinics::upload_photo))
        .route(
            "/api/clinic/{id}/photos/{photo_id}",
            delete(clinics::remove_photo),
        )
        .layer(AuthLayer::new(validator, auth))
        // Leave headroom over the photo cap; the handler enforces the
        // exact limit with a 413.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024));

    let router = Router::new()
        .route("/health", get(health::health))
        .route("/blog", get(pages::blog_index))
        .route("/blog/{slug}", get(pages::blog_post))
        .route("/clinics", get(pages::search_clinics))
        .route("/go/{procedure}/{destination}", get(pages::landing))
        .merge(dashboard)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    match media_dir {
        Some(dir) => router.nest_service("/media", ServeDir::new(dir)),
        None => router,
    }
}

/// The HTTP server.
pub struct Server {
    router: Router,
    addr: SocketAddr,
}

impl Server {
    /// Create a server for a built router.
    pub fn new(router: Router, addr: SocketAddr) -> Self {
        Self { router, addr }
    }

    /// Bind and serve until the process is stopped.
    pub async fn run(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|e| Error::Core(e.into()))?;
        tracing::info!("listening on http://{}", self.addr);
        axum::serve(listener, self.router)
            .await
            .map_err(|e| Error::Core(e.into()))?;
        Ok(())
    }
}
