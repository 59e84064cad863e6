//! Readiness endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// `GET /health` — component state and uptime.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let handle = &state.health;
    Json(json!({
        "component": handle.name(),
        "status": handle.state().to_string(),
        "uptime_secs": handle.uptime().as_secs(),
    }))
}
