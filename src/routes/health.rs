// src/routes/health.rs
//! Liveness endpoint for the cloudburst monitor.
//!
//! `GET /health` lets container orchestrators and CI check that the service
//! answers HTTP. It also reports how full the history window is, which is the
//! only moving part worth watching in this service.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::AppState;

/// JSON response body for the `/health` endpoint.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    samples: usize,
    history_max: usize,
}

/// Handle `GET /health`.
async fn health(State(monitor): State<AppState>) -> Json<HealthResponse> {
    // ---
    Json(HealthResponse {
        status: "ok",
        samples: monitor.history_len(),
        history_max: monitor.history_max(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
