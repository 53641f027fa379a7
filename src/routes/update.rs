//! `POST /update`: sensor submissions from devices and the simulator.

use axum::{
    body::Bytes, extract::State, http::StatusCode, response::IntoResponse, routing::post, Json,
    Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use super::AppState;
use crate::Sample;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/update", post(handler))
}

#[derive(Serialize)]
struct Accepted {
    status: &'static str,
    sample: Sample,
}

// The body is parsed by hand so that a bad payload gets the JSON error shape
// instead of axum's plain-text rejection, whatever the content type.
async fn handler(State(monitor): State<AppState>, body: Bytes) -> impl IntoResponse {
    // ---
    debug!("POST /update - {} bytes", body.len());

    match monitor.submit_json(&body) {
        Ok(sample) => (
            StatusCode::CREATED,
            Json(Accepted {
                status: "ok",
                sample,
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}
