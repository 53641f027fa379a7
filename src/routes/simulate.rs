//! `GET /simulate`: generate one synthetic reading and ingest it.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::AppState;
use crate::RawRecord;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/simulate", get(handler))
}

#[derive(Debug, Serialize)]
struct SimulatedResponse {
    status: &'static str,
    payload: RawRecord,
}

async fn handler(State(monitor): State<AppState>) -> Json<SimulatedResponse> {
    // ---
    let run = monitor.simulate();

    Json(SimulatedResponse {
        status: "simulated",
        payload: run.payload,
    })
}
