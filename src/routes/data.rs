//! `GET /data`: latest sample plus the history window, oldest first.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Serialize, Serializer};
use tracing::debug;

use super::AppState;
use crate::Sample;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/data", get(handler))
}

#[derive(Debug, Serialize)]
struct StateResponse {
    /// `{}` until the first sample is accepted.
    #[serde(serialize_with = "sample_or_empty")]
    latest: Option<Sample>,
    history: Vec<Sample>,
}

async fn handler(State(monitor): State<AppState>) -> Json<StateResponse> {
    // ---
    let snapshot = monitor.snapshot();
    debug!("GET /data - {} samples in history", snapshot.history.len());

    Json(StateResponse {
        latest: snapshot.latest,
        history: snapshot.history,
    })
}

fn sample_or_empty<S>(latest: &Option<Sample>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // ---
    match latest {
        Some(sample) => sample.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}
