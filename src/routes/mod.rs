use std::sync::Arc;

use axum::Router;

use crate::Monitor;

mod data;
mod health;
mod simulate;
mod update;

// ---

/// State shared by every handler.
pub type AppState = Arc<Monitor>;

pub fn router(monitor: AppState) -> Router {
    // ---
    Router::new()
        .merge(update::router())
        .merge(data::router())
        .merge(simulate::router())
        .merge(health::router())
        .with_state(monitor)
}
