//! Cloudburst risk monitoring backend.
//!
//! Sensor readings arrive as loose JSON, are coerced into typed readings by
//! [`validate`], scored by [`risk`], and kept in a bounded window by [`store`].
//! [`Monitor`] ties the three together and is the only way in for both HTTP
//! handlers and the [`simulator`].
//!
//! Module layout follows the Explicit Module Boundary Pattern (EMBP): each
//! module exposes a narrow surface, and cross-module types are re-exported
//! here so that `routes/*.rs` only ever import from the crate root.

pub mod config;
pub mod models;
pub mod risk;
pub mod routes;
pub mod service;
pub mod simulator;
pub mod store;
pub mod validate;

pub use config::Config;
pub use models::{RawRecord, Reading, RiskAssessment, RiskLevel, Sample};
pub use routes::router;
pub use service::{IngestError, Monitor, Simulation};
pub use store::{HistoryStore, Snapshot};
pub use validate::ValidationError;
