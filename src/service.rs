//! Ingestion pipeline: validate → score → store.
//!
//! [`Monitor`] is the single owner of the history store. Route handlers and the
//! simulator reach the store only through [`Monitor::submit`] and
//! [`Monitor::snapshot`].

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{RawRecord, Sample};
use crate::risk;
use crate::simulator;
use crate::store::{HistoryStore, Snapshot};
use crate::validate::{self, ValidationError};

// ---

/// Client input errors. Neither variant mutates the store.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Body is not JSON, or is JSON but not an object.
    #[error("Invalid JSON")]
    Malformed,

    #[error("Invalid data types")]
    Validation(#[from] ValidationError),
}

/// Outcome of one simulation run.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// The generated raw payload, as submitted.
    pub payload: RawRecord,
    /// The stored sample, or why the payload was rejected.
    pub outcome: Result<Sample, ValidationError>,
}

/// Shared monitoring state handed to every request.
#[derive(Debug, Default)]
pub struct Monitor {
    store: HistoryStore,
}

impl Monitor {
    pub fn new(history_max: usize) -> Self {
        Monitor {
            store: HistoryStore::new(history_max),
        }
    }

    /// Parse a request body and submit it.
    pub fn submit_json(&self, body: &[u8]) -> Result<Sample, IngestError> {
        // ---
        let record = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                warn!("Rejected payload: expected JSON object, got {}", kind(&other));
                return Err(IngestError::Malformed);
            }
            Err(e) => {
                warn!("Rejected payload: {}", e);
                return Err(IngestError::Malformed);
            }
        };

        self.submit(&record).map_err(IngestError::from)
    }

    /// Validate, score and store one record.
    ///
    /// On error the store is left untouched.
    pub fn submit(&self, record: &RawRecord) -> Result<Sample, ValidationError> {
        // ---
        let reading =
            validate::validate(record).inspect_err(|e| warn!("Rejected payload: {}", e))?;

        let assessment = risk::assess(&reading);
        let sample = reading.into_sample(assessment);

        debug!(
            score = sample.risk.score,
            key = ?sample.risk.key,
            rainfall = sample.rainfall,
            humidity = sample.humidity,
            soil = sample.soil,
            ultrasonic = sample.ultrasonic,
            "Accepted sample"
        );

        self.store.append(sample.clone());
        Ok(sample)
    }

    /// Generate a synthetic record and push it through [`Monitor::submit`].
    pub fn simulate(&self) -> Simulation {
        // ---
        let payload = simulator::generate();
        let outcome = self.submit(&payload);

        match &outcome {
            Ok(sample) => info!(
                "Simulated sample stored: score={} ({})",
                sample.risk.score, sample.risk.label
            ),
            Err(e) => warn!("Simulated sample rejected: {}", e),
        }

        Simulation { payload, outcome }
    }

    /// Consistent view of latest sample and history.
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    pub fn history_len(&self) -> usize {
        self.store.len()
    }

    pub fn history_max(&self) -> usize {
        self.store.capacity()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
