//! Data models for the cloudburst monitoring pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ---

/// Untyped sensor payload as received from a client or the simulator.
///
/// Only the [`validate`](crate::validate) module looks inside one of these;
/// everything past that boundary works with [`Sample`].
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Discrete cloudburst risk category derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Human readable label shown on monitoring dashboards.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Cloudburst Risk",
        }
    }
}

/// Score plus category attached to every stored sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    // ---
    pub score: u8,
    pub label: &'static str,
    pub key: RiskLevel,
}

impl RiskAssessment {
    /// Build an assessment whose label and key are fixed by `level`.
    pub fn new(score: u8, level: RiskLevel) -> Self {
        // ---
        RiskAssessment {
            score,
            label: level.label(),
            key: level,
        }
    }
}

/// Sensor values after coercion, before a risk assessment is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    // ---
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub soil: u8,
    pub ultrasonic: f64,
    pub timestamp: DateTime<Utc>,
}

/// Validated, timestamped and scored sensor sample as held in history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    // ---
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub soil: u8,
    pub ultrasonic: f64,
    pub timestamp: DateTime<Utc>,
    pub risk: RiskAssessment,
}

impl Reading {
    /// Attach the assessment and produce the final, immutable sample.
    pub fn into_sample(self, risk: RiskAssessment) -> Sample {
        // ---
        Sample {
            temperature: self.temperature,
            humidity: self.humidity,
            rainfall: self.rainfall,
            soil: self.soil,
            ultrasonic: self.ultrasonic,
            timestamp: self.timestamp,
            risk,
        }
    }
}
