//! Coercion of untyped sensor payloads into typed readings.
//!
//! Each sensor field is described by a row in [`FIELDS`]: its name, the value
//! used when the field is absent, and the parser applied when it is present.
//! Every row is evaluated before deciding, so a record is either accepted as a
//! whole or rejected with the complete list of offending fields.

use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;

use crate::models::{RawRecord, Reading};

// ---

/// Raised when one or more present fields cannot be coerced to their type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid data types for field(s): {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

struct FieldSpec {
    name: &'static str,
    default: f64,
    parse: fn(&Value) -> Option<f64>,
}

/// Distance reported when the ultrasonic sensor sees nothing.
pub const NO_ULTRASONIC_READING: f64 = 999.0;

// Order matches the positional unpacking in `validate_at`.
const FIELDS: [FieldSpec; 5] = [
    FieldSpec { name: "temperature", default: 0.0, parse: decimal },
    FieldSpec { name: "humidity", default: 0.0, parse: decimal },
    FieldSpec { name: "rainfall", default: 0.0, parse: decimal },
    FieldSpec { name: "soil", default: 0.0, parse: flag },
    FieldSpec { name: "ultrasonic", default: NO_ULTRASONIC_READING, parse: decimal },
];

/// Validate a raw record, stamping it with the current UTC time.
pub fn validate(record: &RawRecord) -> Result<Reading, ValidationError> {
    validate_at(record, Utc::now())
}

/// Validate a raw record using an explicit acceptance time.
pub fn validate_at(record: &RawRecord, now: DateTime<Utc>) -> Result<Reading, ValidationError> {
    // ---
    let mut values = [0.0_f64; FIELDS.len()];
    let mut invalid = Vec::new();

    for (slot, spec) in values.iter_mut().zip(FIELDS.iter()) {
        match record.get(spec.name) {
            None => *slot = spec.default,
            Some(raw) => match (spec.parse)(raw) {
                Some(v) => *slot = v,
                None => invalid.push(spec.name),
            },
        }
    }

    if !invalid.is_empty() {
        return Err(ValidationError { fields: invalid });
    }

    let [temperature, humidity, rainfall, soil, ultrasonic] = values;

    Ok(Reading {
        temperature: round2(temperature),
        humidity: round2(humidity),
        rainfall: round2(rainfall),
        soil: if soil != 0.0 { 1 } else { 0 },
        ultrasonic: round2(ultrasonic),
        timestamp: now,
    })
}

/// Round to two decimal places, ties to even on the exact binary value.
///
/// Goes through fixed-precision formatting so very large magnitudes stay
/// finite instead of overflowing in an intermediate `value * 100.0`.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Numbers, booleans and numeric strings; non-finite results are rejected.
fn decimal(value: &Value) -> Option<f64> {
    // ---
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    parsed.is_finite().then_some(parsed)
}

/// Integer coercion normalized to 0.0 / 1.0.
///
/// Fractional numbers are truncated toward zero first, so `0.7` is off and
/// `1.2` is on. Strings must be integer literals: `"1"` works, `"1.0"` fails.
fn flag(value: &Value) -> Option<f64> {
    // ---
    let on = match value {
        Value::Number(n) => {
            let f = n.as_f64()?;
            if !f.is_finite() {
                return None;
            }
            f.trunc() != 0.0
        }
        Value::Bool(b) => *b,
        Value::String(s) => {
            let s = s.trim();
            let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            digits.bytes().any(|b| b != b'0')
        }
        _ => return None,
    };

    Some(if on { 1.0 } else { 0.0 })
}
