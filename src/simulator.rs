//! Synthetic sensor payloads for demos and load testing.
//!
//! The generator only produces raw records. Submitting them is left to
//! [`Monitor::simulate`](crate::service::Monitor::simulate), which goes through
//! the same validation and scoring as a real device.

use std::ops::Range;

use rand::Rng;
use serde_json::json;

use crate::models::RawRecord;
use crate::validate::round2;

// ---

const TEMPERATURE_RANGE: Range<f64> = 12.0..35.0;
const HUMIDITY_RANGE: Range<f64> = 40.0..98.0;
const LIGHT_RAIN_RANGE: Range<f64> = 0.0..8.0;
const HEAVY_RAIN_RANGE: Range<f64> = 10.0..50.0;
const ULTRASONIC_RANGE: Range<f64> = 8.0..120.0;

/// Chance that a draw simulates a burst of heavy rain.
pub const HEAVY_RAIN_PROBABILITY: f64 = 0.12;

/// Chance that the soil moisture flag is set.
pub const WET_SOIL_PROBABILITY: f64 = 0.45;

/// Draw one raw record using the thread-local generator.
pub fn generate() -> RawRecord {
    generate_with(&mut rand::thread_rng())
}

/// Draw one raw record from `rng`.
pub fn generate_with<R: Rng>(rng: &mut R) -> RawRecord {
    // ---
    let temperature = round2(rng.gen_range(TEMPERATURE_RANGE));
    let humidity = round2(rng.gen_range(HUMIDITY_RANGE));

    let rainfall = if rng.gen_bool(HEAVY_RAIN_PROBABILITY) {
        round2(rng.gen_range(HEAVY_RAIN_RANGE))
    } else {
        round2(rng.gen_range(LIGHT_RAIN_RANGE))
    };

    let soil = u8::from(rng.gen_bool(WET_SOIL_PROBABILITY));
    let ultrasonic = round2(rng.gen_range(ULTRASONIC_RANGE));

    let mut record = RawRecord::new();
    record.insert("temperature".into(), json!(temperature));
    record.insert("humidity".into(), json!(humidity));
    record.insert("rainfall".into(), json!(rainfall));
    record.insert("soil".into(), json!(soil));
    record.insert("ultrasonic".into(), json!(ultrasonic));
    record
}
