//! Cloudburst risk scoring.
//!
//! Four independent factors each contribute at most one tier:
//!
//! | factor     | tiers                                 | max |
//! |------------|---------------------------------------|-----|
//! | rainfall   | `>= 30` +3, `>= 10` +2, `> 0` +1      | 3   |
//! | humidity   | `>= 90` +2, `>= 80` +1                | 2   |
//! | soil       | `== 1` +2                             | 2   |
//! | ultrasonic | `< 30` +3, `< 60` +1                  | 3   |
//!
//! The total maps to a category: `>= 6` high, `>= 3` moderate, otherwise low.

use crate::models::{Reading, RiskAssessment, RiskLevel};

// ---

const HIGH_THRESHOLD: u8 = 6;
const MODERATE_THRESHOLD: u8 = 3;

/// Score a validated reading. Pure and total over well-typed input.
pub fn assess(reading: &Reading) -> RiskAssessment {
    // ---
    let score = rainfall_points(reading.rainfall)
        + humidity_points(reading.humidity)
        + soil_points(reading.soil)
        + ultrasonic_points(reading.ultrasonic);

    RiskAssessment::new(score, level_for(score))
}

/// Category for a total score.
pub fn level_for(score: u8) -> RiskLevel {
    // ---
    if score >= HIGH_THRESHOLD {
        RiskLevel::High
    } else if score >= MODERATE_THRESHOLD {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

fn rainfall_points(rainfall: f64) -> u8 {
    if rainfall >= 30.0 {
        3
    } else if rainfall >= 10.0 {
        2
    } else if rainfall > 0.0 {
        1
    } else {
        0
    }
}

fn humidity_points(humidity: f64) -> u8 {
    if humidity >= 90.0 {
        2
    } else if humidity >= 80.0 {
        1
    } else {
        0
    }
}

fn soil_points(soil: u8) -> u8 {
    if soil == 1 {
        2
    } else {
        0
    }
}

// 999 ("no reading") always lands in the last tier.
fn ultrasonic_points(ultrasonic: f64) -> u8 {
    if ultrasonic < 30.0 {
        3
    } else if ultrasonic < 60.0 {
        1
    } else {
        0
    }
}
