// ABOUTME: Domain-wide constants for the Kinova gait intelligence platform
// ABOUTME: Acceptance limits and physical units shared across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

//! Domain constants organized by concern.

/// Acceptance limits for user-supplied and derived values
pub mod limits {
    /// Minimum accepted body height (cm)
    pub const MIN_HEIGHT_CM: f64 = 100.0;

    /// Maximum accepted body height (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;

    /// Minimum accepted body weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 30.0;

    /// Maximum accepted body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;

    /// Lower bound of the composite gait score
    pub const MIN_GAIT_SCORE: f64 = 0.0;

    /// Upper bound of the composite gait score
    pub const MAX_GAIT_SCORE: f64 = 100.0;

    /// Number of most recent readings considered when averaging the
    /// local composite score
    pub const SCORE_READING_WINDOW: usize = 30;
}

/// Physical unit conversions
pub mod units {
    /// Standard gravity (m/s²), used to express joint forces as
    /// body-weight multiples: `BW = force_n / (weight_kg * STANDARD_GRAVITY)`
    pub const STANDARD_GRAVITY: f64 = 9.81;

    /// Centimeters per meter
    pub const CM_PER_M: f64 = 100.0;
}
