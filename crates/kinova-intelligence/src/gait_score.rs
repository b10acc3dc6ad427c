// ABOUTME: Composite 0-100 gait score - external ML override or local weighted formula
// ABOUTME: Clamped linear mapping of equilibrium, cadence deviation, and postural sway
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

//! Composite gait score computation.
//!
//! Two sources feed the single 0-100 score: an externally supplied ML score
//! (preferred when present) and a local weighted composite over the most
//! recent readings. Both are clamped to the score range and rounded so the
//! surface always yields an integral value. The selector is deliberately
//! explicit - `ml ?? local` - so each source stays independently testable.

use crate::numeric::{mean, round_to};
use crate::physiological_constants::{
    score_bands::{EXCELLENT_THRESHOLD, GOOD_THRESHOLD, MODERATE_THRESHOLD},
    score_model::{
        CADENCE_WEIGHT, EQUILIBRIUM_INPUT_MAX, EQUILIBRIUM_INPUT_MIN, EQUILIBRIUM_WEIGHT,
        MAX_CADENCE_DEVIATION, OPTIMAL_CADENCE, SWAY_INPUT_BEST, SWAY_INPUT_WORST, SWAY_WEIGHT,
    },
};
use kinova_core::constants::limits::{MAX_GAIT_SCORE, MIN_GAIT_SCORE, SCORE_READING_WINDOW};
use kinova_core::models::{GaitParameter, GaitReading};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Linearly interpolate `value` from `[in_min, in_max]` onto
/// `[out_min, out_max]`, clamping the result to the output interval.
///
/// Either range may be reversed; the clamp applies to the interval between
/// the output bounds regardless of their order.
#[must_use]
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let mapped = (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min;
    mapped.clamp(out_min.min(out_max), out_min.max(out_max))
}

/// Weighted composite for one reading, on the 0-100 scale.
///
/// Returns `0.0` when the reading lacks any of the three required fields
/// (equilibrium score, cadence, postural sway).
#[must_use]
pub fn raw_composite(reading: &GaitReading) -> f64 {
    let (Some(equilibrium), Some(cadence), Some(sway)) = (
        reading.value(GaitParameter::Equilibrium),
        reading.value(GaitParameter::Cadence),
        reading.value(GaitParameter::PosturalSway),
    ) else {
        return 0.0;
    };

    let equilibrium_mapped = map_range(
        equilibrium,
        EQUILIBRIUM_INPUT_MIN,
        EQUILIBRIUM_INPUT_MAX,
        0.0,
        100.0,
    );
    let cadence_mapped = map_range(
        (cadence - OPTIMAL_CADENCE).abs(),
        0.0,
        MAX_CADENCE_DEVIATION,
        100.0,
        0.0,
    );
    let sway_mapped = map_range(sway, SWAY_INPUT_WORST, SWAY_INPUT_BEST, 0.0, 100.0);

    equilibrium_mapped * EQUILIBRIUM_WEIGHT
        + cadence_mapped * CADENCE_WEIGHT
        + sway_mapped * SWAY_WEIGHT
}

/// The composite 0-100 gait score for an evaluation cycle.
///
/// When an external ML score is present (and finite) it wins, clamped to the
/// score range. Otherwise the local composite averages the raw per-reading
/// scores over the last [`SCORE_READING_WINDOW`] readings that carry all
/// three required fields. Either way the result is clamped and rounded.
///
/// `readings` is expected in chronological order; only the tail of the
/// slice is considered.
#[must_use]
pub fn composite_score(readings: &[GaitReading], ml_score: Option<f64>) -> f64 {
    if let Some(ml) = ml_score.filter(|v| v.is_finite()) {
        return ml.clamp(MIN_GAIT_SCORE, MAX_GAIT_SCORE).round();
    }

    let window_start = readings.len().saturating_sub(SCORE_READING_WINDOW);
    let scores: Vec<f64> = readings[window_start..]
        .iter()
        .filter(|r| r.has_composite_fields())
        .map(raw_composite)
        .collect();

    if scores.is_empty() {
        debug!("no valid readings in score window; composite defaults to 0");
    }

    mean(&scores)
        .clamp(MIN_GAIT_SCORE, MAX_GAIT_SCORE)
        .round()
}

/// Per-reading clamped composite scores for the valid tail of the reading
/// window, in chronological order - the series trend charts plot.
#[must_use]
pub fn score_series(readings: &[GaitReading]) -> Vec<f64> {
    let window_start = readings.len().saturating_sub(SCORE_READING_WINDOW);
    readings[window_start..]
        .iter()
        .filter(|r| r.has_composite_fields())
        .map(|r| raw_composite(r).clamp(MIN_GAIT_SCORE, MAX_GAIT_SCORE))
        .collect()
}

/// Qualitative band for a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 85 and above
    Excellent,
    /// 70 to 84
    Good,
    /// 40 to 69
    ModeratelyHealthy,
    /// Below 40
    NeedsImprovement,
}

impl ScoreBand {
    /// Classify a 0-100 composite score.
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if score >= GOOD_THRESHOLD {
            Self::Good
        } else if score >= MODERATE_THRESHOLD {
            Self::ModeratelyHealthy
        } else {
            Self::NeedsImprovement
        }
    }

    /// Display label matching the inference backend's classification strings
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::ModeratelyHealthy => "Moderately Healthy",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(equilibrium: f64, cadence: f64, sway: f64) -> GaitReading {
        GaitReading {
            equilibrium_score: Some(equilibrium),
            cadence: Some(cadence),
            postural_sway: Some(sway),
            ..GaitReading::default()
        }
    }

    #[test]
    fn map_range_interpolates_and_clamps() {
        assert!((map_range(0.225, 0.05, 0.4, 0.0, 100.0) - 50.0).abs() < 1e-9);
        // below the input range clamps to the low output bound
        assert!((map_range(-5.0, 0.05, 0.4, 0.0, 100.0) - 0.0).abs() < f64::EPSILON);
        // reversed output range still clamps to the interval between bounds
        assert!((map_range(70.0, 0.0, 35.0, 100.0, 0.0) - 0.0).abs() < f64::EPSILON);
        assert!((map_range(17.5, 0.0, 35.0, 100.0, 0.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn thirty_ideal_readings_score_87() {
        // equilibrium 0.3 -> 71.428571..., cadence 110 -> 100, sway 1 -> 100
        // composite = 0.45 x 71.428571 + 0.35 x 100 + 0.20 x 100 = 87.142857
        let readings: Vec<GaitReading> = (0..30).map(|_| reading(0.3, 110.0, 1.0)).collect();
        assert!((composite_score(&readings, None) - 87.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ml_score_overrides_local_composite() {
        let readings = vec![reading(0.3, 110.0, 1.0)];
        assert!((composite_score(&readings, Some(42.4)) - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ml_score_is_clamped_to_range() {
        assert!((composite_score(&[], Some(150.0)) - 100.0).abs() < f64::EPSILON);
        assert!((composite_score(&[], Some(-12.0)) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_finite_ml_score_falls_back_to_local() {
        let readings: Vec<GaitReading> = (0..5).map(|_| reading(0.3, 110.0, 1.0)).collect();
        assert!((composite_score(&readings, Some(f64::NAN)) - 87.0).abs() < f64::EPSILON);
    }

    #[test]
    fn incomplete_readings_are_excluded_from_the_average() {
        let mut readings: Vec<GaitReading> = (0..10).map(|_| reading(0.3, 110.0, 1.0)).collect();
        readings.push(GaitReading {
            equilibrium_score: Some(0.01),
            cadence: Some(30.0),
            postural_sway: None, // missing field invalidates the reading
            ..GaitReading::default()
        });
        assert!((composite_score(&readings, None) - 87.0).abs() < f64::EPSILON);
    }

    #[test]
    fn only_the_last_thirty_readings_count() {
        // 40 poor readings followed by 30 strong ones: the poor tail must
        // age out of the window entirely.
        let mut readings: Vec<GaitReading> = (0..40).map(|_| reading(0.05, 60.0, 25.0)).collect();
        readings.extend((0..30).map(|_| reading(0.3, 110.0, 1.0)));
        assert!((composite_score(&readings, None) - 87.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_stays_in_range_for_extreme_inputs() {
        let extreme = vec![
            reading(1e12, 1e12, -1e12),
            reading(-1e12, -1e12, 1e12),
            reading(f64::MAX, 0.0, 0.0),
        ];
        let score = composite_score(&extreme, None);
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn no_valid_readings_scores_zero() {
        assert!((composite_score(&[], None) - 0.0).abs() < f64::EPSILON);
        let invalid = vec![GaitReading::default()];
        assert!((composite_score(&invalid, None) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn series_skips_invalid_readings_and_clamps() {
        let readings = vec![
            reading(0.3, 110.0, 1.0),
            GaitReading::default(),
            reading(1e9, 110.0, 1.0),
        ];
        let series = score_series(&readings);
        assert_eq!(series.len(), 2);
        assert!((series[0] - 87.142_857_142_857_14).abs() < 1e-9);
        assert!((series[1] - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn classification_band_boundaries() {
        assert_eq!(ScoreBand::classify(85.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::classify(84.9), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(70.0), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(69.9), ScoreBand::ModeratelyHealthy);
        assert_eq!(ScoreBand::classify(40.0), ScoreBand::ModeratelyHealthy);
        assert_eq!(ScoreBand::classify(39.9), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::classify(0.0), ScoreBand::NeedsImprovement);
    }
}
