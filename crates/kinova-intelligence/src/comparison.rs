// ABOUTME: Actual-vs-ideal comparison status, deviation, and summary counts
// ABOUTME: Percent-deviation rule with a postural-sway special case
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

use crate::numeric::round_to;
use crate::physiological_constants::comparison_bands::{
    OPTIMAL_DEVIATION_PCT, SWAY_OPTIMAL_MAX_DEG, SWAY_OPTIMAL_MIN_DEG,
};
use kinova_core::models::GaitParameter;
use serde::{Deserialize, Serialize};

/// How an observed value sits relative to its personalized ideal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonStatus {
    /// Within the optimal tolerance of the ideal
    Optimal,
    /// Meaningfully above the ideal
    Above,
    /// Meaningfully below the ideal
    Below,
    /// Comparison undefined (missing value or zero ideal)
    Unknown,
}

/// Compare an observed value against its ideal.
///
/// `Unknown` when either value is non-finite or the ideal is zero - a zero
/// ideal would otherwise divide the deviation, so it is special-cased rather
/// than surfaced as a numeric error.
///
/// Postural sway ignores the percent rule entirely: any observation inside
/// the 0-1 degree band is optimal regardless of distance from the 0.5 degree
/// target, above 1 degree is `Above`, negative is `Below`.
#[must_use]
pub fn comparison_status(actual: f64, ideal: f64, parameter: GaitParameter) -> ComparisonStatus {
    if !actual.is_finite() || !ideal.is_finite() || ideal == 0.0 {
        return ComparisonStatus::Unknown;
    }

    if parameter == GaitParameter::PosturalSway {
        if (SWAY_OPTIMAL_MIN_DEG..=SWAY_OPTIMAL_MAX_DEG).contains(&actual) {
            return ComparisonStatus::Optimal;
        }
        return if actual > SWAY_OPTIMAL_MAX_DEG {
            ComparisonStatus::Above
        } else {
            ComparisonStatus::Below
        };
    }

    let diff_pct = (actual - ideal) / ideal * 100.0;
    if diff_pct.abs() < OPTIMAL_DEVIATION_PCT {
        ComparisonStatus::Optimal
    } else if diff_pct > 0.0 {
        ComparisonStatus::Above
    } else {
        ComparisonStatus::Below
    }
}

/// Signed deviation from ideal as a percentage, rounded to one decimal.
/// Zero when the ideal is zero (comparison undefined).
#[must_use]
pub fn deviation_percent(actual: f64, ideal: f64) -> f64 {
    if !actual.is_finite() || !ideal.is_finite() || ideal == 0.0 {
        return 0.0;
    }
    round_to((actual - ideal) / ideal * 100.0, 1)
}

/// Counts of metric comparison outcomes for one evaluation cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Metrics within optimal tolerance
    pub optimal: usize,
    /// Metrics above their ideal
    pub above: usize,
    /// Metrics below their ideal
    pub below: usize,
    /// Metrics with undefined comparison
    pub unknown: usize,
}

impl ComparisonSummary {
    /// Tally statuses into a summary.
    pub fn from_statuses(statuses: impl IntoIterator<Item = ComparisonStatus>) -> Self {
        let mut summary = Self::default();
        for status in statuses {
            match status {
                ComparisonStatus::Optimal => summary.optimal += 1,
                ComparisonStatus::Above => summary.above += 1,
                ComparisonStatus::Below => summary.below += 1,
                ComparisonStatus::Unknown => summary.unknown += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rule_is_symmetric_around_ideal() {
        for parameter in [GaitParameter::Cadence, GaitParameter::WalkingSpeed] {
            let ideal = 110.0;
            assert_eq!(
                comparison_status(ideal * 1.20, ideal, parameter),
                ComparisonStatus::Above
            );
            assert_eq!(
                comparison_status(ideal * 0.80, ideal, parameter),
                ComparisonStatus::Below
            );
            assert_eq!(
                comparison_status(ideal, ideal, parameter),
                ComparisonStatus::Optimal
            );
        }
    }

    #[test]
    fn fifteen_percent_boundary_is_exclusive() {
        assert_eq!(
            comparison_status(114.9, 100.0, GaitParameter::Cadence),
            ComparisonStatus::Optimal
        );
        assert_eq!(
            comparison_status(115.0, 100.0, GaitParameter::Cadence),
            ComparisonStatus::Above
        );
        assert_eq!(
            comparison_status(85.0, 100.0, GaitParameter::Cadence),
            ComparisonStatus::Below
        );
    }

    #[test]
    fn postural_sway_uses_band_not_percent() {
        assert_eq!(
            comparison_status(1.5, 0.5, GaitParameter::PosturalSway),
            ComparisonStatus::Above
        );
        assert_eq!(
            comparison_status(0.7, 0.5, GaitParameter::PosturalSway),
            ComparisonStatus::Optimal,
            "0.7 deviates 40% from the 0.5 target but sits inside the 0-1 band"
        );
        assert_eq!(
            comparison_status(-0.2, 0.5, GaitParameter::PosturalSway),
            ComparisonStatus::Below
        );
    }

    #[test]
    fn zero_ideal_and_invalid_values_are_unknown() {
        assert_eq!(
            comparison_status(1.0, 0.0, GaitParameter::GaitSymmetry),
            ComparisonStatus::Unknown
        );
        assert_eq!(
            comparison_status(f64::NAN, 1.0, GaitParameter::Cadence),
            ComparisonStatus::Unknown
        );
    }

    #[test]
    fn deviation_rounds_to_one_decimal() {
        assert!((deviation_percent(1.171, 1.0) - 17.1).abs() < 1e-9);
        assert!((deviation_percent(5.0, 0.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_tallies_every_status() {
        let summary = ComparisonSummary::from_statuses([
            ComparisonStatus::Optimal,
            ComparisonStatus::Optimal,
            ComparisonStatus::Above,
            ComparisonStatus::Unknown,
        ]);
        assert_eq!(summary.optimal, 2);
        assert_eq!(summary.above, 1);
        assert_eq!(summary.below, 0);
        assert_eq!(summary.unknown, 1);
    }
}
