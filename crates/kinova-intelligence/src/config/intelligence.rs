// ABOUTME: Tunable thresholds for the recommendation and threat engines
// ABOUTME: Literature-backed defaults with a process-wide configuration singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

//! Intelligence Configuration
//!
//! Thresholds that shape which recommendations and threats fire. Defaults
//! come from the constants module; deployments with different clinical
//! sensitivity can install their own configuration before first use.
//!
//! The core formulas (estimator constants, categorization bands, score
//! weights) are part of the numeric output contract and deliberately NOT
//! configurable.

use crate::physiological_constants::{recommendation_ratios, threat_severity};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Thresholds for triggering metric recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Actual below this fraction of ideal triggers an improvement
    /// recommendation (equilibrium, cadence, walking speed)
    pub low_ratio: f64,
    /// Knee force above this multiple of ideal triggers a load-reduction
    /// recommendation
    pub knee_force_high_ratio: f64,
    /// Postural sway above this multiple of ideal triggers a stability
    /// recommendation
    pub sway_high_ratio: f64,
    /// Half-width of the near-ideal band for the maintenance rule
    pub maintenance_band: f64,
    /// Metrics inside the near-ideal band required before the positive
    /// maintenance recommendation fires
    pub maintenance_metric_count: usize,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            low_ratio: recommendation_ratios::LOW_RATIO,
            knee_force_high_ratio: recommendation_ratios::KNEE_FORCE_HIGH_RATIO,
            sway_high_ratio: recommendation_ratios::SWAY_HIGH_RATIO,
            maintenance_band: recommendation_ratios::MAINTENANCE_BAND,
            maintenance_metric_count: recommendation_ratios::MAINTENANCE_METRIC_COUNT,
        }
    }
}

/// Deviation cutoffs for threat severity grading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatThresholds {
    /// Absolute deviation (percent) above which a threat is high severity
    pub high_deviation_pct: f64,
    /// Absolute deviation (percent) above which a threat is medium severity
    pub medium_deviation_pct: f64,
}

impl Default for ThreatThresholds {
    fn default() -> Self {
        Self {
            high_deviation_pct: threat_severity::HIGH_DEVIATION_PCT,
            medium_deviation_pct: threat_severity::MEDIUM_DEVIATION_PCT,
        }
    }
}

/// Top-level intelligence configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Recommendation engine thresholds
    pub recommendation: RecommendationThresholds,
    /// Threat severity thresholds
    pub threats: ThreatThresholds,
}

impl IntelligenceConfig {
    /// The process-wide configuration, installing defaults on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(Self::default)
    }

    /// Install a custom configuration before first use. Returns `false`
    /// (leaving the existing value in place) once the global has been read.
    pub fn install(config: Self) -> bool {
        INTELLIGENCE_CONFIG.set(config).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_constants() {
        let config = IntelligenceConfig::default();
        assert!((config.recommendation.low_ratio - 0.9).abs() < f64::EPSILON);
        assert!((config.recommendation.knee_force_high_ratio - 1.1).abs() < f64::EPSILON);
        assert!((config.recommendation.sway_high_ratio - 1.2).abs() < f64::EPSILON);
        assert_eq!(config.recommendation.maintenance_metric_count, 5);
        assert!((config.threats.high_deviation_pct - 30.0).abs() < f64::EPSILON);
        assert!((config.threats.medium_deviation_pct - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn global_is_stable_across_calls() {
        let first = IntelligenceConfig::global();
        let second = IntelligenceConfig::global();
        assert!(std::ptr::eq(first, second));
    }
}
