// ABOUTME: Training recommendation engine for personalized gait guidance
// ABOUTME: Fixed ratio-threshold rules over joined metrics, ranked by priority
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

//! Recommendation generation from metric deviations.
//!
//! Each rule compares one metric's actual against a fixed fraction of its
//! ideal; a positive maintenance recommendation fires when enough metrics
//! sit near their ideals. Rules never exclude each other - a strong set of
//! metrics can earn the maintenance entry alongside remaining issue entries.

use crate::config::intelligence::{IntelligenceConfig, RecommendationThresholds};
use crate::metrics::MetricRecord;
use kinova_core::models::GaitParameter;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Urgency of a recommendation, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    /// Address promptly
    High,
    /// Address in normal training
    Medium,
    /// Informational / positive reinforcement
    Low,
}

/// One actionable recommendation derived from the current metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Short imperative title
    pub title: String,
    /// Explanation with the numbers that triggered the rule
    pub description: String,
    /// Urgency ranking
    pub priority: RecommendationPriority,
    /// Suggested next step
    pub action: String,
    /// Expected improvement, formatted for display
    pub impact: String,
    /// What the impact figure measures
    pub impact_label: String,
}

/// Recommendation engine with configurable thresholds
pub struct RecommendationEngine {
    config: RecommendationThresholds,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Engine with the process-wide configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().recommendation.clone(),
        }
    }

    /// Engine with custom thresholds
    #[must_use]
    pub const fn with_config(config: RecommendationThresholds) -> Self {
        Self { config }
    }

    /// Generate recommendations for one evaluation cycle, ranked by
    /// priority (high first). Metrics with a zero ideal are skipped - their
    /// ratios are undefined.
    #[must_use]
    pub fn generate(&self, metrics: &[MetricRecord]) -> Vec<Recommendation> {
        let mut recs = Vec::new();
        let find = |parameter: GaitParameter| {
            metrics
                .iter()
                .find(|m| m.parameter == parameter && m.ideal != 0.0)
        };

        if let Some(equilibrium) = find(GaitParameter::Equilibrium) {
            if equilibrium.actual < equilibrium.ideal * self.config.low_ratio {
                let pct_of_ideal = equilibrium.actual / equilibrium.ideal * 100.0;
                recs.push(Recommendation {
                    title: "Improve Balance Score".to_owned(),
                    description: format!(
                        "Your equilibrium score is {pct_of_ideal:.0}% of ideal. \
                         Focus on core strengthening exercises."
                    ),
                    priority: RecommendationPriority::High,
                    action: "View Balance Exercises".to_owned(),
                    impact: format!(
                        "+{}%",
                        ((equilibrium.ideal - equilibrium.actual) * 100.0).round()
                    ),
                    impact_label: "Balance".to_owned(),
                });
            }
        }

        if let Some(cadence) = find(GaitParameter::Cadence) {
            if cadence.actual < cadence.ideal * self.config.low_ratio {
                recs.push(Recommendation {
                    title: "Increase Cadence".to_owned(),
                    description: format!(
                        "Target {} steps/min for optimal gait efficiency. Current: {:.0} steps/min.",
                        cadence.ideal, cadence.actual
                    ),
                    priority: RecommendationPriority::Medium,
                    action: "Start Training".to_owned(),
                    impact: format!("+{}", (cadence.ideal - cadence.actual).round()),
                    impact_label: "Steps/min".to_owned(),
                });
            }
        }

        if let Some(knee) = find(GaitParameter::KneeForce) {
            if knee.actual > knee.ideal * self.config.knee_force_high_ratio {
                let pct_above = (knee.actual / knee.ideal - 1.0) * 100.0;
                recs.push(Recommendation {
                    title: "Reduce Knee Loading".to_owned(),
                    description: format!(
                        "Knee force is {pct_above:.0}% above ideal. Consider gait modifications."
                    ),
                    priority: RecommendationPriority::High,
                    action: "View Exercise Plan".to_owned(),
                    impact: format!("-{}N", (knee.actual - knee.ideal).round()),
                    impact_label: "Force".to_owned(),
                });
            }
        }

        if let Some(speed) = find(GaitParameter::WalkingSpeed) {
            if speed.actual < speed.ideal * self.config.low_ratio {
                recs.push(Recommendation {
                    title: "Improve Walking Speed".to_owned(),
                    description: format!(
                        "Increase stride length to boost speed from {:.2} to {:.2} m/s.",
                        speed.actual, speed.ideal
                    ),
                    priority: RecommendationPriority::Medium,
                    action: "View Technique Tips".to_owned(),
                    impact: format!(
                        "+{:.0}%",
                        (speed.ideal - speed.actual) * 100.0 / speed.ideal
                    ),
                    impact_label: "Speed".to_owned(),
                });
            }
        }

        if let Some(sway) = find(GaitParameter::PosturalSway) {
            if sway.actual > sway.ideal * self.config.sway_high_ratio {
                recs.push(Recommendation {
                    title: "Reduce Postural Sway".to_owned(),
                    description: format!(
                        "Postural sway is elevated at {:.1} deg. Work on stability exercises.",
                        sway.actual
                    ),
                    priority: RecommendationPriority::High,
                    action: "View Stability Program".to_owned(),
                    impact: format!("-{:.1} deg", sway.actual - sway.ideal),
                    impact_label: "Sway".to_owned(),
                });
            }
        }

        let near_ideal = metrics
            .iter()
            .filter(|m| {
                m.ratio().is_some_and(|ratio| {
                    ratio >= 1.0 - self.config.maintenance_band
                        && ratio <= 1.0 + self.config.maintenance_band
                })
            })
            .count();

        if near_ideal >= self.config.maintenance_metric_count {
            recs.push(Recommendation {
                title: "Maintain Current Performance".to_owned(),
                description: format!(
                    "{near_ideal} of {} parameters are in optimal range. Keep up the great work!",
                    metrics.len()
                ),
                priority: RecommendationPriority::Low,
                action: "Track Progress".to_owned(),
                impact: format!("{near_ideal}/{}", metrics.len()),
                impact_label: "Optimal".to_owned(),
            });
        }

        recs.sort_by_key(|r| r.priority);
        debug!(count = recs.len(), "generated recommendations");
        recs
    }
}

/// Generate ranked recommendations with the process-wide configuration.
#[must_use]
pub fn recommendations(metrics: &[MetricRecord]) -> Vec<Recommendation> {
    RecommendationEngine::new().generate(metrics)
}
