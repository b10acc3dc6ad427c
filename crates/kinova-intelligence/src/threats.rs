// ABOUTME: Per-metric risk advisories for parameters outside their optimal band
// ABOUTME: Canned parameter+direction advisories graded by deviation magnitude
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

//! Threat generation.
//!
//! Every metric whose comparison status is `Above` or `Below` yields one
//! advisory specific to the parameter and the direction of the deviation.
//! `Unknown` metrics yield nothing - without a direction there is no
//! advisory to pick. Output is sorted by severity (high first), then by
//! parameter name so the ordering is stable across cycles.

use crate::comparison::ComparisonStatus;
use crate::config::intelligence::{IntelligenceConfig, ThreatThresholds};
use crate::metrics::MetricRecord;
use kinova_core::models::GaitParameter;
use serde::{Deserialize, Serialize};

/// Severity of a threat advisory, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatSeverity {
    /// Deviation well outside the acceptable band
    High,
    /// Deviation meaningfully outside the optimal band
    Medium,
    /// Minor deviation
    Low,
}

/// One risk advisory for a non-optimal metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Threat {
    /// The deviating parameter
    pub parameter: GaitParameter,
    /// Direction of the deviation (`Above` or `Below`)
    pub status: ComparisonStatus,
    /// Graded severity
    pub severity: ThreatSeverity,
    /// Canned clinical advisory for this parameter and direction
    pub message: String,
    /// Signed deviation from ideal (percent, one decimal)
    pub deviation_pct: f64,
}

/// Advisory copy per parameter and deviation direction.
fn advisory(parameter: GaitParameter, status: ComparisonStatus) -> &'static str {
    let above = status == ComparisonStatus::Above;
    match parameter {
        GaitParameter::Equilibrium => {
            if above {
                "Equilibrium reads above the expected band; verify sensor calibration."
            } else {
                "Reduced balance score raises fall risk; prioritize equilibrium training."
            }
        }
        GaitParameter::PosturalSway => {
            if above {
                "Elevated body oscillation strains stabilizers and raises fall risk."
            } else {
                "Negative sway readings usually indicate a sensor mounting issue."
            }
        }
        GaitParameter::Cadence => {
            if above {
                "High step rate with short strides can signal compensation for instability."
            } else {
                "Low step rate reduces gait efficiency and often reflects fatigue or caution."
            }
        }
        GaitParameter::Frequency => {
            if above {
                "Step frequency above the personalized target disrupts gait rhythm."
            } else {
                "Step frequency below the personalized target slows the gait cycle."
            }
        }
        GaitParameter::StepWidth => {
            if above {
                "A widened base of support is a common compensation for poor balance."
            } else {
                "A narrow base of support leaves little margin for lateral recovery."
            }
        }
        GaitParameter::KneeForce => {
            if above {
                "Knee loading above the target accelerates joint wear over time."
            } else {
                "Low knee loading may reflect guarding or reduced push-off strength."
            }
        }
        GaitParameter::WalkingSpeed => {
            if above {
                "Speed well above the personalized target can compromise control."
            } else {
                "Walking speed below target is a strong predictor of mobility decline."
            }
        }
        GaitParameter::StrideLength => {
            if above {
                "Overstriding increases braking forces at heel strike."
            } else {
                "Short strides reduce propulsion efficiency."
            }
        }
        GaitParameter::GaitSymmetry => {
            if above {
                "Symmetry above the measurable range suggests a data quality issue."
            } else {
                "Left/right asymmetry overloads the dominant limb."
            }
        }
    }
}

fn grade(deviation_pct: f64, config: &ThreatThresholds) -> ThreatSeverity {
    let magnitude = deviation_pct.abs();
    if magnitude > config.high_deviation_pct {
        ThreatSeverity::High
    } else if magnitude > config.medium_deviation_pct {
        ThreatSeverity::Medium
    } else {
        ThreatSeverity::Low
    }
}

/// Generate threat advisories with custom severity thresholds.
#[must_use]
pub fn threats_with_config(metrics: &[MetricRecord], config: &ThreatThresholds) -> Vec<Threat> {
    let mut result: Vec<Threat> = metrics
        .iter()
        .filter_map(|metric| {
            let status = metric.status();
            if !matches!(status, ComparisonStatus::Above | ComparisonStatus::Below) {
                return None;
            }
            let deviation_pct = metric.deviation();
            Some(Threat {
                parameter: metric.parameter,
                status,
                severity: grade(deviation_pct, config),
                message: advisory(metric.parameter, status).to_owned(),
                deviation_pct,
            })
        })
        .collect();

    result.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| a.parameter.display_name().cmp(b.parameter.display_name()))
    });
    result
}

/// Generate threat advisories with the process-wide configuration.
#[must_use]
pub fn threats(metrics: &[MetricRecord]) -> Vec<Threat> {
    threats_with_config(metrics, &IntelligenceConfig::global().threats)
}
