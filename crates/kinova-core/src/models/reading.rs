// ABOUTME: Sensor-derived gait reading model matching the upstream wire contract
// ABOUTME: All metric fields optional; validity checks are explicit, never truthiness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

use super::parameter::GaitParameter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sensor-derived gait reading as produced upstream.
///
/// Every metric field is optional - producers omit whatever a given session
/// did not measure. Consumers must check presence explicitly; a missing or
/// non-finite value is normalized downstream (to `0` for display, to
/// "No Data" for categorization), never propagated as `NaN`.
///
/// Readings arrive as an ordered collection; this type does not impose an
/// ordering of its own.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaitReading {
    /// Step rate (steps per minute)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    /// Balance/stability score from sensor fusion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equilibrium_score: Option<f64>,
    /// Step frequency (Hz)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Left/right gait cycle symmetry (percent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gait_symmetry: Option<f64>,
    /// Peak knee joint force (Newtons)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knee_force: Option<f64>,
    /// Angular body oscillation during stance (degrees)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postural_sway: Option<f64>,
    /// Plantar pressure, left foot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_left: Option<f64>,
    /// Plantar pressure, right foot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_right: Option<f64>,
    /// Lateral step distance (meters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_width: Option<f64>,
    /// Step count for the session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u64>,
    /// Distance covered per stride (meters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stride_length: Option<f64>,
    /// Capture time (epoch milliseconds on the wire)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_milliseconds_option"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    /// Average walking velocity (m/s)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walking_speed: Option<f64>,
}

impl GaitReading {
    /// Raw value for a tracked parameter, if the reading carries one.
    ///
    /// Non-finite values (NaN, infinities) are reported as absent so the
    /// explicit-presence contract holds even for malformed producer output.
    #[must_use]
    pub fn value(&self, parameter: GaitParameter) -> Option<f64> {
        let raw = match parameter {
            GaitParameter::Equilibrium => self.equilibrium_score,
            GaitParameter::PosturalSway => self.postural_sway,
            GaitParameter::Cadence => self.cadence,
            GaitParameter::Frequency => self.frequency,
            GaitParameter::StepWidth => self.step_width,
            GaitParameter::KneeForce => self.knee_force,
            GaitParameter::WalkingSpeed => self.walking_speed,
            GaitParameter::StrideLength => self.stride_length,
            GaitParameter::GaitSymmetry => self.gait_symmetry,
        };
        raw.filter(|v| v.is_finite())
    }

    /// Whether this reading carries all three fields the local composite
    /// score requires (equilibrium score, cadence, postural sway).
    #[must_use]
    pub fn has_composite_fields(&self) -> bool {
        self.value(GaitParameter::Equilibrium).is_some()
            && self.value(GaitParameter::Cadence).is_some()
            && self.value(GaitParameter::PosturalSway).is_some()
    }
}
