// ABOUTME: Tracked gait parameter vocabulary shared across the pipeline
// ABOUTME: One variant per sensor-derived metric the engine evaluates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// A gait parameter tracked by the analysis pipeline.
///
/// The variant set matches the de facto contract with upstream sensor
/// producers; `GaitSymmetry` only appears in output when the reading
/// carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaitParameter {
    /// Balance/stability score from sensor fusion (dimensionless)
    Equilibrium,
    /// Angular body oscillation during stance (degrees)
    PosturalSway,
    /// Step rate (steps per minute)
    Cadence,
    /// Step frequency (Hz)
    Frequency,
    /// Lateral distance between steps (meters)
    StepWidth,
    /// Peak knee joint force (Newtons as measured; body-weight multiples
    /// for categorization)
    KneeForce,
    /// Average walking velocity (m/s)
    WalkingSpeed,
    /// Distance covered per stride (meters)
    StrideLength,
    /// Left/right symmetry of the gait cycle (percent)
    GaitSymmetry,
}

impl GaitParameter {
    /// Human-readable display name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Equilibrium => "Equilibrium",
            Self::PosturalSway => "Postural Sway",
            Self::Cadence => "Cadence",
            Self::Frequency => "Frequency",
            Self::StepWidth => "Step Width",
            Self::KneeForce => "Knee Force",
            Self::WalkingSpeed => "Walking Speed",
            Self::StrideLength => "Stride Length",
            Self::GaitSymmetry => "Gait Symmetry",
        }
    }
}

impl fmt::Display for GaitParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
