// ABOUTME: Clinical band classification for observed gait parameter values
// ABOUTME: One shared data-driven threshold table, evaluated top-down, first match wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

//! Clinical categorization of observed gait values.
//!
//! Each tracked parameter has a fixed, ordered band table; bands are
//! evaluated top-down and the first match wins. The ordering matters:
//! cadence deliberately reuses 120-135 steps/min as Fair even though it
//! overlaps the Needs-Attention boundary region, and reordering the rows
//! would change that outcome.
//!
//! Missing or non-finite input never errors - it classifies as
//! Needs Attention with a "No Data" label so the dashboard can always
//! render something.

use kinova_core::models::GaitParameter;
use serde::{Deserialize, Serialize};

/// Ordinal clinical band for an observed gait value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GaitCategory {
    /// Within the optimal clinical range
    Excellent,
    /// Healthy, slightly off optimal
    Good,
    /// Acceptable but worth monitoring
    Fair,
    /// Outside acceptable ranges, or no data
    NeedsAttention,
}

impl GaitCategory {
    /// Display label for this band
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent (Optimal)",
            Self::Good => "Good (Healthy)",
            Self::Fair => "Fair (Acceptable)",
            Self::NeedsAttention => "Needs Attention (Risk)",
        }
    }

    /// Display color for this band
    #[must_use]
    pub const fn color(self) -> CategoryColor {
        match self {
            Self::Excellent => CategoryColor::Success,
            Self::Good => CategoryColor::Primary,
            Self::Fair => CategoryColor::Warning,
            Self::NeedsAttention => CategoryColor::Purple,
        }
    }
}

/// Theme color associated with a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    /// Optimal range
    Success,
    /// Healthy range
    Primary,
    /// Acceptable range
    Warning,
    /// Risk range / no data
    Purple,
}

/// Result of classifying one observed value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizationResult {
    /// Clinical band
    pub category: GaitCategory,
    /// Display label ("No Data" when the value was missing or invalid)
    pub label: String,
    /// Display color
    pub color: CategoryColor,
}

impl CategorizationResult {
    fn banded(category: GaitCategory) -> Self {
        Self {
            category,
            label: category.label().to_owned(),
            color: category.color(),
        }
    }

    fn no_data() -> Self {
        Self {
            category: GaitCategory::NeedsAttention,
            label: "No Data".to_owned(),
            color: CategoryColor::Purple,
        }
    }
}

/// One row of a parameter's band table: an interval with explicit bound
/// inclusivity and the category it maps to.
#[derive(Debug, Clone, Copy)]
struct Band {
    min: f64,
    max: f64,
    min_exclusive: bool,
    max_exclusive: bool,
    category: GaitCategory,
}

impl Band {
    const fn closed(min: f64, max: f64, category: GaitCategory) -> Self {
        Self {
            min,
            max,
            min_exclusive: false,
            max_exclusive: false,
            category,
        }
    }

    /// `[min, max)`
    const fn half_open(min: f64, max: f64, category: GaitCategory) -> Self {
        Self {
            min,
            max,
            min_exclusive: false,
            max_exclusive: true,
            category,
        }
    }

    /// `(min, max]`
    const fn open_closed(min: f64, max: f64, category: GaitCategory) -> Self {
        Self {
            min,
            max,
            min_exclusive: true,
            max_exclusive: false,
            category,
        }
    }

    /// `(min, +inf)`
    const fn above(min: f64, category: GaitCategory) -> Self {
        Self {
            min,
            max: f64::INFINITY,
            min_exclusive: true,
            max_exclusive: false,
            category,
        }
    }

    fn contains(&self, value: f64) -> bool {
        let lower_ok = if self.min_exclusive {
            value > self.min
        } else {
            value >= self.min
        };
        let upper_ok = if self.max_exclusive {
            value < self.max
        } else {
            value <= self.max
        };
        lower_ok && upper_ok
    }
}

use GaitCategory::{Excellent, Fair, Good};

/// Walking speed (m/s)
const WALKING_SPEED_BANDS: [Band; 3] = [
    Band::above(1.35, Excellent),
    Band::closed(1.00, 1.35, Good),
    Band::half_open(0.60, 1.00, Fair),
];

/// Cadence (steps/min). 120-135 is not explicitly defined clinically and is
/// treated as Fair, sitting between Excellent and Needs Attention.
const CADENCE_BANDS: [Band; 4] = [
    Band::closed(110.0, 120.0, Excellent),
    Band::half_open(100.0, 110.0, Good),
    Band::half_open(80.0, 100.0, Fair),
    Band::open_closed(120.0, 135.0, Fair),
];

/// Stride length (m)
const STRIDE_LENGTH_BANDS: [Band; 3] = [
    Band::closed(1.35, 1.55, Excellent),
    Band::half_open(1.10, 1.35, Good),
    Band::half_open(0.90, 1.10, Fair),
];

/// Postural sway (degrees)
const POSTURAL_SWAY_BANDS: [Band; 3] = [
    Band::closed(0.0, 2.5, Excellent),
    Band::open_closed(2.5, 5.0, Good),
    Band::open_closed(5.0, 8.0, Fair),
];

/// Equilibrium score (dimensionless)
const EQUILIBRIUM_BANDS: [Band; 3] = [
    Band::closed(0.30, 1.00, Excellent),
    Band::half_open(0.15, 0.30, Good),
    Band::half_open(0.10, 0.15, Fair),
];

/// Step width (m)
const STEP_WIDTH_BANDS: [Band; 3] = [
    Band::closed(0.08, 0.12, Excellent),
    Band::closed(0.05, 0.15, Good),
    Band::closed(0.03, 0.20, Fair),
];

/// Knee force in body-weight multiples - callers convert Newtons via
/// `force_n / (weight_kg x 9.81)` before classification.
const KNEE_FORCE_BANDS: [Band; 3] = [
    Band::closed(1.1, 1.3, Excellent),
    Band::closed(1.0, 1.4, Good),
    Band::closed(0.8, 1.5, Fair),
];

/// Gait symmetry (percent)
const GAIT_SYMMETRY_BANDS: [Band; 3] = [
    Band::closed(90.0, 100.0, Excellent),
    Band::half_open(80.0, 90.0, Good),
    Band::half_open(70.0, 80.0, Fair),
];

fn bands_for(parameter: GaitParameter) -> &'static [Band] {
    match parameter {
        GaitParameter::WalkingSpeed => &WALKING_SPEED_BANDS,
        GaitParameter::Cadence | GaitParameter::Frequency => &CADENCE_BANDS,
        GaitParameter::StrideLength => &STRIDE_LENGTH_BANDS,
        GaitParameter::PosturalSway => &POSTURAL_SWAY_BANDS,
        GaitParameter::Equilibrium => &EQUILIBRIUM_BANDS,
        GaitParameter::StepWidth => &STEP_WIDTH_BANDS,
        GaitParameter::KneeForce => &KNEE_FORCE_BANDS,
        GaitParameter::GaitSymmetry => &GAIT_SYMMETRY_BANDS,
    }
}

/// Classify an observed value against its parameter's clinical bands.
///
/// Total over all inputs: `None`, `NaN`, and infinities classify as
/// Needs Attention / "No Data"; every finite value lands in exactly one of
/// the four categories. Knee force must already be expressed in body-weight
/// multiples. Frequency has no table of its own and is classified through
/// its cadence equivalent (`Hz x 60`).
#[must_use]
pub fn categorize(parameter: GaitParameter, value: Option<f64>) -> CategorizationResult {
    let Some(observed) = value.filter(|v| v.is_finite()) else {
        return CategorizationResult::no_data();
    };

    let observed = if parameter == GaitParameter::Frequency {
        observed * 60.0
    } else {
        observed
    };

    bands_for(parameter)
        .iter()
        .find(|band| band.contains(observed))
        .map_or_else(
            || CategorizationResult::banded(GaitCategory::NeedsAttention),
            |band| CategorizationResult::banded(band.category),
        )
}
