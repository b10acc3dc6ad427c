// ABOUTME: Metric normalization and joining - pairs observed readings with ideal values
// ABOUTME: Produces the ordered, fixed-precision metric records the rest of the pipeline consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

//! Joins the latest gait reading with the personalized ideal parameters into
//! a uniform, ordered sequence of metric records.
//!
//! Records are ephemeral - rebuilt from scratch on every evaluation cycle.
//! Missing or invalid observed values display as `0` but categorize as
//! "No Data"; nothing here ever produces a `NaN`.

use crate::algorithms::IdealParameters;
use crate::categorization::{categorize, CategorizationResult};
use crate::comparison::{comparison_status, deviation_percent, ComparisonStatus};
use crate::numeric::round_to;
use kinova_core::constants::units::STANDARD_GRAVITY;
use kinova_core::models::{GaitParameter, GaitReading, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Display metadata and precision for one tracked parameter.
struct MetricSpec {
    parameter: GaitParameter,
    unit: &'static str,
    /// Decimal places for the displayed actual value
    precision: u32,
    group: &'static str,
    description: &'static str,
}

/// The eight parameters every evaluation reports, in display order.
/// Gait symmetry is appended separately when the reading carries it.
const TRACKED: [MetricSpec; 8] = [
    MetricSpec {
        parameter: GaitParameter::Equilibrium,
        unit: "score",
        precision: 4,
        group: "Balance",
        description: "Balance & Stability Score",
    },
    MetricSpec {
        parameter: GaitParameter::PosturalSway,
        unit: "deg",
        precision: 2,
        group: "Balance",
        description: "Body Oscillation",
    },
    MetricSpec {
        parameter: GaitParameter::Cadence,
        unit: "steps/min",
        precision: 1,
        group: "Gait Parameters",
        description: "Step Rate",
    },
    MetricSpec {
        parameter: GaitParameter::Frequency,
        unit: "Hz",
        precision: 3,
        group: "Gait Parameters",
        description: "Step Frequency",
    },
    MetricSpec {
        parameter: GaitParameter::StepWidth,
        unit: "m",
        precision: 4,
        group: "Gait Parameters",
        description: "Lateral Step Distance",
    },
    MetricSpec {
        parameter: GaitParameter::KneeForce,
        unit: "N",
        precision: 1,
        group: "Biomechanics",
        description: "Peak Knee Joint Force",
    },
    MetricSpec {
        parameter: GaitParameter::WalkingSpeed,
        unit: "m/s",
        precision: 3,
        group: "Gait Parameters",
        description: "Average Walking Velocity",
    },
    MetricSpec {
        parameter: GaitParameter::StrideLength,
        unit: "m",
        precision: 3,
        group: "Gait Parameters",
        description: "Distance Per Stride",
    },
];

const SYMMETRY: MetricSpec = MetricSpec {
    parameter: GaitParameter::GaitSymmetry,
    unit: "%",
    precision: 2,
    group: "Gait Parameters",
    description: "Left/Right Symmetry",
};

/// Reference value for gait symmetry - perfect left/right balance. Symmetry
/// has no anthropometric formula, so the estimator does not derive it.
const SYMMETRY_IDEAL_PCT: f64 = 100.0;

/// One observed parameter joined with its personalized ideal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    /// Which parameter this record describes
    pub parameter: GaitParameter,
    /// Observed value at display precision (`0` when missing)
    pub actual: f64,
    /// Personalized ideal value
    pub ideal: f64,
    /// Display unit of the actual/ideal pair
    pub unit: String,
    /// Display grouping (Balance / Gait Parameters / Biomechanics)
    pub category: String,
    /// Short description of the parameter
    pub description: String,
    /// Which profile input the ideal derives from
    pub related_to: String,
    /// Clinical band for the observed value
    pub categorization: CategorizationResult,
}

impl MetricRecord {
    /// Comparison status of the observed value against its ideal.
    #[must_use]
    pub fn status(&self) -> ComparisonStatus {
        comparison_status(self.actual, self.ideal, self.parameter)
    }

    /// Signed deviation from ideal (percent, one decimal).
    #[must_use]
    pub fn deviation(&self) -> f64 {
        deviation_percent(self.actual, self.ideal)
    }

    /// Actual as a fraction of ideal; `None` when the ideal is zero.
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        (self.ideal != 0.0).then(|| self.actual / self.ideal)
    }
}

fn ideal_value(parameter: GaitParameter, ideal: &IdealParameters) -> f64 {
    match parameter {
        GaitParameter::Equilibrium => ideal.equilibrium_score,
        GaitParameter::PosturalSway => ideal.postural_sway,
        GaitParameter::Cadence => ideal.cadence,
        GaitParameter::Frequency => ideal.frequency,
        GaitParameter::StepWidth => ideal.step_width,
        GaitParameter::KneeForce => ideal.knee_force,
        GaitParameter::WalkingSpeed => ideal.walking_speed,
        GaitParameter::StrideLength => ideal.stride_length,
        GaitParameter::GaitSymmetry => SYMMETRY_IDEAL_PCT,
    }
}

fn related_annotation(
    parameter: GaitParameter,
    ideal: &IdealParameters,
    profile: &UserProfile,
) -> String {
    match parameter {
        GaitParameter::Equilibrium => format!("BMI: {}", ideal.bmi),
        GaitParameter::PosturalSway => "Ideal band midpoint".to_owned(),
        GaitParameter::Frequency => "Gait Rhythm".to_owned(),
        GaitParameter::GaitSymmetry => "Left/right balance".to_owned(),
        GaitParameter::KneeForce => format!("Weight: {}kg", profile.weight),
        GaitParameter::WalkingSpeed => format!("Leg: {}cm", ideal.leg_length),
        GaitParameter::Cadence | GaitParameter::StepWidth | GaitParameter::StrideLength => {
            format!("Height: {}cm", profile.height)
        }
    }
}

fn build_record(
    spec: &MetricSpec,
    reading: &GaitReading,
    ideal: &IdealParameters,
    profile: &UserProfile,
) -> MetricRecord {
    let observed = reading.value(spec.parameter);

    // Knee force is measured in Newtons but the clinical bands are in
    // body-weight multiples; only the categorization input converts, the
    // displayed value stays in Newtons.
    let classification_input = if spec.parameter == GaitParameter::KneeForce {
        observed.map(|newtons| newtons / (profile.weight * STANDARD_GRAVITY))
    } else {
        observed
    };

    MetricRecord {
        parameter: spec.parameter,
        actual: round_to(observed.unwrap_or(0.0), spec.precision),
        ideal: ideal_value(spec.parameter, ideal),
        unit: spec.unit.to_owned(),
        category: spec.group.to_owned(),
        description: spec.description.to_owned(),
        related_to: related_annotation(spec.parameter, ideal, profile),
        categorization: categorize(spec.parameter, classification_input),
    }
}

/// Join the latest reading with the ideal parameters into the ordered metric
/// sequence. `None` (no reading yet) yields an empty sequence - callers treat
/// that as "no data", not an error.
#[must_use]
pub fn build_metric_records(
    reading: Option<&GaitReading>,
    ideal: &IdealParameters,
    profile: &UserProfile,
) -> Vec<MetricRecord> {
    let Some(reading) = reading else {
        debug!("no gait reading available; producing empty metric set");
        return Vec::new();
    };

    let mut records: Vec<MetricRecord> = TRACKED
        .iter()
        .map(|spec| build_record(spec, reading, ideal, profile))
        .collect();

    if reading.value(GaitParameter::GaitSymmetry).is_some() {
        records.push(build_record(&SYMMETRY, reading, ideal, profile));
    }

    records
}
