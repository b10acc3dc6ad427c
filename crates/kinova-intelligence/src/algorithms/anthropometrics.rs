// ABOUTME: Anthropometric derivations from the user profile
// ABOUTME: BMI and leg-length estimation used by the ideal-gait model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

use crate::physiological_constants::anthropometry::LEG_LENGTH_HEIGHT_RATIO;
use kinova_core::constants::units::CM_PER_M;

/// Body mass index (kg/m²), unrounded.
///
/// Formula: `weight_kg / (height_m)²`
///
/// Input is assumed pre-validated; this is a pure numeric function and
/// produces nonsensical output for out-of-range anthropometrics.
#[must_use]
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / CM_PER_M;
    weight_kg / (height_m * height_m)
}

/// Estimated leg length (cm), unrounded.
///
/// Formula: `height_cm x 0.53` (Winter's anthropometric segment tables:
/// leg length is approximately 53% of standing height).
#[must_use]
pub fn leg_length_cm(height_cm: f64) -> f64 {
    height_cm * LEG_LENGTH_HEIGHT_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::round_to;

    #[test]
    fn bmi_reference_subject() {
        // 170 cm / 70 kg -> 24.2 kg/m² at display precision
        assert!((round_to(body_mass_index(170.0, 70.0), 1) - 24.2).abs() < 1e-12);
    }

    #[test]
    fn leg_length_reference_subject() {
        assert!((round_to(leg_length_cm(170.0), 1) - 90.1).abs() < 1e-12);
    }
}
