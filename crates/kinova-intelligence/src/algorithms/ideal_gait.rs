// ABOUTME: Personalized ideal gait parameter estimation from anthropometrics
// ABOUTME: Closed-form biomechanical formulas with fixed-precision decimal output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

use super::anthropometrics::{body_mass_index, leg_length_cm};
use crate::numeric::round_to;
use crate::physiological_constants::{
    anthropometry::{BMI_ELEVATED_UPPER, BMI_LEAN, BMI_OBESE, BMI_UNDERWEIGHT},
    balance_targets::{
        EQUILIBRIUM_COMPROMISED, EQUILIBRIUM_OPTIMAL, EQUILIBRIUM_SUBOPTIMAL,
        IDEAL_POSTURAL_SWAY_DEG,
    },
    cadence_model::{
        BASE_IDEAL_CADENCE, HEIGHT_SLOPE as CADENCE_HEIGHT_SLOPE, MAX_IDEAL_CADENCE,
        MIN_IDEAL_CADENCE, REFERENCE_HEIGHT_CM,
    },
    joint_loading::KNEE_FORCE_BODY_WEIGHT_FACTOR,
    step_width_model::{
        BASE_IDEAL_STEP_WIDTH_M, HEIGHT_SLOPE as STEP_WIDTH_HEIGHT_SLOPE, MAX_IDEAL_STEP_WIDTH_M,
        MIN_IDEAL_STEP_WIDTH_M,
    },
    stride_model::{
        SPEED_LEG_LENGTH_FACTOR, STRIDE_CADENCE_SPEED_DIVISOR, STRIDE_LEG_LENGTH_FACTOR,
    },
};
use kinova_core::constants::units::{CM_PER_M, STANDARD_GRAVITY};
use kinova_core::models::UserProfile;
use serde::{Deserialize, Serialize};

/// Personalized ideal gait parameters derived from a user profile.
///
/// A pure function of height and weight - recomputed whenever the profile
/// changes, never independently persisted. All values are fixed-precision
/// decimals so repeated evaluations are bit-identical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealParameters {
    /// Ideal step rate (steps/min)
    pub cadence: f64,
    /// Ideal walking speed (m/s, 2 decimals)
    pub walking_speed: f64,
    /// Ideal stride length (m, 3 decimals)
    pub stride_length: f64,
    /// Ideal step width (m, 4 decimals)
    pub step_width: f64,
    /// Ideal peak knee force (N, whole Newtons)
    pub knee_force: f64,
    /// Ideal step frequency (Hz, 3 decimals)
    pub frequency: f64,
    /// Ideal postural sway (degrees)
    pub postural_sway: f64,
    /// Ideal equilibrium score (one of 0.85 / 0.90 / 0.95)
    pub equilibrium_score: f64,
    /// Body mass index (kg/m², 1 decimal)
    pub bmi: f64,
    /// Estimated leg length (cm, 1 decimal)
    pub leg_length: f64,
}

/// Compute the full set of personalized ideal gait parameters.
///
/// Expects a pre-validated profile (height ∈ [100, 250] cm, weight ∈
/// [30, 300] kg); there is no validation layer here and out-of-range input
/// yields garbage-in/garbage-out.
///
/// # Examples
///
/// ```rust
/// use kinova_core::models::UserProfile;
/// use kinova_intelligence::algorithms::compute_ideal_parameters;
///
/// let ideal = compute_ideal_parameters(&UserProfile::default());
/// assert_eq!(ideal.cadence, 115.0);
/// assert_eq!(ideal.equilibrium_score, 0.95);
/// ```
#[must_use]
pub fn compute_ideal_parameters(profile: &UserProfile) -> IdealParameters {
    let bmi = body_mass_index(profile.height, profile.weight);
    let leg_cm = leg_length_cm(profile.height);
    let leg_m = leg_cm / CM_PER_M;

    let height_offset = profile.height - REFERENCE_HEIGHT_CM;

    // Taller walkers favor longer, slower strides; clamp keeps the target
    // inside the clinically plausible band.
    let cadence = (BASE_IDEAL_CADENCE - height_offset * CADENCE_HEIGHT_SLOPE)
        .round()
        .clamp(MIN_IDEAL_CADENCE, MAX_IDEAL_CADENCE);

    let stride_length = round_to(leg_m * STRIDE_LEG_LENGTH_FACTOR, 3);

    // Two independent speed estimates, averaged: one from the stride/cadence
    // relationship, one directly from leg length.
    let speed_from_stride_cadence = stride_length * cadence / STRIDE_CADENCE_SPEED_DIVISOR;
    let speed_from_leg_length = leg_m * SPEED_LEG_LENGTH_FACTOR;
    let walking_speed = round_to((speed_from_stride_cadence + speed_from_leg_length) / 2.0, 2);

    let step_width = round_to(
        (BASE_IDEAL_STEP_WIDTH_M + height_offset * STEP_WIDTH_HEIGHT_SLOPE)
            .clamp(MIN_IDEAL_STEP_WIDTH_M, MAX_IDEAL_STEP_WIDTH_M),
        4,
    );

    let knee_force = (profile.weight * STANDARD_GRAVITY * KNEE_FORCE_BODY_WEIGHT_FACTOR).round();

    let frequency = round_to(cadence / 60.0, 3);

    let equilibrium_score = if bmi < BMI_UNDERWEIGHT || bmi > BMI_OBESE {
        EQUILIBRIUM_COMPROMISED
    } else if bmi < BMI_LEAN || bmi > BMI_ELEVATED_UPPER {
        EQUILIBRIUM_SUBOPTIMAL
    } else {
        EQUILIBRIUM_OPTIMAL
    };

    IdealParameters {
        cadence,
        walking_speed,
        stride_length,
        step_width,
        knee_force,
        frequency,
        postural_sway: IDEAL_POSTURAL_SWAY_DEG,
        equilibrium_score,
        bmi: round_to(bmi, 1),
        leg_length: round_to(leg_cm, 1),
    }
}
