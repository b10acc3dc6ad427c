// ABOUTME: Closed-form biomechanical estimation algorithms
// ABOUTME: Anthropometric derivations and the personalized ideal-gait estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

//! Closed-form biomechanical estimators.
//!
//! Each algorithm is a documented pure function over pre-validated input;
//! none of them hold state or perform I/O.

/// BMI and body segment length derivations
pub mod anthropometrics;
/// Personalized ideal gait parameter estimation
pub mod ideal_gait;

pub use anthropometrics::{body_mass_index, leg_length_cm};
pub use ideal_gait::{compute_ideal_parameters, IdealParameters};
