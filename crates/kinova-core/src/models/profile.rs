// ABOUTME: User anthropometric profile model with acceptance validation
// ABOUTME: Height/weight pair consumed by the ideal-parameter estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Anthropometric profile used to personalize ideal gait parameters.
///
/// Profiles are overwritten wholesale on every edit - callers never mutate a
/// single field in place. Out-of-range values are rejected at the repository
/// boundary via [`UserProfile::validate`]; the downstream estimator assumes
/// pre-validated input and performs no checks of its own.
///
/// # Examples
///
/// ```rust
/// use kinova_core::models::UserProfile;
///
/// let profile = UserProfile::default();
/// assert_eq!(profile.height, 170.0);
/// assert_eq!(profile.weight, 70.0);
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body height (centimeters)
    pub height: f64,
    /// Body weight (kilograms)
    pub weight: f64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            height: 170.0,
            weight: 70.0,
        }
    }
}

impl UserProfile {
    /// Check this profile against the platform acceptance bounds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ValueOutOfRange`] naming the first offending
    /// field when height falls outside [100, 250] cm or weight outside
    /// [30, 300] kg. Callers rejecting an update must retain the previously
    /// accepted profile.
    pub fn validate(&self) -> AppResult<()> {
        if !self.height.is_finite()
            || self.height < limits::MIN_HEIGHT_CM
            || self.height > limits::MAX_HEIGHT_CM
        {
            return Err(AppError::value_out_of_range(
                "height",
                self.height,
                limits::MIN_HEIGHT_CM,
                limits::MAX_HEIGHT_CM,
            ));
        }
        if !self.weight.is_finite()
            || self.weight < limits::MIN_WEIGHT_KG
            || self.weight > limits::MAX_WEIGHT_KG
        {
            return Err(AppError::value_out_of_range(
                "weight",
                self.weight,
                limits::MIN_WEIGHT_KG,
                limits::MAX_WEIGHT_KG,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_valid() {
        assert!(UserProfile::default().validate().is_ok());
    }

    #[test]
    fn bounds_are_inclusive() {
        let low = UserProfile {
            height: 100.0,
            weight: 30.0,
        };
        let high = UserProfile {
            height: 250.0,
            weight: 300.0,
        };
        assert!(low.validate().is_ok());
        assert!(high.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_height() {
        let profile = UserProfile {
            height: 99.9,
            weight: 70.0,
        };
        assert!(matches!(
            profile.validate(),
            Err(AppError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_weight() {
        let profile = UserProfile {
            height: 170.0,
            weight: f64::NAN,
        };
        assert!(profile.validate().is_err());
    }
}
