//! Biomechanical constants based on gait and posture research
//!
//! This module contains the empirically fixed constants used throughout the
//! gait analysis pipeline. Values are based on published biomechanics
//! literature and clinical gait analysis guidelines; changing any of them
//! changes the numeric output contract, so they are deliberately constants
//! rather than configuration.

/// Anthropometric proportion and body-composition thresholds
///
/// References:
/// - Winter, D.A. (2009). Biomechanics and Motor Control of Human Movement, 4th Edition
/// - WHO (2000). Obesity: Preventing and Managing the Global Epidemic
pub mod anthropometry {
    /// Leg length as a fraction of standing height
    /// Reference: Winter (2009), anthropometric segment tables
    pub const LEG_LENGTH_HEIGHT_RATIO: f64 = 0.53;

    /// WHO underweight threshold (kg/m²)
    pub const BMI_UNDERWEIGHT: f64 = 18.5;

    /// Lower edge of the optimal-balance BMI band (kg/m²)
    pub const BMI_LEAN: f64 = 20.0;

    /// Upper edge of the optimal-balance BMI band (kg/m²)
    pub const BMI_OPTIMAL_UPPER: f64 = 25.0;

    /// Upper edge of the mildly elevated BMI band (kg/m²)
    pub const BMI_ELEVATED_UPPER: f64 = 27.0;

    /// WHO obesity threshold (kg/m²)
    pub const BMI_OBESE: f64 = 30.0;
}

/// Personalized cadence model
///
/// References:
/// - Tudor-Locke, C. et al. (2018). Cadence (steps/min) and intensity during ambulation
/// - Murray, M.P. (1964). Walking patterns of normal men
pub mod cadence_model {
    /// Population baseline ideal cadence at reference height (steps/min)
    pub const BASE_IDEAL_CADENCE: f64 = 115.0;

    /// Cadence decrease per centimeter of height above reference
    /// Taller individuals take longer, slower strides
    pub const HEIGHT_SLOPE: f64 = 0.15;

    /// Reference height the cadence model is anchored at (cm)
    pub const REFERENCE_HEIGHT_CM: f64 = 170.0;

    /// Floor for the personalized ideal cadence (steps/min)
    pub const MIN_IDEAL_CADENCE: f64 = 80.0;

    /// Ceiling for the personalized ideal cadence (steps/min)
    pub const MAX_IDEAL_CADENCE: f64 = 135.0;
}

/// Stride and walking-speed model
///
/// References:
/// - Grieve, D.W. & Gear, R.J. (1966). The relationships between length of stride,
///   step frequency, time of swing and speed of walking
/// - Bohannon, R.W. (1997). Comfortable and maximum walking speed of adults aged 20-79 years
pub mod stride_model {
    /// Stride length as a multiple of leg length at comfortable speed
    pub const STRIDE_LEG_LENGTH_FACTOR: f64 = 1.3;

    /// Comfortable walking speed as a multiple of leg length per second
    pub const SPEED_LEG_LENGTH_FACTOR: f64 = 0.95;

    /// Divisor converting stride length x cadence into m/s
    /// (two steps per stride, sixty seconds per minute)
    pub const STRIDE_CADENCE_SPEED_DIVISOR: f64 = 120.0;
}

/// Step-width model
///
/// Reference: Owings, T.M. & Grabiner, M.D. (2004). Step width variability
pub mod step_width_model {
    /// Baseline ideal step width at reference height (m)
    pub const BASE_IDEAL_STEP_WIDTH_M: f64 = 0.10;

    /// Step-width increase per centimeter of height above reference
    pub const HEIGHT_SLOPE: f64 = 0.0003;

    /// Floor for the personalized ideal step width (m)
    pub const MIN_IDEAL_STEP_WIDTH_M: f64 = 0.05;

    /// Ceiling for the personalized ideal step width (m)
    pub const MAX_IDEAL_STEP_WIDTH_M: f64 = 0.20;
}

/// Joint loading targets
///
/// Reference: Kutzner, I. et al. (2010). Loading of the knee joint during
/// activities of daily living measured in vivo in five subjects
pub mod joint_loading {
    /// Target peak knee force during level walking, as a multiple of
    /// body-weight force
    pub const KNEE_FORCE_BODY_WEIGHT_FACTOR: f64 = 1.5;
}

/// Balance and equilibrium targets
///
/// Reference: Prieto, T.E. et al. (1996). Measures of postural steadiness
pub mod balance_targets {
    /// Target postural sway, midpoint of the ideal 0-1 degree band
    pub const IDEAL_POSTURAL_SWAY_DEG: f64 = 0.5;

    /// Equilibrium target for BMI within the optimal band
    pub const EQUILIBRIUM_OPTIMAL: f64 = 0.95;

    /// Equilibrium target for BMI slightly outside the optimal band
    pub const EQUILIBRIUM_SUBOPTIMAL: f64 = 0.90;

    /// Equilibrium target for underweight or obese BMI
    pub const EQUILIBRIUM_COMPROMISED: f64 = 0.85;
}

/// Local composite gait-score model: weights and sensor mapping ranges
pub mod score_model {
    /// Weight of the equilibrium sub-score in the composite
    pub const EQUILIBRIUM_WEIGHT: f64 = 0.45;

    /// Weight of the cadence sub-score in the composite
    pub const CADENCE_WEIGHT: f64 = 0.35;

    /// Weight of the postural-sway sub-score in the composite
    pub const SWAY_WEIGHT: f64 = 0.20;

    /// Equilibrium sensor value mapped to a 0 sub-score
    pub const EQUILIBRIUM_INPUT_MIN: f64 = 0.05;

    /// Equilibrium sensor value mapped to a 100 sub-score
    pub const EQUILIBRIUM_INPUT_MAX: f64 = 0.4;

    /// Cadence the composite treats as optimal (steps/min)
    pub const OPTIMAL_CADENCE: f64 = 110.0;

    /// Cadence deviation mapped to a 0 sub-score (steps/min)
    pub const MAX_CADENCE_DEVIATION: f64 = 35.0;

    /// Postural sway mapped to a 0 sub-score (degrees)
    pub const SWAY_INPUT_WORST: f64 = 25.0;

    /// Postural sway mapped to a 100 sub-score (degrees)
    pub const SWAY_INPUT_BEST: f64 = 1.0;
}

/// Composite-score classification bands
///
/// Matches the classification the inference backend publishes alongside its
/// rolling average score.
pub mod score_bands {
    /// Scores at or above this are "Excellent"
    pub const EXCELLENT_THRESHOLD: f64 = 85.0;

    /// Scores at or above this are "Good"
    pub const GOOD_THRESHOLD: f64 = 70.0;

    /// Scores at or above this are "Moderately Healthy"
    pub const MODERATE_THRESHOLD: f64 = 40.0;
}

/// Actual-vs-ideal comparison tolerances
pub mod comparison_bands {
    /// Absolute deviation (percent of ideal) considered optimal
    pub const OPTIMAL_DEVIATION_PCT: f64 = 15.0;

    /// Lower edge of the optimal postural-sway band (degrees)
    pub const SWAY_OPTIMAL_MIN_DEG: f64 = 0.0;

    /// Upper edge of the optimal postural-sway band (degrees)
    pub const SWAY_OPTIMAL_MAX_DEG: f64 = 1.0;
}

/// Ratio thresholds that trigger recommendations
pub mod recommendation_ratios {
    /// Actual below this fraction of ideal triggers an improvement
    /// recommendation (equilibrium, cadence, walking speed)
    pub const LOW_RATIO: f64 = 0.9;

    /// Knee force above this multiple of ideal triggers a load-reduction
    /// recommendation
    pub const KNEE_FORCE_HIGH_RATIO: f64 = 1.1;

    /// Postural sway above this multiple of ideal triggers a stability
    /// recommendation
    pub const SWAY_HIGH_RATIO: f64 = 1.2;

    /// Half-width of the "near ideal" band used by the maintenance rule
    pub const MAINTENANCE_BAND: f64 = 0.1;

    /// Metrics within the near-ideal band required for the positive
    /// maintenance recommendation
    pub const MAINTENANCE_METRIC_COUNT: usize = 5;
}

/// Deviation cutoffs for threat severity
pub mod threat_severity {
    /// Absolute deviation (percent) above which a threat is high severity
    pub const HIGH_DEVIATION_PCT: f64 = 30.0;

    /// Absolute deviation (percent) above which a threat is medium severity
    pub const MEDIUM_DEVIATION_PCT: f64 = 15.0;
}

/// Trend and variability thresholds for insight generation
pub mod trend_analysis {
    /// Composite-score change (percent, first vs. last reading) considered
    /// a meaningful trend
    pub const TREND_SIGNIFICANCE_PCT: f64 = 5.0;

    /// Cadence standard deviation (steps/min) above which step rhythm is
    /// flagged as variable
    pub const CADENCE_VARIABILITY_THRESHOLD: f64 = 20.0;
}
