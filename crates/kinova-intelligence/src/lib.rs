// ABOUTME: Gait intelligence engine - the pure analysis pipeline for the Kinova platform
// ABOUTME: Ideal parameters, metric joining, categorization, scoring, recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

#![deny(unsafe_code)]

//! # Kinova Intelligence
//!
//! Deterministic gait analysis for the Kinova platform. The whole crate is
//! synchronous, side-effect-free computation over immutable snapshots:
//! a user profile and a slice of sensor readings go in, a full evaluation
//! comes out. Re-evaluation is always full recomputation - no module owns
//! mutable state between cycles.
//!
//! Data flows strictly forward:
//!
//! ```text
//! profile -> ideal parameters -> joined metrics -> categorized metrics
//!         -> score + recommendations + threats + insights
//! ```
//!
//! ## Modules
//!
//! - **algorithms**: closed-form biomechanical estimators (BMI, leg length,
//!   personalized ideal gait parameters)
//! - **categorization**: clinical band classification for observed values
//! - **metrics**: joins the latest reading with ideal values into metric records
//! - **comparison**: actual-vs-ideal status and deviation
//! - **`gait_score`**: composite 0-100 score (external ML or local weighted formula)
//! - **`recommendation_engine`**: ranked training recommendations
//! - **threats**: per-metric risk advisories for non-optimal parameters
//! - **insights**: qualitative trend and stability insights
//! - **evaluation**: the full pipeline in one call
//! - **config**: tunable thresholds with literature defaults

/// Closed-form biomechanical estimation algorithms
pub mod algorithms;
/// Clinical band classification for observed gait values
pub mod categorization;
/// Actual-vs-ideal comparison status and deviation
pub mod comparison;
/// Tunable analysis configuration with literature defaults
pub mod config;
/// The full analysis pipeline in one call
pub mod evaluation;
/// Composite gait score computation and classification
pub mod gait_score;
/// Qualitative trend and stability insights
pub mod insights;
/// Metric normalization and joining
pub mod metrics;
/// Shared numeric helpers (fixed-precision rounding, clamping)
pub mod numeric;
/// Biomechanical constants from published literature
pub mod physiological_constants;
/// Ranked training recommendations from metric deviations
pub mod recommendation_engine;
/// Per-metric risk advisories
pub mod threats;

pub use algorithms::{compute_ideal_parameters, IdealParameters};
pub use categorization::{categorize, CategorizationResult, CategoryColor, GaitCategory};
pub use comparison::{comparison_status, deviation_percent, ComparisonStatus, ComparisonSummary};
pub use config::IntelligenceConfig;
pub use evaluation::{evaluate, GaitEvaluation};
pub use gait_score::{composite_score, score_series, ScoreBand};
pub use insights::{generate_insights, GaitInsight, InsightKind, InsightTone};
pub use metrics::{build_metric_records, MetricRecord};
pub use recommendation_engine::{recommendations, Recommendation, RecommendationPriority};
pub use threats::{threats, Threat, ThreatSeverity};
