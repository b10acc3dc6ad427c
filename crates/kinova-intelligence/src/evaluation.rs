// ABOUTME: The full gait analysis pipeline in one pure call
// ABOUTME: Profile and readings in, evaluation snapshot out - no retained state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

//! One-call evaluation.
//!
//! Composes the pipeline stages in their fixed order: estimator, joiner,
//! categorizer, then score/recommendations/threats/insights. Every call
//! recomputes from scratch over the snapshots it is handed; rapid successive
//! evaluations are safe because nothing here is shared or mutated.

use crate::algorithms::{compute_ideal_parameters, IdealParameters};
use crate::comparison::ComparisonSummary;
use crate::gait_score::{composite_score, score_series, ScoreBand};
use crate::insights::{generate_insights, GaitInsight};
use crate::metrics::{build_metric_records, MetricRecord};
use crate::recommendation_engine::{recommendations, Recommendation};
use crate::threats::{threats, Threat};
use kinova_core::models::{GaitReading, MlInsights, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Complete output of one evaluation cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaitEvaluation {
    /// The profile the evaluation was personalized for
    pub profile: UserProfile,
    /// Personalized ideal parameters
    pub ideal: IdealParameters,
    /// Joined and categorized metrics from the latest reading
    /// (empty when no reading exists - "no data", not an error)
    pub metrics: Vec<MetricRecord>,
    /// Composite gait score (0-100, integral)
    pub score: f64,
    /// Qualitative band for the score
    pub score_band: ScoreBand,
    /// Per-reading score series for trend display, chronological
    pub score_series: Vec<f64>,
    /// Counts of optimal/above/below/unknown metrics
    pub summary: ComparisonSummary,
    /// Ranked recommendations
    pub recommendations: Vec<Recommendation>,
    /// Risk advisories for non-optimal metrics, sorted by severity
    pub threats: Vec<Threat>,
    /// Qualitative trend and stability insights
    pub insights: Vec<GaitInsight>,
}

/// Run the full pipeline over immutable snapshots.
///
/// `readings` must be in chronological order; the evaluation reads the last
/// element as the current reading and the tail of the slice for score
/// averaging and trends. `ml` is the optional external inference snapshot -
/// when it carries a usable score, that score overrides the local composite.
///
/// The profile is assumed pre-validated (see `kinova_core::models::UserProfile::validate`).
#[must_use]
pub fn evaluate(
    profile: &UserProfile,
    readings: &[GaitReading],
    ml: Option<&MlInsights>,
) -> GaitEvaluation {
    let ideal: IdealParameters = compute_ideal_parameters(profile);
    let metrics = build_metric_records(readings.last(), &ideal, profile);
    let score = composite_score(readings, ml.and_then(MlInsights::effective_score));
    let summary = ComparisonSummary::from_statuses(metrics.iter().map(MetricRecord::status));

    debug!(
        readings = readings.len(),
        metrics = metrics.len(),
        score,
        "gait evaluation cycle complete"
    );

    GaitEvaluation {
        profile: *profile,
        ideal,
        score,
        score_band: ScoreBand::classify(score),
        score_series: score_series(readings),
        summary,
        recommendations: recommendations(&metrics),
        threats: threats(&metrics),
        insights: generate_insights(readings, ml),
        metrics,
    }
}
