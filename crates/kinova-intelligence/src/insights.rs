// ABOUTME: Qualitative insight generation from recent readings and ML output
// ABOUTME: Trend, cadence stability, and model classification insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

//! Insight generation for the gait dashboard.
//!
//! Insights are qualitative context on top of the numeric pipeline: where
//! the composite score is heading, whether step rhythm is stable, and what
//! the external model thinks. Like everything else in this crate they are a
//! pure function of the inputs.

use crate::gait_score::raw_composite;
use crate::numeric::population_std_dev;
use crate::physiological_constants::trend_analysis::{
    CADENCE_VARIABILITY_THRESHOLD, TREND_SIGNIFICANCE_PCT,
};
use kinova_core::constants::limits::SCORE_READING_WINDOW;
use kinova_core::models::{GaitParameter, GaitReading, MlInsights};
use serde::{Deserialize, Serialize};

/// What aspect of the data an insight describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// External model classification
    Classification,
    /// Composite score trajectory across recent sessions
    Trend,
    /// Step rhythm stability
    CadenceStability,
}

/// Display tone of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightTone {
    /// Positive finding
    Success,
    /// Neutral / informational finding
    Primary,
    /// Worth monitoring
    Warning,
    /// Needs attention
    Destructive,
}

/// One qualitative insight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaitInsight {
    /// What the insight describes
    pub kind: InsightKind,
    /// Short headline
    pub title: String,
    /// Supporting sentence with the numbers behind the finding
    pub description: String,
    /// Display tone
    pub tone: InsightTone,
}

fn classification_insight(ml: &MlInsights) -> Option<GaitInsight> {
    let label = ml.avg_classification_last20.as_deref()?;
    let lowered = label.to_lowercase();
    let healthy = ["healthy", "excellent", "good"]
        .iter()
        .any(|needle| lowered.contains(needle));
    Some(GaitInsight {
        kind: InsightKind::Classification,
        title: format!("Model Classification: {label}"),
        description: "ML-provided classification based on recent sessions.".to_owned(),
        tone: if healthy {
            InsightTone::Success
        } else {
            InsightTone::Destructive
        },
    })
}

fn trend_insight(window: &[&GaitReading]) -> Option<GaitInsight> {
    if window.len() < 2 {
        return None;
    }
    let start = raw_composite(window[0]);
    let end = raw_composite(window[window.len() - 1]);
    let denominator = if start == 0.0 { 1.0 } else { start.abs() };
    let trend = (end - start) / denominator * 100.0;

    let insight = if trend > TREND_SIGNIFICANCE_PCT {
        GaitInsight {
            kind: InsightKind::Trend,
            title: "Strong Upward Trend".to_owned(),
            description: format!(
                "Your gait score has improved by {trend:.1}% over recent sessions."
            ),
            tone: InsightTone::Primary,
        }
    } else if trend < -TREND_SIGNIFICANCE_PCT {
        GaitInsight {
            kind: InsightKind::Trend,
            title: "Downward Trend".to_owned(),
            description: format!(
                "Your gait score has declined by {:.1}%. Consider reassessment.",
                trend.abs()
            ),
            tone: InsightTone::Destructive,
        }
    } else {
        GaitInsight {
            kind: InsightKind::Trend,
            title: "Stable Performance".to_owned(),
            description: "Your gait score is consistent across recent sessions.".to_owned(),
            tone: InsightTone::Success,
        }
    };
    Some(insight)
}

fn cadence_insight(window: &[&GaitReading]) -> Option<GaitInsight> {
    if window.is_empty() {
        return None;
    }
    let cadence_values: Vec<f64> = window
        .iter()
        .map(|r| r.value(GaitParameter::Cadence).unwrap_or(0.0))
        .collect();
    let spread = population_std_dev(&cadence_values);

    let insight = if spread > CADENCE_VARIABILITY_THRESHOLD {
        GaitInsight {
            kind: InsightKind::CadenceStability,
            title: "Cadence Variability".to_owned(),
            description: "Step rhythm is variable; rhythm training may help.".to_owned(),
            tone: InsightTone::Warning,
        }
    } else {
        GaitInsight {
            kind: InsightKind::CadenceStability,
            title: "Consistent Cadence".to_owned(),
            description: "Walking rhythm is stable and efficient.".to_owned(),
            tone: InsightTone::Success,
        }
    };
    Some(insight)
}

/// Generate qualitative insights from the recent reading window and the
/// optional external ML snapshot. Empty input yields no insights.
#[must_use]
pub fn generate_insights(readings: &[GaitReading], ml: Option<&MlInsights>) -> Vec<GaitInsight> {
    let window_start = readings.len().saturating_sub(SCORE_READING_WINDOW);
    let window: Vec<&GaitReading> = readings[window_start..]
        .iter()
        .filter(|r| r.has_composite_fields())
        .collect();

    let mut insights = Vec::new();
    if let Some(insight) = ml.and_then(classification_insight) {
        insights.push(insight);
    }
    if let Some(insight) = trend_insight(&window) {
        insights.push(insight);
    }
    if let Some(insight) = cadence_insight(&window) {
        insights.push(insight);
    }
    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(equilibrium: f64, cadence: f64, sway: f64) -> GaitReading {
        GaitReading {
            equilibrium_score: Some(equilibrium),
            cadence: Some(cadence),
            postural_sway: Some(sway),
            ..GaitReading::default()
        }
    }

    #[test]
    fn stable_series_reports_stability_and_consistency() {
        let readings: Vec<GaitReading> = (0..10).map(|_| reading(0.3, 110.0, 1.0)).collect();
        let insights = generate_insights(&readings, None);

        assert!(insights
            .iter()
            .any(|i| i.title == "Stable Performance" && i.tone == InsightTone::Success));
        assert!(insights
            .iter()
            .any(|i| i.title == "Consistent Cadence" && i.tone == InsightTone::Success));
    }

    #[test]
    fn improving_series_reports_upward_trend() {
        let mut readings: Vec<GaitReading> = (0..5).map(|_| reading(0.1, 80.0, 10.0)).collect();
        readings.push(reading(0.35, 110.0, 1.0));
        let insights = generate_insights(&readings, None);

        let trend = insights
            .iter()
            .find(|i| i.kind == InsightKind::Trend)
            .expect("trend insight");
        assert_eq!(trend.title, "Strong Upward Trend");
    }

    #[test]
    fn declining_series_reports_downward_trend() {
        let mut readings = vec![reading(0.35, 110.0, 1.0)];
        readings.extend((0..5).map(|_| reading(0.1, 80.0, 10.0)));
        let insights = generate_insights(&readings, None);

        let trend = insights
            .iter()
            .find(|i| i.kind == InsightKind::Trend)
            .expect("trend insight");
        assert_eq!(trend.title, "Downward Trend");
        assert_eq!(trend.tone, InsightTone::Destructive);
    }

    #[test]
    fn erratic_cadence_is_flagged() {
        let readings: Vec<GaitReading> = (0..10)
            .map(|i| reading(0.3, if i % 2 == 0 { 60.0 } else { 130.0 }, 1.0))
            .collect();
        let insights = generate_insights(&readings, None);

        assert!(insights
            .iter()
            .any(|i| i.title == "Cadence Variability" && i.tone == InsightTone::Warning));
    }

    #[test]
    fn ml_classification_tone_follows_label() {
        let healthy = MlInsights {
            avg_classification_last20: Some("Moderately Healthy".to_owned()),
            ..MlInsights::default()
        };
        let insights = generate_insights(&[], Some(&healthy));
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].tone, InsightTone::Success);

        let poor = MlInsights {
            avg_classification_last20: Some("Needs Improvement".to_owned()),
            ..MlInsights::default()
        };
        let insights = generate_insights(&[], Some(&poor));
        assert_eq!(insights[0].tone, InsightTone::Destructive);
    }

    #[test]
    fn no_data_yields_no_insights() {
        assert!(generate_insights(&[], None).is_empty());
    }
}
