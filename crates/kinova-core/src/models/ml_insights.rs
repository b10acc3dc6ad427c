// ABOUTME: External ML score snapshot model with field-name normalization
// ABOUTME: Prefers the deterministic score, falls back to the rolling average
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the external ML inference output, as published by the
/// inference backend alongside the raw readings.
///
/// The backend has written these fields under more than one name over time;
/// serde aliases normalize the older spellings so consumers see one shape.
/// When a snapshot is present its score overrides the locally computed
/// composite (see `kinova-intelligence`'s score selector).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlInsights {
    /// Deterministic per-evaluation gait score (0-100), preferred when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gait_score_deterministic: Option<f64>,
    /// Rolling average gait score over the last 20 sessions (0-100)
    #[serde(alias = "avgGaitScore", skip_serializing_if = "Option::is_none")]
    pub avg_gait_score_last20: Option<f64>,
    /// Rolling classification label over the last 20 sessions
    #[serde(alias = "avgClassification", skip_serializing_if = "Option::is_none")]
    pub avg_classification_last20: Option<String>,
    /// Raw model prediction label
    #[serde(alias = "prediction", skip_serializing_if = "Option::is_none")]
    pub ml_prediction: Option<String>,
    /// Model confidence (0-1)
    #[serde(alias = "confidence", skip_serializing_if = "Option::is_none")]
    pub ml_confidence: Option<f64>,
    /// Free-text recommendations emitted by the model
    #[serde(alias = "recommendations", skip_serializing_if = "Option::is_none")]
    pub ml_recommendations: Option<Vec<String>>,
    /// When the backend last refreshed this snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MlInsights {
    /// The score this snapshot contributes, if any: the deterministic score
    /// when present, otherwise the rolling average. Non-finite values are
    /// treated as absent.
    #[must_use]
    pub fn effective_score(&self) -> Option<f64> {
        self.gait_score_deterministic
            .filter(|v| v.is_finite())
            .or_else(|| self.avg_gait_score_last20.filter(|v| v.is_finite()))
    }
}
