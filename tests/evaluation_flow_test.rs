// ABOUTME: End-to-end tests for the snapshot-then-compute evaluation service
// ABOUTME: Exercises profile edits, reading streams, ML overrides, and no-data cycles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use kinova_gait_engine::intelligence::{ComparisonStatus, GaitCategory, ScoreBand};
use kinova_gait_engine::{
    GaitAnalysisService, GaitParameter, GaitReading, InMemoryProfileStore, InMemoryReadingBuffer,
    MlInsights, UserProfile,
};
use uuid::Uuid;

fn service() -> GaitAnalysisService<InMemoryProfileStore, InMemoryReadingBuffer> {
    GaitAnalysisService::new(InMemoryProfileStore::new(), InMemoryReadingBuffer::new())
}

fn service_with_buffer(
    buffer: InMemoryReadingBuffer,
) -> GaitAnalysisService<InMemoryProfileStore, InMemoryReadingBuffer> {
    GaitAnalysisService::new(InMemoryProfileStore::new(), buffer)
}

fn strong_reading() -> GaitReading {
    GaitReading {
        cadence: Some(114.0),
        equilibrium_score: Some(0.94),
        frequency: Some(1.9),
        knee_force: Some(1020.0),
        postural_sway: Some(0.52),
        step_width: Some(0.101),
        stride_length: Some(1.18),
        walking_speed: Some(0.97),
        ..GaitReading::default()
    }
}

#[tokio::test]
async fn fresh_user_evaluates_as_no_data() {
    let user = Uuid::new_v4();
    let evaluation = service().evaluate_user(user).await.unwrap();

    assert_eq!(evaluation.profile, UserProfile::default());
    assert!(evaluation.metrics.is_empty());
    assert!((evaluation.score - 0.0).abs() < f64::EPSILON);
    assert!(evaluation.recommendations.is_empty());
    assert!(evaluation.threats.is_empty());
    assert!(evaluation.insights.is_empty());
}

#[tokio::test]
async fn default_profile_ideals_match_published_formulas() {
    let buffer = InMemoryReadingBuffer::new();
    let user = Uuid::new_v4();
    buffer.push(user, strong_reading());

    let evaluation = service_with_buffer(buffer)
        .evaluate_user(user)
        .await
        .unwrap();

    // 170 cm / 70 kg reference subject
    assert!((evaluation.ideal.bmi - 24.2).abs() < 1e-9);
    assert!((evaluation.ideal.leg_length - 90.1).abs() < 1e-9);
    assert!((evaluation.ideal.cadence - 115.0).abs() < 1e-9);
    assert!((evaluation.ideal.equilibrium_score - 0.95).abs() < 1e-9);
    assert!((evaluation.ideal.knee_force - 1030.0).abs() < 1e-9);
}

#[tokio::test]
async fn profile_edit_repersonalizes_the_next_cycle() {
    let buffer = InMemoryReadingBuffer::new();
    let user = Uuid::new_v4();
    buffer.push(user, strong_reading());
    let service = service_with_buffer(buffer);

    let before = service.evaluate_user(user).await.unwrap();
    assert!((before.ideal.cadence - 115.0).abs() < 1e-9);

    service
        .update_profile(
            user,
            UserProfile {
                height: 190.0,
                weight: 90.0,
            },
        )
        .await
        .unwrap();

    let after = service.evaluate_user(user).await.unwrap();
    assert!((after.ideal.cadence - 112.0).abs() < 1e-9);
    assert!((after.ideal.knee_force - 1324.0).abs() < 1e-9);
}

#[tokio::test]
async fn rejected_profile_edit_leaves_evaluation_unchanged() {
    let buffer = InMemoryReadingBuffer::new();
    let user = Uuid::new_v4();
    buffer.push(user, strong_reading());
    let service = service_with_buffer(buffer);

    let rejected = service
        .update_profile(
            user,
            UserProfile {
                height: 260.0,
                weight: 70.0,
            },
        )
        .await;
    assert!(rejected.is_err());

    let evaluation = service.evaluate_user(user).await.unwrap();
    assert_eq!(evaluation.profile, UserProfile::default());
}

#[tokio::test]
async fn published_ml_snapshot_overrides_the_local_score() {
    let buffer = InMemoryReadingBuffer::new();
    let user = Uuid::new_v4();
    buffer.push(user, strong_reading());
    buffer.publish_ml_insights(
        user,
        MlInsights {
            gait_score_deterministic: Some(88.0),
            avg_classification_last20: Some("Excellent".to_owned()),
            ..MlInsights::default()
        },
    );

    let evaluation = service_with_buffer(buffer)
        .evaluate_user(user)
        .await
        .unwrap();
    assert!((evaluation.score - 88.0).abs() < f64::EPSILON);
    assert_eq!(evaluation.score_band, ScoreBand::Excellent);
}

#[tokio::test]
async fn degraded_stream_flags_metrics_without_crashing() {
    let buffer = InMemoryReadingBuffer::new();
    let user = Uuid::new_v4();
    // A sparse reading: only cadence and a wildly elevated knee force
    buffer.push(
        user,
        GaitReading {
            cadence: Some(70.0),
            knee_force: Some(2000.0),
            ..GaitReading::default()
        },
    );

    let evaluation = service_with_buffer(buffer)
        .evaluate_user(user)
        .await
        .unwrap();

    assert_eq!(evaluation.metrics.len(), 8);

    let speed = evaluation
        .metrics
        .iter()
        .find(|m| m.parameter == GaitParameter::WalkingSpeed)
        .unwrap();
    assert!((speed.actual - 0.0).abs() < f64::EPSILON);
    assert_eq!(speed.categorization.label, "No Data");

    let cadence = evaluation
        .metrics
        .iter()
        .find(|m| m.parameter == GaitParameter::Cadence)
        .unwrap();
    assert_eq!(
        cadence.categorization.category,
        GaitCategory::NeedsAttention
    );
    assert_eq!(cadence.status(), ComparisonStatus::Below);

    // Elevated knee force must surface as a threat
    assert!(evaluation
        .threats
        .iter()
        .any(|t| t.parameter == GaitParameter::KneeForce
            && t.status == ComparisonStatus::Above));
}

#[tokio::test]
async fn thirty_reading_stream_matches_the_local_composite_formula() {
    let buffer = InMemoryReadingBuffer::new();
    let user = Uuid::new_v4();
    for _ in 0..30 {
        buffer.push(
            user,
            GaitReading {
                equilibrium_score: Some(0.3),
                cadence: Some(110.0),
                postural_sway: Some(1.0),
                ..GaitReading::default()
            },
        );
    }

    let evaluation = service_with_buffer(buffer)
        .evaluate_user(user)
        .await
        .unwrap();
    // 0.45 x 71.428571 + 0.35 x 100 + 0.20 x 100 = 87.142857 -> 87
    assert!((evaluation.score - 87.0).abs() < f64::EPSILON);
    assert_eq!(evaluation.score_band, ScoreBand::Excellent);
    assert_eq!(evaluation.score_series.len(), 30);
}
