// ABOUTME: Kinova gait intelligence engine - integration crate
// ABOUTME: Storage seams and the snapshot-then-compute analysis service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

#![deny(unsafe_code)]

//! # Kinova Gait Engine
//!
//! Personalized gait analysis: biomechanical ideal parameters, clinical
//! categorization, composite scoring, and recommendations, driven by a
//! user's anthropometrics and a stream of sensor-derived readings.
//!
//! The analysis itself lives in [`kinova_intelligence`] and is pure,
//! synchronous computation. This crate supplies what the pipeline
//! deliberately does not own:
//!
//! - **profile**: the injected profile repository (get/set keyed per user,
//!   last-write-wins, acceptance validation at the boundary)
//! - **readings**: the reading-stream and ML-snapshot source seam
//! - **service**: the snapshot-then-compute evaluation cycle tying the
//!   seams to the pipeline
//!
//! Data arrival is an external event; every cycle re-fetches immutable
//! snapshots and recomputes from scratch, so concurrent cycles never
//! interleave with an in-progress profile mutation.

/// Profile repository seam and in-memory implementation
pub mod profile;
/// Reading-stream source seam and in-memory implementation
pub mod readings;
/// Snapshot-then-compute evaluation service
pub mod service;

/// The pure analysis pipeline
pub use kinova_intelligence as intelligence;

pub use kinova_core::{AppError, AppResult, GaitParameter, GaitReading, MlInsights, UserProfile};
pub use kinova_intelligence::{evaluate, GaitEvaluation};
pub use profile::{InMemoryProfileStore, ProfileRepository};
pub use readings::{InMemoryReadingBuffer, ReadingSource};
pub use service::GaitAnalysisService;
