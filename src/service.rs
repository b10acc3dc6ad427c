// ABOUTME: Snapshot-then-compute gait analysis service
// ABOUTME: Ties the profile and reading seams to the pure evaluation pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

//! Evaluation service.
//!
//! The one concurrency rule the platform has: snapshot, then compute. Each
//! cycle fetches the profile, the readings, and the ML snapshot, and only
//! then runs the pure pipeline over those immutable values. A profile edit
//! racing an evaluation can make the output stale, never torn - stale
//! output is simply discarded by the next cheap, idempotent cycle.

use crate::profile::ProfileRepository;
use crate::readings::ReadingSource;
use kinova_core::{AppResult, UserProfile};
use kinova_intelligence::{evaluate, GaitEvaluation};
use tracing::debug;
use uuid::Uuid;

/// Gait analysis service over injected storage seams
pub struct GaitAnalysisService<P, R> {
    profiles: P,
    readings: R,
}

impl<P, R> GaitAnalysisService<P, R>
where
    P: ProfileRepository,
    R: ReadingSource,
{
    /// Service over the given seams
    pub const fn new(profiles: P, readings: R) -> Self {
        Self { profiles, readings }
    }

    /// Overwrite the user's profile wholesale.
    ///
    /// # Errors
    ///
    /// Propagates the repository's rejection of out-of-range profiles; the
    /// previously accepted profile stays in effect.
    pub async fn update_profile(&self, user_id: Uuid, profile: UserProfile) -> AppResult<()> {
        self.profiles.set(user_id, profile).await
    }

    /// Run one full evaluation cycle for the user.
    ///
    /// # Errors
    ///
    /// Fails only if a storage seam fails; missing data (no readings, no ML
    /// snapshot) evaluates normally as "no data".
    pub async fn evaluate_user(&self, user_id: Uuid) -> AppResult<GaitEvaluation> {
        let profile = self.profiles.get(user_id).await?;
        let readings = self.readings.readings(user_id).await?;
        let ml = self.readings.ml_insights(user_id).await?;

        debug!(%user_id, readings = readings.len(), ml = ml.is_some(), "snapshot taken");
        Ok(evaluate(&profile, &readings, ml.as_ref()))
    }
}
