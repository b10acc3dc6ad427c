// ABOUTME: Reading-stream source seam - chronological gait readings per user
// ABOUTME: In-memory buffer implementation for tests, CLI, and single-process use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

//! Reading source seam.
//!
//! Readings are produced upstream and arrive through an external real-time
//! store; the pipeline only ever consumes immutable snapshots of them. The
//! contract here is ordering: sources hand back readings in chronological
//! order, so the last element is the current reading and the tail of the
//! slice feeds score averaging.

use async_trait::async_trait;
use dashmap::DashMap;
use kinova_core::{AppResult, GaitReading, MlInsights};
use tracing::debug;
use uuid::Uuid;

/// Source of gait readings and ML snapshots for a user
#[async_trait]
pub trait ReadingSource: Send + Sync {
    /// All stored readings for the user, in chronological order.
    async fn readings(&self, user_id: Uuid) -> AppResult<Vec<GaitReading>>;

    /// The inference backend's latest published snapshot, if any.
    async fn ml_insights(&self, user_id: Uuid) -> AppResult<Option<MlInsights>>;
}

/// In-memory reading buffer backed by concurrent maps.
#[derive(Debug, Default)]
pub struct InMemoryReadingBuffer {
    readings: DashMap<Uuid, Vec<GaitReading>>,
    ml: DashMap<Uuid, MlInsights>,
}

impl InMemoryReadingBuffer {
    /// Empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reading to the user's chronological stream.
    pub fn push(&self, user_id: Uuid, reading: GaitReading) {
        self.readings.entry(user_id).or_default().push(reading);
        debug!(%user_id, "reading appended");
    }

    /// Publish (or replace) the user's ML snapshot.
    pub fn publish_ml_insights(&self, user_id: Uuid, insights: MlInsights) {
        self.ml.insert(user_id, insights);
    }
}

#[async_trait]
impl ReadingSource for InMemoryReadingBuffer {
    async fn readings(&self, user_id: Uuid) -> AppResult<Vec<GaitReading>> {
        Ok(self
            .readings
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn ml_insights(&self, user_id: Uuid) -> AppResult<Option<MlInsights>> {
        Ok(self.ml.get(&user_id).map(|entry| entry.value().clone()))
    }
}
