// ABOUTME: Profile repository seam - per-user anthropometric storage
// ABOUTME: Validates at the boundary, keeps the estimator storage-free
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

//! Profile storage seam.
//!
//! The estimator is a pure function and must not know where profiles live;
//! callers inject a [`ProfileRepository`]. Semantics are last-write-wins,
//! whole-profile overwrites only. Out-of-range updates are rejected here -
//! never downstream - and the previously accepted profile is retained.

use async_trait::async_trait;
use dashmap::DashMap;
use kinova_core::{AppResult, UserProfile};
use tracing::{debug, warn};
use uuid::Uuid;

/// Per-user profile storage with last-write-wins semantics
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The user's current profile; the platform default when the user has
    /// never saved one.
    async fn get(&self, user_id: Uuid) -> AppResult<UserProfile>;

    /// Overwrite the user's profile wholesale.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range profiles with `AppError::ValueOutOfRange`; the
    /// stored profile is left untouched.
    async fn set(&self, user_id: Uuid, profile: UserProfile) -> AppResult<()>;
}

/// In-memory profile store backed by a concurrent map.
///
/// Suitable for tests, the CLI, and single-process deployments; the trait
/// exists so production callers can swap in durable storage without
/// touching the pipeline.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: DashMap<Uuid, UserProfile>,
}

impl InMemoryProfileStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileStore {
    async fn get(&self, user_id: Uuid) -> AppResult<UserProfile> {
        Ok(self
            .profiles
            .get(&user_id)
            .map_or_else(UserProfile::default, |entry| *entry))
    }

    async fn set(&self, user_id: Uuid, profile: UserProfile) -> AppResult<()> {
        if let Err(err) = profile.validate() {
            warn!(%user_id, %err, "rejecting profile update");
            return Err(err);
        }
        self.profiles.insert(user_id, profile);
        debug!(%user_id, height = profile.height, weight = profile.weight, "profile updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_user_gets_the_default_profile() {
        let store = InMemoryProfileStore::new();
        let profile = store.get(Uuid::new_v4()).await.unwrap();
        assert_eq!(profile, UserProfile::default());
    }

    #[tokio::test]
    async fn rejected_update_retains_previous_profile() {
        let store = InMemoryProfileStore::new();
        let user = Uuid::new_v4();
        let accepted = UserProfile {
            height: 182.0,
            weight: 80.0,
        };
        store.set(user, accepted).await.unwrap();

        let rejected = UserProfile {
            height: 300.0,
            weight: 80.0,
        };
        assert!(store.set(user, rejected).await.is_err());
        assert_eq!(store.get(user).await.unwrap(), accepted);
    }

    #[tokio::test]
    async fn last_write_wins() {
        let store = InMemoryProfileStore::new();
        let user = Uuid::new_v4();
        store
            .set(
                user,
                UserProfile {
                    height: 160.0,
                    weight: 55.0,
                },
            )
            .await
            .unwrap();
        let second = UserProfile {
            height: 176.0,
            weight: 68.0,
        };
        store.set(user, second).await.unwrap();
        assert_eq!(store.get(user).await.unwrap(), second);
    }
}
