// ABOUTME: Tests for the profile repository seam and its in-memory implementation
// ABOUTME: Validates acceptance bounds, defaults, and last-write-wins semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use kinova_gait_engine::{AppError, InMemoryProfileStore, ProfileRepository, UserProfile};
use std::sync::Arc;
use uuid::Uuid;

#[tokio::test]
async fn profiles_are_isolated_per_user() {
    let store = InMemoryProfileStore::new();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    store
        .set(
            alice,
            UserProfile {
                height: 162.0,
                weight: 54.0,
            },
        )
        .await
        .unwrap();

    assert_eq!(store.get(bob).await.unwrap(), UserProfile::default());
    assert!((store.get(alice).await.unwrap().height - 162.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn acceptance_bounds_are_enforced_at_the_boundary() {
    let store = InMemoryProfileStore::new();
    let user = Uuid::new_v4();

    for (height, weight) in [(99.0, 70.0), (251.0, 70.0), (170.0, 29.0), (170.0, 301.0)] {
        let result = store.set(user, UserProfile { height, weight }).await;
        assert!(
            matches!(result, Err(AppError::ValueOutOfRange { .. })),
            "({height}, {weight}) must be rejected"
        );
    }

    // Nothing was accepted, so reads still see the default
    assert_eq!(store.get(user).await.unwrap(), UserProfile::default());
}

#[tokio::test]
async fn concurrent_writers_settle_on_a_single_full_profile() {
    let store = Arc::new(InMemoryProfileStore::new());
    let user = Uuid::new_v4();

    let mut handles = Vec::new();
    for i in 0..8_u32 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let profile = UserProfile {
                height: 150.0 + f64::from(i),
                weight: 50.0 + f64::from(i),
            };
            store.set(user, profile).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // Whatever write won, the stored profile is one of the submitted
    // wholes - never a torn mix of fields.
    let settled = store.get(user).await.unwrap();
    let index = settled.height - 150.0;
    assert!((settled.weight - (50.0 + index)).abs() < f64::EPSILON);
}

#[tokio::test]
async fn works_through_the_trait_object_seam() {
    let store: Arc<dyn ProfileRepository> = Arc::new(InMemoryProfileStore::new());
    let user = Uuid::new_v4();

    store
        .set(
            user,
            UserProfile {
                height: 175.0,
                weight: 72.0,
            },
        )
        .await
        .unwrap();
    assert!((store.get(user).await.unwrap().weight - 72.0).abs() < f64::EPSILON);
}
