// ABOUTME: Core types and constants for the Kinova gait intelligence platform
// ABOUTME: Foundation crate with error handling, domain models, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

#![deny(unsafe_code)]

//! # Kinova Core
//!
//! Foundation crate providing shared types and constants for the Kinova gait
//! intelligence platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `AppResult`
//! - **constants**: Domain-wide constants organized by concern
//! - **models**: Core data models (`UserProfile`, `GaitReading`, `MlInsights`)

/// Unified error handling for storage and validation boundaries
pub mod errors;

/// Domain constants organized by concern (limits, units)
pub mod constants;

/// Core data models shared by the analysis pipeline and its callers
pub mod models;

pub use errors::{AppError, AppResult};
pub use models::{GaitParameter, GaitReading, MlInsights, UserProfile};
