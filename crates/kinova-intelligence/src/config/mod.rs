// ABOUTME: Configuration module for the kinova-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

/// Intelligence configuration (recommendation and threat thresholds)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
