// ABOUTME: Unified error types for the Kinova gait intelligence platform
// ABOUTME: Structured errors for validation and storage seams with constructor helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence

//! # Unified Error Handling
//!
//! Errors in this platform exist only at the edges: profile validation,
//! storage seams, and serialization. The analysis pipeline itself is pure
//! numeric computation that degrades gracefully on missing or invalid input
//! (`0` actuals, "No Data" categorization, `Unknown` comparison status) and
//! never returns an error for bad sensor values.

use thiserror::Error;

/// Application error type covering the platform's fallible boundaries
#[derive(Debug, Error)]
pub enum AppError {
    /// Input failed structural validation
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Reason the input was rejected
        message: String,
    },

    /// A numeric field fell outside its accepted range
    #[error("{field} = {value} outside accepted range [{min}, {max}]")]
    ValueOutOfRange {
        /// Name of the offending field
        field: String,
        /// Rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// A requested resource does not exist
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Storage layer failure
    #[error("storage error: {message}")]
    Storage {
        /// Details from the underlying store
        message: String,
    },

    /// JSON (de)serialization failure
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Input failed structural validation
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// A numeric field fell outside its accepted range
    #[must_use]
    pub fn value_out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::ValueOutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// A requested resource does not exist
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Storage layer failure
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
