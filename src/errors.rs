// ABOUTME: Error taxonomy for table lookups, schema resolution, and cluster prediction
// ABOUTME: Defines AdvisorError with structured variants and the AdvisorResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project

use std::io;

/// Result alias used throughout the crate
pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Common error types for nutrient table and model operations
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// The named ingredient is absent from the nutrient table
    #[error("No data for ingredient '{name}'")]
    IngredientNotFound {
        /// Name that failed to resolve
        name: String,
    },

    /// An expected column is absent or unusable
    #[error("Invalid schema for {entity}: {reason}")]
    Schema {
        /// Entity whose schema is invalid (table or model artifact)
        entity: &'static str,
        /// Reason why the schema is invalid
        reason: String,
    },

    /// Cluster model transform or predict failed
    #[error("Cluster prediction failed: {reason}")]
    Prediction {
        /// Description of the model failure
        reason: String,
    },

    /// Fewer ingredients resolved than the operation requires
    #[error("Not enough ingredients resolved: {} of {required} required", .resolved.len())]
    InsufficientData {
        /// Names that resolved against the table
        resolved: Vec<String>,
        /// Names that did not resolve
        missing: Vec<String>,
        /// Minimum number of resolved names required
        required: usize,
    },

    /// A data file could not be read
    #[error("Failed to read {path}")]
    Storage {
        /// Path that failed to load
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A data file or cell has an unparseable format
    #[error("Invalid {context}: {reason}")]
    InvalidFormat {
        /// What was being parsed
        context: &'static str,
        /// Reason parsing failed
        reason: String,
    },

    /// Model artifact deserialization failed
    #[error("Invalid model artifact {path}")]
    ModelFormat {
        /// Path of the artifact
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
