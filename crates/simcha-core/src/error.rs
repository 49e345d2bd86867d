// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Simcha catalog.
//!
//! Data-quality findings (missing fields, dangling references, duplicates,
//! overbooked slots) are never errors: they are collected into an integrity
//! report. This type covers execution failures only.

use thiserror::Error;

/// The primary error type used across the Simcha workspace.
#[derive(Debug, Error)]
pub enum SimchaError {
    /// The configuration could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// A dataset snapshot could not be read.
    #[error("failed to read dataset {path}: {source}")]
    Dataset {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A value could not be serialized or deserialized.
    #[error("serialization error: {source}")]
    Serialization {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A record looked up by id does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },
}

impl From<serde_json::Error> for SimchaError {
    fn from(err: serde_json::Error) -> Self {
        SimchaError::Serialization {
            source: Box::new(err),
        }
    }
}
