// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for catalog loading.
//!
//! Scoring itself cannot fail. Everything that can go wrong happens while
//! turning a file into `GrantRecord`s, and it is reported before any scoring
//! starts.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the matching pipeline.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON, or not an array of objects.
    #[error("invalid catalog JSON: {0}")]
    DataLoad(#[from] serde_json::Error),

    /// A record is missing a required field.
    #[error("grant record {index}: missing required field '{field}'")]
    Schema { index: usize, field: &'static str },
}

impl MatchError {
    /// True for file and JSON failures, false for schema violations.
    pub fn is_data_load(&self) -> bool {
        matches!(self, MatchError::Io { .. } | MatchError::DataLoad(_))
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, MatchError::Schema { .. })
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
