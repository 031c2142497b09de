// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Grant catalog loading.
//!
//! The catalog is a JSON array of grant objects. Loading is all-or-nothing:
//! the first record without a name fails the whole load, so a caller never
//! scores against a partially valid catalog.

pub mod record;

use std::fs;
use std::path::Path;

use crate::error::{MatchError, Result};
use crate::types::GrantRecord;

pub use record::RawGrantRecord;

/// Conventional catalog filename, used by the CLI when no path is given.
pub const DEFAULT_CATALOG_FILE: &str = "BidragsAI_database_v1.json";

/// Parse and validate a catalog from a JSON string.
pub fn parse_catalog(json: &str) -> Result<Vec<GrantRecord>> {
    let raw: Vec<RawGrantRecord> = serde_json::from_str(json)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect()
}

/// Read, parse and validate a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<GrantRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| MatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&content)
}
