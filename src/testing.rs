// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::GrantRecord;

/// Create a grant with the given keywords.
pub fn make_grant(name: &str, keywords: &[&str]) -> GrantRecord {
    GrantRecord::new(name, keywords)
}

/// The two-grant catalog used in the README scenario.
pub fn sample_catalog() -> Vec<GrantRecord> {
    vec![
        make_grant("Fond A", &["musik", "scen"]),
        make_grant("Fond B", &["vetenskap"]),
    ]
}

/// Render grants as catalog JSON, the way they would be stored on disk.
pub fn catalog_json(grants: &[GrantRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(grants)
}
