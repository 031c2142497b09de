// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types for grant matching.
//!
//! Everything here is plain data. A [`GrantRecord`] comes out of the catalog
//! loader already validated, a [`MatchResult`] is what scoring produces, and a
//! [`MatchReport`] is what callers get back from the pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry in the grant catalog.
///
/// Construct these through [`crate::load_catalog`] / [`crate::parse_catalog`]
/// (which validate the raw JSON) or directly in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRecord {
    /// Display name, unique within a catalog.
    pub name: String,
    /// Keywords in catalog order. May be empty.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl GrantRecord {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

/// Lowercase token → number of occurrences in the project text.
pub type TokenCounts = HashMap<String, usize>;

/// A grant name paired with its raw (unrounded) score.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub grant_name: String,
    /// Finite and non-negative. Unbounded above.
    pub score: f64,
}

/// One line of the final shortlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedApplication {
    #[serde(alias = "fond")]
    pub grant_name: String,
    /// Score rounded to two decimals.
    #[serde(alias = "poäng")]
    pub score: f64,
    #[serde(alias = "rubrikförslag")]
    pub suggested_title: String,
}

/// Output of a full matching run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    #[serde(alias = "projekt")]
    pub project_title: String,
    #[serde(alias = "matchningar")]
    pub matches: Vec<SuggestedApplication>,
}
