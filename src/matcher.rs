// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The full pipeline: tokenize → score → rank → suggest.
//!
//! ```text
//! project text ──▶ tokenize ──▶ TokenCounts ─┐
//!                                             ├──▶ MatchResult per grant
//! catalog ────────────────────────────────────┘          │
//!                                                        ▼
//!                          MatchReport ◀── suggest ◀── rank + top K
//! ```
//!
//! Every call is independent. The catalog is only borrowed, so one loaded
//! catalog can serve any number of calls.

use std::path::Path;

use crate::catalog::load_catalog;
use crate::error::Result;
use crate::scoring::ranking::top_matches;
use crate::scoring::{compute_scores, DEFAULT_TOP_K, SCORE_DECIMALS};
use crate::suggest::{suggest_title, Locale};
use crate::types::{GrantRecord, MatchReport, SuggestedApplication};
use crate::utils::round_to;

/// Knobs for a matching run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Shortlist length.
    pub top_k: usize,
    /// Language of the suggested titles.
    pub locale: Locale,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            locale: Locale::default(),
        }
    }
}

/// Match a project against an already loaded catalog.
///
/// Returns `min(top_k, grants.len())` entries, best first. Grants that share
/// a score stay in catalog order.
pub fn match_project(
    project_text: &str,
    project_title: &str,
    grants: &[GrantRecord],
    options: &MatchOptions,
) -> MatchReport {
    let scored = compute_scores(project_text, grants);
    let matches = top_matches(scored, options.top_k)
        .into_iter()
        .map(|m| SuggestedApplication {
            suggested_title: suggest_title(&m.grant_name, project_title, options.locale),
            score: round_to(m.score, SCORE_DECIMALS),
            grant_name: m.grant_name,
        })
        .collect();

    MatchReport {
        project_title: project_title.to_string(),
        matches,
    }
}

/// Load a catalog file and match a project against it.
///
/// Load and schema errors are returned before any scoring happens.
pub fn match_project_from_path(
    project_text: &str,
    project_title: &str,
    catalog_path: impl AsRef<Path>,
    options: &MatchOptions,
) -> Result<MatchReport> {
    let grants = load_catalog(catalog_path)?;
    Ok(match_project(project_text, project_title, &grants, options))
}
