// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored grants get sorted.
//!
//! Sort order is score descending. Equal scores keep their catalog order
//! (`sort_by` is stable), so the first grant listed in the database wins a tie.

use crate::types::MatchResult;
use std::cmp::Ordering;

/// Compare two results for ranking: higher score first.
///
/// Scores are finite by construction; `partial_cmp` falling through to
/// `Equal` only matters for NaN, which would keep input order.
pub fn compare_matches(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Sort all results, best first.
pub fn rank_matches(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(compare_matches);
    results
}

/// Sort and keep the best `k`.
pub fn top_matches(results: Vec<MatchResult>, k: usize) -> Vec<MatchResult> {
    let mut ranked = rank_matches(results);
    ranked.truncate(k);
    ranked
}
