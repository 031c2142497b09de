// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind grant scoring.
//!
//! ```text
//! overlap = Σ  count(project_tokens, lowercase(keyword))
//!          keywords
//!
//! score   = overlap / (keyword_count + SCORE_EPSILON)
//! ```
//!
//! A keyword is looked up as a whole token, never as a substring, so "musik"
//! does not match "musikprojekt" and "street art" matches nothing at all.
//! Repeated keywords in the text push the score above 1.0; there is no cap.

use crate::types::{GrantRecord, MatchResult, TokenCounts};
use crate::utils::{count_tokens, tokenize};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Added to the keyword count so grants without keywords score 0 instead of
/// dividing by zero.
pub const SCORE_EPSILON: f64 = 1e-9;

/// Shortlist length used when nothing else is configured.
pub const DEFAULT_TOP_K: usize = 3;

/// Decimal places kept in reported scores.
pub const SCORE_DECIMALS: i32 = 2;

/// Sum of project token counts for each of the grant's keywords.
///
/// Keywords are lowercased before lookup. Duplicate keywords count twice.
pub fn keyword_overlap(counts: &TokenCounts, keywords: &[String]) -> usize {
    keywords
        .iter()
        .map(|kw| counts.get(&kw.to_lowercase()).copied().unwrap_or(0))
        .sum()
}

/// Normalize an overlap by the number of keywords.
pub fn normalized_score(overlap: usize, keyword_count: usize) -> f64 {
    overlap as f64 / (keyword_count as f64 + SCORE_EPSILON)
}

/// Score one grant against pre-counted project tokens.
pub fn score_grant(counts: &TokenCounts, grant: &GrantRecord) -> f64 {
    let overlap = keyword_overlap(counts, &grant.keywords);
    normalized_score(overlap, grant.keywords.len())
}

/// Score every grant against the project text, in catalog order.
///
/// The text is tokenized once; each grant is then a hash lookup per keyword.
pub fn compute_scores(project_text: &str, grants: &[GrantRecord]) -> Vec<MatchResult> {
    let counts = count_tokens(&tokenize(project_text));
    grants
        .iter()
        .map(|grant| MatchResult {
            grant_name: grant.name.clone(),
            score: score_grant(&counts, grant),
        })
        .collect()
}
