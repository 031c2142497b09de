// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.
//!
//! Tokenization is deliberately dumb: lowercase, then keep maximal runs of
//! word characters. No stemming, no stop words, no diacritic folding. A
//! keyword matches only if it is spelled exactly like a token.

use crate::types::TokenCounts;

/// Word characters: Unicode letters, digits and underscore.
///
/// Everything else (whitespace, punctuation, dashes, symbols) separates tokens
/// and is dropped.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into lowercase word tokens.
///
/// - "Ett musikprojekt, med scen!" → `["ett", "musikprojekt", "med", "scen"]`
/// - "VR-streaming" → `["vr", "streaming"]`
/// - "" → `[]`
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count token occurrences.
pub fn count_tokens(tokens: &[String]) -> TokenCounts {
    let mut counts = TokenCounts::with_capacity(tokens.len());
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// A keyword that cannot ever equal a single token.
///
/// True for empty keywords and keywords containing separators, e.g.
/// "street art" or "vr-teknik".
pub fn is_unmatchable_keyword(keyword: &str) -> bool {
    keyword.is_empty() || !keyword.chars().all(is_word_char)
}
