// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword-overlap matching of project descriptions against grant catalogs.
//!
//! Give it a free-text project description and a catalog of funding programs;
//! get back the best-matching programs with a suggested application title
//! for each.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌──────────────┐   ┌─────────────┐
//! │  utils.rs   │──▶│  scoring/    │──▶│  scoring/    │──▶│ suggest.rs  │
//! │ (tokenize)  │   │  core.rs     │   │  ranking.rs  │   │ (titles)    │
//! └─────────────┘   └──────────────┘   └──────────────┘   └─────────────┘
//!        ▲                  ▲                                    │
//!        │           ┌──────────────┐                            ▼
//!   project text     │  catalog/    │                     ┌─────────────┐
//!                    │ (load JSON)  │                     │ matcher.rs  │
//!                    └──────────────┘                     │ MatchReport │
//!                                                         └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use bidragsmatch::{match_project, GrantRecord, MatchOptions};
//!
//! let catalog = vec![
//!     GrantRecord::new("Fond A", &["musik", "scen"]),
//!     GrantRecord::new("Fond B", &["vetenskap"]),
//! ];
//! let report = match_project("Musik på scen", "Konsert", &catalog, &MatchOptions::default());
//!
//! assert_eq!(report.matches[0].grant_name, "Fond A");
//! assert_eq!(report.matches[0].suggested_title, "Konsert – ansökan till Fond A");
//! ```

pub mod catalog;
mod error;
mod matcher;
mod scoring;
mod suggest;
pub mod testing;
mod types;
mod utils;

pub use catalog::{load_catalog, parse_catalog, RawGrantRecord, DEFAULT_CATALOG_FILE};
pub use error::{MatchError, Result};
pub use matcher::{match_project, match_project_from_path, MatchOptions};
pub use scoring::ranking::{compare_matches, rank_matches, top_matches};
pub use scoring::{
    compute_scores, keyword_overlap, normalized_score, score_grant, DEFAULT_TOP_K,
    SCORE_DECIMALS, SCORE_EPSILON,
};
pub use suggest::{suggest_title, Locale, TITLE_SEPARATOR};
pub use types::{GrantRecord, MatchReport, MatchResult, SuggestedApplication, TokenCounts};
pub use utils::{count_tokens, is_unmatchable_keyword, is_word_char, round_to, tokenize};
