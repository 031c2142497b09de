// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how grants get their numbers.
//!
//! A grant's score is the fraction of its keywords found in the project text,
//! weighted by how often each one occurs. Ranking is a stable sort on that
//! score, so catalog order breaks ties.

mod core;
pub mod ranking;

pub use self::core::*;
