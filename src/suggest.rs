// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Application title suggestions.
//!
//! A fixed template per locale: `"{project} – {phrase} {grant}"`. Inputs are
//! opaque; nothing is trimmed or validated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between project title and the rest of the suggestion (en dash).
pub const TITLE_SEPARATOR: &str = " – ";

/// Language of the generated title phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// "ansökan till"
    #[default]
    Sv,
    /// "application to"
    En,
}

impl Locale {
    pub fn application_phrase(self) -> &'static str {
        match self {
            Locale::Sv => "ansökan till",
            Locale::En => "application to",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Sv => f.write_str("sv"),
            Locale::En => f.write_str("en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sv" | "se" | "swedish" | "svenska" => Ok(Locale::Sv),
            "en" | "english" => Ok(Locale::En),
            other => Err(format!("unknown locale '{}' (expected sv or en)", other)),
        }
    }
}

/// Build the suggested application title for one grant.
pub fn suggest_title(grant_name: &str, project_title: &str, locale: Locale) -> String {
    format!(
        "{}{}{} {}",
        project_title,
        TITLE_SEPARATOR,
        locale.application_phrase(),
        grant_name
    )
}
