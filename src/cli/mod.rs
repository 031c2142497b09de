// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bidragsmatch command-line interface.
//!
//! Three subcommands: `match` to rank a catalog against a project
//! description, `inspect` to review a catalog's keywords, and `example` to run
//! the bundled demo project.

pub mod display;

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use bidragsmatch::{Locale, DEFAULT_CATALOG_FILE, DEFAULT_TOP_K};
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "bidragsmatch",
    about = "Match project descriptions against grant catalogs",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank grants in a catalog against a project description
    Match {
        /// Project title used in the suggested application titles
        #[arg(short, long)]
        title: String,

        /// Project description text
        #[arg(long, conflicts_with = "text_file")]
        text: Option<String>,

        /// Read the project description from a file
        ///
        /// If neither --text nor --text-file is given, the description is
        /// read from stdin.
        #[arg(long)]
        text_file: Option<String>,

        /// Path to the grant catalog (JSON array of grants)
        #[arg(short, long, default_value = DEFAULT_CATALOG_FILE)]
        database: String,

        /// Number of grants to return
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_K)]
        top: usize,

        /// Language of suggested titles (sv or en)
        #[arg(long, default_value_t = Locale::Sv)]
        locale: Locale,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the grants in a catalog and flag keywords that can never match
    Inspect {
        /// Path to the grant catalog
        #[arg(short, long, default_value = DEFAULT_CATALOG_FILE)]
        database: String,
    },

    /// Run the bundled demo project against a catalog
    Example {
        /// Path to the grant catalog
        #[arg(short, long, default_value = DEFAULT_CATALOG_FILE)]
        database: String,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Resolve the project description: `--text`, then `--text-file`, then `stdin`.
///
/// Empty text is valid input on every path; it simply scores every grant 0.
pub fn read_project_text(
    text: Option<String>,
    text_file: Option<String>,
    mut stdin: impl Read,
) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = text_file {
        debug!(path = %path, "reading project text from file");
        return fs::read_to_string(&path)
            .with_context(|| format!("failed to read project text from {}", path));
    }

    debug!("reading project text from stdin");
    let mut raw = String::new();
    stdin
        .read_to_string(&mut raw)
        .context("failed to read project text from stdin")?;
    Ok(raw)
}
