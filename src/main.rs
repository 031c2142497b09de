// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bidragsmatch::{load_catalog, match_project, GrantRecord, MatchOptions, MatchReport};

mod cli;
use cli::{display, read_project_text, Cli, Commands};

/// Demo project run by `bidragsmatch example`.
const EXAMPLE_TITLE: &str = "RymdenLive26 – Ljudstad Borås";
const EXAMPLE_TEXT: &str = "RymdenLive26 är ett experimentellt elektroniskt musikprojekt i Borås \
    med regional spridning. Projektet syftar till att skapa en hybrid konsertserie med \
    VR-streaming och interaktiv teknik. Det riktar sig till nya publikgrupper och samverkar \
    med regionala partners.";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for `--json`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "bidragsmatch=warn",
        1 => "bidragsmatch=debug",
        _ => "bidragsmatch=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Match {
            title,
            text,
            text_file,
            database,
            top,
            locale,
            json,
        } => {
            let text = read_project_text(text, text_file, std::io::stdin().lock())?;
            let grants = load(&database)?;
            let options = MatchOptions { top_k: top, locale };
            let report = match_project(&text, &title, &grants, &options);
            info!(matches = report.matches.len(), "matching complete");
            emit(&report, json)
        }
        Commands::Inspect { database } => {
            let grants = load(&database)?;
            display::print_catalog(&grants);
            Ok(())
        }
        Commands::Example { database, json } => {
            let grants = load(&database)?;
            let report = match_project(
                EXAMPLE_TEXT,
                EXAMPLE_TITLE,
                &grants,
                &MatchOptions::default(),
            );
            emit(&report, json)
        }
    }
}

fn load(database: &str) -> Result<Vec<GrantRecord>> {
    debug!(path = database, "loading catalog");
    let grants =
        load_catalog(database).with_context(|| format!("could not load catalog {}", database))?;
    info!(grants = grants.len(), path = database, "catalog loaded");
    Ok(grants)
}

fn emit(report: &MatchReport, json: bool) -> Result<()> {
    if json {
        let serialized =
            serde_json::to_string_pretty(report).context("failed to serialize report")?;
        println!("{}", serialized);
    } else {
        display::print_report(report);
    }
    Ok(())
}
