//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use bidragsmatch::{GrantRecord, MatchReport};
use std::path::PathBuf;

// Re-export canonical test utilities from bidragsmatch::testing
pub use bidragsmatch::testing::{catalog_json, make_grant, sample_catalog};

/// Directory containing catalog fixtures.
pub const FIXTURES_DIR: &str = "data/fixtures";

/// Path to a catalog fixture, relative to the crate root.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(FIXTURES_DIR)
        .join(name)
}

/// A catalog shaped like the real one: culture, science and regional grants.
pub fn culture_catalog() -> Vec<GrantRecord> {
    vec![
        make_grant("Kulturrådet", &["kultur", "musik", "scen", "konsert"]),
        make_grant("Vetenskapsrådet", &["forskning", "vetenskap"]),
        make_grant("Region Västra Götaland", &["regional", "borås", "samverkan"]),
        make_grant("Innovationsfonden", &["teknik", "innovation", "vr", "interaktiv"]),
        make_grant("Tom fond", &[]),
    ]
}

/// Assert scores never increase along the shortlist.
pub fn assert_ranked(report: &MatchReport) {
    for pair in report.matches.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "ranking not monotonic: {} ({}) before {} ({})",
            pair[0].grant_name,
            pair[0].score,
            pair[1].grant_name,
            pair[1].score
        );
    }
}
