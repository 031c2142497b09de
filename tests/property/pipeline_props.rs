//! Ranking, truncation and determinism of the full pipeline.

use crate::common::assert_ranked;
use crate::strategies::{catalog_strategy, text_strategy};
use bidragsmatch::{match_project, Locale, MatchOptions, DEFAULT_TOP_K};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// Property: shortlist scores never increase.
    #[test]
    fn prop_ranking_monotonic(text in text_strategy(), catalog in catalog_strategy()) {
        let report = match_project(&text, "P", &catalog, &MatchOptions::default());
        assert_ranked(&report);
    }

    /// Property: shortlist length is min(K, catalog size).
    #[test]
    fn prop_truncation(text in text_strategy(), catalog in catalog_strategy(), k in 0usize..6) {
        let options = MatchOptions { top_k: k, ..MatchOptions::default() };
        let report = match_project(&text, "P", &catalog, &options);
        prop_assert_eq!(report.matches.len(), k.min(catalog.len()));

        let default_report = match_project(&text, "P", &catalog, &MatchOptions::default());
        prop_assert_eq!(default_report.matches.len(), DEFAULT_TOP_K.min(catalog.len()));
    }

    /// Property: identical inputs give byte-identical JSON.
    #[test]
    fn prop_idempotent(text in text_strategy(), catalog in catalog_strategy()) {
        let first = serde_json::to_string(
            &match_project(&text, "P", &catalog, &MatchOptions::default())
        ).unwrap();
        let second = serde_json::to_string(
            &match_project(&text, "P", &catalog, &MatchOptions::default())
        ).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: every suggestion names both the project and the grant.
    #[test]
    fn prop_titles_mention_project_and_grant(
        text in text_strategy(),
        catalog in catalog_strategy(),
        title in "[A-Za-z0-9 ]{0,20}",
        english in any::<bool>()
    ) {
        let locale = if english { Locale::En } else { Locale::Sv };
        let options = MatchOptions { locale, ..MatchOptions::default() };
        let report = match_project(&text, &title, &catalog, &options);
        prop_assert_eq!(&report.project_title, &title);
        for m in &report.matches {
            prop_assert!(m.suggested_title.starts_with(title.as_str()));
            prop_assert!(m.suggested_title.ends_with(m.grant_name.as_str()));
            prop_assert!(m.suggested_title.contains(locale.application_phrase()));
        }
    }

    /// Property: reported scores carry at most two decimals.
    #[test]
    fn prop_scores_rounded(text in text_strategy(), catalog in catalog_strategy()) {
        let report = match_project(&text, "P", &catalog, &MatchOptions::default());
        for m in &report.matches {
            let scaled = m.score * 100.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-6, "score {} not rounded", m.score);
        }
    }
}
