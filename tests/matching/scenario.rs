//! Worked scenarios with hand-computed scores.

use crate::common::{culture_catalog, sample_catalog};
use bidragsmatch::{match_project, MatchOptions};

#[test]
fn test_two_grant_scenario() {
    // "musikprojekt" is one token, so only "scen" hits Fond A: 1 of 2 keywords.
    let report = match_project(
        "Ett musikprojekt med scen och ljud.",
        "Ljudscen",
        &sample_catalog(),
        &MatchOptions::default(),
    );

    assert_eq!(report.project_title, "Ljudscen");
    assert_eq!(report.matches.len(), 2);

    let top = &report.matches[0];
    assert_eq!(top.grant_name, "Fond A");
    assert_eq!(top.score, 0.5);
    assert!(top.suggested_title.contains("Ljudscen"));
    assert!(top.suggested_title.contains("Fond A"));

    assert_eq!(report.matches[1].grant_name, "Fond B");
    assert_eq!(report.matches[1].score, 0.0);
}

#[test]
fn test_two_grant_scenario_with_whole_word() {
    let report = match_project(
        "Ett musik projekt med scen och ljud.",
        "Ljudscen",
        &sample_catalog(),
        &MatchOptions::default(),
    );
    assert_eq!(report.matches[0].grant_name, "Fond A");
    assert_eq!(report.matches[0].score, 1.0);
}

#[test]
fn test_demo_project_against_culture_catalog() {
    let text = "RymdenLive26 är ett experimentellt elektroniskt musikprojekt i Borås med \
        regional spridning. Projektet syftar till att skapa en hybrid konsertserie med \
        VR-streaming och interaktiv teknik. Det riktar sig till nya publikgrupper och \
        samverkar med regionala partners.";
    let report = match_project(
        text,
        "RymdenLive26 – Ljudstad Borås",
        &culture_catalog(),
        &MatchOptions::default(),
    );

    let names: Vec<&str> = report.matches.iter().map(|m| m.grant_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Innovationsfonden", "Region Västra Götaland", "Kulturrådet"]
    );

    // teknik, vr, interaktiv out of 4
    assert_eq!(report.matches[0].score, 0.75);
    // regional, borås out of 3
    assert_eq!(report.matches[1].score, 0.67);
    assert_eq!(report.matches[2].score, 0.0);
    assert_eq!(
        report.matches[0].suggested_title,
        "RymdenLive26 – Ljudstad Borås – ansökan till Innovationsfonden"
    );
}
