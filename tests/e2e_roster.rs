// CohortQuery - tests/e2e_roster.rs
//
// End-to-end tests for the file-path query entry points.
//
// These tests exercise the real filesystem, the real delimited reader and
// the real query layer: a roster file on disk in, query results out.

use cohortquery::app::roster_file;
use cohortquery::core::model::RosterGroup;
use cohortquery::util::constants::ALL_COHORTS;
use cohortquery::util::error::{CohortQueryError, ParseError};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture roster.
fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("cohort_data.txt")
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Queries over the fixture
// =============================================================================

#[test]
fn e2e_all_houses() {
    let houses = roster_file::all_houses(&fixture()).unwrap();
    assert_eq!(
        houses,
        set(&[
            "Dumbledore's Army",
            "Gryffindor",
            "Hufflepuff",
            "Ravenclaw",
            "Slytherin"
        ])
    );
    assert!(houses.iter().all(|h| !h.is_empty()));
}

#[test]
fn e2e_students_all_cohorts() {
    let names = roster_file::students_by_cohort(&fixture(), ALL_COHORTS).unwrap();
    assert_eq!(names.len(), 21);
    assert_eq!(names.first().map(String::as_str), Some("Adrian Pucey"));
    assert_eq!(names.last().map(String::as_str), Some("Zacharias Smith"));
    assert!(names.windows(2).all(|w| w[0] <= w[1]), "not sorted: {names:?}");
    for staff in ["Severus Snape", "Moaning Myrtle", "Filius Flitwick"] {
        assert!(!names.iter().any(|n| n == staff), "{staff} listed as student");
    }
}

#[test]
fn e2e_students_per_cohort() {
    let fall = roster_file::students_by_cohort(&fixture(), "Fall 2015").unwrap();
    assert_eq!(
        fall,
        vec![
            "Angelina Johnson",
            "Cho Chang",
            "Harry Potter",
            "Hermione Granger",
            "Ron Weasley",
            "Seamus Finnigan",
            "Theodore Nott",
        ]
    );

    let spring = roster_file::students_by_cohort(&fixture(), "Spring 2016").unwrap();
    assert_eq!(
        spring,
        vec![
            "Colin Creevey",
            "Dennis Creevey",
            "Parvati Patil",
            "Zacharias Smith"
        ]
    );

    let none = roster_file::students_by_cohort(&fixture(), "Autumn 1991").unwrap();
    assert!(none.is_empty());
}

#[test]
fn e2e_all_names_by_house() {
    let rosters = roster_file::all_names_by_house(&fixture()).unwrap();
    assert_eq!(rosters.len(), 7);

    assert_eq!(
        rosters.get(RosterGroup::DumbledoresArmy),
        &["Fred Weasley", "Luna Lovegood", "Neville Longbottom"]
    );
    assert_eq!(rosters.get(RosterGroup::Gryffindor).len(), 9);
    assert_eq!(
        rosters.get(RosterGroup::Ghosts),
        &["Bloody Baron", "Fat Friar", "Moaning Myrtle"]
    );
    assert_eq!(
        rosters.get(RosterGroup::Instructors),
        &[
            "Filius Flitwick",
            "Minerva McGonagall",
            "Pomona Sprout",
            "Severus Snape"
        ]
    );

    for (group, names) in rosters.iter() {
        assert!(
            names.windows(2).all(|w| w[0] <= w[1]),
            "{group} not sorted: {names:?}"
        );
    }

    let lists = rosters.into_lists();
    assert_eq!(lists.len(), 7);
    assert_eq!(lists[0][0], "Fred Weasley");
    assert_eq!(lists[6][3], "Severus Snape");
}

#[test]
fn e2e_all_data_in_file_order() {
    let rows = roster_file::all_data(&fixture()).unwrap();
    assert_eq!(rows.len(), 28);
    assert_eq!(rows[0].full_name, "Harry Potter");
    assert_eq!(rows[0].house, "Gryffindor");
    assert_eq!(rows[0].adviser, "McGonagall");
    assert_eq!(rows[0].cohort, "Fall 2015");
    assert_eq!(rows[27].full_name, "Bloody Baron");
    assert_eq!(rows[27].house, "");
    assert_eq!(rows[27].cohort, "G");
}

#[test]
fn e2e_get_cohort_for() {
    let path = fixture();
    assert_eq!(
        roster_file::get_cohort_for(&path, "Harry Potter").unwrap().as_deref(),
        Some("Fall 2015")
    );
    assert_eq!(
        roster_file::get_cohort_for(&path, "Hannah Abbott").unwrap().as_deref(),
        Some("Winter 2016")
    );
    assert_eq!(roster_file::get_cohort_for(&path, "Unknown Person").unwrap(), None);
    assert_eq!(roster_file::get_cohort_for(&path, "Someone").unwrap(), None);
}

#[test]
fn e2e_find_duped_last_names() {
    let dupes = roster_file::find_duped_last_names(&fixture()).unwrap();
    assert_eq!(dupes, vec!["Weasley", "Creevey", "Patil"]);
}

#[test]
fn e2e_get_housemates_for() {
    let path = fixture();
    let mates = roster_file::get_housemates_for(&path, "Hermione Granger").unwrap();
    assert_eq!(
        mates,
        set(&[
            "Angelina Johnson",
            "Harry Potter",
            "Ron Weasley",
            "Seamus Finnigan"
        ])
    );

    // Dennis shares Colin's surname and is left out with him.
    let mates = roster_file::get_housemates_for(&path, "Colin Creevey").unwrap();
    assert_eq!(mates, set(&["Parvati Patil"]));

    assert!(roster_file::get_housemates_for(&path, "Unknown Person")
        .unwrap()
        .is_empty());
}

#[test]
fn e2e_housemates_never_include_the_student() {
    let path = fixture();
    for name in roster_file::students_by_cohort(&path, ALL_COHORTS).unwrap() {
        let mates = roster_file::get_housemates_for(&path, &name).unwrap();
        assert!(!mates.contains(&name), "{name} is their own housemate");
    }
}

// =============================================================================
// Error paths
// =============================================================================

#[test]
fn e2e_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = roster_file::all_houses(&dir.path().join("absent.txt"));
    assert!(
        matches!(result, Err(CohortQueryError::Io { .. })),
        "expected Io, got {result:?}"
    );
}

#[test]
fn e2e_missing_file_is_fatal_even_for_cohort_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let result = roster_file::get_cohort_for(&dir.path().join("absent.txt"), "Harry Potter");
    assert!(result.is_err());
}

#[test]
fn e2e_malformed_line_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    fs::write(
        &path,
        "Harry|Potter|Gryffindor|McGonagall|Fall 2015\n\
         Ron|Weasley|Gryffindor\n\
         Cho|Chang|Ravenclaw|Flitwick|Fall 2015\n",
    )
    .unwrap();

    let err = roster_file::students_by_cohort(&path, ALL_COHORTS).unwrap_err();
    match err {
        CohortQueryError::Parse(ParseError::FieldCount {
            line_number, found, ..
        }) => {
            assert_eq!(line_number, 2);
            assert_eq!(found, 3);
        }
        other => panic!("expected FieldCount, got {other:?}"),
    }
}

#[test]
fn e2e_blank_line_mid_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gap.txt");
    fs::write(
        &path,
        "Harry|Potter|Gryffindor|McGonagall|Fall 2015\n\
         \n\
         Cho|Chang|Ravenclaw|Flitwick|Fall 2015\n",
    )
    .unwrap();

    let err = roster_file::all_houses(&path).unwrap_err();
    match err {
        CohortQueryError::Parse(ParseError::FieldCount {
            line_number, found, ..
        }) => {
            assert_eq!(line_number, 2);
            assert_eq!(found, 1);
        }
        other => panic!("expected FieldCount, got {other:?}"),
    }
}

#[test]
fn e2e_windows_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crlf.txt");
    fs::write(
        &path,
        "Harry|Potter|Gryffindor|McGonagall|Fall 2015\r\nSeverus|Snape|||I\r\n",
    )
    .unwrap();

    assert_eq!(
        roster_file::get_cohort_for(&path, "Harry Potter").unwrap().as_deref(),
        Some("Fall 2015")
    );
    let rosters = roster_file::all_names_by_house(&path).unwrap();
    assert_eq!(rosters.get(RosterGroup::Instructors), &["Severus Snape"]);
}
