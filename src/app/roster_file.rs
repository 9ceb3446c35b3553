// CohortQuery - app/roster_file.rs
//
// File-path entry points for every roster query.
// Each call reads and parses the file once, then runs the query over the
// parsed records; nothing is cached between calls.

use crate::core::model::{DataRow, HouseRosters};
use crate::core::parser;
use crate::core::query::Roster;
use crate::platform::fs;
use crate::util::error::Result;
use std::collections::BTreeSet;
use std::path::Path;

/// Read and parse a roster file.
///
/// Errors: missing/unreadable file, invalid UTF-8, or any line without
/// exactly five fields.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let content = fs::read_roster_file(path)?;
    let records = parser::parse_content(&content, path)?;
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "Roster loaded"
    );
    Ok(Roster::new(records))
}

/// Distinct non-empty house names in the file.
pub fn all_houses(path: &Path) -> Result<BTreeSet<String>> {
    Ok(load_roster(path)?.all_houses())
}

/// Sorted student names, optionally restricted to one cohort.
///
/// Pass `constants::ALL_COHORTS` for every cohort.
pub fn students_by_cohort(path: &Path, cohort: &str) -> Result<Vec<String>> {
    Ok(load_roster(path)?.students_by_cohort(cohort))
}

pub fn all_names_by_house(path: &Path) -> Result<HouseRosters> {
    Ok(load_roster(path)?.all_names_by_house())
}

pub fn all_data(path: &Path) -> Result<Vec<DataRow>> {
    Ok(load_roster(path)?.all_data())
}

/// Cohort tag for `name` ("First Last"), or `None` when the name is
/// malformed or absent. File errors still propagate.
pub fn get_cohort_for(path: &Path, name: &str) -> Result<Option<String>> {
    Ok(load_roster(path)?.get_cohort_for(name).map(str::to_string))
}

pub fn find_duped_last_names(path: &Path) -> Result<Vec<String>> {
    Ok(load_roster(path)?.find_duped_last_names())
}

/// Housemates of `name`; see [`Roster::get_housemates_for`] for the
/// exclusion rule.
pub fn get_housemates_for(path: &Path, name: &str) -> Result<BTreeSet<String>> {
    Ok(load_roster(path)?.get_housemates_for(name))
}
