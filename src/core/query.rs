// CohortQuery - core/query.rs
//
// Roster queries over a parsed record list.
// The file is parsed once into a `Roster`; every query is a filter over it.
// Core layer: pure logic, no I/O.

use crate::core::model::{DataRow, HouseRosters, Record};
use crate::util::constants;
use std::collections::{BTreeSet, HashSet};

/// An in-memory roster: the records of one file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct non-empty house names.
    pub fn all_houses(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .filter(|r| !r.house.is_empty())
            .map(|r| r.house.clone())
            .collect()
    }

    /// Full names of students (not instructors or ghosts), sorted.
    ///
    /// `cohort` is matched exactly against the cohort tag; `ALL_COHORTS`
    /// ("All") disables the filter.
    pub fn students_by_cohort(&self, cohort: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .records
            .iter()
            .filter(|r| r.cohort_tag.is_student())
            .filter(|r| cohort == constants::ALL_COHORTS || r.cohort_tag.as_raw() == cohort)
            .map(Record::full_name)
            .collect();
        names.sort();
        names
    }

    /// Seven sorted rosters: the five houses, then ghosts, then instructors.
    pub fn all_names_by_house(&self) -> HouseRosters {
        let mut rosters = HouseRosters::default();
        for record in &self.records {
            if let Some(group) = record.roster_group() {
                rosters.push(group, record.full_name());
            }
        }
        rosters.sort_all();
        rosters
    }

    /// Every record flattened to `(full_name, house, adviser, cohort)`, in file order.
    pub fn all_data(&self) -> Vec<DataRow> {
        self.records.iter().map(DataRow::from).collect()
    }

    /// Cohort tag of the first record named `name`.
    ///
    /// `name` must be exactly two whitespace-separated words; anything else
    /// yields `None`, as does a name not in the file.
    pub fn get_cohort_for(&self, name: &str) -> Option<&str> {
        let (first, last) = split_full_name(name)?;
        self.find(first, last).map(|r| r.cohort_tag.as_raw())
    }

    /// Last names carried by two or more records.
    ///
    /// Each surname appears once, in the order its second occurrence is
    /// reached in the file.
    pub fn find_duped_last_names(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut duped: Vec<String> = Vec::new();
        for record in &self.records {
            let last = record.last_name.as_str();
            if !seen.insert(last) && !duped.iter().any(|d| d == last) {
                duped.push(last.to_string());
            }
        }
        duped
    }

    /// Records sharing both house and cohort tag with the student named `name`.
    ///
    /// A candidate is only kept when its first name AND its last name both
    /// differ from the target's, so siblings and namesakes in the same house
    /// and cohort are left out along with the target. An unknown or malformed
    /// name yields an empty set.
    pub fn get_housemates_for(&self, name: &str) -> BTreeSet<String> {
        let Some((first, last)) = split_full_name(name) else {
            tracing::debug!(name, "Housemate lookup: name is not two words");
            return BTreeSet::new();
        };
        let Some(target) = self.find(first, last) else {
            tracing::debug!(name, "Housemate lookup: no such person");
            return BTreeSet::new();
        };

        self.records
            .iter()
            .filter(|r| r.house == target.house && r.cohort_tag == target.cohort_tag)
            .filter(|r| r.first_name != target.first_name && r.last_name != target.last_name)
            .map(Record::full_name)
            .collect()
    }

    fn find(&self, first: &str, last: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.has_name(first, last))
    }
}

/// Split "First Last" into its two parts. Any other word count is `None`.
fn split_full_name(name: &str) -> Option<(&str, &str)> {
    let mut parts = name.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(last), None) => Some((first, last)),
        _ => None,
    }
}
