// CohortQuery - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use serde::Serialize;

// =============================================================================
// Cohort tag
// =============================================================================

/// The fifth field of a record: either a staff sentinel or a cohort label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CohortTag {
    /// Literal `I`.
    Instructor,
    /// Literal `G`.
    Ghost,
    /// Any other value, e.g. "Fall 2015".
    Cohort(String),
}

impl CohortTag {
    /// Classify a raw field value. Matching is exact and case-sensitive.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            constants::INSTRUCTOR_TAG => Self::Instructor,
            constants::GHOST_TAG => Self::Ghost,
            other => Self::Cohort(other.to_string()),
        }
    }

    /// The field value exactly as it appeared in the file.
    pub fn as_raw(&self) -> &str {
        match self {
            Self::Instructor => constants::INSTRUCTOR_TAG,
            Self::Ghost => constants::GHOST_TAG,
            Self::Cohort(name) => name,
        }
    }

    /// True for cohort labels, false for instructors and ghosts.
    pub fn is_student(&self) -> bool {
        matches!(self, Self::Cohort(_))
    }
}

impl std::fmt::Display for CohortTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_raw())
    }
}

// =============================================================================
// Record
// =============================================================================

/// One parsed line of a roster file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,

    /// Empty for ghosts and instructors.
    pub house: String,

    /// May be empty.
    pub adviser: String,

    pub cohort_tag: CohortTag,
}

impl Record {
    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Exact, case-sensitive match on both name parts.
    pub fn has_name(&self, first: &str, last: &str) -> bool {
        self.first_name == first && self.last_name == last
    }

    /// The roster slot this record falls into, if any.
    ///
    /// Instructor and ghost tags win over the house field; a student whose
    /// house is not one of the five known houses has no slot.
    pub fn roster_group(&self) -> Option<RosterGroup> {
        match self.cohort_tag {
            CohortTag::Instructor => Some(RosterGroup::Instructors),
            CohortTag::Ghost => Some(RosterGroup::Ghosts),
            CohortTag::Cohort(_) => RosterGroup::for_house(&self.house),
        }
    }
}

// =============================================================================
// Flattened row (all_data output)
// =============================================================================

/// A record flattened to `(full_name, house, adviser, cohort)` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataRow {
    pub full_name: String,
    pub house: String,
    pub adviser: String,
    /// Raw cohort tag, so instructors and ghosts show as `I` / `G`.
    pub cohort: String,
}

impl From<&Record> for DataRow {
    fn from(record: &Record) -> Self {
        Self {
            full_name: record.full_name(),
            house: record.house.clone(),
            adviser: record.adviser.clone(),
            cohort: record.cohort_tag.as_raw().to_string(),
        }
    }
}

// =============================================================================
// Roster groups
// =============================================================================

/// The seven fixed rosters produced by `all_names_by_house`, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RosterGroup {
    DumbledoresArmy,
    Gryffindor,
    Hufflepuff,
    Ravenclaw,
    Slytherin,
    Ghosts,
    Instructors,
}

impl RosterGroup {
    /// Number of roster groups.
    pub const COUNT: usize = 7;

    /// Returns all variants in output order.
    pub fn all() -> &'static [RosterGroup; Self::COUNT] {
        &[
            RosterGroup::DumbledoresArmy,
            RosterGroup::Gryffindor,
            RosterGroup::Hufflepuff,
            RosterGroup::Ravenclaw,
            RosterGroup::Slytherin,
            RosterGroup::Ghosts,
            RosterGroup::Instructors,
        ]
    }

    /// Position in the `all()` ordering.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map an exact house name to its group.
    pub fn for_house(house: &str) -> Option<Self> {
        match house {
            constants::HOUSE_DUMBLEDORES_ARMY => Some(Self::DumbledoresArmy),
            constants::HOUSE_GRYFFINDOR => Some(Self::Gryffindor),
            constants::HOUSE_HUFFLEPUFF => Some(Self::Hufflepuff),
            constants::HOUSE_RAVENCLAW => Some(Self::Ravenclaw),
            constants::HOUSE_SLYTHERIN => Some(Self::Slytherin),
            _ => None,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            RosterGroup::DumbledoresArmy => constants::HOUSE_DUMBLEDORES_ARMY,
            RosterGroup::Gryffindor => constants::HOUSE_GRYFFINDOR,
            RosterGroup::Hufflepuff => constants::HOUSE_HUFFLEPUFF,
            RosterGroup::Ravenclaw => constants::HOUSE_RAVENCLAW,
            RosterGroup::Slytherin => constants::HOUSE_SLYTHERIN,
            RosterGroup::Ghosts => "Ghosts",
            RosterGroup::Instructors => "Instructors",
        }
    }
}

impl std::fmt::Display for RosterGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Exactly seven name lists, one per `RosterGroup`, in `RosterGroup::all()` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseRosters {
    lists: [Vec<String>; RosterGroup::COUNT],
}

impl HouseRosters {
    pub(crate) fn push(&mut self, group: RosterGroup, name: String) {
        self.lists[group.index()].push(name);
    }

    pub(crate) fn sort_all(&mut self) {
        for list in &mut self.lists {
            list.sort();
        }
    }

    /// Names in one group.
    pub fn get(&self, group: RosterGroup) -> &[String] {
        &self.lists[group.index()]
    }

    /// Always `RosterGroup::COUNT`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Iterate `(group, names)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (RosterGroup, &[String])> {
        RosterGroup::all()
            .iter()
            .map(move |group| (*group, self.get(*group)))
    }

    /// The seven lists as plain vectors.
    pub fn into_lists(self) -> Vec<Vec<String>> {
        self.lists.into_iter().collect()
    }
}
