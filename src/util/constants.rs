// CohortQuery - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "CohortQuery";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "CohortQuery";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Record file format
// =============================================================================

/// Field separator in roster files.
pub const FIELD_DELIMITER: u8 = b'|';

/// Number of fields every record line must carry:
/// first name, last name, house, adviser, cohort tag.
pub const RECORD_FIELD_COUNT: usize = 5;

/// Cohort tag marking an instructor.
pub const INSTRUCTOR_TAG: &str = "I";

/// Cohort tag marking a ghost.
pub const GHOST_TAG: &str = "G";

/// Cohort name that disables cohort filtering in `students_by_cohort`.
pub const ALL_COHORTS: &str = "All";

// =============================================================================
// Houses
// =============================================================================

pub const HOUSE_DUMBLEDORES_ARMY: &str = "Dumbledore's Army";
pub const HOUSE_GRYFFINDOR: &str = "Gryffindor";
pub const HOUSE_HUFFLEPUFF: &str = "Hufflepuff";
pub const HOUSE_RAVENCLAW: &str = "Ravenclaw";
pub const HOUSE_SLYTHERIN: &str = "Slytherin";

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Query output goes to stdout, so the default stays quiet.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Roster file used when neither the CLI nor config names one.
pub const DEFAULT_DATA_FILE_NAME: &str = "cohort_data.txt";
