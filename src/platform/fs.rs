// CohortQuery - platform/fs.rs
//
// Filesystem access for roster files.

use crate::util::error::{CohortQueryError, ParseError};
use std::path::Path;

/// Read a roster file as strict UTF-8.
///
/// A missing or unreadable file is a `CohortQueryError::Io`; bytes that are
/// not valid UTF-8 are a `ParseError::InvalidEncoding`.
pub fn read_roster_file(path: &Path) -> Result<String, CohortQueryError> {
    let bytes = std::fs::read(path).map_err(|e| CohortQueryError::Io {
        path: path.to_path_buf(),
        operation: "read roster",
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Roster file read");

    String::from_utf8(bytes).map_err(|e| {
        ParseError::InvalidEncoding {
            file: path.to_path_buf(),
            source: e,
        }
        .into()
    })
}
