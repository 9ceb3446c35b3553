// CohortQuery - core/parser.rs
//
// Pipe-delimited roster parsing.
// Core layer: accepts file content, never touches the filesystem directly.

use crate::core::model::{CohortTag, Record};
use crate::util::constants;
use crate::util::error::ParseError;
use std::path::Path;

/// Parse roster file content into records, preserving file order.
///
/// Every line must hold exactly `RECORD_FIELD_COUNT` fields separated by
/// `|`; a blank line counts as a one-field line and is rejected. A single
/// newline at the end of the content is not a line. Trailing whitespace on a line is dropped before the
/// last field is stored, so `\r\n` files parse the same as `\n` files.
/// Quote characters carry no meaning; `Dumbledore's Army` and `"Mad-Eye"`
/// are kept verbatim.
///
/// # Arguments
/// * `content` - File content as a string (the platform layer handles reading)
/// * `file_path` - Path to the source file (for error context only)
pub fn parse_content(content: &str, file_path: &Path) -> Result<Vec<Record>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(constants::FIELD_DELIMITER)
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    let mut lines_seen: u64 = 0;

    for result in reader.records() {
        let row = result.map_err(|e| ParseError::Csv {
            file: file_path.to_path_buf(),
            source: e,
        })?;
        let line_number = row.position().map_or(lines_seen + 1, |p| p.line());

        // The reader skips empty lines; a gap in line numbers is one.
        if line_number > lines_seen + 1 {
            return Err(blank_line(file_path, lines_seen + 1));
        }
        lines_seen = line_number;

        if row.len() != constants::RECORD_FIELD_COUNT {
            return Err(ParseError::FieldCount {
                file: file_path.to_path_buf(),
                line_number,
                found: row.len(),
                expected: constants::RECORD_FIELD_COUNT,
            });
        }

        records.push(Record {
            first_name: row[0].to_string(),
            last_name: row[1].to_string(),
            house: row[2].to_string(),
            adviser: row[3].to_string(),
            cohort_tag: CohortTag::from_raw(row[4].trim_end()),
        });
    }

    // Blank lines after the last record never reach the reader loop.
    if content.lines().count() as u64 > lines_seen {
        return Err(blank_line(file_path, lines_seen + 1));
    }

    tracing::debug!(
        file = %file_path.display(),
        records = records.len(),
        lines = lines_seen,
        "Parsing complete"
    );

    Ok(records)
}

fn blank_line(file_path: &Path, line_number: u64) -> ParseError {
    ParseError::FieldCount {
        file: file_path.to_path_buf(),
        line_number,
        found: 1,
        expected: constants::RECORD_FIELD_COUNT,
    }
}
