// CohortQuery - core/export.rs
//
// CSV and JSON export of flattened roster rows.
// Core layer: writes to any Write trait object.

use crate::core::model::DataRow;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export rows to CSV format.
///
/// Writes: full_name, house, adviser, cohort
pub fn export_csv<W: Write>(
    rows: &[DataRow],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    csv_writer
        .write_record(["full_name", "house", "adviser", "cohort"])
        .map_err(csv_err)?;

    let mut count = 0;
    for row in rows {
        csv_writer
            .write_record([&row.full_name, &row.house, &row.adviser, &row.cohort])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %export_path.display(), rows = count, "CSV export complete");
    Ok(count)
}

/// Export rows to JSON format (array of objects).
pub fn export_json<W: Write>(
    rows: &[DataRow],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, rows).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %export_path.display(), rows = rows.len(), "JSON export complete");
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_row(full_name: &str, house: &str, cohort: &str) -> DataRow {
        DataRow {
            full_name: full_name.to_string(),
            house: house.to_string(),
            adviser: "McGonagall".to_string(),
            cohort: cohort.to_string(),
        }
    }

    #[test]
    fn test_csv_export() {
        let rows = vec![
            make_row("Harry Potter", "Gryffindor", "Fall 2015"),
            make_row("Luna Lovegood", "Dumbledore's Army", "Spring 2016"),
        ];
        let mut buf = Vec::new();
        let count = export_csv(&rows, &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("full_name,house,adviser,cohort"));
        assert_eq!(
            lines.next(),
            Some("Harry Potter,Gryffindor,McGonagall,Fall 2015")
        );
        assert!(output.contains("Dumbledore's Army"));
    }

    #[test]
    fn test_json_export() {
        let rows = vec![make_row("Harry Potter", "Gryffindor", "Fall 2015")];
        let mut buf = Vec::new();
        let count = export_json(&rows, &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 1);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["full_name"], "Harry Potter");
        assert_eq!(value[0]["cohort"], "Fall 2015");
    }
}
