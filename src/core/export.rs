//! CSV export of the project collection

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::entities::project::ProjectRecord;

/// Default file name for exports
pub const DEFAULT_EXPORT_FILE: &str = "student_projects.csv";

/// First line of every export
pub const CSV_HEADER: &str = "Student Name,Project Title,Description,Date,Link";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to finish CSV output: {0}")]
    Flush(String),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Render the collection as CSV
///
/// The header is written as-is; every data field is wrapped in double
/// quotes, one line per record in collection order. Quotes inside a field
/// are doubled so the output stays valid RFC 4180.
pub fn to_csv(projects: &[ProjectRecord]) -> Result<String, ExportError> {
    let mut buf = Vec::with_capacity(CSV_HEADER.len() + 1 + projects.len() * 64);
    buf.extend_from_slice(CSV_HEADER.as_bytes());
    buf.push(b'\n');

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(buf);

    for p in projects {
        writer.write_record([
            &p.student_name,
            &p.project_title,
            &p.description,
            &p.date,
            &p.link,
        ])?;
    }

    let buf = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(buf)?)
}

/// Write the CSV export to `path`
pub fn write_csv(path: &Path, projects: &[ProjectRecord]) -> Result<(), ExportError> {
    let content = to_csv(projects)?;
    fs::write(path, content).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}
