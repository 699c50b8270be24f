//! CSV emission for parsed statements.

use std::path::{Path, PathBuf};

use kivonat_ingest::TransactionRecord;
use thiserror::Error;

/// The output CSV could not be created or written.
#[derive(Debug, Error)]
#[error("writing {}", .path.display())]
pub struct WriteError {
    path: PathBuf,
    source: csv::Error,
}

impl WriteError {
    fn new(path: &Path, source: csv::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

const HEADER: [&str; 4] = ["date", "amount", "type", "description"];

/// Write records to `path` under the fixed header, overwriting any
/// existing file. Missing fields become empty strings; a statement with
/// no recognized transactions still gets its header row.
pub fn write_csv(path: &Path, records: &[TransactionRecord]) -> Result<(), WriteError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| WriteError::new(path, e))?;
    writer
        .write_record(HEADER)
        .map_err(|e| WriteError::new(path, e))?;

    for record in records {
        let date = record.date.map(|d| d.to_string()).unwrap_or_default();
        let amount = record.amount.map(|a| format!("{a:.2}")).unwrap_or_default();
        let kind = record.kind().map(|k| k.as_str()).unwrap_or_default();
        writer
            .write_record([date.as_str(), amount.as_str(), kind, record.description.as_str()])
            .map_err(|e| WriteError::new(path, e))?;
    }

    writer
        .flush()
        .map_err(|e| WriteError::new(path, e.into()))?;
    Ok(())
}
