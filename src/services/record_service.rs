use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::record::{PlaceRecord, RecordDocument};

#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: AppError,
}

pub fn load_record(path: &Path) -> Result<PlaceRecord, AppError> {
    let raw = fs::read_to_string(path)?;
    let doc: RecordDocument = serde_json::from_str(&raw)?;
    let size_bytes = fs::metadata(path)?.len();
    Ok(PlaceRecord::from_document(path.to_path_buf(), doc, size_bytes))
}

// One unreadable or unparsable file never aborts the batch; it lands in the
// failure list with its cause and the rest keep loading.
pub fn load_records(paths: &[PathBuf]) -> (Vec<PlaceRecord>, Vec<LoadFailure>) {
    let mut records = Vec::new();
    let mut failures = Vec::new();

    for path in paths {
        match load_record(path) {
            Ok(record) => records.push(record),
            Err(error) => failures.push(LoadFailure {
                path: path.clone(),
                error,
            }),
        }
    }

    (records, failures)
}
