pub mod output;

use crate::core::ProjectRecords;
use crate::errors::MetricsError;
use std::fs;
use std::path::Path;

/// Load a project records file (JSON). Numeric fields are clamped back into
/// their domains on the way in; see `ProjectRecords::sanitize`.
pub fn read_project_file(path: &Path) -> Result<ProjectRecords, MetricsError> {
    let contents = fs::read_to_string(path).map_err(|source| MetricsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut records: ProjectRecords =
        serde_json::from_str(&contents).map_err(|source| MetricsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    records.sanitize();
    Ok(records)
}

/// Persist a project records file (pretty JSON, stable field order).
pub fn write_project_file(path: &Path, records: &ProjectRecords) -> Result<(), MetricsError> {
    let json = serde_json::to_string_pretty(records).map_err(|source| MetricsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| MetricsError::Io {
        path: path.to_path_buf(),
        source,
    })
}
