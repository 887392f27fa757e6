//! Cases-file load and write-back
//!
//! The cases file is the local stand-in for the external spreadsheet: a
//! YAML list of expectation rows. Write-back rewrites the whole file with
//! updated status/actual fields, which stays bounded because actual values
//! are truncated before storage.

use crate::error::{CoreError, CoreResult};
use crate::row::ExpectationRow;
use std::path::Path;

/// Load all expectation rows from a cases file
pub fn load_rows(path: &Path) -> CoreResult<Vec<ExpectationRow>> {
    if !path.exists() {
        return Err(CoreError::CasesNotFound {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;
    let rows: Vec<ExpectationRow> = serde_yaml::from_str(&content)?;
    log::debug!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Write all expectation rows back to the cases file
pub fn write_rows(path: &Path, rows: &[ExpectationRow]) -> CoreResult<()> {
    let content = serde_yaml::to_string(rows)?;
    std::fs::write(path, content).map_err(|e| CoreError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
#[path = "sheet_test.rs"]
mod tests;
