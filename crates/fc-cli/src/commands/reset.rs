//! Reset command implementation

use anyhow::Result;
use fc_core::{load_rows, write_rows, Status};

use super::common;
use crate::cli::{GlobalArgs, ResetArgs};

/// Reset every case to Untested and clear recorded actuals
pub async fn execute(_args: &ResetArgs, global: &GlobalArgs) -> Result<()> {
    let project = common::load_project(global)?;
    let mut rows = load_rows(&project.cases_path)?;

    for row in &mut rows {
        row.status = Status::Untested;
        row.actual = None;
    }

    write_rows(&project.cases_path, &rows)?;
    println!("Reset {} cases.", rows.len());
    Ok(())
}
