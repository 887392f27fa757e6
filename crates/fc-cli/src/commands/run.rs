//! Run command implementation

use anyhow::{anyhow, Context, Result};
use fc_catalog::{build_case, Case};
use fc_core::value::truncate_actual;
use fc_core::{load_rows, write_rows, Status};
use fc_db::DuckDbBackend;
use fc_verify::VerifyRunner;
use std::time::Duration;

use super::common::{self, ProjectContext};
use crate::cli::{GlobalArgs, OutputFormat, RunArgs};

/// Execute the run command
pub async fn execute(args: &RunArgs, global: &GlobalArgs) -> Result<()> {
    let project = common::load_project(global)?;

    // Failing to open the database at all aborts the whole batch; every
    // other failure is isolated to a single case.
    let db = DuckDbBackend::new(common::db_path(global, &project.config))
        .context("Failed to connect to database")?;

    if args.watch {
        loop {
            run_once(args, global, &project, &db).await?;
            println!("Sleeping {}s...", project.config.watch_interval_secs);
            tokio::time::sleep(Duration::from_secs(project.config.watch_interval_secs)).await;
        }
    } else {
        let all_passed = run_once(args, global, &project, &db).await?;
        if !all_passed {
            // Exit code 2 = verification failures
            std::process::exit(2);
        }
        Ok(())
    }
}

/// One full cycle: load rows, execute selected cases, write results back.
/// Returns whether every executed case passed.
async fn run_once(
    args: &RunArgs,
    global: &GlobalArgs,
    project: &ProjectContext,
    db: &DuckDbBackend,
) -> Result<bool> {
    let statuses = match &args.statuses {
        Some(raw) => parse_statuses(raw)?,
        None => project.config.rerun_statuses.clone(),
    };

    let mut rows = load_rows(&project.cases_path)?;
    let selected: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| statuses.contains(&row.status))
        .map(|(idx, _)| idx)
        .collect();

    log::debug!(
        "selected {} of {} rows for statuses {:?}",
        selected.len(),
        rows.len(),
        statuses
    );

    if selected.is_empty() {
        println!("No cases to run.");
        return Ok(true);
    }

    println!("Running {} cases...\n", selected.len());

    // Construction failures (malformed rows, unknown destinations or
    // variants) fail only their own row; the batch continues.
    let mut indexes: Vec<usize> = Vec::new();
    let mut cases: Vec<Case> = Vec::new();
    let mut build_errors = 0usize;

    for idx in selected {
        let row = &rows[idx];
        let built = row
            .validate()
            .map_err(|e| e.to_string())
            .and_then(|_| build_case(row).map_err(|e| e.to_string()));
        match built {
            Ok(case) => {
                if global.verbose {
                    println!("-- case {}\n{}\n", case.id, case.sql());
                }
                indexes.push(idx);
                cases.push(case);
            }
            Err(message) => {
                build_errors += 1;
                println!("  ✗ {} {} - {}", row.id, row.field, message);
                let row = &mut rows[idx];
                row.status = Status::Error;
                row.actual = Some(truncate_actual(&message));
            }
        }
    }

    let runner = VerifyRunner::new(db);
    let summary = runner.run_all(&mut cases).await;

    for (idx, case) in indexes.iter().zip(&cases) {
        match case.status {
            Status::Pass => {
                println!("  ✓ {} {}.{}", case.id, case.destination(), case.field);
            }
            Status::Error => {
                println!(
                    "  ✗ {} {}.{} - {}",
                    case.id,
                    case.destination(),
                    case.field,
                    case.actual.as_deref().unwrap_or("")
                );
            }
            _ => {
                println!(
                    "  ✗ {} {}.{} (expected '{}', actual '{}')",
                    case.id,
                    case.destination(),
                    case.field,
                    case.expected,
                    case.actual.as_deref().unwrap_or("")
                );
            }
        }

        let row = &mut rows[*idx];
        row.status = case.status;
        row.actual = case.actual.clone();
        // persist the normalized expected (leading apostrophe stripped)
        row.expected = case.expected.clone();
    }

    write_rows(&project.cases_path, &rows)?;

    let errors = summary.errors + build_errors;
    match args.format {
        OutputFormat::Table => {
            println!();
            println!(
                "Passed: {}, Failed: {}, Errors: {} [{}ms]",
                summary.passed,
                summary.failed,
                errors,
                summary.duration.as_millis()
            );
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "total": summary.total + build_errors,
                "passed": summary.passed,
                "failed": summary.failed,
                "errors": errors,
                "duration_ms": summary.duration.as_millis() as u64,
            });
            println!("{}", report);
        }
    }

    Ok(summary.failed == 0 && errors == 0)
}

/// Parse a comma-separated status list
fn parse_statuses(raw: &str) -> Result<Vec<Status>> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Status>().map_err(|e| anyhow!(e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_statuses() {
        let statuses = parse_statuses("Untested, Fail").unwrap();
        assert_eq!(statuses, vec![Status::Untested, Status::Fail]);
    }

    #[test]
    fn test_parse_statuses_rejects_unknown() {
        assert!(parse_statuses("Untested,Bogus").is_err());
    }
}
