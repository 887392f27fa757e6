//! Case execution

use crate::engine::evaluate;
use fc_catalog::Case;
use fc_core::value::{truncate_actual, ActualValue};
use fc_core::Status;
use fc_db::{Database, DbError};
use std::time::{Duration, Instant};

/// Summary of one verification run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Total cases executed
    pub total: usize,

    /// Cases that passed
    pub passed: usize,

    /// Cases that failed comparison
    pub failed: usize,

    /// Cases that raised a database error
    pub errors: usize,

    /// Total execution time
    pub duration: Duration,
}

impl RunSummary {
    /// Create a summary from executed cases
    pub fn from_cases(cases: &[Case], duration: Duration) -> Self {
        let total = cases.len();
        let passed = cases.iter().filter(|c| c.status == Status::Pass).count();
        let failed = cases.iter().filter(|c| c.status == Status::Fail).count();
        let errors = cases.iter().filter(|c| c.status == Status::Error).count();

        Self {
            total,
            passed,
            failed,
            errors,
            duration,
        }
    }

    /// Check if every case passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

/// Runner executing expectation cases against one shared connection
pub struct VerifyRunner<'a> {
    db: &'a dyn Database,
}

impl<'a> VerifyRunner<'a> {
    /// Create a new runner
    pub fn new(db: &'a dyn Database) -> Self {
        Self { db }
    }

    /// Execute a single case: exactly one attempt per run.
    ///
    /// A returned row (or its absence) feeds the equivalence rules; a
    /// database error is captured as the case's actual value with status
    /// `Error` and never propagates or retries.
    pub async fn run_case(&self, case: &mut Case) {
        let sql = case.sql();
        log::debug!("case {} ({}): {}", case.id, case.destination(), sql);

        match self.db.query_actual(&sql).await {
            Ok(value) => {
                let value = value.unwrap_or(ActualValue::Missing);
                let evaluation = evaluate(&value, &case.expected);
                case.actual = Some(truncate_actual(&value.string_form()));
                case.status = if evaluation.passed() {
                    Status::Pass
                } else {
                    Status::Fail
                };
                case.expected = evaluation.expected;
            }
            Err(e) => {
                log::warn!("case {} errored: {}", case.id, e);
                case.actual = Some(truncate_actual(&error_summary(&e)));
                case.status = Status::Error;
            }
        }
    }

    /// Execute cases sequentially, in the order fetched
    pub async fn run_all(&self, cases: &mut [Case]) -> RunSummary {
        let start = Instant::now();
        for case in cases.iter_mut() {
            self.run_case(case).await;
        }
        RunSummary::from_cases(cases, start.elapsed())
    }
}

/// Best-effort one-line summary of a database failure
fn error_summary(err: &DbError) -> String {
    let text = err.to_string();
    text.lines().next().unwrap_or(&text).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fc_catalog::build_case;
    use fc_core::row::ExpectationRow;
    use fc_core::{DOES_NOT_EXIST_SENTINEL, EXISTS_SENTINEL};
    use fc_db::DuckDbBackend;

    const SCHEMA: &str = "
        CREATE TABLE person (id INTEGER, ssn VARCHAR, first VARCHAR, bio VARCHAR);
        CREATE TABLE application (id INTEGER, external_id VARCHAR, person INTEGER, submitted BOOLEAN);
        CREATE TABLE school (record INTEGER, id INTEGER, degree INTEGER, type VARCHAR);
        CREATE TABLE lookup_prompt (id INTEGER, value VARCHAR);
        INSERT INTO person VALUES (10, '123-45-6789', 'Ada', repeat('b', 150));
        INSERT INTO application VALUES (1, 'app_001', 10, true);
        INSERT INTO school VALUES (10, 500, 7, 'H');
        INSERT INTO lookup_prompt VALUES (7, 'Bachelor''s');
    ";

    async fn seeded_db() -> DuckDbBackend {
        let db = DuckDbBackend::in_memory().unwrap();
        db.execute_batch(SCHEMA).await.unwrap();
        db
    }

    fn row(destination: &str, field: &str, expected: &str) -> ExpectationRow {
        ExpectationRow {
            id: "2".to_string(),
            destination: destination.to_string(),
            record_key: "app_001".to_string(),
            field: field.to_string(),
            export: String::new(),
            expected: expected.to_string(),
            filters: None,
            status: Status::Untested,
            actual: None,
        }
    }

    #[tokio::test]
    async fn test_person_ssn_exists_end_to_end() {
        let db = seeded_db().await;
        let mut case = build_case(&row("person", "ssn", EXISTS_SENTINEL)).unwrap();

        VerifyRunner::new(&db).run_case(&mut case).await;

        assert_eq!(case.status, Status::Pass);
        assert_eq!(case.actual.as_deref(), Some("123-45-6789"));
    }

    #[tokio::test]
    async fn test_exact_value_pass() {
        let db = seeded_db().await;
        let mut case = build_case(&row("person", "first", "Ada")).unwrap();

        VerifyRunner::new(&db).run_case(&mut case).await;

        assert_eq!(case.status, Status::Pass);
    }

    #[tokio::test]
    async fn test_boolean_flag_equivalence() {
        let db = seeded_db().await;
        let mut case = build_case(&row("application", "submitted", "Yes")).unwrap();

        VerifyRunner::new(&db).run_case(&mut case).await;

        assert_eq!(case.status, Status::Pass);
        assert_eq!(case.actual.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_school_degree_prompt_lookup() {
        let db = seeded_db().await;
        let mut case = build_case(&row("school", "degree", "Bachelor's")).unwrap();

        VerifyRunner::new(&db).run_case(&mut case).await;

        assert_eq!(case.status, Status::Pass);
    }

    #[tokio::test]
    async fn test_school_type_decode() {
        let db = seeded_db().await;
        let mut case = build_case(&row("school", "type", "High School")).unwrap();

        VerifyRunner::new(&db).run_case(&mut case).await;

        assert_eq!(case.status, Status::Pass);
    }

    #[tokio::test]
    async fn test_missing_row_stores_sentinel() {
        let db = seeded_db().await;
        let mut r = row("person", "first", EXISTS_SENTINEL);
        r.record_key = "app_unknown".to_string();
        let mut case = build_case(&r).unwrap();

        VerifyRunner::new(&db).run_case(&mut case).await;

        assert_eq!(case.status, Status::Fail);
        assert_eq!(case.actual.as_deref(), Some(DOES_NOT_EXIST_SENTINEL));
    }

    #[tokio::test]
    async fn test_query_error_captured_per_case() {
        let db = seeded_db().await;
        let mut r = row("person", "first", "Ada");
        r.filters = Some("no_such_column = 1".to_string());
        let mut case = build_case(&r).unwrap();

        VerifyRunner::new(&db).run_case(&mut case).await;

        assert_eq!(case.status, Status::Error);
        let actual = case.actual.unwrap();
        assert!(!actual.is_empty());
        assert!(actual.chars().count() <= 100);
    }

    #[tokio::test]
    async fn test_long_actual_truncated() {
        let db = seeded_db().await;
        let mut case = build_case(&row("person", "bio", EXISTS_SENTINEL)).unwrap();

        VerifyRunner::new(&db).run_case(&mut case).await;

        assert_eq!(case.status, Status::Pass);
        assert_eq!(case.actual.unwrap().chars().count(), 100);
    }

    #[tokio::test]
    async fn test_rerun_rederives_status() {
        let db = seeded_db().await;
        let runner = VerifyRunner::new(&db);
        let mut case = build_case(&row("person", "first", "Ada")).unwrap();

        runner.run_case(&mut case).await;
        assert_eq!(case.status, Status::Pass);

        case.expected = "Grace".to_string();
        runner.run_case(&mut case).await;
        assert_eq!(case.status, Status::Fail);
    }

    #[tokio::test]
    async fn test_run_all_summary() {
        let db = seeded_db().await;
        let mut cases = vec![
            build_case(&row("person", "first", "Ada")).unwrap(),
            build_case(&row("person", "first", "Grace")).unwrap(),
        ];

        let summary = VerifyRunner::new(&db).run_all(&mut cases).await;

        assert_eq!(summary.total, 2);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.errors, 0);
        assert!(!summary.all_passed());
    }
}
