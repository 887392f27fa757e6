//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use fc_core::ActualValue;

/// Database abstraction trait for Fieldcheck.
///
/// The verification core only needs the minimal contract of running a
/// generated query and getting back at most one row's `actual` column.
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute multiple SQL statements (setup, seeding)
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Run a generated verification query, returning the first row's
    /// `actual` column as a typed value, or `None` when no row matched
    async fn query_actual(&self, sql: &str) -> DbResult<Option<ActualValue>>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
