//! DuckDB database backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use duckdb::types::{TimeUnit, Value};
use duckdb::Connection;
use fc_core::ActualValue;
use std::path::Path;
use std::sync::Mutex;

/// DuckDB database backend
pub struct DuckDbBackend {
    conn: Mutex<Connection>,
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    /// Execute batch SQL synchronously
    fn execute_batch_sync(&self, sql: &str) -> DbResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))?;
        conn.execute_batch(sql)
            .map_err(|e| DbError::ExecutionError(e.to_string()))
    }

    /// Query the first row's `actual` column synchronously
    fn query_actual_sync(&self, sql: &str) -> DbResult<Option<ActualValue>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))?;
        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        match rows.next()? {
            Some(row) => {
                let value: Value = row.get(0)?;
                Ok(Some(convert_value(value)))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl Database for DuckDbBackend {
    async fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.execute_batch_sync(sql)
    }

    async fn query_actual(&self, sql: &str) -> DbResult<Option<ActualValue>> {
        self.query_actual_sync(sql)
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}

/// Map a DuckDB value to the typed actual-value model
fn convert_value(value: Value) -> ActualValue {
    match value {
        Value::Null => ActualValue::Null,
        Value::Boolean(b) => ActualValue::Bool(b),
        Value::TinyInt(n) => ActualValue::Int(n as i64),
        Value::SmallInt(n) => ActualValue::Int(n as i64),
        Value::Int(n) => ActualValue::Int(n as i64),
        Value::BigInt(n) => ActualValue::Int(n),
        Value::UTinyInt(n) => ActualValue::Int(n as i64),
        Value::USmallInt(n) => ActualValue::Int(n as i64),
        Value::UInt(n) => ActualValue::Int(n as i64),
        Value::UBigInt(n) => ActualValue::Int(n as i64),
        Value::Float(n) => ActualValue::Float(n as f64),
        Value::Double(n) => ActualValue::Float(n),
        // The source warehouse stores numerics as DECIMAL; compare as float
        Value::Decimal(d) => match d.to_string().parse::<f64>() {
            Ok(n) => ActualValue::Float(n),
            Err(_) => ActualValue::Text(d.to_string()),
        },
        Value::Text(s) => ActualValue::Text(s),
        Value::Date32(days) => match epoch_days_to_date(days) {
            Some(d) => ActualValue::Date(d),
            None => ActualValue::Null,
        },
        Value::Timestamp(unit, v) => match timestamp_to_datetime(unit, v) {
            Some(dt) => ActualValue::DateTime(dt),
            None => ActualValue::Null,
        },
        other => ActualValue::Text(format!("{:?}", other)),
    }
}

/// Days since the Unix epoch to a calendar date
fn epoch_days_to_date(days: i32) -> Option<NaiveDate> {
    // 1970-01-01 is day 719_163 of the common era
    NaiveDate::from_num_days_from_ce_opt(719_163 + days)
}

fn timestamp_to_datetime(unit: TimeUnit, v: i64) -> Option<chrono::NaiveDateTime> {
    let dt = match unit {
        TimeUnit::Second => DateTime::from_timestamp(v, 0),
        TimeUnit::Millisecond => DateTime::from_timestamp_millis(v),
        TimeUnit::Microsecond => DateTime::from_timestamp_micros(v),
        TimeUnit::Nanosecond => Some(DateTime::from_timestamp_nanos(v)),
    };
    dt.map(|d| d.naive_utc())
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
