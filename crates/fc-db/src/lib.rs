//! fc-db - Database abstraction layer for Fieldcheck
//!
//! This crate provides the `Database` trait and the DuckDB implementation
//! used to execute generated verification queries.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use traits::Database;
