//! fc-core - Core library for Fieldcheck
//!
//! This crate provides the shared types used across all Fieldcheck
//! components: expectation rows, statuses, the typed actual-value model,
//! configuration parsing, and the cases-file store.

pub mod config;
pub mod error;
pub mod row;
pub mod sheet;
pub mod sql_utils;
pub mod status;
pub mod value;

pub use config::{Config, DatabaseConfig};
pub use error::{CoreError, CoreResult};
pub use row::ExpectationRow;
pub use sheet::{load_rows, write_rows};
pub use status::Status;
pub use value::{ActualValue, DOES_NOT_EXIST_SENTINEL, EXISTS_SENTINEL};
