//! Command implementations

pub mod common;
pub mod reset;
pub mod run;
