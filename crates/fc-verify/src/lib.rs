//! fc-verify - Verification engine for Fieldcheck
//!
//! This crate provides the equivalence rules deciding pass/fail from an
//! (actual, expected) pair, and the runner that executes expectation cases
//! against a database.

pub mod engine;
pub mod runner;

pub use engine::{evaluate, Evaluation, Verdict};
pub use runner::{RunSummary, VerifyRunner};
