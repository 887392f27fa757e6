//! Case status lifecycle

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one expectation case.
///
/// A case is `Untested` until an execution attempt has been made. After
/// execution it is `Pass`, `Fail`, or `Error`; `Error` records a
/// database-level failure and takes precedence over Pass/Fail. There is no
/// reset transition on a case — re-running re-derives the status from a
/// fresh execution attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Untested,
    Pass,
    Fail,
    Error,
}

impl Status {
    /// Statuses selected for re-execution by default
    pub fn default_rerun() -> Vec<Status> {
        vec![Status::Untested, Status::Fail]
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Untested => "Untested",
            Status::Pass => "Pass",
            Status::Fail => "Fail",
            Status::Error => "Error",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "untested" => Ok(Status::Untested),
            "pass" => Ok(Status::Pass),
            "fail" => Ok(Status::Fail),
            "error" => Ok(Status::Error),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}
