//! Expectation rows from the cases file

use crate::error::{CoreError, CoreResult};
use crate::status::Status;
use serde::{Deserialize, Serialize};

/// One expectation row: "field X of record Z should have imported as Y".
///
/// Rows are an explicit record type with named fields; unknown keys are
/// rejected at ingestion rather than silently absorbed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectationRow {
    /// Identifier used to locate this row for write-back
    pub id: String,

    /// Destination label selecting the record-shape template
    pub destination: String,

    /// External identifier of the business record under test
    pub record_key: String,

    /// Name of the field being verified
    pub field: String,

    /// Export-variant selector ("", "export 1", "export 2")
    #[serde(default)]
    pub export: String,

    /// Expected value, possibly carrying shorthand markup
    pub expected: String,

    /// Optional raw predicate appended to the generated WHERE clause
    #[serde(default)]
    pub filters: Option<String>,

    /// Last recorded status
    #[serde(default)]
    pub status: Status,

    /// Last recorded actual value
    #[serde(default)]
    pub actual: Option<String>,
}

impl ExpectationRow {
    /// Validate required fields, failing with a descriptive error
    pub fn validate(&self) -> CoreResult<()> {
        let missing = |name: &str| CoreError::MalformedRow {
            id: self.id.clone(),
            message: format!("missing required field '{}'", name),
        };
        if self.id.trim().is_empty() {
            return Err(CoreError::MalformedRow {
                id: "<blank>".to_string(),
                message: "missing required field 'id'".to_string(),
            });
        }
        if self.destination.trim().is_empty() {
            return Err(missing("destination"));
        }
        if self.record_key.trim().is_empty() {
            return Err(missing("record_key"));
        }
        if self.field.trim().is_empty() {
            return Err(missing("field"));
        }
        Ok(())
    }

    /// Filter predicate with double quotes normalized to single quotes,
    /// ready for embedding in generated SQL
    pub fn normalized_filters(&self) -> Option<String> {
        self.filters
            .as_ref()
            .filter(|f| !f.trim().is_empty())
            .map(|f| f.replace('"', "'"))
    }
}

#[cfg(test)]
#[path = "row_test.rs"]
mod tests;
