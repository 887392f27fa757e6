//! Expectation cases bound to record-shape templates

use crate::error::CatalogError;
use crate::shapes::{shape_for, RecordShape};
use crate::variant::ExportVariant;
use fc_core::row::ExpectationRow;
use fc_core::sql_utils::escape_sql_string;
use fc_core::status::Status;

/// One verification unit: a row bound to its record-shape template.
///
/// A case is constructed fresh from one expectation row each run and is
/// stateful only within that run; persistence happens through write-back.
#[derive(Debug)]
pub struct Case {
    /// Identifier locating the cases-file row for write-back
    pub id: String,
    /// External identifier of the business record under test
    pub record_key: String,
    /// Field being verified
    pub field: String,
    /// Resolved export variant
    pub variant: ExportVariant,
    /// Expected value (possibly normalized during evaluation)
    pub expected: String,
    /// Optional predicate appended to the WHERE clause
    pub filters: Option<String>,
    /// Raw value from the database after execution
    pub actual: Option<String>,
    /// Derived status
    pub status: Status,
    shape: &'static RecordShape,
}

/// Build a case for a validated expectation row.
///
/// Fails with `UnknownDestination` when the label has no registered
/// template and `UnknownExportVariant` when the export selector is outside
/// the fixed enumeration. Both are construction-time failures scoped to
/// the single row.
pub fn build_case(row: &ExpectationRow) -> Result<Case, CatalogError> {
    let shape = shape_for(&row.destination).ok_or_else(|| CatalogError::UnknownDestination {
        label: row.destination.clone(),
    })?;
    let variant = ExportVariant::parse(&row.export)?;

    Ok(Case {
        id: row.id.clone(),
        record_key: row.record_key.clone(),
        field: row.field.clone(),
        variant,
        expected: row.expected.clone(),
        filters: row.normalized_filters(),
        actual: None,
        status: Status::Untested,
        shape,
    })
}

impl Case {
    /// Canonical label of the destination template
    pub fn destination(&self) -> &'static str {
        self.shape.name
    }

    /// Render the verification query for this case.
    ///
    /// Every query selects a single `actual` column off the application
    /// row identified by the external record key, joined out to the
    /// destination table through the template's join fragment.
    pub fn sql(&self) -> String {
        let export = self.shape.export_expression(&self.field, self.variant);

        let mut sql = String::new();
        sql.push_str("select\n");
        sql.push_str(&format!("  {} as actual\n", export));
        sql.push_str("from application a\n");
        sql.push_str("join person p on a.person = p.id\n");
        if !self.shape.join.is_empty() {
            sql.push_str(self.shape.join);
            sql.push('\n');
        }
        sql.push_str(&format!(
            "where\n  a.external_id = '{}'",
            escape_sql_string(&self.record_key)
        ));
        if let Some(filters) = &self.filters {
            sql.push_str(&format!(" and {}", filters));
        }
        sql.push_str("\nlimit 1");
        sql
    }
}

#[cfg(test)]
#[path = "case_test.rs"]
mod tests;
