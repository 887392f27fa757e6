//! Typed actual values returned by generated queries
//!
//! The database hands back one `actual` column per case. The value keeps
//! its native type until comparison so numeric coercion can distinguish a
//! real number from its string form.

use chrono::{NaiveDate, NaiveDateTime};

/// Shorthand an expectation may use to assert a row/field exists at all
pub const EXISTS_SENTINEL: &str = "### EXISTS ###";

/// Stored as the actual value when the generated query matched no row
pub const DOES_NOT_EXIST_SENTINEL: &str = "### DOES NOT EXIST ###";

/// Maximum length of a stored actual value, to keep write-back bounded
pub const MAX_ACTUAL_LEN: usize = 100;

/// Raw value of the `actual` column for one executed case
#[derive(Debug, Clone, PartialEq)]
pub enum ActualValue {
    /// The query returned no row
    Missing,
    /// SQL NULL
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl ActualValue {
    /// Canonical string form used for comparison and write-back.
    ///
    /// NULL stringifies as "None" so the equivalence table maps it to the
    /// empty string. Booleans stringify as "1"/"0" and dates/timestamps as
    /// `YYYY-MM-DD HH:MM:SS`, matching what the import pipeline exports.
    pub fn string_form(&self) -> String {
        match self {
            ActualValue::Missing => DOES_NOT_EXIST_SENTINEL.to_string(),
            ActualValue::Null => "None".to_string(),
            ActualValue::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
            ActualValue::Int(n) => n.to_string(),
            ActualValue::Float(n) => n.to_string(),
            ActualValue::Text(s) => s.clone(),
            ActualValue::Date(d) => d.format("%Y-%m-%d 00:00:00").to_string(),
            ActualValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Numeric view for coercion. Booleans count as numeric (0/1), like
    /// the integer-backed flags the source database stores.
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            ActualValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            ActualValue::Int(n) => Some(*n as f64),
            ActualValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this value is the "no row matched" marker
    pub fn is_missing(&self) -> bool {
        matches!(self, ActualValue::Missing)
    }
}

/// Truncate an actual value to `MAX_ACTUAL_LEN` characters before storage
pub fn truncate_actual(s: &str) -> String {
    if s.chars().count() <= MAX_ACTUAL_LEN {
        s.to_string()
    } else {
        s.chars().take(MAX_ACTUAL_LEN).collect()
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
