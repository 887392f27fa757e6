//! Export-variant resolution for multi-valued fields

use crate::error::CatalogError;

/// Selector for which aggregation source a multi-valued field exports
/// through. The enumeration is fixed; anything else fails construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportVariant {
    /// Default extended field values (empty selector)
    Extended,
    /// "export 1"
    Export1,
    /// "export 2"
    Export2,
}

impl ExportVariant {
    /// Parse the raw spreadsheet selector, case-insensitively
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        match raw.trim().to_lowercase().as_str() {
            "" => Ok(ExportVariant::Extended),
            "export 1" => Ok(ExportVariant::Export1),
            "export 2" => Ok(ExportVariant::Export2),
            _ => Err(CatalogError::UnknownExportVariant {
                value: raw.to_string(),
            }),
        }
    }

    /// Value table this variant aggregates over
    pub fn value_table(&self) -> &'static str {
        match self {
            ExportVariant::Extended => "field_extended",
            ExportVariant::Export1 => "field_export",
            ExportVariant::Export2 => "field_export2",
        }
    }
}
