//! Error types for fc-catalog

use thiserror::Error;

/// Case-construction errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// C001: No record-shape template registered for the label
    #[error("[C001] Unknown destination: {label}")]
    UnknownDestination { label: String },

    /// C002: Export variant outside the fixed enumeration
    #[error("[C002] Unknown export variant: '{value}'")]
    UnknownExportVariant { value: String },
}

/// Result type alias for CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
