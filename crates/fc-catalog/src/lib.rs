//! fc-catalog - Case catalog for Fieldcheck
//!
//! Maps destination labels to record-shape templates (base alias, join
//! fragment, field export rules) and builds executable expectation cases
//! from validated rows.

pub mod case;
pub mod error;
pub mod shapes;
pub mod variant;

pub use case::{build_case, Case};
pub use error::{CatalogError, CatalogResult};
pub use shapes::{shape_for, ExportStyle, RecordShape};
pub use variant::ExportVariant;
