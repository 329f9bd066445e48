use thiserror::Error;

use crate::types::Category;

/// Convenience result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Error type returned by the CSV exporter.
///
/// Contract violations in the pure sequence operations panic instead; only export, which touches
/// the filesystem, reports errors as values.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Underlying I/O error (e.g. destination directory missing, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A record could not be serialized into fields.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Records do not share one shape (not a struct/map, or a missing or extra field).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A field value is not a string. Values are never stringified implicitly.
    #[error("non-string value at row {row} column '{column}': found {found}")]
    NonStringField {
        row: usize,
        column: String,
        found: Category,
    },
}
