//! Error types for DSV parsing

use thiserror::Error;

/// Result type alias for dsvtable operations
pub type Result<T> = std::result::Result<T, DsvError>;

/// Errors that can abort a parse
///
/// Every variant fails the whole parse call; no partial table is returned.
#[derive(Debug, Error)]
pub enum DsvError {
    /// The source yielded no rows at all, so there is no header to read
    #[error("source has no rows: a table needs at least a header row")]
    EmptySource,

    /// A data row was empty or all-whitespace before tokenizing
    #[error("row {row} is blank: data rows must contain at least one cell")]
    BlankDataRow {
        /// 1-based row number in the source, counting the header as row 1
        row: usize,
    },

    /// A row's cell count differs from the header's column count
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidthMismatch {
        /// 1-based row number in the source, counting the header as row 1
        row: usize,
        /// Column count established by the header
        expected: usize,
        /// Cell count actually found in the row
        found: usize,
    },

    /// The caller supplied an encoding label that cannot be resolved
    #[error("unknown encoding label: {0:?}")]
    UnknownEncoding(String),

    /// The underlying source could not be read
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
}
