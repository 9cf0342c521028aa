//! DSV parsing into in-memory tables
//!
//! [`DsvParser`] holds the delimiter configuration and filter set, and turns
//! a source (path, reader or string) into a [`Table`]: the first row names
//! the columns, every following row becomes one table row of text cells.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use encoding_rs::Encoding;
use tracing::debug;

use crate::encoding;
use crate::error::{DsvError, Result};
use crate::filter::FilterSet;
use crate::table::{Column, Table};
use crate::tokenize::{CellTokenizer, RowTokenizer};

/// RFC 4180 column delimiter
pub const DEFAULT_COLUMN_DELIMITER: &str = ",";

/// Platform line terminator, the default row delimiter
#[cfg(windows)]
pub const DEFAULT_ROW_DELIMITER: &str = "\r\n";
/// Platform line terminator, the default row delimiter
#[cfg(not(windows))]
pub const DEFAULT_ROW_DELIMITER: &str = "\n";

/// Parser for delimiter-separated tabular data
///
/// Delimiters may be any non-empty string, including multi-character ones
/// like `||` or `<->`. Filters are configured before parsing and are
/// read-only during it; each parse call owns its own tokenizer state and
/// output table, so one configured parser can run any number of sequential
/// parses.
///
/// # Examples
///
/// ```no_run
/// use dsvtable::DsvParser;
///
/// let table = DsvParser::new().parse_path("data.csv").unwrap();
/// println!("{} columns, {} rows", table.column_count(), table.row_count());
/// ```
///
/// # With filters
///
/// ```no_run
/// use dsvtable::DsvParser;
///
/// let mut parser = DsvParser::new();
/// parser.add_filter("city", "NYC");
/// parser.add_filter("active", "true");
///
/// // Only rows where city == "NYC" AND active == "true" are kept
/// let table = parser.parse_path("data.csv").unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DsvParser {
    column_delimiter: Option<String>,
    row_delimiter: Option<String>,
    filters: FilterSet,
}

impl DsvParser {
    /// Create a parser with RFC 4180 defaults: comma columns, platform
    /// line-terminator rows
    pub fn new() -> Self {
        DsvParser::default()
    }

    /// Create a parser with custom delimiters
    ///
    /// # Panics
    ///
    /// Panics if either delimiter is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsvtable::DsvParser;
    ///
    /// let parser = DsvParser::with_delimiters("||", "<->");
    /// let table = parser.parse_str("a||b<->1||2").unwrap();
    /// assert_eq!(table.column_names(), vec!["a", "b"]);
    /// ```
    pub fn with_delimiters(
        column_delimiter: impl Into<String>,
        row_delimiter: impl Into<String>,
    ) -> Self {
        let column_delimiter = column_delimiter.into();
        let row_delimiter = row_delimiter.into();
        assert!(!column_delimiter.is_empty(), "column delimiter must be non-empty");
        assert!(!row_delimiter.is_empty(), "row delimiter must be non-empty");
        DsvParser {
            column_delimiter: Some(column_delimiter),
            row_delimiter: Some(row_delimiter),
            filters: FilterSet::new(),
        }
    }

    /// Register one equality filter; may be called multiple times
    ///
    /// Filters are conjunctive. A filter naming a column that does not
    /// appear in the header never rejects a row.
    pub fn add_filter(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.filters.add(column, value);
    }

    /// The active column delimiter
    pub fn column_delimiter(&self) -> &str {
        self.column_delimiter.as_deref().unwrap_or(DEFAULT_COLUMN_DELIMITER)
    }

    /// The active row delimiter
    pub fn row_delimiter(&self) -> &str {
        self.row_delimiter.as_deref().unwrap_or(DEFAULT_ROW_DELIMITER)
    }

    /// Parse a file, decoding it as UTF-8
    pub fn parse_path<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        self.parse_path_with_encoding(path, encoding_rs::UTF_8)
    }

    /// Parse a file with an explicit encoding
    ///
    /// Resolve a label to an encoding with [`crate::encoding::resolve`].
    pub fn parse_path_with_encoding<P: AsRef<Path>>(
        &self,
        path: P,
        encoding: &'static Encoding,
    ) -> Result<Table> {
        let file = File::open(path.as_ref())?;
        self.parse_reader(file, encoding)
    }

    /// Parse any byte stream with an explicit encoding
    ///
    /// The stream is read to its end and decoded before tokenizing; the
    /// tokenizers themselves run lazily over the decoded text.
    pub fn parse_reader<R: Read>(&self, mut reader: R, encoding: &'static Encoding) -> Result<Table> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = encoding::decode(&bytes, encoding);
        self.parse_str(&text)
    }

    /// Parse already-decoded text
    ///
    /// # Errors
    ///
    /// - [`DsvError::EmptySource`] when the input has no rows at all
    /// - [`DsvError::BlankDataRow`] when a data row is empty or whitespace
    /// - [`DsvError::RowWidthMismatch`] when an accepted row's cell count
    ///   differs from the header's column count
    pub fn parse_str(&self, input: &str) -> Result<Table> {
        let mut raw_rows = RowTokenizer::new(input, self.row_delimiter());

        let header = raw_rows.next().ok_or(DsvError::EmptySource)?;
        let columns: Vec<Column> = CellTokenizer::new(&header, self.column_delimiter())
            .map(Column::new)
            .collect();
        let mut table = Table::new(columns);

        let mut filtered = 0usize;
        for (index, raw) in raw_rows.enumerate() {
            // Header is source row 1, the first data row is row 2
            let row_number = index + 2;
            if raw.trim().is_empty() {
                return Err(DsvError::BlankDataRow { row: row_number });
            }
            let values: Vec<String> =
                CellTokenizer::new(&raw, self.column_delimiter()).collect();
            if !self.filters.is_empty() && !self.filters.matches(table.columns(), &values) {
                filtered += 1;
                continue;
            }
            if values.len() != table.column_count() {
                return Err(DsvError::RowWidthMismatch {
                    row: row_number,
                    expected: table.column_count(),
                    found: values.len(),
                });
            }
            table.push_row(values);
        }

        debug!(
            columns = table.column_count(),
            rows = table.row_count(),
            filtered,
            "parsed table"
        );
        Ok(table)
    }
}
