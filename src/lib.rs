//! # dsvtable
//!
//! Delimiter-separated values parser producing in-memory tables.
//!
//! The tokenizing engine is quote-aware and supports delimiters of
//! arbitrary length, not just the single comma/newline of plain RFC 4180:
//! a prefix-buffering matcher decides per character whether the input is
//! completing a delimiter or merely looks like one. Quoted values may
//! contain both delimiters and embedded row breaks, and doubled quotes
//! unescape to one literal quote.
//!
//! ## Quick start
//!
//! ```
//! use dsvtable::DsvParser;
//!
//! let table = DsvParser::new()
//!     .parse_str("name,city\nalice,\"New York, NY\"\nbob,SF")
//!     .unwrap();
//!
//! assert_eq!(table.column_names(), vec!["name", "city"]);
//! assert_eq!(table.get(0, 1), Some("New York, NY"));
//! ```
//!
//! ## Filters
//!
//! ```
//! use dsvtable::DsvParser;
//!
//! let mut parser = DsvParser::new();
//! parser.add_filter("city", "SF");
//!
//! let table = parser.parse_str("name,city\nalice,NYC\nbob,SF").unwrap();
//! assert_eq!(table.row_count(), 1);
//! assert_eq!(table.get(0, 0), Some("bob"));
//! ```
//!
//! ## Multi-character delimiters
//!
//! ```
//! use dsvtable::DsvParser;
//!
//! let parser = DsvParser::with_delimiters("||", "<->");
//! let table = parser.parse_str("a||b<->1||2").unwrap();
//! assert_eq!(table.rows()[0].cells, vec!["1", "2"]);
//! ```

pub mod encoding;
pub mod error;
pub mod filter;
pub mod parser;
pub mod printer;
pub mod table;
pub mod tokenize;

pub use error::{DsvError, Result};
pub use filter::FilterSet;
pub use parser::{DsvParser, DEFAULT_COLUMN_DELIMITER, DEFAULT_ROW_DELIMITER};
pub use printer::{Alignment, TablePrinter};
pub use table::{Column, Row, Table};
