//! Quote-aware tokenizing of delimiter-separated text
//!
//! Two layers share one delimiter-matching core: [`RowTokenizer`] splits the
//! whole input into raw rows, [`CellTokenizer`] splits one raw row into
//! unquoted cells.

mod cells;
mod matcher;
mod rows;

pub use cells::CellTokenizer;
pub use rows::RowTokenizer;

/// The quote character; inside a quoted value delimiters lose their meaning
pub(crate) const QUOTE: char = '"';
