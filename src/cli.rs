//! Command-line argument parsing for the dsvtable binary

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use dsvtable::Alignment;

/// Parse a delimiter-separated file and print it as a table
#[derive(Parser, Debug)]
#[command(name = "dsvtable", version, about = "Parse a DSV file and print it as a table")]
pub struct CliArgs {
    /// File to parse
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// File encoding label (utf-8, utf-16le, windows-1252, ...)
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Column name to filter on (requires --value)
    #[arg(long, value_name = "NAME", requires = "value")]
    pub column: Option<String>,

    /// Required value for the filtered column; empty strings are accepted
    #[arg(long, value_name = "TEXT")]
    pub value: Option<String>,

    /// Delimiter between columns (defaults to a comma)
    #[arg(long, value_name = "DELIM")]
    pub column_delimiter: Option<String>,

    /// Delimiter between rows (defaults to the platform line terminator)
    #[arg(long, value_name = "DELIM")]
    pub row_delimiter: Option<String>,

    /// Print the table one page at a time
    #[arg(short, long)]
    pub paginate: bool,

    /// Rows per page when paginating
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub page_size: usize,

    /// How to align printed columns
    #[arg(long, value_enum, default_value = "none")]
    pub align: AlignMode,
}

/// Column alignment choices exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlignMode {
    /// No padding
    None,
    /// Pad columns to their header name widths
    Header,
    /// Pad columns to their widest cell
    Cells,
}

impl From<AlignMode> for Alignment {
    fn from(mode: AlignMode) -> Self {
        match mode {
            AlignMode::None => Alignment::None,
            AlignMode::Header => Alignment::HeaderWidth,
            AlignMode::Cells => Alignment::CellWidth,
        }
    }
}
