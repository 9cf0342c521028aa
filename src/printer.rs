//! Console rendering for parsed tables
//!
//! Writes `|`-separated rows to any [`io::Write`] sink, with optional
//! column alignment and page-at-a-time output for large tables.

use std::io::{self, Write};

use crate::table::Table;

/// How column widths are computed for aligned output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// No padding: cells are printed back to back
    #[default]
    None,
    /// Pad each column to its header name's width
    HeaderWidth,
    /// Pad each column to the widest cell in the column (or the header
    /// name, whichever is longer); scans every row up front
    CellWidth,
}

/// Table printer with alignment and pagination
///
/// # Examples
///
/// ```
/// use dsvtable::{Alignment, DsvParser, TablePrinter};
///
/// let table = DsvParser::new().parse_str("a,b\n1,2").unwrap();
/// let printer = TablePrinter::new(&table, Alignment::None);
///
/// let mut out = Vec::new();
/// printer.write_all(&mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "|a|b|\n|1|2|\n");
/// ```
pub struct TablePrinter<'a> {
    table: &'a Table,
    // One width per column; empty when alignment is disabled
    widths: Vec<usize>,
}

impl<'a> TablePrinter<'a> {
    /// Create a printer, computing column widths per the alignment mode
    pub fn new(table: &'a Table, alignment: Alignment) -> Self {
        let widths = match alignment {
            Alignment::None => Vec::new(),
            Alignment::HeaderWidth => table
                .columns()
                .iter()
                .map(|c| c.name.chars().count())
                .collect(),
            Alignment::CellWidth => table
                .columns()
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    table
                        .rows()
                        .iter()
                        .filter_map(|row| row.get(i))
                        .map(|cell| cell.chars().count())
                        .max()
                        .unwrap_or(0)
                        .max(c.name.chars().count())
                })
                .collect(),
        };
        TablePrinter { table, widths }
    }

    fn write_cells<W: Write>(&self, out: &mut W, cells: &[&str]) -> io::Result<()> {
        for (i, cell) in cells.iter().enumerate() {
            match self.widths.get(i) {
                Some(&width) => write!(out, "|{cell:<width$}")?,
                None => write!(out, "|{cell}")?,
            }
        }
        writeln!(out, "|")
    }

    /// Write the header row
    pub fn write_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_cells(out, &self.table.column_names())
    }

    /// Write one data row; returns false when the index is out of range
    pub fn write_row<W: Write>(&self, out: &mut W, index: usize) -> io::Result<bool> {
        let Some(row) = self.table.rows().get(index) else {
            return Ok(false);
        };
        let cells: Vec<&str> = row.cells.iter().map(String::as_str).collect();
        self.write_cells(out, &cells)?;
        Ok(true)
    }

    /// Write the header followed by every data row
    pub fn write_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_header(out)?;
        for index in 0..self.table.row_count() {
            self.write_row(out, index)?;
        }
        Ok(())
    }

    /// Write one page: the header plus up to `page_size` data rows
    ///
    /// Pages are numbered from 1.
    pub fn write_page<W: Write>(&self, out: &mut W, page: usize, page_size: usize) -> io::Result<()> {
        self.write_header(out)?;
        let start = page.saturating_sub(1) * page_size;
        for index in start..start + page_size {
            if !self.write_row(out, index)? {
                break;
            }
        }
        Ok(())
    }

    /// Number of pages at the given page size, never less than one
    pub fn page_count(&self, page_size: usize) -> usize {
        assert!(page_size > 0, "page size must be non-zero");
        self.table.row_count().div_ceil(page_size).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DsvParser;

    fn sample() -> Table {
        DsvParser::new()
            .parse_str("id,name\n1,alice\n2,bo\n3,charlotte")
            .unwrap()
    }

    fn render<F: Fn(&TablePrinter<'_>, &mut Vec<u8>) -> io::Result<()>>(
        table: &Table,
        alignment: Alignment,
        f: F,
    ) -> String {
        let printer = TablePrinter::new(table, alignment);
        let mut out = Vec::new();
        f(&printer, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_unaligned_output() {
        let table = sample();
        let text = render(&table, Alignment::None, |p, out| p.write_all(out));
        assert_eq!(
            text,
            "|id|name|\n|1|alice|\n|2|bo|\n|3|charlotte|\n"
        );
    }

    #[test]
    fn test_header_width_alignment() {
        let table = sample();
        let text = render(&table, Alignment::HeaderWidth, |p, out| p.write_header(out));
        assert_eq!(text, "|id|name|\n");
        let row = render(&table, Alignment::HeaderWidth, |p, out| {
            p.write_row(out, 0).map(|_| ())
        });
        // Cells padded to the header widths (2 and 4); overlong cells
        // simply overflow their column
        assert_eq!(row, "|1 |alice|\n");
    }

    #[test]
    fn test_cell_width_alignment() {
        let table = sample();
        let text = render(&table, Alignment::CellWidth, |p, out| p.write_all(out));
        assert_eq!(
            text,
            "|id|name     |\n|1 |alice    |\n|2 |bo       |\n|3 |charlotte|\n"
        );
    }

    #[test]
    fn test_write_row_out_of_range() {
        let table = sample();
        let printer = TablePrinter::new(&table, Alignment::None);
        let mut out = Vec::new();
        assert!(!printer.write_row(&mut out, 99).unwrap());
        assert!(out.is_empty());
    }

    #[test]
    fn test_page_count() {
        let table = sample();
        let printer = TablePrinter::new(&table, Alignment::None);
        assert_eq!(printer.page_count(10), 1);
        assert_eq!(printer.page_count(3), 1);
        assert_eq!(printer.page_count(2), 2);
        assert_eq!(printer.page_count(1), 3);
    }

    #[test]
    fn test_page_count_of_empty_table_is_one() {
        let table = DsvParser::new().parse_str("a,b").unwrap();
        let printer = TablePrinter::new(&table, Alignment::None);
        assert_eq!(printer.page_count(10), 1);
    }

    #[test]
    fn test_write_page_repeats_header_and_clips_last_page() {
        let table = sample();
        let first = render(&table, Alignment::None, |p, out| p.write_page(out, 1, 2));
        assert_eq!(first, "|id|name|\n|1|alice|\n|2|bo|\n");
        let second = render(&table, Alignment::None, |p, out| p.write_page(out, 2, 2));
        assert_eq!(second, "|id|name|\n|3|charlotte|\n");
    }

    #[test]
    fn test_cell_width_handles_empty_table() {
        let table = DsvParser::new().parse_str("long_header,x").unwrap();
        let text = render(&table, Alignment::CellWidth, |p, out| p.write_header(out));
        assert_eq!(text, "|long_header|x|\n");
    }
}
