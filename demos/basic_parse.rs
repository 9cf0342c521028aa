//! Basic parsing walkthrough
//!
//! Run with: cargo run --example basic_parse

use dsvtable::{Alignment, DsvParser, TablePrinter};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== dsvtable basics ===\n");

    // Example 1: plain RFC 4180-style input
    println!("1. Comma-separated input...");
    {
        let table = DsvParser::new().parse_str("name,age,city\nalice,30,NYC\nbob,25,SF")?;
        println!("   {} columns, {} rows", table.column_count(), table.row_count());
        for row in table.rows() {
            println!("   {:?}", row.cells);
        }
    }

    // Example 2: quoted cells with embedded delimiters and row breaks
    println!("\n2. Quoted cells...");
    {
        let table = DsvParser::new()
            .parse_str("greeting,author\n\"she said \"\"hi\"\", twice\",\"a\nb\"")?;
        println!("   cell 0: {:?}", table.get(0, 0));
        println!("   cell 1: {:?}", table.get(0, 1));
    }

    // Example 3: multi-character delimiters
    println!("\n3. Multi-character delimiters...");
    {
        let parser = DsvParser::with_delimiters("||", "<->");
        let table = parser.parse_str("id||label<->1||first<->2||second")?;
        let printer = TablePrinter::new(&table, Alignment::CellWidth);
        printer.write_all(&mut std::io::stdout())?;
    }

    Ok(())
}
