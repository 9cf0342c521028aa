//! Filtering rows while parsing
//!
//! Run with: cargo run --example filtered_parse

use dsvtable::{Alignment, DsvParser, TablePrinter};
use std::error::Error;

const DATA: &str = "\
name,city,active
alice,NYC,true
bob,SF,true
carol,NYC,false
dave,NYC,true";

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== dsvtable filters ===\n");

    // Filters are conjunctive: every constraint must hold
    let mut parser = DsvParser::new();
    parser.add_filter("city", "NYC");
    parser.add_filter("active", "true");

    let table = parser.parse_str(DATA)?;
    println!("kept {} of 4 rows:\n", table.row_count());

    let printer = TablePrinter::new(&table, Alignment::CellWidth);
    printer.write_all(&mut std::io::stdout())?;

    // A filter on an unknown column never rejects anything
    let mut inert = DsvParser::new();
    inert.add_filter("no_such_column", "x");
    let table = inert.parse_str(DATA)?;
    println!("\nunknown-column filter keeps all {} rows", table.row_count());

    Ok(())
}
