//! dsvtable binary: parse a DSV file and print it to the console

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dsvtable::{encoding, DsvParser, Table, TablePrinter};

use cli::CliArgs;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();

    let mut parser = if args.column_delimiter.is_some() || args.row_delimiter.is_some() {
        DsvParser::with_delimiters(
            args.column_delimiter
                .as_deref()
                .unwrap_or(dsvtable::DEFAULT_COLUMN_DELIMITER),
            args.row_delimiter
                .as_deref()
                .unwrap_or(dsvtable::DEFAULT_ROW_DELIMITER),
        )
    } else {
        DsvParser::new()
    };
    if let (Some(column), Some(value)) = (&args.column, &args.value) {
        parser.add_filter(column, value);
    }

    let table = parse(&parser, &args)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    let printer = TablePrinter::new(&table, args.align.into());
    let stdout = io::stdout();
    if args.paginate {
        anyhow::ensure!(args.page_size > 0, "--page-size must be at least 1");
        paginate(&printer, args.page_size, &mut stdout.lock())?;
    } else {
        printer.write_all(&mut stdout.lock())?;
    }
    Ok(())
}

fn parse(parser: &DsvParser, args: &CliArgs) -> anyhow::Result<Table> {
    let table = match &args.encoding {
        Some(label) => {
            let encoding = encoding::resolve(label)?;
            parser.parse_path_with_encoding(&args.file, encoding)?
        }
        None => parser.parse_path(&args.file)?,
    };
    Ok(table)
}

/// Print page by page, waiting for Enter between pages
fn paginate<W: Write>(printer: &TablePrinter<'_>, page_size: usize, out: &mut W) -> anyhow::Result<()> {
    let pages = printer.page_count(page_size);
    let stdin = io::stdin();
    for page in 1..=pages {
        printer.write_page(out, page, page_size)?;
        writeln!(out, "Page: {page}/{pages}")?;
        if page < pages {
            writeln!(out, "Press Enter to view the next page...")?;
            out.flush()?;
            stdin.lock().read_line(&mut String::new())?;
        }
    }
    Ok(())
}
