//! Integration tests for dsvtable

use std::io::Write;

use dsvtable::{Alignment, DsvError, DsvParser, TablePrinter};
use tempfile::NamedTempFile;

fn write_temp(content: &[u8]) -> NamedTempFile {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(content).unwrap();
    temp.flush().unwrap();
    temp
}

#[test]
fn test_parse_file_end_to_end() {
    let temp = write_temp(
        b"header1,header2,header3\nvalue11,value12,value13\n\"value21\",\"value22\",\"value23\"",
    );

    let table = DsvParser::new().parse_path(temp.path()).unwrap();

    assert_eq!(table.column_names(), vec!["header1", "header2", "header3"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0].cells, vec!["value11", "value12", "value13"]);
    // Quoting style is not preserved, only content
    assert_eq!(table.rows()[1].cells, vec!["value21", "value22", "value23"]);
}

#[test]
fn test_parse_file_with_embedded_delimiters_and_breaks() {
    let temp = write_temp(b"h1,h2,h3\n\"a,b\",\"say \"\"hi\"\"\",\"line1\nline2\"\nx,y,z");

    let table = DsvParser::new().parse_path(temp.path()).unwrap();

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.get(0, 0), Some("a,b"));
    assert_eq!(table.get(0, 1), Some("say \"hi\""));
    assert_eq!(table.get(0, 2), Some("line1\nline2"));
    assert_eq!(table.rows()[1].cells, vec!["x", "y", "z"]);
}

#[test]
fn test_parse_file_with_filters() {
    let temp = write_temp(b"name,city\nalice,NYC\nbob,SF\ncarol,NYC");

    let mut parser = DsvParser::new();
    parser.add_filter("city", "NYC");
    let table = parser.parse_path(temp.path()).unwrap();

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.get(0, 0), Some("alice"));
    assert_eq!(table.get(1, 0), Some("carol"));
}

#[test]
fn test_parse_file_with_custom_delimiters() {
    let temp = write_temp(b"id||name<->1||alice<->2||bob");

    let parser = DsvParser::with_delimiters("||", "<->");
    let table = parser.parse_path(temp.path()).unwrap();

    assert_eq!(table.column_names(), vec!["id", "name"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.get(1, 1), Some("bob"));
}

#[test]
fn test_parse_utf16_file_with_encoding_label() {
    let bytes: Vec<u8> = "h1,h2\nä,ö"
        .encode_utf16()
        .flat_map(u16::to_le_bytes)
        .collect();
    let temp = write_temp(&bytes);

    let encoding = dsvtable::encoding::resolve("utf-16le").unwrap();
    let table = DsvParser::new()
        .parse_path_with_encoding(temp.path(), encoding)
        .unwrap();

    assert_eq!(table.rows()[0].cells, vec!["ä", "ö"]);
}

#[test]
fn test_unknown_encoding_label_fails() {
    let err = dsvtable::encoding::resolve("definitely-not-an-encoding").unwrap_err();
    assert!(matches!(err, DsvError::UnknownEncoding(_)));
}

#[test]
fn test_empty_file_fails_with_empty_source() {
    let temp = write_temp(b"");
    let err = DsvParser::new().parse_path(temp.path()).unwrap_err();
    assert!(matches!(err, DsvError::EmptySource));
}

#[test]
fn test_blank_row_aborts_whole_parse() {
    let temp = write_temp(b"h1,h2\na,b\n  \nc,d");
    let err = DsvParser::new().parse_path(temp.path()).unwrap_err();
    assert!(matches!(err, DsvError::BlankDataRow { row: 3 }));
}

#[test]
fn test_missing_file_surfaces_io_error() {
    let err = DsvParser::new().parse_path("no/such/file.csv").unwrap_err();
    assert!(matches!(err, DsvError::Io(_)));
}

#[test]
fn test_parse_then_print() {
    let temp = write_temp(b"id,name\n1,alice\n2,bob");

    let table = DsvParser::new().parse_path(temp.path()).unwrap();
    let printer = TablePrinter::new(&table, Alignment::CellWidth);
    let mut out = Vec::new();
    printer.write_all(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "|id|name |\n|1 |alice|\n|2 |bob  |\n"
    );
}

#[test]
fn test_large_dataset() {
    let mut content = String::from("id,value\n");
    for i in 0..1000 {
        content.push_str(&format!("{i},{}\n", i * 2));
    }
    let temp = write_temp(content.as_bytes());

    let table = DsvParser::new().parse_path(temp.path()).unwrap();
    assert_eq!(table.row_count(), 1000);
    assert_eq!(table.get(999, 1), Some("1998"));
}
