//! Splitting one raw row into unquoted cell values
//!
//! Quote handling is stricter than at the row layer: a doubled quote inside
//! a quoted value is an escape for one literal quote, while any other quote
//! toggles the quoted state and is dropped from the output.

use std::iter::Peekable;
use std::str::Chars;

use super::matcher::{Advance, DelimiterMatcher};
use super::QUOTE;

/// Lazy iterator of cell strings for a single raw row
///
/// The final cell (after the last delimiter, or the whole row if none
/// occurs) is always yielded, even when empty.
///
/// # Examples
///
/// ```
/// use dsvtable::tokenize::CellTokenizer;
///
/// let cells: Vec<String> = CellTokenizer::new("a,\"b,c\",d", ",").collect();
/// assert_eq!(cells, vec!["a", "b,c", "d"]);
/// ```
pub struct CellTokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    matcher: DelimiterMatcher<'a>,
    in_quotes: bool,
    done: bool,
}

impl<'a> CellTokenizer<'a> {
    /// Create a tokenizer over one raw row
    pub fn new(row: &'a str, column_delimiter: &'a str) -> Self {
        CellTokenizer {
            chars: row.chars().peekable(),
            matcher: DelimiterMatcher::new(column_delimiter),
            in_quotes: false,
            done: false,
        }
    }
}

impl Iterator for CellTokenizer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let mut cell = String::new();
        while let Some(ch) = self.chars.next() {
            if ch == QUOTE {
                if self.in_quotes && self.chars.peek() == Some(&QUOTE) {
                    // Doubled quote inside a quoted value: one literal
                    // quote, state unchanged, both characters consumed.
                    self.chars.next();
                    cell.push(QUOTE);
                    continue;
                }
                // Any other quote is a cell boundary marker: it toggles the
                // state and never reaches the output. A half-matched
                // delimiter prefix before it is literal content.
                self.in_quotes = !self.in_quotes;
                cell.push_str(&self.matcher.take_pending());
                continue;
            }
            if self.in_quotes {
                cell.push(ch);
                continue;
            }
            match self.matcher.push(ch) {
                Advance::Split => return Some(cell),
                Advance::Hold => {}
                Advance::Literal(text) => cell.push_str(&text),
            }
        }
        self.done = true;
        cell.push_str(&self.matcher.take_pending());
        Some(cell)
    }
}
