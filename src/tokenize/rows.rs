//! Splitting a character stream into raw row strings
//!
//! Quote-aware: while inside a quoted value the row delimiter loses its
//! meaning, so cells may contain embedded row breaks. Quote characters are
//! kept in the raw row text; unquoting happens later, per cell.

use super::matcher::{Advance, DelimiterMatcher};
use super::QUOTE;

/// Lazy iterator of raw row strings
///
/// Single-pass and forward-only: each call to `next` consumes input up to
/// the next unquoted row delimiter. Trailing content after the last
/// delimiter is yielded as a final row; a stream ending exactly on a
/// delimiter produces no extra empty row.
///
/// # Examples
///
/// ```
/// use dsvtable::tokenize::RowTokenizer;
///
/// let rows: Vec<String> = RowTokenizer::new("a,b\nc,d", "\n").collect();
/// assert_eq!(rows, vec!["a,b", "c,d"]);
/// ```
pub struct RowTokenizer<'a> {
    chars: std::str::Chars<'a>,
    matcher: DelimiterMatcher<'a>,
    in_quotes: bool,
    done: bool,
}

impl<'a> RowTokenizer<'a> {
    /// Create a tokenizer over the full decoded input
    pub fn new(input: &'a str, row_delimiter: &'a str) -> Self {
        RowTokenizer {
            chars: input.chars(),
            matcher: DelimiterMatcher::new(row_delimiter),
            in_quotes: false,
            done: false,
        }
    }
}

impl Iterator for RowTokenizer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let mut row = String::new();
        for ch in self.chars.by_ref() {
            // Every quote flips the state; doubled-quote escapes are a
            // cell-level concern and do not exist at this layer.
            if ch == QUOTE {
                self.in_quotes = !self.in_quotes;
            }
            if self.in_quotes {
                // Delimiter matching is suspended: anything buffered was
                // not a delimiter, and the character is plain content.
                row.push_str(&self.matcher.take_pending());
                row.push(ch);
                continue;
            }
            match self.matcher.push(ch) {
                Advance::Split => return Some(row),
                Advance::Hold => {}
                Advance::Literal(text) => row.push_str(&text),
            }
        }
        self.done = true;
        row.push_str(&self.matcher.take_pending());
        if row.is_empty() {
            None
        } else {
            Some(row)
        }
    }
}
