//! Prefix-buffering delimiter matcher shared by both tokenizers
//!
//! Delimiters may be longer than one character, so a character that looks
//! like the start of a delimiter cannot be committed to the token content
//! until the match either completes or falls apart. The matcher buffers the
//! ambiguous prefix and reports, per character, whether the token should be
//! split, the character held, or the buffer flushed back as literal content.

/// Outcome of feeding one character to the matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Advance {
    /// The buffered characters completed the delimiter: the token content
    /// accumulated so far is a finished token
    Split,
    /// The character extends a possible delimiter; nothing to commit yet
    Hold,
    /// The buffered prefix turned out not to be a delimiter: this text is
    /// literal token content (the current character may still be held as
    /// the start of a fresh match)
    Literal(String),
}

/// Incremental matcher for one delimiter against a character stream
///
/// Invariant: `pending` is always a strict prefix of `delimiter`, so its
/// length is bounded by the delimiter's length.
#[derive(Debug)]
pub(crate) struct DelimiterMatcher<'a> {
    delimiter: &'a str,
    pending: String,
}

impl<'a> DelimiterMatcher<'a> {
    /// Create a matcher for the given non-empty delimiter
    pub fn new(delimiter: &'a str) -> Self {
        debug_assert!(!delimiter.is_empty(), "delimiter must be non-empty");
        DelimiterMatcher {
            delimiter,
            pending: String::new(),
        }
    }

    /// Feed the next character and classify it
    pub fn push(&mut self, ch: char) -> Advance {
        self.pending.push(ch);
        if self.pending == self.delimiter {
            self.pending.clear();
            return Advance::Split;
        }
        if self.delimiter.starts_with(self.pending.as_str()) {
            return Advance::Hold;
        }

        // The buffer is not a delimiter after all. The previously buffered
        // prefix becomes literal content, and the current character is
        // re-examined against an empty buffer: it may itself start a match.
        self.pending.pop();
        let mut literal = std::mem::take(&mut self.pending);
        if self.delimiter.starts_with(ch) {
            self.pending.push(ch);
        } else {
            literal.push(ch);
        }
        Advance::Literal(literal)
    }

    /// Give back whatever prefix is still buffered, as literal text
    ///
    /// Called when the input ends mid-match, or when quote state suspends
    /// delimiter matching while a prefix is pending.
    pub fn take_pending(&mut self) -> String {
        std::mem::take(&mut self.pending)
    }
}
