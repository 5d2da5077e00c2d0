//! Single-pass reader over a byte buffer, with line tracking for error reports.

use std::fmt;

/// Source location of the byte a cursor has loaded.
///
/// `line` and `column` are 1-based; `offset` is the 0-based index into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}

/// Sequential byte reader used by the lexer and its rules.
///
/// Nothing is loaded until the first [`advance`](Cursor::advance): until then
/// [`current`](Cursor::current) returns the sentinel `0`. Advancing past the last
/// byte makes [`has_char`](Cursor::has_char) false; further advances are no-ops and
/// the last byte stays loaded.
#[derive(Debug)]
pub struct Cursor<'a> {
    content: &'a [u8],
    offset: usize,
    loaded: bool,
    line: usize,
    line_start: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(content: &'a [u8]) -> Self {
        Cursor {
            content,
            offset: 0,
            loaded: false,
            line: 1,
            line_start: 0,
        }
    }

    /// Whether bytes remain to be read.
    pub fn has_char(&self) -> bool {
        self.offset < self.content.len()
    }

    /// The loaded byte (`0` before the first advance).
    pub fn current(&self) -> u8 {
        if !self.loaded {
            return 0;
        }
        match self.content.get(self.offset) {
            Some(&b) => b,
            None => self.content.last().copied().unwrap_or(0),
        }
    }

    /// Load the next byte.
    pub fn advance(&mut self) {
        if !self.loaded {
            self.loaded = true;
        } else if self.offset < self.content.len() {
            self.offset += 1;
        }
    }

    /// Count `lines` newlines as consumed. The byte after the loaded one starts the
    /// new line.
    pub fn add_line(&mut self, lines: usize) {
        self.line += lines;
        self.line_start = self.offset + 1;
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.offset.saturating_sub(self.line_start) + 1,
            offset: self.offset,
        }
    }
}
