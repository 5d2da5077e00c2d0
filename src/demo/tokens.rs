//! Tokens of the demo language and the lexer that produces them.

use crate::cursor::Cursor;
use crate::lexer::{take_while, IgnoreRule, Lexer};
use crate::ranges::{self, ByteRange};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Num,
    Word,
    Str,
    Eql,
    Comma,
    LeftPrt,
    RightPrt,
    LeftBrace,
    RightBrace,
    Hash,
}

impl TokenKind {
    /// Kind of a punctuation byte.
    pub fn of_punctuation(b: u8) -> Option<TokenKind> {
        match b {
            b'=' => Some(TokenKind::Eql),
            b',' => Some(TokenKind::Comma),
            b'(' => Some(TokenKind::LeftPrt),
            b')' => Some(TokenKind::RightPrt),
            b'{' => Some(TokenKind::LeftBrace),
            b'}' => Some(TokenKind::RightBrace),
            b'#' => Some(TokenKind::Hash),
            _ => None,
        }
    }
}

/// One lexeme with the position of its first byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw bytes; string literals exclude their quotes.
    pub value: Vec<u8>,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<Vec<u8>>) -> Self {
        Token {
            kind,
            value: value.into(),
            line: 0,
            column: 0,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_value(&self, value: &str) -> bool {
        self.value == value.as_bytes()
    }

    /// A `Word` spelling `value`.
    pub fn is_word(&self, value: &str) -> bool {
        self.is(TokenKind::Word) && self.is_value(value)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.value).into_owned()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text())
    }
}

fn start(kind: TokenKind, c: &Cursor<'_>) -> Token {
    let pos = c.position();
    Token {
        kind,
        value: Vec::new(),
        line: pos.line,
        column: pos.column,
    }
}

fn lex_num(c: &mut Cursor<'_>, r: &ByteRange) -> Token {
    let mut t = start(TokenKind::Num, c);
    t.value = take_while(c, r);
    t
}

/// Starts on a letter, continues over `body`.
fn lex_word(c: &mut Cursor<'_>, body: &ByteRange) -> Token {
    let mut t = start(TokenKind::Word, c);
    t.value = take_while(c, body);
    t
}

fn lex_punctuation(c: &mut Cursor<'_>, _: &ByteRange) -> Token {
    let b = c.current();
    // The trigger only admits bytes `of_punctuation` knows.
    let kind = TokenKind::of_punctuation(b).unwrap_or(TokenKind::Hash);
    let mut t = start(kind, c);
    t.value.push(b);
    c.advance();
    t
}

/// Runs from the opening quote to the closing one. Unterminated strings take the
/// rest of the input.
fn lex_str(c: &mut Cursor<'_>, quote: &ByteRange) -> Token {
    let mut t = start(TokenKind::Str, c);
    c.advance();
    while c.has_char() && !quote.contains(c.current()) {
        let b = c.current();
        if b == b'\n' {
            c.add_line(1);
        }
        t.value.push(b);
        c.advance();
    }
    if c.has_char() {
        c.advance();
    }
    t
}

/// Lexer for the demo language. Whitespace, newlines included, separates tokens.
pub fn lexer() -> Lexer<Token> {
    let word_body = ranges::alphanumeric();
    Lexer::new(IgnoreRule::whitespace())
        .rule(ranges::digits(), lex_num)
        .rule(ranges::letters(), move |c, _| lex_word(c, &word_body))
        .rule(ranges::punctuation(), lex_punctuation)
        .rule(ranges::quote(), lex_str)
}
