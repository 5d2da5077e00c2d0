//! Rule-driven tokenizer.
//!
//! A [`Lexer`] holds one [`IgnoreRule`] and an ordered list of [`LexicalRule`]s.
//! For each byte the ignore rule is tried first, then the lexical rules in
//! registration order; the first rule whose trigger accepts the byte takes over the
//! cursor and produces one token. Narrower triggers must therefore be registered
//! before broader ones.
//!
//! Rule routines own cursor advancement and must consume at least one byte. The
//! engine does not guard against a routine that never advances.

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::ranges::{self, ByteRange};
use std::fmt;

/// Token-construction routine: called with the cursor on the trigger byte and the
/// trigger range itself.
pub type TokenRoutine<T> = dyn Fn(&mut Cursor<'_>, &ByteRange) -> T + Send + Sync;

/// Skip routine of an [`IgnoreRule`].
pub type SkipRoutine = dyn Fn(&mut Cursor<'_>, &ByteRange) + Send + Sync;

/// A trigger range paired with the routine that builds a token from it.
pub struct LexicalRule<T> {
    trigger: ByteRange,
    routine: Box<TokenRoutine<T>>,
}

impl<T> LexicalRule<T> {
    pub fn new<F>(trigger: ByteRange, routine: F) -> Self
    where
        F: Fn(&mut Cursor<'_>, &ByteRange) -> T + Send + Sync + 'static,
    {
        LexicalRule {
            trigger,
            routine: Box::new(routine),
        }
    }

    pub fn trigger(&self) -> &ByteRange {
        &self.trigger
    }
}

impl<T> fmt::Debug for LexicalRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexicalRule").field("trigger", &self.trigger).finish_non_exhaustive()
    }
}

/// Bytes that separate tokens but produce none.
pub struct IgnoreRule {
    trigger: ByteRange,
    skip: Box<SkipRoutine>,
}

impl IgnoreRule {
    pub fn new<F>(trigger: ByteRange, skip: F) -> Self
    where
        F: Fn(&mut Cursor<'_>, &ByteRange) + Send + Sync + 'static,
    {
        IgnoreRule {
            trigger,
            skip: Box::new(skip),
        }
    }

    /// Skip single spaces (0x20).
    pub fn spaces() -> Self {
        IgnoreRule::new(ranges::space(), |c, _| c.advance())
    }

    /// Skip spaces, tabs, carriage returns and line feeds, counting lines.
    pub fn whitespace() -> Self {
        IgnoreRule::new(ranges::set(b" \t\r\n"), |c, _| {
            if c.current() == b'\n' {
                c.add_line(1);
            }
            c.advance();
        })
    }

    /// Ignore nothing.
    pub fn none() -> Self {
        IgnoreRule::new(ranges::set(&[]), |c, _| c.advance())
    }

    pub fn trigger(&self) -> &ByteRange {
        &self.trigger
    }
}

impl fmt::Debug for IgnoreRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IgnoreRule").field("trigger", &self.trigger).finish_non_exhaustive()
    }
}

/// Tokenizer configured by an ignore rule and ordered lexical rules.
///
/// Immutable once built; share it freely between threads, each
/// [`tokenize`](Lexer::tokenize) call works on its own [`Cursor`].
#[derive(Debug)]
pub struct Lexer<T> {
    ignore: IgnoreRule,
    rules: Vec<LexicalRule<T>>,
}

impl<T> Lexer<T> {
    pub fn new(ignore: IgnoreRule) -> Self {
        Lexer {
            ignore,
            rules: Vec::new(),
        }
    }

    /// Append a lexical rule. Earlier rules win over later ones.
    pub fn rule<F>(mut self, trigger: ByteRange, routine: F) -> Self
    where
        F: Fn(&mut Cursor<'_>, &ByteRange) -> T + Send + Sync + 'static,
    {
        self.rules.push(LexicalRule::new(trigger, routine));
        self
    }

    /// Append an already built rule.
    pub fn with_rule(mut self, rule: LexicalRule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[LexicalRule<T>] {
        &self.rules
    }

    /// Drain the cursor into tokens. Stops at the first byte no rule accepts;
    /// nothing tokenized before that point is returned.
    pub fn tokenize(&self, cursor: &mut Cursor<'_>) -> Result<Vec<T>, LexError> {
        let mut tokens = Vec::new();
        cursor.advance();

        while cursor.has_char() {
            let b = cursor.current();

            if self.ignore.trigger.contains(b) {
                (self.ignore.skip)(cursor, &self.ignore.trigger);
                continue;
            }

            match self.rules.iter().find(|r| r.trigger.contains(b)) {
                Some(rule) => tokens.push((rule.routine)(cursor, &rule.trigger)),
                None => {
                    return Err(LexError::UnexpectedByte {
                        byte: b,
                        position: cursor.position(),
                    })
                }
            }
        }

        Ok(tokens)
    }

    /// Tokenize a whole buffer with a fresh cursor.
    pub fn tokenize_bytes(&self, input: &[u8]) -> Result<Vec<T>, LexError> {
        self.tokenize(&mut Cursor::new(input))
    }
}

/// Consume bytes while `range` accepts them, returning what was consumed.
///
/// The usual body of a lexical rule for runs of one byte class.
pub fn take_while(cursor: &mut Cursor<'_>, range: &ByteRange) -> Vec<u8> {
    let mut out = Vec::new();
    while cursor.has_char() && range.contains(cursor.current()) {
        out.push(cursor.current());
        cursor.advance();
    }
    out
}
