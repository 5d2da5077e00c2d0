//! Per-stage error kinds. Every error is fatal to the call that raised it.

use crate::cursor::Position;

/// Tokenization failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// No ignore or lexical rule accepts the byte under the cursor.
    #[error("unexpected byte 0x{byte:02x} at {position}")]
    UnexpectedByte { byte: u8, position: Position },
}

impl LexError {
    pub fn position(&self) -> Position {
        match self {
            LexError::UnexpectedByte { position, .. } => *position,
        }
    }
}

/// Parse failure, raised by the engine or by grammar rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("the root parser rule `{0}` was not found")]
    RootRuleMissing(String),
    #[error("no tokens were given to parse")]
    NothingToParse,
    #[error("the parser rule `{0}` was not found")]
    RuleNotFound(String),
    /// Structural mismatch.
    #[error("the syntax is invalid")]
    InvalidSyntax,
    /// Well-formed, but not expected here (includes input left over after the root rule).
    #[error("unhandled token")]
    UnhandledToken,
}

/// Rendering failure, raised by the engine or by renderers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// No render rule matched, or every matching renderer produced nothing.
    #[error("no bytes resulted from the transpilation")]
    EmptyOutput,
    #[error("unexpected token while rendering")]
    UnexpectedToken,
    #[error("{0}")]
    Message(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_display_carries_byte_and_position() {
        let e = LexError::UnexpectedByte {
            byte: b'%',
            position: Position { line: 2, column: 5, offset: 9 },
        };
        let s = e.to_string();
        assert!(s.contains("0x25"), "{}", s);
        assert!(s.contains("line 2 column 5"), "{}", s);
        assert_eq!(e.position().offset, 9);
    }

    #[test]
    fn parse_error_names_the_rule() {
        assert_eq!(
            ParseError::RuleNotFound("term".into()).to_string(),
            "the parser rule `term` was not found"
        );
        assert_eq!(
            ParseError::RootRuleMissing("root".into()).to_string(),
            "the root parser rule `root` was not found"
        );
    }

    #[test]
    fn render_error_message_is_verbatim() {
        assert_eq!(RenderError::Message("bad node".into()).to_string(), "bad node");
        assert_eq!(
            RenderError::EmptyOutput.to_string(),
            "no bytes resulted from the transpilation"
        );
    }
}
