//! Chain the three engines: bytes → tokens → tree → bytes.

use crate::cursor::Cursor;
use crate::error::{LexError, ParseError, RenderError};
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::reader::Reader;
use crate::transpiler::Transpiler;

/// Failure of any pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Lexer Error: {0}")]
    Lex(#[from] LexError),
    #[error("Parse Error: {error}")]
    Parse {
        error: ParseError,
        /// Index of the token the reader was on when parsing failed.
        token_index: usize,
    },
    #[error("Transpile Error: {0}")]
    Render(#[from] RenderError),
}

impl Error {
    /// Stage name, as used in diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::Lex(_) => "lexer",
            Error::Parse { .. } => "parser",
            Error::Render(_) => "transpiler",
        }
    }
}

/// A lexer, parser and transpiler configured for one language.
#[derive(Debug)]
pub struct Frontend<T, N> {
    pub lexer: Lexer<T>,
    pub parser: Parser<T, N>,
    pub transpiler: Transpiler<N>,
}

impl<T, N> Frontend<T, N> {
    pub fn new(lexer: Lexer<T>, parser: Parser<T, N>, transpiler: Transpiler<N>) -> Self {
        Frontend {
            lexer,
            parser,
            transpiler,
        }
    }

    pub fn tokenize(&self, input: &[u8]) -> Result<Vec<T>, Error> {
        Ok(self.lexer.tokenize(&mut Cursor::new(input))?)
    }

    pub fn parse(&self, tokens: &[T]) -> Result<N, Error> {
        let mut reader = Reader::new(tokens);
        self.parser.parse(&mut reader).map_err(|error| Error::Parse {
            error,
            token_index: reader.position(),
        })
    }

    pub fn transpile(&self, node: &N) -> Result<Vec<u8>, Error> {
        Ok(self.transpiler.transpile(node)?)
    }

    /// Run all three stages on `input`.
    pub fn compile(&self, input: &[u8]) -> Result<Vec<u8>, Error> {
        let tokens = self.tokenize(input)?;
        let tree = self.parse(&tokens)?;
        self.transpile(&tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{take_while, IgnoreRule};
    use crate::ranges::digits;

    type Terms = Vec<Vec<u8>>;

    // Sums of numbers: "1 2 3" -> "1+2+3".
    fn adder() -> Frontend<Vec<u8>, Terms> {
        let lexer = Lexer::new(IgnoreRule::spaces()).rule(digits(), take_while);
        let parser = Parser::<Vec<u8>, Terms>::new("sum").rule("sum", |r, _| {
            let mut terms = Vec::new();
            while let Some(t) = r.token() {
                terms.push(t.clone());
                r.advance();
            }
            Ok(terms)
        });
        let transpiler = Transpiler::<Terms>::new().rule(|_| true, |n, _| Ok(n.join(&b'+')));
        Frontend::new(lexer, parser, transpiler)
    }

    #[test]
    fn compile_runs_every_stage() {
        assert_eq!(adder().compile(b"1 22 333").expect("compile"), b"1+22+333");
    }

    #[test]
    fn stage_errors_are_tagged() {
        let err = adder().compile(b"1 x").unwrap_err();
        assert_eq!(err.stage(), "lexer");
        assert!(err.to_string().starts_with("Lexer Error:"));

        let err = adder().compile(b"   ").unwrap_err();
        assert_eq!(
            err,
            Error::Parse { error: ParseError::NothingToParse, token_index: 0 }
        );
        assert!(err.to_string().starts_with("Parse Error:"));
    }

    #[test]
    fn stages_can_be_run_separately() {
        let f = adder();
        let tokens = f.tokenize(b"4 5").expect("tokenize");
        assert_eq!(tokens, vec![b"4".to_vec(), b"5".to_vec()]);
        let tree = f.parse(&tokens).expect("parse");
        assert_eq!(f.transpile(&tree).expect("transpile"), b"4+5");
    }
}
