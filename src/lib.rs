//! # ruleforge: table-driven front ends for little languages
//!
//! Three generic engines, each configured by immutable rule tables instead of a
//! hand-written state machine:
//!
//! - **Lexer**: one ignore rule and ordered lexical rules, each triggered by a
//!   [`ByteRange`]. Bytes in, tokens out.
//! - **Parser**: named grammar rules that call each other through a [`Resolver`],
//!   parsing from a root rule. Tokens in, tree out.
//! - **Transpiler**: ordered (predicate, renderer) pairs; every matching rule fires.
//!   Tree in, bytes out.
//!
//! The engines never look inside tokens or nodes: both are type parameters whose
//! shape only the rules know. A [`Frontend`] chains the three.
//!
//! ## Example
//!
//! ```
//! use ruleforge::lexer::{take_while, IgnoreRule, Lexer};
//! use ruleforge::ranges::digits;
//! use ruleforge::{Frontend, Parser, Transpiler};
//!
//! let lexer = Lexer::new(IgnoreRule::spaces()).rule(digits(), take_while);
//! let parser = Parser::<Vec<u8>, Vec<Vec<u8>>>::new("sum").rule("sum", |r, _| {
//!     let mut terms = Vec::new();
//!     while let Some(t) = r.token() {
//!         terms.push(t.clone());
//!         r.advance();
//!     }
//!     Ok(terms)
//! });
//! let transpiler = Transpiler::<Vec<Vec<u8>>>::new().rule(|_| true, |terms, _| Ok(terms.join(&b'+')));
//!
//! let sum = Frontend::new(lexer, parser, transpiler);
//! assert_eq!(sum.compile(b"1 2 3").unwrap(), b"1+2+3");
//! ```
//!
//! The `demo` feature (on by default) adds a complete sample language in [`demo`],
//! used by the `decl2py` binary.

pub mod cursor;
pub mod error;
pub mod frontend;
pub mod lexer;
pub mod parser;
pub mod ranges;
pub mod reader;
pub mod transpiler;

#[cfg(feature = "demo")]
pub mod demo;

pub use cursor::{Cursor, Position};
pub use error::{LexError, ParseError, RenderError};
pub use frontend::{Error, Frontend};
pub use lexer::{IgnoreRule, Lexer, LexicalRule};
pub use parser::{Parser, Resolver};
pub use ranges::ByteRange;
pub use reader::Reader;
pub use transpiler::{RenderRule, Transpiler};
