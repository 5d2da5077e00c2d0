//! Demo language: JavaScript-style declarations rendered as Python-style source.
//!
//! ```text
//! let bar = 1234                    bar = 1234
//! function area(w, h = 1) {         def area(w, h=1):
//!   let unit = "m"                      unit = "m"
//! }
//! class Box {                       class Box:
//!   #open = false                       __open = False
//!   close() { }                         def close(self):
//!                                           pass
//! }
//! ```
//!
//! It exists to exercise the engines end to end and backs the `decl2py` binary.

pub mod grammar;
pub mod render;
pub mod tokens;

pub use grammar::{parser, Node, NodeKind};
pub use render::transpiler;
pub use tokens::{lexer, Token, TokenKind};

use crate::frontend::{Error, Frontend};
use std::sync::OnceLock;

/// The demo front end, built on first use and shared afterwards.
pub fn frontend() -> &'static Frontend<Token, Node> {
    static FRONTEND: OnceLock<Frontend<Token, Node>> = OnceLock::new();
    FRONTEND.get_or_init(|| Frontend::new(lexer(), parser(), transpiler()))
}

/// Transpile demo source to Python-style source.
pub fn compile(source: &[u8]) -> Result<Vec<u8>, Error> {
    frontend().compile(source)
}
