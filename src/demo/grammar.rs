//! Syntax tree of the demo language and the grammar rules that build it.
//!
//! ```text
//! root        := declaration+
//! declaration := ("let" | "var" | "const") NAME "=" value
//!              | "function" NAME args block
//!              | "class" NAME "{" member* "}"
//! member      := "#" NAME "=" value
//!              | NAME args block
//! args        := "(" [param ("," param)*] ")"
//! param       := NAME ["=" value]
//! block       := "{" declaration* "}"
//! value       := NUM | STR | "true" | "false"
//! ```

use super::tokens::{Token, TokenKind};
use crate::error::ParseError;
use crate::parser::{Parser, Resolver};
use crate::reader::Reader;

pub const ROOT: &str = "root";
pub const DECLARATION: &str = "declaration";
pub const MEMBER: &str = "member";
pub const ARGS: &str = "args";
pub const BLOCK: &str = "block";
pub const VALUE: &str = "value";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    VarDeclaration,
    FuncDeclaration,
    ClassDeclaration,
    Args,
    Param,
    Block,
    PrivateField,
    Method,
    NumberLiteral,
    StringLiteral,
    BoolLiteral,
}

/// Tree node. `token` is the name of declarations and params and the lexeme of
/// literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub token: Option<Token>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            token: None,
            children: Vec::new(),
        }
    }

    pub fn with_token(kind: NodeKind, token: Token) -> Self {
        Node {
            kind,
            token: Some(token),
            children: Vec::new(),
        }
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    /// Raw bytes of the node's token (empty if it has none).
    pub fn value(&self) -> &[u8] {
        self.token.as_ref().map(|t| t.value.as_slice()).unwrap_or_default()
    }
}

type R<'r, 'a> = &'r mut Reader<'a, Token>;
type F<'r, 'p> = &'r Resolver<'p, Token, Node>;

fn current<'a>(r: &Reader<'a, Token>) -> Result<&'a Token, ParseError> {
    r.token().ok_or(ParseError::InvalidSyntax)
}

/// Consume a token of `kind` or fail with invalid syntax.
fn expect(r: R<'_, '_>, kind: TokenKind) -> Result<Token, ParseError> {
    let t = current(r)?;
    if !t.is(kind) {
        return Err(ParseError::InvalidSyntax);
    }
    r.advance();
    Ok(t.clone())
}

fn at(r: &Reader<'_, Token>, kind: TokenKind) -> bool {
    r.token().map_or(false, |t| t.is(kind))
}

fn parse_root(r: R<'_, '_>, f: F<'_, '_>) -> Result<Node, ParseError> {
    let mut nd = Node::new(NodeKind::Root);
    while r.has_tokens() {
        if !at(r, TokenKind::Word) {
            return Err(ParseError::InvalidSyntax);
        }
        nd.children.push(f.call(DECLARATION, r)?);
    }
    Ok(nd)
}

fn parse_declaration(r: R<'_, '_>, f: F<'_, '_>) -> Result<Node, ParseError> {
    let keyword = current(r)?;

    if keyword.is_word("let") || keyword.is_word("var") || keyword.is_word("const") {
        r.advance();
        let mut nd = Node::with_token(NodeKind::VarDeclaration, expect(r, TokenKind::Word)?);
        expect(r, TokenKind::Eql)?;
        nd.children.push(f.call(VALUE, r)?);
        return Ok(nd);
    }

    if keyword.is_word("function") {
        r.advance();
        let mut nd = Node::with_token(NodeKind::FuncDeclaration, expect(r, TokenKind::Word)?);
        nd.children.push(f.call(ARGS, r)?);
        nd.children.push(f.call(BLOCK, r)?);
        return Ok(nd);
    }

    if keyword.is_word("class") {
        r.advance();
        let mut nd = Node::with_token(NodeKind::ClassDeclaration, expect(r, TokenKind::Word)?);
        expect(r, TokenKind::LeftBrace)?;
        while r.has_tokens() && !at(r, TokenKind::RightBrace) {
            nd.children.push(f.call(MEMBER, r)?);
        }
        expect(r, TokenKind::RightBrace)?;
        return Ok(nd);
    }

    Err(ParseError::InvalidSyntax)
}

fn parse_member(r: R<'_, '_>, f: F<'_, '_>) -> Result<Node, ParseError> {
    let t = current(r)?;
    match t.kind {
        TokenKind::Hash => {
            r.advance();
            let mut nd = Node::with_token(NodeKind::PrivateField, expect(r, TokenKind::Word)?);
            expect(r, TokenKind::Eql)?;
            nd.children.push(f.call(VALUE, r)?);
            Ok(nd)
        }
        TokenKind::Word => {
            r.advance();
            let mut nd = Node::with_token(NodeKind::Method, t.clone());
            nd.children.push(f.call(ARGS, r)?);
            nd.children.push(f.call(BLOCK, r)?);
            Ok(nd)
        }
        _ => Err(ParseError::UnhandledToken),
    }
}

fn parse_args(r: R<'_, '_>, f: F<'_, '_>) -> Result<Node, ParseError> {
    let mut nd = Node::new(NodeKind::Args);
    expect(r, TokenKind::LeftPrt)?;

    if at(r, TokenKind::RightPrt) {
        r.advance();
        return Ok(nd);
    }

    loop {
        let mut param = Node::with_token(NodeKind::Param, expect(r, TokenKind::Word)?);
        if at(r, TokenKind::Eql) {
            r.advance();
            param.children.push(f.call(VALUE, r)?);
        }
        nd.children.push(param);

        match current(r)?.kind {
            TokenKind::Comma => r.advance(),
            TokenKind::RightPrt => {
                r.advance();
                return Ok(nd);
            }
            _ => return Err(ParseError::InvalidSyntax),
        }
    }
}

fn parse_block(r: R<'_, '_>, f: F<'_, '_>) -> Result<Node, ParseError> {
    let mut nd = Node::new(NodeKind::Block);
    expect(r, TokenKind::LeftBrace)?;
    while r.has_tokens() && !at(r, TokenKind::RightBrace) {
        nd.children.push(f.call(DECLARATION, r)?);
    }
    expect(r, TokenKind::RightBrace)?;
    Ok(nd)
}

fn parse_value(r: R<'_, '_>, _: F<'_, '_>) -> Result<Node, ParseError> {
    let t = current(r)?;
    let kind = match t.kind {
        TokenKind::Num => NodeKind::NumberLiteral,
        TokenKind::Str => NodeKind::StringLiteral,
        TokenKind::Word if t.is_value("true") || t.is_value("false") => NodeKind::BoolLiteral,
        _ => return Err(ParseError::UnhandledToken),
    };
    r.advance();
    Ok(Node::with_token(kind, t.clone()))
}

/// Parser for the demo language, rooted at [`ROOT`].
pub fn parser() -> Parser<Token, Node> {
    Parser::new(ROOT)
        .rule(ROOT, parse_root)
        .rule(DECLARATION, parse_declaration)
        .rule(MEMBER, parse_member)
        .rule(ARGS, parse_args)
        .rule(BLOCK, parse_block)
        .rule(VALUE, parse_value)
}
