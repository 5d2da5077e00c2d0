//! Render rules turning demo syntax trees into Python-flavoured source.
//!
//! Functions, methods and classes are rendered in two layers: one rule writes the
//! header line, a second rule matching the same node writes the indented body.

use super::grammar::{Node, NodeKind};
use crate::error::RenderError;
use crate::transpiler::Transpiler;

const INDENT: &[u8] = b"    ";

/// Prefix every non-empty line of `body` with one indentation level.
fn indent(body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + INDENT.len());
    for (i, line) in body.split(|&b| b == b'\n').enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        if !line.is_empty() {
            out.extend_from_slice(INDENT);
            out.extend_from_slice(line);
        }
    }
    out
}

/// Indented children one per line, or `pass` when there are none.
fn suite(children: &[Node], t: &Transpiler<Node>) -> Result<Vec<u8>, RenderError> {
    if children.is_empty() {
        return Ok(indent(b"pass"));
    }
    Ok(indent(&t.transpile_joined(children, b"\n")?))
}

fn child(n: &Node, i: usize) -> Result<&Node, RenderError> {
    n.children
        .get(i)
        .ok_or_else(|| RenderError::Message(format!("{:?} node is missing child {}", n.kind, i)))
}

fn render_root(n: &Node, t: &Transpiler<Node>) -> Result<Vec<u8>, RenderError> {
    let mut b = Vec::new();
    for c in &n.children {
        b.extend(t.transpile(c)?);
        b.push(b'\n');
    }
    Ok(b)
}

fn render_var(n: &Node, t: &Transpiler<Node>) -> Result<Vec<u8>, RenderError> {
    let mut b = n.value().to_vec();
    b.extend_from_slice(b" = ");
    b.extend(t.transpile(child(n, 0)?)?);
    Ok(b)
}

/// `def name(params):` for functions, `def name(self, params):` for methods.
fn render_signature(n: &Node, t: &Transpiler<Node>) -> Result<Vec<u8>, RenderError> {
    let args = child(n, 0)?;
    let mut b = b"def ".to_vec();
    b.extend_from_slice(n.value());
    b.push(b'(');
    if n.is(NodeKind::Method) {
        b.extend_from_slice(b"self");
        if !args.children.is_empty() {
            b.extend_from_slice(b", ");
        }
    }
    // An empty parameter list renders to nothing, which the engine treats as an error.
    if !args.children.is_empty() {
        b.extend(t.transpile(args)?);
    }
    b.extend_from_slice(b"):\n");
    Ok(b)
}

fn render_callable_body(n: &Node, t: &Transpiler<Node>) -> Result<Vec<u8>, RenderError> {
    t.transpile(child(n, 1)?)
}

fn render_block(n: &Node, t: &Transpiler<Node>) -> Result<Vec<u8>, RenderError> {
    suite(&n.children, t)
}

fn render_class_header(n: &Node, _: &Transpiler<Node>) -> Result<Vec<u8>, RenderError> {
    let mut b = b"class ".to_vec();
    b.extend_from_slice(n.value());
    b.extend_from_slice(b":\n");
    Ok(b)
}

fn render_class_body(n: &Node, t: &Transpiler<Node>) -> Result<Vec<u8>, RenderError> {
    suite(&n.children, t)
}

fn render_args(n: &Node, t: &Transpiler<Node>) -> Result<Vec<u8>, RenderError> {
    t.transpile_joined(&n.children, b", ")
}

fn render_param(n: &Node, t: &Transpiler<Node>) -> Result<Vec<u8>, RenderError> {
    let mut b = n.value().to_vec();
    if let Some(default) = n.children.first() {
        b.push(b'=');
        b.extend(t.transpile(default)?);
    }
    Ok(b)
}

fn render_private_field(n: &Node, t: &Transpiler<Node>) -> Result<Vec<u8>, RenderError> {
    let mut b = b"__".to_vec();
    b.extend(render_var(n, t)?);
    Ok(b)
}

fn render_num(n: &Node, _: &Transpiler<Node>) -> Result<Vec<u8>, RenderError> {
    Ok(n.value().to_vec())
}

fn render_str(n: &Node, _: &Transpiler<Node>) -> Result<Vec<u8>, RenderError> {
    let mut b = Vec::with_capacity(n.value().len() + 2);
    b.push(b'"');
    // Raw line breaks would be re-indented along with the enclosing suite.
    for &c in n.value() {
        match c {
            b'\n' => b.extend_from_slice(b"\\n"),
            b'\r' => b.extend_from_slice(b"\\r"),
            _ => b.push(c),
        }
    }
    b.push(b'"');
    Ok(b)
}

fn render_bool(n: &Node, _: &Transpiler<Node>) -> Result<Vec<u8>, RenderError> {
    match n.value() {
        b"true" => Ok(b"True".to_vec()),
        b"false" => Ok(b"False".to_vec()),
        _ => Err(RenderError::UnexpectedToken),
    }
}

fn is(kind: NodeKind) -> impl Fn(&Node) -> bool + Send + Sync + 'static {
    move |n| n.kind == kind
}

fn is_callable(n: &Node) -> bool {
    matches!(n.kind, NodeKind::FuncDeclaration | NodeKind::Method)
}

/// Transpiler for demo syntax trees.
pub fn transpiler() -> Transpiler<Node> {
    Transpiler::new()
        .rule(is(NodeKind::Root), render_root)
        .rule(is(NodeKind::VarDeclaration), render_var)
        .rule(is_callable, render_signature)
        .rule(is_callable, render_callable_body)
        .rule(is(NodeKind::Block), render_block)
        .rule(is(NodeKind::ClassDeclaration), render_class_header)
        .rule(is(NodeKind::ClassDeclaration), render_class_body)
        .rule(is(NodeKind::Args), render_args)
        .rule(is(NodeKind::Param), render_param)
        .rule(is(NodeKind::PrivateField), render_private_field)
        .rule(is(NodeKind::NumberLiteral), render_num)
        .rule(is(NodeKind::StringLiteral), render_str)
        .rule(is(NodeKind::BoolLiteral), render_bool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::tokens::{Token, TokenKind};

    fn literal(kind: NodeKind, token: TokenKind, value: &str) -> Node {
        Node::with_token(kind, Token::new(token, value))
    }

    fn render(n: &Node) -> Result<String, RenderError> {
        transpiler()
            .transpile(n)
            .map(|b| String::from_utf8(b).expect("utf-8"))
    }

    #[test]
    fn indent_skips_empty_lines() {
        assert_eq!(indent(b"a\n\nb"), b"    a\n\n    b");
        assert_eq!(indent(b""), b"");
    }

    #[test]
    fn literals() {
        assert_eq!(render(&literal(NodeKind::NumberLiteral, TokenKind::Num, "42")).unwrap(), "42");
        assert_eq!(render(&literal(NodeKind::StringLiteral, TokenKind::Str, "hi")).unwrap(), "\"hi\"");
        assert_eq!(render(&literal(NodeKind::BoolLiteral, TokenKind::Word, "true")).unwrap(), "True");
        assert_eq!(render(&literal(NodeKind::BoolLiteral, TokenKind::Word, "false")).unwrap(), "False");
    }

    #[test]
    fn bool_with_other_spelling_is_unexpected() {
        let n = literal(NodeKind::BoolLiteral, TokenKind::Word, "yes");
        assert_eq!(render(&n), Err(RenderError::UnexpectedToken));
    }

    #[test]
    fn empty_string_literal_still_renders_quotes() {
        assert_eq!(render(&literal(NodeKind::StringLiteral, TokenKind::Str, "")).unwrap(), "\"\"");
    }

    #[test]
    fn line_breaks_in_strings_are_escaped() {
        let n = literal(NodeKind::StringLiteral, TokenKind::Str, "a\nb\r\nc");
        assert_eq!(render(&n).unwrap(), "\"a\\nb\\r\\nc\"");
    }

    #[test]
    fn empty_lexeme_is_empty_output() {
        // The lexer never yields an empty number, hand-built trees can.
        let n = literal(NodeKind::NumberLiteral, TokenKind::Num, "");
        assert_eq!(render(&n), Err(RenderError::EmptyOutput));
    }

    #[test]
    fn variable_missing_its_value() {
        let n = Node::with_token(NodeKind::VarDeclaration, Token::new(TokenKind::Word, "x"));
        assert!(matches!(render(&n), Err(RenderError::Message(_))));
    }

    #[test]
    fn function_layers_signature_and_body() {
        let mut args = Node::new(NodeKind::Args);
        args.children.push(Node::with_token(NodeKind::Param, Token::new(TokenKind::Word, "a")));
        let mut f = Node::with_token(NodeKind::FuncDeclaration, Token::new(TokenKind::Word, "f"));
        f.children.push(args);
        f.children.push(Node::new(NodeKind::Block));
        assert_eq!(render(&f).unwrap(), "def f(a):\n    pass");
    }
}
