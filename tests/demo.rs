//! End-to-end tests of the demo language: tokens, trees and rendered output.

use ruleforge::demo::{self, Node, NodeKind, Token, TokenKind};
use ruleforge::{Error, LexError, ParseError};

fn tokens(src: &str) -> Vec<Token> {
    demo::frontend().tokenize(src.as_bytes()).expect("tokenize")
}

fn kinds_and_values(src: &str) -> Vec<(TokenKind, String)> {
    tokens(src).into_iter().map(|t| (t.kind, t.text())).collect()
}

fn tree(src: &str) -> Node {
    demo::frontend().parse(&tokens(src)).expect("parse")
}

fn compile(src: &str) -> String {
    String::from_utf8(demo::compile(src.as_bytes()).expect("compile")).expect("utf-8")
}

#[test]
fn variable_declaration_end_to_end() {
    let src = "let bar = 1234";
    assert_eq!(
        kinds_and_values(src),
        vec![
            (TokenKind::Word, "let".to_string()),
            (TokenKind::Word, "bar".to_string()),
            (TokenKind::Eql, "=".to_string()),
            (TokenKind::Num, "1234".to_string()),
        ]
    );

    let root = tree(src);
    assert_eq!(root.kind, NodeKind::Root);
    let decl = &root.children[0];
    assert_eq!(decl.kind, NodeKind::VarDeclaration);
    assert_eq!(decl.value(), b"bar");
    assert_eq!(decl.children[0].kind, NodeKind::NumberLiteral);

    let rendered = demo::frontend().transpile(decl).expect("transpile");
    assert_eq!(rendered, b"bar = 1234");
    assert_eq!(compile(src), "bar = 1234\n");
}

#[test]
fn booleans_become_python_spelling() {
    assert_eq!(compile("let ok = true"), "ok = True\n");
    assert_eq!(compile("const no = false"), "no = False\n");
}

#[test]
fn strings_keep_their_quotes() {
    assert_eq!(compile("var greeting = \"hi there\""), "greeting = \"hi there\"\n");
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    let toks = tokens("let s = \"open");
    let last = toks.last().expect("token");
    assert_eq!(last.kind, TokenKind::Str);
    assert_eq!(last.text(), "open");
    assert_eq!(compile("let s = \"open"), "s = \"open\"\n");
}

#[test]
fn multi_line_string_survives_indentation() {
    assert_eq!(
        compile("function f() { let s = \"a\nb\" }"),
        "def f():\n    s = \"a\\nb\"\n"
    );
    assert_eq!(
        compile("class C { m() { let s = \"x\r\ny\" } }"),
        "class C:\n    def m(self):\n        s = \"x\\r\\ny\"\n"
    );
}

#[test]
fn tokens_carry_line_and_column() {
    let toks = tokens("let a = 1\n  let b = 2");
    let b = &toks[5];
    assert_eq!(b.text(), "b");
    assert_eq!((b.line, b.column), (2, 7));
    assert_eq!((toks[0].line, toks[0].column), (1, 1));
}

#[test]
fn functions_and_defaults() {
    assert_eq!(
        compile("function area(w, h = 1) { let unit = \"m\" }"),
        "def area(w, h=1):\n    unit = \"m\"\n"
    );
    assert_eq!(compile("function noop() {}"), "def noop():\n    pass\n");
}

#[test]
fn nested_blocks_indent_per_level() {
    let src = "function outer() {\n  function inner(x) {\n    let y = 2\n  }\n}";
    assert_eq!(
        compile(src),
        "def outer():\n    def inner(x):\n        y = 2\n"
    );
}

#[test]
fn classes_with_fields_and_methods() {
    let src = "class Counter {\n  #count = 0\n  bump(step = 1) { let done = true }\n}";
    assert_eq!(
        compile(src),
        "class Counter:\n    __count = 0\n    def bump(self, step=1):\n        done = True\n"
    );
    assert_eq!(compile("class Empty { }"), "class Empty:\n    pass\n");
}

#[test]
fn several_declarations_one_per_line() {
    assert_eq!(compile("let a = 1 let b = 2"), "a = 1\nb = 2\n");
}

#[test]
fn unknown_byte_is_a_lexer_error() {
    let err = demo::compile(b"let a = 1;").unwrap_err();
    assert_eq!(err.stage(), "lexer");
    match err {
        Error::Lex(LexError::UnexpectedByte { byte, position }) => {
            assert_eq!(byte, b';');
            assert_eq!((position.line, position.column), (1, 10));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn parse_errors_name_the_failing_token() {
    let src = b"let a = 1\nlet = 2";
    let err = demo::compile(src).unwrap_err();
    assert_eq!(
        err,
        Error::Parse {
            error: ParseError::InvalidSyntax,
            token_index: 5,
        }
    );
}

#[test]
fn empty_source_is_nothing_to_parse() {
    let err = demo::compile(b" \n\t").unwrap_err();
    assert!(matches!(err, Error::Parse { error: ParseError::NothingToParse, .. }));
}

#[test]
fn rendering_is_deterministic() {
    let src = b"class A { #x = 1 m() { let y = \"z\" } } function f(a) { }";
    let first = demo::compile(src).expect("compile");
    let second = demo::compile(src).expect("compile");
    assert_eq!(first, second);
}
