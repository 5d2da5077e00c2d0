//! Recursive-descent parser driven by a table of named rules.
//!
//! Rules never reference each other directly. Each one receives a [`Resolver`] and
//! invokes sub-rules by name through it, so rules may recurse into each other in
//! any order without a linking step. Every rule decides alone what it expects and
//! how far it advances the reader; the engine adds no backtracking or lookahead.
//!
//! Recursion depth is bounded only by the thread's stack.

use crate::error::ParseError;
use crate::reader::Reader;
use std::collections::HashMap;
use std::fmt;

/// A named grammar rule.
pub type GrammarRule<T, N> =
    dyn Fn(&mut Reader<'_, T>, &Resolver<'_, T, N>) -> Result<N, ParseError> + Send + Sync;

/// Rule table plus the name of the rule parsing starts from.
pub struct Parser<T, N> {
    rules: HashMap<String, Box<GrammarRule<T, N>>>,
    root: String,
}

/// Lookup-by-name handle passed to every rule invocation.
pub struct Resolver<'p, T, N> {
    parser: &'p Parser<T, N>,
}

impl<'p, T, N> Resolver<'p, T, N> {
    /// Run the rule called `name` on the same reader.
    pub fn call(&self, name: &str, reader: &mut Reader<'_, T>) -> Result<N, ParseError> {
        let rule = self
            .parser
            .rules
            .get(name)
            .ok_or_else(|| ParseError::RuleNotFound(name.to_string()))?;
        rule(reader, self)
    }
}

impl<T, N> Parser<T, N> {
    pub fn new(root: impl Into<String>) -> Self {
        Parser {
            rules: HashMap::new(),
            root: root.into(),
        }
    }

    /// Register `rule` under `name`, replacing any rule of the same name.
    pub fn rule<F>(mut self, name: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&mut Reader<'_, T>, &Resolver<'_, T, N>) -> Result<N, ParseError>
            + Send
            + Sync
            + 'static,
    {
        self.rules.insert(name.into(), Box::new(rule));
        self
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn has_rule(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Parse everything the reader holds from the root rule.
    ///
    /// Fails with [`ParseError::UnhandledToken`] if the root rule returns while
    /// tokens are left over.
    pub fn parse(&self, reader: &mut Reader<'_, T>) -> Result<N, ParseError> {
        let root = self
            .rules
            .get(&self.root)
            .ok_or_else(|| ParseError::RootRuleMissing(self.root.clone()))?;

        reader.advance();
        if !reader.has_tokens() {
            return Err(ParseError::NothingToParse);
        }

        let node = root(reader, &Resolver { parser: self })?;

        if reader.has_tokens() {
            return Err(ParseError::UnhandledToken);
        }
        Ok(node)
    }

    /// Parse a whole token slice with a fresh reader.
    pub fn parse_tokens(&self, tokens: &[T]) -> Result<N, ParseError> {
        self.parse(&mut Reader::new(tokens))
    }
}

impl<T, N> fmt::Debug for Parser<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.rules.keys().collect();
        names.sort();
        f.debug_struct("Parser")
            .field("root", &self.root)
            .field("rules", &names)
            .finish()
    }
}
