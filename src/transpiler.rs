//! Tree-to-bytes renderer driven by an ordered list of render rules.
//!
//! Unlike most renderers this one is not first-match-wins: every rule whose
//! predicate accepts a node fires, in registration order, and the outputs are
//! concatenated. A node can thus be rendered in layers (say a header rule and a body
//! rule both matching the same node). Predicates that are not meant to layer must be
//! mutually exclusive.
//!
//! The engine imposes no traversal. Renderers recurse by calling
//! [`Transpiler::transpile`] on the children they care about, in the order they want.

use crate::error::RenderError;
use std::fmt;

/// Node predicate of a render rule.
pub type NodePredicate<N> = dyn Fn(&N) -> bool + Send + Sync;

/// Renderer: receives the node and the transpiler itself as a re-entrant handle.
pub type Renderer<N> = dyn Fn(&N, &Transpiler<N>) -> Result<Vec<u8>, RenderError> + Send + Sync;

pub struct RenderRule<N> {
    predicate: Box<NodePredicate<N>>,
    renderer: Box<Renderer<N>>,
}

impl<N> RenderRule<N> {
    pub fn new<P, R>(predicate: P, renderer: R) -> Self
    where
        P: Fn(&N) -> bool + Send + Sync + 'static,
        R: Fn(&N, &Transpiler<N>) -> Result<Vec<u8>, RenderError> + Send + Sync + 'static,
    {
        RenderRule {
            predicate: Box::new(predicate),
            renderer: Box::new(renderer),
        }
    }

    pub fn matches(&self, node: &N) -> bool {
        (self.predicate)(node)
    }
}

impl<N> fmt::Debug for RenderRule<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RenderRule(..)")
    }
}

#[derive(Debug)]
pub struct Transpiler<N> {
    rules: Vec<RenderRule<N>>,
}

impl<N> Default for Transpiler<N> {
    fn default() -> Self {
        Transpiler { rules: Vec::new() }
    }
}

impl<N> Transpiler<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a render rule.
    pub fn rule<P, R>(mut self, predicate: P, renderer: R) -> Self
    where
        P: Fn(&N) -> bool + Send + Sync + 'static,
        R: Fn(&N, &Transpiler<N>) -> Result<Vec<u8>, RenderError> + Send + Sync + 'static,
    {
        self.rules.push(RenderRule::new(predicate, renderer));
        self
    }

    pub fn with_rule(mut self, rule: RenderRule<N>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Render `node` with every matching rule.
    ///
    /// Fails with [`RenderError::EmptyOutput`] when nothing was produced, whether
    /// because no rule matched or because the matching ones rendered nothing.
    pub fn transpile(&self, node: &N) -> Result<Vec<u8>, RenderError> {
        let mut out = Vec::new();

        for rule in self.rules.iter().filter(|r| r.matches(node)) {
            let bytes = (rule.renderer)(node, self)?;
            out.extend_from_slice(&bytes);
        }

        if out.is_empty() {
            return Err(RenderError::EmptyOutput);
        }
        Ok(out)
    }

    /// Render each of `nodes` and join the results with `separator`.
    pub fn transpile_joined<'n, I>(&self, nodes: I, separator: &[u8]) -> Result<Vec<u8>, RenderError>
    where
        I: IntoIterator<Item = &'n N>,
        N: 'n,
    {
        let mut out = Vec::new();
        for (i, node) in nodes.into_iter().enumerate() {
            if i > 0 {
                out.extend_from_slice(separator);
            }
            out.extend(self.transpile(node)?);
        }
        Ok(out)
    }
}
