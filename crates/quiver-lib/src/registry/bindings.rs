//! Values bound to the captures of one match, handed to interpretation functions.

use indexmap::IndexMap;
use quiver_core::TaggedToken;

use super::error::InterpretError;
use crate::engine::join_words;
use crate::expr::ExpressionGraph;

/// One capture's value. Particle captures carry the particle's graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub text: String,
    pub graph: Option<ExpressionGraph>,
}

/// Captures visible to one interpretation function.
///
/// For a template these are the captures of the whole question; for a
/// particle, the captures inside its span. Captures nested in a particle are
/// consumed by that particle and do not appear at the outer level.
#[derive(Clone, Debug)]
pub struct Bindings<'t> {
    tokens: &'t [TaggedToken],
    values: IndexMap<String, Binding>,
}

impl<'t> Bindings<'t> {
    pub fn new(tokens: &'t [TaggedToken], values: IndexMap<String, Binding>) -> Self {
        Self { tokens, values }
    }

    /// Tokens of the matched span.
    pub fn tokens(&self) -> &'t [TaggedToken] {
        self.tokens
    }

    /// Surface text of the matched span.
    pub fn words(&self) -> String {
        join_words(self.tokens)
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Surface text of capture `name`.
    pub fn text(&self, name: &str) -> Result<&str, InterpretError> {
        self.binding(name).map(|b| b.text.as_str())
    }

    /// The graph a particle capture produced.
    pub fn graph(&self, name: &str) -> Result<ExpressionGraph, InterpretError> {
        self.binding(name)?
            .graph
            .clone()
            .ok_or_else(|| InterpretError::NotAParticle(name.to_owned()))
    }

    fn binding(&self, name: &str) -> Result<&Binding, InterpretError> {
        self.values
            .get(name)
            .ok_or_else(|| InterpretError::MissingBinding(name.to_owned()))
    }
}
