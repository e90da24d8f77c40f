//! Templates, particles and what interpreting them produces.

use std::fmt;

use serde::Serialize;

use super::bindings::Bindings;
use super::error::InterpretError;
use crate::expr::{ExpressionGraph, NodeId, Vocabulary};
use crate::pattern::{Pattern, PatternError};

/// Builds a partial graph from a particle's captured span.
pub type ParticleFn = fn(&Bindings<'_>, &Vocabulary) -> Result<ExpressionGraph, InterpretError>;

/// Builds the final interpretation from a template's bindings.
pub type TemplateFn = fn(&Bindings<'_>, &Vocabulary) -> Result<Interpretation, InterpretError>;

/// How the answer to a query should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultShape {
    /// A single value (a name, a date).
    Literal,
    /// A list of values.
    Enum,
}

impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultShape::Literal => write!(f, "literal"),
            ResultShape::Enum => write!(f, "enum"),
        }
    }
}

/// A question's meaning: a graph, the node whose values answer it, and the shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interpretation {
    pub graph: ExpressionGraph,
    pub target: NodeId,
    pub shape: ResultShape,
}

impl Interpretation {
    /// Single-value answer selecting the graph's head.
    pub fn literal(graph: ExpressionGraph) -> Self {
        Self {
            target: graph.head(),
            graph,
            shape: ResultShape::Literal,
        }
    }

    /// List answer selecting the graph's head.
    pub fn enumeration(graph: ExpressionGraph) -> Self {
        Self {
            target: graph.head(),
            graph,
            shape: ResultShape::Enum,
        }
    }

    pub fn with_target(mut self, target: NodeId) -> Self {
        self.target = target;
        self
    }
}

/// A reusable named sub-pattern with its own interpretation.
///
/// Templates refer to it by name (`Team`) and read its graph from the
/// snake_case capture it produces (`team`).
#[derive(Clone, Debug)]
pub struct Particle {
    name: String,
    pattern: Pattern,
    interpret: ParticleFn,
    concepts: Vec<String>,
}

impl Particle {
    pub fn new(name: impl Into<String>, pattern: Pattern, interpret: ParticleFn) -> Self {
        Self {
            name: name.into(),
            pattern,
            interpret,
            concepts: Vec::new(),
        }
    }

    pub fn parse(
        name: impl Into<String>,
        pattern: &str,
        interpret: ParticleFn,
    ) -> Result<Self, PatternError> {
        Ok(Self::new(name, Pattern::parse(pattern)?, interpret))
    }

    /// Declare the vocabulary concepts `interpret` relies on.
    pub fn uses(mut self, concepts: &[&str]) -> Self {
        self.concepts.extend(concepts.iter().map(|c| (*c).to_owned()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }

    pub(crate) fn interpret(
        &self,
        bindings: &Bindings<'_>,
        vocabulary: &Vocabulary,
    ) -> Result<ExpressionGraph, InterpretError> {
        (self.interpret)(bindings, vocabulary)
    }
}

/// A question form: a pattern over the whole question plus its interpretation.
#[derive(Clone, Debug)]
pub struct Template {
    name: String,
    pattern: Pattern,
    interpret: TemplateFn,
    concepts: Vec<String>,
}

impl Template {
    pub fn new(name: impl Into<String>, pattern: Pattern, interpret: TemplateFn) -> Self {
        Self {
            name: name.into(),
            pattern,
            interpret,
            concepts: Vec::new(),
        }
    }

    pub fn parse(
        name: impl Into<String>,
        pattern: &str,
        interpret: TemplateFn,
    ) -> Result<Self, PatternError> {
        Ok(Self::new(name, Pattern::parse(pattern)?, interpret))
    }

    /// Declare the vocabulary concepts `interpret` relies on.
    pub fn uses(mut self, concepts: &[&str]) -> Self {
        self.concepts.extend(concepts.iter().map(|c| (*c).to_owned()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pattern as registered, with particle references unresolved.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }

    pub(crate) fn interpret(
        &self,
        bindings: &Bindings<'_>,
        vocabulary: &Vocabulary,
    ) -> Result<Interpretation, InterpretError> {
        (self.interpret)(bindings, vocabulary)
    }
}
