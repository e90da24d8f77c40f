//! Expression graphs and the vocabulary that builds them.

mod graph;
mod literal;
mod vocabulary;

#[cfg(test)]
mod vocabulary_tests;

pub use graph::{Edge, ExpressionGraph, ExpressionNode, NodeId, Relation, Term};
pub use literal::{Literal, LiteralTag};
pub use vocabulary::{
    Concept, ConceptConfig, KeywordConfig, Vocabulary, VocabularyConfig, VocabularyError,
};
