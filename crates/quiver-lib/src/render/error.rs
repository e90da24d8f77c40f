use crate::expr::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Literal bytes that do not decode as UTF-8.
    #[error("literal is not valid UTF-8 (invalid byte at offset {offset})")]
    Encoding { offset: usize },

    #[error("cannot render term {term:?}: {reason}")]
    InvalidTerm { term: String, reason: &'static str },

    #[error("target {0} is not a node of the graph")]
    UnknownTarget(NodeId),
}
