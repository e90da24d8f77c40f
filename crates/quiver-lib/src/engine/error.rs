//! Errors that can occur while matching.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted (too many VM steps for one question).
    #[error("matcher step limit of {0} exceeded")]
    ExecFuelExhausted(u32),
}
