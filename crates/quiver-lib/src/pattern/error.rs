//! Errors raised while building patterns. Always construction-time, never per question.

use crate::diagnostics::Diagnostics;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatternError {
    /// Pattern text failed to parse. The diagnostics carry every problem found.
    #[error("invalid pattern `{text}`: {summary}")]
    Syntax {
        text: String,
        summary: String,
        diagnostics: Diagnostics,
    },

    #[error("capture `@{name}` appears twice on one match path")]
    DuplicateCapture { name: String },

    #[error("repetition body can match an empty sequence: `{pattern}`")]
    EmptyLoop { pattern: String },

    #[error("`{name}` is not a registered particle")]
    UndefinedReference { name: String },

    #[error("`@{name}` is not a valid capture name")]
    InvalidCaptureName { name: String },

    #[error("alternation has no branches")]
    EmptyAlternation,
}

impl PatternError {
    pub(crate) fn syntax(text: &str, diagnostics: Diagnostics) -> Self {
        let diagnostics = diagnostics.filtered();
        let summary = diagnostics
            .iter()
            .next()
            .map(|d| d.message().to_owned())
            .unwrap_or_default();
        Self::Syntax {
            text: text.to_owned(),
            summary,
            diagnostics,
        }
    }

    /// Diagnostics for syntax errors, `None` for structural errors.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Self::Syntax { diagnostics, .. } => Some(diagnostics),
            _ => None,
        }
    }
}
