//! Quiver: question answering by token templates.
//!
//! A question arrives as part-of-speech-tagged tokens. Templates (regular
//! expressions over tokens) are tried in order; the first one that matches the
//! whole question builds an expression graph through a [`expr::Vocabulary`],
//! and the graph is rendered as a SPARQL query.
//!
//! # Example
//!
//! ```
//! use quiver_core::parse_tagged;
//! use quiver_lib::engine::match_tokens;
//! use quiver_lib::pattern::Pattern;
//!
//! let pattern = Pattern::parse("who be <DT> manager of (<NNP>+ @team) <.>?").unwrap();
//! let tokens = parse_tagged("who/who/WP is/be/VBZ the/the/DT manager/manager/NN \
//!     of/of/IN Real/real/NNP Madrid/madrid/NNP ?/?/.").unwrap();
//!
//! let found = match_tokens(&pattern, &tokens).unwrap().unwrap();
//! assert_eq!(found.get("team").unwrap().text(), "Real Madrid");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod engine;
pub mod expr;
pub mod pattern;
pub mod registry;
pub mod render;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use pattern::Pattern;
pub use registry::{Answer, Pipeline, Registry};

/// Any failure of the library, for callers that do not care which stage failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Pattern(#[from] pattern::PatternError),

    #[error(transparent)]
    Runtime(#[from] engine::RuntimeError),

    #[error(transparent)]
    Vocabulary(#[from] expr::VocabularyError),

    #[error(transparent)]
    Interpret(#[from] registry::InterpretError),

    #[error(transparent)]
    Dispatch(#[from] registry::DispatchError),

    #[error(transparent)]
    Registry(#[from] registry::RegistryError),

    #[error(transparent)]
    Render(#[from] render::RenderError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[allow(dead_code)]
fn assert_shareable() {
    fn check<T: Send + Sync>() {}
    check::<Registry>();
    check::<Pipeline>();
}
