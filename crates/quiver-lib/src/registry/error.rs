use crate::engine::RuntimeError;
use crate::expr::VocabularyError;
use crate::pattern::PatternError;

/// Failure inside an interpretation function.
#[derive(Debug, thiserror::Error)]
pub enum InterpretError {
    #[error("no capture named `{0}` in this match")]
    MissingBinding(String),

    #[error("capture `{0}` is not a particle and has no graph")]
    NotAParticle(String),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    /// Captured text the interpretation cannot use (e.g. a year that is not a number).
    #[error("{0}")]
    Invalid(String),
}

/// Registry construction failure. Any of these prevents startup.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("in `{owner}`: {source}")]
    Pattern { owner: String, source: PatternError },

    #[error("`{owner}` uses unknown concept `{concept}`")]
    UnknownConcept { owner: String, concept: String },

    #[error("template `{0}` is registered twice")]
    DuplicateTemplate(String),

    #[error("particle `{0}` is registered twice")]
    DuplicateParticle(String),

    #[error("in `{owner}`: capture `@{capture}` has the name of particle `{particle}`")]
    CaptureShadowsParticle {
        owner: String,
        capture: String,
        particle: String,
    },
}

/// Failure while answering one question.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("template `{template}`: {source}")]
    Runtime {
        template: String,
        source: RuntimeError,
    },

    #[error("template `{template}` failed to interpret: {source}")]
    Interpret {
        template: String,
        source: InterpretError,
    },

    #[error("particle `{particle}` failed to interpret: {source}")]
    Particle {
        particle: String,
        source: InterpretError,
    },
}
