//! Compiled, reusable matcher for one pattern.

use quiver_core::TaggedToken;

use super::compile::compile;
use super::error::RuntimeError;
use super::materialize::{Match, materialize};
use super::program::Program;
use super::trace::{NoopTracer, Tracer};
use super::vm::{FuelLimits, MatchMode, VM};
use crate::pattern::{Pattern, PatternError, validate};

/// A validated pattern compiled to a VM program. Immutable and shareable across threads.
#[derive(Clone, Debug)]
pub struct Matcher {
    program: Program,
    limits: FuelLimits,
}

impl Matcher {
    /// Validate and compile a fully resolved pattern.
    pub fn new(pattern: &Pattern) -> Result<Self, PatternError> {
        validate(pattern)?;
        Ok(Self {
            program: compile(pattern)?,
            limits: FuelLimits::default(),
        })
    }

    pub fn with_limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Match the entire token sequence.
    pub fn match_tokens<'t>(
        &self,
        tokens: &'t [TaggedToken],
    ) -> Result<Option<Match<'t>>, RuntimeError> {
        self.match_with(tokens, MatchMode::Full, &mut NoopTracer)
    }

    /// Match the longest-preferred prefix the pattern accepts first.
    pub fn match_prefix<'t>(
        &self,
        tokens: &'t [TaggedToken],
    ) -> Result<Option<Match<'t>>, RuntimeError> {
        self.match_with(tokens, MatchMode::Prefix, &mut NoopTracer)
    }

    pub fn match_with<'t, T: Tracer>(
        &self,
        tokens: &'t [TaggedToken],
        mode: MatchMode,
        tracer: &mut T,
    ) -> Result<Option<Match<'t>>, RuntimeError> {
        let vm = VM::new(tokens, self.limits, mode);
        let Some(accepted) = vm.execute_with(&self.program, tracer)? else {
            return Ok(None);
        };
        Ok(Some(materialize(
            &self.program,
            tokens,
            accepted.end,
            accepted.effects.as_slice(),
        )))
    }
}

/// One-shot full-sequence match of a pattern that needs no particle resolution.
pub fn match_tokens<'t>(
    pattern: &Pattern,
    tokens: &'t [TaggedToken],
) -> crate::Result<Option<Match<'t>>> {
    Ok(Matcher::new(pattern)?.match_tokens(tokens)?)
}
