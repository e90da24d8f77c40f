//! Token matching engine.
//!
//! Patterns are compiled (Thompson construction) into a small instruction
//! program and run by a backtracking VM. Alternation prefers earlier branches
//! and quantifiers are greedy; both backtrack on failure. Capture boundaries
//! are recorded in an effect log that is truncated on backtrack, so only the
//! accepted path's captures survive.

mod checkpoint;
mod compile;
mod effect;
mod error;
mod materialize;
mod matcher;
mod program;
mod trace;
mod vm;

#[cfg(test)]
mod compile_tests;
#[cfg(test)]
mod engine_tests;
#[cfg(test)]
mod trace_tests;

pub use compile::compile;
pub use effect::{EffectLog, RuntimeEffect};
pub use error::RuntimeError;
pub use materialize::{Capture, Match};
pub use matcher::{Matcher, match_tokens};
pub use program::{Addr, Instruction, Program, TokenTest};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use vm::{Accepted, FuelLimits, MatchMode, VM};

pub(crate) use materialize::join_words;
