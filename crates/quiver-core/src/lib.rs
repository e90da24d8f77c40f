#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the Quiver crates.
//!
//! - [`TaggedToken`]: one word of a question as produced by an external tagger
//! - [`Interner`]: cheap integer handles for capture names
//! - [`Colors`]: ANSI palette for CLI output

mod colors;
mod interner;
mod token;
pub mod utils;

#[cfg(test)]
mod colors_tests;
#[cfg(test)]
mod interner_tests;
#[cfg(test)]
mod token_tests;
#[cfg(test)]
mod utils_tests;

pub use colors::Colors;
pub use interner::{Interner, Symbol};
pub use token::{TaggedToken, TokenParseError, parse_tagged, parse_tagged_json};
