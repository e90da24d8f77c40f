//! Query rendering: expression graphs to SPARQL text (and DOT for debugging).

mod config;
pub mod dot;
mod error;
mod escape;
pub mod sparql;

#[cfg(test)]
mod dot_tests;
#[cfg(test)]
mod escape_tests;

pub use config::RenderConfig;
pub use error::RenderError;
pub use escape::{check_identifier, escape_literal};
pub use sparql::SparqlQuery;
