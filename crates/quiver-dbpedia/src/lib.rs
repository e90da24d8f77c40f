#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! DBpedia soccer question pack for Quiver.
//!
//! Bundles a vocabulary of DBpedia ontology terms, the prefix preamble for the
//! public endpoint, and templates for questions about clubs, managers and
//! leagues:
//!
//! - "Who is the manager of Real Madrid?"
//! - "Which is the ground of Arsenal?"
//! - "Who won more La Liga titles?"
//! - "Real Madrid players"
//! - "Which teams were founded in 1902?"

pub mod particles;
pub mod templates;

#[cfg(test)]
mod lib_tests;

use quiver_lib::expr::{Vocabulary, VocabularyError};
use quiver_lib::registry::Registry;
use quiver_lib::render::RenderConfig;
use quiver_lib::{Pipeline, Result};

/// Bundled vocabulary, as JSON.
pub const VOCABULARY_JSON: &str = include_str!("vocabulary.json");

/// Bundled render settings, as JSON.
pub const RENDER_JSON: &str = include_str!("render.json");

pub fn vocabulary() -> std::result::Result<Vocabulary, VocabularyError> {
    Vocabulary::from_json(VOCABULARY_JSON)
}

pub fn render_config() -> std::result::Result<RenderConfig, serde_json::Error> {
    RenderConfig::from_json(RENDER_JSON)
}

/// Registry over the bundled vocabulary.
pub fn registry() -> Result<Registry> {
    registry_with(vocabulary()?)
}

/// Registry over a replacement vocabulary. It must define every concept the
/// templates use.
pub fn registry_with(vocabulary: Vocabulary) -> Result<Registry> {
    let mut builder = Registry::builder(vocabulary);
    for particle in particles::particles()? {
        builder = builder.particle(particle);
    }
    for template in templates::templates()? {
        builder = builder.template(template);
    }
    Ok(builder.build()?)
}

/// Bundled registry and render settings.
pub fn pipeline() -> Result<Pipeline> {
    Ok(Pipeline::new(registry()?, render_config()?))
}
