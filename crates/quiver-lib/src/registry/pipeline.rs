//! Tagged question in, query out.

use quiver_core::TaggedToken;
use serde::Serialize;

use super::dispatch::Registry;
use super::template::{Interpretation, ResultShape};
use crate::render::{self, RenderConfig, SparqlQuery};

/// A registry paired with the render settings for its endpoint.
#[derive(Debug)]
pub struct Pipeline {
    registry: Registry,
    render: RenderConfig,
}

/// An answered question.
#[derive(Clone, Debug, Serialize)]
pub struct Answer {
    pub template: String,
    pub shape: ResultShape,
    pub query: SparqlQuery,
    #[serde(skip)]
    pub interpretation: Interpretation,
}

impl Answer {
    /// Graphviz rendering of the interpreted graph.
    pub fn dot(&self) -> crate::Result<String> {
        Ok(render::dot::render(
            &self.interpretation.graph,
            self.interpretation.target,
        )?)
    }
}

impl Pipeline {
    pub fn new(registry: Registry, render: RenderConfig) -> Self {
        Self { registry, render }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }

    /// `Ok(None)` when no template understands the question.
    pub fn ask(&self, tokens: &[TaggedToken]) -> crate::Result<Option<Answer>> {
        let Some(dispatch) = self.registry.dispatch(tokens)? else {
            return Ok(None);
        };
        let interpretation = dispatch.interpretation;
        let query = render::sparql::render(
            &interpretation.graph,
            interpretation.target,
            &self.render,
        )?;
        Ok(Some(Answer {
            template: dispatch.template.name().to_owned(),
            shape: interpretation.shape,
            query,
            interpretation,
        }))
    }
}
