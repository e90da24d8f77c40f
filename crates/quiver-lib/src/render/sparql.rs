//! SPARQL rendering.
//!
//! Output layout:
//!
//! ```text
//! PREFIX dbo: <http://dbpedia.org/ontology/>
//!
//! SELECT DISTINCT ?x2 WHERE {
//!   ?x0 rdf:type dbo:SoccerClub.
//!   ?x0 foaf:name "Real Madrid"@en.
//!   ?x0 dbo:manager ?x1.
//!   ?x1 foaf:name ?x2.
//! }
//! ```
//!
//! Nodes are visited in id order; each contributes its type constraints, then
//! its edges in storage direction. Node `n` is `?xn`; each wildcard predicate
//! gets the next `?yn`.

use std::fmt::Write;

use serde::Serialize;

use super::config::RenderConfig;
use super::error::RenderError;
use super::escape::{check_identifier, escape_literal};
use crate::expr::{ExpressionGraph, Literal, LiteralTag, NodeId, Relation, Term};

/// A rendered query and the variable it selects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SparqlQuery {
    /// `?xN`, or `*` in full-select mode.
    pub select: String,
    pub text: String,
}

pub fn render(
    graph: &ExpressionGraph,
    target: NodeId,
    config: &RenderConfig,
) -> Result<SparqlQuery, RenderError> {
    if target.index() >= graph.len() {
        return Err(RenderError::UnknownTarget(target));
    }

    let type_relation = check_identifier(&config.type_relation)?;
    let mut wildcards = 0usize;
    let mut triples = Vec::new();

    for (id, node) in graph.nodes() {
        let subject = variable(id);
        for ty in node.types() {
            triples.push(format!("{} {} {}.", subject, type_relation, check_identifier(ty)?));
        }
        for edge in node.edges() {
            let predicate = match &edge.relation {
                Relation::Fixed(identifier) => check_identifier(identifier)?.to_owned(),
                Relation::Wildcard => {
                    let name = format!("?y{}", wildcards);
                    wildcards += 1;
                    name
                }
            };
            let object = match &edge.object {
                Term::Node(other) => variable(*other),
                Term::Literal(literal) => render_literal(literal)?,
            };
            triples.push(format!("{} {} {}.", subject, predicate, object));
        }
    }

    let select = if config.full_select {
        "*".to_owned()
    } else {
        variable(target)
    };

    let mut text = String::new();
    for (name, iri) in &config.prefixes {
        // String writes never fail.
        let _ = writeln!(text, "PREFIX {}: <{}>", name, iri);
    }
    if !config.prefixes.is_empty() {
        text.push('\n');
    }
    let _ = writeln!(text, "SELECT DISTINCT {} WHERE {{", select);
    for triple in &triples {
        let _ = writeln!(text, "{}{}", config.indent, triple);
    }
    text.push_str("}\n");

    Ok(SparqlQuery { select, text })
}

fn variable(id: NodeId) -> String {
    format!("?{}", id)
}

pub(crate) fn render_literal(literal: &Literal) -> Result<String, RenderError> {
    let value = literal
        .to_utf8()
        .map_err(|offset| RenderError::Encoding { offset })?;
    let escaped = escape_literal(value)?;
    Ok(match literal.tag() {
        LiteralTag::Plain => format!("\"{}\"", escaped),
        LiteralTag::Language(lang) => format!("\"{}\"@{}", escaped, check_identifier(lang)?),
        LiteralTag::Datatype(dt) => format!("\"{}\"^^{}", escaped, check_identifier(dt)?),
    })
}
