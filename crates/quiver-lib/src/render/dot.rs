//! Graphviz rendering of an expression graph, for inspecting interpretations.

use std::fmt::Write;

use super::error::RenderError;
use super::escape::escape_dot;
use super::sparql::render_literal;
use crate::expr::{ExpressionGraph, NodeId, Relation, Term};

pub fn render(graph: &ExpressionGraph, target: NodeId) -> Result<String, RenderError> {
    if target.index() >= graph.len() {
        return Err(RenderError::UnknownTarget(target));
    }

    let mut out = String::from("digraph G {\n");
    let _ = writeln!(out, "  {} [shape=house];", target);

    let mut literals = 0usize;
    for (id, node) in graph.nodes() {
        for ty in node.types() {
            let _ = writeln!(out, "  {} -> \"{}\" [label=\"is\"];", id, escape_dot(ty));
        }
        for edge in node.edges() {
            let label = match &edge.relation {
                Relation::Fixed(identifier) => escape_dot(identifier),
                Relation::Wildcard => String::new(),
            };
            match &edge.object {
                Term::Node(other) => {
                    let _ = writeln!(out, "  {} -> {} [label=\"{}\"];", id, other, label);
                }
                Term::Literal(literal) => {
                    let name = format!("lit{}", literals);
                    literals += 1;
                    let text = escape_dot(&render_literal(literal)?);
                    let _ = writeln!(out, "  {} [shape=box label=\"{}\"];", name, text);
                    let _ = writeln!(out, "  {} -> {} [label=\"{}\"];", id, name, label);
                }
            }
        }
    }

    out.push_str("}\n");
    Ok(out)
}
