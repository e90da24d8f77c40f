use super::dot;
use crate::expr::{ExpressionGraph, Literal, NodeId, Relation};

#[test]
fn renders_nodes_edges_and_literals() {
    let mut graph = ExpressionGraph::variable(["dbo:SoccerClub"]);
    let head = graph.head();
    graph.add_literal(
        head,
        Relation::fixed("foaf:name"),
        Literal::new("Real Madrid").with_language("en"),
    );
    let graph = graph.relate(Relation::fixed("dbo:manager"), true);

    insta::assert_snapshot!(dot::render(&graph, graph.head()).unwrap(), @r#"
    digraph G {
      x1 [shape=house];
      x0 -> "dbo:SoccerClub" [label="is"];
      lit0 [shape=box label="\"Real Madrid\"@en"];
      x0 -> lit0 [label="foaf:name"];
      x0 -> x1 [label="dbo:manager"];
    }
    "#);
}

#[test]
fn unknown_target() {
    let graph = ExpressionGraph::new();
    assert!(dot::render(&graph, NodeId::from_index(3)).is_err());
}
