//! Expression graphs: query variables with type constraints and labeled edges.
//!
//! Every graph has a designated head node. Graphs compose with
//! [`ExpressionGraph::combine`], which unifies the two heads, and grow with
//! [`ExpressionGraph::relate`], which puts a new head in front of the old one.
//!
//! Edges are stored on their subject in storage direction. A reversed edge
//! (`add_edge(node, rel, target, true)`) is stored on `target` pointing at
//! `node`, with `reversed` set so the caller's intent is kept.

use std::fmt;

use indexmap::IndexSet;

use super::literal::Literal;

/// Index of a node within one graph. Not stable across [`ExpressionGraph::combine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// A fixed predicate such as `dbo:manager`.
    Fixed(String),
    /// Any predicate; rendered as a fresh variable.
    Wildcard,
}

impl Relation {
    pub fn fixed(identifier: impl Into<String>) -> Self {
        Relation::Fixed(identifier.into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Node(NodeId),
    Literal(Literal),
}

/// Outgoing edge in storage direction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub relation: Relation,
    pub object: Term,
    /// Set when the edge was requested in the opposite direction.
    pub reversed: bool,
}

/// One query variable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpressionNode {
    types: IndexSet<String>,
    edges: IndexSet<Edge>,
}

impl ExpressionNode {
    /// Type constraints in insertion order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn has_type(&self, ty: &str) -> bool {
        self.types.contains(ty)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.types.is_empty() && self.edges.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionGraph {
    nodes: Vec<ExpressionNode>,
    head: NodeId,
}

impl Default for ExpressionGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionGraph {
    /// Single unconstrained node, which is the head.
    pub fn new() -> Self {
        Self {
            nodes: vec![ExpressionNode::default()],
            head: NodeId(0),
        }
    }

    /// Single node carrying the given type constraints.
    pub fn variable<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        let head = graph.head;
        for ty in types {
            graph.add_type(head, ty);
        }
        graph
    }

    #[inline]
    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn node(&self, id: NodeId) -> &ExpressionNode {
        &self.nodes[id.index()]
    }

    /// Nodes with their ids, in id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &ExpressionNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::from_index(i), n))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every edge with its subject, node by node.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, &Edge)> {
        self.nodes()
            .flat_map(|(id, node)| node.edges.iter().map(move |e| (id, e)))
    }

    /// Edges whose object is `target`.
    pub fn incoming(&self, target: NodeId) -> impl Iterator<Item = (NodeId, &Edge)> {
        self.edges()
            .filter(move |(_, e)| e.object == Term::Node(target))
    }

    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(ExpressionNode::default());
        id
    }

    pub fn add_type(&mut self, node: NodeId, ty: impl Into<String>) {
        self.nodes[node.index()].types.insert(ty.into());
    }

    /// Add "`node` `relation` `target`". With `reversed`, the edge is stored as
    /// `target --relation--> node`.
    pub fn add_edge(&mut self, node: NodeId, relation: Relation, target: NodeId, reversed: bool) {
        let (subject, object) = if reversed { (target, node) } else { (node, target) };
        self.nodes[subject.index()].edges.insert(Edge {
            relation,
            object: Term::Node(object),
            reversed,
        });
    }

    /// Add a data edge from `node` to a literal.
    pub fn add_literal(&mut self, node: NodeId, relation: Relation, literal: Literal) {
        self.nodes[node.index()].edges.insert(Edge {
            relation,
            object: Term::Literal(literal),
            reversed: false,
        });
    }

    /// Merge `other` into `self`, unifying the two heads.
    ///
    /// The unified head keeps `self`'s id and gets the union of both heads'
    /// constraints and edges; `other`'s remaining nodes are appended in order
    /// and edges that pointed at `other`'s head now point at the unified head.
    pub fn combine(mut self, other: ExpressionGraph) -> ExpressionGraph {
        let offset = self.nodes.len();
        let other_head = other.head.index();

        // Old index in `other` to new id in `self`.
        let mut translation = Vec::with_capacity(other.nodes.len());
        let mut next = offset;
        for i in 0..other.nodes.len() {
            if i == other_head {
                translation.push(self.head);
            } else {
                translation.push(NodeId::from_index(next));
                next += 1;
            }
        }

        let translate_edge = |edge: Edge| Edge {
            object: match edge.object {
                Term::Node(id) => Term::Node(translation[id.index()]),
                literal => literal,
            },
            ..edge
        };

        let mut appended = Vec::with_capacity(other.nodes.len().saturating_sub(1));
        for (i, node) in other.nodes.into_iter().enumerate() {
            let edges: IndexSet<Edge> = node.edges.into_iter().map(translate_edge).collect();
            if i == other_head {
                let head = &mut self.nodes[self.head.index()];
                head.types.extend(node.types);
                head.edges.extend(edges);
            } else {
                appended.push(ExpressionNode {
                    types: node.types,
                    edges,
                });
            }
        }
        self.nodes.extend(appended);
        self
    }

    /// Put a new head in front of the current one: "new head `relation` old head".
    pub fn relate(mut self, relation: Relation, reversed: bool) -> ExpressionGraph {
        let old = self.head;
        let new = self.add_node();
        self.add_edge(new, relation, old, reversed);
        self.head = new;
        self
    }

    /// New head related to the old one through any predicate.
    pub fn related_to(self) -> ExpressionGraph {
        self.relate(Relation::Wildcard, false)
    }

    /// The same graph with a different head.
    ///
    /// # Panics
    ///
    /// If `node` does not belong to this graph.
    pub fn with_head(mut self, node: NodeId) -> ExpressionGraph {
        assert!(node.index() < self.nodes.len(), "head {} out of range", node);
        self.head = node;
        self
    }
}
