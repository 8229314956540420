//! Topology index over a normalized graph.
//!
//! The layout engines need cheap edge queries - "which edges enter this
//! node", "is there an edge between these two" - that the flat edge list in
//! [`skein_model::Graph`] does not answer well. [`Topology`] builds a
//! petgraph [`DiGraph`] over borrowed nodes and edges once, plus the
//! id-to-index and id-to-branch lookup tables.

use std::collections::HashMap;

use petgraph::{
    Direction,
    graph::{DiGraph, EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use skein_core::identifier::Id;
use skein_model::{Edge, Graph, Node};

/// Graph index used by the layout engines. Borrows the normalized graph
/// for its whole lifetime; construction is the only mutation.
#[derive(Debug)]
pub struct Topology<'a> {
    graph: DiGraph<&'a Node, &'a Edge>,
    node_ids: HashMap<Id, NodeIndex>,
    branch_of: HashMap<Id, usize>,
    source: &'a Graph,
}

impl<'a> Topology<'a> {
    pub fn new(source: &'a Graph) -> Self {
        let mut graph = DiGraph::new();
        let mut node_ids = HashMap::new();

        for node in source.nodes() {
            let idx = graph.add_node(node);
            node_ids.insert(node.id, idx);
        }

        // Normalization already dropped edges with unknown endpoints, so
        // every lookup here succeeds; edge indices follow declaration order.
        for edge in source.edges() {
            if let (Some(&source_idx), Some(&target_idx)) =
                (node_ids.get(&edge.source), node_ids.get(&edge.target))
            {
                graph.add_edge(source_idx, target_idx, edge);
            }
        }

        // First declaration wins when a node is listed in several branches
        let mut branch_of = HashMap::new();
        for (index, branch) in source.branches().iter().enumerate() {
            for &id in &branch.nodes {
                branch_of.entry(id).or_insert(index);
            }
        }

        Self {
            graph,
            node_ids,
            branch_of,
            source,
        }
    }

    /// The normalized graph this topology indexes.
    pub fn source(&self) -> &'a Graph {
        self.source
    }

    pub fn node_index(&self, id: Id) -> Option<NodeIndex> {
        self.node_ids.get(&id).copied()
    }

    pub fn node(&self, index: NodeIndex) -> &'a Node {
        self.graph
            .node_weight(index)
            .expect("Node index should exist")
    }

    /// Edges entering a node, with their declaration index and source.
    pub fn incoming(
        &self,
        index: NodeIndex,
    ) -> impl Iterator<Item = (EdgeIndex, NodeIndex, &'a Edge)> + '_ {
        self.graph
            .edges_directed(index, Direction::Incoming)
            .map(|edge| (edge.id(), edge.source(), *edge.weight()))
    }

    /// The first-declared edge from `source` to `target`, if any.
    pub fn edge_between(&self, source: Id, target: Id) -> Option<&'a Edge> {
        let source_idx = self.node_ids.get(&source)?;
        let target_idx = self.node_ids.get(&target)?;
        self.graph
            .edges_connecting(*source_idx, *target_idx)
            .min_by_key(|edge| edge.id())
            .map(|edge| *edge.weight())
    }

    /// Declaration index of the branch containing this node, if any.
    pub fn branch_index(&self, id: Id) -> Option<usize> {
        self.branch_of.get(&id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}
