//! Layout engine selection.
//!
//! One engine exists per placement heuristic, each behind the
//! [`LayoutEngine`] trait. The [`EngineBuilder`] owns the shared
//! configuration and the selection rule:
//!
//! 1. every node carries a preset position → pass-through (the document's
//!    own coordinates win over any heuristic);
//! 2. the graph declares branches → branch-chained placement, regardless of
//!    the configured lattice;
//! 3. otherwise → the configured lattice strategy.

mod chained;
mod lattice;
mod preset;

use log::debug;

use crate::{
    layout::{DEFAULT_ROW_SPACING, Layout, LayoutStrategy},
    structure::Topology,
};

/// Interface implemented by every placement heuristic.
pub trait LayoutEngine {
    /// Calculate positions for every node in the topology.
    ///
    /// Total over any well-formed topology; the empty topology yields the
    /// empty layout.
    fn calculate(&self, topology: &Topology) -> Layout;
}

/// Builder for creating and configuring layout engines.
pub struct EngineBuilder {
    row_spacing: f32,
}

impl EngineBuilder {
    /// Create a new engine builder with default configuration.
    pub fn new() -> Self {
        Self {
            row_spacing: DEFAULT_ROW_SPACING,
        }
    }

    /// Set the vertical distance between branch rows (also the default
    /// horizontal step for edges without a length).
    pub fn with_row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Pick the engine for this topology and configuration.
    fn engine(&self, topology: &Topology, strategy: LayoutStrategy) -> Box<dyn LayoutEngine> {
        if topology.source().is_fully_positioned() {
            return Box::new(preset::Engine::new());
        }

        match strategy {
            LayoutStrategy::BranchChained => Box::new(chained::Engine::new(self.row_spacing)),
            lattice_strategy if topology.source().has_branches() => {
                debug!(
                    configured:% = lattice_strategy;
                    "Graph declares branches, using branch-chained placement"
                );
                Box::new(chained::Engine::new(self.row_spacing))
            }
            lattice_strategy => Box::new(lattice::Engine::new(lattice_strategy)),
        }
    }

    /// Run the selected engine over the topology.
    pub fn build_layout(&self, topology: &Topology, strategy: LayoutStrategy) -> Layout {
        let layout = self.engine(topology, strategy).calculate(topology);
        debug!(nodes = layout.len(), strategy:% = strategy; "Layout calculated");
        layout
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use skein_model::Graph;

    use super::*;

    #[test]
    fn test_branches_take_precedence_over_lattice() {
        let graph = Graph::from_json(
            r#"{"branches": [{"nodes": [{"id": "a"}, {"id": "b"}]}]}"#,
        )
        .expect("parse");
        let topology = Topology::new(&graph);

        // Chained placement starts rows at x = 0; a square lattice would
        // put the first node at (100, 100)
        let layout = EngineBuilder::new().build_layout(&topology, LayoutStrategy::Square);
        let first = layout.position("a".into()).expect("position");
        assert_eq!(first.x(), 0.0);
        assert_eq!(first.y(), 100.0);
    }

    #[test]
    fn test_preset_positions_win_over_everything() {
        let graph = Graph::from_json(
            r#"{
                "objectTypes": {"t": {}},
                "objects": [{"id": "a", "type": "t", "x": 417.0, "y": 93.0}]
            }"#,
        )
        .expect("parse");
        let topology = Topology::new(&graph);

        for strategy in [LayoutStrategy::Square, LayoutStrategy::BranchChained] {
            let layout = EngineBuilder::new().build_layout(&topology, strategy);
            assert_eq!(
                layout.position("a".into()).expect("position"),
                skein_core::geometry::Point::new(417.0, 93.0)
            );
        }
    }

    #[test]
    fn test_empty_graph_yields_empty_layout() {
        let graph = Graph::default();
        let topology = Topology::new(&graph);

        for strategy in [
            LayoutStrategy::Square,
            LayoutStrategy::Hexagonal,
            LayoutStrategy::Oblique,
            LayoutStrategy::Rhombic,
            LayoutStrategy::BranchChained,
        ] {
            let layout = EngineBuilder::new().build_layout(&topology, strategy);
            assert!(layout.is_empty());
        }
    }

    #[test]
    fn test_every_node_placed_exactly_once() {
        let graph = Graph::from_json(
            r#"{
                "branches": [
                    {"nodes": [{"id": "a"}, {"id": "b"}]},
                    {"nodes": [{"id": "c"}]}
                ],
                "nodes": [{"id": "stray_1"}, {"id": "stray_2"}],
                "edges": [{"source": "b", "target": "c"}]
            }"#,
        )
        .expect("parse");
        let topology = Topology::new(&graph);

        let layout = EngineBuilder::new().build_layout(&topology, LayoutStrategy::Square);
        assert_eq!(layout.len(), graph.node_count());
        for node in graph.nodes() {
            assert!(layout.position(node.id).is_some());
        }
    }
}
