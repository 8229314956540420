//! Skein - layout for node-link topology diagrams.
//!
//! Skein loads domain JSON describing physical/assembly topologies, assigns
//! a 2-D coordinate to every node, and emits the positioned element lists a
//! graph-rendering surface consumes. The rendering surface itself is an
//! external collaborator; Skein stops at the element list.
//!
//! # Pipeline
//!
//! ```text
//! JSON document
//!     ↓ skein-model
//! Graph
//!     ↓ structure
//! Topology
//!     ↓ layout
//! Layout
//!     ↓ export
//! ElementList
//! ```

pub mod config;
pub mod export;
pub mod layout;
pub mod structure;

mod error;

pub use error::SkeinError;

pub use skein_core::{element, geometry, identifier};
pub use skein_model as model;

use std::path::Path;

use log::{debug, info};

use skein_core::element::ElementList;
use skein_model::Graph;

use config::AppConfig;
use layout::{EngineBuilder, Layout};
use structure::Topology;

/// Builder for loading, laying out, and exporting topology graphs.
///
/// Owns the application configuration; the graph and layout are plain
/// values replaced wholesale on every recompute.
///
/// # Examples
///
/// ```
/// use skein::{SceneBuilder, config::AppConfig};
///
/// let source = r#"{
///     "branches": [{"nodes": [{"id": "pump"}, {"id": "laser"}]}],
///     "edges": [{"source": "pump", "target": "laser", "length": 80.0}]
/// }"#;
///
/// let builder = SceneBuilder::new(AppConfig::default());
/// let graph = builder.from_json(source).expect("well-formed document");
/// let layout = builder.layout(&graph);
/// let elements = builder.elements(&graph, &layout);
///
/// assert_eq!(elements.nodes.len(), 2);
/// assert_eq!(elements.nodes[1].position.x(), 80.0);
/// ```
#[derive(Debug, Default)]
pub struct SceneBuilder {
    config: AppConfig,
}

impl SceneBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parses and normalizes a JSON document string.
    pub fn from_json(&self, src: &str) -> Result<Graph, SkeinError> {
        Ok(Graph::from_json(src)?)
    }

    /// Loads and normalizes a JSON document file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Graph, SkeinError> {
        Ok(Graph::load(path)?)
    }

    /// Loads a JSON document file, falling back to the empty graph on any
    /// failure; the empty graph lays out and exports without error.
    pub fn load_or_empty(&self, path: impl AsRef<Path>) -> Graph {
        Graph::load_or_empty(path)
    }

    /// Computes a layout for the graph using the configured strategy.
    pub fn layout(&self, graph: &Graph) -> Layout {
        info!(
            nodes = graph.node_count(),
            strategy:% = self.config.layout.strategy;
            "Calculating layout"
        );
        let topology = Topology::new(graph);
        let layout = EngineBuilder::new()
            .with_row_spacing(self.config.layout.row_spacing)
            .build_layout(&topology, self.config.layout.strategy);
        debug!(positions = layout.len(); "Layout complete");
        layout
    }

    /// Builds the rendering-surface element list.
    pub fn elements(&self, graph: &Graph, layout: &Layout) -> ElementList {
        export::elements(graph, layout)
    }

    /// Serializes an element list as pretty-printed JSON.
    pub fn elements_json(&self, elements: &ElementList) -> Result<String, SkeinError> {
        export::to_json(elements)
    }
}
