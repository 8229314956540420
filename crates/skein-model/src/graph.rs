//! The normalized graph every document shape converges on.
//!
//! Normalization is deliberately forgiving: the goal is partial rendering
//! over total failure. Edges referencing unknown nodes are dropped with a
//! warning, duplicate node ids are last-write-wins, and a document that
//! cannot be read at all yields an empty graph via [`Graph::load_or_empty`].

use std::{fs, path::Path};

use indexmap::IndexMap;
use log::warn;

use skein_core::{geometry::Point, identifier::Id};

use crate::{
    document::{AssemblyDoc, CatalogDoc, Document, NodeDoc, SimpleGraphDoc},
    error::ModelError,
};

/// A node in the normalized graph.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: Id,

    /// Display label from the document, if any.
    pub label: Option<String>,

    /// Preset coordinates, present only for catalog objects.
    pub position: Option<Point>,
}

/// An ordered chain of nodes; order drives chained placement.
#[derive(Debug, Clone)]
pub struct Branch {
    pub name: Option<String>,
    pub nodes: Vec<Id>,
}

/// A directed edge between two known nodes.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Document-provided identifier, when present.
    pub id: Option<String>,
    pub source: Id,
    pub target: Id,
    /// Physical length in diagram units; layout falls back to the row
    /// spacing constant when absent.
    pub length: Option<f32>,
    pub kind: Option<String>,
    /// Carried through from catalog connections; not used by layout.
    pub latency: Option<f32>,
}

/// The normalized graph: insertion-ordered nodes, declaration-ordered
/// branches and edges, and the boundary-port lists.
///
/// Constructed once from a document and immutable afterwards.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: IndexMap<Id, Node>,
    branches: Vec<Branch>,
    edges: Vec<Edge>,
    inputs: Vec<Id>,
    outputs: Vec<Id>,
}

impl Graph {
    /// Normalizes a typed document into a graph. Total: any well-formed
    /// document produces a graph, possibly with entries dropped.
    pub fn from_document(document: &Document) -> Self {
        match document {
            Document::SimpleGraph(doc) => Self::from_simple(doc),
            Document::Catalog(doc) => Self::from_catalog(doc),
            Document::Assembly(doc) => Self::from_assembly(doc),
        }
    }

    /// Parses and normalizes a JSON string.
    pub fn from_json(src: &str) -> Result<Self, ModelError> {
        let document = Document::from_json(src)?;
        Ok(Self::from_document(&document))
    }

    /// Reads, parses, and normalizes a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Reads a JSON file, falling back to the empty graph on any failure.
    ///
    /// The failure is logged; an empty graph renders as an empty canvas,
    /// which beats crashing over a missing or malformed fixture.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(graph) => graph,
            Err(err) => {
                warn!(
                    path = path.display().to_string(),
                    error = err.to_string();
                    "Failed to load document, rendering empty graph"
                );
                Self::default()
            }
        }
    }

    fn from_simple(doc: &SimpleGraphDoc) -> Self {
        let mut graph = Self::default();

        // First pass: nodes, branch members before the flat list
        for branch_doc in &doc.branches {
            let mut members = Vec::with_capacity(branch_doc.nodes.len());
            for node_doc in &branch_doc.nodes {
                members.push(graph.insert_node(node_doc, None));
            }
            graph.branches.push(Branch {
                name: branch_doc.name.clone(),
                nodes: members,
            });
        }
        for node_doc in &doc.nodes {
            graph.insert_node(node_doc, None);
        }

        // Second pass: edges, now that every node id is known
        for edge_doc in &doc.edges {
            graph.push_edge(Edge {
                id: edge_doc.id.clone(),
                source: Id::new(&edge_doc.source),
                target: Id::new(&edge_doc.target),
                length: edge_doc.length,
                kind: edge_doc.kind.clone(),
                latency: None,
            });
        }

        graph.inputs = graph.known_ports(&doc.inputs, "inputs");
        graph.outputs = graph.known_ports(&doc.outputs, "outputs");

        graph
    }

    fn from_catalog(doc: &CatalogDoc) -> Self {
        let mut graph = Self::default();

        for object in &doc.objects {
            if !doc.object_types.contains_key(&object.kind) {
                warn!(
                    id = object.id, kind = object.kind;
                    "Object has unknown type, skipped"
                );
                continue;
            }
            let id = Id::new(&object.id);
            graph.nodes.insert(
                id,
                Node {
                    id,
                    label: None,
                    position: Some(Point::new(object.x, object.y)),
                },
            );
        }

        for connection in &doc.connections {
            graph.push_edge(Edge {
                id: Some(connection.id.clone()),
                source: Id::new(&connection.from.object),
                target: Id::new(&connection.to.object),
                length: connection.length,
                kind: connection.kind.clone(),
                latency: connection.latency,
            });
        }

        graph
    }

    fn from_assembly(doc: &AssemblyDoc) -> Self {
        let mut graph = Self::default();

        for box_def in doc.boxes.values() {
            for (assembly_type, instance) in &box_def.assemblies {
                let id = Id::new(instance);
                graph.nodes.insert(
                    id,
                    Node {
                        id,
                        label: Some(format!("{assembly_type} ({instance})")),
                        position: None,
                    },
                );
            }
        }

        // Connectivity references ports ("flange0.ribbon_1.1"); only the
        // leading instance segment matters at this level.
        for box_def in doc.boxes.values() {
            for link in &box_def.connectivity {
                graph.push_edge(Edge {
                    id: None,
                    source: Id::new(instance_segment(&link.from)),
                    target: Id::new(instance_segment(&link.to)),
                    length: None,
                    kind: None,
                    latency: None,
                });
            }
        }

        graph
    }

    /// Inserts a node, replacing any previous node with the same id.
    fn insert_node(&mut self, doc: &NodeDoc, position: Option<Point>) -> Id {
        let id = Id::new(&doc.id);
        self.nodes.insert(
            id,
            Node {
                id,
                label: doc.label.clone(),
                position,
            },
        );
        id
    }

    /// Keeps the edge only when both endpoints exist.
    fn push_edge(&mut self, edge: Edge) {
        if self.nodes.contains_key(&edge.source) && self.nodes.contains_key(&edge.target) {
            self.edges.push(edge);
        } else {
            warn!(
                source:% = edge.source, target:% = edge.target;
                "Edge references unknown node, dropped"
            );
        }
    }

    fn known_ports(&self, names: &[String], role: &str) -> Vec<Id> {
        names
            .iter()
            .map(|name| Id::new(name))
            .filter(|id| {
                let known = self.nodes.contains_key(id);
                if !known {
                    warn!(id:% = id, role; "Boundary port references unknown node, dropped");
                }
                known
            })
            .collect()
    }

    /// Iterates nodes in input order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn has_branches(&self) -> bool {
        !self.branches.is_empty()
    }

    /// Edges in declaration order. Every edge's endpoints are known nodes.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn inputs(&self) -> &[Id] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Id] {
        &self.outputs
    }

    /// True when every node carries a preset position, so layout can pass
    /// the document's own coordinates through.
    pub fn is_fully_positioned(&self) -> bool {
        self.nodes.values().all(|node| node.position.is_some())
    }
}

/// The leading instance segment of a port path: `"flange0.ribbon_1.1"`
/// names a port on instance `"flange0"`.
fn instance_segment(port_path: &str) -> &str {
    port_path.split('.').next().unwrap_or(port_path)
}
