//! The element-list contract handed to a rendering surface.
//!
//! A rendering surface is any graph widget that accepts preset node
//! positions and styled edges; Skein does not draw anything itself. The
//! types here are the whole of that contract: positioned node descriptors
//! and directed edge descriptors, serialized as one JSON document.

use serde::{Deserialize, Serialize};

use crate::{geometry::Point, identifier::Id};

/// Role of a node at the graph boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortRole {
    Input,
    Output,
}

/// A positioned node descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeElement {
    pub id: Id,

    /// Display label; falls back to the id when the source document
    /// carries none.
    pub label: String,

    pub position: Point,

    /// Boundary-port role, present only for nodes listed in the graph's
    /// `inputs`/`outputs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<PortRole>,
}

/// A directed edge descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeElement {
    pub id: String,

    pub source: Id,

    pub target: Id,

    /// Physical length in diagram units, when the document specified one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f32>,

    /// Connection type tag; the rendering surface maps it to styling.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Signal latency in milliseconds, carried through from catalog
    /// connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<f32>,
}

/// The complete payload for a rendering surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementList {
    pub nodes: Vec<NodeElement>,
    pub edges: Vec<EdgeElement>,
}

impl ElementList {
    /// Returns true when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
