//! Preset pass-through.
//!
//! Catalog documents position every object themselves; this engine copies
//! those coordinates into the layout untouched.

use crate::{
    layout::{Layout, engines::LayoutEngine},
    structure::Topology,
};

pub(super) struct Engine;

impl Engine {
    pub(super) fn new() -> Self {
        Self
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, topology: &Topology) -> Layout {
        let mut layout = Layout::default();
        for node in topology.source().nodes() {
            // Selection guarantees every node is positioned
            layout.insert(node.id, node.position.unwrap_or_default());
        }
        layout
    }
}
