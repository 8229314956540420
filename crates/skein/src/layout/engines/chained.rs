//! Branch-chained placement.
//!
//! Each branch occupies one horizontal row, rows stacked in declaration
//! order. Within a row, nodes are chained left to right: each node sits one
//! edge-length (or one row-spacing, absent an edge) to the right of its
//! predecessor. A branch whose entry node is fed from an earlier branch is
//! offset so its start aligns with the trigger point, which is what makes a
//! signal path through several branches read left to right.

use skein_core::{geometry::Point, identifier::Id};

use crate::{
    layout::{Layout, engines::LayoutEngine},
    structure::Topology,
};

/// Vertical origin of the first row.
const ROW_ORIGIN: f32 = 100.0;

pub(super) struct Engine {
    row_spacing: f32,
}

impl Engine {
    pub(super) fn new(row_spacing: f32) -> Self {
        Self { row_spacing }
    }

    /// Horizontal step from `prev` to `current`: the declared edge length,
    /// or the row spacing when the edge is missing or lengthless.
    fn edge_step(&self, topology: &Topology, prev: Id, current: Id) -> f32 {
        topology
            .edge_between(prev, current)
            .and_then(|edge| edge.length)
            .unwrap_or(self.row_spacing)
    }

    /// Starting x of a branch: 0 unless an edge from an earlier branch
    /// targets the entry node, in which case the branch starts one
    /// edge-length right of that source.
    ///
    /// With several qualifying edges the lowest source branch index wins,
    /// then the first in edge declaration order.
    fn entry_offset(
        &self,
        topology: &Topology,
        layout: &Layout,
        entry: Id,
        branch_index: usize,
    ) -> f32 {
        let Some(entry_idx) = topology.node_index(entry) else {
            return 0.0;
        };

        let mut best: Option<(usize, usize)> = None;
        let mut offset = 0.0;

        for (edge_idx, source_idx, edge) in topology.incoming(entry_idx) {
            let source = topology.node(source_idx);
            let Some(source_branch) = topology.branch_index(source.id) else {
                continue;
            };
            if source_branch >= branch_index {
                continue;
            }
            // Earlier branches are already placed, so the source has a position
            let Some(source_pos) = layout.position(source.id) else {
                continue;
            };

            let key = (source_branch, edge_idx.index());
            if best.is_none_or(|current| key < current) {
                best = Some(key);
                offset = source_pos.x() + edge.length.unwrap_or(self.row_spacing);
            }
        }

        offset
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, topology: &Topology) -> Layout {
        let graph = topology.source();
        let mut layout = Layout::default();

        let mut rows: Vec<Vec<Id>> = graph
            .branches()
            .iter()
            .map(|branch| branch.nodes.clone())
            .collect();

        // Nodes outside every branch form one trailing implicit row, so the
        // layout still covers the whole graph
        let stray: Vec<Id> = graph
            .nodes()
            .filter(|node| topology.branch_index(node.id).is_none())
            .map(|node| node.id)
            .collect();
        if !stray.is_empty() {
            rows.push(stray);
        }

        for (branch_index, row) in rows.iter().enumerate() {
            let y = ROW_ORIGIN + branch_index as f32 * self.row_spacing;
            let mut prev: Option<(Id, f32)> = None;

            for &id in row {
                let x = match prev {
                    None => self.entry_offset(topology, &layout, id, branch_index),
                    Some((prev_id, prev_x)) => {
                        prev_x + self.edge_step(topology, prev_id, id)
                    }
                };
                layout.insert(id, Point::new(x, y));
                prev = Some((id, x));
            }
        }

        layout
    }
}
