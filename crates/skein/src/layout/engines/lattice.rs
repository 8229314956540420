//! Lattice placement.
//!
//! Places a flat node set on one of four fixed geometric grids. Positions
//! are pure functions of the node count and each node's input-order index;
//! edges play no part.

use skein_core::geometry::Point;

use crate::{
    layout::{Layout, LayoutStrategy, engines::LayoutEngine},
    structure::Topology,
};

/// Top-left origin shared by all lattices.
const GRID_ORIGIN: f32 = 100.0;
/// Horizontal and vertical cell pitch of the square grid.
const CELL_SPACING: f32 = 120.0;
/// Compressed row pitch of the hexagonal grid.
const HEX_ROW_SPACING: f32 = 104.0;
/// Odd hexagonal rows shift right by half a cell.
const HEX_ODD_ROW_SHIFT: f32 = 60.0;
/// Horizontal skew per row of the oblique grid.
const OBLIQUE_ROW_SKEW: f32 = 40.0;
/// Diagonal step of the rhombic grid.
const RHOMBIC_STEP: f32 = 60.0;

pub(super) struct Engine {
    strategy: LayoutStrategy,
}

impl Engine {
    pub(super) fn new(strategy: LayoutStrategy) -> Self {
        Self { strategy }
    }

    fn cell(&self, row: usize, col: usize) -> Point {
        let (row_f, col_f) = (row as f32, col as f32);
        match self.strategy {
            LayoutStrategy::Hexagonal => Point::new(
                GRID_ORIGIN + col_f * CELL_SPACING + (row % 2) as f32 * HEX_ODD_ROW_SHIFT,
                GRID_ORIGIN + row_f * HEX_ROW_SPACING,
            ),
            LayoutStrategy::Oblique => Point::new(
                GRID_ORIGIN + col_f * CELL_SPACING + row_f * OBLIQUE_ROW_SKEW,
                GRID_ORIGIN + row_f * CELL_SPACING,
            ),
            LayoutStrategy::Rhombic => Point::new(
                GRID_ORIGIN + (col_f + row_f) * RHOMBIC_STEP,
                GRID_ORIGIN + (row_f - col_f) * RHOMBIC_STEP,
            ),
            // Square; engine selection never routes branch-chained here
            _ => Point::new(
                GRID_ORIGIN + col_f * CELL_SPACING,
                GRID_ORIGIN + row_f * CELL_SPACING,
            ),
        }
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, topology: &Topology) -> Layout {
        let mut layout = Layout::default();
        let count = topology.node_count();
        if count == 0 {
            return layout;
        }

        let cols = (count as f32).sqrt().ceil() as usize;
        for (index, node) in topology.source().nodes().enumerate() {
            layout.insert(node.id, self.cell(index / cols, index % cols));
        }

        layout
    }
}
