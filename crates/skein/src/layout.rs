//! Layout: from a topology to one point per node.
//!
//! # Pipeline Position
//!
//! ```text
//! Graph (skein-model)
//!     ↓ structure
//! Topology
//!     ↓ layout (this module)
//! Layout
//!     ↓ export
//! ElementList
//! ```
//!
//! The [`LayoutStrategy`] names the heuristic; [`engines`](self) holds one
//! engine per heuristic behind the [`LayoutEngine`] trait, and the
//! [`EngineBuilder`] picks among them. Every engine is a total function:
//! any well-formed topology, including the empty one, yields a layout
//! covering every node exactly once.

mod engines;

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use skein_core::{
    geometry::{Bounds, Point},
    identifier::Id,
};

pub use engines::{EngineBuilder, LayoutEngine};

/// Default vertical distance between branch rows, and the default step
/// between chained nodes when an edge declares no length.
pub const DEFAULT_ROW_SPACING: f32 = 120.0;

/// The placement heuristic to apply.
///
/// The four lattice variants place a flat node set on a fixed geometric
/// grid; `BranchChained` lays each branch out as one left-to-right row.
/// Branch-chained placement is selected automatically whenever the graph
/// declares branches, regardless of the configured lattice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStrategy {
    #[default]
    #[serde(alias = "rectangular")]
    Square,
    Hexagonal,
    Oblique,
    Rhombic,
    BranchChained,
}

impl FromStr for LayoutStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" | "rectangular" => Ok(Self::Square),
            "hexagonal" => Ok(Self::Hexagonal),
            "oblique" => Ok(Self::Oblique),
            "rhombic" => Ok(Self::Rhombic),
            "branch-chained" => Ok(Self::BranchChained),
            other => Err(format!(
                "unknown layout strategy '{other}' (expected square, rectangular, \
                 hexagonal, oblique, rhombic, or branch-chained)"
            )),
        }
    }
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Square => "square",
            Self::Hexagonal => "hexagonal",
            Self::Oblique => "oblique",
            Self::Rhombic => "rhombic",
            Self::BranchChained => "branch-chained",
        };
        write!(f, "{name}")
    }
}

/// The result of a layout pass: one position per node, in placement order.
///
/// Recomputed wholesale on every strategy change or reload; never mutated
/// incrementally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    positions: IndexMap<Id, Point>,
}

impl Layout {
    pub(crate) fn insert(&mut self, id: Id, position: Point) {
        self.positions.insert(id, position);
    }

    pub fn position(&self, id: Id) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Id, Point)> + '_ {
        self.positions.iter().map(|(&id, &point)| (id, point))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The bounding box of all placed nodes, or `None` for an empty layout.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.positions.values();
        let first = Bounds::from_point(*points.next()?);
        Some(points.fold(first, |bounds, &point| bounds.include(point)))
    }
}
