//! Document loading and graph normalization for Skein.
//!
//! Skein accepts three JSON document shapes, recognized by their top-level
//! keys:
//!
//! - **Simple graph** - `branches`/`nodes`/`edges`, the native shape for
//!   branch-structured signal paths
//! - **Catalog** - `objectTypes` plus placed `objects` and `connections`,
//!   where every object carries its own coordinates
//! - **Assembly** - `assemblies`/`components`/`boxes`, a hardware hierarchy
//!   normalized only to the assembly-instance level
//!
//! [`document`] holds the typed shapes; [`graph`] normalizes any of them
//! into the single [`Graph`](graph::Graph) representation the layout
//! engines consume.

pub mod document;
pub mod error;
pub mod graph;

pub use document::Document;
pub use error::ModelError;
pub use graph::{Branch, Edge, Graph, Node};
