//! Core types shared across the Skein crates.
//!
//! This crate holds the vocabulary the rest of the workspace speaks:
//!
//! - [`identifier`] - interned node identifiers
//! - [`geometry`] - points and bounding boxes in diagram space
//! - [`element`] - the element-list contract handed to a rendering surface

pub mod element;
pub mod geometry;
pub mod identifier;
