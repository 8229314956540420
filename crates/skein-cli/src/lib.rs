//! CLI logic for the Skein layout tool.
//!
//! This module contains the core CLI logic for the Skein layout tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info, warn};

use skein::{SceneBuilder, SkeinError};

/// Run the Skein CLI application
///
/// Loads the input document, computes a layout with the configured
/// strategy, and writes the element-list JSON to the output file. Load
/// failures render an empty element list unless `--strict` is set.
///
/// # Errors
///
/// Returns `SkeinError` for:
/// - Configuration loading errors
/// - Strategy override parse errors
/// - Document errors under `--strict`
/// - Output file I/O errors
pub fn run(args: &Args) -> Result<(), SkeinError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing topology"
    );

    // Load configuration, then apply the command-line strategy override
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(strategy) = &args.strategy {
        app_config.layout.strategy = strategy.parse().map_err(SkeinError::Layout)?;
    }

    let builder = SceneBuilder::new(app_config);

    let graph = if args.strict {
        builder.load(&args.input)?
    } else {
        builder.load_or_empty(&args.input)
    };
    if graph.is_empty() {
        warn!(input_path = args.input; "No nodes to place, rendering empty canvas");
    }

    let layout = builder.layout(&graph);
    if let Some(bounds) = layout.bounds() {
        debug!(
            width = bounds.width(),
            height = bounds.height();
            "Layout bounds"
        );
    }

    let elements = builder.elements(&graph, &layout);
    let json = builder.elements_json(&elements)?;
    fs::write(&args.output, json)?;

    info!(
        nodes = elements.nodes.len(),
        edges = elements.edges.len(),
        output_file = args.output;
        "Element list exported"
    );

    Ok(())
}
