//! Command-line argument definitions for the Skein CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, strategy and
//! configuration selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Skein layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON document
    #[arg(help = "Path to the input JSON document")]
    pub input: String,

    /// Path to the output element-list JSON file
    #[arg(short, long, default_value = "elements.json")]
    pub output: String,

    /// Lattice strategy override (square, rectangular, hexagonal, oblique,
    /// rhombic, branch-chained)
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fail on unreadable or malformed input instead of rendering an
    /// empty canvas
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
