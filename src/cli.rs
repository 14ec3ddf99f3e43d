// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI structure is plain Rust structs and enums
// with #[...] attributes, and clap generates the parsing and --help text.
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mdbundle",
    version,
    about = "Collect a markdown file and every markdown file it links to, in reading order",
    long_about = "mdbundle starts from one markdown file, follows relative links to other \
                  .md / .markdown files breadth-first, and lists every reachable document \
                  once, in the order it would appear as a chapter in a combined export."
)]
pub struct Cli {
    /// Log filter directive (e.g. "debug" or "mdbundle=trace")
    ///
    /// Falls back to RUST_LOG, then to "warn". Logs go to stderr.
    #[arg(long, global = true, env = "MDBUNDLE_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk the links from a start document and list every reachable document
    ///
    /// Example: mdbundle collect docs/index.md
    Collect {
        /// Markdown file to start from
        start: PathBuf,

        /// Output the full report (content included) as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the local markdown links found in a single file
    ///
    /// Example: mdbundle links README.md
    Links {
        /// Markdown file to scan
        file: PathBuf,

        /// Output the links as a JSON array
        #[arg(long)]
        json: bool,
    },
}
