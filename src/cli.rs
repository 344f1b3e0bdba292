// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There are no subcommands: the tool does one thing. Running it with no
// arguments rewrites ./docs in place, which is the normal way to use it.
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates the parsing code
// - PathBuf: An owned filesystem path, parsed straight from the argument
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "docs-relink",
    version = "0.1.0",
    about = "Rewrite lesson links after the docs moved to topic folders",
    long_about = "docs-relink updates Markdown links that still point at the old \
                  lektioner/delN/NN-name.md files so they point at the new \
                  grunderna/, koncept/, avancerat/ and praktik/ folders. \
                  Files are rewritten in place, and only when something changed."
)]
pub struct Cli {
    /// Root of the documentation tree
    #[arg(long, default_value = "docs")]
    pub docs_dir: PathBuf,

    /// Show which files would change without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the summary as JSON instead of one line per file
    #[arg(long)]
    pub json: bool,
}
