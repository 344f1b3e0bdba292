// src/rewrite/mod.rs
// =============================================================================
// This module contains the link rewriting logic.
//
// Submodules:
// - links: Rewrites link targets in a string (no I/O)
// - files: Finds the docs files, rewrites them and counts the changes
//
// Splitting it this way keeps the text rules testable without touching disk.
// =============================================================================

mod files;
mod links;

// Re-export public items from submodules
// This lets main.rs write `rewrite::run()` instead of `rewrite::files::run()`
pub use files::{run, RunSummary, WriteMode};
pub use links::LinkRewriter;
