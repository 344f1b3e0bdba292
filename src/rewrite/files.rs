// src/rewrite/files.rs
// =============================================================================
// This module walks the docs/ tree and rewrites files in place.
//
// Which files:
// - Every *.md file directly inside docs/grunderna, docs/koncept,
//   docs/avancerat and docs/praktik (not recursive)
// - docs/index.md and docs/kursoversikt.md, if they exist
//
// A file is only written when its content actually changed. Unchanged files
// keep their modification time.
//
// Errors are not caught per file: the first read or write that fails stops
// the whole run.
//
// Rust concepts:
// - Path and PathBuf: Borrowed and owned filesystem paths (like &str / String)
// - anyhow::Context: Attaches the file name to an I/O error
// - Closures as parameters: The caller decides how to report each file
// =============================================================================

use anyhow::{Context, Result};
use serde::Serialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use super::LinkRewriter;
use crate::mappings::{INDEX_FILES, TOPIC_FOLDERS};

/// Whether changed files are written back or only reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite files whose content changed
    Write,
    /// Report what would change, write nothing
    DryRun,
}

/// What a run did, in processing order
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Files whose content changed
    pub modified: Vec<PathBuf>,
    /// Same as modified.len(), kept for the JSON output
    pub count: usize,
    pub dry_run: bool,
}

/// Name of the directory that directly contains `path`
///
/// docs/grunderna/arv.md -> Some("grunderna"), docs/index.md -> Some("docs")
pub fn folder_of(path: &Path) -> Option<&str> {
    path.parent()
        .and_then(Path::file_name)
        .and_then(OsStr::to_str)
}

/// Rewrites one file.
///
/// Returns `Ok(true)` if the content changed (and, in [`WriteMode::Write`],
/// was written back), `Ok(false)` if the file was left alone.
pub fn rewrite_file(rewriter: &LinkRewriter, path: &Path, mode: WriteMode) -> Result<bool> {
    let original = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let updated = rewriter.rewrite(&original, folder_of(path));

    if updated == original {
        return Ok(false);
    }

    if mode == WriteMode::Write {
        fs::write(path, updated)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(true)
}

// Lists the *.md files directly inside `dir`, sorted by name
fn markdown_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list {}", dir.display()))?
            .path();

        if path.is_file() && path.extension() == Some(OsStr::new("md")) {
            files.push(path);
        }
    }

    // read_dir order depends on the filesystem
    files.sort();
    Ok(files)
}

/// Rewrites every target file under `docs_root`.
///
/// `on_modified` is called with the path of each file that changed, right
/// after it was handled, so progress shows up before a later error aborts the
/// run.
pub fn run(
    rewriter: &LinkRewriter,
    docs_root: &Path,
    mode: WriteMode,
    mut on_modified: impl FnMut(&Path),
) -> Result<RunSummary> {
    let mut modified = Vec::new();

    let mut handle = |path: PathBuf| -> Result<()> {
        if rewrite_file(rewriter, &path, mode)? {
            on_modified(&path);
            modified.push(path);
        }
        Ok(())
    };

    for folder in TOPIC_FOLDERS {
        let dir = docs_root.join(folder);
        if !dir.exists() {
            continue;
        }
        for path in markdown_files_in(&dir)? {
            handle(path)?;
        }
    }

    for name in INDEX_FILES {
        let path = docs_root.join(name);
        if path.exists() {
            handle(path)?;
        }
    }

    Ok(RunSummary {
        count: modified.len(),
        modified,
        dry_run: mode == WriteMode::DryRun,
    })
}
