// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Compile the rename tables into a LinkRewriter
// 3. Rewrite every target file under the docs directory
// 4. Print one line per changed file and a final count
// 5. Exit with proper code (0 = run completed, 2 = error)
//
// There is no recovery from errors: if any file can't be read or written the
// run stops right there and the error is printed.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod mappings;  // src/mappings.rs - the rename tables
mod rewrite;   // src/rewrite/ - link rewriting logic

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use rewrite::{LinkRewriter, RunSummary, WriteMode};

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = run completed (whether or not anything changed)
//   Err = a file could not be read or written
fn run() -> Result<i32> {
    let cli = Cli::parse();

    let mode = if cli.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };
    let verb = match mode {
        WriteMode::Write => "Uppdaterade",
        WriteMode::DryRun => "Skulle uppdatera",
    };

    let rewriter = LinkRewriter::new()?;

    let summary = rewrite::run(&rewriter, &cli.docs_dir, mode, |path| {
        if !cli.json {
            println!("✓ {} {}", verb, path.display());
        }
    })?;

    print_summary(&summary, verb, cli.json)?;

    Ok(0)
}

// Prints the final count, or the whole summary as JSON
fn print_summary(summary: &RunSummary, verb: &str, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(summary)?;
        println!("{}", json_output);
    } else {
        println!("\n✅ Klart! {} {} filer", verb, summary.count);
    }
    Ok(())
}
