#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that answers the depot accessibility queries.
//!
//! Loads a grid from a text file, builds the static adjacency index once,
//! and prints the snapshot and cascade counts. Blank lines are stripped here
//! so the grid crate only ever sees candidate rows.

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use roll_depot_grid::{GridSnapshot, DEFAULT_MARKER};
use roll_depot_system_peeling::{accessible_count, removed_count, AdjacencyIndex};

/// Command-line arguments accepted by the roll-depot binary.
#[derive(Debug, Parser)]
#[command(name = "roll-depot", about = "Counts accessible and removable rolls in a depot grid")]
struct Args {
    /// Path to the grid input file.
    #[arg(default_value = "input.txt")]
    input: PathBuf,
    /// Character marking a present roll.
    #[arg(long, default_value_t = DEFAULT_MARKER)]
    marker: char,
}

/// Entry point for the roll-depot command-line interface.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let snapshot = GridSnapshot::parse(rows, args.marker)
        .with_context(|| format!("invalid grid in {}", args.input.display()))?;
    let index = AdjacencyIndex::build(&snapshot);

    println!("Accessible rolls: {}", accessible_count(&index));
    println!("Total removable rolls: {}", removed_count(&index));

    Ok(())
}
