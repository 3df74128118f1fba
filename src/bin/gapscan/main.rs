//! Gapscan CLI: scan an index mask and print its gaps.
//!
//! With no arguments the built-in demonstration mask is scanned. Output is
//! one line per gap boundary (two space-separated integers), then one final
//! line with the collected missing indices, each followed by a space.

use anyhow::{ensure, Result};
use clap::Parser;
use gapscan::extract;

/// Mask scanned when no values are given on the command line.
const DEMO_MASK: &[u64] = &[1, 3, 4, 6, 7, 11, 12];

#[derive(Debug, Parser)]
#[command(name = "gapscan")]
#[command(about = "Gap detection over strictly increasing index masks", long_about = None)]
#[command(version)]
struct Cli {
    /// Mask values, strictly increasing (defaults to the demonstration mask)
    #[arg(value_name = "INDEX")]
    mask: Vec<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mask = if cli.mask.is_empty() {
        DEMO_MASK.to_vec()
    } else {
        cli.mask
    };
    ensure!(
        mask.windows(2).all(|w| w[0] < w[1]),
        "mask values must be strictly increasing"
    );

    let report = extract(&mask)?;

    for boundary in &report.boundaries {
        println!("{} {}", boundary.cursor, boundary.next_start);
    }

    // Every value is followed by a single space, so the line carries a
    // trailing space whenever it is non-empty.
    let line: String = report.missing.iter().map(|v| format!("{v} ")).collect();
    println!("{line}");

    Ok(())
}
