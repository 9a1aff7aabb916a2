// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line entry point.
//!
//! ```text
//! unit-basis -i units.json          # best bases and score
//! unit-basis -i units.json -v       # plus every candidate's score
//! unit-basis -i units.json -vv      # plus every unit's exponents
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use unit_basis_search::search::{
    search_with_reporter, ConsoleReporter, ScoringMode, SearchOptions, Verbosity,
};
use unit_basis_search::UnitCatalog;

/// Find the units that express every other unit most simply.
#[derive(Parser)]
#[command(name = "unit-basis")]
#[command(version)]
#[command(about = "Find the sparsest basis of physical units")]
struct Cli {
    /// Path to JSON file with description of units
    #[arg(short, long)]
    input: PathBuf,

    /// Print score for every candidate set (-v), and partial scores (-vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Do not count a candidate's own units towards its score
    #[arg(long)]
    exclude_basis: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let catalog = UnitCatalog::load(&cli.input)
        .with_context(|| format!("failed to load units from {}", cli.input.display()))?;

    let options = SearchOptions {
        verbosity: Verbosity::from_occurrences(cli.verbose),
        scoring: if cli.exclude_basis {
            ScoringMode::ExcludeBasis
        } else {
            ScoringMode::IncludeBasis
        },
    };
    let outcome = search_with_reporter(&catalog, options, Box::new(ConsoleReporter))
        .context("basis search failed")?;

    println!("{}", outcome);
    Ok(())
}
