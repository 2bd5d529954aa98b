//! Subcommand implementations for the `pumpcurve` binary.

pub mod chart;
pub mod check;
pub mod config;
pub mod list;
pub mod lookup;
pub mod sample;
pub mod table;

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::{info, warn};
use std::path::Path;

use pumpcurve::pump::{load_pumps, PumpCollection};

/// Text encoding of tabular command output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain text
    #[default]
    Text,
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
}

/// Load a pump file into a session collection, then drop excluded pumps
pub fn load_session(path: &Path, exclude: &[String]) -> Result<PumpCollection> {
    if !path.exists() {
        anyhow::bail!("Pump file does not exist: {}", path.display());
    }

    let specs = load_pumps(path)
        .with_context(|| format!("Failed to load pump file: {}", path.display()))?;
    let mut pumps = PumpCollection::from_specs(specs)
        .with_context(|| format!("Invalid pump in {}", path.display()))?;

    for name in exclude {
        match pumps.remove_by_name(name) {
            Some(removed) => info!("Excluded pump '{}' ({})", removed.name(), removed.id()),
            None => warn!("No pump named '{}' to exclude", name),
        }
    }

    info!("Loaded {} pump(s) from {}", pumps.len(), path.display());
    Ok(pumps)
}

/// Write `content` to `output`, or to stdout when no path is given
pub fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
