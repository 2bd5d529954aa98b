//! # pumpcurve
//!
//! A command-line tool for comparing pump performance curves.
//!
//! ## Pump Files
//!
//! - **TOML**: `[[pump]]` tables (`.toml`)
//! - **JSON**: an array of pumps, or `{ "pumps": [...] }` (`.json`)
//!
//! ## Usage
//!
//! ```bash
//! # Check a pump file
//! pumpcurve check pumps.toml
//!
//! # Head → flow table as CSV
//! pumpcurve table pumps.toml --format csv -o table.csv
//!
//! # Export the chart
//! pumpcurve chart pumps.toml -o curves.svg
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pumpcurve::curve::Strategy;

mod cli;

use cli::config::Config;
use cli::OutputFormat;

/// pumpcurve - Pump curve sampling, lookup tables and charts
#[derive(Parser)]
#[command(name = "pumpcurve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a pumpcurve.toml config file
    #[arg(short, long, global = true, value_name = "CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every pump of a file and report what would be rejected
    Check {
        /// Pump file (.toml or .json)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List the pumps with their assigned colors
    List {
        /// Pump file (.toml or .json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Leave out the pump with this name (repeatable)
        #[arg(long, value_name = "NAME")]
        exclude: Vec<String>,
    },

    /// Build the head → flow selection table
    Table {
        /// Pump file (.toml or .json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Leave out the pump with this name (repeatable)
        #[arg(long, value_name = "NAME")]
        exclude: Vec<String>,

        /// Head bucket step in meters (default: 0.5)
        #[arg(long)]
        step: Option<f64>,

        /// Lookup strategy: nearest or linear
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Output encoding
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the table to a file instead of stdout
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Export the curves chart as PNG or SVG
    Chart {
        /// Pump file (.toml or .json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Leave out the pump with this name (repeatable)
        #[arg(long, value_name = "NAME")]
        exclude: Vec<String>,

        /// Image path (default: pump-curves.png)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Write SVG regardless of the output extension
        #[arg(long)]
        svg: bool,

        /// Image width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Image height in pixels
        #[arg(long)]
        height: Option<u32>,
    },

    /// Dump the sampled points of every curve
    Sample {
        /// Pump file (.toml or .json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Leave out the pump with this name (repeatable)
        #[arg(long, value_name = "NAME")]
        exclude: Vec<String>,

        /// Steps per curve (default: 20)
        #[arg(long)]
        steps: Option<usize>,

        /// Output encoding
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the flow of every pump at one head
    Lookup {
        /// Pump file (.toml or .json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Head in meters
        #[arg(long, allow_negative_numbers = true)]
        height: f64,

        /// Lookup strategy: nearest or linear
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Leave out the pump with this name (repeatable)
        #[arg(long, value_name = "NAME")]
        exclude: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Check { file } => cli::check::run(file),
        Commands::List { file, exclude } => cli::list::run(file, exclude),
        Commands::Table {
            file,
            exclude,
            step,
            strategy,
            format,
            output,
        } => cli::table::run(
            cli::table::TableArgs {
                file,
                exclude,
                step,
                strategy,
                format,
                output,
            },
            &config,
        ),
        Commands::Chart {
            file,
            exclude,
            output,
            svg,
            width,
            height,
        } => cli::chart::run(file, exclude, output, svg, width, height, &config),
        Commands::Sample {
            file,
            exclude,
            steps,
            format,
        } => cli::sample::run(file, exclude, steps, format, &config),
        Commands::Lookup {
            file,
            height,
            strategy,
            exclude,
        } => cli::lookup::run(file, exclude, height, strategy, &config),
    }
}
