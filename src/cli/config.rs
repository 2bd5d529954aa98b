//! TOML configuration file support.
//!
//! Instead of repeating flags on every invocation, defaults can be kept in a
//! config file. Every key is optional; command-line flags win over the file,
//! and the file wins over built-in defaults.
//!
//! ```toml
//! # pumpcurve.toml
//! [curve]
//! step_count = 20
//! strategy = "nearest"
//!
//! [table]
//! bucket_step = 0.5
//!
//! [chart]
//! width = 1280
//! height = 760
//! title = "Pump Selection Curves"
//! x_label = "Flow (L/h)"
//! y_label = "Manometric head (m)"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use pumpcurve::chart::ChartOptions;
use pumpcurve::curve::Strategy;
use pumpcurve::table::TableOptions;

/// Root configuration structure for pumpcurve.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Curve sampling settings.
    #[serde(default)]
    pub curve: CurveConfig,

    /// Lookup table settings.
    #[serde(default)]
    pub table: TableConfig,

    /// Chart export settings.
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Curve sampling settings.
#[derive(Debug, Default, Deserialize)]
pub struct CurveConfig {
    /// Steps per sampled curve.
    pub step_count: Option<usize>,

    /// Height lookup strategy ("nearest" or "linear").
    pub strategy: Option<Strategy>,
}

/// Lookup table settings.
#[derive(Debug, Default, Deserialize)]
pub struct TableConfig {
    /// Height increment between columns.
    pub bucket_step: Option<f64>,
}

/// Chart export settings.
#[derive(Debug, Default, Deserialize)]
pub struct ChartConfig {
    /// Canvas width in pixels.
    pub width: Option<u32>,

    /// Canvas height in pixels.
    pub height: Option<u32>,

    /// Chart caption.
    pub title: Option<String>,

    /// X axis description.
    pub x_label: Option<String>,

    /// Y axis description.
    pub y_label: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the file if one was given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Table options with flag overrides applied.
    pub fn table_options(
        &self,
        bucket_step: Option<f64>,
        strategy: Option<Strategy>,
        step_count: Option<usize>,
    ) -> TableOptions {
        let defaults = TableOptions::default();
        TableOptions {
            bucket_step: bucket_step
                .or(self.table.bucket_step)
                .unwrap_or(defaults.bucket_step),
            strategy: strategy.or(self.curve.strategy).unwrap_or(defaults.strategy),
            step_count: self.step_count(step_count),
        }
    }

    /// Chart options with flag overrides applied.
    pub fn chart_options(&self, width: Option<u32>, height: Option<u32>) -> ChartOptions {
        let defaults = ChartOptions::default();
        ChartOptions {
            width: width.or(self.chart.width).unwrap_or(defaults.width),
            height: height.or(self.chart.height).unwrap_or(defaults.height),
            title: self.chart.title.clone().unwrap_or(defaults.title),
            x_label: self.chart.x_label.clone().unwrap_or(defaults.x_label),
            y_label: self.chart.y_label.clone().unwrap_or(defaults.y_label),
            step_count: self.step_count(None),
        }
    }

    /// Curve steps with a flag override applied.
    pub fn step_count(&self, flag: Option<usize>) -> usize {
        flag.or(self.curve.step_count)
            .unwrap_or(pumpcurve::curve::DEFAULT_STEP_COUNT)
    }
}
