//! # Selection Table
//!
//! Head → flow table: one column per height bucket, one row per pump.
//! A cell is filled only when the bucket lies inside that pump's own head
//! range; otherwise it shows [`crate::curve::OUT_OF_RANGE_GLYPH`].
//!
//! ```text
//! Pump      | 2   | 2.5    | 3      | ...
//! ----------+-----+--------+--------+
//! 1/3 cv    | -   | 4800.0 | 4600.0 | ...
//! ```
//!
//! Renderers: plain text ([`std::fmt::Display`]), CSV ([`SelectionTable::to_csv`])
//! and JSON ([`SelectionTable::to_json`]).

use log::debug;
use serde::Serialize;
use std::fmt;
use std::io::Write;

use crate::curve::{
    height_buckets, CurveError, FlowCell, Interpolator, Sampler, Strategy, DEFAULT_BUCKET_STEP,
};
use crate::pump::{Color, PumpCollection, PumpId};

/// Note printed under the table
pub const TABLE_FOOTNOTE: &str = "Flow in L/h, valid for 0 m suction head.";

/// Errors that can occur while building or writing a table
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Invalid sampling or bucket parameters
    #[error("Curve error: {0}")]
    CurveError(#[from] CurveError),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// I/O error flushing output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Parameters for building a [`SelectionTable`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableOptions {
    /// Height increment between columns
    pub bucket_step: f64,
    /// Cell derivation strategy, applied to every cell
    pub strategy: Strategy,
    /// Curve steps used by the nearest-sample strategy
    pub step_count: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            bucket_step: DEFAULT_BUCKET_STEP,
            strategy: Strategy::default(),
            step_count: Sampler::default().step_count(),
        }
    }
}

/// One pump's row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Pump identifier
    pub pump_id: PumpId,
    /// Pump name
    pub name: String,
    /// Pump display color
    pub color: Color,
    /// One cell per height bucket
    pub cells: Vec<FlowCell>,
}

/// Height buckets and the flow each pump delivers at them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionTable {
    /// Strategy used for every cell
    pub strategy: Strategy,
    /// Column heights, ascending
    pub heights: Vec<f64>,
    /// Rows in collection order
    pub rows: Vec<TableRow>,
}

impl SelectionTable {
    /// Derive the table for `pumps`
    pub fn build(pumps: &PumpCollection, options: &TableOptions) -> Result<Self, TableError> {
        let sampler = Sampler::new().with_step_count(options.step_count)?;
        let interpolator = Interpolator::new(options.strategy).with_sampler(sampler);
        let heights = height_buckets(pumps, options.bucket_step)?;

        let rows = pumps
            .iter()
            .map(|pump| TableRow {
                pump_id: pump.id(),
                name: pump.name().to_string(),
                color: pump.color(),
                cells: interpolator.row(pump, &heights),
            })
            .collect::<Vec<_>>();

        debug!(
            "Built {}x{} selection table ({} strategy)",
            rows.len(),
            heights.len(),
            options.strategy
        );

        Ok(Self {
            strategy: options.strategy,
            heights,
            rows,
        })
    }

    /// Whether there is nothing to render
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty() || self.rows.is_empty()
    }

    /// Column headers: `Pump` followed by the formatted heights
    pub fn header(&self) -> Vec<String> {
        std::iter::once("Pump".to_string())
            .chain(self.heights.iter().map(|&h| format_height(h)))
            .collect()
    }

    /// Write the table as CSV
    pub fn to_csv<W: Write>(&self, writer: W) -> Result<(), TableError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(self.header())?;
        for row in &self.rows {
            let record = std::iter::once(row.name.clone())
                .chain(row.cells.iter().map(|c| c.to_string()));
            csv_writer.write_record(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Serialize the table to pretty JSON; out-of-range cells are `null`
    pub fn to_json(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Format a bucket height without trailing zeros (`2`, `2.5`, `2.25`).
///
/// Up to nine decimals are kept, the resolution buckets are snapped to, so
/// distinct buckets always get distinct headers however fine the step.
pub fn format_height(height: f64) -> String {
    let s = format!("{:.9}", height);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

impl fmt::Display for SelectionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "(no pumps)");
        }

        let header = self.header();
        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                std::iter::once(row.name.clone())
                    .chain(row.cells.iter().map(|c| c.to_string()))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|col| {
                body.iter()
                    .map(|r| r[col].chars().count())
                    .chain(std::iter::once(header[col].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let write_line = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " | ")?;
                }
                if col == 0 {
                    write!(f, "{:<width$}", cell, width = widths[col])?;
                } else {
                    write!(f, "{:>width$}", cell, width = widths[col])?;
                }
            }
            writeln!(f)
        };

        writeln!(f, "Total manometric head (m) / flow (L/h)")?;
        write_line(f, &header)?;
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;
        for row in &body {
            write_line(f, row)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", TABLE_FOOTNOTE)
    }
}
