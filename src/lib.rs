//! # pumpcurve - Pump Selection Curves
//!
//! `pumpcurve` compares centrifugal pumps by their performance curves: for a
//! set of pumps it samples each head/flow curve, answers "what flow does this
//! pump deliver at this head", builds a head-bucketed selection table and
//! exports the curves as a chart.
//!
//! ## Key Features
//!
//! - **Curve Sampling**: Deterministic, evenly stepped points from each pump's
//!   envelope. Head falls off as `t^1.5`, so curves bow toward the flow axis.
//!
//! - **Height Lookup**: Nearest-sample lookup (default) or closed-form linear
//!   interpolation between the envelope corners. Heights outside a pump's head
//!   range come back as an explicit out-of-range marker, never as zero.
//!
//! - **Selection Table**: One row per pump, one column per head bucket spanning
//!   every pump's head range. Text, CSV and JSON output.
//!
//! - **Chart Export**: PNG or SVG via `plotters`, one colored line per pump.
//!
//! ## Quick Start
//!
//! ```rust
//! use pumpcurve::curve::{FlowCell, Interpolator, Strategy};
//! use pumpcurve::pump::{PumpCollection, PumpSpec};
//! use pumpcurve::table::{SelectionTable, TableOptions};
//!
//! let mut pumps = PumpCollection::new();
//! pumps.add(&PumpSpec::new("1/3 cv", 10.0, 5000.0))?;
//! pumps.add(&PumpSpec::new("1/2 cv", 14.0, 7000.0).min_height(2.0))?;
//!
//! // Flow of one pump at 5 m of head
//! let small = pumps.iter().next().unwrap();
//! let cell = Interpolator::new(Strategy::Linear).flow_at_height(small, 5.0);
//! assert_eq!(cell, FlowCell::Flow(2500.0));
//!
//! // Head → flow table over every pump
//! let table = SelectionTable::build(&pumps, &TableOptions::default())?;
//! assert_eq!(table.rows.len(), 2);
//! println!("{}", table);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`pump`]: pump specs, validated records, colors and the session collection
//! - [`curve`]: curve sampling, height → flow lookup and head buckets
//! - [`table`]: the head-bucketed selection table and its encodings
//! - [`chart`]: PNG/SVG chart export
//! - [`validator`]: per-pump checks of a pump file with a printable report
//!
//! Pure computation lives in [`curve`] and [`table`]; nothing there touches
//! the filesystem. Only [`pump`] file loading and [`chart`] export do I/O.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod chart;
pub mod curve;
pub mod pump;
pub mod table;
pub mod validator;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::chart::{export, render, ChartError, ChartFormat, ChartOptions};
    pub use crate::curve::{
        height_buckets, sample, CurveError, CurvePoint, FlowCell, Interpolator, Sampler, Strategy,
        DEFAULT_BUCKET_STEP, DEFAULT_STEP_COUNT,
    };
    pub use crate::pump::{
        load_pumps, parse_pumps, Color, Palette, PumpCollection, PumpError, PumpFileFormat, PumpId,
        PumpRecord, PumpSpec,
    };
    pub use crate::table::{SelectionTable, TableError, TableOptions, TableRow};
    pub use crate::validator::{check_pumps, CheckReport, CheckStatus, Verdict};
}
