//! Height → flow lookup.
//!
//! Two strategies are available and one is applied uniformly per table:
//!
//! - [`Strategy::Nearest`] samples the curve and returns the flow of the
//!   sample whose height is closest to the query (first sample wins ties).
//! - [`Strategy::Linear`] interpolates straight between the envelope corners:
//!
//! ```text
//! flow = max_flow - (max_flow - min_flow) * (h - min_height) / (max_height - min_height)
//! ```
//!
//! The two diverge when the curve is coarsely sampled. Heights outside the
//! pump's own `[min_height, max_height]` are never an error: they yield
//! [`FlowCell::OutOfRange`].

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::pump::{Envelope, PumpRecord};

use super::{CurvePoint, Sampler};

/// Placeholder shown for heights a pump cannot reach
pub const OUT_OF_RANGE_GLYPH: &str = "-";

/// How a table cell is derived from a pump curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Flow of the closest sampled point
    #[default]
    Nearest,
    /// Straight line between the envelope corners
    Linear,
}

impl Strategy {
    /// Lowercase name used in config files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Nearest => "nearest",
            Strategy::Linear => "linear",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(Strategy::Nearest),
            "linear" => Ok(Strategy::Linear),
            other => Err(format!(
                "unknown strategy '{}', expected 'nearest' or 'linear'",
                other
            )),
        }
    }
}

/// Result of a height lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowCell {
    /// Flow delivered at the queried height
    Flow(f64),
    /// Height outside the pump's range, or no defined flow
    OutOfRange,
}

impl FlowCell {
    /// Flow value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            FlowCell::Flow(v) => Some(*v),
            FlowCell::OutOfRange => None,
        }
    }

    /// Whether the cell carries no data
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, FlowCell::OutOfRange)
    }
}

/// One decimal by default; `{:.N}` overrides it
impl fmt::Display for FlowCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowCell::Flow(v) => write!(f, "{:.*}", f.precision().unwrap_or(1), v),
            FlowCell::OutOfRange => f.write_str(OUT_OF_RANGE_GLYPH),
        }
    }
}

impl Serialize for FlowCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FlowCell::Flow(v) => serializer.serialize_f64(*v),
            FlowCell::OutOfRange => serializer.serialize_none(),
        }
    }
}

/// Flow of the sample closest in height to `height`; first index wins ties
pub fn nearest_flow(points: &[CurvePoint], height: f64) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;
    for p in points {
        let diff = (p.height - height).abs();
        match best {
            Some((best_diff, _)) if diff >= best_diff => {}
            _ => best = Some((diff, p.flow)),
        }
    }
    best.map(|(_, flow)| flow)
}

/// Closed-form flow between the envelope corners; `None` for a flat head range
pub fn linear_flow(envelope: &Envelope, height: f64) -> Option<f64> {
    let span = envelope.max_height - envelope.min_height;
    if span == 0.0 {
        return None;
    }
    let flow = envelope.max_flow
        - (envelope.max_flow - envelope.min_flow) * (height - envelope.min_height) / span;
    flow.is_finite().then_some(flow)
}

/// Look up the flow of `pump` at `height` with the default sampler
pub fn flow_at_height(pump: &PumpRecord, height: f64, strategy: Strategy) -> FlowCell {
    Interpolator::new(strategy).flow_at_height(pump, height)
}

/// Height → flow lookups with a fixed strategy and sampler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interpolator {
    strategy: Strategy,
    sampler: Sampler,
}

impl Interpolator {
    /// Interpolator with the default sampler
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            sampler: Sampler::default(),
        }
    }

    /// Use `sampler` for the nearest-sample strategy
    pub fn with_sampler(mut self, sampler: Sampler) -> Self {
        self.sampler = sampler;
        self
    }

    /// Configured strategy
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Configured sampler
    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    /// Flow of `pump` at `height`
    pub fn flow_at_height(&self, pump: &PumpRecord, height: f64) -> FlowCell {
        let points = match self.strategy {
            Strategy::Nearest => self.sampler.sample(pump),
            Strategy::Linear => Vec::new(),
        };
        self.cell(pump.envelope(), &points, height)
    }

    /// Flows of `pump` at each of `heights`, sampling the curve once
    pub fn row(&self, pump: &PumpRecord, heights: &[f64]) -> Vec<FlowCell> {
        let points = match self.strategy {
            Strategy::Nearest => self.sampler.sample(pump),
            Strategy::Linear => Vec::new(),
        };
        heights
            .iter()
            .map(|&h| self.cell(pump.envelope(), &points, h))
            .collect()
    }

    fn cell(&self, envelope: &Envelope, points: &[CurvePoint], height: f64) -> FlowCell {
        if !envelope.contains_height(height) {
            return FlowCell::OutOfRange;
        }

        let flow = match self.strategy {
            Strategy::Nearest => nearest_flow(points, height),
            Strategy::Linear => linear_flow(envelope, height),
        };
        flow.map_or(FlowCell::OutOfRange, FlowCell::Flow)
    }
}
