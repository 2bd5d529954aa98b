//! # Pump Curves
//!
//! Pure functions deriving everything shown for a pump from its envelope:
//!
//! - [`sample`] / [`Sampler`]: the sampled head-vs-flow curve
//! - [`flow_at_height`] / [`Interpolator`]: the flow a pump delivers at a given head
//! - [`height_buckets`]: the head values used as table columns
//!
//! Nothing here holds state; results are recomputed from the pumps on every call.
//!
//! ```rust
//! use pumpcurve::curve::{flow_at_height, sample, FlowCell, Strategy};
//! use pumpcurve::pump::{PumpCollection, PumpSpec};
//!
//! let mut pumps = PumpCollection::new();
//! let pump = pumps.add(&PumpSpec::new("1/3 cv", 10.0, 5000.0))?;
//!
//! let points = sample(pump, 20);
//! assert_eq!(points.len(), 21);
//! assert_eq!(points[10].flow, 2500.0);
//!
//! assert_eq!(flow_at_height(pump, 12.0, Strategy::Nearest), FlowCell::OutOfRange);
//! # Ok::<(), pumpcurve::pump::PumpError>(())
//! ```

mod buckets;
mod error;
mod interpolate;
mod sampler;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

pub use buckets::{height_buckets, DEFAULT_BUCKET_STEP, MAX_BUCKETS};
pub use error::CurveError;
pub use interpolate::{
    flow_at_height, linear_flow, nearest_flow, FlowCell, Interpolator, Strategy,
    OUT_OF_RANGE_GLYPH,
};
pub use sampler::{sample, sample_envelope, Sampler, DEFAULT_STEP_COUNT, HEAD_DECAY_EXPONENT};

/// One sampled point of a pump curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Flow (L/h)
    pub flow: f64,
    /// Manometric head (m)
    pub height: f64,
}
