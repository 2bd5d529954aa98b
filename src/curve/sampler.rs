//! Curve sampling.
//!
//! A pump curve runs from `(min_flow, max_height)` to `(max_flow, min_height)`.
//! For `t = i / n`, `i in 0..=n`:
//!
//! ```text
//! flow(t)   = min_flow   + (max_flow - min_flow)     * t
//! height(t) = max_height - (max_height - min_height) * t^1.5
//! ```
//!
//! Head falls slowly near shut-off and faster as flow grows. Both formulas
//! are evaluated as `a * (1 - w) + b * w`, which is algebraically the same
//! and lands exactly on the corners at `t = 0` and `t = 1`.

use crate::pump::{Envelope, PumpRecord};

use super::{CurveError, CurvePoint};

/// Steps used when none are configured
pub const DEFAULT_STEP_COUNT: usize = 20;

/// Exponent of the head decay
pub const HEAD_DECAY_EXPONENT: f64 = 1.5;

#[inline]
fn blend(start: f64, end: f64, w: f64) -> f64 {
    // flat axis: keep every sample bit-identical
    if start == end {
        return start;
    }
    start * (1.0 - w) + end * w
}

/// Sample an envelope into `step_count + 1` points.
///
/// A `step_count` of 0 is treated as 1.
pub fn sample_envelope(envelope: &Envelope, step_count: usize) -> Vec<CurvePoint> {
    let n = step_count.max(1);
    (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let w = t.powf(HEAD_DECAY_EXPONENT);
            CurvePoint {
                flow: blend(envelope.min_flow, envelope.max_flow, t),
                height: blend(envelope.max_height, envelope.min_height, w),
            }
        })
        .collect()
}

/// Sample a pump curve into `step_count + 1` points
pub fn sample(pump: &PumpRecord, step_count: usize) -> Vec<CurvePoint> {
    sample_envelope(pump.envelope(), step_count)
}

/// Sampler with a validated step count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    step_count: usize,
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            step_count: DEFAULT_STEP_COUNT,
        }
    }
}

impl Sampler {
    /// Sampler with [`DEFAULT_STEP_COUNT`] steps
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of steps
    pub fn with_step_count(mut self, step_count: usize) -> Result<Self, CurveError> {
        if step_count == 0 {
            return Err(CurveError::ZeroSteps);
        }
        self.step_count = step_count;
        Ok(self)
    }

    /// Configured number of steps
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Sample `pump`
    pub fn sample(&self, pump: &PumpRecord) -> Vec<CurvePoint> {
        sample(pump, self.step_count)
    }
}
