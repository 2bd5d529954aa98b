use log::debug;

use crate::pump::PumpRecord;

use super::CurveError;

/// Height increment between table columns
pub const DEFAULT_BUCKET_STEP: f64 = 0.5;

/// Upper bound on generated columns
pub const MAX_BUCKETS: usize = 10_000;

const SNAP_SCALE: f64 = 1e9;

// removes accumulated float drift, e.g. 2.0 + 3 * 0.1
#[inline]
fn snap(value: f64) -> f64 {
    (value * SNAP_SCALE).round() / SNAP_SCALE
}

/// Heights used as table columns.
///
/// Spans from the lowest `min_height` to the highest `max_height` of all
/// pumps in increments of `step`. Both ends are included: when stepping does
/// not land on the top, the top is appended. The result is ascending and free
/// of duplicates; no pumps gives an empty list.
pub fn height_buckets<'a, I>(pumps: I, step: f64) -> Result<Vec<f64>, CurveError>
where
    I: IntoIterator<Item = &'a PumpRecord>,
{
    if !step.is_finite() || step <= 0.0 {
        return Err(CurveError::InvalidBucketStep(step));
    }

    let range = pumps.into_iter().fold(None, |acc: Option<(f64, f64)>, p| {
        Some(match acc {
            Some((lo, hi)) => (lo.min(p.min_height()), hi.max(p.max_height())),
            None => (p.min_height(), p.max_height()),
        })
    });
    let Some((lo, hi)) = range else {
        return Ok(Vec::new());
    };

    let intervals = snap((hi - lo) / step).floor();
    // +2 leaves room for the appended top
    if intervals + 2.0 > MAX_BUCKETS as f64 {
        return Err(CurveError::TooManyBuckets {
            count: (intervals as usize).saturating_add(2),
            limit: MAX_BUCKETS,
        });
    }

    let mut buckets: Vec<f64> = (0..=intervals as usize)
        .map(|i| snap(lo + i as f64 * step).max(lo).min(hi))
        .collect();
    if buckets.last().is_some_and(|&last| hi - last > 1.0 / SNAP_SCALE) {
        buckets.push(hi);
    }

    buckets.sort_by(f64::total_cmp);
    buckets.dedup_by(|a, b| (*a - *b).abs() <= 1.0 / SNAP_SCALE);

    debug!(
        "Height buckets: {} columns from {} to {} (step {})",
        buckets.len(),
        lo,
        hi,
        step
    );
    Ok(buckets)
}
