/// Errors raised by curve and bucket parameters
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// Sampler configured with zero steps
    #[error("step count must be at least 1")]
    ZeroSteps,

    /// Bucket step is zero, negative or not finite
    #[error("invalid bucket step {0}: must be finite and > 0")]
    InvalidBucketStep(f64),

    /// Height range divided by the step yields too many columns
    #[error("{count} height buckets exceed the limit of {limit}")]
    TooManyBuckets {
        /// Buckets the range would produce
        count: usize,
        /// Maximum allowed
        limit: usize,
    },
}
