#![warn(missing_docs)]
//! Tailfit Core - Variate Generation
//!
//! This crate provides the data-production side of the tailfit pipeline:
//! - `UniformSequence` for lazy uniform [0, 1) draws, bounded or unbounded
//! - Closed-form inverse-CDF samplers for the exponential,
//!   stretched-exponential and power-law families
//! - `TailDistribution` parameter validation (Lambda > 0, Beta > 0,
//!   xmin > 0, Alpha > 1)
//!
//! Randomness is never implicit: every sequence takes an explicitly passed
//! RNG handle, so callers control seeding and can derive independent
//! substreams for parallel work.

mod distribution;
mod sequence;

pub use distribution::{
    TailDistribution, Variates, exponential_quantile, power_law_quantile,
    stretched_exponential_quantile,
};
pub use sequence::{SequenceLen, UniformSequence};

/// Offset subtracted from the cutoff when sampling a discretized
/// distribution, before rounding each variate to the nearest integer.
///
/// This approximates the discrete CCDF by a shifted continuous one. It is a
/// standard approximation, not an exact discrete sampler; exact discrete
/// inverse-CDF sampling would require an iterative search per draw.
pub const CONTINUITY_CORRECTION: f64 = 0.5;

/// Out-of-domain distribution parameters.
///
/// These are deterministic input violations: they are reported once,
/// synchronously, and never retried.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Rate parameter of an exponential family must be positive.
    #[error("rate parameter lambda must be positive, got {0}")]
    NonPositiveLambda(f64),

    /// Stretching exponent must be positive.
    #[error("stretching exponent beta must be positive, got {0}")]
    NonPositiveBeta(f64),

    /// Lower cutoff must be positive.
    #[error("lower cutoff xmin must be positive, got {0}")]
    NonPositiveXmin(f64),

    /// A power law is only normalizable for alpha > 1.
    #[error("scaling exponent alpha must be greater than 1, got {0}")]
    AlphaNotAboveOne(f64),

    /// The continuity correction moved the cutoff out of the support.
    #[error("continuity correction shifts the cutoff to {0}, which is not positive")]
    DegenerateDiscreteSupport(f64),
}
