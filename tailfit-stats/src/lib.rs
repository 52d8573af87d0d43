#![warn(missing_docs)]
//! Tailfit Statistical Engine
//!
//! Fits a power-law model to an empirical sample and quantifies how well the
//! model explains the data, following Clauset, Shalizi and Newman (2009):
//! - Frequency summarization of a sample in pdf, cdf or ccdf form
//! - Maximum-likelihood estimation of the scaling exponent
//! - Joint cutoff/exponent selection by Kolmogorov-Smirnov minimization
//! - Semi-parametric bootstrap goodness-of-fit p-value, parallel across
//!   trials with deterministic per-trial RNG substreams

mod estimate;
mod frequency;
mod gof;
mod regression;
mod select;
mod zeta;

pub use estimate::estimate_alpha;
pub use frequency::{FrequencyMode, FrequencyPoint, frequency_axes, frequency_distribution};
pub use gof::{GofConfig, GofResult, goodness_of_fit, goodness_of_fit_with_cancel};
pub use regression::{LinearFit, RegressionError, least_squares};
pub use select::{FitConfig, FitResult, fit_power_law};
pub use zeta::hurwitz_zeta;

use tailfit_core::DomainError;

/// Default smallest tail a candidate cutoff may leave behind.
pub const DEFAULT_MIN_TAIL_SIZE: usize = 50;

/// Default accuracy target for the bootstrap p-value estimate.
pub const DEFAULT_EPSILON: f64 = 0.01;

/// Errors from the estimation pipeline.
///
/// Every variant is a deterministic input violation surfaced synchronously;
/// nothing here is transient or retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Out-of-domain distribution parameters.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The input series (or the tail restricted to the cutoff) is empty.
    #[error("input series is empty")]
    EmptySample,

    /// The p-value accuracy target must be positive.
    #[error("invalid accuracy epsilon: {0} (must be positive)")]
    InvalidEpsilon(f64),

    /// Too few samples, or no usable cutoff candidates remain.
    #[error("not enough samples: got {got}, need at least {required}")]
    InsufficientData {
        /// How many samples (or candidates) were available.
        got: usize,
        /// The configured minimum.
        required: usize,
    },

    /// The summed log-ratio is exactly zero, so the exponent is undefined.
    #[error("every tail sample equals the cutoff {xmin}; the scaling exponent is undefined")]
    DegenerateFit {
        /// The cutoff the degenerate tail collapsed onto.
        xmin: f64,
    },
}

/// Rendering collaborator for diagnostic plots.
///
/// Consumes two equal-length sequences and draws a log-log scatter; the core
/// ships no implementation. Pair with [`frequency_axes`] to plot a frequency
/// summary.
pub trait LogLogRenderer {
    /// Render the (x, y) points on log-log axes.
    fn render_scatter(&mut self, x: &[f64], y: &[f64]);
}
