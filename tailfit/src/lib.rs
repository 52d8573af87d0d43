#![warn(missing_docs)]
//! # Tailfit
//!
//! Fits a power-law model to an empirical numeric sample and quantifies how
//! well the model explains the data, following the method of Clauset,
//! Shalizi and Newman (2009):
//! - **Variate Generation**: lazy inverse-CDF samplers for the exponential,
//!   stretched-exponential and power-law families, continuous or discretized
//! - **Frequency Summaries**: pdf/cdf/ccdf points from a raw sample
//! - **Maximum Likelihood**: closed-form scaling-exponent estimate with
//!   discrete continuity correction
//! - **Model Selection**: joint cutoff/exponent choice by KS minimization
//! - **Goodness of Fit**: semi-parametric bootstrap p-value, parallel across
//!   trials with deterministic per-trial RNG substreams
//!
//! ## Quick Start
//!
//! ```ignore
//! use tailfit::prelude::*;
//!
//! let fit = fit_power_law(&samples, &FitConfig::default())?;
//! let gof = goodness_of_fit(&samples, &fit, &GofConfig::default())?;
//! println!("alpha = {:.3}, xmin = {:.3}, p = {:.3}", fit.alpha, fit.xmin, gof.p_value);
//! ```

// Re-export the generation engine
pub use tailfit_core::{
    CONTINUITY_CORRECTION, DomainError, SequenceLen, TailDistribution, UniformSequence, Variates,
    exponential_quantile, power_law_quantile, stretched_exponential_quantile,
};

// Re-export the estimation engine
pub use tailfit_stats::{
    DEFAULT_EPSILON, DEFAULT_MIN_TAIL_SIZE, FitConfig, FitError, FitResult, FrequencyMode,
    FrequencyPoint, GofConfig, GofResult, LinearFit, LogLogRenderer, RegressionError,
    estimate_alpha, fit_power_law, frequency_axes, frequency_distribution, goodness_of_fit,
    goodness_of_fit_with_cancel, hurwitz_zeta, least_squares,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        FitConfig, FitResult, FrequencyMode, GofConfig, GofResult, SequenceLen, TailDistribution,
        fit_power_law, frequency_distribution, goodness_of_fit,
    };
}
