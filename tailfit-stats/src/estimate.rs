//! Maximum-Likelihood Exponent Estimation
//!
//! The closed-form MLE for the power-law scaling exponent over a tail
//! restricted to values at or above a hypothesized cutoff:
//! `alpha = 1 + n / sum(ln(x_i / (xmin - c)))`, with c = 0.5 for
//! discretized samples (continuity correction) and 0 otherwise.

use crate::FitError;
use tailfit_core::{CONTINUITY_CORRECTION, DomainError};

/// Estimates the scaling exponent of a power-law tail.
///
/// `tail` must already be restricted to values >= `xmin`. The division by
/// the summed log-ratio is guarded: a degenerate tail (every value equal to
/// the corrected cutoff) is reported as an error, never as infinity.
pub fn estimate_alpha(tail: &[f64], xmin: f64, discrete: bool) -> Result<f64, FitError> {
    if tail.is_empty() {
        return Err(FitError::EmptySample);
    }

    let corrected = if discrete {
        let shifted = xmin - CONTINUITY_CORRECTION;
        if !(shifted > 0.0) {
            return Err(DomainError::DegenerateDiscreteSupport(shifted).into());
        }
        shifted
    } else {
        if !(xmin > 0.0) {
            return Err(DomainError::NonPositiveXmin(xmin).into());
        }
        xmin
    };

    let log_sum: f64 = tail.iter().map(|&x| (x / corrected).ln()).sum();
    if log_sum == 0.0 {
        return Err(FitError::DegenerateFit { xmin });
    }

    Ok(1.0 + tail.len() as f64 / log_sum)
}
