//! Joint Cutoff and Exponent Selection
//!
//! Scans every distinct sample value as a candidate cutoff, estimates the
//! exponent for each trial tail, scores the candidate by the
//! Kolmogorov-Smirnov distance between the empirical and theoretical CCDFs,
//! and keeps the minimum. This is the computational core of the pipeline:
//! O(k * n log n) over k candidates.

use crate::estimate::estimate_alpha;
use crate::frequency::{FrequencyMode, frequency_distribution};
use crate::zeta::hurwitz_zeta;
use crate::{DEFAULT_MIN_TAIL_SIZE, FitError};
use serde::{Deserialize, Serialize};
use tailfit_core::CONTINUITY_CORRECTION;

/// Configuration for the cutoff scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitConfig {
    /// Smallest tail a candidate cutoff may leave behind (default: 50).
    pub min_tail_size: usize,
    /// Whether the sample is integer-valued.
    pub discrete: bool,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            min_tail_size: DEFAULT_MIN_TAIL_SIZE,
            discrete: false,
        }
    }
}

/// A fitted power-law model. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Selected lower cutoff.
    pub xmin: f64,
    /// Maximum-likelihood scaling exponent for the selected cutoff.
    pub alpha: f64,
    /// KS distance between the empirical and fitted CCDFs, in [0, 1].
    pub ks_statistic: f64,
}

/// Finds the best (xmin, alpha) pair for `samples` by KS minimization.
///
/// Candidates are the distinct sample values, minus the largest
/// `min_tail_size - 1` of them so every trial tail keeps at least
/// `min_tail_size` points, and minus values outside the model support
/// (a cutoff must stay positive after the discrete correction). Ties on the
/// KS score keep the first-encountered, i.e. smallest, cutoff.
pub fn fit_power_law(samples: &[f64], config: &FitConfig) -> Result<FitResult, FitError> {
    if samples.is_empty() {
        return Err(FitError::EmptySample);
    }
    if samples.len() < config.min_tail_size {
        return Err(FitError::InsufficientData {
            got: samples.len(),
            required: config.min_tail_size,
        });
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut distinct: Vec<f64> = Vec::new();
    for &x in &sorted {
        if distinct.last().map_or(true, |&last| x > last) {
            distinct.push(x);
        }
    }

    let usable = distinct
        .len()
        .saturating_sub(config.min_tail_size.saturating_sub(1));
    let floor = if config.discrete {
        CONTINUITY_CORRECTION
    } else {
        0.0
    };

    let mut best: Option<FitResult> = None;
    let mut scanned = 0usize;
    for &xmin in distinct[..usable].iter().filter(|&&c| c > floor) {
        scanned += 1;
        let tail_start = sorted.partition_point(|&x| x < xmin);
        let tail = &sorted[tail_start..];
        let alpha = estimate_alpha(tail, xmin, config.discrete)?;
        let ks = ks_distance(tail, xmin, alpha, config.discrete);
        if best.map_or(true, |b| ks < b.ks_statistic) {
            best = Some(FitResult {
                xmin,
                alpha,
                ks_statistic: ks,
            });
        }
    }

    match best {
        Some(fit) => {
            tracing::debug!(
                candidates = scanned,
                xmin = fit.xmin,
                alpha = fit.alpha,
                ks = fit.ks_statistic,
                "cutoff scan complete"
            );
            Ok(fit)
        }
        None => Err(FitError::InsufficientData {
            got: distinct.len(),
            required: config.min_tail_size,
        }),
    }
}

/// Supremum distance between the empirical tail CCDF and the fitted model
/// CCDF, evaluated at every distinct tail value.
///
/// Continuous model: `(x / xmin)^(1 - alpha)`. Discrete model: the ratio of
/// Hurwitz zeta values `zeta(alpha, x) / zeta(alpha, xmin)`.
fn ks_distance(tail: &[f64], xmin: f64, alpha: f64, discrete: bool) -> f64 {
    let n = tail.len() as f64;
    let zeta_at_xmin = if discrete {
        hurwitz_zeta(alpha, xmin)
    } else {
        0.0
    };

    let mut sup = 0.0f64;
    for point in frequency_distribution(tail, FrequencyMode::Ccdf) {
        let observed = point.count as f64 / n;
        let expected = if discrete {
            hurwitz_zeta(alpha, point.value) / zeta_at_xmin
        } else {
            (point.value / xmin).powf(1.0 - alpha)
        };
        let distance = (observed - expected).abs();
        if distance > sup {
            sup = distance;
        }
    }
    sup
}
