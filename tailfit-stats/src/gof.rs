//! Semi-Parametric Bootstrap Goodness-of-Fit
//!
//! Estimates the probability that data generated under the fitted model
//! would show a KS distance at least as large as the observed one. Each
//! trial synthesizes a dataset mixing empirical below-cutoff values with
//! fresh power-law draws, refits it from scratch, and compares KS scores.
//!
//! Trials are statistically independent, so they run across the rayon pool
//! by default; every trial seeds its own RNG substream from the configured
//! seed and its trial index, which makes the p-value bit-identical at any
//! degree of parallelism.

use crate::select::{FitConfig, FitResult, fit_power_law};
use crate::{DEFAULT_EPSILON, DEFAULT_MIN_TAIL_SIZE, FitError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use tailfit_core::{CONTINUITY_CORRECTION, DomainError, SequenceLen, TailDistribution};

/// Configuration for the bootstrap run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GofConfig {
    /// Target standard error of the p-value estimate (default: 0.01).
    /// The trial count is `ceil(0.25 / epsilon^2) + 1`.
    pub epsilon: f64,
    /// Seed from which every trial derives its own RNG substream.
    pub seed: u64,
    /// Minimum tail size for each synthetic refit.
    pub min_tail_size: usize,
    /// Whether samples are integer-valued.
    pub discrete: bool,
    /// Whether to run trials across the rayon thread pool.
    pub parallel: bool,
}

impl Default for GofConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            seed: 0,
            min_tail_size: DEFAULT_MIN_TAIL_SIZE,
            discrete: false,
            parallel: true,
        }
    }
}

/// Outcome of a bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GofResult {
    /// Fraction of evaluated trials whose refit KS exceeded the observed
    /// statistic. High values mean the data are consistent with the model.
    pub p_value: f64,
    /// Trials the accuracy target called for.
    pub trials_planned: usize,
    /// Trials that produced a comparable KS statistic.
    pub trials_evaluated: usize,
    /// Trials whose synthetic refit failed; excluded from the p-value but
    /// never silently dropped.
    pub trials_skipped: usize,
    /// False when the run was cancelled before every trial was attempted.
    pub complete: bool,
}

enum TrialOutcome {
    Evaluated(f64),
    Skipped,
    Cancelled,
}

/// Runs the bootstrap to completion. See [`goodness_of_fit_with_cancel`].
pub fn goodness_of_fit(
    samples: &[f64],
    fit: &FitResult,
    config: &GofConfig,
) -> Result<GofResult, FitError> {
    let never = AtomicBool::new(false);
    goodness_of_fit_with_cancel(samples, fit, config, &never)
}

/// Estimates the goodness-of-fit p-value for `fit` against `samples`.
///
/// Setting `cancel` aborts the trial loop eagerly: trials not yet started
/// are dropped and the partial estimate comes back with `complete = false`.
/// Errors when the input is empty, the accuracy target is not positive, the
/// fitted parameters are out of domain, or no trial could be evaluated.
pub fn goodness_of_fit_with_cancel(
    samples: &[f64],
    fit: &FitResult,
    config: &GofConfig,
    cancel: &AtomicBool,
) -> Result<GofResult, FitError> {
    if samples.is_empty() {
        return Err(FitError::EmptySample);
    }
    if !(config.epsilon > 0.0) {
        return Err(FitError::InvalidEpsilon(config.epsilon));
    }
    let model = TailDistribution::power_law(fit.alpha, fit.xmin)?;
    if config.discrete && fit.xmin - CONTINUITY_CORRECTION <= 0.0 {
        return Err(DomainError::DegenerateDiscreteSupport(fit.xmin - CONTINUITY_CORRECTION).into());
    }

    let trials = (0.25 / (config.epsilon * config.epsilon)).ceil() as usize + 1;
    let below: Vec<f64> = samples.iter().copied().filter(|&x| x < fit.xmin).collect();
    let tail_probability = (samples.len() - below.len()) as f64 / samples.len() as f64;
    let refit = FitConfig {
        min_tail_size: config.min_tail_size,
        discrete: config.discrete,
    };

    let run_trial = |trial: usize| -> TrialOutcome {
        if cancel.load(Ordering::Relaxed) {
            return TrialOutcome::Cancelled;
        }
        let mut rng = trial_rng(config.seed, trial as u64);
        let synthetic = synthesize(
            samples.len(),
            tail_probability,
            &below,
            &model,
            config.discrete,
            &mut rng,
        );
        match fit_power_law(&synthetic, &refit) {
            Ok(trial_fit) => TrialOutcome::Evaluated(trial_fit.ks_statistic),
            Err(_) => TrialOutcome::Skipped,
        }
    };

    let outcomes: Vec<TrialOutcome> = if config.parallel {
        (0..trials).into_par_iter().map(run_trial).collect()
    } else {
        (0..trials).map(run_trial).collect()
    };

    let mut ks_values = Vec::new();
    let mut skipped = 0usize;
    let mut cancelled = 0usize;
    for outcome in outcomes {
        match outcome {
            TrialOutcome::Evaluated(ks) => ks_values.push(ks),
            TrialOutcome::Skipped => skipped += 1,
            TrialOutcome::Cancelled => cancelled += 1,
        }
    }

    let evaluated = ks_values.len();
    if evaluated == 0 {
        return Err(FitError::InsufficientData {
            got: 0,
            required: 1,
        });
    }

    let exceeding = ks_values
        .iter()
        .filter(|&&ks| ks > fit.ks_statistic)
        .count();
    let p_value = exceeding as f64 / evaluated as f64;

    ks_values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    tracing::debug!(
        trials,
        evaluated,
        skipped,
        cancelled,
        ks_observed = fit.ks_statistic,
        ks_median = ks_values[evaluated / 2],
        p_value,
        "bootstrap run complete"
    );

    Ok(GofResult {
        p_value,
        trials_planned: trials,
        trials_evaluated: evaluated,
        trials_skipped: skipped,
        complete: cancelled == 0,
    })
}

/// Independent RNG substream for one trial. Mixing the index through the
/// 64-bit golden ratio keeps neighboring trial seeds far apart.
fn trial_rng(seed: u64, trial: u64) -> StdRng {
    StdRng::seed_from_u64(seed ^ trial.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Builds one synthetic dataset under the null hypothesis: each slot is a
/// fresh tail draw with probability `tail_probability`, otherwise a uniform
/// pick (with replacement) from the empirical below-cutoff values.
fn synthesize<R: Rng>(
    n: usize,
    tail_probability: f64,
    below: &[f64],
    model: &TailDistribution,
    discrete: bool,
    rng: &mut R,
) -> Vec<f64> {
    let mut series = Vec::with_capacity(n);
    let mut tail_count = 0usize;
    for _ in 0..n {
        let u: f64 = rng.gen();
        if u <= tail_probability || below.is_empty() {
            tail_count += 1;
        } else {
            series.push(below[rng.gen_range(0..below.len())]);
        }
    }
    // Parameters were validated before the trial loop, so the sampler
    // cannot fail here.
    let draws = model
        .variates(rng, SequenceLen::Bounded(tail_count), discrete)
        .expect("validated model");
    series.extend(draws);
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn power_law_sample(n: usize, alpha: f64, xmin: f64, seed: u64) -> Vec<f64> {
        TailDistribution::power_law(alpha, xmin)
            .unwrap()
            .variates(StdRng::seed_from_u64(seed), SequenceLen::Bounded(n), false)
            .unwrap()
            .collect()
    }

    fn quick_config(epsilon: f64) -> GofConfig {
        GofConfig {
            epsilon,
            seed: 99,
            min_tail_size: 10,
            discrete: false,
            parallel: true,
        }
    }

    #[test]
    fn test_empty_series() {
        let fit = FitResult {
            xmin: 1.0,
            alpha: 2.5,
            ks_statistic: 0.1,
        };
        assert!(matches!(
            goodness_of_fit(&[], &fit, &GofConfig::default()),
            Err(FitError::EmptySample)
        ));
    }

    #[test]
    fn test_invalid_epsilon() {
        let fit = FitResult {
            xmin: 1.0,
            alpha: 2.5,
            ks_statistic: 0.1,
        };
        let config = GofConfig {
            epsilon: 0.0,
            ..GofConfig::default()
        };
        assert!(matches!(
            goodness_of_fit(&[1.0, 2.0], &fit, &config),
            Err(FitError::InvalidEpsilon(_))
        ));
    }

    #[test]
    fn test_out_of_domain_fit_is_rejected() {
        let fit = FitResult {
            xmin: 1.0,
            alpha: 0.9,
            ks_statistic: 0.1,
        };
        assert!(matches!(
            goodness_of_fit(&[1.0, 2.0, 3.0], &fit, &GofConfig::default()),
            Err(FitError::Domain(_))
        ));
    }

    #[test]
    fn test_trial_count_follows_epsilon() {
        let samples = power_law_sample(200, 2.5, 1.0, 5);
        let fit = fit_power_law(
            &samples,
            &FitConfig {
                min_tail_size: 10,
                discrete: false,
            },
        )
        .unwrap();
        // epsilon = 0.5 plans ceil(0.25 / 0.25) + 1 = 2 trials.
        let result = goodness_of_fit(&samples, &fit, &quick_config(0.5)).unwrap();
        assert_eq!(result.trials_planned, 2);
        assert_eq!(
            result.trials_evaluated + result.trials_skipped,
            result.trials_planned
        );
        assert!((0.0..=1.0).contains(&result.p_value));
        assert!(result.complete);
    }

    #[test]
    fn test_parallel_and_serial_agree() {
        let samples = power_law_sample(300, 2.6, 2.0, 17);
        let fit = fit_power_law(
            &samples,
            &FitConfig {
                min_tail_size: 10,
                discrete: false,
            },
        )
        .unwrap();
        let parallel = goodness_of_fit(&samples, &fit, &quick_config(0.25)).unwrap();
        let serial = goodness_of_fit(
            &samples,
            &fit,
            &GofConfig {
                parallel: false,
                ..quick_config(0.25)
            },
        )
        .unwrap();
        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_same_seed_same_result() {
        let samples = power_law_sample(300, 2.6, 2.0, 23);
        let fit = fit_power_law(
            &samples,
            &FitConfig {
                min_tail_size: 10,
                discrete: false,
            },
        )
        .unwrap();
        let a = goodness_of_fit(&samples, &fit, &quick_config(0.2)).unwrap();
        let b = goodness_of_fit(&samples, &fit, &quick_config(0.2)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pre_cancelled_run_has_no_estimate() {
        let samples = power_law_sample(200, 2.5, 1.0, 5);
        let fit = fit_power_law(
            &samples,
            &FitConfig {
                min_tail_size: 10,
                discrete: false,
            },
        )
        .unwrap();
        let cancel = AtomicBool::new(true);
        assert!(matches!(
            goodness_of_fit_with_cancel(&samples, &fit, &quick_config(0.5), &cancel),
            Err(FitError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_synthetic_refits_too_small_are_skipped() {
        // min_tail_size larger than the series: every refit must fail, so
        // no trial is evaluable and the run reports it as an error rather
        // than a biased p-value.
        let samples = power_law_sample(30, 2.5, 1.0, 5);
        let fit = FitResult {
            xmin: 1.0,
            alpha: 2.5,
            ks_statistic: 0.05,
        };
        let config = GofConfig {
            min_tail_size: 100,
            ..quick_config(0.5)
        };
        assert!(matches!(
            goodness_of_fit(&samples, &fit, &config),
            Err(FitError::InsufficientData { .. })
        ));
    }
}
