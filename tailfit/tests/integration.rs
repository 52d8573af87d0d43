//! Integration tests for the tailfit pipeline.
//!
//! End-to-end behavior over seeded synthetic data: generation, frequency
//! summarization, model selection and the bootstrap goodness-of-fit. All
//! RNGs are seeded, so every assertion is deterministic.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tailfit::prelude::*;
use tailfit::{frequency_axes, least_squares};

fn power_law_sample(n: usize, alpha: f64, xmin: f64, discrete: bool, seed: u64) -> Vec<f64> {
    TailDistribution::power_law(alpha, xmin)
        .unwrap()
        .variates(StdRng::seed_from_u64(seed), SequenceLen::Bounded(n), discrete)
        .unwrap()
        .collect()
}

/// The selector recovers the generating exponent and a cutoff within one
/// order of magnitude of the true one.
#[test]
fn test_recovers_generating_parameters() {
    let samples = power_law_sample(5000, 2.6, 1.0, false, 42);
    let fit = fit_power_law(&samples, &FitConfig::default()).unwrap();

    assert!(
        (fit.alpha - 2.6).abs() < 0.15,
        "alpha = {} too far from 2.6",
        fit.alpha
    );
    assert!(fit.xmin >= 1.0 && fit.xmin < 10.0, "xmin = {}", fit.xmin);
    assert!((0.0..=1.0).contains(&fit.ks_statistic));
}

/// A true power-law sample fits tightly and is not spuriously rejected by
/// the bootstrap.
#[test]
fn test_true_power_law_is_not_rejected() {
    let samples = power_law_sample(1000, 2.6, 20.0, false, 2024);
    let fit = fit_power_law(&samples, &FitConfig::default()).unwrap();
    assert!(fit.ks_statistic < 0.1, "ks = {}", fit.ks_statistic);

    let config = GofConfig {
        epsilon: 0.05, // 101 trials
        seed: 7,
        ..GofConfig::default()
    };
    let gof = goodness_of_fit(&samples, &fit, &config).unwrap();

    assert_eq!(gof.trials_planned, 101);
    assert_eq!(gof.trials_skipped, 0);
    assert!(gof.complete);
    // The fitted model generated this data, so the observed KS score should
    // not dominate the synthetic ones.
    assert!(gof.p_value > 0.0, "p = {}", gof.p_value);
}

/// Consistency: the exponent estimate tightens as the sample grows.
#[test]
fn test_alpha_estimate_tightens_with_sample_size() {
    let small = power_law_sample(500, 2.6, 1.0, false, 11);
    let large = power_law_sample(5000, 2.6, 1.0, false, 11);

    let small_fit = fit_power_law(&small, &FitConfig::default()).unwrap();
    let large_fit = fit_power_law(&large, &FitConfig::default()).unwrap();

    assert!((small_fit.alpha - 2.6).abs() < 0.5, "small-sample alpha = {}", small_fit.alpha);
    assert!((large_fit.alpha - 2.6).abs() < 0.15, "large-sample alpha = {}", large_fit.alpha);
}

/// The discrete path (continuity-corrected MLE plus zeta-ratio CCDF)
/// recovers integer-valued power-law data.
#[test]
fn test_discrete_recovery() {
    let samples = power_law_sample(2000, 2.5, 4.0, true, 99);
    assert!(samples.iter().all(|x| x.fract() == 0.0));

    let config = FitConfig {
        discrete: true,
        ..FitConfig::default()
    };
    let fit = fit_power_law(&samples, &config).unwrap();

    assert!((fit.alpha - 2.5).abs() < 0.3, "alpha = {}", fit.alpha);
    assert!(fit.xmin >= 1.0 && fit.xmin <= 40.0, "xmin = {}", fit.xmin);
    assert!(fit.ks_statistic < 0.15, "ks = {}", fit.ks_statistic);
}

/// Same seed, same answer, end to end.
#[test]
fn test_full_pipeline_is_deterministic() {
    let samples = power_law_sample(300, 2.4, 1.0, false, 5);
    let fit_config = FitConfig {
        min_tail_size: 20,
        discrete: false,
    };
    let gof_config = GofConfig {
        epsilon: 0.25,
        seed: 31,
        min_tail_size: 20,
        ..GofConfig::default()
    };

    let first_fit = fit_power_law(&samples, &fit_config).unwrap();
    let second_fit = fit_power_law(&samples, &fit_config).unwrap();
    assert_eq!(first_fit, second_fit);

    let first_gof = goodness_of_fit(&samples, &first_fit, &gof_config).unwrap();
    let second_gof = goodness_of_fit(&samples, &second_fit, &gof_config).unwrap();
    assert_eq!(first_gof, second_gof);
}

/// Undersized input surfaces as a typed error, not a bad fit.
#[test]
fn test_small_sample_reports_insufficient_data() {
    let samples = power_law_sample(30, 2.6, 1.0, false, 3);
    let err = fit_power_law(&samples, &FitConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        tailfit::FitError::InsufficientData { got: 30, required: 50 }
    ));
}

/// Frequency points feed the plotting and regression collaborators: the
/// log-log ccdf of a power-law sample is roughly linear with negative slope.
#[test]
fn test_frequency_summary_feeds_diagnostics() {
    let samples = power_law_sample(2000, 3.0, 1.0, false, 13);
    let points = frequency_distribution(&samples, FrequencyMode::Ccdf);

    let total: u64 = frequency_distribution(&samples, FrequencyMode::Pdf)
        .iter()
        .map(|p| p.count)
        .sum();
    assert_eq!(total, 2000);

    let (x, y) = frequency_axes(&points);
    assert_eq!(x.len(), y.len());
    let log_x: Vec<f64> = x.iter().map(|v| v.ln()).collect();
    let log_y: Vec<f64> = y.iter().map(|v| v.ln()).collect();
    let line = least_squares(&log_x, &log_y).unwrap();
    assert!(
        line.slope < -0.8 && line.slope > -4.0,
        "log-log ccdf slope = {}",
        line.slope
    );
}
