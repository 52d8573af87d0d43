//! Parametric Tail Distributions
//!
//! Closed-form inverse-CDF mappings for the exponential,
//! stretched-exponential and power-law families, and a lazy `Variates`
//! iterator that applies them pointwise to a `UniformSequence`.
//!
//! The mapping functions take every parameter explicitly so each one is
//! independently testable; no state is captured.

use crate::sequence::{SequenceLen, UniformSequence};
use crate::{CONTINUITY_CORRECTION, DomainError};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inverse CDF of the shifted exponential: `x = xmin - ln(1 - u) / lambda`.
pub fn exponential_quantile(u: f64, lambda: f64, xmin: f64) -> f64 {
    xmin - (1.0 - u).ln() / lambda
}

/// Inverse CDF of the stretched exponential:
/// `x = (xmin^beta - ln(1 - u) / lambda)^(1 / beta)`.
pub fn stretched_exponential_quantile(u: f64, lambda: f64, beta: f64, xmin: f64) -> f64 {
    (xmin.powf(beta) - (1.0 - u).ln() / lambda).powf(1.0 / beta)
}

/// Inverse CDF of the power law: `x = xmin * (1 - u)^(-1 / (alpha - 1))`.
pub fn power_law_quantile(u: f64, alpha: f64, xmin: f64) -> f64 {
    xmin * (1.0 - u).powf(-1.0 / (alpha - 1.0))
}

/// A heavy-tailed distribution family with validated parameters.
///
/// Values can only be built through the validating constructors, so a
/// `TailDistribution` in hand always satisfies Lambda > 0, Beta > 0,
/// xmin > 0 and Alpha > 1. Discreteness is not part of the value; it is a
/// flag supplied when sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TailDistribution {
    /// Exponential decay above the cutoff.
    Exponential {
        /// Rate parameter.
        lambda: f64,
        /// Lower cutoff.
        xmin: f64,
    },
    /// Stretched-exponential (Weibull-like) decay above the cutoff.
    StretchedExponential {
        /// Rate parameter.
        lambda: f64,
        /// Stretching exponent.
        beta: f64,
        /// Lower cutoff.
        xmin: f64,
    },
    /// Polynomial tail decay with exponent alpha above the cutoff.
    PowerLaw {
        /// Scaling exponent.
        alpha: f64,
        /// Lower cutoff.
        xmin: f64,
    },
}

fn check_positive(value: f64, err: fn(f64) -> DomainError) -> Result<f64, DomainError> {
    // NaN fails the comparison and is rejected too.
    if value > 0.0 { Ok(value) } else { Err(err(value)) }
}

impl TailDistribution {
    /// Exponential distribution with rate `lambda` above `xmin`.
    pub fn exponential(lambda: f64, xmin: f64) -> Result<Self, DomainError> {
        Ok(Self::Exponential {
            lambda: check_positive(lambda, DomainError::NonPositiveLambda)?,
            xmin: check_positive(xmin, DomainError::NonPositiveXmin)?,
        })
    }

    /// Stretched-exponential distribution with rate `lambda` and stretching
    /// exponent `beta` above `xmin`.
    pub fn stretched_exponential(lambda: f64, beta: f64, xmin: f64) -> Result<Self, DomainError> {
        Ok(Self::StretchedExponential {
            lambda: check_positive(lambda, DomainError::NonPositiveLambda)?,
            beta: check_positive(beta, DomainError::NonPositiveBeta)?,
            xmin: check_positive(xmin, DomainError::NonPositiveXmin)?,
        })
    }

    /// Power law with scaling exponent `alpha` above `xmin`.
    pub fn power_law(alpha: f64, xmin: f64) -> Result<Self, DomainError> {
        if !(alpha > 1.0) {
            return Err(DomainError::AlphaNotAboveOne(alpha));
        }
        Ok(Self::PowerLaw {
            alpha,
            xmin: check_positive(xmin, DomainError::NonPositiveXmin)?,
        })
    }

    /// The lower cutoff of this distribution.
    pub fn xmin(&self) -> f64 {
        match *self {
            Self::Exponential { xmin, .. }
            | Self::StretchedExponential { xmin, .. }
            | Self::PowerLaw { xmin, .. } => xmin,
        }
    }

    /// Evaluates the inverse CDF at `u` in [0, 1).
    pub fn quantile(&self, u: f64) -> f64 {
        match *self {
            Self::Exponential { lambda, xmin } => exponential_quantile(u, lambda, xmin),
            Self::StretchedExponential { lambda, beta, xmin } => {
                stretched_exponential_quantile(u, lambda, beta, xmin)
            }
            Self::PowerLaw { alpha, xmin } => power_law_quantile(u, alpha, xmin),
        }
    }

    fn with_xmin(self, xmin: f64) -> Self {
        match self {
            Self::Exponential { lambda, .. } => Self::Exponential { lambda, xmin },
            Self::StretchedExponential { lambda, beta, .. } => {
                Self::StretchedExponential { lambda, beta, xmin }
            }
            Self::PowerLaw { alpha, .. } => Self::PowerLaw { alpha, xmin },
        }
    }

    /// Lazily maps uniform draws from `rng` through this distribution's
    /// inverse CDF.
    ///
    /// When `discrete` is set, the cutoff is shifted down by
    /// [`CONTINUITY_CORRECTION`] before mapping and every variate is rounded
    /// to the nearest integer. The shifted cutoff must stay positive.
    pub fn variates<R: Rng>(
        &self,
        rng: R,
        len: SequenceLen,
        discrete: bool,
    ) -> Result<Variates<R>, DomainError> {
        let mapped = if discrete {
            let shifted = self.xmin() - CONTINUITY_CORRECTION;
            if !(shifted > 0.0) {
                return Err(DomainError::DegenerateDiscreteSupport(shifted));
            }
            self.with_xmin(shifted)
        } else {
            *self
        };
        Ok(Variates {
            uniforms: UniformSequence::new(rng, len),
            distribution: mapped,
            discrete,
        })
    }
}

/// Lazy sequence of variates drawn from a [`TailDistribution`].
///
/// Finiteness matches the underlying uniform sequence. The discrete shift,
/// if any, is already folded into `distribution`.
#[derive(Debug)]
pub struct Variates<R: Rng> {
    uniforms: UniformSequence<R>,
    distribution: TailDistribution,
    discrete: bool,
}

impl<R: Rng> Iterator for Variates<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let u = self.uniforms.next()?;
        let x = self.distribution.quantile(u);
        Some(if self.discrete { x.round() } else { x })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.uniforms.size_hint()
    }
}
