//! Empirical Frequency Summarization
//!
//! Collapses a finite sample into (value, count) points in pdf, cdf or ccdf
//! form. One O(n log n) sort of an internal copy plus a single linear scan;
//! grouping relies on sortedness, not hashing, so the output is ascending in
//! value by construction and covers every distinct value exactly once.

use serde::{Deserialize, Serialize};

/// Which counting mode a frequency summary uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrequencyMode {
    /// Raw multiplicity of each distinct value.
    #[default]
    Pdf,
    /// Cumulative count of samples less than or equal to the value.
    Cdf,
    /// Complementary cumulative count of samples greater than or equal to
    /// the value.
    Ccdf,
}

/// A distinct sample value and its count under the chosen mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyPoint {
    /// The distinct value.
    pub value: f64,
    /// Multiplicity (pdf) or cumulative rank (cdf/ccdf).
    pub count: u64,
}

/// Summarizes `samples` into ascending frequency points.
///
/// The input is not mutated. Returns an empty vector for an empty sample.
pub fn frequency_distribution(samples: &[f64], mode: FrequencyMode) -> Vec<FrequencyPoint> {
    if samples.is_empty() {
        return Vec::new();
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut points = Vec::new();
    match mode {
        FrequencyMode::Pdf | FrequencyMode::Cdf => {
            let mut current = sorted[0];
            let mut count: u64 = 0;
            for &x in &sorted {
                if x > current {
                    points.push(FrequencyPoint {
                        value: current,
                        count,
                    });
                    current = x;
                    if mode == FrequencyMode::Pdf {
                        count = 0;
                    }
                }
                count += 1;
            }
            points.push(FrequencyPoint {
                value: current,
                count,
            });
        }
        FrequencyMode::Ccdf => {
            // Running total of samples >= current, decremented as each
            // distinct value's multiplicity is consumed.
            let mut current = sorted[0];
            let mut remaining = sorted.len() as u64;
            let mut consumed: u64 = 0;
            for &x in &sorted {
                if x > current {
                    points.push(FrequencyPoint {
                        value: current,
                        count: remaining,
                    });
                    remaining -= consumed;
                    current = x;
                    consumed = 0;
                }
                consumed += 1;
            }
            points.push(FrequencyPoint {
                value: current,
                count: remaining,
            });
        }
    }
    points
}

/// Splits frequency points into the equal-length (x, y) sequences the
/// plotting and regression collaborators consume.
pub fn frequency_axes(points: &[FrequencyPoint]) -> (Vec<f64>, Vec<f64>) {
    let x = points.iter().map(|p| p.value).collect();
    let y = points.iter().map(|p| p.count as f64).collect();
    (x, y)
}
