//! Uniform Draw Sequences
//!
//! A lazy stream of independent uniform [0, 1) values backed by an explicit
//! RNG handle. Nothing is buffered; an unbounded sequence can be consumed
//! incrementally forever.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length policy for a generated sequence.
///
/// Replaces the negative-length sentinel some generator APIs use for
/// "infinite" with an explicit tagged variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequenceLen {
    /// Produce exactly this many values, then stop.
    Bounded(usize),
    /// Produce values until the consumer stops pulling.
    Unbounded,
}

/// Lazy sequence of independent uniform [0, 1) draws.
///
/// Restartable only by constructing a new sequence with a fresh RNG; there
/// is no rewind. The only side effect of iteration is RNG state advancement.
#[derive(Debug)]
pub struct UniformSequence<R: Rng> {
    rng: R,
    remaining: SequenceLen,
}

impl<R: Rng> UniformSequence<R> {
    /// Creates a sequence drawing from `rng` under the given length policy.
    pub fn new(rng: R, len: SequenceLen) -> Self {
        Self {
            rng,
            remaining: len,
        }
    }
}

impl<R: Rng> Iterator for UniformSequence<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match self.remaining {
            SequenceLen::Bounded(0) => None,
            SequenceLen::Bounded(n) => {
                self.remaining = SequenceLen::Bounded(n - 1);
                Some(self.rng.gen::<f64>())
            }
            SequenceLen::Unbounded => Some(self.rng.gen::<f64>()),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            SequenceLen::Bounded(n) => (n, Some(n)),
            SequenceLen::Unbounded => (usize::MAX, None),
        }
    }
}
