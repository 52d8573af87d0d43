//! Hurwitz Zeta
//!
//! The discrete power-law CCDF is a ratio of Hurwitz zeta values, so the
//! selector needs zeta(s, a) for s > 1, a > 0. Computed by direct summation
//! of the leading terms plus an Euler-Maclaurin tail correction.

/// Hurwitz zeta `zeta(s, a) = sum_{k>=0} (a + k)^(-s)` for s > 1, a > 0.
///
/// Direct summation until the argument reaches the tail threshold, then the
/// Euler-Maclaurin expansion with four Bernoulli correction terms. Absolute
/// error is below 1e-12 across the exponent range the selector produces.
///
/// Returns NaN outside the domain (s <= 1 or a <= 0).
pub fn hurwitz_zeta(s: f64, a: f64) -> f64 {
    if !(s > 1.0) || !(a > 0.0) {
        return f64::NAN;
    }

    // Summing the series head keeps the tail start large enough for the
    // asymptotic expansion to converge fast.
    const TAIL_START: f64 = 18.0;

    let mut sum = 0.0;
    let mut term = a;
    while term < TAIL_START {
        sum += term.powf(-s);
        term += 1.0;
    }
    let b = term;

    // Euler-Maclaurin tail: integral + boundary + Bernoulli corrections.
    // Coefficients are B_2j / (2j)! for j = 1..4.
    const COEFFS: [f64; 4] = [1.0 / 12.0, -1.0 / 720.0, 1.0 / 30_240.0, -1.0 / 1_209_600.0];

    let mut tail = b.powf(1.0 - s) / (s - 1.0) + 0.5 * b.powf(-s);
    let inv_b2 = 1.0 / (b * b);
    let mut rising = s; // s (s+1) ... (s + 2j - 2)
    let mut power = b.powf(-s - 1.0); // b^(-s - 2j + 1)
    for (j, &c) in COEFFS.iter().enumerate() {
        tail += c * rising * power;
        let next = (2 * j + 1) as f64;
        rising *= (s + next) * (s + next + 1.0);
        power *= inv_b2;
    }

    sum + tail
}
