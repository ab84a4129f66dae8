//! Rational polynomial evaluation shared by every thermocouple type.
//!
//! Both shapes evaluate `offset + Δ·P(Δ) / (1 + Δ·Q(Δ))` with Δ taken about the
//! fit's centre. The fitted denominators do not vanish inside the calibrated
//! domain, so neither function has an error path.

use crate::core::{CoefficientSet, ColdJunctionCoefficients};

/// Evaluates `c[0] + x·(c[1] + x·(c[2] + ...))`.
#[inline]
fn horner(x: f64, coefficients: &[f64]) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |accumulator, coefficient| coefficient + x * accumulator)
}

#[inline]
fn rational(delta: f64, numerator: &[f64], denominator: &[f64]) -> f64 {
    (delta * horner(delta, numerator)) / (1.0 + delta * horner(delta, denominator))
}

/// Quartic over quadratic about `T0`, yielding millivolts.
#[inline]
pub fn cold_junction(celsius: f64, set: &ColdJunctionCoefficients) -> f64 {
    let delta = celsius - set.t0;
    set.v0 + rational(delta, &set.p, &set.q)
}

/// Quartic over cubic about `V0`, yielding degrees Celsius.
#[inline]
pub fn inverse(millivolts: f64, set: &CoefficientSet) -> f64 {
    let delta = millivolts - set.v0;
    set.t0 + rational(delta, &set.p, &set.q)
}
