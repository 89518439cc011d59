//! Rayleigh distribution with scale `sigma`.
//!
//! `sigma = 0` is accepted and treated as the point mass at zero.

use crate::special::erfcx;
use std::f64::consts::{FRAC_PI_2, SQRT_2};

/// Rayleigh MGF:
/// `M(t; σ) = 1 + σt·exp(σ²t²/2)·√(π/2)·(erf(σt/√2) + 1)`.
///
/// Evaluated through the scaled complementary error function as
/// `1 + σt·√(π/2)·erfcx(−σt/√2)` — the same quantity with the exponential
/// folded inside. For negative `σt` the unscaled form pairs a huge
/// `exp(σ²t²/2)` with a vanishing `erf(σt/√2) + 1` and loses everything to
/// cancellation (or collapses to exactly 1 once `erf` saturates at −1);
/// the scaled form stays strictly positive and tends to 0 as `t → −∞`.
///
/// Defined for all real `t`. Requires `σ >= 0`; `NaN` inputs or a negative
/// scale give `NaN`. `σ = 0` gives the point-mass MGF, identically 1.
///
/// # Examples
/// ```
/// use specfun::distributions::rayleigh;
/// assert_eq!(rayleigh::mgf(0.0, 2.0), 1.0);
/// assert!(rayleigh::mgf(-10.0, 1.0) > 0.0);
/// assert!(rayleigh::mgf(1.0, -1.0).is_nan());
/// ```
pub fn mgf(t: f64, sigma: f64) -> f64 {
    if t.is_nan() || sigma.is_nan() || sigma < 0.0 {
        return f64::NAN;
    }
    mgf_body(t, sigma)
}

fn mgf_body(t: f64, sigma: f64) -> f64 {
    let st = sigma * t;
    1.0 + st * FRAC_PI_2.sqrt() * erfcx(-st / SQRT_2)
}

/// Returns an MGF evaluator bound to `σ`.
pub fn mgf_factory(sigma: f64) -> impl Fn(f64) -> f64 {
    let invalid = sigma.is_nan() || sigma < 0.0;
    move |t| {
        if invalid || t.is_nan() {
            f64::NAN
        } else {
            mgf_body(t, sigma)
        }
    }
}

/// Rayleigh CDF: `F(x; σ) = 1 − exp(−x²/(2σ²))` for `x >= 0`.
///
/// # Examples
/// ```
/// use specfun::distributions::rayleigh;
/// let c = rayleigh::cdf(2.0, 2.0);
/// assert!((c - (1.0 - (-0.5_f64).exp())).abs() < 1e-15);
/// assert_eq!(rayleigh::cdf(-1.0, 2.0), 0.0);
/// ```
pub fn cdf(x: f64, sigma: f64) -> f64 {
    if x.is_nan() || sigma.is_nan() || sigma < 0.0 {
        return f64::NAN;
    }
    cdf_body(x, sigma)
}

fn cdf_body(x: f64, sigma: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    if sigma == 0.0 {
        // point mass at zero
        return 1.0;
    }
    let z = x / sigma;
    1.0 - (-z * z / 2.0).exp()
}

/// Returns a CDF evaluator bound to `σ`.
pub fn cdf_factory(sigma: f64) -> impl Fn(f64) -> f64 {
    let invalid = sigma.is_nan() || sigma < 0.0;
    move |x| {
        if invalid || x.is_nan() {
            f64::NAN
        } else {
            cdf_body(x, sigma)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
