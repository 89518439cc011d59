//! Cauchy (Lorentz) distribution.
//!
//! Parameterized by location `x0` and scale `gamma > 0`. The Cauchy
//! distribution has no mean or variance; its CDF and quantile are exact
//! closed forms in `atan`/`tan`.

use std::f64::consts::{FRAC_1_PI, PI};

/// Cauchy CDF: `F(x; x0, γ) = (1/π)·atan2(x − x0, γ) + ½`.
///
/// Using `atan2` handles the infinite-argument cases exactly:
/// `F(+∞) = 1`, `F(−∞) = 0`, and `F(x0) = ½` with no rounding.
///
/// Returns `NaN` for any `NaN` input or `γ <= 0`.
///
/// # Examples
/// ```
/// use specfun::distributions::cauchy;
/// assert_eq!(cauchy::cdf(10.0, 10.0, 2.0), 0.5);
/// assert!((cauchy::cdf(12.0, 10.0, 2.0) - 0.75).abs() < 1e-15);
/// assert_eq!(cauchy::cdf(f64::INFINITY, 0.0, 1.0), 1.0);
/// assert!(cauchy::cdf(1.0, 0.0, -1.0).is_nan());
/// ```
pub fn cdf(x: f64, x0: f64, gamma: f64) -> f64 {
    if x.is_nan() || x0.is_nan() || gamma.is_nan() || gamma <= 0.0 {
        return f64::NAN;
    }
    FRAC_1_PI * (x - x0).atan2(gamma) + 0.5
}

/// Returns a CDF evaluator bound to `(x0, γ)`.
///
/// Parameter validation happens here, once; invalid parameters produce a
/// closure that returns `NaN` for every input, including `±∞`.
///
/// # Examples
/// ```
/// use specfun::distributions::cauchy;
/// let cdf = cauchy::cdf_factory(10.0, 2.0);
/// assert_eq!(cdf(10.0), 0.5);
/// assert!((cdf(12.0) - 0.75).abs() < 1e-15);
/// let bad = cauchy::cdf_factory(10.0, 0.0);
/// assert!(bad(f64::INFINITY).is_nan());
/// ```
pub fn cdf_factory(x0: f64, gamma: f64) -> impl Fn(f64) -> f64 {
    let invalid = x0.is_nan() || gamma.is_nan() || gamma <= 0.0;
    move |x| {
        if invalid || x.is_nan() {
            f64::NAN
        } else {
            FRAC_1_PI * (x - x0).atan2(gamma) + 0.5
        }
    }
}

/// Cauchy PDF: `f(x; x0, γ) = 1 / (πγ·(1 + ((x − x0)/γ)²))`.
///
/// # Examples
/// ```
/// use specfun::distributions::cauchy;
/// // Peak height is 1/(πγ).
/// let peak = cauchy::pdf(0.0, 0.0, 1.0);
/// assert!((peak - std::f64::consts::FRAC_1_PI).abs() < 1e-15);
/// ```
pub fn pdf(x: f64, x0: f64, gamma: f64) -> f64 {
    if x.is_nan() || x0.is_nan() || gamma.is_nan() || gamma <= 0.0 {
        return f64::NAN;
    }
    let z = (x - x0) / gamma;
    FRAC_1_PI / (gamma * (1.0 + z * z))
}

/// Returns a PDF evaluator bound to `(x0, γ)`.
pub fn pdf_factory(x0: f64, gamma: f64) -> impl Fn(f64) -> f64 {
    let invalid = x0.is_nan() || gamma.is_nan() || gamma <= 0.0;
    let inv_pg = FRAC_1_PI / gamma;
    let inv_g = 1.0 / gamma;
    move |x| {
        if invalid || x.is_nan() {
            f64::NAN
        } else {
            let z = (x - x0) * inv_g;
            inv_pg / (1.0 + z * z)
        }
    }
}

/// Cauchy quantile (inverse CDF): `Q(p; x0, γ) = x0 + γ·tan(π·(p − ½))`.
///
/// The endpoints map to `∓∞`; `p` outside `[0, 1]` gives `NaN`. In the far
/// tails the tangent is replaced by its asymptote `±1/(π·min(p, 1−p))` to
/// avoid the cancellation in `π·(p − ½)`.
///
/// # Examples
/// ```
/// use specfun::distributions::cauchy;
/// assert_eq!(cauchy::quantile(0.5, 3.0, 2.0), 3.0);
/// assert_eq!(cauchy::quantile(0.0, 3.0, 2.0), f64::NEG_INFINITY);
/// assert_eq!(cauchy::quantile(1.0, 3.0, 2.0), f64::INFINITY);
/// assert!(cauchy::quantile(1.5, 3.0, 2.0).is_nan());
/// ```
pub fn quantile(p: f64, x0: f64, gamma: f64) -> f64 {
    if p.is_nan() || x0.is_nan() || gamma.is_nan() || gamma <= 0.0 {
        return f64::NAN;
    }
    quantile_body(p, x0, gamma)
}

fn quantile_body(p: f64, x0: f64, gamma: f64) -> f64 {
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.5 {
        return x0;
    }
    let t = p.min(1.0 - p);
    if t <= 1e-8 {
        // tan(π(p−½)) = −cot(πp) ≈ ∓1/(πt) in the tails
        let s = if p < 0.5 { -1.0 } else { 1.0 };
        return x0 + gamma * s / (PI * t);
    }
    let angle = p.mul_add(PI, -0.5 * PI);
    x0 + gamma * angle.tan()
}

/// Returns a quantile evaluator bound to `(x0, γ)`.
pub fn quantile_factory(x0: f64, gamma: f64) -> impl Fn(f64) -> f64 {
    let invalid = x0.is_nan() || gamma.is_nan() || gamma <= 0.0;
    move |p| {
        if invalid || p.is_nan() {
            f64::NAN
        } else {
            quantile_body(p, x0, gamma)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_median_exact() {
        assert_eq!(cdf(10.0, 10.0, 2.0), 0.5);
        assert_eq!(cdf(-3.5, -3.5, 0.25), 0.5);
    }

    #[test]
    fn test_cdf_infinities() {
        assert_eq!(cdf(f64::INFINITY, 10.0, 2.0), 1.0);
        assert_eq!(cdf(f64::NEG_INFINITY, 10.0, 2.0), 0.0);
    }

    #[test]
    fn test_cdf_known_values() {
        // F(x0 + γ) = 3/4, F(x0 − γ) = 1/4
        assert!((cdf(12.0, 10.0, 2.0) - 0.75).abs() < 1e-15);
        assert!((cdf(8.0, 10.0, 2.0) - 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_cdf_invalid() {
        assert!(cdf(1.0, 0.0, 0.0).is_nan());
        assert!(cdf(1.0, 0.0, -1.0).is_nan());
        assert!(cdf(f64::NAN, 0.0, 1.0).is_nan());
        assert!(cdf(1.0, f64::NAN, 1.0).is_nan());
        assert!(cdf(1.0, 0.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_cdf_factory_scenario() {
        let cdf = cdf_factory(10.0, 2.0);
        assert_eq!(cdf(10.0), 0.5);
        assert!((cdf(12.0) - 0.75).abs() < 1e-15);
        assert_eq!(cdf(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_cdf_factory_invalid_constant_nan() {
        for factory in [cdf_factory(10.0, 0.0), cdf_factory(10.0, -1.0), cdf_factory(f64::NAN, 2.0)] {
            assert!(factory(0.0).is_nan());
            assert!(factory(f64::INFINITY).is_nan());
            assert!(factory(f64::NEG_INFINITY).is_nan());
        }
    }

    #[test]
    fn test_pdf_peak_and_symmetry() {
        let f = pdf_factory(5.0, 2.0);
        assert!((f(5.0) - FRAC_1_PI / 2.0).abs() < 1e-15);
        assert!((f(3.0) - f(7.0)).abs() < 1e-15);
        assert_eq!(f(5.0), pdf(5.0, 5.0, 2.0));
    }

    #[test]
    fn test_quantile_roundtrip() {
        for &p in &[0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99] {
            let x = quantile(p, 10.0, 2.0);
            let p_back = cdf(x, 10.0, 2.0);
            assert!((p_back - p).abs() < 1e-12, "p={p}, x={x}, p_back={p_back}");
        }
    }

    #[test]
    fn test_quantile_tails() {
        // Deep-tail asymptote keeps the quantile finite and huge.
        let q = quantile(1e-12, 0.0, 1.0);
        assert!(q < -1e10 && q.is_finite(), "q = {q}");
        let q = quantile(1.0 - 1e-12, 0.0, 1.0);
        assert!(q > 1e10 && q.is_finite(), "q = {q}");
    }

    #[test]
    fn test_quantile_factory_matches_direct() {
        let q = quantile_factory(10.0, 2.0);
        for &p in &[0.0, 0.01, 0.25, 0.5, 0.99, 1.0] {
            assert_eq!(q(p), quantile(p, 10.0, 2.0));
        }
        assert!(q(f64::NAN).is_nan());
        let bad = quantile_factory(10.0, -1.0);
        assert!(bad(0.5).is_nan());
    }

    #[test]
    fn test_quantile_invalid() {
        assert!(quantile(-0.1, 0.0, 1.0).is_nan());
        assert!(quantile(1.1, 0.0, 1.0).is_nan());
        assert!(quantile(f64::NAN, 0.0, 1.0).is_nan());
        assert!(quantile(0.5, 0.0, 0.0).is_nan());
    }
}
