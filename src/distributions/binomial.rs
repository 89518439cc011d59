//! Binomial distribution with `n` trials and success probability `p`.
//!
//! `n` is passed as an `f64` so that `NaN` and non-integer values flow
//! through the same error channel as every other parameter; it must hold a
//! nonnegative integer value.

use crate::special::regularized_incomplete_beta;

/// Binomial CDF: `F(x; n, p) = I_{1−p}(n − ⌊x⌋, ⌊x⌋ + 1)`.
///
/// The regularized incomplete beta identity sums the PMF without the
/// catastrophic cancellation of adding terms one by one. `x` may be any
/// real; the CDF is a step function, flat between integers.
///
/// Returns `NaN` if `n` is not a nonnegative finite integer, if `p` lies
/// outside `[0, 1]`, or for any `NaN` input.
///
/// # Examples
/// ```
/// use specfun::distributions::binomial;
/// assert!((binomial::cdf(1.0, 2.0, 0.5) - 0.75).abs() < 1e-14);
/// assert!(binomial::cdf(1.0, 2.5, 0.5).is_nan());
/// ```
pub fn cdf(x: f64, n: f64, p: f64) -> f64 {
    if x.is_nan() || n.is_nan() || p.is_nan() {
        return f64::NAN;
    }
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
        return f64::NAN;
    }
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    cdf_body(x, n, p)
}

fn cdf_body(x: f64, n: f64, p: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    if x >= n {
        return 1.0;
    }
    if p == 0.0 {
        // all mass at 0, and x >= 0 here
        return 1.0;
    }
    if p == 1.0 {
        // all mass at n, and x < n here
        return 0.0;
    }
    let k = x.floor();
    regularized_incomplete_beta(1.0 - p, n - k, k + 1.0)
}

/// Returns a CDF evaluator bound to `(n, p)`.
pub fn cdf_factory(n: f64, p: f64) -> impl Fn(f64) -> f64 {
    let invalid = n.is_nan()
        || p.is_nan()
        || !n.is_finite()
        || n < 0.0
        || n.fract() != 0.0
        || !(0.0..=1.0).contains(&p);
    move |x| {
        if invalid || x.is_nan() {
            f64::NAN
        } else {
            cdf_body(x, n, p)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn cdf_in_01(x in -5.0_f64..40.0, n in 0_u32..30, p in 0.0_f64..1.0) {
            let c = cdf(x, f64::from(n), p);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        #[test]
        fn cdf_monotonic(k1 in 0_u32..20, k2 in 0_u32..20, p in 0.01_f64..0.99) {
            let n = 20.0;
            let (lo, hi) = if k1 <= k2 { (k1, k2) } else { (k2, k1) };
            let c_lo = cdf(f64::from(lo), n, p);
            let c_hi = cdf(f64::from(hi), n, p);
            prop_assert!(c_lo <= c_hi + 1e-12);
        }

        #[test]
        fn factory_equals_direct(x in -2.0_f64..25.0, n in 0_u32..20, p in 0.0_f64..1.0) {
            let f = cdf_factory(f64::from(n), p);
            prop_assert_eq!(f(x), cdf(x, f64::from(n), p));
        }
    }
}
