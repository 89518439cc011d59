//! Chi-squared distribution with `k` degrees of freedom.
//!
//! A gamma distribution with shape `k/2` and rate `1/2`; the CDF goes
//! straight through the regularized lower incomplete gamma function.

use crate::incgamma::regularized_lower_gamma;

/// Chi-squared CDF: `F(x; k) = P(k/2, x/2)`.
///
/// Requires `k > 0` (not necessarily an integer). Negative `x` gives 0;
/// `NaN` inputs or invalid `k` give `NaN`.
///
/// # Examples
/// ```
/// use specfun::distributions::chi_squared;
/// // k = 2 is the exponential with rate 1/2.
/// let c = chi_squared::cdf(2.0, 2.0);
/// assert!((c - (1.0 - (-1.0_f64).exp())).abs() < 1e-14);
/// ```
pub fn cdf(x: f64, k: f64) -> f64 {
    if x.is_nan() || k.is_nan() || k <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    regularized_lower_gamma(k / 2.0, x / 2.0)
}

/// Returns a CDF evaluator bound to `k`.
pub fn cdf_factory(k: f64) -> impl Fn(f64) -> f64 {
    let invalid = k.is_nan() || k <= 0.0;
    let half_k = k / 2.0;
    move |x| {
        if invalid || x.is_nan() {
            f64::NAN
        } else if x <= 0.0 {
            0.0
        } else {
            regularized_lower_gamma(half_k, x / 2.0)
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
        fn cdf_in_01(x in 0.0_f64..200.0, k in 0.1_f64..50.0) {
            let c = cdf(x, k);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        #[test]
        fn cdf_monotonic(x1 in 0.0_f64..100.0, x2 in 0.0_f64..100.0, k in 0.5_f64..30.0) {
            let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
            prop_assert!(cdf(lo, k) <= cdf(hi, k) + 1e-13);
        }
    }
}
