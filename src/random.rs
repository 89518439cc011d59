//! Seeded random number generation and inverse-transform sampling for the
//! distributions in [`crate::distributions`].
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;
use std::f64::consts::PI;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use specfun::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Draws one Cauchy variate with location `x0` and scale `gamma`.
///
/// Inverse-transform: `x0 + γ·tan(π·(u − ½))` with `u` uniform on `[0, 1)`.
/// Invalid parameters (`NaN`, `γ <= 0`) give `NaN`.
///
/// # Examples
/// ```
/// use specfun::random::{create_rng, sample_cauchy};
/// let mut rng = create_rng(7);
/// let x = sample_cauchy(&mut rng, 0.0, 1.0);
/// assert!(x.is_finite());
/// ```
pub fn sample_cauchy<R: Rng>(rng: &mut R, x0: f64, gamma: f64) -> f64 {
    if x0.is_nan() || gamma.is_nan() || gamma <= 0.0 {
        return f64::NAN;
    }
    let u: f64 = rng.random();
    x0 + gamma * (PI * (u - 0.5)).tan()
}

/// Draws one Rayleigh variate with scale `sigma`.
///
/// Inverse-transform: `σ·√(−2·ln(1 − u))`. Requires `σ >= 0`.
pub fn sample_rayleigh<R: Rng>(rng: &mut R, sigma: f64) -> f64 {
    if sigma.is_nan() || sigma < 0.0 {
        return f64::NAN;
    }
    let u: f64 = rng.random();
    sigma * (-2.0 * (1.0 - u).ln()).sqrt()
}

/// Draws one Gumbel variate with location `mu` and scale `beta`.
///
/// Inverse-transform: `μ − β·ln(−ln(u))`. Requires `β > 0`.
pub fn sample_gumbel<R: Rng>(rng: &mut R, mu: f64, beta: f64) -> f64 {
    if mu.is_nan() || beta.is_nan() || beta <= 0.0 {
        return f64::NAN;
    }
    // u = 0 would take ln(0); nudge to the smallest positive draw instead
    let u: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE);
    mu - beta * (-u.ln()).ln()
}

/// Draws one triangular variate on `[a, b]` with mode `c`.
///
/// Inverse-transform through the piecewise-quadratic CDF: the two branches
/// invert to square roots, split at `F(c) = (c − a)/(b − a)`.
/// Requires `a <= c <= b`.
///
/// # Examples
/// ```
/// use specfun::random::{create_rng, sample_triangular};
/// let mut rng = create_rng(42);
/// let x = sample_triangular(&mut rng, 0.0, 2.0, 1.0);
/// assert!((0.0..=2.0).contains(&x));
/// ```
pub fn sample_triangular<R: Rng>(rng: &mut R, a: f64, b: f64, c: f64) -> f64 {
    if a.is_nan() || b.is_nan() || c.is_nan() || !(a <= c && c <= b) {
        return f64::NAN;
    }
    if a == b {
        return a;
    }
    let u: f64 = rng.random();
    let fc = (c - a) / (b - a);
    if u < fc {
        a + ((b - a) * (c - a) * u).sqrt()
    } else {
        b - ((b - a) * (b - c) * (1.0 - u)).sqrt()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::{cauchy, gumbel, rayleigh, triangular};

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<f64> = (0..10).map(|_| rng1.random()).collect();
        let vals2: Vec<f64> = (0..10).map(|_| rng2.random()).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_samplers_deterministic() {
        let mut rng1 = create_rng(7);
        let mut rng2 = create_rng(7);
        assert_eq!(
            sample_cauchy(&mut rng1, 0.0, 1.0),
            sample_cauchy(&mut rng2, 0.0, 1.0)
        );
        assert_eq!(
            sample_triangular(&mut rng1, 0.0, 2.0, 1.0),
            sample_triangular(&mut rng2, 0.0, 2.0, 1.0)
        );
    }

    #[test]
    fn test_sample_rayleigh_support() {
        let mut rng = create_rng(1);
        for _ in 0..1000 {
            let x = sample_rayleigh(&mut rng, 2.0);
            assert!(x >= 0.0 && x.is_finite());
        }
    }

    #[test]
    fn test_sample_triangular_support() {
        let mut rng = create_rng(2);
        for _ in 0..1000 {
            let x = sample_triangular(&mut rng, -1.0, 3.0, 0.5);
            assert!((-1.0..=3.0).contains(&x));
        }
    }

    #[test]
    fn test_sample_triangular_point_mass() {
        let mut rng = create_rng(3);
        for _ in 0..10 {
            assert_eq!(sample_triangular(&mut rng, 2.0, 2.0, 2.0), 2.0);
        }
    }

    #[test]
    fn test_sample_invalid_params() {
        let mut rng = create_rng(4);
        assert!(sample_cauchy(&mut rng, 0.0, -1.0).is_nan());
        assert!(sample_rayleigh(&mut rng, -0.5).is_nan());
        assert!(sample_gumbel(&mut rng, 0.0, 0.0).is_nan());
        assert!(sample_triangular(&mut rng, 1.0, 0.0, 0.5).is_nan());
        assert!(sample_cauchy(&mut rng, f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_empirical_cdf_matches_rayleigh() {
        // Fraction of draws below the true median should be near 1/2.
        let mut rng = create_rng(42);
        let sigma = 1.5;
        let median = sigma * (2.0 * 2.0_f64.ln()).sqrt();
        let n = 20_000;
        let below = (0..n)
            .filter(|_| sample_rayleigh(&mut rng, sigma) < median)
            .count();
        let frac = below as f64 / n as f64;
        assert!((frac - 0.5).abs() < 0.02, "frac = {frac}");
        assert!((rayleigh::cdf(median, sigma) - 0.5).abs() < 1e-14);
    }

    #[test]
    fn test_empirical_cdf_matches_cauchy() {
        let mut rng = create_rng(42);
        let f = cauchy::cdf_factory(3.0, 0.5);
        let n = 20_000;
        // Quartiles sit at x0 ± γ.
        let below = (0..n)
            .filter(|_| sample_cauchy(&mut rng, 3.0, 0.5) < 3.5)
            .count();
        let frac = below as f64 / n as f64;
        assert!((frac - 0.75).abs() < 0.02, "frac = {frac}");
        assert!((f(3.5) - 0.75).abs() < 1e-14);
    }

    #[test]
    fn test_empirical_cdf_matches_gumbel() {
        let mut rng = create_rng(42);
        let n = 20_000;
        // F(μ) = e^{−1}
        let below = (0..n)
            .filter(|_| sample_gumbel(&mut rng, 2.0, 0.7) < 2.0)
            .count();
        let frac = below as f64 / n as f64;
        let expected = (-1.0_f64).exp();
        assert!((frac - expected).abs() < 0.02, "frac = {frac}");
        assert!((gumbel::cdf(2.0, 2.0, 0.7) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_empirical_cdf_matches_triangular() {
        let mut rng = create_rng(42);
        let n = 20_000;
        let below = (0..n)
            .filter(|_| sample_triangular(&mut rng, 0.0, 2.0, 1.0) < 0.5)
            .count();
        let frac = below as f64 / n as f64;
        assert!(
            (frac - triangular::cdf(0.5, 0.0, 2.0, 1.0)).abs() < 0.02,
            "frac = {frac}"
        );
    }
}
