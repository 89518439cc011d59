//! Special mathematical functions.
//!
//! High-accuracy transcendental primitives used by the distribution
//! evaluators: the error function pair, log-gamma, and the regularized
//! incomplete beta function.
//!
//! All functions return `NaN` for `NaN` or out-of-domain inputs rather than
//! panicking or returning an error type.

/// 2/√π ≈ 1.1283791670955126
const FRAC_2_SQRT_PI: f64 = 1.1283791670955125738961589031215451716768;

/// 1/√π ≈ 0.5641895835477563
const FRAC_1_SQRT_PI: f64 = 0.5641895835477562869480794515607725858441;

/// Error function erf(x) = (2/√π) ∫₀ˣ exp(−t²) dt.
///
/// # Algorithm
/// Maclaurin series for `|x| < 3`, Laplace continued fraction for the
/// complementary tail at larger `|x|`. Both converge unconditionally in
/// their range.
///
/// # Accuracy
/// Relative error ~1e-15 (full `f64` precision up to mild series
/// cancellation near the branch point).
///
/// # Examples
/// ```
/// use specfun::special::erf;
/// assert_eq!(erf(0.0), 0.0);
/// assert!((erf(1.0) - 0.8427007929497149).abs() < 1e-14);
/// assert!((erf(1.5) + erf(-1.5)).abs() < 1e-15);
/// ```
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let a = x.abs();

    if a < 3.0 {
        sign * FRAC_2_SQRT_PI * erf_series(a)
    } else if a < 6.0 {
        sign * (1.0 - erfc_cf(a))
    } else {
        // erfc(6) < 3e-17: indistinguishable from ±1 in f64.
        sign
    }
}

/// Complementary error function erfc(x) = 1 − erf(x).
///
/// Evaluated directly via the Laplace continued fraction for `x >= 3`, so
/// the tiny tail retains full relative accuracy instead of cancelling
/// against 1.
///
/// # Examples
/// ```
/// use specfun::special::erfc;
/// assert_eq!(erfc(0.0), 1.0);
/// assert!((erfc(1.0) - 0.15729920705028513).abs() < 1e-14);
/// let tail = erfc(5.0);
/// assert!((tail / 1.5374597944280349e-12 - 1.0).abs() < 1e-10);
/// ```
pub fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < -6.0 {
        return 2.0;
    }
    if x < 3.0 {
        return 1.0 - erf(x);
    }
    if x <= 27.0 {
        return erfc_cf(x);
    }
    // exp(-x²) underflows past here.
    0.0
}

/// Maclaurin series Σ (−1)ⁿ x^(2n+1) / (n!·(2n+1)), without the 2/√π factor.
fn erf_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = x;
    let mut sum = x;
    for n in 1..60 {
        term *= -x2 / n as f64;
        let contribution = term / (2 * n + 1) as f64;
        sum += contribution;
        if contribution.abs() < sum.abs() * f64::EPSILON {
            break;
        }
    }
    sum
}

/// Laplace continued fraction for erfc(x), x ≥ 3:
/// erfc(x) = exp(−x²)/√π · 1/(x + (1/2)/(x + 1/(x + (3/2)/(x + …)))).
fn erfc_cf(x: f64) -> f64 {
    (-x * x).exp() * erfc_cf_scaled(x)
}

/// The continued fraction above without its exp(−x²) prefactor, i.e.
/// exp(x²)·erfc(x) for x ≥ 3. Evaluated by backward recurrence from a
/// fixed depth, which converges rapidly in this range.
fn erfc_cf_scaled(x: f64) -> f64 {
    let mut f = 0.0_f64;
    for n in (1..=60).rev() {
        f = n as f64 * 0.5 / (x + f);
    }
    FRAC_1_SQRT_PI / (x + f)
}

/// Scaled complementary error function erfcx(x) = exp(x²)·erfc(x).
///
/// For large positive `x` this decays like `1/(x√π)` and keeps full
/// relative accuracy long after `erfc` itself underflows, because the
/// `exp(x²)` factor cancels symbolically inside the continued fraction.
/// For negative `x` it grows like `2·exp(x²)` and overflows to `∞` past
/// `x ≈ −26.6`, where the true value exceeds `f64::MAX`.
///
/// # Examples
/// ```
/// use specfun::special::erfcx;
/// assert_eq!(erfcx(0.0), 1.0);
/// // erfc(30) underflows to 0, but the scaled form is still accurate.
/// assert!((erfcx(30.0) * 30.0 * std::f64::consts::PI.sqrt() - 1.0).abs() < 1e-3);
/// ```
pub fn erfcx(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x >= 3.0 {
        return erfc_cf_scaled(x);
    }
    (x * x).exp() * erfc(x)
}

/// Lanczos approximation of ln Γ(x).
///
/// Reference: Lanczos (1964), "A Precision Approximation of the Gamma
/// Function", *SIAM Journal on Numerical Analysis* 1(1).
///
/// Uses the reflection formula for `x < 0.5`.
///
/// # Examples
/// ```
/// use specfun::special::ln_gamma;
/// // Γ(5) = 24
/// assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-12);
/// // Γ(0.5) = √π
/// assert!((ln_gamma(0.5) - std::f64::consts::PI.sqrt().ln()).abs() < 1e-12);
/// ```
pub fn ln_gamma(x: f64) -> f64 {
    #[allow(clippy::excessive_precision)]
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;

    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.5 {
        // Reflection formula: Γ(x)·Γ(1−x) = π/sin(πx)
        let pi = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut sum = COEFFICIENTS[0];
    for (i, &c) in COEFFICIENTS[1..].iter().enumerate() {
        sum += c / (x + i as f64 + 1.0);
    }

    let t = x + G + 0.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// Log of the Beta function: `ln B(a, b) = ln Γ(a) + ln Γ(b) − ln Γ(a+b)`.
///
/// # Examples
/// ```
/// use specfun::special::ln_beta;
/// // B(1,1) = 1, so ln B(1,1) = 0
/// assert!(ln_beta(1.0, 1.0).abs() < 1e-12);
/// ```
pub fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// Regularized incomplete beta function I_x(a, b).
///
/// # Algorithm
/// Continued fraction representation via Lentz's method, with the symmetry
/// relation `I_x(a,b) = 1 − I_{1−x}(b,a)` chosen for best convergence.
///
/// Reference: Press et al. (2007), *Numerical Recipes*, 3rd ed., §6.4.
///
/// Requires `a > 0` and `b > 0`; returns `NaN` otherwise or for `NaN`
/// inputs. `x` outside `[0, 1]` clamps to the boundary values 0 and 1.
///
/// # Examples
/// ```
/// use specfun::special::regularized_incomplete_beta;
/// assert_eq!(regularized_incomplete_beta(0.0, 2.0, 3.0), 0.0);
/// assert_eq!(regularized_incomplete_beta(1.0, 2.0, 3.0), 1.0);
/// // I_x(1,1) = x (uniform)
/// assert!((regularized_incomplete_beta(0.5, 1.0, 1.0) - 0.5).abs() < 1e-12);
/// ```
pub fn regularized_incomplete_beta(x: f64, a: f64, b: f64) -> f64 {
    if x.is_nan() || a.is_nan() || b.is_nan() || a <= 0.0 || b <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // Symmetry relation keeps the continued fraction in its fast region.
    if x > (a + 1.0) / (a + b + 2.0) {
        return 1.0 - regularized_incomplete_beta(1.0 - x, b, a);
    }

    let ln_prefix = a * x.ln() + b * (1.0 - x).ln() - ln_beta(a, b);
    let cf = beta_cf(x, a, b);
    (ln_prefix.exp() / a) * cf
}

/// Continued fraction for the incomplete beta function (Lentz's algorithm).
fn beta_cf(x: f64, a: f64, b: f64) -> f64 {
    const MAX_ITER: usize = 300;
    const EPS: f64 = 1e-15;
    const TINY: f64 = 1e-30;

    let mut c = 1.0;
    let mut d = 1.0 / (1.0 - (a + b) * x / (a + 1.0)).max(TINY);
    let mut h = d;

    for m in 1..=MAX_ITER {
        let m_f = m as f64;

        // Even step: d_{2m}
        let num_even = m_f * (b - m_f) * x / ((a + 2.0 * m_f - 1.0) * (a + 2.0 * m_f));
        d = 1.0 / (1.0 + num_even * d).max(TINY);
        c = (1.0 + num_even / c).max(TINY);
        h *= d * c;

        // Odd step: d_{2m+1}
        let num_odd = -(a + m_f) * (a + b + m_f) * x / ((a + 2.0 * m_f) * (a + 2.0 * m_f + 1.0));
        d = 1.0 / (1.0 + num_odd * d).max(TINY);
        c = (1.0 + num_odd / c).max(TINY);
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPS {
            break;
        }
    }

    h
}

// ============================================================================
// Tests
// ============================================================================
