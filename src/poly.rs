//! Polynomial and rational function evaluation.
//!
//! All evaluators use Horner's method with coefficients ordered by
//! **ascending** degree. Rational evaluation switches to a
//! reciprocal-argument form for `|x| > 1` so that high-degree numerators and
//! denominators cannot overflow before the division.
//!
//! Each evaluator has a `*_factory` counterpart that binds a fixed
//! coefficient set into a reusable closure; validation and constant-case
//! dispatch happen once at factory time rather than on every call.
//!
//! The `f32` variants (`evalpolyf`, `evalrationalf`, ...) perform every
//! intermediate operation in native single precision, so results are
//! bit-identical to hardware `f32` arithmetic rather than double-precision
//! results rounded once at the end.

/// Evaluates a polynomial with coefficients in ascending degree order.
///
/// Computes `c[0] + c[1]·x + c[2]·x² + …` via Horner's method.
///
/// An empty coefficient slice evaluates to `0.0` (the additive identity);
/// a single coefficient is returned as-is, independent of `x`.
///
/// # Examples
/// ```
/// use specfun::poly::evalpoly;
/// // 3 + 2x + x² at x = 2 → 11
/// assert_eq!(evalpoly(&[3.0, 2.0, 1.0], 2.0), 11.0);
/// assert_eq!(evalpoly(&[], 123.0), 0.0);
/// assert_eq!(evalpoly(&[7.0], 123.0), 7.0);
/// ```
pub fn evalpoly(c: &[f64], x: f64) -> f64 {
    let n = c.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return c[0];
    }
    let mut acc = c[n - 1];
    for &ci in c[..n - 1].iter().rev() {
        acc = acc * x + ci;
    }
    acc
}

/// Single-precision counterpart of [`evalpoly`].
///
/// Every multiply and add is performed in native `f32`, matching hardware
/// single-precision semantics exactly.
pub fn evalpolyf(c: &[f32], x: f32) -> f32 {
    let n = c.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return c[0];
    }
    let mut acc = c[n - 1];
    for &ci in c[..n - 1].iter().rev() {
        acc = acc * x + ci;
    }
    acc
}

/// Evaluates a rational function `P(x)/Q(x)`.
///
/// `p` and `q` hold the numerator and denominator coefficients in ascending
/// degree order and **must have equal, nonzero length**; otherwise the
/// result is `NaN`.
///
/// For `|x| <= 1` both polynomials are evaluated directly. For `|x| > 1`
/// both are evaluated at `1/x` in descending-degree order; the implicit
/// `x^(n−1)` factors cancel because the lengths are equal, so the ratio is
/// unchanged while intermediate magnitudes stay bounded.
///
/// # Examples
/// ```
/// use specfun::poly::evalrational;
/// // (1 + 2x) / (3 + 4x) at x = 1 → 3/7
/// let r = evalrational(&[1.0, 2.0], &[3.0, 4.0], 1.0);
/// assert!((r - 3.0 / 7.0).abs() < 1e-15);
/// // constant ratio, independent of x
/// assert_eq!(evalrational(&[5.0], &[10.0], -3.5), 0.5);
/// // mismatched lengths are invalid
/// assert!(evalrational(&[1.0, 2.0], &[3.0], 1.0).is_nan());
/// ```
pub fn evalrational(p: &[f64], q: &[f64], x: f64) -> f64 {
    let n = p.len();
    if n == 0 || n != q.len() {
        return f64::NAN;
    }
    if n == 1 || x == 0.0 {
        return p[0] / q[0];
    }
    if x.abs() <= 1.0 {
        return evalpoly(p, x) / evalpoly(q, x);
    }
    // |x| > 1: Horner in 1/x over reversed coefficients.
    let invx = 1.0 / x;
    let mut s1 = p[0];
    let mut s2 = q[0];
    for i in 1..n {
        s1 = s1 * invx + p[i];
        s2 = s2 * invx + q[i];
    }
    s1 / s2
}

/// Single-precision counterpart of [`evalrational`].
pub fn evalrationalf(p: &[f32], q: &[f32], x: f32) -> f32 {
    let n = p.len();
    if n == 0 || n != q.len() {
        return f32::NAN;
    }
    if n == 1 || x == 0.0 {
        return p[0] / q[0];
    }
    if x.abs() <= 1.0 {
        return evalpolyf(p, x) / evalpolyf(q, x);
    }
    let invx = 1.0 / x;
    let mut s1 = p[0];
    let mut s2 = q[0];
    for i in 1..n {
        s1 = s1 * invx + p[i];
        s2 = s2 * invx + q[i];
    }
    s1 / s2
}

/// Returns a specialized polynomial evaluator bound to `c`.
///
/// The degenerate cases (empty, constant) are resolved once here, so the
/// returned closure does no per-call length dispatch for them.
///
/// # Examples
/// ```
/// use specfun::poly::evalpoly_factory;
/// let f = evalpoly_factory(vec![3.0, 2.0, 1.0]);
/// assert_eq!(f(2.0), 11.0);
/// assert_eq!(f(0.0), 3.0);
/// ```
pub fn evalpoly_factory(c: Vec<f64>) -> impl Fn(f64) -> f64 {
    let constant = match c.len() {
        0 => Some(0.0),
        1 => Some(c[0]),
        _ => None,
    };
    move |x| match constant {
        Some(k) => k,
        None => evalpoly(&c, x),
    }
}

/// Returns a specialized rational evaluator bound to `p` and `q`.
///
/// Invalid coefficient sets (empty or mismatched lengths) produce a closure
/// that always returns `NaN`; a pair of constants produces a closure that
/// returns the fixed ratio. Neither condition is re-checked per call.
///
/// # Examples
/// ```
/// use specfun::poly::evalrational_factory;
/// let f = evalrational_factory(vec![1.0, 2.0], vec![3.0, 4.0]);
/// assert!((f(1.0) - 3.0 / 7.0).abs() < 1e-15);
/// let bad = evalrational_factory(vec![1.0], vec![]);
/// assert!(bad(0.5).is_nan());
/// ```
pub fn evalrational_factory(p: Vec<f64>, q: Vec<f64>) -> impl Fn(f64) -> f64 {
    let constant = if p.is_empty() || p.len() != q.len() {
        Some(f64::NAN)
    } else if p.len() == 1 {
        Some(p[0] / q[0])
    } else {
        None
    };
    move |x| match constant {
        Some(k) => k,
        None => evalrational(&p, &q, x),
    }
}

/// Single-precision counterpart of [`evalpoly_factory`].
pub fn evalpolyf_factory(c: Vec<f32>) -> impl Fn(f32) -> f32 {
    let constant = match c.len() {
        0 => Some(0.0),
        1 => Some(c[0]),
        _ => None,
    };
    move |x| match constant {
        Some(k) => k,
        None => evalpolyf(&c, x),
    }
}

/// Single-precision counterpart of [`evalrational_factory`].
pub fn evalrationalf_factory(p: Vec<f32>, q: Vec<f32>) -> impl Fn(f32) -> f32 {
    let constant = if p.is_empty() || p.len() != q.len() {
        Some(f32::NAN)
    } else if p.len() == 1 {
        Some(p[0] / q[0])
    } else {
        None
    };
    move |x| match constant {
        Some(k) => k,
        None => evalrationalf(&p, &q, x),
    }
}

// ============================================================================
// Tests
// ============================================================================
