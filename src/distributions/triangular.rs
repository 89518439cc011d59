//! Triangular distribution on `[a, b]` with mode `c`.
//!
//! Valid parameters satisfy `a <= c <= b`. The degenerate case `a == b`
//! is accepted and behaves as a point mass at `a`.

/// Triangular CDF.
///
/// Piecewise quadratic: 0 left of `a`, `(x−a)²/((b−a)(c−a))` on `[a, c)`,
/// `(c−a)/(b−a)` at the mode, `1 − (b−x)²/((b−a)(b−c))` on `(c, b)`, and 1
/// from `b` on. Evaluating at `x == c` directly avoids a 0/0 when the mode
/// sits on an endpoint.
///
/// Returns `NaN` for `NaN` inputs or parameters violating `a <= c <= b`.
///
/// # Examples
/// ```
/// use specfun::distributions::triangular;
/// assert_eq!(triangular::cdf(1.0, 0.0, 2.0, 1.0), 0.5);
/// assert_eq!(triangular::cdf(0.5, 0.0, 2.0, 1.0), 0.125);
/// assert!(triangular::cdf(0.5, 1.0, 0.0, 0.5).is_nan());
/// ```
pub fn cdf(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x.is_nan() || a.is_nan() || b.is_nan() || c.is_nan() || !(a <= c && c <= b) {
        return f64::NAN;
    }
    cdf_body(x, a, b, c)
}

fn cdf_body(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x <= a {
        return if x == a && a == b { 1.0 } else { 0.0 };
    }
    if x >= b {
        return 1.0;
    }
    // a < x < b, so a < b here
    if x < c {
        let d = x - a;
        d * d / ((b - a) * (c - a))
    } else if x == c {
        (c - a) / (b - a)
    } else {
        let d = b - x;
        1.0 - d * d / ((b - a) * (b - c))
    }
}

/// Returns a CDF evaluator bound to `(a, b, c)`.
pub fn cdf_factory(a: f64, b: f64, c: f64) -> impl Fn(f64) -> f64 {
    let invalid = a.is_nan() || b.is_nan() || c.is_nan() || !(a <= c && c <= b);
    move |x| {
        if invalid || x.is_nan() {
            f64::NAN
        } else {
            cdf_body(x, a, b, c)
        }
    }
}

/// Triangular MGF.
///
/// The general closed form
/// `2·((b−c)e^{at} − (b−a)e^{ct} + (c−a)e^{bt}) / ((b−a)(c−a)(b−c)t²)`
/// degenerates when the mode coincides with an endpoint or when `t == 0`;
/// those cases use their analytic limits instead of the 0/0 expression.
///
/// # Examples
/// ```
/// use specfun::distributions::triangular;
/// assert_eq!(triangular::mgf(0.0, 0.0, 2.0, 1.0), 1.0);
/// ```
pub fn mgf(t: f64, a: f64, b: f64, c: f64) -> f64 {
    if t.is_nan() || a.is_nan() || b.is_nan() || c.is_nan() || !(a <= c && c <= b) {
        return f64::NAN;
    }
    mgf_body(t, a, b, c)
}

fn mgf_body(t: f64, a: f64, b: f64, c: f64) -> f64 {
    if t == 0.0 {
        return 1.0;
    }
    if a == b {
        return (a * t).exp();
    }
    let w = b - a;
    let wt2 = w * w * t * t;
    if c == a {
        // density is linear, decreasing from a to b
        2.0 * ((b * t).exp() - (a * t).exp() - w * t * (a * t).exp()) / wt2
    } else if c == b {
        2.0 * ((a * t).exp() - (b * t).exp() + w * t * (b * t).exp()) / wt2
    } else {
        let num = (b - c) * (a * t).exp() - w * (c * t).exp() + (c - a) * (b * t).exp();
        2.0 * num / (w * (c - a) * (b - c) * t * t)
    }
}

/// Returns an MGF evaluator bound to `(a, b, c)`.
pub fn mgf_factory(a: f64, b: f64, c: f64) -> impl Fn(f64) -> f64 {
    let invalid = a.is_nan() || b.is_nan() || c.is_nan() || !(a <= c && c <= b);
    move |t| {
        if invalid || t.is_nan() {
            f64::NAN
        } else {
            mgf_body(t, a, b, c)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
