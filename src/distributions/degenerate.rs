//! Degenerate (point mass) distribution at `mu`.

/// Degenerate CDF: 0 below `μ`, 1 at and above it.
///
/// # Examples
/// ```
/// use specfun::distributions::degenerate;
/// assert_eq!(degenerate::cdf(2.9, 3.0), 0.0);
/// assert_eq!(degenerate::cdf(3.0, 3.0), 1.0);
/// ```
pub fn cdf(x: f64, mu: f64) -> f64 {
    if x.is_nan() || mu.is_nan() {
        return f64::NAN;
    }
    if x < mu {
        0.0
    } else {
        1.0
    }
}

/// Returns a CDF evaluator bound to `μ`.
pub fn cdf_factory(mu: f64) -> impl Fn(f64) -> f64 {
    let invalid = mu.is_nan();
    move |x| {
        if invalid || x.is_nan() {
            f64::NAN
        } else if x < mu {
            0.0
        } else {
            1.0
        }
    }
}

/// Degenerate PMF: 1 at `μ`, 0 elsewhere.
pub fn pmf(x: f64, mu: f64) -> f64 {
    if x.is_nan() || mu.is_nan() {
        return f64::NAN;
    }
    if x == mu {
        1.0
    } else {
        0.0
    }
}

/// Returns a PMF evaluator bound to `μ`.
pub fn pmf_factory(mu: f64) -> impl Fn(f64) -> f64 {
    let invalid = mu.is_nan();
    move |x| {
        if invalid || x.is_nan() {
            f64::NAN
        } else if x == mu {
            1.0
        } else {
            0.0
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
