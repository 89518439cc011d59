//! Gumbel (type-I extreme value) distribution with location `mu` and
//! scale `beta`.

/// Skewness of the Gumbel distribution.
///
/// The skewness is the same for every valid parameterization:
/// `12·√6·ζ(3)/π³ ≈ 1.1395`. The parameters only gate validity; `NaN`
/// inputs or `β <= 0` give `NaN`.
///
/// # Examples
/// ```
/// use specfun::distributions::gumbel;
/// assert_eq!(gumbel::skewness(0.0, 1.0), 1.1395470994046488);
/// assert_eq!(gumbel::skewness(-30.0, 0.5), 1.1395470994046488);
/// assert!(gumbel::skewness(0.0, 0.0).is_nan());
/// ```
pub fn skewness(mu: f64, beta: f64) -> f64 {
    if mu.is_nan() || beta.is_nan() || beta <= 0.0 {
        return f64::NAN;
    }
    // 12·√6·ζ(3)/π³
    1.1395470994046488
}

/// Gumbel CDF: `F(x; μ, β) = exp(−exp(−(x − μ)/β))`.
///
/// # Examples
/// ```
/// use specfun::distributions::gumbel;
/// let c = gumbel::cdf(0.0, 0.0, 1.0);
/// assert!((c - (-1.0_f64).exp()).abs() < 1e-16);
/// ```
pub fn cdf(x: f64, mu: f64, beta: f64) -> f64 {
    if x.is_nan() || mu.is_nan() || beta.is_nan() || beta <= 0.0 {
        return f64::NAN;
    }
    (-(-(x - mu) / beta).exp()).exp()
}

/// Returns a CDF evaluator bound to `(μ, β)`.
pub fn cdf_factory(mu: f64, beta: f64) -> impl Fn(f64) -> f64 {
    let invalid = mu.is_nan() || beta.is_nan() || beta <= 0.0;
    move |x| {
        if invalid || x.is_nan() {
            f64::NAN
        } else {
            (-(-(x - mu) / beta).exp()).exp()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
