//! Probability distribution functions.
//!
//! Each submodule covers one distribution and exposes two call shapes for
//! every statistic:
//!
//! - a **direct** function taking the query point plus the distribution
//!   parameters, validating per call — for one-shot use;
//! - a **factory** (`*_factory`) taking only the parameters and returning a
//!   parameter-bound unary closure — validation happens exactly once, and
//!   invalid parameters yield a closure that returns `NaN` for every input.
//!
//! # Supported Distributions
//!
//! | Distribution | Statistics |
//! |---|---|
//! | [`cauchy`] | CDF, PDF, quantile |
//! | [`gamma`] | MGF, CDF |
//! | [`rayleigh`] | MGF, CDF |
//! | [`gumbel`] | CDF, skewness |
//! | [`triangular`] | CDF, MGF |
//! | [`chi_squared`] | CDF |
//! | [`binomial`] | CDF |
//! | [`degenerate`] | CDF, PMF |
//!
//! # Error Policy
//!
//! No function here panics or returns an error type for numeric inputs.
//! `NaN` parameters, `NaN` query points, and domain violations (e.g. a
//! non-positive scale) all produce `NaN`, which then propagates through any
//! downstream arithmetic. This keeps batch pipelines running when a single
//! element is bad.

pub mod binomial;
pub mod cauchy;
pub mod chi_squared;
pub mod degenerate;
pub mod gamma;
pub mod gumbel;
pub mod rayleigh;
pub mod triangular;
