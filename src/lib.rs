//! # specfun
//!
//! Special functions and statistical distribution evaluators.
//!
//! This crate provides the numerical evaluation layer shared by probability
//! and statistics code: safe polynomial/rational evaluation, high-accuracy
//! transcendental primitives, the regularized incomplete gamma function
//! (including a Temme large-parameter asymptotic expansion), and closed-form
//! distribution functions (CDF/PDF/MGF/quantile) with a consistent dual API.
//!
//! ## Modules
//!
//! - [`poly`] — Horner polynomial and rational evaluation, `f64` and `f32`
//! - [`special`] — `erf`/`erfc`, log-gamma, incomplete beta
//! - [`incgamma`] — regularized incomplete gamma, Temme asymptotic expansion
//! - [`distributions`] — per-distribution evaluation functions and factories
//! - [`random`] — seeded RNG construction and distribution samplers
//!
//! ## Design Philosophy
//!
//! - **NaN as the error channel**: out-of-domain parameters or `NaN` inputs
//!   yield `NaN`, never a panic or an error type. Invalidity is detected
//!   once (at factory time for specialized evaluators) and propagates
//!   arithmetically through IEEE-754 semantics, so a single bad element
//!   never aborts a numeric pipeline.
//! - **Dual call shapes**: every distribution statistic is available both as
//!   a direct n-ary function for one-shot use and as a `*_factory` returning
//!   a parameter-bound unary closure for repeated evaluation.
//! - **Numerical stability first**: reciprocal-argument Horner evaluation to
//!   avoid overflow, log-space prefactors, series reformulations near
//!   cancellation-prone points.
//! - **No shared mutable state**: every evaluator is a pure function of its
//!   inputs and captures; scratch space lives on the call stack.

pub mod distributions;
pub mod incgamma;
pub mod poly;
pub mod random;
pub mod special;
