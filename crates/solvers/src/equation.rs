//! Solvers for scalar equations, finding `x` such that `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed linear convergence on a sign-changing bracket
//! - [`newton`] — Newton-Raphson with a caller-supplied derivative
//! - [`halley`] — third-order method using first and second derivatives
//! - [`secant`] — derivative-free, two starting guesses
//! - [`muller`] — quadratic interpolation through three points, may return
//!   complex roots
//!
//! The open methods (everything except bisection) share their configuration,
//! events, and solution types through [`open`].

mod evaluate;

pub use evaluate::{EvalError, evaluate, evaluate_complex};

pub mod bisection;
pub mod halley;
pub mod muller;
pub mod newton;
pub mod open;
pub mod secant;
