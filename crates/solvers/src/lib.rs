//! Root finders and dense linear solvers.
//!
//! Every solver follows the same contract: the caller supplies a function (or
//! matrix), a starting point, a [`Config`](equation::bisection::Config) with
//! tolerances and an iteration budget, and an [`Observer`]. The solver runs a
//! bounded loop and returns a `Solution` carrying a `Status`, or an `Error`
//! when a structural precondition fails (no sign change, zero derivative,
//! zero pivot, ...). Exhausting the budget is not an error: the best estimate
//! is returned with `Status::MaxIters`.
//!
//! # Modules
//!
//! - [`equation`] — roots of scalar equations
//! - [`linear`] — dense linear systems, direct and iterative
//! - [`system`] — roots of nonlinear systems
//!
//! [`Observer`]: numera_core::Observer

pub mod equation;
pub mod linear;
pub mod system;
