//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer works with every solver.
//!
//! # Event traits
//!
//! - [`Recordable`] — events that summarize into an [`Iteration`]
//! - [`HasResidual`] — events that carry a residual magnitude
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numera_core::Observer;
//! use numera_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use ndarray::Array1;
use num_complex::Complex64;

use numera_core::matrix;
use numera_solvers::{
    equation::{bisection, muller, open},
    linear::stationary,
    system::newton,
};

use crate::record::Iteration;

/// An event that can be summarized as one row of an iteration record.
pub trait Recordable {
    /// The current estimate: a scalar, complex number, or vector.
    type Estimate;

    /// The function value (or residual measure) at the estimate.
    type Value;

    /// Returns the iteration record for this event.
    fn iteration(&self) -> Iteration<Self::Estimate, Self::Value>;
}

/// An event that carries a residual magnitude.
pub trait HasResidual {
    /// Returns `|f(x)|` for scalar solvers or a norm of the residual vector.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- Recordable impls ---

impl Recordable for bisection::Event {
    type Estimate = f64;
    type Value = f64;

    fn iteration(&self) -> Iteration<f64> {
        Iteration {
            index: self.iter,
            estimate: self.x,
            value: self.value,
            error: self.width,
        }
    }
}

impl Recordable for open::Event {
    type Estimate = f64;
    type Value = f64;

    fn iteration(&self) -> Iteration<f64> {
        Iteration {
            index: self.iter,
            estimate: self.x,
            value: self.value,
            error: self.rel_error,
        }
    }
}

impl Recordable for muller::Event {
    type Estimate = Complex64;
    type Value = Complex64;

    fn iteration(&self) -> Iteration<Complex64, Complex64> {
        Iteration {
            index: self.iter,
            estimate: self.x,
            value: self.value,
            error: self.rel_error,
        }
    }
}

impl Recordable for stationary::Event<'_> {
    type Estimate = Array1<f64>;
    type Value = f64;

    fn iteration(&self) -> Iteration<Array1<f64>> {
        Iteration {
            index: self.iter,
            estimate: self.x.clone(),
            value: self.residual_norm,
            error: self.rel_error,
        }
    }
}

impl Recordable for newton::Event<'_> {
    type Estimate = Array1<f64>;
    type Value = f64;

    fn iteration(&self) -> Iteration<Array1<f64>> {
        Iteration {
            index: self.iter,
            estimate: self.x.clone(),
            value: matrix::norm_2(self.residual),
            error: self.step_norm,
        }
    }
}

// --- HasResidual impls ---

impl HasResidual for bisection::Event {
    fn residual(&self) -> f64 {
        self.value.abs()
    }
}

impl HasResidual for open::Event {
    fn residual(&self) -> f64 {
        self.value.abs()
    }
}

impl HasResidual for muller::Event {
    fn residual(&self) -> f64 {
        self.value.norm()
    }
}

impl HasResidual for stationary::Event<'_> {
    fn residual(&self) -> f64 {
        self.residual_norm
    }
}

impl HasResidual for newton::Event<'_> {
    fn residual(&self) -> f64 {
        matrix::norm_2(self.residual)
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

/// Covers Newton, Halley, secant, and Müller, which share this action type.
impl CanStopEarly for open::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

/// Covers Jacobi and Gauss-Seidel.
impl CanStopEarly for stationary::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
