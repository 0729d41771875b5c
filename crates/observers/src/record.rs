//! Iteration records.
//!
//! A [`Recorder`] turns each solver event into an [`Iteration`]: the index,
//! the estimate, the function value at it, and the solver's error measure
//! (bracket width, relative step, or step norm).

use numera_core::Observer;

use crate::traits::Recordable;

/// One row of an iteration record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Iteration<X, V = f64> {
    /// Iteration counter (1-based).
    pub index: usize,

    /// The estimate after this iteration.
    pub estimate: X,

    /// Function value or residual measure at the estimate.
    pub value: V,

    /// The solver's error measure for this iteration.
    pub error: f64,
}

/// An observer that records every event it sees.
///
/// Pass `&mut recorder` as the observer to keep access to the record after
/// the solve. The recorder never asks the solver to stop.
///
/// # Example
///
/// ```rust
/// use numera_observers::Recorder;
/// use numera_solvers::equation::bisection;
///
/// let f = |x: f64| x * x - 2.0;
/// let mut recorder: Recorder<f64> = Recorder::new();
///
/// bisection::solve(&f, [1.0, 2.0], &bisection::Config::default(), &mut recorder).unwrap();
///
/// assert!(recorder.iterations().len() > 30);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder<X, V = f64> {
    iterations: Vec<Iteration<X, V>>,
}

impl<X, V> Recorder<X, V> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            iterations: Vec::new(),
        }
    }

    /// Appends an iteration.
    pub fn record(&mut self, iteration: Iteration<X, V>) {
        self.iterations.push(iteration);
    }

    /// Returns the recorded iterations in order.
    #[must_use]
    pub fn iterations(&self) -> &[Iteration<X, V>] {
        &self.iterations
    }

    /// Returns the most recent iteration, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Iteration<X, V>> {
        self.iterations.last()
    }

    /// Consumes the recorder and returns the iterations.
    #[must_use]
    pub fn into_iterations(self) -> Vec<Iteration<X, V>> {
        self.iterations
    }
}

impl<X, V> Default for Recorder<X, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X, V, E, A> Observer<E, A> for Recorder<X, V>
where
    E: Recordable<Estimate = X, Value = V>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.iteration());
        None
    }
}

/// Allows `&mut Recorder` to be passed to solvers that take an observer by
/// value.
impl<X, V, E, A> Observer<E, A> for &mut Recorder<X, V>
where
    E: Recordable<Estimate = X, Value = V>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
