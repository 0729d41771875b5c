use ndarray::Array1;

/// Event emitted after each Newton step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The new iterate `x_{k+1}`.
    pub x: &'a Array1<f64>,

    /// `F(x_{k+1})`.
    pub residual: &'a Array1<f64>,

    /// `‖s‖₂` of the step just taken.
    pub step_norm: f64,
}
