use ndarray::Array1;

/// Event emitted after each sweep.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Sweep counter (1-based).
    pub iter: usize,

    /// The iterate after this sweep.
    pub x: &'a Array1<f64>,

    /// `‖b − Ax‖∞` at the new iterate.
    pub residual_norm: f64,

    /// `‖x_{k+1} − x_k‖∞ / ‖x_{k+1}‖∞`.
    pub rel_error: f64,
}
