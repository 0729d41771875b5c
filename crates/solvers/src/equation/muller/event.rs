use num_complex::Complex64;

/// Event emitted by Müller's method after each new iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The new iterate.
    pub x: Complex64,

    /// Function value at the new iterate.
    pub value: Complex64,

    /// Relative step `|x_{k+1} − x_k| / |x_{k+1}|`.
    pub rel_error: f64,
}
