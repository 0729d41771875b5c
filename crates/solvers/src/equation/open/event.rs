/// Event emitted by an open root finder after each new iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The new iterate `x_{k+1}`.
    pub x: f64,

    /// Function value at the new iterate.
    pub value: f64,

    /// Relative step `|x_{k+1} − x_k| / |x_{k+1}|`.
    pub rel_error: f64,
}
