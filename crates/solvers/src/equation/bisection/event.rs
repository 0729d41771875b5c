/// Event emitted by the bisection solver after each midpoint evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The midpoint that was evaluated.
    pub x: f64,

    /// Function value at the midpoint.
    pub value: f64,

    /// Bracket after narrowing around the midpoint.
    pub bracket: [f64; 2],

    /// Width of the narrowed bracket (zero on an exact hit).
    pub width: f64,
}
