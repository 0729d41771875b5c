//! Solvers for nonlinear systems `F(x) = 0` with `F: ℝⁿ → ℝⁿ`.
//!
//! - [`newton`] — Newton's method, solving each linearized step by LU

pub mod newton;
