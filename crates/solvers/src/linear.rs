//! Solvers for dense linear systems `Ax = b`.
//!
//! # Direct
//!
//! - [`lu`] — Doolittle LU without pivoting, plus an opt-in partially pivoted
//!   variant
//! - [`triangular`] — forward and backward substitution
//!
//! # Stationary iterative
//!
//! - [`jacobi`] — synchronous sweep from the previous iterate
//! - [`gauss_seidel`] — in-place sweep using components updated earlier in
//!   the same sweep
//!
//! Both iterative methods are views of `x_{k+1} = C x_k + g` for a splitting
//! `A = M − N`. [`splitting`] builds `C = M⁻¹N` and reports whether
//! convergence is guaranteed.

pub mod gauss_seidel;
pub mod jacobi;
pub mod lu;
pub mod splitting;
pub mod stationary;
pub mod triangular;
