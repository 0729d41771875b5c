//! Core traits and types for the numera numerical kernels.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Function`], [`ComplexFunction`], [`VectorFunction`], [`Jacobian`] —
//!   caller-supplied callables the solvers evaluate
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`matrix`] — dense matrix and vector primitives (norms, row operations,
//!   structural checks)

mod function;
mod observer;

pub mod matrix;

pub use function::{ComplexFunction, ForwardDifference, Function, Jacobian, VectorFunction};
pub use observer::Observer;
