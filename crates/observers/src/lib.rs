//! Reusable observers for numera solvers.
//!
//! Solvers never print. Everything a caller wants to see about an iteration
//! goes through an [`Observer`], and this crate provides the common ones.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits implemented for every solver's events and
//!   actions ([`Recordable`], [`HasResidual`], [`CanStopEarly`])
//! - [`record`] — [`Recorder`], which collects one [`Iteration`] per event
//! - [`table`] — plain-text rendering of recorded iterations
//! - [`log`] — [`Logger`], which emits a `tracing` event per iteration
//! - [`stop`] — [`ResidualTarget`], an early-stopping rule
//!
//! # Features
//!
//! - `serde` — Derives `Serialize` for [`Iteration`].
//!
//! [`Observer`]: numera_core::Observer
//! [`Recordable`]: traits::Recordable
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod log;
pub mod record;
pub mod stop;
pub mod table;
pub mod traits;

pub use log::Logger;
pub use record::{Iteration, Recorder};
pub use stop::ResidualTarget;
pub use table::Table;
