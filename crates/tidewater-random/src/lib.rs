//! Distribution transforms and replayable random streams for the
//! Tidewater terminal simulation.
//!
//! Randomness in the simulation is split into two concerns:
//!
//! - [`dist`] -- stateless numeric transforms mapping a canonical draw in
//!   `[0, 1)` to a domain quantity (uniform, exponential, clamp).
//! - [`stream`] -- the operator-supplied draw sequences themselves, with
//!   the circular head-then-append reuse policy that keeps long runs
//!   reproducible from a short digit list.
//!
//! The engine never samples an RNG directly; every stochastic choice is a
//! transform applied to the next draw of one of the two streams.

pub mod dist;
pub mod stream;

// Re-export primary items at crate root.
pub use dist::{DomainError, clamp, exponential, uniform};
pub use stream::{RandomStreams, StreamError, StreamKind, draws_from_percent_digits};
