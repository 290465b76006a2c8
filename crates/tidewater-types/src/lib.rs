//! Shared type definitions for the Tidewater terminal simulation.
//!
//! This crate is the single source of truth for the types shared between
//! the simulation engine and its presentation layer. Types defined here
//! flow downstream to `TypeScript` via `ts-rs` for the configuration and
//! state-vector table UI.
//!
//! # Modules
//!
//! - [`ids`] -- Sequential-integer id newtypes for ships and tanks
//! - [`enums`] -- Ship and tank lifecycle states
//! - [`entities`] -- The [`Ship`] and [`Tank`] value structs
//! - [`events`] -- Pending [`Event`]s and their kinds
//! - [`snapshot`] -- The per-event [`SnapshotRow`] reporting record
//! - [`labels`] -- Pure mapping from internal enums to display strings

pub mod entities;
pub mod enums;
pub mod events;
pub mod ids;
pub mod labels;
pub mod snapshot;

// Re-export all public types at crate root for convenience.
pub use entities::{Ship, Tank};
pub use enums::{ShipStatus, TankStatus};
pub use events::{Event, EventKind};
pub use ids::{ShipId, TankId};
pub use snapshot::{RunStats, SnapshotRow, TankCompletion, TankStatusEntry};
