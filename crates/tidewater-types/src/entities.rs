//! Core entity structs for the terminal simulation.
//!
//! A [`Ship`] is created on arrival and never deleted; once discharged it
//! stays in the ship list for reporting. A [`Tank`] exists for the whole
//! run. Tank invariants (checked by [`Tank::holds_invariants`]):
//!
//! - `loading_ship` is present if and only if the tank status is `Loading`.
//! - a positive `current_load` implies the tank is not `Free`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{ShipStatus, TankStatus};
use crate::ids::{ShipId, TankId};

/// A tanker ship delivering cargo to the terminal.
///
/// `current_load` is fixed at creation; the cargo quantity is copied into
/// the assigned tank rather than drained incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Ship {
    /// Sequential identifier assigned in arrival order.
    pub id: ShipId,
    /// Lifecycle state.
    pub status: ShipStatus,
    /// Cargo tonnage at creation.
    pub initial_load: f64,
    /// Cargo tonnage currently aboard (constant in this model).
    pub current_load: f64,
}

impl Ship {
    /// Create a ship carrying `load` tonnes in the given state.
    pub const fn new(id: ShipId, load: f64, status: ShipStatus) -> Self {
        Self {
            id,
            status,
            initial_load: load,
            current_load: load,
        }
    }
}

/// A coastal holding tank buffering ship cargo before refinery discharge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Tank {
    /// Sequential identifier (1..=N for the run).
    pub id: TankId,
    /// Lifecycle state.
    pub status: TankStatus,
    /// Tonnage currently held.
    pub current_load: f64,
    /// Maximum tonnage; the same constant for every tank in a run.
    pub capacity: f64,
    /// The ship currently pumping into this tank, when status is `Loading`.
    pub loading_ship: Option<ShipId>,
}

impl Tank {
    /// Create a free, empty tank with the given capacity.
    pub const fn free(id: TankId, capacity: f64) -> Self {
        Self {
            id,
            status: TankStatus::Free,
            current_load: 0.0,
            capacity,
            loading_ship: None,
        }
    }

    /// Check the documented tank invariants.
    pub fn holds_invariants(&self) -> bool {
        let ship_matches_status =
            self.loading_ship.is_some() == (self.status == TankStatus::Loading);
        let load_matches_status = self.current_load <= 0.0 || self.status != TankStatus::Free;
        ship_matches_status && load_matches_status
    }
}
