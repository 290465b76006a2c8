//! Enumeration types for the terminal simulation.
//!
//! Ship and tank lifecycle states. Both are small closed state machines:
//! a ship moves `Loading | Queued -> Loading -> Discharged`, a tank cycles
//! `Free -> Loading -> Discharging -> Free` (or jumps straight from
//! `Discharging` to `Loading` when a queued ship is waiting).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Ship lifecycle
// ---------------------------------------------------------------------------

/// The lifecycle state of a tanker ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ShipStatus {
    /// The ship is pumping its cargo into an assigned tank.
    Loading,
    /// The ship is waiting for a tank to free up, in arrival order.
    Queued,
    /// Pumping finished; the ship is retired but retained for reporting.
    Discharged,
}

// ---------------------------------------------------------------------------
// Tank lifecycle
// ---------------------------------------------------------------------------

/// The lifecycle state of a coastal holding tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum TankStatus {
    /// Empty and available for the next arriving or queued ship.
    Free,
    /// A ship is pumping cargo into this tank.
    Loading,
    /// The tank is discharging its contents to the refinery.
    Discharging,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_roundtrip_serde() {
        for status in [TankStatus::Free, TankStatus::Loading, TankStatus::Discharging] {
            let json = serde_json::to_string(&status).ok();
            let restored: Option<TankStatus> =
                json.as_deref().and_then(|j| serde_json::from_str(j).ok());
            assert_eq!(restored, Some(status));
        }
        for status in [ShipStatus::Loading, ShipStatus::Queued, ShipStatus::Discharged] {
            let json = serde_json::to_string(&status).ok();
            let restored: Option<ShipStatus> =
                json.as_deref().and_then(|j| serde_json::from_str(j).ok());
            assert_eq!(restored, Some(status));
        }
    }
}
