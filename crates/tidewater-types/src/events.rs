//! Pending events driving the simulation forward.
//!
//! Events are immutable once scheduled and consumed exactly once. Tank
//! completion events carry the id of the tank they refer to; arrivals are
//! terminal-wide and carry no entity reference.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::TankId;

/// The kind of a pending simulation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum EventKind {
    /// A tanker ship arrives at the terminal.
    ShipArrival,
    /// Pumping from a ship into the given tank finishes.
    PumpingComplete {
        /// The tank being filled.
        tank: TankId,
    },
    /// The given tank finishes discharging to the refinery.
    DischargeComplete {
        /// The tank being emptied.
        tank: TankId,
    },
}

impl EventKind {
    /// The tank this event refers to, if any.
    pub const fn tank_id(self) -> Option<TankId> {
        match self {
            Self::ShipArrival => None,
            Self::PumpingComplete { tank } | Self::DischargeComplete { tank } => Some(tank),
        }
    }
}

/// A pending event at a point on the simulated clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// What happens.
    pub kind: EventKind,
    /// Simulated clock value at which it happens.
    pub time: f64,
}

impl Event {
    /// A ship arrival at the given time.
    pub const fn ship_arrival(time: f64) -> Self {
        Self {
            kind: EventKind::ShipArrival,
            time,
        }
    }

    /// A pumping-complete event for `tank` at the given time.
    pub const fn pumping_complete(time: f64, tank: TankId) -> Self {
        Self {
            kind: EventKind::PumpingComplete { tank },
            time,
        }
    }

    /// A discharge-complete event for `tank` at the given time.
    pub const fn discharge_complete(time: f64, tank: TankId) -> Self {
        Self {
            kind: EventKind::DischargeComplete { tank },
            time,
        }
    }

    /// The tank this event refers to, if any.
    pub const fn tank_id(self) -> Option<TankId> {
        self.kind.tank_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrival_has_no_tank() {
        assert_eq!(Event::ship_arrival(0.0).tank_id(), None);
    }

    #[test]
    fn completion_events_carry_their_tank() {
        let tank = TankId::new(3);
        assert_eq!(Event::pumping_complete(2.5, tank).tank_id(), Some(tank));
        assert_eq!(Event::discharge_complete(7.0, tank).tank_id(), Some(tank));
    }
}
