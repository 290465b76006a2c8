//! Pure boundary mapping from internal enums to display vocabulary.
//!
//! The presentation layer renders these strings directly; the engine never
//! branches on them. Keeping the translation here, outside the engine,
//! means the internal state machines and the display vocabulary can evolve
//! independently.

use crate::enums::TankStatus;
use crate::events::EventKind;
use crate::ids::ShipId;

/// Display label for a processed event.
pub const fn event_label(kind: EventKind) -> &'static str {
    match kind {
        EventKind::ShipArrival => "Ship arrival",
        EventKind::PumpingComplete { .. } => "Pumping complete",
        EventKind::DischargeComplete { .. } => "Discharge complete",
    }
}

/// Display label for a tank status.
pub const fn tank_status_label(status: TankStatus) -> &'static str {
    match status {
        TankStatus::Free => "Free",
        TankStatus::Loading => "Loading",
        TankStatus::Discharging => "Discharging",
    }
}

/// Display label for a tank's loading-ship reference: `"B{id}"` or empty.
pub fn loading_ship_label(ship: Option<ShipId>) -> String {
    ship.map_or_else(String::new, |id| format!("B{id}"))
}

#[cfg(test)]
mod tests {
    use crate::ids::TankId;

    use super::*;

    #[test]
    fn event_labels() {
        let tank = TankId::new(1);
        assert_eq!(event_label(EventKind::ShipArrival), "Ship arrival");
        assert_eq!(
            event_label(EventKind::PumpingComplete { tank }),
            "Pumping complete"
        );
        assert_eq!(
            event_label(EventKind::DischargeComplete { tank }),
            "Discharge complete"
        );
    }

    #[test]
    fn tank_status_labels() {
        assert_eq!(tank_status_label(TankStatus::Free), "Free");
        assert_eq!(tank_status_label(TankStatus::Loading), "Loading");
        assert_eq!(tank_status_label(TankStatus::Discharging), "Discharging");
    }

    #[test]
    fn loading_ship_labels() {
        assert_eq!(loading_ship_label(None), "");
        assert_eq!(loading_ship_label(Some(ShipId::new(7))), "B7");
    }
}
