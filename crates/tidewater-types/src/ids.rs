//! Type-safe identifier wrappers for terminal entities.
//!
//! Ships and tanks are numbered sequentially starting at 1, and an id is
//! never reused within a run. Strong typing prevents accidental mixing of
//! the two number spaces at compile time. Ids double as arena positions:
//! the entity with id `n` sits at index `n - 1` in its owning list.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around a 1-based sequential ordinal.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(u32);

        impl $name {
            /// Create an identifier from a 1-based ordinal.
            pub const fn new(ordinal: u32) -> Self {
                Self(ordinal)
            }

            /// Return the 1-based ordinal value.
            pub const fn get(self) -> u32 {
                self.0
            }

            /// Zero-based position of this entity in its owning arena.
            pub fn index(self) -> usize {
                usize::try_from(self.0).map_or(0, |n| n.saturating_sub(1))
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a tanker ship, assigned in arrival order.
    ShipId
}

define_id! {
    /// Unique identifier for a coastal holding tank (1..=N for a run).
    TankId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_one_based() {
        let ship = ShipId::new(1);
        assert_eq!(ship.get(), 1);
        assert_eq!(ship.index(), 0);

        let tank = TankId::new(4);
        assert_eq!(tank.get(), 4);
        assert_eq!(tank.index(), 3);
    }

    #[test]
    fn id_display_is_plain_ordinal() {
        assert_eq!(TankId::new(2).to_string(), "2");
        assert_eq!(ShipId::new(17).to_string(), "17");
    }

    #[test]
    fn id_roundtrip_serde() {
        let original = ShipId::new(9);
        let json = serde_json::to_string(&original).ok();
        assert!(json.is_some());
        let restored: Result<ShipId, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(original));
    }

    #[test]
    fn ids_order_by_ordinal() {
        assert!(TankId::new(1) < TankId::new(2));
        assert!(ShipId::new(10) > ShipId::new(3));
    }
}
