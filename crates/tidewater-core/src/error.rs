//! Error types raised by the scheduler and the simulation engine.

use tidewater_random::{DomainError, StreamError};
use tidewater_types::{ShipId, TankId};

/// Errors raised while initializing or advancing a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// An initial tank description is internally inconsistent.
    #[error("invalid initial state for tank {tank}: {reason}")]
    InvalidInitialState {
        /// Tank whose description was rejected.
        tank: TankId,
        /// Human-readable explanation of the inconsistency.
        reason: String,
    },

    /// A random stream could not supply the next draw.
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// The event queue is empty; the simulation has run to exhaustion.
    #[error("event queue is empty, no further events can be processed")]
    EmptyQueue,

    /// A pending event references a tank the terminal does not have.
    #[error("event references unknown tank {tank}")]
    UnknownTank {
        /// The dangling tank reference.
        tank: TankId,
    },

    /// A tank references a ship the simulation has never created.
    #[error("tank references unknown ship {ship}")]
    UnknownShip {
        /// The dangling ship reference.
        ship: ShipId,
    },

    /// A loading tank completed pumping without a ship attached.
    #[error("tank {tank} finished pumping with no loading ship attached")]
    LoadingShipMissing {
        /// The tank whose ship reference was absent.
        tank: TankId,
    },

    /// A distribution was evaluated outside its mathematical domain.
    #[error(transparent)]
    Distribution(#[from] DomainError),
}
