//! Core simulation logic for the Tidewater fuel terminal.
//!
//! The terminal model: tanker ships arrive at random intervals and pump
//! their cargo into coastal holding tanks, which then discharge to the
//! refinery pipeline. The engine advances event by event over a simulated
//! clock and reports a full state vector after each one.
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration and typed initial conditions
//! - [`scheduler`] -- The pending-event queue
//! - [`engine`] -- The event dispatch loop and state mutation
//! - [`error`] -- The simulation error taxonomy

pub mod config;
pub mod engine;
pub mod error;
pub mod scheduler;

pub use config::{ConfigError, InitialConditions, InitialTank, SimulationConfig, TerminalConfig};
pub use engine::Engine;
pub use error::SimulationError;
pub use scheduler::EventQueue;
