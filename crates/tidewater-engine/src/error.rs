//! Error types for the runner binary.
//!
//! [`RunnerError`] is the top-level error type that wraps all possible
//! failure modes during startup and the event loop.

/// Top-level error for the runner binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: tidewater_core::ConfigError,
    },

    /// The simulation refused to initialize or advance.
    #[error("simulation error: {source}")]
    Simulation {
        /// The underlying simulation error.
        #[from]
        source: tidewater_core::SimulationError,
    },

    /// A snapshot row could not be serialized for output.
    #[error("report error: {source}")]
    Report {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
