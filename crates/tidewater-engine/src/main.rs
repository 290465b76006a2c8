//! Runner binary for the Tidewater terminal simulation.
//!
//! Wires the configuration, random streams, and engine together and runs
//! the event loop for the configured number of events, writing one JSON
//! snapshot row per event to stdout. Logs go to stderr via `tracing`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `tidewater-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the engine, restoring initial conditions when configured
//! 4. Feed the replayable random streams from the configured digit tables
//! 5. Run the event loop and emit snapshot rows
//! 6. Log the run totals

mod error;

use std::path::Path;

use tidewater_core::{Engine, SimulationConfig};
use tidewater_random::draws_from_percent_digits;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::RunnerError;

/// Application entry point for the terminal simulation runner.
///
/// # Errors
///
/// Returns an error if configuration loading, engine initialization, or
/// the event loop fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    // Env filter wins over the config file when set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    info!("tidewater-engine starting");
    info!(
        arrival_mean = config.terminal.arrival_mean,
        pumping_rate = config.terminal.pumping_rate,
        discharge_rate = config.terminal.discharge_rate,
        tanks = config.tanks.count,
        max_events = config.run.max_events,
        "Configuration loaded"
    );

    let row_count = run(&config)?;
    info!(rows = row_count, "tidewater-engine shutdown complete");
    Ok(())
}

/// Build the engine from `config` and process the configured number of
/// events, writing one JSON row per event to stdout.
fn run(config: &SimulationConfig) -> Result<u64, RunnerError> {
    let initial = config.tanks.to_initial_conditions()?;
    let mut engine =
        Engine::initialize(config.terminal.clone(), config.tanks.count, Some(initial))?;
    engine.set_random_streams(
        draws_from_percent_digits(&config.random.arrival_digits),
        draws_from_percent_digits(&config.random.load_digits),
    );

    let mut rows = 0_u64;
    for _ in 0..config.run.max_events {
        let row = engine.step()?;
        let line = serde_json::to_string(&row)?;
        println!("{line}");
        rows = rows.saturating_add(1);
    }

    let stats = engine.stats();
    info!(
        events = stats.event_count,
        total_discharged_tonnage = stats.total_discharged_tonnage,
        max_queue_length = stats.max_queue_length,
        clock = engine.clock(),
        "Run complete"
    );
    Ok(rows)
}

/// Load the simulation configuration from `tidewater-config.yaml`.
///
/// Looks for the config file relative to the current working directory
/// and falls back to the reference terminal defaults when it is absent.
fn load_config() -> Result<SimulationConfig, RunnerError> {
    let config_path = Path::new("tidewater-config.yaml");
    if config_path.exists() {
        let config = SimulationConfig::from_file(config_path)?;
        Ok(config)
    } else {
        Ok(SimulationConfig::default())
    }
}
