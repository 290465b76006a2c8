//! Configuration loading and typed config structures for the Tidewater simulation.
//!
//! The canonical configuration lives in `tidewater-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads and validates the file.

use std::path::Path;

use serde::Deserialize;
use tidewater_types::{TankId, TankStatus};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A configuration value is syntactically valid YAML but semantically wrong.
    #[error("invalid config value: {reason}")]
    Invalid {
        /// What was wrong with the value.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `tidewater-config.yaml`. All fields have
/// defaults matching the reference terminal parameters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Terminal rates and magnitudes.
    #[serde(default)]
    pub terminal: TerminalConfig,

    /// Tank count and optional mid-operation starting state.
    #[serde(default)]
    pub tanks: TanksConfig,

    /// Replayable random draw sequences.
    #[serde(default)]
    pub random: RandomConfig,

    /// Run boundary parameters.
    #[serde(default)]
    pub run: RunConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// Terminal rates and magnitudes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TerminalConfig {
    /// Mean inter-arrival time between ships, in hours.
    #[serde(default = "default_arrival_mean")]
    pub arrival_mean: f64,

    /// Pumping throughput from ship to tank, in tons per hour.
    #[serde(default = "default_pumping_rate")]
    pub pumping_rate: f64,

    /// Fixed startup overhead added to every pumping operation, in hours.
    #[serde(default = "default_pump_startup_time")]
    pub pump_startup_time: f64,

    /// Discharge throughput from tank to the pipeline, in tons per hour.
    #[serde(default = "default_discharge_rate")]
    pub discharge_rate: f64,

    /// Storage capacity of each tank, in tons.
    #[serde(default = "default_tank_capacity")]
    pub tank_capacity: f64,

    /// Cargo tonnage for each ship size class.
    #[serde(default)]
    pub ship_loads: ShipLoadsConfig,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            arrival_mean: default_arrival_mean(),
            pumping_rate: default_pumping_rate(),
            pump_startup_time: default_pump_startup_time(),
            discharge_rate: default_discharge_rate(),
            tank_capacity: default_tank_capacity(),
            ship_loads: ShipLoadsConfig::default(),
        }
    }
}

/// Cargo tonnage for each ship size class.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShipLoadsConfig {
    /// Load carried by a small ship, in tons.
    #[serde(default = "default_small_load")]
    pub small: f64,

    /// Load carried by a medium ship, in tons.
    #[serde(default = "default_medium_load")]
    pub medium: f64,

    /// Load carried by a large ship, in tons.
    #[serde(default = "default_large_load")]
    pub large: f64,
}

impl ShipLoadsConfig {
    /// Maps a uniform draw in `[0, 1)` to a ship load.
    ///
    /// The unit interval is split into three equal bins with inclusive
    /// upper edges, so a draw of exactly one third selects a small ship.
    #[must_use]
    pub const fn select(&self, draw: f64) -> f64 {
        if draw <= 1.0 / 3.0 {
            self.small
        } else if draw <= 2.0 / 3.0 {
            self.medium
        } else {
            self.large
        }
    }
}

impl Default for ShipLoadsConfig {
    fn default() -> Self {
        Self {
            small: default_small_load(),
            medium: default_medium_load(),
            large: default_large_load(),
        }
    }
}

/// Tank count and optional mid-operation starting state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TanksConfig {
    /// Number of storage tanks at the terminal.
    #[serde(default = "default_tank_count")]
    pub count: u32,

    /// Clock time of the first ship arrival, in hours.
    #[serde(default)]
    pub first_arrival: f64,

    /// Per-tank starting state. Empty means every tank starts free.
    #[serde(default)]
    pub initial: Vec<InitialTankConfig>,
}

impl TanksConfig {
    /// Converts this section into typed initial conditions.
    ///
    /// The per-tank list may be empty; `first_arrival` is carried either
    /// way, so a configured arrival offset applies even when every tank
    /// starts free.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a tank status string is not
    /// one of `free`, `loading`, or `discharging`.
    pub fn to_initial_conditions(&self) -> Result<InitialConditions, ConfigError> {
        let mut tanks = Vec::with_capacity(self.initial.len());
        for entry in &self.initial {
            tanks.push(InitialTank {
                status: parse_tank_status(&entry.status)?,
                current_load: entry.current_load,
                completion_time: entry.completion_time,
            });
        }
        Ok(InitialConditions {
            tanks,
            first_arrival: self.first_arrival,
        })
    }
}

impl Default for TanksConfig {
    fn default() -> Self {
        Self {
            count: default_tank_count(),
            first_arrival: 0.0,
            initial: Vec::new(),
        }
    }
}

/// Starting state of a single tank as written in the YAML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InitialTankConfig {
    /// Status string: `free`, `loading`, or `discharging`.
    pub status: String,

    /// Tons already held by the tank.
    #[serde(default)]
    pub current_load: f64,

    /// Clock time at which the ongoing operation finishes, if any.
    #[serde(default)]
    pub completion_time: Option<f64>,
}

/// Typed starting state handed to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialConditions {
    /// Starting state for each tank, in tank-id order. Empty means the
    /// engine creates its configured count of free tanks instead.
    pub tanks: Vec<InitialTank>,

    /// Clock time of the first ship arrival, in hours.
    pub first_arrival: f64,
}

/// Typed starting state of a single tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialTank {
    /// Status the tank starts in.
    pub status: TankStatus,

    /// Tons already held by the tank.
    pub current_load: f64,

    /// Clock time at which the ongoing operation finishes, if any.
    pub completion_time: Option<f64>,
}

fn parse_tank_status(raw: &str) -> Result<TankStatus, ConfigError> {
    match raw {
        "free" => Ok(TankStatus::Free),
        "loading" => Ok(TankStatus::Loading),
        "discharging" | "unloading" => Ok(TankStatus::Discharging),
        other => Err(ConfigError::Invalid {
            reason: format!("unknown tank status {other:?}"),
        }),
    }
}

/// Replayable random draw sequences.
///
/// Draws are written as integer percent digits (0 to 99) and divided
/// by 100 when fed to the engine, so a YAML file can carry a table of
/// hand-picked draws without float noise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RandomConfig {
    /// Percent digits for the arrival stream.
    #[serde(default = "default_arrival_digits")]
    pub arrival_digits: Vec<u8>,

    /// Percent digits for the load stream.
    #[serde(default = "default_load_digits")]
    pub load_digits: Vec<u8>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            arrival_digits: default_arrival_digits(),
            load_digits: default_load_digits(),
        }
    }
}

/// Run boundary parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Number of events to process before the run stops.
    #[serde(default = "default_max_events")]
    pub max_events: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_events: default_max_events(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Tank identifiers are assigned in listing order starting at 1.
#[must_use]
pub fn tank_id_for_index(index: usize) -> TankId {
    let ordinal = u32::try_from(index.saturating_add(1)).unwrap_or(u32::MAX);
    TankId::new(ordinal)
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_arrival_mean() -> f64 {
    0.125
}

const fn default_pumping_rate() -> f64 {
    10_000.0
}

const fn default_pump_startup_time() -> f64 {
    0.5
}

const fn default_discharge_rate() -> f64 {
    4_000.0
}

const fn default_tank_capacity() -> f64 {
    70_000.0
}

const fn default_small_load() -> f64 {
    15_000.0
}

const fn default_medium_load() -> f64 {
    20_000.0
}

const fn default_large_load() -> f64 {
    25_000.0
}

const fn default_tank_count() -> u32 {
    5
}

fn default_arrival_digits() -> Vec<u8> {
    vec![26, 81, 53, 12, 94, 40, 67, 5, 73, 38]
}

fn default_load_digits() -> Vec<u8> {
    vec![61, 9, 48, 88, 17, 70, 33, 95, 2, 56]
}

const fn default_max_events() -> u64 {
    20
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn default_config_matches_reference_terminal() {
        let config = SimulationConfig::default();
        assert_eq!(config.terminal.arrival_mean, 0.125);
        assert_eq!(config.terminal.pumping_rate, 10_000.0);
        assert_eq!(config.terminal.pump_startup_time, 0.5);
        assert_eq!(config.terminal.discharge_rate, 4_000.0);
        assert_eq!(config.terminal.tank_capacity, 70_000.0);
        assert_eq!(config.terminal.ship_loads.small, 15_000.0);
        assert_eq!(config.terminal.ship_loads.medium, 20_000.0);
        assert_eq!(config.terminal.ship_loads.large, 25_000.0);
        assert_eq!(config.tanks.count, 5);
        assert_eq!(config.run.max_events, 20);
    }

    #[test]
    fn load_bins_have_inclusive_upper_edges() {
        let loads = ShipLoadsConfig::default();
        assert_eq!(loads.select(0.0), 15_000.0);
        assert_eq!(loads.select(1.0 / 3.0), 15_000.0);
        assert_eq!(loads.select(0.34), 20_000.0);
        assert_eq!(loads.select(2.0 / 3.0), 20_000.0);
        assert_eq!(loads.select(0.67), 25_000.0);
        assert_eq!(loads.select(0.99), 25_000.0);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
terminal:
  arrival_mean: 0.25
  pumping_rate: 8000.0
  pump_startup_time: 0.25
  discharge_rate: 5000.0
  tank_capacity: 60000.0
  ship_loads:
    small: 10000.0
    medium: 16000.0
    large: 22000.0

tanks:
  count: 3
  first_arrival: 0.5
  initial:
    - status: loading
      current_load: 20000.0
      completion_time: 3.0
    - status: discharging
      current_load: 15000.0
      completion_time: 1.5
    - status: free

random:
  arrival_digits: [50, 25, 75]
  load_digits: [10, 40, 90]

run:
  max_events: 12

logging:
  level: "debug"
"#;

        let config = SimulationConfig::parse(yaml).unwrap();
        assert_eq!(config.terminal.arrival_mean, 0.25);
        assert_eq!(config.terminal.ship_loads.large, 22_000.0);
        assert_eq!(config.tanks.count, 3);
        assert_eq!(config.tanks.initial.len(), 3);
        assert_eq!(config.random.arrival_digits, vec![50, 25, 75]);
        assert_eq!(config.run.max_events, 12);
        assert_eq!(config.logging.level, "debug");

        let initial = config.tanks.to_initial_conditions().unwrap();
        assert_eq!(initial.first_arrival, 0.5);
        assert_eq!(initial.tanks.first().unwrap().status, TankStatus::Loading);
        assert_eq!(
            initial.tanks.get(1).unwrap().completion_time,
            Some(1.5)
        );
        assert_eq!(initial.tanks.get(2).unwrap().status, TankStatus::Free);
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "tanks:\n  count: 2\n";
        let config = SimulationConfig::parse(yaml).unwrap();

        // Count is overridden
        assert_eq!(config.tanks.count, 2);
        // Everything else uses defaults
        assert_eq!(config.terminal.pumping_rate, 10_000.0);
        assert_eq!(config.run.max_events, 20);

        let initial = config.tanks.to_initial_conditions().unwrap();
        assert!(initial.tanks.is_empty());
        assert_eq!(initial.first_arrival, 0.0);
    }

    #[test]
    fn first_arrival_survives_without_initial_tanks() {
        let yaml = "tanks:\n  count: 2\n  first_arrival: 2.0\n";
        let config = SimulationConfig::parse(yaml).unwrap();

        let initial = config.tanks.to_initial_conditions().unwrap();
        assert!(initial.tanks.is_empty());
        assert_eq!(initial.first_arrival, 2.0);
    }

    #[test]
    fn unknown_tank_status_is_rejected() {
        let yaml = "tanks:\n  initial:\n    - status: drained\n";
        let config = SimulationConfig::parse(yaml).unwrap();
        let result = config.tanks.to_initial_conditions();
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn tank_ids_start_at_one() {
        assert_eq!(tank_id_for_index(0), TankId::new(1));
        assert_eq!(tank_id_for_index(4), TankId::new(5));
    }
}
