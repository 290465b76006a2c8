//! State-vector reporting records emitted after each event.
//!
//! One [`SnapshotRow`] is produced per processed event and rendered by the
//! presentation layer as one table row. The transient per-event quantities
//! (arrival, pump, and discharge groups) retain the value computed by the
//! most recent event of their originating kind rather than resetting to
//! zero between events; they start at zero before the first occurrence.
//! This retention is part of the reporting contract.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::TankId;

/// Running statistics accumulated across a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RunStats {
    /// Number of events processed so far.
    pub event_count: u64,
    /// Tonnage committed to discharge, accrued at pumping completion.
    pub total_discharged_tonnage: f64,
    /// Largest number of ships ever simultaneously queued.
    pub max_queue_length: u32,
}

/// Pending-completion information for one tank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TankCompletion {
    /// The tank.
    pub tank_id: TankId,
    /// Tonnage currently held by the tank.
    pub remaining_load: f64,
    /// Time of the tank's next pending event, or the current clock when
    /// the tank has none (a transiently free tank).
    pub next_completion_time: f64,
}

/// Display-ready status of one tank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TankStatusEntry {
    /// The tank.
    pub tank_id: TankId,
    /// Display label for the tank status.
    pub status: String,
    /// Tonnage currently held by the tank.
    pub remaining_load: f64,
    /// Label of the ship pumping into this tank (`"B{id}"`), or empty.
    pub loading_ship: String,
}

/// The state vector reported after processing one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SnapshotRow {
    /// Ordinal of the processed event (1-based).
    pub event_number: u64,
    /// Simulated clock after the event.
    pub clock_time: f64,
    /// Display label of the processed event.
    pub event_label: String,

    /// Draw consumed from the arrival stream by the latest arrival.
    pub arrival_draw: f64,
    /// Inter-arrival duration computed from `arrival_draw`.
    pub inter_arrival_time: f64,
    /// Absolute clock time of the next scheduled arrival.
    pub next_arrival_time: f64,

    /// Draw consumed from the load stream by the latest arrival.
    pub load_draw: f64,
    /// Cargo tonnage selected for the latest ship.
    pub load_tonnage: f64,
    /// Pumping duration for the latest tank assignment.
    pub pump_duration: f64,
    /// Pumping duration including the pump startup constant.
    pub pump_duration_with_startup: f64,
    /// Absolute clock time at which the latest pumping finishes.
    pub pump_completion_time: f64,
    /// Tank load recorded when the latest pumping started.
    pub tank_load_at_pump_start: f64,
    /// Completion time recorded when the latest pumping started.
    pub pump_start_completion_time: f64,

    /// Tank load recorded when the latest discharge started.
    pub discharge_load_at_start: f64,
    /// Absolute clock time at which the latest discharge finishes.
    pub discharge_completion_time: f64,

    /// Per-tank pending-completion information.
    pub per_tank_completion: Vec<TankCompletion>,

    /// Tonnage committed to discharge so far.
    pub total_discharged_tonnage: f64,
    /// Largest number of ships ever simultaneously queued.
    pub max_queue_length: u32,

    /// Display-ready per-tank status list.
    pub per_tank_status: Vec<TankStatusEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_stats_default_is_zeroed() {
        let stats = RunStats::default();
        assert_eq!(stats.event_count, 0);
        assert_eq!(stats.max_queue_length, 0);
        assert!(stats.total_discharged_tonnage.abs() < f64::EPSILON);
    }

    #[test]
    fn snapshot_row_serializes_per_tank_lists() {
        let row = SnapshotRow {
            event_number: 1,
            clock_time: 0.0,
            event_label: String::from("Ship arrival"),
            arrival_draw: 0.5,
            inter_arrival_time: 0.1,
            next_arrival_time: 0.1,
            load_draw: 0.1,
            load_tonnage: 15_000.0,
            pump_duration: 1.5,
            pump_duration_with_startup: 2.0,
            pump_completion_time: 2.0,
            tank_load_at_pump_start: 15_000.0,
            pump_start_completion_time: 2.0,
            discharge_load_at_start: 0.0,
            discharge_completion_time: 0.0,
            per_tank_completion: vec![TankCompletion {
                tank_id: TankId::new(1),
                remaining_load: 15_000.0,
                next_completion_time: 2.0,
            }],
            total_discharged_tonnage: 0.0,
            max_queue_length: 0,
            per_tank_status: vec![TankStatusEntry {
                tank_id: TankId::new(1),
                status: String::from("Loading"),
                remaining_load: 15_000.0,
                loading_ship: String::from("B1"),
            }],
        };

        let json = serde_json::to_string(&row).ok();
        assert!(json.is_some());
        let restored: Option<SnapshotRow> =
            json.as_deref().and_then(|j| serde_json::from_str(j).ok());
        assert_eq!(restored, Some(row));
    }
}
