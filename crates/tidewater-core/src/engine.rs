//! The discrete-event simulation engine.
//!
//! [`Engine::step`] pops the earliest pending event, advances the clock to
//! its time, dispatches on its kind, and assembles one [`SnapshotRow`]
//! describing the state vector after the event. Three event kinds drive the
//! model:
//!
//! - **Ship arrival** draws from both random streams, schedules the next
//!   arrival, and either assigns the ship to the first free tank or queues it.
//! - **Pumping complete** accrues the tank load into the discharged-tonnage
//!   total, releases the ship, and starts the tank discharging.
//! - **Discharge complete** frees the tank and, when ships are waiting,
//!   hands it straight to the longest-waiting one.
//!
//! All randomness comes from the replayable [`RandomStreams`], so a run is a
//! pure function of its configuration and draw sequences.

use tracing::{debug, info};

use tidewater_random::{exponential, RandomStreams, StreamKind};
use tidewater_types::{
    labels, Event, EventKind, RunStats, Ship, ShipId, ShipStatus, SnapshotRow, Tank,
    TankCompletion, TankId, TankStatus, TankStatusEntry,
};

use crate::config::{tank_id_for_index, InitialConditions, TerminalConfig};
use crate::error::SimulationError;
use crate::scheduler::EventQueue;

/// Last-computed per-event quantities carried between snapshots.
///
/// Each group is overwritten only by events of its originating kind, so a
/// snapshot taken after a discharge still reports the arrival and pump
/// figures of the most recent arrival. All fields start at zero.
#[derive(Debug, Clone, Copy, Default)]
struct TransientQuantities {
    arrival_draw: f64,
    inter_arrival_time: f64,
    next_arrival_time: f64,
    load_draw: f64,
    load_tonnage: f64,
    pump_duration: f64,
    pump_duration_with_startup: f64,
    pump_completion_time: f64,
    tank_load_at_pump_start: f64,
    pump_start_completion_time: f64,
    discharge_load_at_start: f64,
    discharge_completion_time: f64,
}

/// Mutable world state owned by the engine.
#[derive(Debug, Default)]
struct SimulationState {
    clock: f64,
    queue: EventQueue,
    ships: Vec<Ship>,
    tanks: Vec<Tank>,
    streams: RandomStreams,
    stats: RunStats,
    last: TransientQuantities,
}

impl SimulationState {
    /// Creates a ship with the next sequential id and appends it.
    fn spawn_ship(&mut self, load: f64, status: ShipStatus) -> ShipId {
        let ordinal = u32::try_from(self.ships.len().saturating_add(1)).unwrap_or(u32::MAX);
        let id = ShipId::new(ordinal);
        self.ships.push(Ship::new(id, load, status));
        id
    }

    // Ids double as arena positions, so lookups go straight to the slot
    // and verify the occupant before handing it out.

    fn tank(&self, id: TankId) -> Result<&Tank, SimulationError> {
        self.tanks
            .get(id.index())
            .filter(|tank| tank.id == id)
            .ok_or(SimulationError::UnknownTank { tank: id })
    }

    fn tank_mut(&mut self, id: TankId) -> Result<&mut Tank, SimulationError> {
        self.tanks
            .get_mut(id.index())
            .filter(|tank| tank.id == id)
            .ok_or(SimulationError::UnknownTank { tank: id })
    }

    fn ship(&self, id: ShipId) -> Result<&Ship, SimulationError> {
        self.ships
            .get(id.index())
            .filter(|ship| ship.id == id)
            .ok_or(SimulationError::UnknownShip { ship: id })
    }

    fn ship_mut(&mut self, id: ShipId) -> Result<&mut Ship, SimulationError> {
        self.ships
            .get_mut(id.index())
            .filter(|ship| ship.id == id)
            .ok_or(SimulationError::UnknownShip { ship: id })
    }
}

/// The terminal simulation engine.
#[derive(Debug)]
pub struct Engine {
    params: TerminalConfig,
    state: SimulationState,
}

impl Engine {
    /// Builds an engine with `tank_count` free tanks, or restores the
    /// mid-operation state described by `initial`, and schedules the first
    /// ship arrival.
    ///
    /// A non-empty described tank list takes precedence over `tank_count`:
    /// one tank is created per entry, in listing order, and a synthetic
    /// loading ship is created for every tank that starts in the loading
    /// state. The configured `first_arrival` applies regardless of whether
    /// any tanks are described.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidInitialState`] when a described
    /// tank is internally inconsistent: a free tank holding cargo, or a
    /// busy tank without a completion time.
    pub fn initialize(
        params: TerminalConfig,
        tank_count: u32,
        initial: Option<InitialConditions>,
    ) -> Result<Self, SimulationError> {
        let mut state = SimulationState::default();
        let (described, first_arrival) = match initial {
            Some(conditions) => (conditions.tanks, conditions.first_arrival),
            None => (Vec::new(), 0.0),
        };

        if described.is_empty() {
            for ordinal in 1..=tank_count {
                state
                    .tanks
                    .push(Tank::free(TankId::new(ordinal), params.tank_capacity));
            }
        } else {
            for (index, entry) in described.iter().enumerate() {
                let id = tank_id_for_index(index);
                match entry.status {
                    TankStatus::Free => {
                        if entry.current_load > 0.0 {
                            return Err(SimulationError::InvalidInitialState {
                                tank: id,
                                reason: String::from("a free tank cannot hold cargo"),
                            });
                        }
                        state.tanks.push(Tank::free(id, params.tank_capacity));
                    }
                    TankStatus::Loading => {
                        let completion = entry.completion_time.ok_or_else(|| {
                            SimulationError::InvalidInitialState {
                                tank: id,
                                reason: String::from("a loading tank needs a completion time"),
                            }
                        })?;
                        let ship = state.spawn_ship(entry.current_load, ShipStatus::Loading);
                        state.tanks.push(Tank {
                            id,
                            status: TankStatus::Loading,
                            current_load: entry.current_load,
                            capacity: params.tank_capacity,
                            loading_ship: Some(ship),
                        });
                        state.queue.schedule(Event::pumping_complete(completion, id));
                    }
                    TankStatus::Discharging => {
                        let completion = entry.completion_time.ok_or_else(|| {
                            SimulationError::InvalidInitialState {
                                tank: id,
                                reason: String::from(
                                    "a discharging tank needs a completion time",
                                ),
                            }
                        })?;
                        state.tanks.push(Tank {
                            id,
                            status: TankStatus::Discharging,
                            current_load: entry.current_load,
                            capacity: params.tank_capacity,
                            loading_ship: None,
                        });
                        state
                            .queue
                            .schedule(Event::discharge_complete(completion, id));
                    }
                }
            }
        }
        state.queue.schedule(Event::ship_arrival(first_arrival));

        info!(
            tanks = state.tanks.len(),
            ships = state.ships.len(),
            first_arrival,
            "Engine initialized"
        );
        Ok(Self { params, state })
    }

    /// Replaces both random streams with the given draw sequences.
    pub fn set_random_streams(&mut self, arrival: Vec<f64>, load: Vec<f64>) {
        self.state.streams = RandomStreams::new(arrival, load);
    }

    /// Processes the earliest pending event and reports the state after it.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::EmptyQueue`] when no events are pending;
    /// the call mutates nothing in that case, so it can be retried or used
    /// as a terminal condition. Other variants indicate an exhausted random
    /// stream or a broken internal reference; the state then reflects the
    /// mutations applied before the failure.
    pub fn step(&mut self) -> Result<SnapshotRow, SimulationError> {
        let event = self.state.queue.pop_earliest()?;
        self.state.stats.event_count = self.state.stats.event_count.saturating_add(1);
        self.state.clock = event.time;

        info!(
            event = labels::event_label(event.kind),
            number = self.state.stats.event_count,
            clock = event.time,
            "Processing event"
        );

        match event.kind {
            EventKind::ShipArrival => self.on_ship_arrival()?,
            EventKind::PumpingComplete { tank } => self.on_pumping_complete(tank)?,
            EventKind::DischargeComplete { tank } => self.on_discharge_complete(tank)?,
        }

        Ok(self.snapshot(event.kind))
    }

    /// Current simulated clock.
    #[must_use]
    pub const fn clock(&self) -> f64 {
        self.state.clock
    }

    /// Running statistics accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> RunStats {
        self.state.stats
    }

    /// All ships created so far, in arrival order.
    #[must_use]
    pub fn ships(&self) -> &[Ship] {
        &self.state.ships
    }

    /// All tanks, in id order.
    #[must_use]
    pub fn tanks(&self) -> &[Tank] {
        &self.state.tanks
    }

    /// Number of pending events.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.state.queue.len()
    }

    /// A ship arrives: draw the next inter-arrival gap and the ship's
    /// cargo class, schedule the follow-up arrival, then place the ship.
    fn on_ship_arrival(&mut self) -> Result<(), SimulationError> {
        let arrival_draw = self.state.streams.next(StreamKind::Arrival)?;
        let load_draw = self.state.streams.next(StreamKind::Load)?;

        let inter_arrival = exponential(arrival_draw, self.params.arrival_mean)?;
        let next_arrival = self.state.clock + inter_arrival;
        self.state.queue.schedule(Event::ship_arrival(next_arrival));

        let load = self.params.ship_loads.select(load_draw);

        let last = &mut self.state.last;
        last.arrival_draw = arrival_draw;
        last.inter_arrival_time = inter_arrival;
        last.next_arrival_time = next_arrival;
        last.load_draw = load_draw;
        last.load_tonnage = load;

        let free_tank = self
            .state
            .tanks
            .iter()
            .find(|tank| tank.status == TankStatus::Free)
            .map(|tank| tank.id);

        if let Some(tank) = free_tank {
            let ship = self.state.spawn_ship(load, ShipStatus::Loading);
            debug!(ship = %ship, tank = %tank, load, "Arriving ship takes a free tank");
            self.assign_ship_to_tank(ship, tank)?;
        } else {
            // The new ship is not yet in the list when the queue is
            // measured; it accounts for the +1 itself.
            let queued_before = self
                .state
                .ships
                .iter()
                .filter(|ship| ship.status == ShipStatus::Queued)
                .count();
            let ship = self.state.spawn_ship(load, ShipStatus::Queued);
            let queue_length = u32::try_from(queued_before)
                .unwrap_or(u32::MAX)
                .saturating_add(1);
            self.state.stats.max_queue_length =
                self.state.stats.max_queue_length.max(queue_length);
            info!(ship = %ship, queue_length, "No free tank, ship joins the queue");
        }
        Ok(())
    }

    /// Starts pumping `ship_id` into `tank_id` and schedules the
    /// pumping-complete event.
    ///
    /// Shared by the arrival path and the discharge-complete reassignment
    /// path, so a tank picked up by a queued ship goes through exactly the
    /// same transitions and reporting as one assigned on arrival.
    fn assign_ship_to_tank(
        &mut self,
        ship_id: ShipId,
        tank_id: TankId,
    ) -> Result<(), SimulationError> {
        let load = self.state.ship(ship_id)?.current_load;
        let pump_duration = load / self.params.pumping_rate;
        let pump_with_startup = pump_duration + self.params.pump_startup_time;
        let completion = self.state.clock + pump_with_startup;

        self.state.ship_mut(ship_id)?.status = ShipStatus::Loading;
        {
            let tank = self.state.tank_mut(tank_id)?;
            tank.status = TankStatus::Loading;
            tank.current_load = load;
            tank.loading_ship = Some(ship_id);
        }
        self.state
            .queue
            .schedule(Event::pumping_complete(completion, tank_id));

        let last = &mut self.state.last;
        last.pump_duration = pump_duration;
        last.pump_duration_with_startup = pump_with_startup;
        last.pump_completion_time = completion;
        last.tank_load_at_pump_start = load;
        last.pump_start_completion_time = completion;

        debug!(ship = %ship_id, tank = %tank_id, load, completion, "Pumping scheduled");
        Ok(())
    }

    /// Pumping into a tank finished: the cargo is committed, the ship is
    /// released, and the tank begins discharging to the refinery.
    fn on_pumping_complete(&mut self, tank_id: TankId) -> Result<(), SimulationError> {
        let (load, loading_ship) = {
            let tank = self.state.tank(tank_id)?;
            (tank.current_load, tank.loading_ship)
        };
        let ship_id = loading_ship.ok_or(SimulationError::LoadingShipMissing { tank: tank_id })?;

        // Tonnage is accrued here, when the cargo is committed to the
        // tank, not when the later discharge finishes.
        self.state.stats.total_discharged_tonnage += load;
        self.state.ship_mut(ship_id)?.status = ShipStatus::Discharged;

        let discharge_duration = load / self.params.discharge_rate;
        let completion = self.state.clock + discharge_duration;
        {
            let tank = self.state.tank_mut(tank_id)?;
            tank.status = TankStatus::Discharging;
            tank.loading_ship = None;
        }
        self.state
            .queue
            .schedule(Event::discharge_complete(completion, tank_id));

        let last = &mut self.state.last;
        last.discharge_load_at_start = load;
        last.discharge_completion_time = completion;

        info!(tank = %tank_id, ship = %ship_id, load, completion, "Pumping finished, discharge begins");
        Ok(())
    }

    /// A tank finished discharging: it empties and, when ships are
    /// waiting, immediately starts loading the longest-waiting one.
    fn on_discharge_complete(&mut self, tank_id: TankId) -> Result<(), SimulationError> {
        {
            let tank = self.state.tank_mut(tank_id)?;
            tank.status = TankStatus::Free;
            tank.current_load = 0.0;
        }

        let next_ship = self
            .state
            .ships
            .iter()
            .find(|ship| ship.status == ShipStatus::Queued)
            .map(|ship| ship.id);

        match next_ship {
            Some(ship) => {
                info!(tank = %tank_id, ship = %ship, "Discharge finished, queued ship takes the tank");
                self.assign_ship_to_tank(ship, tank_id)?;
            }
            None => {
                debug!(tank = %tank_id, "Discharge finished, tank stays free");
            }
        }
        Ok(())
    }

    /// Assembles the state vector reported for the event just processed.
    fn snapshot(&self, kind: EventKind) -> SnapshotRow {
        let per_tank_completion = self
            .state
            .tanks
            .iter()
            .map(|tank| TankCompletion {
                tank_id: tank.id,
                remaining_load: tank.current_load,
                next_completion_time: self
                    .state
                    .queue
                    .next_time_for_tank(tank.id)
                    .unwrap_or(self.state.clock),
            })
            .collect();

        let per_tank_status = self
            .state
            .tanks
            .iter()
            .map(|tank| TankStatusEntry {
                tank_id: tank.id,
                status: labels::tank_status_label(tank.status).to_owned(),
                remaining_load: tank.current_load,
                loading_ship: labels::loading_ship_label(tank.loading_ship),
            })
            .collect();

        let last = self.state.last;
        SnapshotRow {
            event_number: self.state.stats.event_count,
            clock_time: self.state.clock,
            event_label: labels::event_label(kind).to_owned(),
            arrival_draw: last.arrival_draw,
            inter_arrival_time: last.inter_arrival_time,
            next_arrival_time: last.next_arrival_time,
            load_draw: last.load_draw,
            load_tonnage: last.load_tonnage,
            pump_duration: last.pump_duration,
            pump_duration_with_startup: last.pump_duration_with_startup,
            pump_completion_time: last.pump_completion_time,
            tank_load_at_pump_start: last.tank_load_at_pump_start,
            pump_start_completion_time: last.pump_start_completion_time,
            discharge_load_at_start: last.discharge_load_at_start,
            discharge_completion_time: last.discharge_completion_time,
            per_tank_completion,
            total_discharged_tonnage: self.state.stats.total_discharged_tonnage,
            max_queue_length: self.state.stats.max_queue_length,
            per_tank_status,
        }
    }
}
