//! Pending-event queue for the discrete-event scheduler.
//!
//! Events are stored in insertion order and popped by earliest time.
//! Ties on time resolve to the earlier insertion, so the processing
//! order of simultaneous events is fully deterministic.

use tidewater_types::{Event, TankId};

use crate::error::SimulationError;

/// Queue of pending future events.
#[derive(Debug, Default, Clone)]
pub struct EventQueue {
    pending: Vec<Event>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Appends an event to the queue.
    pub fn schedule(&mut self, event: Event) {
        self.pending.push(event);
    }

    /// Removes and returns the pending event with the smallest time.
    ///
    /// A strict comparison keeps the first-inserted event ahead of any
    /// later event scheduled for the same instant.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::EmptyQueue`] when no events are pending.
    /// The queue is not mutated in that case, so repeated calls keep
    /// failing with the same error.
    pub fn pop_earliest(&mut self) -> Result<Event, SimulationError> {
        let mut earliest: Option<(usize, f64)> = None;
        for (index, event) in self.pending.iter().enumerate() {
            let improves = earliest.is_none_or(|(_, time)| event.time < time);
            if improves {
                earliest = Some((index, event.time));
            }
        }
        let (index, _) = earliest.ok_or(SimulationError::EmptyQueue)?;
        Ok(self.pending.remove(index))
    }

    /// Returns the time of the first pending event referencing `tank`,
    /// scanning in insertion order.
    #[must_use]
    pub fn next_time_for_tank(&self, tank: TankId) -> Option<f64> {
        self.pending
            .iter()
            .find(|event| event.tank_id() == Some(tank))
            .map(|event| event.time)
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the queue holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use tidewater_types::{EventKind, TankId};

    use super::*;

    #[test]
    fn pops_events_in_time_order() {
        let mut queue = EventQueue::new();
        queue.schedule(Event::ship_arrival(3.0));
        queue.schedule(Event::pumping_complete(1.0, TankId::new(1)));
        queue.schedule(Event::discharge_complete(2.0, TankId::new(2)));

        assert_eq!(queue.pop_earliest().unwrap().time, 1.0);
        assert_eq!(queue.pop_earliest().unwrap().time, 2.0);
        assert_eq!(queue.pop_earliest().unwrap().time, 3.0);
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_times_resolve_to_insertion_order() {
        let mut queue = EventQueue::new();
        queue.schedule(Event::pumping_complete(5.0, TankId::new(1)));
        queue.schedule(Event::discharge_complete(5.0, TankId::new(2)));
        queue.schedule(Event::ship_arrival(5.0));

        let first = queue.pop_earliest().unwrap();
        assert_eq!(first.kind, EventKind::PumpingComplete { tank: TankId::new(1) });
        let second = queue.pop_earliest().unwrap();
        assert_eq!(second.kind, EventKind::DischargeComplete { tank: TankId::new(2) });
        let third = queue.pop_earliest().unwrap();
        assert_eq!(third.kind, EventKind::ShipArrival);
    }

    #[test]
    fn empty_queue_keeps_failing() {
        let mut queue = EventQueue::new();
        assert!(matches!(
            queue.pop_earliest(),
            Err(SimulationError::EmptyQueue)
        ));
        assert!(matches!(
            queue.pop_earliest(),
            Err(SimulationError::EmptyQueue)
        ));
    }

    #[test]
    fn next_time_for_tank_scans_insertion_order() {
        let mut queue = EventQueue::new();
        let tank = TankId::new(3);
        queue.schedule(Event::ship_arrival(0.5));
        queue.schedule(Event::pumping_complete(4.0, tank));
        queue.schedule(Event::discharge_complete(2.0, tank));

        assert_eq!(queue.next_time_for_tank(tank), Some(4.0));
        assert_eq!(queue.next_time_for_tank(TankId::new(9)), None);
    }
}
