//! Replayable random streams with a circular reuse policy.
//!
//! The engine consumes two independent, operator-supplied sequences of
//! draws in `[0, 1)`: one for inter-arrival timing and one for ship-load
//! selection. `next` removes the head element, appends it back to the
//! tail, and returns it, so a finite sequence replays indefinitely in the
//! same order.
//!
//! # Determinism
//!
//! The head-then-append policy is deliberate: after one full cycle the
//! replay order is no longer random, but the whole run stays reproducible
//! from a short operator-entered digit sequence. Independent sampling
//! would break that guarantee and must not be substituted.

use std::collections::VecDeque;

/// Which of the two independent streams a draw is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Inter-arrival timing draws.
    Arrival,
    /// Ship-load selection draws.
    Load,
}

impl core::fmt::Display for StreamKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Arrival => write!(f, "arrival"),
            Self::Load => write!(f, "load"),
        }
    }
}

/// Errors raised when drawing from a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A draw was requested from an empty stream.
    #[error("{kind} random stream is exhausted")]
    Exhausted {
        /// The empty stream.
        kind: StreamKind,
    },
}

/// The pair of replayable draw sequences owned by one engine instance.
#[derive(Debug, Clone, Default)]
pub struct RandomStreams {
    /// Draws for inter-arrival timing.
    arrival: VecDeque<f64>,
    /// Draws for ship-load selection.
    load: VecDeque<f64>,
}

impl RandomStreams {
    /// Create streams from the supplied draw sequences.
    ///
    /// Draws are expected to be pre-validated into `[0, 1)` by the
    /// configuration boundary; this type only tracks emptiness.
    pub fn new(arrival: Vec<f64>, load: Vec<f64>) -> Self {
        Self {
            arrival: VecDeque::from(arrival),
            load: VecDeque::from(load),
        }
    }

    /// Take the next draw from the given stream, cycling it to the tail.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Exhausted`] if the targeted sequence is
    /// empty.
    pub fn next(&mut self, kind: StreamKind) -> Result<f64, StreamError> {
        let queue = match kind {
            StreamKind::Arrival => &mut self.arrival,
            StreamKind::Load => &mut self.load,
        };
        let draw = queue.pop_front().ok_or(StreamError::Exhausted { kind })?;
        queue.push_back(draw);
        Ok(draw)
    }

    /// Number of draws currently in the given stream.
    pub fn len(&self, kind: StreamKind) -> usize {
        match kind {
            StreamKind::Arrival => self.arrival.len(),
            StreamKind::Load => self.load.len(),
        }
    }

    /// Whether the given stream holds no draws.
    pub fn is_empty(&self, kind: StreamKind) -> bool {
        self.len(kind) == 0
    }
}

/// Convert operator-entered integers in `[0, 99]` to draws in `[0, 1)`.
///
/// This is the conversion the configuration boundary applies to the
/// two-digit sequences users type in: each digit pair `d` becomes
/// `d / 100`.
pub fn draws_from_percent_digits(digits: &[u8]) -> Vec<f64> {
    digits.iter().map(|&d| f64::from(d) / 100.0).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn draws_cycle_head_to_tail() {
        let mut streams = RandomStreams::new(vec![0.1, 0.2, 0.3], vec![0.9]);

        assert!((streams.next(StreamKind::Arrival).unwrap() - 0.1).abs() < f64::EPSILON);
        assert!((streams.next(StreamKind::Arrival).unwrap() - 0.2).abs() < f64::EPSILON);
        assert!((streams.next(StreamKind::Arrival).unwrap() - 0.3).abs() < f64::EPSILON);
        // Fourth draw wraps back to the head value.
        assert!((streams.next(StreamKind::Arrival).unwrap() - 0.1).abs() < f64::EPSILON);

        // The load stream cycles independently.
        assert!((streams.next(StreamKind::Load).unwrap() - 0.9).abs() < f64::EPSILON);
        assert!((streams.next(StreamKind::Load).unwrap() - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn nth_and_nth_plus_k_draws_are_identical() {
        // Circularity property over a generated stream of length k:
        // the n-th and (n+k)-th draws must match exactly.
        let mut rng = rand::rng();
        let draws: Vec<f64> = (0..1000).map(|_| rng.random_range(0.0..1.0)).collect();
        let k = draws.len();

        let mut streams = RandomStreams::new(draws, vec![0.5]);
        let first_cycle: Vec<f64> = (0..k)
            .map(|_| streams.next(StreamKind::Arrival).unwrap())
            .collect();
        let second_cycle: Vec<f64> = (0..k)
            .map(|_| streams.next(StreamKind::Arrival).unwrap())
            .collect();

        for (a, b) in first_cycle.iter().zip(&second_cycle) {
            assert!((a - b).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn empty_stream_is_exhausted() {
        let mut streams = RandomStreams::new(Vec::new(), vec![0.5]);
        assert_eq!(
            streams.next(StreamKind::Arrival),
            Err(StreamError::Exhausted {
                kind: StreamKind::Arrival
            })
        );
        // The other stream is unaffected.
        assert!(streams.next(StreamKind::Load).is_ok());
    }

    #[test]
    fn exhaustion_is_reported_per_stream() {
        let mut streams = RandomStreams::default();
        let err = streams.next(StreamKind::Load).unwrap_err();
        assert_eq!(
            err,
            StreamError::Exhausted {
                kind: StreamKind::Load
            }
        );
        assert_eq!(err.to_string(), "load random stream is exhausted");
    }

    #[test]
    fn percent_digits_become_unit_draws() {
        let draws = draws_from_percent_digits(&[0, 50, 99]);
        assert_eq!(draws.len(), 3);
        assert!(draws.first().unwrap().abs() < f64::EPSILON);
        assert!((draws.get(1).unwrap() - 0.50).abs() < f64::EPSILON);
        assert!((draws.get(2).unwrap() - 0.99).abs() < f64::EPSILON);
        // All converted draws stay inside [0, 1).
        assert!(draws.iter().all(|d| (0.0..1.0).contains(d)));
    }
}
