//! Transition events: the two ways a bike moves between buckets.

use crate::state::FleetState;

/// One CTMC transition, decoded from a sampled rate-matrix slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// A bike leaves the dock at `from` and becomes in-transit toward `to`.
    Departure { from: usize, to: usize },
    /// An in-transit `from` -> `to` bike completes its trip and docks at `to`.
    Arrival { from: usize, to: usize },
}

impl TransitionEvent {
    /// Decode a flat rate-matrix index (row-major n×2n) into an event.
    ///
    /// Columns 0..n are departures keyed by destination; columns n..2n are
    /// arrivals with the true destination at column − n.
    pub fn from_slot(slot: usize, stations: usize) -> Self {
        let from = slot / (2 * stations);
        let col = slot % (2 * stations);
        if col < stations {
            TransitionEvent::Departure { from, to: col }
        } else {
            TransitionEvent::Arrival {
                from,
                to: col - stations,
            }
        }
    }

    /// Apply the event to a snapshot, producing the next snapshot.
    ///
    /// The input is never mutated. The decremented bucket is non-empty by
    /// construction: a slot is only sampled when its rate is positive, and
    /// both event rates carry a factor that vanishes with the bucket count.
    pub fn apply(&self, state: &FleetState) -> FleetState {
        let mut next = state.clone();
        match *self {
            TransitionEvent::Departure { from, to } => {
                debug_assert!(next.get(from, from) > 0, "departure from empty station");
                next.set(from, from, next.get(from, from) - 1);
                next.set(from, to, next.get(from, to) + 1);
            }
            TransitionEvent::Arrival { from, to } => {
                debug_assert!(next.get(from, to) > 0, "arrival without a bike in transit");
                next.set(from, to, next.get(from, to) - 1);
                next.set(to, to, next.get(to, to) + 1);
            }
        }
        next
    }
}
