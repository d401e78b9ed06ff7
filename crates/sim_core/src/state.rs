//! Fleet state: where every bike is at one instant.
//!
//! An n×n matrix of counts. The diagonal holds bikes docked at each
//! station; off-diagonal `[i][j]` holds bikes in transit from i to j.
//! Snapshots are immutable once recorded in a trajectory; events build a
//! new snapshot instead of mutating in place.

use crate::error::SimError;

/// Snapshot of the fleet at one instant.
///
/// Counts are unsigned, so the non-negativity invariant is structural; the
/// checked invariant is that the shape matches the parameter set's station
/// count. The entry sum (total fleet size) is constant across a run:
/// events only move bikes between the docked and in-transit buckets.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FleetState {
    stations: usize,
    /// Row-major n×n counts.
    counts: Vec<u32>,
}

impl FleetState {
    /// Build a state from nested rows. Fails if the rows are not square.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, SimError> {
        let stations = rows.len();
        let mut counts = Vec::with_capacity(stations * stations);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != stations {
                return Err(SimError::InvalidStateInvariant(format!(
                    "state row {i} has {} columns, expected {stations}",
                    row.len()
                )));
            }
            counts.extend_from_slice(row);
        }
        Ok(Self { stations, counts })
    }

    /// An empty network of `stations` stations (zero fleet).
    pub fn zero(stations: usize) -> Self {
        Self {
            stations,
            counts: vec![0; stations * stations],
        }
    }

    /// Number of stations (matrix dimension).
    pub fn stations(&self) -> usize {
        self.stations
    }

    /// Bikes docked at station `i`.
    pub fn docked(&self, i: usize) -> u32 {
        self.counts[i * self.stations + i]
    }

    /// Bikes currently in transit from `from` to `to`.
    pub fn in_transit(&self, from: usize, to: usize) -> u32 {
        self.counts[from * self.stations + to]
    }

    /// Sum of all entries: the total fleet size.
    pub fn total_bikes(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    pub(crate) fn get(&self, i: usize, j: usize) -> u32 {
        self.counts[i * self.stations + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: u32) {
        self.counts[i * self.stations + j] = value;
    }
}
