//! Rate engine: instantaneous transition rates for the current state.
//!
//! Builds the n×2n weight matrix of the competing exponential clocks
//! (departure slots in the left half, trip-completion slots in the right)
//! and its total, which is the rate of leaving the current state.

use crate::params::NetworkParams;
use crate::state::FleetState;

/// All enabled transition rates for one state, plus their sum.
///
/// Row-major n×2n: slot `(i, j)` with `j < n` is "a bike departs `i`
/// bound for `j`"; slot `(i, n + d)` is "an in-transit `i` -> `d` trip
/// completes".
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRates {
    stations: usize,
    weights: Vec<f64>,
    total: f64,
}

impl TransitionRates {
    /// Number of stations the matrix was built for.
    pub fn stations(&self) -> usize {
        self.stations
    }

    /// Sum of all slot weights: the rate of leaving the current state.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Rate of "a bike departs `from` bound for `to`".
    pub fn departure(&self, from: usize, to: usize) -> f64 {
        self.weights[from * 2 * self.stations + to]
    }

    /// Rate of "an in-transit `from` -> `to` trip completes".
    pub fn completion(&self, from: usize, to: usize) -> f64 {
        self.weights[from * 2 * self.stations + self.stations + to]
    }

    /// Flat slot weights, row-major, for categorical sampling.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// Compute every enabled transition's instantaneous rate. Pure.
///
/// A station with zero docked bikes emits no departures, so its departure
/// slots are zero. Completion slots scale with the in-transit count: k
/// independent rate-μ clocks race as a single rate-k·μ clock.
pub fn compute_rates(state: &FleetState, params: &NetworkParams) -> TransitionRates {
    let n = params.stations();
    debug_assert_eq!(state.stations(), n, "state/params dimension mismatch");

    let mut weights = vec![0.0; n * 2 * n];
    let mut total = 0.0;
    for i in 0..n {
        let lam = if state.docked(i) > 0 {
            params.departure_intensity(i)
        } else {
            0.0
        };
        for j in 0..n {
            let depart = lam * params.routing_probability(i, j);
            let arrive = f64::from(state.in_transit(i, j)) * params.completion_rate(i, j);
            weights[i * 2 * n + j] = depart;
            weights[i * 2 * n + n + j] = arrive;
            total += depart + arrive;
        }
    }

    TransitionRates {
        stations: n,
        weights,
        total,
    }
}
