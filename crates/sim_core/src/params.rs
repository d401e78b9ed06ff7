//! Immutable network parameters: departure intensities, routing
//! probabilities, and trip completion rates.
//!
//! Validation happens once at construction; everything downstream can rely
//! on the shapes and ranges without re-checking.

use crate::error::SimError;

/// How close a routing row's sum must be to 1.
const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// Network parameters for an n-station bike-share system.
///
/// Constructed once via [NetworkParams::new] and never mutated. All engine
/// code reads the station count from here, never from a hard-coded
/// constant, so toy networks (e.g. 2 stations in tests) work unchanged.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NetworkParams {
    stations: usize,
    /// Per-hour departure rate of a non-empty station, destination-independent.
    departure_intensity: Vec<f64>,
    /// Row-stochastic destination probabilities, zero diagonal (row-major).
    routing_probability: Vec<f64>,
    /// Per-bike trip completion rates, zero diagonal (row-major).
    completion_rate: Vec<f64>,
}

impl NetworkParams {
    /// Build and validate a parameter set.
    ///
    /// `routing_probability` rows must sum to 1 and both matrices must
    /// carry a zero diagonal (a station never routes or travels to itself).
    pub fn new(
        departure_intensity: Vec<f64>,
        routing_probability: Vec<Vec<f64>>,
        completion_rate: Vec<Vec<f64>>,
    ) -> Result<Self, SimError> {
        let stations = departure_intensity.len();
        if stations == 0 {
            return Err(SimError::InvalidParameterShape(
                "departure intensity vector is empty".to_string(),
            ));
        }

        let routing = flatten_square("routing probability", &routing_probability, stations)?;
        let completion = flatten_square("completion rate", &completion_rate, stations)?;

        for (i, &lam) in departure_intensity.iter().enumerate() {
            if !(lam >= 0.0) {
                return Err(SimError::InvalidParameterShape(format!(
                    "departure intensity [{i}] is {lam}, must be >= 0"
                )));
            }
        }
        for i in 0..stations {
            let mut row_sum = 0.0;
            for j in 0..stations {
                let p = routing[i * stations + j];
                if !(p >= 0.0) {
                    return Err(SimError::InvalidParameterShape(format!(
                        "routing probability [{i}][{j}] is {p}, must be >= 0"
                    )));
                }
                row_sum += p;
            }
            if (row_sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(SimError::InvalidParameterShape(format!(
                    "routing probability row {i} sums to {row_sum}, must sum to 1"
                )));
            }
            if routing[i * stations + i] != 0.0 {
                return Err(SimError::InvalidParameterShape(format!(
                    "routing probability diagonal [{i}][{i}] must be 0"
                )));
            }
        }
        for i in 0..stations {
            for j in 0..stations {
                let mu = completion[i * stations + j];
                if !(mu >= 0.0) {
                    return Err(SimError::InvalidParameterShape(format!(
                        "completion rate [{i}][{j}] is {mu}, must be >= 0"
                    )));
                }
            }
            if completion[i * stations + i] != 0.0 {
                return Err(SimError::InvalidParameterShape(format!(
                    "completion rate diagonal [{i}][{i}] must be 0"
                )));
            }
        }

        Ok(Self {
            stations,
            departure_intensity,
            routing_probability: routing,
            completion_rate: completion,
        })
    }

    /// Number of stations in the network.
    pub fn stations(&self) -> usize {
        self.stations
    }

    /// Departure intensity of station `i` (events per hour while non-empty).
    pub fn departure_intensity(&self, i: usize) -> f64 {
        self.departure_intensity[i]
    }

    /// Probability a departure from `from` heads to `to`.
    pub fn routing_probability(&self, from: usize, to: usize) -> f64 {
        self.routing_probability[from * self.stations + to]
    }

    /// Per-bike completion rate of an in-transit `from` -> `to` trip.
    pub fn completion_rate(&self, from: usize, to: usize) -> f64 {
        self.completion_rate[from * self.stations + to]
    }
}

/// Derive a completion-rate matrix from mean travel times in minutes.
///
/// Each positive entry becomes `1 / (minutes / 60)` (per-hour rate, the
/// inverse of the mean travel time); zero entries, the self-pairs, stay
/// at zero rather than dividing by zero.
pub fn completion_rate_from_travel_minutes(travel_minutes: &[Vec<f64>]) -> Vec<Vec<f64>> {
    travel_minutes
        .iter()
        .map(|row| {
            row.iter()
                .map(|&m| if m > 0.0 { 60.0 / m } else { 0.0 })
                .collect()
        })
        .collect()
}

fn flatten_square(
    name: &str,
    rows: &[Vec<f64>],
    stations: usize,
) -> Result<Vec<f64>, SimError> {
    if rows.len() != stations {
        return Err(SimError::InvalidParameterShape(format!(
            "{name} matrix has {} rows, expected {stations}",
            rows.len()
        )));
    }
    let mut flat = Vec::with_capacity(stations * stations);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != stations {
            return Err(SimError::InvalidParameterShape(format!(
                "{name} matrix row {i} has {} columns, expected {stations}",
                row.len()
            )));
        }
        flat.extend_from_slice(row);
    }
    Ok(flat)
}
