//! Canonical Vélib'-style scenario: the five-station Paris network.
//!
//! Parameter literals and the initial fleet layout for the reference
//! network. Travel times are given in minutes and inverted into per-hour
//! completion rates.

use crate::params::{completion_rate_from_travel_minutes, NetworkParams};
use crate::state::FleetState;

/// Stations in the canonical network.
pub const VELIB_STATIONS: usize = 5;

/// The five-station reference parameter set.
///
/// Departure intensities are per hour; routing rows are the observed
/// destination splits; mean travel times (minutes) between pairs are
/// inverted into completion rates.
pub fn velib_params() -> NetworkParams {
    let departure_intensity = vec![2.8, 3.7, 5.5, 3.5, 4.6];
    let routing_probability = vec![
        vec![0.0, 0.2, 0.3, 0.2, 0.3],
        vec![0.2, 0.0, 0.3, 0.2, 0.3],
        vec![0.2, 0.25, 0.0, 0.25, 0.3],
        vec![0.15, 0.2, 0.3, 0.0, 0.35],
        vec![0.2, 0.25, 0.35, 0.2, 0.0],
    ];
    let travel_minutes = vec![
        vec![0.0, 3.0, 5.0, 7.0, 7.0],
        vec![2.0, 0.0, 2.0, 5.0, 5.0],
        vec![4.0, 2.0, 0.0, 3.0, 3.0],
        vec![8.0, 6.0, 4.0, 0.0, 2.0],
        vec![7.0, 7.0, 5.0, 2.0, 0.0],
    ];

    NetworkParams::new(
        departure_intensity,
        routing_probability,
        completion_rate_from_travel_minutes(&travel_minutes),
    )
    .expect("reference parameter literals are valid")
}

/// The reference initial fleet: well-stocked docks plus a thin band of
/// bikes already in transit between neighboring stations.
pub fn velib_initial_state() -> FleetState {
    FleetState::from_rows(&[
        vec![20, 1, 0, 0, 0],
        vec![1, 15, 1, 0, 0],
        vec![0, 1, 17, 1, 0],
        vec![0, 0, 1, 13, 1],
        vec![0, 0, 0, 1, 18],
    ])
    .expect("reference initial state is square")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::{simulate, SimulationConfig};

    #[test]
    fn reference_network_has_five_stations() {
        let params = velib_params();
        assert_eq!(params.stations(), VELIB_STATIONS);
        // 3-minute mean trip 0 -> 1 completes at 20/h.
        assert!((params.completion_rate(0, 1) - 20.0).abs() < 1e-12);
        assert_eq!(params.completion_rate(2, 2), 0.0);
    }

    #[test]
    fn reference_fleet_totals_ninety_bikes() {
        let state = velib_initial_state();
        assert_eq!(state.total_bikes(), 90);
        assert_eq!(state.docked(0), 20);
        assert_eq!(state.in_transit(3, 4), 1);
    }

    #[test]
    fn one_hour_reference_run_conserves_the_fleet() {
        let initial = velib_initial_state();
        let config = SimulationConfig::default()
            .with_horizon_hours(1.0)
            .with_seed(123);
        let trajectory = simulate(&initial, &velib_params(), &config).unwrap();

        assert!(trajectory.len() > 2, "an hour at these rates produces many events");
        assert_eq!(trajectory.last().unwrap().time_hours, 1.0);
        for point in &trajectory {
            assert_eq!(point.state.total_bikes(), 90);
        }
    }
}
