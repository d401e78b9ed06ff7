//! Test helpers: a two-station toy network shared across test modules.

use crate::params::NetworkParams;
use crate::state::FleetState;

/// Two stations that always route to each other, per-bike completion
/// rate 2/h both ways, unit departure intensity.
pub fn two_station_params() -> NetworkParams {
    NetworkParams::new(
        vec![1.0, 1.0],
        vec![vec![0.0, 1.0], vec![1.0, 0.0]],
        vec![vec![0.0, 2.0], vec![2.0, 0.0]],
    )
    .expect("toy parameters are valid")
}

/// Toy initial fleet: 2 bikes docked at station 0, 3 at station 1,
/// nothing in transit.
pub fn two_station_state() -> FleetState {
    FleetState::from_rows(&[vec![2, 0], vec![0, 3]]).expect("toy state is square")
}
