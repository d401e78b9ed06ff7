//! Trajectory driver: the compute, sample, apply, record loop.
//!
//! Repeatedly races the enabled exponential clocks until the simulated
//! clock passes the horizon, recording a timestamped snapshot after every
//! event.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::SimError;
use crate::params::NetworkParams;
use crate::rates::compute_rates;
use crate::sampling::{sample_holding_time, select_event};
use crate::state::FleetState;

/// What to record at the horizon, where the final event overshoots it.
///
/// The last sampled event always lands past the horizon; the two policies
/// differ in which state the final trajectory entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizonPolicy {
    /// Keep the overshooting post-horizon state but re-stamp it with the
    /// horizon.
    #[default]
    ClampLastEvent,
    /// Drop the overshooting event and end with the state that actually
    /// holds at the horizon.
    HoldAtHorizon,
}

/// Run configuration, built in the usual struct-plus-`with_*` form.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Simulated time to cover, in hours.
    pub horizon_hours: f64,
    /// Random seed for reproducibility (None uses entropy).
    pub seed: Option<u64>,
    /// Final-entry semantics at the horizon.
    pub horizon_policy: HorizonPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon_hours: 1.0,
            seed: None,
            horizon_policy: HorizonPolicy::default(),
        }
    }
}

impl SimulationConfig {
    pub fn with_horizon_hours(mut self, hours: f64) -> Self {
        self.horizon_hours = hours;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_horizon_policy(mut self, policy: HorizonPolicy) -> Self {
        self.horizon_policy = policy;
        self
    }
}

/// One timestamped snapshot in a trajectory.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TrajectoryPoint {
    /// Simulated time of the snapshot, in hours.
    pub time_hours: f64,
    pub state: FleetState,
}

/// Simulate the chain from `initial` until the horizon.
///
/// Returns the ordered trajectory: first entry (0.0, initial), one entry
/// per event, final timestamp exactly `horizon_hours`. The loop condition
/// is strict (`clock < horizon`), so a zero horizon yields exactly the
/// seed entry and no event is sampled.
///
/// A zero total rate mid-run (fleet present but nothing enabled, or a
/// zero fleet) aborts with [SimError::DegenerateRate]; there is no
/// partial-result semantics.
pub fn simulate(
    initial: &FleetState,
    params: &NetworkParams,
    config: &SimulationConfig,
) -> Result<Vec<TrajectoryPoint>, SimError> {
    if initial.stations() != params.stations() {
        return Err(SimError::InvalidStateInvariant(format!(
            "state is {}x{} but the network has {} stations",
            initial.stations(),
            initial.stations(),
            params.stations()
        )));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let horizon = config.horizon_hours;

    let mut trajectory = vec![TrajectoryPoint {
        time_hours: 0.0,
        state: initial.clone(),
    }];
    let mut clock = 0.0;

    while clock < horizon {
        let current = &trajectory[trajectory.len() - 1].state;
        let rates = compute_rates(current, params);
        clock += sample_holding_time(rates.total(), &mut rng)?;
        let next = select_event(&rates, &mut rng)?.apply(current);
        trajectory.push(TrajectoryPoint {
            time_hours: clock,
            state: next,
        });
    }

    match config.horizon_policy {
        HorizonPolicy::ClampLastEvent => {
            if let Some(last) = trajectory.last_mut() {
                last.time_hours = horizon;
            }
        }
        HorizonPolicy::HoldAtHorizon => {
            if trajectory.len() > 1 {
                trajectory.pop();
                let held = trajectory[trajectory.len() - 1].state.clone();
                trajectory.push(TrajectoryPoint {
                    time_hours: horizon,
                    state: held,
                });
            }
        }
    }

    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{two_station_params, two_station_state};

    fn seeded(horizon: f64) -> SimulationConfig {
        SimulationConfig::default()
            .with_horizon_hours(horizon)
            .with_seed(123)
    }

    #[test]
    fn zero_horizon_returns_only_the_seed_entry() {
        let trajectory =
            simulate(&two_station_state(), &two_station_params(), &seeded(0.0)).unwrap();
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory[0].time_hours, 0.0);
        assert_eq!(trajectory[0].state, two_station_state());
    }

    #[test]
    fn fleet_size_is_conserved_along_the_trajectory() {
        let initial = two_station_state();
        let trajectory = simulate(&initial, &two_station_params(), &seeded(5.0)).unwrap();
        assert!(trajectory.len() > 1, "5 hours at rate >= 2 must produce events");
        for point in &trajectory {
            assert_eq!(point.state.total_bikes(), initial.total_bikes());
        }
    }

    #[test]
    fn timestamps_are_monotone_and_end_at_the_horizon() {
        let trajectory =
            simulate(&two_station_state(), &two_station_params(), &seeded(3.0)).unwrap();
        for pair in trajectory.windows(2) {
            assert!(pair[0].time_hours <= pair[1].time_hours);
        }
        // Strictly increasing everywhere except possibly the final clamp.
        for pair in trajectory[..trajectory.len() - 1].windows(2) {
            assert!(pair[0].time_hours < pair[1].time_hours);
        }
        assert_eq!(trajectory.last().unwrap().time_hours, 3.0);
        assert_eq!(trajectory[0].time_hours, 0.0);
    }

    #[test]
    fn clamp_policy_keeps_the_overshooting_state() {
        let trajectory =
            simulate(&two_station_state(), &two_station_params(), &seeded(2.0)).unwrap();
        let last = trajectory.last().unwrap();
        let before = &trajectory[trajectory.len() - 2];
        assert_eq!(last.time_hours, 2.0);
        // The clamped entry is the post-event state, one move past `before`.
        assert_ne!(last.state, before.state);
    }

    #[test]
    fn hold_policy_ends_with_the_state_holding_at_the_horizon() {
        let config = seeded(2.0).with_horizon_policy(HorizonPolicy::HoldAtHorizon);
        let trajectory = simulate(&two_station_state(), &two_station_params(), &config).unwrap();
        let last = trajectory.last().unwrap();
        let before = &trajectory[trajectory.len() - 2];
        assert_eq!(last.time_hours, 2.0);
        assert_eq!(last.state, before.state);
        assert!(before.time_hours < 2.0);
    }

    #[test]
    fn same_seed_reproduces_the_trajectory() {
        let a = simulate(&two_station_state(), &two_station_params(), &seeded(1.0)).unwrap();
        let b = simulate(&two_station_state(), &two_station_params(), &seeded(1.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_fleet_fails_with_degenerate_rate() {
        let err = simulate(&FleetState::zero(2), &two_station_params(), &seeded(1.0)).unwrap_err();
        assert_eq!(err, SimError::DegenerateRate);
    }

    #[test]
    fn mismatched_state_shape_is_rejected() {
        let state = FleetState::zero(3);
        let err = simulate(&state, &two_station_params(), &seeded(1.0)).unwrap_err();
        assert!(matches!(err, SimError::InvalidStateInvariant(_)));
    }
}
