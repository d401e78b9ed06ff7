//! Metrics extraction from a finished trajectory.

use sim_core::TrajectoryPoint;

/// Aggregated metrics from one replication.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ReplicationResult {
    pub run_id: usize,
    pub seed: u64,
    /// Number of simulated events (trajectory entries minus the seed entry).
    pub events: usize,
    /// Bikes docked at each station when the run ended.
    pub final_docked: Vec<u32>,
    /// Bikes still in transit when the run ended.
    pub final_in_transit: u64,
    /// Time-weighted mean docked count per station over the horizon.
    pub mean_docked: Vec<f64>,
}

/// Compute per-run metrics from a trajectory.
///
/// The mean occupancy weights each recorded state by how long it held:
/// the state at entry k holds from its timestamp to the next entry's.
pub fn extract_metrics(
    trajectory: &[TrajectoryPoint],
    run_id: usize,
    seed: u64,
) -> ReplicationResult {
    let last = trajectory.last().expect("a trajectory has at least its seed entry");
    let stations = last.state.stations();

    let final_docked: Vec<u32> = (0..stations).map(|i| last.state.docked(i)).collect();
    let docked_total: u64 = final_docked.iter().map(|&c| u64::from(c)).sum();
    let final_in_transit = last.state.total_bikes() - docked_total;

    let horizon = last.time_hours;
    let mut weighted = vec![0.0; stations];
    if horizon > 0.0 {
        for pair in trajectory.windows(2) {
            let held = pair[1].time_hours - pair[0].time_hours;
            for (i, w) in weighted.iter_mut().enumerate() {
                *w += held * f64::from(pair[0].state.docked(i));
            }
        }
        for w in weighted.iter_mut() {
            *w /= horizon;
        }
    } else {
        // Zero-length run: the seed state is the whole story.
        for (i, w) in weighted.iter_mut().enumerate() {
            *w = f64::from(last.state.docked(i));
        }
    }

    ReplicationResult {
        run_id,
        seed,
        events: trajectory.len() - 1,
        final_docked,
        final_in_transit,
        mean_docked: weighted,
    }
}
