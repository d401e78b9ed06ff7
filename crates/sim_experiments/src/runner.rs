//! Parallel replication execution using rayon.
//!
//! Each replication builds its own [SimulationConfig] from the plan and
//! owns its trajectory; the network parameters and initial state are
//! shared read-only across worker threads.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use sim_core::trajectory::SimulationConfig;
use sim_core::{simulate, FleetState, NetworkParams, SimError};

use crate::metrics::{extract_metrics, ReplicationResult};
use crate::parameters::{ReplicationPlan, ReplicationRun};

/// Run one replication of the plan to completion.
pub fn run_single_replication(
    params: &NetworkParams,
    initial: &FleetState,
    plan: &ReplicationPlan,
    run: ReplicationRun,
) -> Result<ReplicationResult, SimError> {
    let config = SimulationConfig::default()
        .with_horizon_hours(plan.horizon_hours)
        .with_seed(run.seed)
        .with_horizon_policy(plan.horizon_policy);
    let trajectory = simulate(initial, params, &config)?;
    Ok(extract_metrics(&trajectory, run.run_id, run.seed))
}

/// Run every planned replication in parallel.
///
/// Results come back in run order regardless of completion order. The
/// first failing replication fails the whole batch; there is no partial
/// result. `num_threads: None` uses rayon's global pool.
pub fn run_parallel_replications(
    params: &NetworkParams,
    initial: &FleetState,
    plan: &ReplicationPlan,
    num_threads: Option<usize>,
) -> Result<Vec<ReplicationResult>, SimError> {
    run_parallel_replications_with_progress(params, initial, plan, num_threads, false)
}

/// Run every planned replication in parallel, optionally with a progress bar.
pub fn run_parallel_replications_with_progress(
    params: &NetworkParams,
    initial: &FleetState,
    plan: &ReplicationPlan,
    num_threads: Option<usize>,
    show_progress: bool,
) -> Result<Vec<ReplicationResult>, SimError> {
    let runs = plan.runs();
    let progress = if show_progress {
        let bar = ProgressBar::new(runs.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} replications")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(bar)
    } else {
        None
    };

    let execute = |runs: Vec<ReplicationRun>| -> Result<Vec<ReplicationResult>, SimError> {
        runs.into_par_iter()
            .map(|run| {
                let result = run_single_replication(params, initial, plan, run);
                if let Some(bar) = &progress {
                    bar.inc(1);
                }
                result
            })
            .collect()
    };

    let results = match num_threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| {
                    SimError::InvalidParameterShape(format!("thread pool setup failed: {e}"))
                })?;
            pool.install(|| execute(runs))?
        }
        None => execute(runs)?,
    };

    if let Some(bar) = &progress {
        bar.finish();
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::test_helpers::{two_station_params, two_station_state};

    #[test]
    fn batch_results_come_back_in_run_order() {
        let plan = ReplicationPlan::new(8, 0.5).with_base_seed(10);
        let results = run_parallel_replications(
            &two_station_params(),
            &two_station_state(),
            &plan,
            Some(4),
        )
        .expect("batch succeeds");
        assert_eq!(results.len(), 8);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.run_id, i);
            assert_eq!(result.seed, 10 + i as u64);
        }
    }

    #[test]
    fn same_seed_means_same_result_across_batches() {
        let plan = ReplicationPlan::new(4, 1.0).with_base_seed(77);
        let a = run_parallel_replications(&two_station_params(), &two_station_state(), &plan, None)
            .unwrap();
        let b = run_parallel_replications(&two_station_params(), &two_station_state(), &plan, None)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_fleet_fails_the_whole_batch() {
        let plan = ReplicationPlan::new(2, 1.0);
        let err = run_parallel_replications(
            &two_station_params(),
            &FleetState::zero(2),
            &plan,
            None,
        )
        .unwrap_err();
        assert_eq!(err, SimError::DegenerateRate);
    }

    #[test]
    fn single_replication_conserves_the_fleet() {
        let plan = ReplicationPlan::new(1, 2.0).with_base_seed(5);
        let result = run_single_replication(
            &two_station_params(),
            &two_station_state(),
            &plan,
            ReplicationRun { run_id: 0, seed: 5 },
        )
        .unwrap();
        let docked: u64 = result.final_docked.iter().map(|&c| u64::from(c)).sum();
        assert_eq!(docked + result.final_in_transit, 5);
    }
}
