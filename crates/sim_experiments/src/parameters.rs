//! Replication planning: how many runs, which seeds, what horizon.

use sim_core::HorizonPolicy;

/// One planned replication: a run id and its derived seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplicationRun {
    pub run_id: usize,
    pub seed: u64,
}

/// A batch of independent replications of one scenario.
///
/// Seeds are `base_seed + run_id`, so a plan is fully reproducible and
/// two plans with different base seeds never share a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplicationPlan {
    pub num_runs: usize,
    pub horizon_hours: f64,
    pub base_seed: u64,
    pub horizon_policy: HorizonPolicy,
}

impl ReplicationPlan {
    pub fn new(num_runs: usize, horizon_hours: f64) -> Self {
        Self {
            num_runs,
            horizon_hours,
            base_seed: 0,
            horizon_policy: HorizonPolicy::default(),
        }
    }

    pub fn with_base_seed(mut self, base_seed: u64) -> Self {
        self.base_seed = base_seed;
        self
    }

    pub fn with_horizon_policy(mut self, policy: HorizonPolicy) -> Self {
        self.horizon_policy = policy;
        self
    }

    /// Materialize the planned runs in order.
    pub fn runs(&self) -> Vec<ReplicationRun> {
        (0..self.num_runs)
            .map(|run_id| ReplicationRun {
                run_id,
                seed: self.base_seed.wrapping_add(run_id as u64),
            })
            .collect()
    }
}
