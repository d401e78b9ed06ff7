//! Multi-run replication harness for the bike-share CTMC engine.
//!
//! Runs many independent seeded replications of one network in parallel,
//! extracts per-run occupancy metrics, and exports the result table to
//! CSV or JSON. Each replication owns its own state and trajectory; the
//! read-only network parameters are shared across threads.
//!
//! # Quick Start
//!
//! ```no_run
//! use sim_core::scenario::{velib_initial_state, velib_params};
//! use sim_experiments::{run_parallel_replications, ReplicationPlan};
//!
//! let plan = ReplicationPlan::new(100, 1.0).with_base_seed(42);
//! let results =
//!     run_parallel_replications(&velib_params(), &velib_initial_state(), &plan, None)
//!         .expect("replications succeed");
//! println!("{} runs", results.len());
//! ```

pub mod export;
pub mod metrics;
pub mod parameters;
pub mod runner;

pub use export::{export_to_csv, export_to_json};
pub use metrics::ReplicationResult;
pub use parameters::{ReplicationPlan, ReplicationRun};
pub use runner::{run_parallel_replications, run_single_replication};
