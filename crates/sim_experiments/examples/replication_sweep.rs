//! Run 100 seeded replications of the reference network and export the
//! per-run occupancy table.
//!
//! Run with: cargo run -p sim_experiments --example replication_sweep

use std::path::Path;

use sim_core::scenario::{velib_initial_state, velib_params};
use sim_experiments::runner::run_parallel_replications_with_progress;
use sim_experiments::{export_to_csv, ReplicationPlan};

fn main() {
    const NUM_RUNS: usize = 100;
    const HORIZON_HOURS: f64 = 1.0;

    let params = velib_params();
    let initial = velib_initial_state();
    let plan = ReplicationPlan::new(NUM_RUNS, HORIZON_HOURS).with_base_seed(42);

    let results =
        match run_parallel_replications_with_progress(&params, &initial, &plan, None, true) {
            Ok(results) => results,
            Err(err) => {
                eprintln!("replication batch failed: {err}");
                std::process::exit(1);
            }
        };

    let stations = params.stations();
    let events: usize = results.iter().map(|r| r.events).sum();
    println!(
        "--- {NUM_RUNS} replications, {HORIZON_HOURS:.1} h horizon, {:.1} events/run ---",
        events as f64 / NUM_RUNS as f64
    );
    for i in 0..stations {
        let mean: f64 = results.iter().map(|r| r.mean_docked[i]).sum::<f64>() / NUM_RUNS as f64;
        println!("station {i}: mean docked {mean:.2}");
    }

    let out = Path::new("replications.csv");
    if let Err(err) = export_to_csv(out, &results) {
        eprintln!("export failed: {err}");
        std::process::exit(1);
    }
    println!("wrote {}", out.display());
}
