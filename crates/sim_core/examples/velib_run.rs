//! Run the five-station reference scenario for one hour and print the
//! trajectory, one timestamped station matrix per event.
//!
//! Run with: cargo run -p sim_core --example velib_run

use sim_core::scenario::{velib_initial_state, velib_params};
use sim_core::trajectory::{simulate, SimulationConfig};

fn main() {
    const SIMULATION_HOURS: f64 = 1.0;

    let params = velib_params();
    let initial = velib_initial_state();
    let config = SimulationConfig::default()
        .with_horizon_hours(SIMULATION_HOURS)
        .with_seed(123);

    println!("Simulation during {SIMULATION_HOURS:.2} hour(s).");
    let trajectory = match simulate(&initial, &params, &config) {
        Ok(trajectory) => trajectory,
        Err(err) => {
            eprintln!("simulation failed: {err}");
            std::process::exit(1);
        }
    };

    for point in &trajectory {
        println!("time = {:.6}", point.time_hours);
        println!("state");
        let n = point.state.stations();
        for i in 0..n {
            let row: Vec<String> = (0..n)
                .map(|j| {
                    if i == j {
                        format!("{:3}", point.state.docked(i))
                    } else {
                        format!("{:3}", point.state.in_transit(i, j))
                    }
                })
                .collect();
            println!("  [{}]", row.join(" "));
        }
        println!("-------------------------");
    }
    println!("{} events over {SIMULATION_HOURS:.2} h", trajectory.len() - 1);
}
