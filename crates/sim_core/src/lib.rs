//! Continuous-time Markov chain simulation of a five-station bike-share
//! network: bikes dock, depart with station-specific intensity toward a
//! routed destination, travel for an exponential time, and arrive.

pub mod error;
pub mod event;
pub mod params;
pub mod rates;
pub mod sampling;
pub mod scenario;
pub mod state;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
pub mod trajectory;

pub use error::SimError;
pub use event::TransitionEvent;
pub use params::NetworkParams;
pub use rates::{compute_rates, TransitionRates};
pub use state::FleetState;
pub use trajectory::{simulate, HorizonPolicy, SimulationConfig, TrajectoryPoint};
