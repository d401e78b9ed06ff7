//! Random draws: exponential holding times and categorical event selection.
//!
//! Both draws use an explicit inverse-transform / cumulative-scan form
//! rather than a distribution primitive, so behavior is auditable and
//! reproducible from a seed.

use rand::rngs::StdRng;
use rand::Rng;

use crate::error::SimError;
use crate::event::TransitionEvent;
use crate::rates::TransitionRates;

/// Draw the sojourn time in the current state from Exp(`total_rate`).
///
/// The minimum of independent exponential clocks is exponential with the
/// summed rate, so one draw covers the whole race. `total_rate <= 0` is a
/// stall and fails explicitly instead of dividing by zero.
pub fn sample_holding_time(total_rate: f64, rng: &mut StdRng) -> Result<f64, SimError> {
    if total_rate <= 0.0 {
        return Err(SimError::DegenerateRate);
    }
    // Inverse transform: -ln(U) / lambda, U clamped away from 0.
    let u: f64 = rng.gen();
    let u = u.max(1e-10);
    Ok(-u.ln() / total_rate)
}

/// Sample one transition proportionally to its rate.
///
/// Draws `u` uniform in `[0, total)` and walks the cumulative weight sum,
/// picking the first slot whose cumulative weight exceeds `u`. Zero-weight
/// slots (self-loops, empty stations, idle edges) can never be picked.
pub fn select_event(rates: &TransitionRates, rng: &mut StdRng) -> Result<TransitionEvent, SimError> {
    let total = rates.total();
    if total <= 0.0 {
        return Err(SimError::DegenerateRate);
    }

    let u: f64 = rng.gen::<f64>() * total;
    let weights = rates.weights();
    let mut cumulative = 0.0;
    let mut selected = None;
    for (slot, &w) in weights.iter().enumerate() {
        cumulative += w;
        if u < cumulative {
            selected = Some((slot, w));
            break;
        }
    }
    // Rounding in the cumulative sum can leave u just past the last
    // positive slot; fall back to it.
    let (slot, weight) = match selected {
        Some(picked) => picked,
        None => weights
            .iter()
            .enumerate()
            .rev()
            .find(|(_, &w)| w > 0.0)
            .map(|(slot, &w)| (slot, w))
            .ok_or(SimError::DegenerateRate)?,
    };
    debug_assert!(weight > 0.0, "sampled a zero-rate slot");

    Ok(TransitionEvent::from_slot(slot, rates.stations()))
}
