//! Errors surfaced by the simulation engine.

use std::fmt;

/// Errors encountered while validating inputs or stepping the chain.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Parameter vectors/matrices have inconsistent shapes, negative
    /// entries, non-stochastic routing rows, or a non-zero diagonal.
    InvalidParameterShape(String),
    /// A supplied fleet state does not match the network's station count.
    InvalidStateInvariant(String),
    /// Total transition rate is zero at a point where an event must be
    /// sampled (fleet present but no enabled transition).
    DegenerateRate,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidParameterShape(msg) => {
                write!(f, "invalid network parameters: {msg}")
            }
            SimError::InvalidStateInvariant(msg) => {
                write!(f, "invalid fleet state: {msg}")
            }
            SimError::DegenerateRate => {
                write!(f, "total transition rate is zero; no event can be sampled")
            }
        }
    }
}

impl std::error::Error for SimError {}
