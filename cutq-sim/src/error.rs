//! Error types for the simulation and optimization layer

use cutq_core::QuantumError;
use cutq_state::StateError;
use thiserror::Error;

/// Errors that can occur while building, mitigating or optimizing
/// QAOA circuits
#[derive(Error, Debug)]
pub enum SimError {
    /// Error from circuit or graph construction
    #[error("Circuit error: {0}")]
    Circuit(#[from] QuantumError),

    /// Error from density-matrix simulation
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Parameter vector whose length is not an even number
    #[error("QAOA needs an even parameter count (gamma, beta per layer), got {0}")]
    OddParameterCount(usize),

    /// Noise scale factor below 1
    #[error("Noise scale factor {0} must be >= 1.0")]
    InvalidScaleFactor(f64),

    /// Extrapolation could not produce a zero-noise estimate
    #[error("Extrapolation failed: {0}")]
    ExtrapolationFailed(String),

    /// Malformed configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimError>;
