//! Error types for state operations

use thiserror::Error;

/// Errors that can occur during density-matrix operations
#[derive(Error, Debug)]
pub enum StateError {
    /// Invalid qubit index
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// State too large to allocate
    #[error("Cannot allocate a density matrix for {num_qubits} qubits")]
    TooManyQubits { num_qubits: usize },

    /// Dimension mismatch between collaborating objects
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Gate arity the dense simulator does not implement
    #[error("Unsupported gate arity {0}: only 1- and 2-qubit unitaries are simulated")]
    UnsupportedGateArity(usize),

    /// State failed a trace/hermiticity validation check
    #[error("State validation failed: trace = {trace}")]
    InvalidState { trace: f64 },

    /// Noise strength outside [0, 1]
    #[error("Noise level {value} is outside [0, 1]")]
    InvalidNoiseLevel { value: f64 },

    /// Expectation value with a non-negligible imaginary part
    #[error("Expectation value has residual imaginary part {imag}")]
    ResidualImaginary { imag: f64 },
}

/// Result type for state operations
pub type Result<T> = std::result::Result<T, StateError>;
