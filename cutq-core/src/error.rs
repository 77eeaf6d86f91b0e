//! Error types for cutq-core

use crate::QubitId;
use thiserror::Error;

/// Errors that can occur while building circuits or problem graphs
#[derive(Debug, Error)]
pub enum QuantumError {
    /// Invalid qubit index used
    #[error("Invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// Gate applied to wrong number of qubits
    #[error("Gate '{gate}' requires {expected} qubits, but {actual} were provided")]
    InvalidQubitCount {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// Duplicate qubit in gate operation
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// Edge joining a vertex to itself
    #[error("Self-loop on vertex {0}: edges must join distinct vertices")]
    SelfLoop(usize),

    /// A vertex label that a bitstring lookup cannot represent
    #[error("Vertex {vertex} is out of range for a {len}-bit assignment")]
    VertexOutOfRange { vertex: usize, len: usize },

    /// Vertex sets that do not form a bipartition of the graph
    #[error("Invalid bipartition: {0}")]
    InvalidPartition(String),

    /// Generic validation error
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl QuantumError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }

    /// Create an invalid qubit count error
    pub fn invalid_qubit_count(gate: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidQubitCount {
            gate: gate.into(),
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_qubit_error() {
        let err = QuantumError::invalid_qubit(5, 3);
        let msg = format!("{}", err);
        assert!(msg.contains("5"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_vertex_out_of_range_error() {
        let err = QuantumError::VertexOutOfRange { vertex: 7, len: 4 };
        let msg = format!("{}", err);
        assert!(msg.contains("7"));
        assert!(msg.contains("4-bit"));
    }

    #[test]
    fn test_self_loop_error() {
        let err = QuantumError::SelfLoop(2);
        assert!(format!("{}", err).contains("distinct vertices"));
    }
}
