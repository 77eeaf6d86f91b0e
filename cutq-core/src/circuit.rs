//! Quantum circuit representation

use crate::gate::Gate;
use crate::{GateOp, QuantumError, QubitId, Result};
use std::sync::Arc;

/// A quantum circuit
///
/// Contains an ordered sequence of gate operations applied to qubits.
/// Circuits are rebuilt from scratch on every cost-function evaluation,
/// so construction stays cheap and allocation-light.
///
/// # Example
/// ```
/// use cutq_core::Circuit;
///
/// let circuit = Circuit::new(3);
/// assert_eq!(circuit.num_qubits(), 3);
/// assert_eq!(circuit.len(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<GateOp>,
}

impl Circuit {
    /// Create a new quantum circuit with the specified number of qubits
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::new(),
        }
    }

    /// Create a circuit with pre-allocated capacity
    pub fn with_capacity(num_qubits: usize, capacity: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of qubits in the circuit
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the number of operations in the circuit
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the circuit is empty (no operations)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Add a gate operation to the circuit
    ///
    /// # Errors
    /// Returns error if any qubit index is out of bounds
    pub fn add_gate(&mut self, gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<()> {
        for &qubit in qubits {
            if qubit.index() >= self.num_qubits {
                return Err(QuantumError::invalid_qubit(qubit.index(), self.num_qubits));
            }
        }

        let gate_op = GateOp::new(gate, qubits)?;
        self.operations.push(gate_op);
        Ok(())
    }

    /// Append an already-validated operation
    ///
    /// Used when splicing operations between circuits (folding).
    ///
    /// # Errors
    /// Returns error if the operation addresses a qubit this circuit
    /// does not have.
    pub fn push_op(&mut self, op: GateOp) -> Result<()> {
        for &qubit in op.qubits() {
            if qubit.index() >= self.num_qubits {
                return Err(QuantumError::invalid_qubit(qubit.index(), self.num_qubits));
            }
        }
        self.operations.push(op);
        Ok(())
    }

    /// Get an iterator over the operations
    pub fn operations(&self) -> impl Iterator<Item = &GateOp> {
        self.operations.iter()
    }

    /// Get a specific operation by index
    pub fn get_operation(&self, index: usize) -> Option<&GateOp> {
        self.operations.get(index)
    }

    /// The circuit implementing the inverse unitary
    ///
    /// Operations are reversed and each gate replaced by its inverse,
    /// so `c` followed by `c.inverse()` is the identity. This is the
    /// building block of global unitary folding.
    pub fn inverse(&self) -> Self {
        Self {
            num_qubits: self.num_qubits,
            operations: self.operations.iter().rev().map(GateOp::inverted).collect(),
        }
    }

    /// Validate the circuit
    ///
    /// Checks that all operations address qubits this circuit has.
    pub fn validate(&self) -> Result<()> {
        for (i, op) in self.operations.iter().enumerate() {
            for &qubit in op.qubits() {
                if qubit.index() >= self.num_qubits {
                    return Err(QuantumError::ValidationError(format!(
                        "Operation {} uses invalid qubit {}",
                        i, qubit
                    )));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} operations)",
            self.num_qubits,
            self.len()
        )?;
        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {}: {}", i, op)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{CNot, Hadamard, RotationZ};

    #[test]
    fn test_circuit_creation() {
        let circuit = Circuit::new(3);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.len(), 0);
        assert!(circuit.is_empty());
    }

    #[test]
    #[should_panic(expected = "at least one qubit")]
    fn test_circuit_zero_qubits() {
        Circuit::new(0);
    }

    #[test]
    fn test_add_gate() {
        let mut circuit = Circuit::new(2);
        circuit
            .add_gate(Arc::new(Hadamard), &[QubitId::new(0)])
            .unwrap();
        assert_eq!(circuit.len(), 1);
        assert!(!circuit.is_empty());
    }

    #[test]
    fn test_add_gate_invalid_qubit() {
        let mut circuit = Circuit::new(2);
        let result = circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(5)]);

        if let Err(QuantumError::InvalidQubit(idx, num)) = result {
            assert_eq!(idx, 5);
            assert_eq!(num, 2);
        } else {
            panic!("Expected InvalidQubit error");
        }
    }

    #[test]
    fn test_inverse_reverses_and_negates() {
        let mut circuit = Circuit::new(2);
        circuit
            .add_gate(Arc::new(CNot), &[QubitId::new(0), QubitId::new(1)])
            .unwrap();
        circuit
            .add_gate(Arc::new(RotationZ::new(0.5)), &[QubitId::new(1)])
            .unwrap();

        let inv = circuit.inverse();
        assert_eq!(inv.len(), 2);

        let ops: Vec<_> = inv.operations().collect();
        assert_eq!(ops[0].gate().name(), "RZ");
        assert_eq!(ops[1].gate().name(), "CNOT");
    }

    #[test]
    fn test_push_op_bounds_checked() {
        let mut big = Circuit::new(3);
        big.add_gate(Arc::new(Hadamard), &[QubitId::new(2)]).unwrap();
        let op = big.get_operation(0).unwrap().clone();

        let mut small = Circuit::new(2);
        assert!(small.push_op(op).is_err());
    }

    #[test]
    fn test_validate() {
        let circuit = Circuit::new(3);
        assert!(circuit.validate().is_ok());
    }

    #[test]
    fn test_display() {
        let mut circuit = Circuit::new(2);
        circuit
            .add_gate(Arc::new(Hadamard), &[QubitId::new(0)])
            .unwrap();

        let display = format!("{}", circuit);
        assert!(display.contains("2 qubits"));
        assert!(display.contains("1 operations"));
    }
}
