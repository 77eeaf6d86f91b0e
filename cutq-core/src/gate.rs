//! Quantum gate definitions and operations

use crate::{QuantumError, QubitId, Result};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Trait for unitary quantum gate operations
///
/// Gates are stateless and reusable across multiple circuits. Every
/// gate must expose its unitary matrix (the simulator is dense) and its
/// exact inverse (global folding appends inverse-gate pairs).
///
/// # Matrix convention
/// The matrix is stored row-major with dimension 2^n for an n-qubit
/// gate. For multi-qubit gates, the *first* qubit passed to
/// [`GateOp::new`] corresponds to the least significant bit of the
/// matrix index.
pub trait Gate: Send + Sync + fmt::Debug {
    /// The name of the gate (e.g., "H", "CNOT", "RX")
    fn name(&self) -> &str;

    /// Number of qubits this gate acts on
    fn num_qubits(&self) -> usize;

    /// The unitary matrix, flattened row-major with length (2^n)^2
    fn matrix(&self) -> Vec<Complex64>;

    /// The exact inverse of this gate
    ///
    /// For hermitian gates this is the gate itself; rotations negate
    /// their angle.
    fn inverse(&self) -> Arc<dyn Gate>;

    /// Whether this gate is hermitian (self-adjoint, its own inverse)
    fn is_hermitian(&self) -> bool {
        false
    }

    /// Get a description of this gate
    fn description(&self) -> String {
        format!("{}-qubit gate '{}'", self.num_qubits(), self.name())
    }
}

/// A gate operation applied to specific qubits
///
/// Combines a gate with the qubits it operates on.
#[derive(Clone)]
pub struct GateOp {
    gate: Arc<dyn Gate>,
    qubits: SmallVec<[QubitId; 2]>, // Most gates are 1-2 qubits
}

impl GateOp {
    /// Create a new gate operation
    ///
    /// # Errors
    /// Returns error if:
    /// - Qubit count doesn't match gate requirements
    /// - Duplicate qubits specified
    pub fn new(gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<Self> {
        if qubits.len() != gate.num_qubits() {
            return Err(QuantumError::invalid_qubit_count(
                gate.name(),
                gate.num_qubits(),
                qubits.len(),
            ));
        }

        for i in 0..qubits.len() {
            for j in (i + 1)..qubits.len() {
                if qubits[i] == qubits[j] {
                    return Err(QuantumError::DuplicateQubit(qubits[i]));
                }
            }
        }

        Ok(Self {
            gate,
            qubits: SmallVec::from_slice(qubits),
        })
    }

    /// Get the gate
    #[inline]
    pub fn gate(&self) -> &Arc<dyn Gate> {
        &self.gate
    }

    /// Get the qubits this operation acts on
    #[inline]
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// The same operation with the gate replaced by its inverse
    ///
    /// Qubit targets are unchanged; reversing operation order is the
    /// caller's job (see [`crate::Circuit::inverse`]).
    pub fn inverted(&self) -> Self {
        Self {
            gate: self.gate.inverse(),
            qubits: self.qubits.clone(),
        }
    }
}

impl fmt::Debug for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate.name())?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
