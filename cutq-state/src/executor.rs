//! Noisy circuit execution against the dense density-matrix backend
//!
//! The executor runs a circuit gate by gate and, when a nonzero noise
//! level is configured, injects a depolarizing channel on every qubit
//! a gate touched, immediately after that gate. With noise level zero
//! the channels are skipped entirely and the simulation is exact, so
//! the noiseless path doubles as a regression reference.

use crate::density_matrix::DensityMatrix;
use crate::error::{Result, StateError};
use crate::hamiltonian::CostHamiltonian;
use cutq_core::noise::{DepolarizingChannel, NoiseChannel};
use cutq_core::Circuit;

/// Configuration for the density-matrix executor
#[derive(Debug, Clone, Copy)]
pub struct ExecutorConfig {
    /// Validate trace and hermiticity of the final state
    pub validate_state: bool,
    /// Numerical tolerance for state validation
    pub tolerance: f64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            validate_state: true,
            tolerance: 1e-8,
        }
    }
}

/// Executes circuits on a density matrix and measures observables
#[derive(Debug, Clone, Default)]
pub struct DensityMatrixExecutor {
    config: ExecutorConfig,
}

impl DensityMatrixExecutor {
    /// Create an executor with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor with an explicit configuration
    pub fn with_config(config: ExecutorConfig) -> Self {
        Self { config }
    }

    /// Run a circuit from |0...0⟩ and return ⟨observable⟩
    ///
    /// `noise_level` is the per-gate, per-qubit depolarizing
    /// probability. Zero disables noise injection.
    ///
    /// # Errors
    /// Returns error if the noise level is outside [0, 1], if circuit
    /// and observable disagree on qubit count, or if the final state
    /// fails validation.
    pub fn evaluate(
        &self,
        circuit: &Circuit,
        observable: &CostHamiltonian,
        noise_level: f64,
    ) -> Result<f64> {
        if !(0.0..=1.0).contains(&noise_level) {
            return Err(StateError::InvalidNoiseLevel { value: noise_level });
        }
        if circuit.num_qubits() != observable.num_qubits() {
            return Err(StateError::DimensionMismatch {
                expected: observable.num_qubits(),
                actual: circuit.num_qubits(),
            });
        }

        let state = self.run(circuit, noise_level)?;
        observable.expectation(&state)
    }

    /// Run a circuit and return the final density matrix
    pub fn run(&self, circuit: &Circuit, noise_level: f64) -> Result<DensityMatrix> {
        if !(0.0..=1.0).contains(&noise_level) {
            return Err(StateError::InvalidNoiseLevel { value: noise_level });
        }

        let kraus_ops = if noise_level > 0.0 {
            let channel = DepolarizingChannel::new(noise_level)
                .map_err(|_| StateError::InvalidNoiseLevel { value: noise_level })?;
            Some(channel.kraus_operators())
        } else {
            None
        };

        let mut state = DensityMatrix::new(circuit.num_qubits())?;
        let mut qubit_indices = Vec::with_capacity(2);

        for op in circuit.operations() {
            qubit_indices.clear();
            qubit_indices.extend(op.qubits().iter().map(|q| q.index()));

            state.apply_unitary(&op.gate().matrix(), &qubit_indices)?;

            if let Some(ops) = &kraus_ops {
                for &q in &qubit_indices {
                    state.apply_kraus_channel(ops, q)?;
                }
            }
        }

        if self.config.validate_state && !state.is_valid(self.config.tolerance) {
            return Err(StateError::InvalidState {
                trace: state.trace(),
            });
        }

        Ok(state)
    }
}
