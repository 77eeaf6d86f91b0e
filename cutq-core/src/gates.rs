//! Standard gate set for QAOA circuits
//!
//! Only the gates the MaxCut ansatz and the noise machinery actually
//! need: Hadamard, the Pauli flips, the RX/RZ rotations and CNOT.
//! Matrices are computed on demand; at the circuit sizes a dense
//! density-matrix simulation can handle, matrix construction is never
//! the bottleneck.

use crate::gate::Gate;
use num_complex::Complex64;
use std::sync::Arc;

const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

#[inline]
fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Hadamard gate
///
/// Creates superposition: H|0⟩ = (|0⟩ + |1⟩)/√2
#[derive(Debug, Clone, Copy)]
pub struct Hadamard;

impl Gate for Hadamard {
    fn name(&self) -> &str {
        "H"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn matrix(&self) -> Vec<Complex64> {
        vec![
            c(FRAC_1_SQRT_2, 0.0),
            c(FRAC_1_SQRT_2, 0.0),
            c(FRAC_1_SQRT_2, 0.0),
            c(-FRAC_1_SQRT_2, 0.0),
        ]
    }

    fn inverse(&self) -> Arc<dyn Gate> {
        Arc::new(Hadamard)
    }

    fn is_hermitian(&self) -> bool {
        true
    }
}

/// Pauli-X gate (NOT gate)
///
/// Bit flip: X|0⟩ = |1⟩, X|1⟩ = |0⟩
#[derive(Debug, Clone, Copy)]
pub struct PauliX;

impl Gate for PauliX {
    fn name(&self) -> &str {
        "X"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn matrix(&self) -> Vec<Complex64> {
        vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)]
    }

    fn inverse(&self) -> Arc<dyn Gate> {
        Arc::new(PauliX)
    }

    fn is_hermitian(&self) -> bool {
        true
    }
}

/// Pauli-Z gate
///
/// Phase flip: Z|0⟩ = |0⟩, Z|1⟩ = -|1⟩
#[derive(Debug, Clone, Copy)]
pub struct PauliZ;

impl Gate for PauliZ {
    fn name(&self) -> &str {
        "Z"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn matrix(&self) -> Vec<Complex64> {
        vec![c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)]
    }

    fn inverse(&self) -> Arc<dyn Gate> {
        Arc::new(PauliZ)
    }

    fn is_hermitian(&self) -> bool {
        true
    }
}

/// Rotation around the X axis: RX(θ) = exp(-iθX/2)
///
/// The QAOA mixing layer applies RX(2β) to every qubit, implementing
/// exp(-iβX) per qubit.
#[derive(Debug, Clone, Copy)]
pub struct RotationX {
    theta: f64,
}

impl RotationX {
    /// Creates a new RX gate with the given angle
    pub const fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Returns the rotation angle
    pub const fn angle(&self) -> f64 {
        self.theta
    }
}

impl Gate for RotationX {
    fn name(&self) -> &str {
        "RX"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn description(&self) -> String {
        format!("RX({:.4})", self.theta)
    }

    fn matrix(&self) -> Vec<Complex64> {
        let half = self.theta / 2.0;
        let (sin, cos) = half.sin_cos();
        vec![c(cos, 0.0), c(0.0, -sin), c(0.0, -sin), c(cos, 0.0)]
    }

    fn inverse(&self) -> Arc<dyn Gate> {
        Arc::new(RotationX::new(-self.theta))
    }
}

/// Rotation around the Z axis: RZ(θ) = diag(e^{-iθ/2}, e^{iθ/2})
///
/// Sandwiched between two CNOTs, RZ(2γ) on the target qubit implements
/// the two-qubit phase coupling exp(-iγ ZᵢZⱼ) up to global phase.
#[derive(Debug, Clone, Copy)]
pub struct RotationZ {
    theta: f64,
}

impl RotationZ {
    /// Creates a new RZ gate with the given angle
    pub const fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Returns the rotation angle
    pub const fn angle(&self) -> f64 {
        self.theta
    }
}

impl Gate for RotationZ {
    fn name(&self) -> &str {
        "RZ"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn description(&self) -> String {
        format!("RZ({:.4})", self.theta)
    }

    fn matrix(&self) -> Vec<Complex64> {
        let half = self.theta / 2.0;
        vec![
            c(half.cos(), -half.sin()),
            c(0.0, 0.0),
            c(0.0, 0.0),
            c(half.cos(), half.sin()),
        ]
    }

    fn inverse(&self) -> Arc<dyn Gate> {
        Arc::new(RotationZ::new(-self.theta))
    }
}

/// Controlled-NOT gate
///
/// The first qubit passed to the operation is the control (and the
/// least significant bit of the matrix index), the second the target.
#[derive(Debug, Clone, Copy)]
pub struct CNot;

impl Gate for CNot {
    fn name(&self) -> &str {
        "CNOT"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn matrix(&self) -> Vec<Complex64> {
        let o = c(0.0, 0.0);
        let l = c(1.0, 0.0);
        #[rustfmt::skip]
        let m = vec![
            l, o, o, o,
            o, o, o, l,
            o, o, l, o,
            o, l, o, o,
        ];
        m
    }

    fn inverse(&self) -> Arc<dyn Gate> {
        Arc::new(CNot)
    }

    fn is_hermitian(&self) -> bool {
        true
    }
}
