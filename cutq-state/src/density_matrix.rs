//! Density matrix representation for mixed quantum states
//!
//! A density matrix ρ is a positive semi-definite, Hermitian matrix
//! with Tr(ρ) = 1. Pure states have ρ = |ψ⟩⟨ψ|; a noisy circuit
//! produces a mixture Σᵢ pᵢ |ψᵢ⟩⟨ψᵢ|.
//!
//! Unitaries and Kraus channels are applied block-wise: for a gate on
//! qubit q, the matrix decomposes into independent 2x2 blocks indexed
//! by the remaining bits, so an n-qubit single-qubit update costs
//! O(4^n) instead of the naive O(8^n) triple product.

use crate::error::{Result, StateError};
use cutq_core::noise::KrausOperator;
use num_complex::Complex64;
use std::fmt;

/// Density matrix over the 2^n-dimensional computational basis
///
/// Stored row-major as a `Vec<Complex64>` of length 4^n.
pub struct DensityMatrix {
    num_qubits: usize,
    dimension: usize,
    matrix: Vec<Complex64>,
}

impl DensityMatrix {
    /// Create a new density matrix initialized to |0...0⟩⟨0...0|
    ///
    /// # Errors
    /// Returns error if 4^n overflows the address space
    pub fn new(num_qubits: usize) -> Result<Self> {
        let dimension = 1usize
            .checked_shl(num_qubits as u32)
            .ok_or(StateError::TooManyQubits { num_qubits })?;
        let size = dimension
            .checked_mul(dimension)
            .ok_or(StateError::TooManyQubits { num_qubits })?;

        let mut matrix = vec![Complex64::new(0.0, 0.0); size];
        matrix[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            dimension,
            matrix,
        })
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Matrix dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Matrix element ρᵢⱼ
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.matrix[row * self.dimension + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: Complex64) {
        self.matrix[row * self.dimension + col] = value;
    }

    /// Apply a unitary gate: ρ → U ρ U†
    ///
    /// `unitary` is row-major with dimension 2^k for k target qubits;
    /// the first target qubit is the least significant bit of the
    /// matrix index. Only 1- and 2-qubit unitaries are supported —
    /// everything the QAOA gate set produces.
    pub fn apply_unitary(&mut self, unitary: &[Complex64], qubits: &[usize]) -> Result<()> {
        for &q in qubits {
            if q >= self.num_qubits {
                return Err(StateError::InvalidQubitIndex {
                    index: q,
                    num_qubits: self.num_qubits,
                });
            }
        }

        match qubits {
            [q] => {
                self.check_matrix_len(unitary, 2)?;
                self.transform_blocks_1q(*q, |block| conjugate_2x2(unitary, block));
                Ok(())
            }
            [a, b] => {
                self.check_matrix_len(unitary, 4)?;
                self.transform_blocks_2q(*a, *b, |block| conjugate_4x4(unitary, block));
                Ok(())
            }
            _ => Err(StateError::UnsupportedGateArity(qubits.len())),
        }
    }

    /// Apply a single-qubit Kraus channel: ρ → Σᵢ Kᵢ ρ Kᵢ†
    ///
    /// This is the operation that turns pure states into mixtures.
    pub fn apply_kraus_channel(&mut self, kraus_ops: &[KrausOperator], qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(StateError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits,
            });
        }
        for op in kraus_ops {
            if op.dimension() != 2 {
                return Err(StateError::UnsupportedGateArity(op.num_qubits()));
            }
        }

        self.transform_blocks_1q(qubit, |block| {
            let mut acc = [Complex64::new(0.0, 0.0); 4];
            for op in kraus_ops {
                let term = conjugate_2x2(op.matrix(), block);
                for (a, t) in acc.iter_mut().zip(term.iter()) {
                    *a += t;
                }
            }
            acc
        });
        Ok(())
    }

    /// Rewrite every 2x2 block of ρ addressed by qubit `q`
    ///
    /// Blocks are independent, so updates happen in place.
    fn transform_blocks_1q<F>(&mut self, q: usize, f: F)
    where
        F: Fn(&[Complex64; 4]) -> [Complex64; 4],
    {
        let stride = 1usize << q;
        for row in 0..self.dimension {
            if row & stride != 0 {
                continue;
            }
            for col in 0..self.dimension {
                if col & stride != 0 {
                    continue;
                }
                let block = [
                    self.get(row, col),
                    self.get(row, col | stride),
                    self.get(row | stride, col),
                    self.get(row | stride, col | stride),
                ];
                let out = f(&block);
                self.set(row, col, out[0]);
                self.set(row, col | stride, out[1]);
                self.set(row | stride, col, out[2]);
                self.set(row | stride, col | stride, out[3]);
            }
        }
    }

    /// Rewrite every 4x4 block of ρ addressed by qubits `a` (low matrix
    /// bit) and `b` (high matrix bit)
    fn transform_blocks_2q<F>(&mut self, a: usize, b: usize, f: F)
    where
        F: Fn(&[Complex64; 16]) -> [Complex64; 16],
    {
        let sa = 1usize << a;
        let sb = 1usize << b;
        let offset = |m: usize| (if m & 1 != 0 { sa } else { 0 }) | (if m & 2 != 0 { sb } else { 0 });

        for row in 0..self.dimension {
            if row & (sa | sb) != 0 {
                continue;
            }
            for col in 0..self.dimension {
                if col & (sa | sb) != 0 {
                    continue;
                }
                let mut block = [Complex64::new(0.0, 0.0); 16];
                for m in 0..4 {
                    for mp in 0..4 {
                        block[m * 4 + mp] = self.get(row + offset(m), col + offset(mp));
                    }
                }
                let out = f(&block);
                for m in 0..4 {
                    for mp in 0..4 {
                        self.set(row + offset(m), col + offset(mp), out[m * 4 + mp]);
                    }
                }
            }
        }
    }

    fn check_matrix_len(&self, matrix: &[Complex64], dim: usize) -> Result<()> {
        if matrix.len() != dim * dim {
            return Err(StateError::DimensionMismatch {
                expected: dim * dim,
                actual: matrix.len(),
            });
        }
        Ok(())
    }

    /// Tr(ρ) — always 1 for a valid density matrix
    pub fn trace(&self) -> f64 {
        (0..self.dimension).map(|i| self.get(i, i).re).sum()
    }

    /// Purity Tr(ρ²): 1 for pure states, down to 1/2^n when maximally mixed
    pub fn purity(&self) -> f64 {
        let mut trace = Complex64::new(0.0, 0.0);
        for i in 0..self.dimension {
            for j in 0..self.dimension {
                trace += self.get(i, j) * self.get(j, i);
            }
        }
        trace.re
    }

    /// Check trace, hermiticity and diagonal positivity within tolerance
    pub fn is_valid(&self, tolerance: f64) -> bool {
        if (self.trace() - 1.0).abs() > tolerance {
            return false;
        }
        for i in 0..self.dimension {
            if self.get(i, i).re < -tolerance {
                return false;
            }
            for j in (i + 1)..self.dimension {
                if (self.get(i, j) - self.get(j, i).conj()).norm() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

/// U B U† for 2x2 row-major matrices
fn conjugate_2x2(u: &[Complex64], b: &[Complex64; 4]) -> [Complex64; 4] {
    // t = U B
    let mut t = [Complex64::new(0.0, 0.0); 4];
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                t[i * 2 + j] += u[i * 2 + k] * b[k * 2 + j];
            }
        }
    }
    // out = t U†
    let mut out = [Complex64::new(0.0, 0.0); 4];
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                out[i * 2 + j] += t[i * 2 + k] * u[j * 2 + k].conj();
            }
        }
    }
    out
}

/// U B U† for 4x4 row-major matrices
fn conjugate_4x4(u: &[Complex64], b: &[Complex64; 16]) -> [Complex64; 16] {
    let mut t = [Complex64::new(0.0, 0.0); 16];
    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                t[i * 4 + j] += u[i * 4 + k] * b[k * 4 + j];
            }
        }
    }
    let mut out = [Complex64::new(0.0, 0.0); 16];
    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                out[i * 4 + j] += t[i * 4 + k] * u[j * 4 + k].conj();
            }
        }
    }
    out
}

impl fmt::Debug for DensityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DensityMatrix {{ qubits: {}, dim: {}, purity: {:.4} }}",
            self.num_qubits,
            self.dimension,
            self.purity()
        )
    }
}
