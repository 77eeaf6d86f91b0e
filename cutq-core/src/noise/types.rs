//! Core types and traits for noise modeling

use crate::Result;
use num_complex::Complex64;
use std::fmt;

/// A Kraus operator representing part of a quantum operation
///
/// A channel is described by a set of Kraus operators {K_i} satisfying
/// the completeness relation Σ K_i† K_i = I, and transforms a density
/// matrix as ρ → Σ_i K_i ρ K_i†.
#[derive(Clone, Debug)]
pub struct KrausOperator {
    matrix: Vec<Complex64>,
    dimension: usize,
}

impl KrausOperator {
    /// Create a new Kraus operator from a row-major flattened matrix
    ///
    /// # Errors
    /// Returns error if the dimension is not a power of 2 or the matrix
    /// length doesn't match it.
    pub fn new(matrix: Vec<Complex64>, dimension: usize) -> Result<Self> {
        if !dimension.is_power_of_two() {
            return Err(crate::QuantumError::ValidationError(format!(
                "Kraus operator dimension must be a power of 2, got {}",
                dimension
            )));
        }
        if matrix.len() != dimension * dimension {
            return Err(crate::QuantumError::ValidationError(format!(
                "Kraus matrix has {} elements, expected {}x{}",
                matrix.len(),
                dimension,
                dimension
            )));
        }
        Ok(Self { matrix, dimension })
    }

    /// Number of qubits this operator acts on
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.dimension.trailing_zeros() as usize
    }

    /// Dimension of the square matrix
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Matrix element at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.matrix[row * self.dimension + col]
    }

    /// The flattened matrix
    #[inline]
    pub fn matrix(&self) -> &[Complex64] {
        &self.matrix
    }

    /// The adjoint (conjugate transpose) of this operator
    pub fn adjoint(&self) -> Self {
        let dim = self.dimension;
        let mut adj = vec![Complex64::new(0.0, 0.0); self.matrix.len()];
        for i in 0..dim {
            for j in 0..dim {
                adj[j * dim + i] = self.matrix[i * dim + j].conj();
            }
        }
        Self {
            matrix: adj,
            dimension: dim,
        }
    }
}

/// Trait for quantum noise channels
pub trait NoiseChannel: Send + Sync + fmt::Debug {
    /// The Kraus operators defining this channel
    ///
    /// Must satisfy Σ K_i† K_i = I within numerical precision.
    fn kraus_operators(&self) -> Vec<KrausOperator>;

    /// Number of qubits this channel acts on
    fn num_qubits(&self) -> usize;

    /// Name of this channel
    fn name(&self) -> &str;

    /// Verify the completeness relation Σ K_i† K_i = I
    fn verify_completeness(&self, tolerance: f64) -> bool {
        let operators = self.kraus_operators();
        let dim = match operators.first() {
            Some(op) => op.dimension(),
            None => return false,
        };

        let mut sum = vec![Complex64::new(0.0, 0.0); dim * dim];
        for kraus in &operators {
            let adj = kraus.adjoint();
            for i in 0..dim {
                for j in 0..dim {
                    let mut element = Complex64::new(0.0, 0.0);
                    for k in 0..dim {
                        element += adj.get(i, k) * kraus.get(k, j);
                    }
                    sum[i * dim + j] += element;
                }
            }
        }

        sum.iter().enumerate().all(|(idx, value)| {
            let expected = if idx / dim == idx % dim { 1.0 } else { 0.0 };
            (value - Complex64::new(expected, 0.0)).norm() <= tolerance
        })
    }
}
