//! MaxCut cost Hamiltonian
//!
//! The MaxCut cost operator C = Σ_{(i,j)∈E} -1/2 (I - ZᵢZⱼ) is
//! diagonal in the computational basis, so it is stored as its 2^n
//! eigenvalue vector rather than a full matrix. The eigenvalue at
//! basis index k is minus the number of edges cut by the partition
//! encoded in the bits of k; minimizing ⟨C⟩ therefore maximizes the
//! cut.

use crate::density_matrix::DensityMatrix;
use crate::error::{Result, StateError};
use cutq_core::Graph;

/// Diagonal cost Hamiltonian for a MaxCut instance
#[derive(Debug, Clone)]
pub struct CostHamiltonian {
    num_qubits: usize,
    diagonal: Vec<f64>,
}

impl CostHamiltonian {
    /// Build the cost Hamiltonian for a graph
    ///
    /// Vertex i of the graph corresponds to qubit i, read off as bit i
    /// of the basis index. Each edge (i, j) contributes -1 to the
    /// eigenvalue of every basis state in which qubits i and j
    /// disagree.
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        let num_qubits = graph.num_vertices();
        let dimension = 1usize
            .checked_shl(num_qubits as u32)
            .ok_or(StateError::TooManyQubits { num_qubits })?;

        let mut diagonal = vec![0.0; dimension];
        for &(i, j) in graph.edges() {
            for (k, value) in diagonal.iter_mut().enumerate() {
                let zi = if (k >> i) & 1 == 1 { 1.0 } else { -1.0 };
                let zj = if (k >> j) & 1 == 1 { 1.0 } else { -1.0 };
                *value += -0.5 * (1.0 - zi * zj);
            }
        }

        Ok(Self {
            num_qubits,
            diagonal,
        })
    }

    /// Number of qubits the Hamiltonian acts on
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the underlying Hilbert space
    pub fn dimension(&self) -> usize {
        self.diagonal.len()
    }

    /// The diagonal eigenvalue vector, indexed by basis state
    pub fn diagonal(&self) -> &[f64] {
        &self.diagonal
    }

    /// Expectation value Tr(C ρ) = Σₖ C[k] ρₖₖ
    ///
    /// # Errors
    /// Returns error if the density matrix lives in a different
    /// Hilbert space, or if the diagonal of ρ carries a residual
    /// imaginary part beyond numerical tolerance.
    pub fn expectation(&self, state: &DensityMatrix) -> Result<f64> {
        if state.dimension() != self.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: self.dimension(),
                actual: state.dimension(),
            });
        }

        let mut real = 0.0;
        let mut imag = 0.0;
        for (k, &value) in self.diagonal.iter().enumerate() {
            let rho_kk = state.get(k, k);
            real += value * rho_kk.re;
            imag += value * rho_kk.im;
        }

        if imag.abs() > 1e-9 {
            return Err(StateError::ResidualImaginary { imag });
        }
        Ok(real)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cutq_core::gates::{Hadamard, PauliX};
    use cutq_core::Gate;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_diagonal_matches_cut_counts() {
        let graph = Graph::cycle(4).unwrap();
        let h = CostHamiltonian::from_graph(&graph).unwrap();

        for k in 0..h.dimension() {
            let cuts = graph.count_cuts_from_index(k) as f64;
            assert!(
                (h.diagonal()[k] + cuts).abs() < TOL,
                "index {}: eigenvalue {} vs -cuts {}",
                k,
                h.diagonal()[k],
                -cuts
            );
        }
    }

    #[test]
    fn test_single_edge_eigenvalues() {
        let graph = Graph::from_edges(&[(0, 1)]).unwrap();
        let h = CostHamiltonian::from_graph(&graph).unwrap();

        // |00> and |11> cut nothing; |01> and |10> cut the edge
        assert!((h.diagonal()[0b00] - 0.0).abs() < TOL);
        assert!((h.diagonal()[0b01] + 1.0).abs() < TOL);
        assert!((h.diagonal()[0b10] + 1.0).abs() < TOL);
        assert!((h.diagonal()[0b11] - 0.0).abs() < TOL);
    }

    #[test]
    fn test_expectation_on_basis_state() {
        let graph = Graph::cycle(4).unwrap();
        let h = CostHamiltonian::from_graph(&graph).unwrap();

        // Prepare |0101> (qubits 0 and 2 flipped): the optimal 4-cut
        let mut dm = DensityMatrix::new(4).unwrap();
        dm.apply_unitary(&PauliX.matrix(), &[0]).unwrap();
        dm.apply_unitary(&PauliX.matrix(), &[2]).unwrap();

        let value = h.expectation(&dm).unwrap();
        assert!((value + 4.0).abs() < TOL);
    }

    #[test]
    fn test_expectation_uniform_superposition() {
        // On the uniform superposition, <C> = -|E|/2
        let graph = Graph::cycle(4).unwrap();
        let h = CostHamiltonian::from_graph(&graph).unwrap();

        let mut dm = DensityMatrix::new(4).unwrap();
        for q in 0..4 {
            dm.apply_unitary(&Hadamard.matrix(), &[q]).unwrap();
        }

        let value = h.expectation(&dm).unwrap();
        assert_relative_eq!(value, -2.0, epsilon = TOL);
    }

    #[test]
    fn test_dimension_mismatch() {
        let graph = Graph::from_edges(&[(0, 1)]).unwrap();
        let h = CostHamiltonian::from_graph(&graph).unwrap();
        let dm = DensityMatrix::new(3).unwrap();

        assert!(matches!(
            h.expectation(&dm),
            Err(StateError::DimensionMismatch { .. })
        ));
    }
}
