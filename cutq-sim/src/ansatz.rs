//! QAOA ansatz construction for MaxCut
//!
//! The ansatz starts from the uniform superposition (a Hadamard on
//! every qubit) and alternates p layers of cost and mixing evolution:
//!
//! - cost layer exp(-i γ ZᵢZⱼ) per edge, compiled to CNOT · RZ(2γ) · CNOT
//! - mixing layer exp(-i β Xᵢ) per qubit, compiled to RX(2β)
//!
//! Parameters are passed as a single flat vector `[γ₁..γₚ, β₁..βₚ]`
//! with all gammas first, so layer l reads `params[l]` and
//! `params[p + l]`.

use crate::error::{Result, SimError};
use cutq_core::gates::{CNot, Hadamard, RotationX, RotationZ};
use cutq_core::{Circuit, Graph, QubitId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Build the QAOA ansatz circuit for a graph
///
/// One qubit per vertex. The number of layers p is inferred from the
/// parameter count, which must be even (p gammas followed by p betas);
/// an empty parameter vector produces just the Hadamard wall.
///
/// # Errors
/// Returns [`SimError::OddParameterCount`] for an odd-length parameter
/// vector.
pub fn build_ansatz(graph: &Graph, params: &[f64]) -> Result<Circuit> {
    if params.len() % 2 != 0 {
        return Err(SimError::OddParameterCount(params.len()));
    }
    let layers = params.len() / 2;
    let (gammas, betas) = params.split_at(layers);

    let num_qubits = graph.num_vertices();
    let ops_per_layer = 3 * graph.num_edges() + num_qubits;
    let mut circuit = Circuit::with_capacity(num_qubits, num_qubits + layers * ops_per_layer);

    // Uniform superposition over all bipartitions
    for q in 0..num_qubits {
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(q)])?;
    }

    for (&gamma, &beta) in gammas.iter().zip(betas.iter()) {
        apply_cost_layer(&mut circuit, graph, gamma)?;
        apply_mixing_layer(&mut circuit, num_qubits, beta)?;
    }

    Ok(circuit)
}

/// Append exp(-i γ ZᵢZⱼ) for every edge
fn apply_cost_layer(circuit: &mut Circuit, graph: &Graph, gamma: f64) -> Result<()> {
    for &(i, j) in graph.edges() {
        let qi = QubitId::new(i);
        let qj = QubitId::new(j);
        circuit.add_gate(Arc::new(CNot), &[qi, qj])?;
        circuit.add_gate(Arc::new(RotationZ::new(2.0 * gamma)), &[qj])?;
        circuit.add_gate(Arc::new(CNot), &[qi, qj])?;
    }
    Ok(())
}

/// Append exp(-i β Xᵢ) for every qubit
fn apply_mixing_layer(circuit: &mut Circuit, num_qubits: usize, beta: f64) -> Result<()> {
    for q in 0..num_qubits {
        circuit.add_gate(Arc::new(RotationX::new(2.0 * beta)), &[QubitId::new(q)])?;
    }
    Ok(())
}

/// Generate random initial parameters for a p-layer ansatz
///
/// Gammas are drawn uniformly from [0, π] and betas from [0, π/2],
/// matching the periodicity of the respective evolutions on an
/// unweighted graph. A fixed seed gives a reproducible starting point.
pub fn random_initial_parameters(layers: usize, seed: Option<u64>) -> Vec<f64> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut params = Vec::with_capacity(2 * layers);
    for _ in 0..layers {
        params.push(rng.gen::<f64>() * std::f64::consts::PI);
    }
    for _ in 0..layers {
        params.push(rng.gen::<f64>() * std::f64::consts::FRAC_PI_2);
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_count() {
        let graph = Graph::cycle(4).unwrap();
        let circuit = build_ansatz(&graph, &[0.5, 0.3]).unwrap();

        // 4 Hadamards + 4 edges * 3 gates + 4 RX
        assert_eq!(circuit.num_qubits(), 4);
        assert_eq!(circuit.len(), 4 + 4 * 3 + 4);
    }

    #[test]
    fn test_zero_layers() {
        let graph = Graph::cycle(3).unwrap();
        let circuit = build_ansatz(&graph, &[]).unwrap();
        assert_eq!(circuit.len(), 3);
    }

    #[test]
    fn test_two_layers() {
        let graph = Graph::path(3).unwrap();
        // gammas [0.1, 0.2], betas [0.3, 0.4]
        let circuit = build_ansatz(&graph, &[0.1, 0.2, 0.3, 0.4]).unwrap();
        assert_eq!(circuit.len(), 3 + 2 * (2 * 3 + 3));
    }

    #[test]
    fn test_odd_parameter_count_rejected() {
        let graph = Graph::cycle(3).unwrap();
        assert!(matches!(
            build_ansatz(&graph, &[0.1, 0.2, 0.3]),
            Err(SimError::OddParameterCount(3))
        ));
    }

    #[test]
    fn test_layer_structure() {
        let graph = Graph::path(2).unwrap();
        let circuit = build_ansatz(&graph, &[0.5, 0.25]).unwrap();

        let names: Vec<_> = circuit.operations().map(|op| op.gate().name()).collect();
        assert_eq!(
            names,
            vec!["H", "H", "CNOT", "RZ", "CNOT", "RX", "RX"]
        );
    }

    #[test]
    fn test_random_parameters_bounds() {
        let params = random_initial_parameters(3, Some(42));
        assert_eq!(params.len(), 6);
        for &gamma in &params[..3] {
            assert!((0.0..=std::f64::consts::PI).contains(&gamma));
        }
        for &beta in &params[3..] {
            assert!((0.0..=std::f64::consts::FRAC_PI_2).contains(&beta));
        }
    }

    #[test]
    fn test_random_parameters_deterministic_with_seed() {
        let a = random_initial_parameters(2, Some(7));
        let b = random_initial_parameters(2, Some(7));
        assert_eq!(a, b);
    }
}
