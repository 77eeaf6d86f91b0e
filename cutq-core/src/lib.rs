//! Core types for the cutq MaxCut/QAOA toolkit
//!
//! This crate provides the fundamental building blocks shared by the
//! simulation and algorithm layers:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`Gate`]: Trait for unitary quantum operations
//! - [`Circuit`]: Quantum circuit container
//! - [`Graph`]: Undirected problem graphs with cut counting
//! - [`noise`]: Kraus-operator noise channels
//!
//! # Example
//! ```
//! use cutq_core::{Circuit, Graph, QubitId};
//!
//! let graph = Graph::cycle(4).unwrap();
//! let mut circuit = Circuit::new(graph.num_vertices());
//! assert_eq!(circuit.num_qubits(), 4);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod gates;
pub mod graph;
pub mod noise;
pub mod qubit;

// Re-exports for convenience
pub use circuit::Circuit;
pub use error::QuantumError;
pub use gate::{Gate, GateOp};
pub use graph::Graph;
pub use num_complex::Complex64;
pub use qubit::QubitId;

/// Type alias for results in cutq-core
pub type Result<T> = std::result::Result<T, QuantumError>;
