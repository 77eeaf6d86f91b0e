//! Mixed-state simulation for noisy QAOA circuits
//!
//! This crate provides the dense density-matrix substrate the noisy
//! executor runs on:
//!
//! - [`DensityMatrix`]: full 2^n x 2^n mixed-state representation with
//!   strided unitary and Kraus-channel application
//! - [`CostHamiltonian`]: the diagonal MaxCut cost operator, stored as
//!   its 2^n eigenvalue vector
//! - [`DensityMatrixExecutor`]: circuit + observable + noise level →
//!   real expectation value
//!
//! Memory scales as O(4^n); this caps feasible problem sizes at small
//! vertex counts and is the accepted cost of exact noise simulation.

pub mod density_matrix;
pub mod error;
pub mod executor;
pub mod hamiltonian;

pub use density_matrix::DensityMatrix;
pub use error::{Result, StateError};
pub use executor::{DensityMatrixExecutor, ExecutorConfig};
pub use hamiltonian::CostHamiltonian;
