//! MaxCut QAOA with noisy simulation and error mitigation
//!
//! This crate is the top of the cutq stack. It provides:
//!
//! - [`ansatz`]: the parameterized QAOA circuit for a MaxCut graph
//! - [`zne`]: zero-noise extrapolation by global unitary folding
//! - [`optimizer`]: Nelder-Mead simplex search
//! - [`MaxCutQaoa`]: the driver binding a graph, a noise level and an
//!   optional mitigation layer into one fallible cost function
//!
//! # Example
//!
//! ```
//! use cutq_core::Graph;
//! use cutq_sim::{MaxCutQaoa, NelderMeadConfig};
//!
//! let graph = Graph::cycle(4)?;
//! let problem = MaxCutQaoa::new(graph, 0.0)?;
//!
//! let result = problem.solve(&[0.4, 0.2], &NelderMeadConfig::default())?;
//! // The uniform superposition already scores -2; optimization improves on it
//! assert!(result.best_cost < -2.0);
//! # Ok::<(), cutq_sim::SimError>(())
//! ```

pub mod ansatz;
pub mod cost;
pub mod error;
pub mod optimizer;
pub mod zne;

pub use ansatz::{build_ansatz, random_initial_parameters};
pub use cost::MaxCutQaoa;
pub use error::{Result, SimError};
pub use optimizer::{minimize, NelderMeadConfig, OptimizationResult};
pub use zne::{fold_global, ExtrapolationMethod, ZneConfig, ZneExecutor};
