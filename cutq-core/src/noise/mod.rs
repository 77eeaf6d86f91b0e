//! Quantum noise channels in the Kraus-operator formalism
//!
//! The noisy executor models hardware imperfection as an independent
//! depolarizing error applied after every gate. The channel types here
//! are deliberately minimal: a [`KrausOperator`] wrapper, the
//! [`NoiseChannel`] trait, and the [`DepolarizingChannel`] itself.

pub mod channels;
pub mod types;

pub use channels::DepolarizingChannel;
pub use types::{KrausOperator, NoiseChannel};
