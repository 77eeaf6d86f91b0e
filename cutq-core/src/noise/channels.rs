//! Concrete noise channel implementations

use super::types::{KrausOperator, NoiseChannel};
use crate::Result;
use num_complex::Complex64;

/// Depolarizing noise channel
///
/// With probability p the qubit suffers a uniformly random Pauli error;
/// with probability 1-p it is untouched:
///
/// ```text
/// K₀ = √(1-p) I
/// K₁ = √(p/3) X
/// K₂ = √(p/3) Y
/// K₃ = √(p/3) Z
/// ```
///
/// Equivalently, with probability 4p/3 the state is replaced by the
/// maximally mixed state. This is the symmetric noise model the noisy
/// executor injects after each gate.
///
/// # Example
/// ```
/// use cutq_core::noise::DepolarizingChannel;
///
/// let channel = DepolarizingChannel::new(0.01).unwrap();
/// assert_eq!(channel.error_probability(), 0.01);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DepolarizingChannel {
    error_probability: f64,
}

impl DepolarizingChannel {
    /// Create a new depolarizing channel
    ///
    /// # Errors
    /// Returns error if the probability is not in [0, 1]
    pub fn new(error_probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&error_probability) {
            return Err(crate::QuantumError::ValidationError(format!(
                "Error probability must be in [0,1], got {}",
                error_probability
            )));
        }
        Ok(Self { error_probability })
    }

    /// Get the error probability
    pub fn error_probability(&self) -> f64 {
        self.error_probability
    }
}

impl NoiseChannel for DepolarizingChannel {
    fn kraus_operators(&self) -> Vec<KrausOperator> {
        let p = self.error_probability;
        let k0 = (1.0 - p).sqrt();
        let k = (p / 3.0).sqrt();

        let zero = Complex64::new(0.0, 0.0);
        let re = Complex64::new;
        let im = |v: f64| Complex64::new(0.0, v);

        // These matrices are valid by construction; the fallible
        // constructor only guards externally supplied operators.
        let op = |matrix: Vec<Complex64>| KrausOperator::new(matrix, 2).unwrap();

        vec![
            // √(1-p) I
            op(vec![re(k0, 0.0), zero, zero, re(k0, 0.0)]),
            // √(p/3) X
            op(vec![zero, re(k, 0.0), re(k, 0.0), zero]),
            // √(p/3) Y
            op(vec![zero, im(-k), im(k), zero]),
            // √(p/3) Z
            op(vec![re(k, 0.0), zero, zero, re(-k, 0.0)]),
        ]
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "depolarizing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_validation() {
        assert!(DepolarizingChannel::new(0.0).is_ok());
        assert!(DepolarizingChannel::new(1.0).is_ok());
        assert!(DepolarizingChannel::new(-0.1).is_err());
        assert!(DepolarizingChannel::new(1.5).is_err());
    }

    #[test]
    fn test_completeness() {
        let channel = DepolarizingChannel::new(0.05).unwrap();
        assert!(channel.verify_completeness(1e-12));

        let heavy = DepolarizingChannel::new(0.9).unwrap();
        assert!(heavy.verify_completeness(1e-12));
    }

    #[test]
    fn test_zero_noise_is_identity() {
        let channel = DepolarizingChannel::new(0.0).unwrap();
        let ops = channel.kraus_operators();
        assert_eq!(ops.len(), 4);

        // K₀ is the identity, the Pauli terms vanish
        assert!((ops[0].get(0, 0) - Complex64::new(1.0, 0.0)).norm() < 1e-12);
        for op in &ops[1..] {
            for row in 0..2 {
                for col in 0..2 {
                    assert!(op.get(row, col).norm() < 1e-12);
                }
            }
        }
    }
}
