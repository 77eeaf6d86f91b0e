//! Zero-noise extrapolation (ZNE)
//!
//! ZNE estimates the noiseless value of an observable without reducing
//! hardware noise: the circuit is run at several amplified noise
//! levels, and the measurements are extrapolated back to zero noise.
//!
//! Noise is amplified by global unitary folding. Because C†C is the
//! identity, replacing a circuit C with C(C†C)^k leaves the ideal
//! result unchanged while multiplying the gate count (and hence the
//! accumulated per-gate noise) by roughly the scale factor λ = 2k + 1.
//! Non-odd scale factors are reached by additionally folding a suffix
//! of the circuit.

use crate::error::{Result, SimError};
use cutq_core::Circuit;
use cutq_state::{CostHamiltonian, DensityMatrixExecutor};

/// How measurements at amplified noise are extrapolated to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtrapolationMethod {
    /// Least-squares straight-line fit, evaluated at zero noise
    ///
    /// Robust to measurement scatter; the default.
    Linear,
    /// Richardson extrapolation (exact polynomial through all points)
    ///
    /// Higher order, but amplifies noise in the data; needs distinct
    /// scale factors.
    Richardson,
}

/// Configuration for zero-noise extrapolation
#[derive(Debug, Clone)]
pub struct ZneConfig {
    /// Noise scale factors, each >= 1.0
    pub scale_factors: Vec<f64>,
    /// Extrapolation method
    pub extrapolation: ExtrapolationMethod,
}

impl Default for ZneConfig {
    fn default() -> Self {
        Self {
            scale_factors: vec![1.0, 3.0],
            extrapolation: ExtrapolationMethod::Linear,
        }
    }
}

/// Scale a circuit's effective noise by global unitary folding
///
/// Returns a circuit implementing the same unitary as `circuit` with
/// roughly `scale` times as many gates: `k = floor((λ-1)/2)` whole
/// C†C folds, plus a folded suffix covering the fractional remainder.
/// A scale of 1.0 returns an unmodified copy.
///
/// # Errors
/// Returns [`SimError::InvalidScaleFactor`] for `scale < 1.0`.
pub fn fold_global(circuit: &Circuit, scale: f64) -> Result<Circuit> {
    if scale < 1.0 || !scale.is_finite() {
        return Err(SimError::InvalidScaleFactor(scale));
    }

    let depth = circuit.len();
    let mut folded = circuit.clone();
    if depth == 0 {
        return Ok(folded);
    }

    let whole_folds = ((scale - 1.0) / 2.0).floor() as usize;
    let inverse = circuit.inverse();

    for _ in 0..whole_folds {
        for op in inverse.operations() {
            folded.push_op(op.clone())?;
        }
        for op in circuit.operations() {
            folded.push_op(op.clone())?;
        }
    }

    // Fold the last s gates to cover the fractional part of the scale:
    // each suffix gate appears twice more, so s = round(frac * d / 2).
    let frac = (scale - 1.0) - 2.0 * whole_folds as f64;
    let suffix = ((frac * depth as f64) / 2.0).round() as usize;
    let suffix = suffix.min(depth);

    if suffix > 0 {
        let start = depth - suffix;
        for idx in (start..depth).rev() {
            if let Some(op) = circuit.get_operation(idx) {
                folded.push_op(op.inverted())?;
            }
        }
        for idx in start..depth {
            if let Some(op) = circuit.get_operation(idx) {
                folded.push_op(op.clone())?;
            }
        }
    }

    Ok(folded)
}

/// Runs a circuit at several folded noise scales and extrapolates the
/// observable to zero noise
#[derive(Debug, Clone)]
pub struct ZneExecutor {
    config: ZneConfig,
}

impl ZneExecutor {
    /// Create a ZNE executor, validating the configuration
    ///
    /// # Errors
    /// Returns error if no scale factors are given, any is below 1.0,
    /// or Richardson extrapolation is requested with repeated scales.
    pub fn new(config: ZneConfig) -> Result<Self> {
        if config.scale_factors.is_empty() {
            return Err(SimError::InvalidConfig(
                "at least one noise scale factor is required".to_string(),
            ));
        }
        for &scale in &config.scale_factors {
            if scale < 1.0 || !scale.is_finite() {
                return Err(SimError::InvalidScaleFactor(scale));
            }
        }
        if config.extrapolation == ExtrapolationMethod::Richardson {
            let s = &config.scale_factors;
            for i in 0..s.len() {
                for j in (i + 1)..s.len() {
                    if (s[i] - s[j]).abs() < 1e-12 {
                        return Err(SimError::InvalidConfig(format!(
                            "Richardson extrapolation needs distinct scale factors, {} repeats",
                            s[i]
                        )));
                    }
                }
            }
        }
        Ok(Self { config })
    }

    /// The configured scale factors
    pub fn scale_factors(&self) -> &[f64] {
        &self.config.scale_factors
    }

    /// Mitigated expectation value of `observable` after `circuit`
    ///
    /// Folds the circuit once per scale factor, evaluates each folded
    /// circuit at the *same* physical noise level, and extrapolates
    /// the (scale, value) samples to scale zero.
    pub fn evaluate(
        &self,
        executor: &DensityMatrixExecutor,
        circuit: &Circuit,
        observable: &CostHamiltonian,
        noise_level: f64,
    ) -> Result<f64> {
        let mut scales = Vec::with_capacity(self.config.scale_factors.len());
        let mut values = Vec::with_capacity(self.config.scale_factors.len());

        for &scale in &self.config.scale_factors {
            let folded = fold_global(circuit, scale)?;
            let value = executor.evaluate(&folded, observable, noise_level)?;
            scales.push(scale);
            values.push(value);
        }

        extrapolate_to_zero(&scales, &values, self.config.extrapolation)
    }
}

/// Extrapolate (scale, value) samples to scale zero
pub fn extrapolate_to_zero(
    scales: &[f64],
    values: &[f64],
    method: ExtrapolationMethod,
) -> Result<f64> {
    if scales.len() != values.len() || scales.is_empty() {
        return Err(SimError::ExtrapolationFailed(format!(
            "need matching non-empty samples, got {} scales and {} values",
            scales.len(),
            values.len()
        )));
    }
    if scales.len() == 1 {
        // A single sample admits no extrapolation; pass it through.
        return Ok(values[0]);
    }

    match method {
        ExtrapolationMethod::Linear => linear_intercept(scales, values),
        ExtrapolationMethod::Richardson => richardson_at_zero(scales, values),
    }
}

/// Intercept of the least-squares line through the samples
fn linear_intercept(xs: &[f64], ys: &[f64]) -> Result<f64> {
    let n = xs.len() as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xx: f64 = xs.iter().map(|x| x * x).sum();
    let sum_xy: f64 = xs.iter().zip(ys.iter()).map(|(x, y)| x * y).sum();

    let denom = n * sum_xx - sum_x * sum_x;
    if denom.abs() < 1e-12 {
        return Err(SimError::ExtrapolationFailed(
            "scale factors are degenerate, fit is singular".to_string(),
        ));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    Ok((sum_y - slope * sum_x) / n)
}

/// Lagrange interpolating polynomial through all samples, at x = 0
fn richardson_at_zero(xs: &[f64], ys: &[f64]) -> Result<f64> {
    let mut total = 0.0;
    for i in 0..xs.len() {
        let mut weight = 1.0;
        for j in 0..xs.len() {
            if i == j {
                continue;
            }
            let denom = xs[i] - xs[j];
            if denom.abs() < 1e-12 {
                return Err(SimError::ExtrapolationFailed(format!(
                    "repeated scale factor {}",
                    xs[i]
                )));
            }
            weight *= -xs[j] / denom;
        }
        total += weight * ys[i];
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutq_core::gates::{Hadamard, RotationZ};
    use cutq_core::QubitId;
    use std::sync::Arc;

    fn sample_circuit() -> Circuit {
        let mut c = Circuit::new(2);
        c.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        c.add_gate(Arc::new(RotationZ::new(0.3)), &[QubitId::new(0)])
            .unwrap();
        c.add_gate(Arc::new(Hadamard), &[QubitId::new(1)]).unwrap();
        c.add_gate(Arc::new(RotationZ::new(0.7)), &[QubitId::new(1)])
            .unwrap();
        c
    }

    #[test]
    fn test_fold_identity_scale() {
        let c = sample_circuit();
        let folded = fold_global(&c, 1.0).unwrap();
        assert_eq!(folded.len(), c.len());
    }

    #[test]
    fn test_fold_triples_gate_count() {
        let c = sample_circuit();
        let folded = fold_global(&c, 3.0).unwrap();
        assert_eq!(folded.len(), 3 * c.len());
    }

    #[test]
    fn test_fold_fractional_scale() {
        let c = sample_circuit();
        // λ = 2: one partial fold of s = round(1 * 4 / 2) = 2 suffix gates
        let folded = fold_global(&c, 2.0).unwrap();
        assert_eq!(folded.len(), c.len() + 4);
    }

    #[test]
    fn test_fold_rejects_small_scale() {
        let c = sample_circuit();
        assert!(matches!(
            fold_global(&c, 0.5),
            Err(SimError::InvalidScaleFactor(_))
        ));
    }

    #[test]
    fn test_linear_extrapolation_exact_line() {
        // y = 2 - 0.5 x passes through the samples exactly
        let scales = [1.0, 3.0, 5.0];
        let values = [1.5, 0.5, -0.5];
        let result = extrapolate_to_zero(&scales, &values, ExtrapolationMethod::Linear).unwrap();
        assert!((result - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_richardson_recovers_quadratic() {
        // y = 1 + x^2: Richardson through 3 points is exact at 0
        let scales = [1.0, 2.0, 3.0];
        let values = [2.0, 5.0, 10.0];
        let result =
            extrapolate_to_zero(&scales, &values, ExtrapolationMethod::Richardson).unwrap();
        assert!((result - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_passes_through() {
        let result = extrapolate_to_zero(&[1.0], &[0.42], ExtrapolationMethod::Linear).unwrap();
        assert!((result - 0.42).abs() < 1e-12);
    }

    #[test]
    fn test_executor_validation() {
        assert!(ZneExecutor::new(ZneConfig {
            scale_factors: vec![],
            extrapolation: ExtrapolationMethod::Linear,
        })
        .is_err());

        assert!(ZneExecutor::new(ZneConfig {
            scale_factors: vec![1.0, 0.5],
            extrapolation: ExtrapolationMethod::Linear,
        })
        .is_err());

        assert!(ZneExecutor::new(ZneConfig {
            scale_factors: vec![1.0, 1.0],
            extrapolation: ExtrapolationMethod::Richardson,
        })
        .is_err());

        assert!(ZneExecutor::new(ZneConfig::default()).is_ok());
    }
}
