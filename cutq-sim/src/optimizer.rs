//! Gradient-free parameter optimization
//!
//! Nelder-Mead simplex search over the QAOA parameter space. The
//! method needs only cost-function values, which makes it the usual
//! choice for noisy objectives where finite-difference gradients are
//! unreliable, and it behaves well in the low-dimensional spaces a
//! few-layer ansatz produces.

use crate::error::Result;

/// Configuration for the Nelder-Mead optimizer
#[derive(Debug, Clone)]
pub struct NelderMeadConfig {
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence tolerance on the simplex size
    pub tolerance: f64,
    /// Reflection coefficient
    pub reflection: f64,
    /// Expansion coefficient
    pub expansion: f64,
    /// Contraction coefficient
    pub contraction: f64,
    /// Shrink coefficient
    pub shrink: f64,
    /// Relative perturbation used to build the initial simplex
    pub initial_step: f64,
}

impl Default for NelderMeadConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-6,
            reflection: 1.0,
            expansion: 2.0,
            contraction: 0.5,
            shrink: 0.5,
            initial_step: 0.05,
        }
    }
}

/// Outcome of an optimization run
///
/// Returned for converged and iteration-capped runs alike; in the
/// latter case the fields hold the best point seen so far.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Best cost value found
    pub best_cost: f64,
    /// Parameters achieving the best cost
    pub best_params: Vec<f64>,
    /// Best cost after each iteration, in order
    pub trajectory: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Whether the simplex shrank below tolerance before the cap
    pub converged: bool,
}

/// Minimize a cost function with Nelder-Mead simplex search
///
/// The cost function is fallible; any error it returns aborts the
/// search immediately rather than being masked with a sentinel value.
///
/// # Errors
/// Returns [`crate::error::SimError::InvalidConfig`] for an empty
/// parameter vector, and propagates cost-function errors.
pub fn minimize<F>(
    mut cost_fn: F,
    initial_params: &[f64],
    config: &NelderMeadConfig,
) -> Result<OptimizationResult>
where
    F: FnMut(&[f64]) -> Result<f64>,
{
    if initial_params.is_empty() {
        return Err(crate::error::SimError::InvalidConfig(
            "cannot optimize over an empty parameter vector".to_string(),
        ));
    }

    let n = initial_params.len();
    let mut simplex = initial_simplex(initial_params, config.initial_step);
    let mut costs = Vec::with_capacity(n + 1);
    for vertex in &simplex {
        costs.push(cost_fn(vertex)?);
    }

    let mut trajectory = Vec::with_capacity(config.max_iterations);
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        let order = sorted_indices(&costs);
        let best = order[0];
        let worst = order[n];
        let second_worst = order[n - 1];

        trajectory.push(costs[best]);

        if simplex_size(&simplex, &order[..n]) < config.tolerance {
            converged = true;
            iterations += 1;
            break;
        }

        let centroid = centroid(&simplex, &order[..n]);

        let reflected = affine(&centroid, &simplex[worst], -config.reflection);
        let reflected_cost = cost_fn(&reflected)?;

        if reflected_cost < costs[best] {
            let expanded = affine(&centroid, &reflected, config.expansion);
            let expanded_cost = cost_fn(&expanded)?;
            if expanded_cost < reflected_cost {
                simplex[worst] = expanded;
                costs[worst] = expanded_cost;
            } else {
                simplex[worst] = reflected;
                costs[worst] = reflected_cost;
            }
        } else if reflected_cost < costs[second_worst] {
            simplex[worst] = reflected;
            costs[worst] = reflected_cost;
        } else {
            // Contract toward whichever of worst/reflected is better
            let contracted = if reflected_cost < costs[worst] {
                affine(&centroid, &reflected, config.contraction)
            } else {
                affine(&centroid, &simplex[worst], config.contraction)
            };
            let contracted_cost = cost_fn(&contracted)?;

            if contracted_cost < costs[worst].min(reflected_cost) {
                simplex[worst] = contracted;
                costs[worst] = contracted_cost;
            } else {
                // Shrink every vertex toward the best
                let anchor = simplex[best].clone();
                for (idx, vertex) in simplex.iter_mut().enumerate() {
                    if idx == best {
                        continue;
                    }
                    for (v, &a) in vertex.iter_mut().zip(anchor.iter()) {
                        *v = a + config.shrink * (*v - a);
                    }
                    costs[idx] = cost_fn(vertex)?;
                }
            }
        }

        iterations += 1;
    }

    let best = sorted_indices(&costs)[0];
    Ok(OptimizationResult {
        best_cost: costs[best],
        best_params: simplex[best].clone(),
        trajectory,
        iterations,
        converged,
    })
}

/// Initial simplex: the start point plus one vertex per dimension,
/// perturbed by a relative step
fn initial_simplex(initial: &[f64], step: f64) -> Vec<Vec<f64>> {
    let mut simplex = vec![initial.to_vec()];
    for i in 0..initial.len() {
        let mut vertex = initial.to_vec();
        vertex[i] += if vertex[i].abs() > 1e-10 {
            vertex[i] * step
        } else {
            step
        };
        simplex.push(vertex);
    }
    simplex
}

fn sorted_indices(costs: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..costs.len()).collect();
    indices.sort_by(|&a, &b| costs[a].total_cmp(&costs[b]));
    indices
}

fn centroid(simplex: &[Vec<f64>], indices: &[usize]) -> Vec<f64> {
    let n = simplex[0].len();
    let mut centroid = vec![0.0; n];
    for &idx in indices {
        for (c, &v) in centroid.iter_mut().zip(simplex[idx].iter()) {
            *c += v;
        }
    }
    for c in &mut centroid {
        *c /= indices.len() as f64;
    }
    centroid
}

/// Point c + t * (p - c), the shared form of reflection, expansion and
/// contraction
fn affine(c: &[f64], p: &[f64], t: f64) -> Vec<f64> {
    c.iter().zip(p.iter()).map(|(&c, &p)| c + t * (p - c)).collect()
}

/// Maximum vertex distance from the centroid of the non-worst vertices
fn simplex_size(simplex: &[Vec<f64>], indices: &[usize]) -> f64 {
    let centroid = centroid(simplex, indices);
    indices
        .iter()
        .map(|&idx| {
            simplex[idx]
                .iter()
                .zip(centroid.iter())
                .map(|(a, b)| (a - b).powi(2))
                .sum::<f64>()
                .sqrt()
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimizes_quadratic() {
        let result = minimize(
            |p| Ok((p[0] - 2.0).powi(2) + (p[1] + 1.0).powi(2)),
            &[0.0, 0.0],
            &NelderMeadConfig::default(),
        )
        .unwrap();

        assert!(result.best_cost < 1e-8);
        assert!((result.best_params[0] - 2.0).abs() < 1e-3);
        assert!((result.best_params[1] + 1.0).abs() < 1e-3);
        assert!(result.converged);
    }

    #[test]
    fn test_trajectory_is_monotone_nonincreasing() {
        let result = minimize(
            |p| Ok(p[0] * p[0] + 0.5 * p[1] * p[1]),
            &[3.0, -2.0],
            &NelderMeadConfig::default(),
        )
        .unwrap();

        for pair in result.trajectory.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-12);
        }
    }

    #[test]
    fn test_iteration_cap_returns_best_seen() {
        let config = NelderMeadConfig {
            max_iterations: 3,
            ..Default::default()
        };
        let result = minimize(|p| Ok(p[0] * p[0]), &[10.0], &config).unwrap();

        assert!(!result.converged);
        assert_eq!(result.iterations, 3);
        assert!(result.best_cost <= 100.0);
        assert_eq!(result.trajectory.len(), 3);
    }

    #[test]
    fn test_cost_error_propagates() {
        let result = minimize(
            |_| -> Result<f64> {
                Err(crate::error::SimError::InvalidConfig("boom".to_string()))
            },
            &[1.0],
            &NelderMeadConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_parameters_rejected() {
        let result = minimize(|_| Ok(0.0), &[], &NelderMeadConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_deterministic() {
        let run = || {
            minimize(
                |p| Ok((p[0] - 1.0).powi(2) + p[1].powi(2)),
                &[0.3, 0.8],
                &NelderMeadConfig::default(),
            )
            .unwrap()
        };
        let a = run();
        let b = run();
        assert_eq!(a.best_params, b.best_params);
        assert_eq!(a.trajectory, b.trajectory);
    }
}
