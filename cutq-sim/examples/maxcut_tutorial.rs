//! MaxCut on a 4-cycle: ideal vs noisy vs mitigated QAOA
//!
//! Run with: cargo run --example maxcut_tutorial

use cutq_core::Graph;
use cutq_sim::{
    random_initial_parameters, ExtrapolationMethod, MaxCutQaoa, NelderMeadConfig, Result,
    ZneConfig,
};

fn main() -> Result<()> {
    let graph = Graph::cycle(4)?;
    let noise = 0.02;

    println!(
        "MaxCut QAOA on a 4-cycle ({} vertices, {} edges, max cut {})",
        graph.num_vertices(),
        graph.num_edges(),
        graph.max_cut()
    );

    let initial = random_initial_parameters(1, Some(42));
    let opt_config = NelderMeadConfig::default();

    let ideal = MaxCutQaoa::new(graph.clone(), 0.0)?;
    let noisy = MaxCutQaoa::new(graph.clone(), noise)?;
    let mitigated = MaxCutQaoa::new(graph.clone(), noise)?.with_mitigation(ZneConfig {
        scale_factors: vec![1.0, 2.0, 3.0],
        extrapolation: ExtrapolationMethod::Linear,
    })?;

    for (label, problem) in [
        ("ideal", &ideal),
        ("noisy", &noisy),
        ("mitigated", &mitigated),
    ] {
        let result = problem.solve(&initial, &opt_config)?;
        println!(
            "\n{:>10}: best cost {:.6} after {} iterations (converged: {})",
            label, result.best_cost, result.iterations, result.converged
        );
        println!("{:>10}  params: {:?}", "", result.best_params);

        // Print every tenth trajectory point so convergence is visible
        // without drowning the output
        for (i, cost) in result.trajectory.iter().enumerate() {
            if i % 10 == 0 || i + 1 == result.trajectory.len() {
                println!("{:>10}  iter {:3}: {:.6}", "", i, cost);
            }
        }
    }

    Ok(())
}
