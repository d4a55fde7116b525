//! Runs every selected solver on every instance and times each solve.

use crate::algorithm::SatSolver;
use crate::formula::instances::Instance;
use crate::SatResult;
use log::{debug, info, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::time::{Duration, Instant};

/// One solver run on one instance.
#[derive(Clone, Debug)]
pub struct Record {
    pub instance_id: String,
    pub num_variables: usize,
    pub num_clauses: usize,
    pub status: String,
    pub elapsed: Duration,
    pub label: String,
    pub result: SatResult,
}

fn solve_one<S: SatSolver + ?Sized>(instance: &Instance, solver: &S) -> Record {
    let start = Instant::now();
    let result = solver.solve(&instance.formula);
    let elapsed = start.elapsed();

    info!(
        "instance {} ({} vars, {} clauses): {} in {:?} by {}",
        instance.id,
        instance.formula.num_variables(),
        instance.formula.num_clauses(),
        if result.is_satisfiable() { "SAT" } else { "UNSAT" },
        elapsed,
        solver.label()
    );

    Record {
        instance_id: instance.id.clone(),
        num_variables: instance.formula.num_variables(),
        num_clauses: instance.formula.num_clauses(),
        status: instance.status.clone(),
        elapsed,
        label: solver.label().to_string(),
        result,
    }
}

/// Solves each instance with each solver, on up to `jobs` threads.
///
/// Records come back instance-major, solvers in the order given, whatever the
/// number of threads.
pub fn run<S: SatSolver + Sync>(instances: &[Instance], solvers: &[S], jobs: usize) -> Vec<Record> {
    let tasks: Vec<(&Instance, &S)> = instances
        .iter()
        .flat_map(|instance| solvers.iter().map(move |solver| (instance, solver)))
        .collect();
    let jobs = jobs.max(1).min(tasks.len().max(1));

    if jobs == 1 {
        return tasks.iter().map(|(instance, solver)| solve_one(*instance, *solver)).collect();
    }

    debug!("solving {} tasks on {} threads", tasks.len(), jobs);
    match ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => pool.install(|| {
            tasks
                .par_iter()
                .map(|(instance, solver)| solve_one(*instance, *solver))
                .collect()
        }),
        Err(e) => {
            warn!("could not start {} threads ({}), solving serially", jobs, e);
            tasks.iter().map(|(instance, solver)| solve_one(*instance, *solver)).collect()
        }
    }
}
