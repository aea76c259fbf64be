pub mod forreal;
pub mod minnie;
pub mod naive;
pub mod simple_greedy;

pub use forreal::ForRealSolver;
pub use minnie::MinnieSolver;
pub use naive::NaiveSolver;
pub use simple_greedy::SimpleGreedySolver;

use crate::error::*;
use crate::solver::{SolverVariant, TowerSolver};

/// Build the solver for a variant.
pub fn solver_for(variant: SolverVariant) -> Box<dyn TowerSolver> {
    match variant {
        SolverVariant::Naive => Box::new(NaiveSolver),
        SolverVariant::SimpleGreedy => Box::new(SimpleGreedySolver),
        SolverVariant::ForReal => Box::new(ForRealSolver),
        SolverVariant::Minnie => Box::new(MinnieSolver),
    }
}

/// Every registered solver, in `SolverVariant::ALL` order.
pub fn default_solvers() -> Vec<Box<dyn TowerSolver>> {
    SolverVariant::ALL.iter().map(|v| solver_for(*v)).collect()
}

/// Look a solver up by its command-line name.
pub fn solver_by_name(name: &str) -> PlannerResult<Box<dyn TowerSolver>> {
    name.parse::<SolverVariant>().map(solver_for)
}
