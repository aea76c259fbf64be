pub mod cli;
pub mod constants;
pub mod dead_cells;
pub mod error;
pub mod greedy;
pub mod grid;
pub mod instance;
pub mod planner;
pub mod point;
pub mod scoring;
pub mod solution;
pub mod solver;
pub mod solvers;

pub use error::{PlannerError, PlannerResult};
pub use instance::Instance;
pub use planner::{solve, Planner, PlannerBuilder};
pub use point::Point;
pub use solution::Solution;
pub use solver::{SolveStats, SolverVariant, TowerSolver};
