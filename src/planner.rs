//! Public API for the tower planner.
//!
//! `PlannerBuilder` configures which solver runs and how its random source
//! is seeded; `Planner` runs it. `solve` is the lower-level entry point for
//! callers that bring their own random source.

use crate::constants::DEFAULT_SEED;
use crate::error::*;
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::*;
use crate::solvers::solver_for;
use log::*;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Solve `instance` with `variant`, drawing any randomness from `rng`.
pub fn solve(
    instance: &Instance,
    variant: SolverVariant,
    rng: &mut dyn RngCore,
) -> PlannerResult<Solution> {
    solver_for(variant)
        .solve(instance, rng)
        .map(|(solution, _)| solution)
}

/// Builder for a configured `Planner`.
#[derive(Clone, Debug)]
pub struct PlannerBuilder {
    variant: SolverVariant,
    seed: u64,
}

impl PlannerBuilder {
    /// Defaults to the deterministic `forreal` solver and seed 0.
    pub fn new() -> Self {
        PlannerBuilder {
            variant: SolverVariant::ForReal,
            seed: DEFAULT_SEED,
        }
    }

    pub fn variant(mut self, variant: SolverVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Seed for the random source handed to the solver. Only `minnie` draws from it.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Planner {
        Planner {
            solver: solver_for(self.variant),
            variant: self.variant,
            seed: self.seed,
        }
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Planner {
    solver: Box<dyn TowerSolver>,
    variant: SolverVariant,
    seed: u64,
}

impl Planner {
    pub fn variant(&self) -> SolverVariant {
        self.variant
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Solve with a fresh random source, so repeated calls give the same answer.
    pub fn solve(&self, instance: &Instance) -> PlannerResult<Solution> {
        self.solve_with_stats(instance).map(|(solution, _)| solution)
    }

    pub fn solve_with_stats(&self, instance: &Instance) -> PlannerResult<(Solution, SolveStats)> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        info!(
            "Solving {} cities on a {}x{} grid with '{}' (seed {})",
            instance.cities.len(),
            instance.grid_side_length,
            instance.grid_side_length,
            self.solver.name(),
            self.seed
        );

        let (solution, stats) = self.solver.solve(instance, &mut rng)?;

        info!(
            "Placed {} towers in {} iterations ({} candidates scored, {} dead cells)",
            solution.towers.len(),
            stats.iterations,
            stats.candidates_scored,
            stats.dead_cells
        );

        Ok((solution, stats))
    }
}
