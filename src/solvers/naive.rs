//! NaiveSolver: one tower on every city. A baseline, not an optimiser.

use crate::error::*;
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::*;
use rand::RngCore;

pub struct NaiveSolver;

impl TowerSolver for NaiveSolver {
    fn name(&self) -> &str {
        "naive"
    }

    fn solve(
        &self,
        instance: &Instance,
        _rng: &mut dyn RngCore,
    ) -> PlannerResult<(Solution, SolveStats)> {
        instance.check()?;

        let stats = SolveStats {
            iterations: instance.cities.len(),
            ..SolveStats::default()
        };

        Ok((Solution::new(instance.clone(), instance.cities.clone()), stats))
    }
}
