//! MinnieSolver: as `ForRealSolver`, but the remaining ties are broken by a
//! uniform draw from the caller's random source. Reproducible for a fixed seed.

use crate::error::*;
use crate::greedy::*;
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::*;
use rand::seq::IndexedRandom;
use rand::RngCore;

pub struct MinnieSolver;

impl TowerSolver for MinnieSolver {
    fn name(&self) -> &str {
        "minnie"
    }

    fn solve(
        &self,
        instance: &Instance,
        rng: &mut dyn RngCore,
    ) -> PlannerResult<(Solution, SolveStats)> {
        let penalty_radius = instance.penalty_radius;

        GreedyEngine::new(instance)?.run(TiePolicy::KeepAll, |candidates, state| {
            least_crowded(candidates, &state.towers, penalty_radius)
                .choose(&mut *rng)
                .copied()
        })
    }
}
