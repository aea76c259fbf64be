//! ForRealSolver: greedy max coverage, ties broken by crowding.
//!
//! All cells achieving the best coverage are kept. Among them, the ones with
//! the fewest placed towers inside the penalty radius survive, and the last of
//! those in row-major order is placed. The result is fully deterministic.

use crate::error::*;
use crate::greedy::*;
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::*;
use rand::RngCore;

pub struct ForRealSolver;

impl TowerSolver for ForRealSolver {
    fn name(&self) -> &str {
        "forreal"
    }

    fn solve(
        &self,
        instance: &Instance,
        _rng: &mut dyn RngCore,
    ) -> PlannerResult<(Solution, SolveStats)> {
        let penalty_radius = instance.penalty_radius;

        GreedyEngine::new(instance)?.run(TiePolicy::KeepAll, |candidates, state| {
            least_crowded(candidates, &state.towers, penalty_radius)
                .last()
                .copied()
        })
    }
}
