//! SimpleGreedySolver: place the cell covering the most uncovered cities.
//!
//! Only one candidate is tracked during the scan, and any cell whose coverage
//! is at least the best so far replaces it, so among equal cells the last one
//! in row-major order wins. Placed-tower proximity is ignored.

use crate::error::*;
use crate::greedy::*;
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::*;
use rand::RngCore;

pub struct SimpleGreedySolver;

impl TowerSolver for SimpleGreedySolver {
    fn name(&self) -> &str {
        "simple-greedy"
    }

    fn solve(
        &self,
        instance: &Instance,
        _rng: &mut dyn RngCore,
    ) -> PlannerResult<(Solution, SolveStats)> {
        GreedyEngine::new(instance)?.run(TiePolicy::LastWins, |candidates, _state| {
            candidates.last().copied()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn picks_last_maximal_cell() {
        let instance = Instance::new(3, 1, 1, [Point::new(0, 0)]).unwrap();
        let (solution, _) = SimpleGreedySolver
            .solve(&instance, &mut ChaCha8Rng::seed_from_u64(0))
            .unwrap();
        assert_eq!(solution.towers, vec![Point::new(1, 0)]);
    }

    #[test]
    fn prefers_cell_covering_more_cities() {
        let instance = Instance::new(
            6,
            1,
            1,
            [Point::new(2, 1), Point::new(2, 3), Point::new(5, 5)],
        )
        .unwrap();
        let (solution, stats) = SimpleGreedySolver
            .solve(&instance, &mut ChaCha8Rng::seed_from_u64(0))
            .unwrap();
        assert_eq!(solution.towers[0], Point::new(2, 2));
        assert_eq!(solution.towers.len(), 2);
        assert_eq!(stats.iterations, 2);
        assert!(solution.valid());
    }
}
