//! Greedy engine shared by the coverage-maximising solvers.
//!
//! Each iteration scans every live grid cell in row-major order, scores it
//! against the cities still uncovered, marks zero-coverage cells dead, and
//! hands the best-coverage candidates to a selector that picks the tower to
//! place. The loop ends when no city remains. Live cells are rescored from
//! scratch every iteration; only dead cells are skipped.

use crate::error::*;
use crate::grid::grid_cells;
use crate::instance::Instance;
use crate::point::Point;
use crate::scoring::*;
use crate::solution::Solution;
use crate::solver::*;
use itertools::Itertools;
use log::*;

/// How the scan treats cells that tie the best coverage seen so far.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TiePolicy {
    /// Keep a single candidate; a later cell with coverage >= the best replaces it.
    LastWins,
    /// Keep every cell achieving the best coverage, in scan order.
    KeepAll,
}

/// Result of scanning the grid once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scan {
    /// Best coverage count seen. Zero when no live cell covers anything.
    pub best_coverage: usize,
    /// Cells achieving `best_coverage`, in row-major order.
    pub candidates: Vec<Point>,
}

pub struct GreedyEngine<'a> {
    instance: &'a Instance,
    state: PlacementState,
    stats: SolveStats,
}

impl<'a> GreedyEngine<'a> {
    pub fn new(instance: &'a Instance) -> PlannerResult<Self> {
        instance.check()?;

        Ok(GreedyEngine {
            instance,
            state: PlacementState::new(instance),
            stats: SolveStats::default(),
        })
    }

    pub fn state(&self) -> &PlacementState {
        &self.state
    }

    pub fn stats(&self) -> SolveStats {
        SolveStats {
            dead_cells: self.state.dead.count(),
            ..self.stats
        }
    }

    /// Score every live cell against the remaining cities.
    pub fn scan(&mut self, policy: TiePolicy) -> Scan {
        let radius = self.instance.coverage_radius;
        let mut scan = Scan::default();

        for cell in grid_cells(self.instance.grid_side_length) {
            if self.state.dead.is_dead(cell) {
                continue;
            }

            self.stats.candidates_scored += 1;
            let count = coverage_count(cell, &self.state.remaining, radius);

            if count == 0 {
                self.state.dead.mark(cell);
                continue;
            }

            let replaces = match policy {
                TiePolicy::LastWins => count >= scan.best_coverage,
                TiePolicy::KeepAll => count > scan.best_coverage,
            };

            if replaces {
                scan.best_coverage = count;
                scan.candidates.clear();
                scan.candidates.push(cell);
            } else if policy == TiePolicy::KeepAll && count == scan.best_coverage {
                scan.candidates.push(cell);
            }
        }

        scan
    }

    /// Place a tower, dropping the cities it covers. Returns how many it covered.
    pub fn place(&mut self, tower: Point) -> usize {
        self.stats.iterations += 1;
        self.state.place_tower(tower, self.instance.coverage_radius)
    }

    /// Run to completion. `select` receives the non-empty candidate list and
    /// the current state and returns the tower to place; returning `None` is
    /// treated as having no usable cell.
    pub fn run<F>(
        mut self,
        policy: TiePolicy,
        mut select: F,
    ) -> PlannerResult<(Solution, SolveStats)>
    where
        F: FnMut(&[Point], &PlacementState) -> Option<Point>,
    {
        while !self.state.is_done() {
            let scan = if self.state.dead.is_exhausted() {
                Scan::default()
            } else {
                self.scan(policy)
            };

            let tower = if scan.candidates.is_empty() {
                None
            } else {
                select(&scan.candidates, &self.state)
            };

            let Some(tower) = tower else {
                debug!(
                    "Grid exhausted with {} cities uncovered after {} towers",
                    self.state.remaining.len(),
                    self.state.towers.len()
                );
                return Err(PlannerError::UnsatisfiableInstance {
                    uncovered: self.state.remaining.len(),
                });
            };

            debug_assert!(!self.state.dead.is_dead(tower));

            let covered = self.place(tower);

            trace!(
                "Tower {} at ({}) covers {} cities ({} tied candidates), {} remaining",
                self.state.towers.len(),
                tower,
                covered,
                scan.candidates.len(),
                self.state.remaining.len()
            );
        }

        let stats = self.stats();
        debug!(
            "Greedy solve complete: towers={}, candidates_scored={}, dead_cells={}",
            self.state.towers.len(),
            stats.candidates_scored,
            stats.dead_cells
        );

        Ok((
            Solution::new(self.instance.clone(), self.state.towers),
            stats,
        ))
    }
}

/// Candidates with the fewest placed towers inside the penalty radius,
/// keeping the input order.
pub fn least_crowded(candidates: &[Point], towers: &[Point], penalty_radius: i32) -> Vec<Point> {
    candidates
        .iter()
        .copied()
        .min_set_by_key(|candidate| crowding_count(*candidate, towers, penalty_radius))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(side: i32, radius: i32, cities: &[(i32, i32)]) -> Instance {
        Instance::new(side, radius, radius, cities.iter().map(|&c| Point::from(c))).unwrap()
    }

    #[test]
    fn scan_marks_zero_coverage_cells_dead() {
        let instance = instance(3, 1, &[(0, 0)]);
        let mut engine = GreedyEngine::new(&instance).unwrap();

        let scan = engine.scan(TiePolicy::KeepAll);
        assert_eq!(scan.best_coverage, 1);
        assert_eq!(
            scan.candidates,
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 0)]
        );
        assert_eq!(engine.state().dead.count(), 6);
        assert_eq!(engine.stats().candidates_scored, 9);

        // Dead cells are not rescored.
        engine.scan(TiePolicy::KeepAll);
        assert_eq!(engine.stats().candidates_scored, 12);
    }

    #[test]
    fn last_wins_keeps_final_tie_in_scan_order() {
        let instance = instance(3, 1, &[(0, 0)]);
        let mut engine = GreedyEngine::new(&instance).unwrap();

        let scan = engine.scan(TiePolicy::LastWins);
        assert_eq!(scan.candidates, vec![Point::new(1, 0)]);
    }

    #[test]
    fn keep_all_resets_on_strictly_better_cell() {
        let instance = instance(4, 1, &[(2, 2), (2, 3)]);
        let mut engine = GreedyEngine::new(&instance).unwrap();

        let scan = engine.scan(TiePolicy::KeepAll);
        assert_eq!(scan.best_coverage, 2);
        assert_eq!(scan.candidates, vec![Point::new(2, 2), Point::new(2, 3)]);
    }

    #[test]
    fn run_reports_unsatisfiable_when_grid_is_exhausted() {
        let instance = instance(1, 0, &[(5, 5)]);
        let engine = GreedyEngine::new(&instance).unwrap();

        let result = engine.run(TiePolicy::KeepAll, |candidates, _| candidates.first().copied());
        assert!(matches!(
            result,
            Err(PlannerError::UnsatisfiableInstance { uncovered: 1 })
        ));
    }

    #[test]
    fn run_stops_scanning_once_every_cell_is_dead() {
        let instance = instance(2, 0, &[(5, 5)]);
        let mut engine = GreedyEngine::new(&instance).unwrap();

        assert!(engine.scan(TiePolicy::KeepAll).candidates.is_empty());
        assert!(engine.state().dead.is_exhausted());
        assert_eq!(engine.stats().candidates_scored, 4);

        let result = engine.run(TiePolicy::KeepAll, |candidates, _| candidates.first().copied());
        assert!(matches!(
            result,
            Err(PlannerError::UnsatisfiableInstance { uncovered: 1 })
        ));
    }

    #[test]
    fn run_with_no_cities_places_nothing() {
        let instance = instance(3, 1, &[]);
        let engine = GreedyEngine::new(&instance).unwrap();

        let (solution, stats) = engine
            .run(TiePolicy::KeepAll, |candidates, _| candidates.first().copied())
            .unwrap();
        assert!(solution.towers.is_empty());
        assert_eq!(stats, SolveStats::default());
    }

    #[test]
    fn engine_rejects_invalid_instance() {
        let mut instance = instance(3, 1, &[(0, 0)]);
        instance.grid_side_length = 0;
        assert!(matches!(
            GreedyEngine::new(&instance),
            Err(PlannerError::InvalidInstance(_))
        ));
    }

    #[test]
    fn least_crowded_keeps_all_minima_in_order() {
        let towers = [Point::new(0, 0)];
        let candidates = [Point::new(0, 1), Point::new(5, 5), Point::new(6, 6)];
        assert_eq!(
            least_crowded(&candidates, &towers, 2),
            vec![Point::new(5, 5), Point::new(6, 6)]
        );
        assert_eq!(least_crowded(&candidates, &[], 2), candidates.to_vec());
    }
}
