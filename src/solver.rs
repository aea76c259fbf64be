//! Core types shared by the solver family.
//!
//! `PlacementState` is the evolving state of one solve.
//! `TowerSolver` is the trait each solver variant implements.
//! `SolverVariant` names the variants for configuration and dispatch.

use crate::dead_cells::DeadCells;
use crate::error::*;
use crate::instance::Instance;
use crate::point::Point;
use crate::solution::Solution;
use fnv::FnvHashSet;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transient state owned by a single solve.
#[derive(Clone, Debug)]
pub struct PlacementState {
    /// Cities not yet covered by any placed tower. Only ever shrinks.
    pub remaining: FnvHashSet<Point>,
    /// Cells known to cover nothing in `remaining`. Only ever grows.
    pub dead: DeadCells,
    /// Towers in placement order.
    pub towers: Vec<Point>,
}

impl PlacementState {
    pub fn new(instance: &Instance) -> Self {
        PlacementState {
            remaining: instance.cities.iter().copied().collect(),
            dead: DeadCells::new(instance.grid_side_length),
            towers: Vec::new(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Places a tower and drops every city it covers. Returns how many were covered.
    pub fn place_tower(&mut self, tower: Point, coverage_radius: i32) -> usize {
        let before = self.remaining.len();
        self.remaining
            .retain(|city| !tower.within(*city, coverage_radius));
        self.towers.push(tower);
        before - self.remaining.len()
    }
}

/// Counters collected over one solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Loop iterations, one per placed tower.
    pub iterations: usize,
    /// Live cells scored across all scans.
    pub candidates_scored: u64,
    /// Cells marked dead by the end of the solve.
    pub dead_cells: usize,
}

/// A tower placement strategy.
///
/// Solvers are stateless; everything mutable lives in a `PlacementState`
/// created fresh for each call, so nothing is shared between solves.
pub trait TowerSolver {
    /// Name used for dispatch from the command line.
    fn name(&self) -> &str;

    /// Solve the instance. Randomised variants draw only from `rng`.
    fn solve(
        &self,
        instance: &Instance,
        rng: &mut dyn RngCore,
    ) -> PlannerResult<(Solution, SolveStats)>;
}

/// The named solver variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolverVariant {
    /// One tower on every city.
    Naive,
    /// Greedy max coverage; the last equal-coverage cell in scan order wins.
    SimpleGreedy,
    /// Greedy max coverage, ties broken by fewest nearby towers.
    #[serde(rename = "forreal")]
    ForReal,
    /// As `ForReal`, with remaining ties broken at random.
    Minnie,
}

impl SolverVariant {
    pub const ALL: [SolverVariant; 4] = [
        SolverVariant::Naive,
        SolverVariant::SimpleGreedy,
        SolverVariant::ForReal,
        SolverVariant::Minnie,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SolverVariant::Naive => "naive",
            SolverVariant::SimpleGreedy => "simple-greedy",
            SolverVariant::ForReal => "forreal",
            SolverVariant::Minnie => "minnie",
        }
    }
}

impl fmt::Display for SolverVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverVariant {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolverVariant::ALL
            .iter()
            .copied()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| PlannerError::UnknownSolver(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_names_round_trip() {
        for variant in SolverVariant::ALL {
            assert_eq!(variant.name().parse::<SolverVariant>().unwrap(), variant);
            assert_eq!(variant.to_string(), variant.name());
        }
    }

    #[test]
    fn unknown_variant_is_an_error() {
        assert!(matches!(
            "annealing".parse::<SolverVariant>(),
            Err(PlannerError::UnknownSolver(name)) if name == "annealing"
        ));
    }

    #[test]
    fn variant_serde_uses_cli_names() {
        let json = serde_json::to_string(&SolverVariant::SimpleGreedy).unwrap();
        assert_eq!(json, "\"simple-greedy\"");
        let back: SolverVariant = serde_json::from_str("\"forreal\"").unwrap();
        assert_eq!(back, SolverVariant::ForReal);
    }

    #[test]
    fn place_tower_shrinks_remaining() {
        let instance = Instance::new(
            6,
            1,
            1,
            [Point::new(0, 0), Point::new(0, 1), Point::new(5, 5)],
        )
        .unwrap();
        let mut state = PlacementState::new(&instance);
        assert_eq!(state.place_tower(Point::new(0, 0), 1), 2);
        assert_eq!(state.remaining.len(), 1);
        assert!(!state.is_done());
        assert_eq!(state.place_tower(Point::new(5, 4), 1), 1);
        assert!(state.is_done());
        assert_eq!(state.towers, vec![Point::new(0, 0), Point::new(5, 4)]);
    }
}
