//! A placed tower set for an instance, with its validity and penalty.
//!
//! Serialized form:
//!
//! ```text
//! # Penalty: <penalty>
//! T        number of towers
//! x y      one line per tower, in placement order
//! ```

use crate::constants::*;
use crate::error::*;
use crate::instance::*;
use crate::point::*;
use crate::scoring::*;
use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub instance: Instance,
    /// Towers in placement order.
    pub towers: Vec<Point>,
}

impl Solution {
    pub fn new(instance: Instance, towers: Vec<Point>) -> Self {
        Solution { instance, towers }
    }

    /// True if every city is within the coverage radius of some tower.
    pub fn covers_all(&self) -> bool {
        let radius = self.instance.coverage_radius;
        self.instance
            .cities
            .iter()
            .all(|city| self.towers.iter().any(|tower| tower.within(*city, radius)))
    }

    /// Full validity: the instance is valid, towers are unique and on the grid,
    /// and every city is covered.
    pub fn valid(&self) -> bool {
        if !self.instance.valid() {
            return false;
        }

        let side = self.instance.grid_side_length;
        if !self.towers.iter().all(|tower| tower.in_grid(side)) {
            return false;
        }

        let unique: FnvHashSet<&Point> = self.towers.iter().collect();
        if unique.len() != self.towers.len() {
            return false;
        }

        self.covers_all()
    }

    /// Sum over towers of `170 * e^(0.17 * w)`, where `w` counts the other
    /// towers within the penalty radius.
    pub fn penalty(&self) -> f64 {
        let radius = self.instance.penalty_radius;
        self.towers
            .iter()
            .map(|tower| {
                // The tower itself is always within its own radius.
                let neighbours = crowding_count(*tower, &self.towers, radius) - 1;
                tower_penalty(neighbours)
            })
            .sum()
    }

    pub fn serialize<W: Write>(&self, out: &mut W) -> PlannerResult<()> {
        writeln!(out, "# Penalty: {}", self.penalty())?;
        writeln!(out, "{}", self.towers.len())?;
        for tower in &self.towers {
            writeln!(out, "{}", tower)?;
        }
        Ok(())
    }

    /// Reads a serialized solution back against its instance.
    pub fn parse(text: &str, instance: Instance) -> PlannerResult<Self> {
        let mut lines = meaningful_lines(text);
        let count = match lines.next() {
            Some((line_no, line)) => parse_single_int(line_no, line)?,
            None => return Err(PlannerError::parse(0, "missing tower count")),
        };

        let towers = lines
            .map(|(line_no, line)| parse_point(line_no, line))
            .collect::<PlannerResult<Vec<_>>>()?;

        if count < 0 || towers.len() != count as usize {
            return Err(PlannerError::parse(
                0,
                format!("expected {} towers, found {}", count, towers.len()),
            ));
        }

        Ok(Solution::new(instance, towers))
    }
}
