//! Problem instances: a square grid, two radii and the cities to cover.
//!
//! Text format (lines starting with `#` and blank lines are ignored):
//!
//! ```text
//! N        number of cities
//! D        grid side length
//! R_s      coverage radius
//! R_p      penalty radius
//! x y      one line per city
//! ```

use crate::error::*;
use crate::point::*;
use fnv::FnvHashSet;
use log::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub grid_side_length: i32,
    pub coverage_radius: i32,
    pub penalty_radius: i32,
    /// Unique cities in first-seen order.
    pub cities: Vec<Point>,
}

impl Instance {
    /// Builds an instance, dropping duplicate cities.
    pub fn new<I>(
        grid_side_length: i32,
        coverage_radius: i32,
        penalty_radius: i32,
        cities: I,
    ) -> PlannerResult<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut seen = FnvHashSet::default();
        let mut duplicates = 0usize;
        let cities: Vec<Point> = cities
            .into_iter()
            .filter(|city| {
                let fresh = seen.insert(*city);
                if !fresh {
                    duplicates += 1;
                }
                fresh
            })
            .collect();

        if duplicates > 0 {
            warn!("Dropped {} duplicate cities", duplicates);
        }

        let instance = Instance {
            grid_side_length,
            coverage_radius,
            penalty_radius,
            cities,
        };
        instance.check()?;
        Ok(instance)
    }

    /// Rejects degenerate parameters that no solver can work with.
    pub fn check(&self) -> PlannerResult<()> {
        if self.grid_side_length <= 0 {
            return Err(PlannerError::InvalidInstance(format!(
                "grid side length must be positive, got {}",
                self.grid_side_length
            )));
        }
        if self.coverage_radius < 0 {
            return Err(PlannerError::InvalidInstance(format!(
                "coverage radius must be non-negative, got {}",
                self.coverage_radius
            )));
        }
        if self.penalty_radius < 0 {
            return Err(PlannerError::InvalidInstance(format!(
                "penalty radius must be non-negative, got {}",
                self.penalty_radius
            )));
        }
        Ok(())
    }

    /// Full structural validity: sane parameters, unique cities, all on the grid.
    pub fn valid(&self) -> bool {
        if self.check().is_err() {
            return false;
        }
        let unique: FnvHashSet<&Point> = self.cities.iter().collect();
        unique.len() == self.cities.len()
            && self
                .cities
                .iter()
                .all(|city| city.in_grid(self.grid_side_length))
    }

    pub fn parse(text: &str) -> PlannerResult<Self> {
        let mut lines = meaningful_lines(text);
        let mut header = |name: &str| -> PlannerResult<i32> {
            match lines.next() {
                Some((line_no, line)) => parse_single_int(line_no, line),
                None => Err(PlannerError::parse(0, format!("missing {}", name))),
            }
        };

        let city_count = header("city count")?;
        let grid_side_length = header("grid side length")?;
        let coverage_radius = header("coverage radius")?;
        let penalty_radius = header("penalty radius")?;

        if city_count < 0 {
            return Err(PlannerError::parse(
                0,
                format!("city count must be non-negative, got {}", city_count),
            ));
        }

        let cities = lines
            .map(|(line_no, line)| parse_point(line_no, line))
            .collect::<PlannerResult<Vec<_>>>()?;

        if cities.len() != city_count as usize {
            return Err(PlannerError::parse(
                0,
                format!(
                    "expected {} cities, found {}",
                    city_count,
                    cities.len()
                ),
            ));
        }

        Instance::new(grid_side_length, coverage_radius, penalty_radius, cities)
    }

    pub fn serialize<W: Write>(&self, out: &mut W) -> PlannerResult<()> {
        writeln!(out, "{}", self.cities.len())?;
        writeln!(out, "{}", self.grid_side_length)?;
        writeln!(out, "{}", self.coverage_radius)?;
        writeln!(out, "{}", self.penalty_radius)?;
        for city in &self.cities {
            writeln!(out, "{}", city)?;
        }
        Ok(())
    }
}

/// Non-empty, non-comment lines with their 1-based line numbers.
pub(crate) fn meaningful_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

pub(crate) fn parse_int(line_no: usize, token: &str) -> PlannerResult<i32> {
    token
        .parse::<i32>()
        .map_err(|_| PlannerError::parse(line_no, format!("'{}' is not an integer", token)))
}

pub(crate) fn parse_single_int(line_no: usize, line: &str) -> PlannerResult<i32> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [token] => parse_int(line_no, token),
        _ => Err(PlannerError::parse(
            line_no,
            format!("expected a single integer, got '{}'", line),
        )),
    }
}

pub(crate) fn parse_point(line_no: usize, line: &str) -> PlannerResult<Point> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [x, y] => Ok(Point::new(parse_int(line_no, x)?, parse_int(line_no, y)?)),
        _ => Err(PlannerError::parse(
            line_no,
            format!("expected 'x y', got '{}'", line),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "# A small instance\n\
                         3\n\
                         10\n\
                         3\n\
                         8\n\
                         \n\
                         0 0\n\
                         # trailing comment\n\
                         9 9\n\
                         4 5\n";

    #[test]
    fn parses_header_and_cities() {
        let instance = Instance::parse(SMALL).unwrap();
        assert_eq!(instance.grid_side_length, 10);
        assert_eq!(instance.coverage_radius, 3);
        assert_eq!(instance.penalty_radius, 8);
        assert_eq!(
            instance.cities,
            vec![Point::new(0, 0), Point::new(9, 9), Point::new(4, 5)]
        );
        assert!(instance.valid());
    }

    #[test]
    fn serialize_then_parse_is_identity() {
        let instance = Instance::parse(SMALL).unwrap();
        let mut buffer = Vec::new();
        instance.serialize(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(Instance::parse(&text).unwrap(), instance);
    }

    #[test]
    fn rejects_city_count_mismatch() {
        let err = Instance::parse("2\n5\n1\n1\n0 0\n").unwrap_err();
        assert!(matches!(err, PlannerError::Parse { .. }));
    }

    #[test]
    fn rejects_bad_tokens_with_line_number() {
        match Instance::parse("1\n5\n1\n1\n0 x\n").unwrap_err() {
            PlannerError::Parse { line, .. } => assert_eq!(line, 5),
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            Instance::parse("1\n5 5\n1\n1\n0 0\n").unwrap_err(),
            PlannerError::Parse { line: 2, .. }
        ));
        assert!(matches!(
            Instance::parse("1\n5\n").unwrap_err(),
            PlannerError::Parse { .. }
        ));
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(matches!(
            Instance::new(0, 1, 1, []),
            Err(PlannerError::InvalidInstance(_))
        ));
        assert!(matches!(
            Instance::new(5, -1, 1, []),
            Err(PlannerError::InvalidInstance(_))
        ));
        assert!(matches!(
            Instance::new(5, 1, -2, []),
            Err(PlannerError::InvalidInstance(_))
        ));
    }

    #[test]
    fn drops_duplicate_cities_in_order() {
        let instance = Instance::new(
            5,
            1,
            1,
            [Point::new(2, 2), Point::new(0, 1), Point::new(2, 2)],
        )
        .unwrap();
        assert_eq!(instance.cities, vec![Point::new(2, 2), Point::new(0, 1)]);
    }

    #[test]
    fn off_grid_city_is_accepted_but_invalid() {
        let instance = Instance::new(1, 0, 0, [Point::new(5, 5)]).unwrap();
        assert!(!instance.valid());
    }
}
