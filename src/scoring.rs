//! Candidate scoring shared by every greedy variant.
//!
//! All comparisons use squared distances against a squared radius, so a city
//! exactly `radius` away counts as covered.

use crate::point::*;

/// Number of `cities` within `coverage_radius` of `candidate`.
pub fn coverage_count<'a, I>(candidate: Point, cities: I, coverage_radius: i32) -> usize
where
    I: IntoIterator<Item = &'a Point>,
{
    let limit = radius_sq(coverage_radius);
    cities
        .into_iter()
        .filter(|city| candidate.distance_sq(**city) <= limit)
        .count()
}

/// Number of already placed `towers` within `penalty_radius` of `candidate`.
pub fn crowding_count(candidate: Point, towers: &[Point], penalty_radius: i32) -> usize {
    let limit = radius_sq(penalty_radius);
    towers
        .iter()
        .filter(|tower| candidate.distance_sq(**tower) <= limit)
        .count()
}
