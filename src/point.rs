use serde::*;

/// An integer grid coordinate. Ordered by `(x, y)`, which is also the
/// row-major order the greedy scan visits cells in.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Squared Euclidean distance, so radius comparisons never need a square
    /// root. Saturates at `u64::MAX` for points near opposite ends of `i32`.
    #[inline]
    pub fn distance_sq(self, other: Self) -> u64 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs();
        let dy = (self.y as i64 - other.y as i64).unsigned_abs();

        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }

    /// True if `other` is at most `radius` away (inclusive).
    #[inline]
    pub fn within(self, other: Self, radius: i32) -> bool {
        self.distance_sq(other) <= radius_sq(radius)
    }

    #[inline]
    pub fn in_grid(self, side: i32) -> bool {
        (0..side).contains(&self.x) && (0..side).contains(&self.y)
    }
}

#[inline]
pub fn radius_sq(radius: i32) -> u64 {
    let r = radius.unsigned_abs() as u64;
    r * r
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.x, self.y).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <(i32, i32)>::deserialize(deserializer).map(Point::from)
    }
}
