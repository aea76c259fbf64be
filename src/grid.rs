use crate::point::*;

/// A dense `side x side` array of per-cell data, indexed row-major by `(x, y)`.
#[derive(Clone, Debug)]
pub struct GridDataArray<T: Copy> {
    side: usize,
    data: Vec<T>,
}

impl<T: Copy> GridDataArray<T> {
    pub fn new(side: usize, initial: T) -> Self {
        GridDataArray {
            side,
            data: vec![initial; side * side],
        }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        x * self.side + y
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let index = self.index(x, y);
        &mut self.data[index]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        *self.get_mut(x, y) = value;
    }

    /// Looks up a point, returning `None` for anything off the grid.
    pub fn get_point(&self, point: Point) -> Option<&T> {
        if point.in_grid(self.side as i32) {
            Some(self.get(point.x as usize, point.y as usize))
        } else {
            None
        }
    }
}

/// Yields every cell of a `side x side` grid in row-major `(x, y)` order.
pub fn grid_cells(side: i32) -> impl Iterator<Item = Point> {
    itertools::iproduct!(0..side.max(0), 0..side.max(0)).map(|(x, y)| Point::new(x, y))
}
