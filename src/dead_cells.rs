//! Memo of grid cells proven useless for the remainder of a solve.
//!
//! A cell that covers none of the remaining cities can never cover one later,
//! because the remaining set only shrinks. Once marked, a cell is skipped by
//! every subsequent scan without being rescored. A `DeadCells` belongs to a
//! single solve and is dropped with it.

use crate::grid::GridDataArray;
use crate::point::Point;

#[derive(Clone, Debug)]
pub struct DeadCells {
    cells: GridDataArray<bool>,
    count: usize,
}

impl DeadCells {
    pub fn new(side: i32) -> Self {
        DeadCells {
            cells: GridDataArray::new(side.max(0) as usize, false),
            count: 0,
        }
    }

    /// Off-grid points are never dead; they are never scanned either.
    #[inline]
    pub fn is_dead(&self, cell: Point) -> bool {
        self.cells.get_point(cell).copied().unwrap_or(false)
    }

    /// Marks a cell dead. Returns false if it was already dead or off-grid.
    pub fn mark(&mut self, cell: Point) -> bool {
        if !cell.in_grid(self.cells.side() as i32) || self.is_dead(cell) {
            return false;
        }
        self.cells.set(cell.x as usize, cell.y as usize, true);
        self.count += 1;
        true
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// True once every cell of the grid has been marked.
    pub fn is_exhausted(&self) -> bool {
        self.count == self.cells.side() * self.cells.side()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_is_write_once() {
        let mut dead = DeadCells::new(2);
        assert_eq!(dead.count(), 0);
        assert!(dead.mark(Point::new(1, 0)));
        assert!(!dead.mark(Point::new(1, 0)));
        assert!(dead.is_dead(Point::new(1, 0)));
        assert!(!dead.is_dead(Point::new(0, 1)));
        assert_eq!(dead.count(), 1);
    }

    #[test]
    fn off_grid_points_are_ignored() {
        let mut dead = DeadCells::new(2);
        assert!(!dead.mark(Point::new(5, 5)));
        assert!(!dead.is_dead(Point::new(5, 5)));
        assert_eq!(dead.count(), 0);
    }

    #[test]
    fn exhausted_after_every_cell() {
        let mut dead = DeadCells::new(2);
        for cell in crate::grid::grid_cells(2) {
            assert!(!dead.is_exhausted());
            dead.mark(cell);
        }
        assert!(dead.is_exhausted());
    }
}
