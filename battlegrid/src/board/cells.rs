//! Flat cell storage backing the grid's coordinate index.

use std::ops::{Index, IndexMut};

use crate::board::{Bounds, Coordinate};

/// State of one square on the grid.
#[derive(Debug, Default)]
pub(super) struct GridCell {
    /// Position in the grid's ship list of the ship lying on this square.
    pub(super) ship: Option<usize>,

    /// Set once the square has been shot, whether or not a ship is there.
    pub(super) hit: bool,
}

/// Every square of a grid, stored row after row.
#[derive(Debug)]
pub(super) struct Cells {
    pub(super) bounds: Bounds,
    squares: Box<[GridCell]>,
}

impl Cells {
    /// Allocate an empty, unshot square for every coordinate inside `bounds`.
    pub(super) fn new(bounds: Bounds) -> Self {
        let squares = (0..bounds.total_size())
            .map(|_| GridCell::default())
            .collect();
        Self { bounds, squares }
    }

    /// The square at `coord`, or `None` when `coord` is off the grid.
    pub(super) fn at(&self, coord: Coordinate) -> Option<&GridCell> {
        let slot = self.bounds.try_linearize(&coord)?;
        self.squares.get(slot)
    }

    /// Mutable access to the square at `coord`, or `None` when `coord` is off the grid.
    pub(super) fn at_mut(&mut self, coord: Coordinate) -> Option<&mut GridCell> {
        let slot = self.bounds.try_linearize(&coord)?;
        self.squares.get_mut(slot)
    }

    pub(super) fn iter_mut(&mut self) -> impl Iterator<Item = &mut GridCell> {
        self.squares.iter_mut()
    }
}

/// Only for coordinates already known to be on the grid.
impl Index<Coordinate> for Cells {
    type Output = GridCell;

    fn index(&self, coord: Coordinate) -> &GridCell {
        match self.at(coord) {
            Some(cell) => cell,
            None => panic!("{} is off a {:?} grid", coord, self.bounds),
        }
    }
}

impl IndexMut<Coordinate> for Cells {
    fn index_mut(&mut self, coord: Coordinate) -> &mut GridCell {
        let bounds = self.bounds;
        match self.at_mut(coord) {
            Some(cell) => cell,
            None => panic!("{} is off a {:?} grid", coord, bounds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_follow_the_bounds() {
        let mut cells = Cells::new(Bounds::new(2, 3));
        assert_eq!(cells.iter_mut().count(), 6);
        assert!(cells.at(Coordinate::new(2, 'C')).is_some());
        assert!(cells.at(Coordinate::new(3, 'A')).is_none());
        assert!(cells.at_mut(Coordinate::new(1, 'D')).is_none());

        cells[Coordinate::new(2, 'B')].ship = Some(4);
        assert_eq!(cells.at(Coordinate::new(2, 'B')).and_then(|c| c.ship), Some(4));
        assert_eq!(cells[Coordinate::new(2, 'A')].ship, None);
        assert!(!cells[Coordinate::new(2, 'B')].hit);
    }

    #[test]
    #[should_panic(expected = "is off a")]
    fn indexing_off_the_grid_panics() {
        let cells = Cells::new(Bounds::default());
        let _ = &cells[Coordinate::new(11, 'A')];
    }
}
