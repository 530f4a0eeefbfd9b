//! Extent of a grid: numbered rows starting at 1 and lettered columns starting at `A`.
use std::borrow::Borrow;

use crate::board::Coordinate;

/// First column letter of every grid.
pub const FIRST_COLUMN: char = 'A';

/// Most columns a grid can have, one per letter of the alphabet.
pub const MAX_COLUMNS: usize = 26;

/// Most cells a grid can have. Every cell is allocated up front.
pub const MAX_CELLS: usize = 1 << 20;

/// Rows `1..=rows` and columns `'A'` up to the `columns`-th letter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Bounds {
    /// Number of rows. Row numbers run from 1 to `rows` inclusive.
    rows: usize,
    /// Number of lettered columns.
    columns: usize,
}

impl Bounds {
    /// Create new [`Bounds`] with the given number of rows and columns.
    /// Panics if either is 0, if `columns` exceeds [`MAX_COLUMNS`], or if the grid would
    /// hold more than [`MAX_CELLS`] cells.
    pub fn new(rows: usize, columns: usize) -> Self {
        match Self::try_new(rows, columns) {
            Some(bounds) => bounds,
            None => {
                if rows == 0 || columns == 0 {
                    panic!("Bounds must be nonzero, got {}x{}", rows, columns);
                } else if columns > MAX_COLUMNS {
                    panic!("Bounds have at most {} columns, got {}", MAX_COLUMNS, columns);
                } else {
                    panic!(
                        "Bounds too large: {}x{} is more than {} cells",
                        rows, columns, MAX_CELLS
                    );
                }
            }
        }
    }

    /// Create new [`Bounds`] with the given number of rows and columns.
    /// Returns `None` if either is 0, if `columns` exceeds [`MAX_COLUMNS`], or if the grid
    /// would hold more than [`MAX_CELLS`] cells.
    pub fn try_new(rows: usize, columns: usize) -> Option<Self> {
        if rows == 0 || columns == 0 || columns > MAX_COLUMNS {
            None
        } else {
            rows.checked_mul(columns)
                .filter(|&cells| cells <= MAX_CELLS)
                .map(|_| Self { rows, columns })
        }
    }

    /// Get the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Highest valid row number.
    pub fn last_row(&self) -> i32 {
        // MAX_CELLS keeps rows well within i32.
        self.rows as i32
    }

    /// Last valid column letter.
    pub fn last_column(&self) -> char {
        char::from(FIRST_COLUMN as u8 + (self.columns - 1) as u8)
    }

    /// Total number of cells in the grid.
    pub fn total_size(&self) -> usize {
        self.rows * self.columns
    }

    /// Returns true if the coordinate lies on a grid with these bounds.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.check_bounds(coord).is_some()
    }

    /// Check if the given [`Coordinate`] is in bounds. If so, return it, otherwise
    /// return `None`.
    #[inline]
    fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if (1..=self.last_row()).contains(&c.row)
            && (FIRST_COLUMN..=self.last_column()).contains(&c.column)
        {
            Some(coord)
        } else {
            None
        }
    }

    /// Convert a coordinate to a linear index in row-major order.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord).map(|coord| {
            (coord.row - 1) as usize * self.columns + (coord.column as usize - FIRST_COLUMN as usize)
        })
    }

    /// Convert a linear index back into a [`Coordinate`]. Panics if `idx` is not less
    /// than [`total_size`][Self::total_size].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        assert!(
            idx < self.total_size(),
            "index {} is out of bounds for {:?}",
            idx,
            self
        );
        Coordinate {
            row: (idx / self.columns) as i32 + 1,
            column: char::from(FIRST_COLUMN as u8 + (idx % self.columns) as u8),
        }
    }
}

impl Default for Bounds {
    /// Construct the default bounds, rows 1 to 10 and columns `A` to `J`.
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_by_ten() {
        let bounds = Bounds::default();
        assert_eq!(bounds.last_row(), 10);
        assert_eq!(bounds.last_column(), 'J');
        assert_eq!(bounds.total_size(), 100);
    }

    #[test]
    fn contains_checks_both_axes() {
        let bounds = Bounds::default();
        assert!(bounds.contains(&Coordinate::new(1, 'A')));
        assert!(bounds.contains(&Coordinate::new(10, 'J')));
        assert!(!bounds.contains(&Coordinate::new(0, 'A')));
        assert!(!bounds.contains(&Coordinate::new(11, 'G')));
        assert!(!bounds.contains(&Coordinate::new(10, 'P')));
        assert!(!bounds.contains(&Coordinate::new(-3, 'C')));
        assert!(!bounds.contains(&Coordinate::new(4, 'h')));
        assert!(!bounds.contains(&Coordinate::new(4, '@')));
    }

    #[test]
    fn linearize_is_row_major() {
        let bounds = Bounds::new(4, 3);
        assert_eq!(bounds.try_linearize(&Coordinate::new(1, 'A')), Some(0));
        assert_eq!(bounds.try_linearize(&Coordinate::new(1, 'C')), Some(2));
        assert_eq!(bounds.try_linearize(&Coordinate::new(2, 'A')), Some(3));
        assert_eq!(bounds.try_linearize(&Coordinate::new(4, 'C')), Some(11));
        assert_eq!(bounds.try_linearize(&Coordinate::new(4, 'D')), None);
        for idx in 0..bounds.total_size() {
            assert_eq!(bounds.try_linearize(&bounds.un_linearize(idx)), Some(idx));
        }
    }

    #[test]
    fn rejects_degenerate_bounds() {
        assert_eq!(Bounds::try_new(0, 5), None);
        assert_eq!(Bounds::try_new(5, 0), None);
        assert_eq!(Bounds::try_new(5, 27), None);
        assert_eq!(Bounds::try_new(5, 26).map(|b| b.last_column()), Some('Z'));
        assert_eq!(Bounds::try_new(2_000_000_000, 26), None);
        assert_eq!(Bounds::try_new(usize::MAX, 2), None);
        assert_eq!(Bounds::try_new(MAX_CELLS + 1, 1), None);
        assert_eq!(
            Bounds::try_new(MAX_CELLS, 1).map(|b| b.last_row()),
            Some(MAX_CELLS as i32)
        );
    }

    #[test]
    #[should_panic(expected = "Bounds too large")]
    fn new_panics_on_huge_bounds() {
        Bounds::new(2_000_000_000, 26);
    }
}
