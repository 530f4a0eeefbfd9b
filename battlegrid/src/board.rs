//! Types that make up the game grid.

use log::{debug, trace};

use crate::ships::Ship;

use self::cells::Cells;
pub use self::{
    bounds::{Bounds, FIRST_COLUMN, MAX_CELLS, MAX_COLUMNS},
    coordinate::{Coordinate, Orientation, Position},
    errors::{
        CannotPlaceReason, CannotShootReason, ParseCoordinateError, ParseCoordinateReason,
        PlaceError, ShotError,
    },
};

mod bounds;
mod cells;
mod coordinate;
mod errors;

/// Handle to a ship that allows getting information about its status.
#[derive(Debug, Copy, Clone)]
pub struct ShipRef<'a> {
    /// Index of the ship in placement order.
    index: usize,

    /// The ship record.
    ship: &'a Ship,

    /// Cells from the grid.
    cells: &'a Cells,
}

impl<'a> ShipRef<'a> {
    /// Index of the ship within the positions the grid was built from.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The coordinate the ship's placement started at.
    pub fn start(&self) -> &'a Coordinate {
        &self.ship.position().start
    }

    /// The coordinate the ship's placement ended at.
    pub fn end(&self) -> &'a Coordinate {
        &self.ship.position().end
    }

    /// The ship's full placement.
    pub fn position(&self) -> &'a Position {
        self.ship.position()
    }

    /// Number of cells the ship occupies.
    pub fn len(&self) -> usize {
        self.ship.len()
    }

    /// Number of the ship's cells that have been hit.
    pub fn hits(&self) -> usize {
        self.ship.hits()
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.ship.sunk()
    }

    /// Get an iterator over the coordinates of this ship, from low to high.
    pub fn coords(&self) -> impl 'a + Iterator<Item = Coordinate> {
        self.ship.position().span()
    }

    /// Get an iterator over the coordinates of this ship and whether those coords have
    /// been hit.
    pub fn cells(&self) -> impl 'a + Iterator<Item = (Coordinate, bool)> {
        let cells = self.cells;
        self.coords().map(move |coord| (coord, cells[coord].hit))
    }
}

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// Whether this cell was hit.
    hit: bool,

    /// Reference to the ship that occupies this cell if any.
    ship: Option<ShipRef<'a>>,
}

impl<'a> CellRef<'a> {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> &Coordinate {
        &self.coord
    }

    /// Whether this cell has been shot previously.
    pub fn hit(&self) -> bool {
        self.hit
    }

    /// The ship reference for the ship that occupies this cell, if any.
    pub fn ship(&self) -> Option<ShipRef<'a>> {
        self.ship
    }
}

/// Result of a single shot at the grid.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShotResult {
    /// The shot landed on a ship.
    pub hit: bool,
    /// The ship that was hit has had every one of its cells hit.
    pub sunk: bool,
}

impl ShotResult {
    /// A shot that hit nothing.
    pub const MISS: ShotResult = ShotResult {
        hit: false,
        sunk: false,
    };
}

/// A grid of ships that can be shot at.
///
/// Ships are validated and indexed when the grid is built, so a shot is resolved with a
/// single cell lookup.
#[derive(Debug)]
pub struct Grid {
    /// Cells indexed by coordinate, each naming the ship that occupies it.
    cells: Cells,

    /// All ships on the grid, in placement order.
    ships: Vec<Ship>,
}

impl Grid {
    /// Build a grid with the default [`Bounds`] holding ships at the given positions.
    pub fn new<P>(ships: P) -> Result<Self, PlaceError>
    where
        P: IntoIterator<Item = Position>,
    {
        Self::with_bounds(Bounds::default(), ships)
    }

    /// Build a grid with the given [`Bounds`] holding ships at the given positions.
    ///
    /// Each position is checked in order: both ends must be in bounds, the ends must share a
    /// row or a column, and none of its cells may belong to an earlier ship. The first
    /// failure is returned and no grid is built.
    pub fn with_bounds<P>(bounds: Bounds, ships: P) -> Result<Self, PlaceError>
    where
        P: IntoIterator<Item = Position>,
    {
        let mut grid = Self {
            cells: Cells::new(bounds),
            ships: Vec::new(),
        };
        for (index, position) in ships.into_iter().enumerate() {
            grid.place(index, position)?;
        }
        debug!(
            "built {}x{} grid with {} ships",
            bounds.rows(),
            bounds.columns(),
            grid.ships.len()
        );
        Ok(grid)
    }

    /// Validate the given position and register its cells.
    fn place(&mut self, index: usize, position: Position) -> Result<(), PlaceError> {
        let fail = |reason: CannotPlaceReason| {
            debug!("rejected ship #{} at {}: {}", index, position, reason);
            Err(PlaceError::new(reason, index, position))
        };
        let bounds = &self.cells.bounds;
        if !bounds.contains(&position.start) || !bounds.contains(&position.end) {
            return fail(CannotPlaceReason::ShipOutOfBounds);
        }
        if !position.is_axis_aligned() {
            return fail(CannotPlaceReason::IncorrectPlacement);
        }
        for coord in position.span() {
            match self.cells.at(coord) {
                // Both ends are in bounds, so the span between them is as well.
                None => return fail(CannotPlaceReason::ShipOutOfBounds),
                Some(cell) if cell.ship.is_some() => {
                    return fail(CannotPlaceReason::ShipsOverlap)
                }
                Some(_) => {}
            }
        }
        // Already ensured that every cell is valid and unoccupied.
        let ship = self.ships.len();
        for coord in position.span() {
            self.cells[coord].ship = Some(ship);
        }
        self.ships.push(Ship::new(position));
        Ok(())
    }

    /// Get the [`Bounds`] of this grid.
    pub fn bounds(&self) -> &Bounds {
        &self.cells.bounds
    }

    /// Fire a shot at the given row and column letter.
    ///
    /// Fails with [`CannotShootReason::IncorrectLetter`] unless `column` is exactly one
    /// byte long, so a non-ASCII letter such as `"É"` counts as incorrect. Fails with
    /// [`CannotShootReason::OutOfBounds`] if the cell is not on the grid. A failed shot
    /// leaves the grid untouched. Shooting an empty cell is not an error; it returns
    /// [`ShotResult::MISS`].
    pub fn shoot(&mut self, row: i32, column: &str) -> Result<ShotResult, ShotError> {
        match column.chars().next() {
            Some(letter) if column.len() == 1 => self.shoot_at(Coordinate::new(row, letter)),
            _ => Err(ShotError::new(
                CannotShootReason::IncorrectLetter,
                row,
                column,
            )),
        }
    }

    /// Fire a shot at the given [`Coordinate`].
    ///
    /// Hitting a ship cell that was already hit reports the ship again without counting
    /// another hit against it.
    pub fn shoot_at(&mut self, coord: Coordinate) -> Result<ShotResult, ShotError> {
        let cell = match self.cells.at_mut(coord) {
            Some(cell) => cell,
            None => {
                return Err(ShotError::new(
                    CannotShootReason::OutOfBounds,
                    coord.row,
                    coord.column.to_string(),
                ))
            }
        };
        let first_hit = !cell.hit;
        cell.hit = true;
        let result = match cell.ship {
            None => ShotResult::MISS,
            Some(idx) => {
                let ship = &mut self.ships[idx];
                if first_hit {
                    ship.record_hit();
                }
                ShotResult {
                    hit: true,
                    sunk: ship.sunk(),
                }
            }
        };
        trace!("shot at {}: {:?}", coord, result);
        Ok(result)
    }

    /// Clear every hit so the same grid can be played again. Placements are kept.
    pub fn reset_ships(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.hit = false;
        }
        for ship in self.ships.iter_mut() {
            ship.reset();
        }
        debug!("reset {} ships", self.ships.len());
    }

    /// Remove every ship from the grid. Afterwards every shot on the grid is a miss.
    /// Calling this on an empty grid does nothing.
    pub fn destroy(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.ship = None;
        }
        if !self.ships.is_empty() {
            debug!("released {} ships", self.ships.len());
        }
        self.ships.clear();
    }

    /// Get an iterator over all ships on this grid, in placement order.
    pub fn ships(&self) -> impl Iterator<Item = ShipRef<'_>> {
        let cells = &self.cells;
        self.ships
            .iter()
            .enumerate()
            .map(move |(index, ship)| ShipRef { index, ship, cells })
    }

    /// Get the ship that was placed at the given index, if it exists.
    pub fn ship(&self, index: usize) -> Option<ShipRef<'_>> {
        self.ships.get(index).map(|ship| ShipRef {
            index,
            ship,
            cells: &self.cells,
        })
    }

    /// Get a reference to the cell at the given coordinate. Returns None if the
    /// coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellRef<'_>> {
        self.cells.at(coord).map(|cell| CellRef {
            coord,
            hit: cell.hit,
            ship: cell.ship.and_then(|idx| self.ship(idx)),
        })
    }

    /// Returns true if the grid holds at least one ship and all of them have been sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::sunk)
    }

    /// Number of ships that are still afloat.
    pub fn remaining(&self) -> usize {
        self.ships.iter().filter(|ship| !ship.sunk()).count()
    }
}
