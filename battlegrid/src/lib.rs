//! Battleship grid engine.
//!
//! A [`Grid`] is built once from a list of ship [`Position`]s. Construction checks that
//! every ship lies within the grid's [`Bounds`], runs along a single row or column, and
//! does not overlap an earlier ship. Shots are then resolved against a flat
//! coordinate-indexed cell array, reporting whether a ship was hit and whether that
//! ship is now sunk.
//!
//! ```
//! use battlegrid::{Grid, Position, ShotResult};
//!
//! let mut grid = Grid::new(vec![
//!     Position::single((2, 'A')),
//!     Position::new((1, 'H'), (4, 'H')),
//! ])?;
//! assert_eq!(grid.shoot(1, "G")?, ShotResult::MISS);
//! for row in 1..4 {
//!     assert_eq!(grid.shoot(row, "H")?, ShotResult { hit: true, sunk: false });
//! }
//! assert_eq!(grid.shoot(4, "H")?, ShotResult { hit: true, sunk: true });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! With the `rng_gen` feature, [`fleet`] can lay out random fleets.

pub use crate::board::{
    Bounds, CannotPlaceReason, CannotShootReason, CellRef, Coordinate, Grid, Orientation,
    ParseCoordinateError, ParseCoordinateReason, PlaceError, Position, ShipRef, ShotError,
    ShotResult,
};

pub mod board;
#[cfg(feature = "rng_gen")]
pub mod fleet;
mod ships;
