//! Errors used by the [`Grid`][crate::board::Grid] and by coordinate parsing.

use thiserror::Error;

use crate::board::Position;

/// Reason why a ship could not be placed with a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CannotPlaceReason {
    /// One of the ship's ends was outside the grid.
    #[error("ship out of grid boundaries")]
    ShipOutOfBounds,
    /// The ship's ends share neither a row nor a column.
    #[error("ship placed incorrectly")]
    IncorrectPlacement,
    /// One or more of the ship's cells was already occupied by an earlier ship.
    #[error("two ships occupy same coordinate")]
    ShipsOverlap,
}

/// Error caused when a grid could not be built from a set of ship positions.
#[derive(Debug, Error)]
#[error("could not place ship #{index} at {position}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    index: usize,
    position: Position,
}

impl PlaceError {
    /// Construct a placement error from a reason, the ship's index in the input and
    /// its position.
    pub(super) fn new(reason: CannotPlaceReason, index: usize, position: Position) -> Self {
        Self {
            reason,
            index,
            position,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Index of the offending ship within the positions passed to the grid.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the [`Position`] where placement was attempted.
    pub fn position(&self) -> &Position {
        &self.position
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CannotShootReason {
    /// The column was not given as exactly one letter.
    #[error("incorrect input in string")]
    IncorrectLetter,

    /// The cell selected was out of bounds on the grid.
    #[error("shot out of grid boundaries")]
    OutOfBounds,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error)]
#[error("could not shoot cell {column:?} {row}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    #[source]
    reason: CannotShootReason,

    /// Row that was targeted.
    row: i32,

    /// Column that was targeted, exactly as given.
    column: String,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(super) fn new<S: Into<String>>(reason: CannotShootReason, row: i32, column: S) -> Self {
        Self {
            reason,
            row,
            column: column.into(),
        }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the targeted row.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Get the targeted column.
    pub fn column(&self) -> &str {
        &self.column
    }
}

/// Reason why a coordinate or position could not be parsed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ParseCoordinateReason {
    /// The input was empty or only whitespace.
    #[error("no coordinate given")]
    Empty,
    /// A column letter was given with no digits next to it.
    #[error("missing row number")]
    MissingRow,
    /// Row digits were given with no column letter.
    #[error("missing column letter")]
    MissingColumn,
    /// The row is not made of digits or is too large for a row number.
    #[error("row is not a number")]
    InvalidRow,
    /// Something other than a single letter followed the row.
    #[error("unexpected input after the coordinate")]
    TrailingInput,
}

/// Error returned when parsing a [`Coordinate`][crate::board::Coordinate] or
/// [`Position`] from text.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid coordinate {input:?}: {reason}")]
pub struct ParseCoordinateError {
    #[source]
    reason: ParseCoordinateReason,
    input: String,
}

impl ParseCoordinateError {
    pub(super) fn new(reason: ParseCoordinateReason, input: &str) -> Self {
        Self {
            reason,
            input: input.to_owned(),
        }
    }

    /// Get the reason parsing failed.
    pub fn reason(&self) -> ParseCoordinateReason {
        self.reason
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}
