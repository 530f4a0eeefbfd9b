//! Coordinates and ship positions on a grid with numbered rows and lettered columns.
use std::{
    convert::TryFrom,
    fmt,
    ops::RangeInclusive,
    str::FromStr,
};

use crate::board::{ParseCoordinateError, ParseCoordinateReason};

/// The coordinates of a single cell on the grid.
///
/// A [`Coordinate`] is just the caller's input and may lie outside of any particular
/// [`Bounds`][crate::board::Bounds]; the grid checks it when it is used.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Numbered row of the cell.
    pub row: i32,
    /// Lettered column of the cell.
    pub column: char,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `column`.
    pub fn new(row: i32, column: char) -> Self {
        Self { row, column }
    }
}

impl From<(i32, char)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, column)` pair.
    fn from((row, column): (i32, char)) -> Self {
        Self::new(row, column)
    }
}

impl From<Coordinate> for (i32, char) {
    /// Convert the [`Coordinate`] into a `(row, column)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.column)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parse a coordinate written either column first (`"H4"`) or row first (`"4H"`).
    /// The column letter is upper-cased.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| ParseCoordinateError::new(reason, s);
        let text = s.trim();
        let mut chars = text.chars();
        let first = chars.next().ok_or_else(|| err(ParseCoordinateReason::Empty))?;
        if first.is_ascii_alphabetic() {
            let rest = chars.as_str().trim_start();
            if rest.is_empty() {
                return Err(err(ParseCoordinateReason::MissingRow));
            }
            let row = parse_row(rest).ok_or_else(|| err(ParseCoordinateReason::InvalidRow))?;
            Ok(Self::new(row, first.to_ascii_uppercase()))
        } else {
            let split = text
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or_else(|| text.len());
            let (digits, rest) = text.split_at(split);
            let row = parse_row(digits).ok_or_else(|| err(ParseCoordinateReason::InvalidRow))?;
            let mut rest = rest.trim_start().chars();
            match (rest.next(), rest.next()) {
                (None, _) => Err(err(ParseCoordinateReason::MissingColumn)),
                (Some(column), None) if column.is_ascii_alphabetic() => {
                    Ok(Self::new(row, column.to_ascii_uppercase()))
                }
                _ => Err(err(ParseCoordinateReason::TrailingInput)),
            }
        }
    }
}

/// Parse a row number made of ascii digits only.
fn parse_row(digits: &str) -> Option<i32> {
    if digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

/// Direction a ship extends in from its start coordinate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Towards lower row numbers.
    Up,
    /// Towards higher row numbers.
    Down,
    /// Towards earlier column letters.
    Left,
    /// Towards later column letters.
    Right,
}

/// Placement of a ship, given by the coordinates of both of its ends.
///
/// The ends may be given in either order. Only positions whose ends share a row or a
/// column can be placed on a grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    /// One end of the ship.
    pub start: Coordinate,
    /// The other end of the ship.
    pub end: Coordinate,
}

impl Position {
    /// Construct a [`Position`] spanning from `start` to `end`.
    pub fn new<C: Into<Coordinate>>(start: C, end: C) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Construct a [`Position`] for a ship occupying a single cell.
    pub fn single<C: Into<Coordinate>>(coord: C) -> Self {
        let coord = coord.into();
        Self {
            start: coord,
            end: coord,
        }
    }

    /// Construct the [`Position`] of a ship of length `len` starting at `start` and
    /// extending in `dir`. Returns `None` if `len` is 0, or if the far end would not have
    /// a valid row number or an uppercase ascii column letter. The result is not checked
    /// against any grid bounds.
    pub fn from_start(start: Coordinate, len: usize, dir: Orientation) -> Option<Self> {
        let offset = i32::try_from(len.checked_sub(1)?).ok()?;
        let end = match dir {
            Orientation::Up => Coordinate::new(start.row.checked_sub(offset)?, start.column),
            Orientation::Down => Coordinate::new(start.row.checked_add(offset)?, start.column),
            Orientation::Left => Coordinate::new(start.row, shift_column(start.column, -offset)?),
            Orientation::Right => Coordinate::new(start.row, shift_column(start.column, offset)?),
        };
        Some(Self { start, end })
    }

    /// Returns true if both ends share a row or a column.
    pub fn is_axis_aligned(&self) -> bool {
        self.start.row == self.end.row || self.start.column == self.end.column
    }

    /// Number of cells this position covers when placed. Vertical ships are measured
    /// along their rows, horizontal ships along their columns.
    pub fn len(&self) -> usize {
        let rows = self.rows();
        let columns = self.columns();
        if rows.end() > rows.start() {
            (i64::from(*rows.end()) - i64::from(*rows.start())) as usize + 1
        } else if columns.end() > columns.start() {
            (*columns.end() as usize) - (*columns.start() as usize) + 1
        } else {
            1
        }
    }

    /// Row numbers covered by this position, from low to high.
    pub fn rows(&self) -> RangeInclusive<i32> {
        let (lo, hi) = ordered(self.start.row, self.end.row);
        lo..=hi
    }

    /// Column letters covered by this position, from low to high.
    pub fn columns(&self) -> RangeInclusive<char> {
        let (lo, hi) = ordered(self.start.column, self.end.column);
        lo..=hi
    }

    /// Iterate the coordinates covered by this position from low to high. For an
    /// axis-aligned position this is the line of cells the ship occupies.
    pub fn span(&self) -> impl Iterator<Item = Coordinate> {
        let columns = self.columns();
        self.rows().flat_map(move |row| {
            columns
                .clone()
                .map(move |column| Coordinate::new(row, column))
        })
    }
}

impl From<Coordinate> for Position {
    fn from(coord: Coordinate) -> Self {
        Self::single(coord)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.start == self.end {
            fmt::Display::fmt(&self.start, f)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl FromStr for Position {
    type Err = ParseCoordinateError;

    /// Parse a position written as `"<coord>-<coord>"`, or as a single `"<coord>"` for a
    /// ship occupying one cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((start, end)) => Ok(Self::new(
                start.parse::<Coordinate>()?,
                end.parse::<Coordinate>()?,
            )),
            None => Ok(Self::single(s.parse::<Coordinate>()?)),
        }
    }
}

fn ordered<T: Ord>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Move an uppercase ascii column letter by `offset` letters.
fn shift_column(column: char, offset: i32) -> Option<char> {
    if !column.is_ascii_uppercase() {
        return None;
    }
    let shifted = i32::from(column as u8).checked_add(offset)?;
    u8::try_from(shifted)
        .ok()
        .map(char::from)
        .filter(char::is_ascii_uppercase)
}
