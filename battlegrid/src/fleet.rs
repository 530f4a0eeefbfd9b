//! Random fleet layout.
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use thiserror::Error;

use crate::board::{Bounds, Coordinate, Orientation, Position};

/// Ship lengths of the classic fleet: a carrier, a battleship, a cruiser, two destroyers
/// and two submarines.
pub const STANDARD_FLEET: [usize; 7] = [5, 4, 3, 2, 2, 1, 1];

/// How many random positions are tried for a single ship before giving up.
const MAX_ATTEMPTS: usize = 1000;

impl Distribution<Coordinate> for Bounds {
    /// Pick a coordinate uniformly among the cells inside these bounds.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        self.un_linearize(rng.gen_range(0, self.total_size()))
    }
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        match rng.gen_range(0, 4) {
            0 => Orientation::Up,
            1 => Orientation::Down,
            2 => Orientation::Left,
            _ => Orientation::Right,
        }
    }
}

/// Reason why a random fleet could not be laid out.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CannotLayOutReason {
    /// No free in-bounds position was found for the ship.
    #[error("no room left for the ship")]
    NoSpace,
    /// A ship of length zero was requested.
    #[error("ships must be at least one cell long")]
    ZeroLength,
}

/// Error returned by [`random_fleet`].
#[derive(Debug, Error)]
#[error("could not lay out ship #{index} of length {len}: {reason}")]
pub struct FleetError {
    reason: CannotLayOutReason,
    index: usize,
    len: usize,
}

impl FleetError {
    /// Get the reason the layout failed.
    pub fn reason(&self) -> CannotLayOutReason {
        self.reason
    }

    /// Index of the ship in the requested lengths.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Requested length of the ship.
    pub fn len(&self) -> usize {
        self.len
    }
}

/// Lay out ships of the given lengths at random, non-overlapping positions inside
/// `bounds`. The returned positions, in the same order as `lengths`, always build a
/// valid [`Grid`][crate::board::Grid] with the same bounds.
pub fn random_fleet<R: Rng>(
    rng: &mut R,
    bounds: &Bounds,
    lengths: &[usize],
) -> Result<Vec<Position>, FleetError> {
    let mut occupied = vec![false; bounds.total_size()];
    let mut fleet = Vec::with_capacity(lengths.len());
    for (index, &len) in lengths.iter().enumerate() {
        let fail = |reason| FleetError { reason, index, len };
        if len == 0 {
            return Err(fail(CannotLayOutReason::ZeroLength));
        }
        let position = (0..MAX_ATTEMPTS)
            .find_map(|_| {
                let start = bounds.sample(rng);
                let dir = rng.gen();
                Position::from_start(start, len, dir).filter(|pos| {
                    bounds.contains(&pos.end)
                        && pos.span().all(|coord| {
                            bounds
                                .try_linearize(&coord)
                                .map_or(false, |idx| !occupied[idx])
                        })
                })
            })
            .ok_or_else(|| fail(CannotLayOutReason::NoSpace))?;
        for coord in position.span() {
            if let Some(idx) = bounds.try_linearize(&coord) {
                occupied[idx] = true;
            }
        }
        fleet.push(position);
    }
    Ok(fleet)
}
