use std::collections::HashSet;

use battlegrid::{CannotPlaceReason, Coordinate, Grid, Orientation, Position, ShotResult};
use proptest::prelude::*;

fn arb_coordinate() -> impl Strategy<Value = Coordinate> {
    (1..=10i32, 0..10u8).prop_map(|(row, col)| Coordinate::new(row, char::from(b'A' + col)))
}

fn arb_orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::Up),
        Just(Orientation::Down),
        Just(Orientation::Left),
        Just(Orientation::Right),
    ]
}

/// Positions that start on the grid but may run off of it.
fn arb_position() -> impl Strategy<Value = Position> {
    (arb_coordinate(), 1..=5usize, arb_orientation())
        .prop_filter_map("ship leaves the letter range", |(start, len, dir)| {
            Position::from_start(start, len, dir)
        })
}

/// Keep each candidate that still builds a grid together with those kept before it.
fn buildable(candidates: Vec<Position>) -> Vec<Position> {
    let mut fleet: Vec<Position> = Vec::new();
    for candidate in candidates {
        fleet.push(candidate);
        if Grid::new(fleet.clone()).is_err() {
            fleet.pop();
        }
    }
    fleet
}

fn arb_fleet() -> impl Strategy<Value = Vec<Position>> {
    prop::collection::vec(arb_position(), 0..12).prop_map(buildable)
}

fn arb_shots() -> impl Strategy<Value = Vec<Coordinate>> {
    prop::collection::vec(arb_coordinate(), 0..80)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn reset_replays_identically(fleet in arb_fleet(), shots in arb_shots()) {
        let mut grid = Grid::new(fleet).unwrap();
        let first: Vec<ShotResult> = shots.iter().map(|&c| grid.shoot_at(c).unwrap()).collect();
        grid.reset_ships();
        prop_assert!(grid.ships().all(|ship| ship.hits() == 0));
        let second: Vec<ShotResult> = shots.iter().map(|&c| grid.shoot_at(c).unwrap()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn repeated_shot_changes_nothing(fleet in arb_fleet(), shots in arb_shots()) {
        let mut grid = Grid::new(fleet).unwrap();
        for coord in shots {
            let first = grid.shoot_at(coord).unwrap();
            let hits: Vec<usize> = grid.ships().map(|ship| ship.hits()).collect();
            let second = grid.shoot_at(coord).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(hits, grid.ships().map(|ship| ship.hits()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn empty_cells_always_miss(fleet in arb_fleet(), shots in arb_shots()) {
        let occupied: HashSet<Coordinate> = fleet.iter().flat_map(Position::span).collect();
        let mut grid = Grid::new(fleet).unwrap();
        for coord in shots {
            let result = grid.shoot_at(coord).unwrap();
            prop_assert_eq!(result.hit, occupied.contains(&coord));
            if !result.hit {
                prop_assert_eq!(result, ShotResult::MISS);
            }
        }
    }

    #[test]
    fn sunk_exactly_when_every_cell_is_hit(fleet in arb_fleet(), shots in arb_shots()) {
        let mut grid = Grid::new(fleet.clone()).unwrap();
        let mut hit_cells = HashSet::new();
        for coord in shots {
            let result = grid.shoot_at(coord).unwrap();
            hit_cells.insert(coord);
            for (pos, ship) in fleet.iter().zip(grid.ships()) {
                let hit = pos.span().filter(|c| hit_cells.contains(c)).count();
                prop_assert_eq!(ship.hits(), hit);
                prop_assert_eq!(ship.sunk(), hit == pos.len());
                if pos.span().any(|c| c == coord) {
                    prop_assert_eq!(result.sunk, ship.sunk());
                }
            }
        }
    }

    #[test]
    fn overlapping_pair_is_rejected(a in arb_position(), b in arb_position()) {
        let a_cells: HashSet<Coordinate> = a.span().collect();
        prop_assume!(Grid::new(vec![a]).is_ok() && Grid::new(vec![b]).is_ok());
        let result = Grid::new(vec![a, b]);
        if b.span().any(|c| a_cells.contains(&c)) {
            let err = result.unwrap_err();
            prop_assert_eq!(err.reason(), CannotPlaceReason::ShipsOverlap);
            prop_assert_eq!(err.index(), 1);
        } else {
            prop_assert!(result.is_ok());
        }
    }

    #[test]
    fn diagonal_is_rejected(start in arb_coordinate(), end in arb_coordinate()) {
        prop_assume!(start.row != end.row && start.column != end.column);
        let err = Grid::new(vec![Position::new(start, end)]).unwrap_err();
        prop_assert_eq!(err.reason(), CannotPlaceReason::IncorrectPlacement);
    }
}
