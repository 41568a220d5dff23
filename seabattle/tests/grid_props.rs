// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::collections::HashSet;

use proptest::prelude::*;
use seabattle::{
    board::{AttackCategory, Coordinate, Grid, GridView, TileAppearance},
    ships::{Orientation, ShipName},
};

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn placements() -> impl Strategy<Value = Vec<(usize, usize, Orientation)>> {
    prop::collection::vec((0..10usize, 0..10usize, orientation()), ShipName::ALL.len())
}

fn attacks() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..10usize, 0..10usize), 0..150)
}

/// Try to place each ship of the standard fleet; rejected placements are skipped.
fn build_grid(placements: &[(usize, usize, Orientation)]) -> Grid {
    let mut grid = Grid::default();
    for (&ship, &(row, col, orientation)) in ShipName::ALL.iter().zip(placements) {
        let _ = grid.place_ship(ship, Coordinate::new(row, col), orientation);
    }
    grid
}

fn shot_tiles(grid: &Grid) -> HashSet<Coordinate> {
    grid.dimensions()
        .iter_coordinates()
        .filter(|&coord| grid.appearance(coord).is_shot())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn footprints_are_disjoint_and_in_bounds(placements in placements()) {
        let grid = build_grid(&placements);
        let mut seen = HashSet::new();
        for ship in grid.ships().filter(|ship| ship.is_deployed()) {
            prop_assert_eq!(ship.footprint().len(), ship.size());
            for &coord in ship.footprint() {
                prop_assert!(grid.dimensions().contains(&coord));
                prop_assert!(seen.insert(coord), "{:?} is held by two ships", coord);
            }
        }
        for coord in grid.dimensions().iter_coordinates() {
            let tile = grid.tile(coord).unwrap();
            if let Some(ship) = tile.ship() {
                prop_assert!(ship.footprint().contains(&coord));
            } else {
                prop_assert!(!seen.contains(&coord));
            }
        }
    }

    #[test]
    fn shots_are_never_undone(placements in placements(), attacks in attacks()) {
        let mut grid = build_grid(&placements);
        let mut shot = HashSet::new();
        for (row, col) in attacks {
            let coord = Coordinate::new(row, col);
            let outcome = grid.resolve_attack(coord);
            prop_assert_eq!(
                outcome.category() == AttackCategory::AlreadyShot,
                !shot.insert(coord)
            );
            prop_assert_eq!(&shot_tiles(&grid), &shot);
        }
    }

    #[test]
    fn repeated_attack_changes_nothing(
        placements in placements(),
        attacks in attacks(),
        row in 0..10usize,
        col in 0..10usize
    ) {
        let mut grid = build_grid(&placements);
        for (r, c) in attacks {
            grid.resolve_attack(Coordinate::new(r, c));
        }
        let target = Coordinate::new(row, col);
        grid.resolve_attack(target);
        let hits: Vec<usize> = grid.ships().map(|ship| ship.hits_taken()).collect();
        let killed = grid.ships_killed();

        let again = grid.resolve_attack(target);
        prop_assert_eq!(again.category(), AttackCategory::AlreadyShot);
        let hits_after: Vec<usize> = grid.ships().map(|ship| ship.hits_taken()).collect();
        prop_assert_eq!(hits, hits_after);
        prop_assert_eq!(killed, grid.ships_killed());
    }

    #[test]
    fn destroyed_ships_are_counted(placements in placements(), attacks in attacks()) {
        let mut grid = build_grid(&placements);
        for (row, col) in attacks {
            let outcome = grid.resolve_attack(Coordinate::new(row, col));
            let destroyed = grid.ships().filter(|ship| ship.is_destroyed()).count();
            prop_assert_eq!(grid.ships_killed(), destroyed);
            for ship in grid.ships() {
                prop_assert_eq!(
                    ship.is_destroyed(),
                    ship.is_deployed() && ship.hits_taken() >= ship.size()
                );
            }
            if let Some(name) = outcome.ship() {
                prop_assert!(grid.ship(name).is_destroyed());
            }
        }
    }

    #[test]
    fn view_never_reveals_ships(placements in placements(), attacks in attacks()) {
        let mut grid = build_grid(&placements);
        for (row, col) in attacks {
            grid.resolve_attack(Coordinate::new(row, col));
        }
        let owner: Vec<TileAppearance> = grid.iter_rows().flatten().collect();
        let view = GridView::new(&grid);
        let masked: Vec<TileAppearance> = view.iter_rows().flatten().collect();
        for (full, shown) in owner.into_iter().zip(masked) {
            match full {
                TileAppearance::Ship => prop_assert_eq!(shown, TileAppearance::Sea),
                other => prop_assert_eq!(shown, other),
            }
        }
    }
}
