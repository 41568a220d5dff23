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
#![cfg(feature = "rng_gen")]

use rand::{rngs::StdRng, SeedableRng};
use seabattle::{
    board::{Coordinate, Grid, RectDimensions, TileAppearance},
    game::{GameController, GameState, Player},
    ships::{Orientation, ShipName},
};

#[test]
fn random_deployment_fills_the_fleet() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Grid::default();
        grid.deploy_randomly(&mut rng).unwrap();
        assert!(grid.all_deployed());
        let ship_tiles = grid
            .iter_rows()
            .flatten()
            .filter(|&tile| tile == TileAppearance::Ship)
            .count();
        let expected: usize = ShipName::ALL.iter().map(|ship| ship.size()).sum();
        assert_eq!(ship_tiles, expected);
    }
}

#[test]
fn random_deployment_keeps_placed_ships() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut grid = Grid::default();
    grid.place_ship(ShipName::Carrier, Coordinate::new(9, 5), Orientation::Horizontal)
        .unwrap();
    grid.deploy_randomly(&mut rng).unwrap();
    let carrier = grid.ship(ShipName::Carrier).placement().unwrap();
    assert_eq!(carrier.origin, Coordinate::new(9, 5));
    assert!(grid.all_deployed());
}

#[test]
fn random_deployment_gives_up_on_tiny_grids() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut grid = Grid::new(RectDimensions::new(3, 3));
    let err = grid.deploy_randomly(&mut rng).unwrap_err();
    assert_eq!(err.ship(), ShipName::Carrier);
    assert!(!grid.all_deployed());
}

#[test]
fn controller_deploys_both_sides() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut controller = GameController::default();
    controller.start_game();
    controller.deploy_randomly(Player::Human, &mut rng).unwrap();
    controller.deploy_randomly(Player::Computer, &mut rng).unwrap();
    controller.end_deployment().unwrap();
    assert_eq!(controller.current_state(), GameState::Discovering);
}
