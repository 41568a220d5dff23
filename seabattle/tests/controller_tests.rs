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
use std::{cell::RefCell, rc::Rc};

use seabattle::{
    board::{AttackCategory, BoardView, CannotPlaceReason, Coordinate, GridEvent, TileAppearance},
    game::{GameController, GameError, GameState, Player, Settings},
    ships::{Orientation, ShipName},
};

fn coord(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

/// Deploy the fleet of `player` in rows 0, 2, 4, 6 and 8, each starting at column 0.
fn deploy(controller: &mut GameController, player: Player) {
    for (i, &ship) in ShipName::ALL.iter().enumerate() {
        controller
            .place_ship(player, ship, coord(i * 2, 0), Orientation::Horizontal)
            .unwrap();
    }
}

/// Every tile of the fleet laid out by [`deploy`].
fn fleet_tiles() -> Vec<Coordinate> {
    ShipName::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, ship)| (0..ship.size()).map(move |col| coord(i * 2, col)))
        .collect()
}

/// Targeting which fires at the given coordinates in order.
fn scripted(targets: Vec<Coordinate>) -> impl FnMut(&dyn BoardView) -> Coordinate {
    let mut targets = targets.into_iter();
    move |_: &dyn BoardView| targets.next().expect("computer fired more often than scripted")
}

/// A controller in combat with both fleets deployed.
fn in_combat(first_player: Player) -> GameController {
    let mut settings = Settings::default();
    settings.first_player = first_player;
    let mut controller = GameController::new(settings);
    controller.start_game();
    deploy(&mut controller, Player::Human);
    deploy(&mut controller, Player::Computer);
    controller.end_deployment().unwrap();
    controller
}

#[test]
fn leaving_the_main_menu_quits() {
    let mut controller = GameController::default();
    assert_eq!(controller.current_state(), GameState::MainMenu);
    assert!(!controller.is_quitting());
    assert_eq!(controller.end_current_state(), Some(GameState::MainMenu));
    assert!(controller.is_quitting());
    assert_eq!(controller.end_current_state(), None);
}

#[test]
fn volume_menu_knows_where_it_came_from() {
    let mut controller = GameController::default();
    controller.add_new_state(GameState::VolumeAdjust);
    assert_eq!(controller.return_to(), Some(GameState::MainMenu));
    controller.end_current_state();

    controller.start_game();
    controller.add_new_state(GameState::GameMenu);
    controller.add_new_state(GameState::VolumeAdjust);
    assert_eq!(controller.return_to(), Some(GameState::GameMenu));
    controller.end_current_state();
    controller.end_current_state();
    assert_eq!(controller.current_state(), GameState::Deploying);
}

#[test]
fn switching_replaces_the_current_state() {
    let mut controller = GameController::default();
    controller.add_new_state(GameState::Rules);
    controller.switch_state(GameState::Controls);
    assert_eq!(controller.current_state(), GameState::Controls);
    assert_eq!(controller.return_to(), Some(GameState::MainMenu));
    controller.end_current_state();
    assert_eq!(controller.current_state(), GameState::MainMenu);
}

#[test]
fn operations_outside_their_phase_are_refused() {
    let mut controller = GameController::default();
    let mut aim = scripted(vec![]);
    assert_eq!(
        controller.attack(coord(0, 0), &mut aim),
        Err(GameError::WrongPhase {
            expected: GameState::Discovering,
            actual: GameState::MainMenu,
        })
    );
    assert_eq!(controller.end_deployment(), Err(GameError::WrongPhase {
        expected: GameState::Deploying,
        actual: GameState::MainMenu,
    }));
    assert!(controller.subscribe(Player::Human, Box::new(|_: &GridEvent| {})).is_err());
    assert!(controller.grid(Player::Human).is_none());

    controller.start_game();
    assert!(controller.attack(coord(0, 0), &mut aim).is_err());
    assert!(controller.finish_game().is_err());
}

#[test]
fn combat_waits_for_both_fleets() {
    let mut controller = GameController::default();
    controller.start_game();
    assert_eq!(controller.current_state(), GameState::Deploying);
    assert_eq!(
        controller.end_deployment(),
        Err(GameError::NotDeployed(Player::Human))
    );
    deploy(&mut controller, Player::Human);
    assert_eq!(
        controller.end_deployment(),
        Err(GameError::NotDeployed(Player::Computer))
    );
    deploy(&mut controller, Player::Computer);
    controller
        .remove_ship(Player::Computer, ShipName::Submarine)
        .unwrap();
    assert_eq!(
        controller.end_deployment(),
        Err(GameError::NotDeployed(Player::Computer))
    );
    controller
        .move_ship(Player::Computer, ShipName::Submarine, coord(9, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(controller.end_deployment(), Ok(()));
    assert_eq!(controller.current_state(), GameState::Discovering);
}

#[test]
fn placement_errors_are_reported() {
    let mut controller = GameController::default();
    controller.start_game();
    match controller.place_ship(Player::Human, ShipName::Carrier, coord(0, 6), Orientation::Horizontal) {
        Err(GameError::Place(err)) => {
            assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
            assert_eq!(err.ship(), ShipName::Carrier);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn hits_keep_the_turn() {
    let mut controller = in_combat(Player::Human);
    let mut aim = scripted(vec![]);
    let reports = controller.attack(coord(0, 0), &mut aim).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].attacker, Player::Human);
    assert_eq!(reports[0].outcome.category(), AttackCategory::Hit);
    assert_eq!(reports[0].message(), "You hit something!");
    assert_eq!(controller.session().unwrap().current(), Player::Human);
}

#[test]
fn computer_fires_until_it_misses() {
    let mut controller = in_combat(Player::Human);
    let mut aim = scripted(vec![coord(0, 0), coord(0, 1), coord(9, 9)]);
    let reports = controller.attack(coord(1, 0), &mut aim).unwrap();

    let summary: Vec<(Player, AttackCategory)> = reports
        .iter()
        .map(|report| (report.attacker, report.outcome.category()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Player::Human, AttackCategory::Miss),
            (Player::Computer, AttackCategory::Hit),
            (Player::Computer, AttackCategory::Hit),
            (Player::Computer, AttackCategory::Miss),
        ]
    );
    assert_eq!(reports[3].message(), "The AI missed");
    let session = controller.session().unwrap();
    assert_eq!(session.current(), Player::Human);
    assert_eq!(session.stats(Player::Computer).shots(), 3);
    assert_eq!(session.stats(Player::Computer).hits(), 2);
    assert_eq!(session.stats(Player::Human).misses(), 1);
}

#[test]
fn repeated_shot_passes_the_turn() {
    let mut controller = in_combat(Player::Human);
    let mut aim = scripted(vec![coord(9, 9)]);
    controller.attack(coord(0, 0), &mut aim).unwrap();
    let reports = controller.attack(coord(0, 0), &mut aim).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].outcome.category(), AttackCategory::AlreadyShot);
    assert_eq!(reports[1].attacker, Player::Computer);
    let stats = controller.session().unwrap().stats(Player::Human);
    assert_eq!((stats.shots(), stats.hits(), stats.misses()), (2, 1, 0));
}

#[test]
fn computer_sees_only_the_masked_grid() {
    let mut controller = in_combat(Player::Computer);
    let mut aim = |view: &dyn BoardView| {
        let dims = view.dimensions();
        assert!(dims
            .iter_coordinates()
            .all(|coord| view.tile_at(coord) != TileAppearance::Ship));
        Coordinate::new(9, 9)
    };
    assert_eq!(
        controller.attack(coord(0, 0), &mut aim),
        Err(GameError::OutOfTurn(Player::Human))
    );
    let reports = controller.computer_turn(&mut aim).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].outcome.category(), AttackCategory::Miss);
    assert_eq!(controller.session().unwrap().current(), Player::Human);

    assert!(controller.computer_turn(&mut aim).unwrap().is_empty());
}

#[test]
fn sinking_the_fleet_ends_the_match() {
    let mut controller = in_combat(Player::Human);
    let mut aim = scripted(vec![coord(9, 9)]);
    controller.attack(coord(1, 0), &mut aim).unwrap();

    let tiles = fleet_tiles();
    let (last, rest) = tiles.split_last().unwrap();
    for &target in rest {
        let reports = controller.attack(target, &mut aim).unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].outcome.category().keeps_turn());
    }
    let reports = controller.attack(*last, &mut aim).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].outcome.category(), AttackCategory::GameOver);
    assert_eq!(controller.current_state(), GameState::EndingGame);
    assert_eq!(controller.session().unwrap().winner(), Some(Player::Human));
    assert!(controller.view_of(Player::Computer).unwrap().ships_killed() == 5);

    let result = controller.finish_game().unwrap();
    assert_eq!(result.winner, Player::Human);
    assert_eq!(result.human.shots(), 18);
    assert_eq!(result.human.hits(), 17);
    assert_eq!(result.computer.misses(), 1);
    assert_eq!(result.score, 17 * 12 - 18);
    assert_eq!(controller.current_state(), GameState::MainMenu);
    assert!(controller.session().is_none());
}

#[test]
fn losing_scores_nothing() {
    let mut controller = in_combat(Player::Computer);
    let mut aim = scripted(fleet_tiles());
    let reports = controller.computer_turn(&mut aim).unwrap();
    assert_eq!(reports.len(), 17);
    assert_eq!(
        reports.last().unwrap().outcome.category(),
        AttackCategory::GameOver
    );
    assert_eq!(controller.current_state(), GameState::EndingGame);
    let result = controller.finish_game().unwrap();
    assert_eq!(result.winner, Player::Computer);
    assert_eq!(result.score, 0);
}

#[test]
fn lost_ships_cost_points() {
    let mut controller = in_combat(Player::Human);
    let mut aim = scripted(vec![coord(8, 0), coord(8, 1), coord(9, 9)]);
    controller.attack(coord(1, 0), &mut aim).unwrap();
    let session = controller.session().unwrap();
    assert_eq!(session.grid(Player::Human).ships_killed(), 1);
    assert_eq!(session.score(Player::Human), -1 - 20);
}

#[test]
fn listeners_follow_the_opponent_grid() {
    let mut controller = in_combat(Player::Human);
    let attacks = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&attacks);
    controller
        .subscribe(
            Player::Computer,
            Box::new(move |event: &GridEvent| {
                if let GridEvent::Attack(_) = event {
                    *counter.borrow_mut() += 1;
                }
            }),
        )
        .unwrap();
    let mut aim = scripted(vec![coord(9, 9)]);
    controller.attack(coord(0, 0), &mut aim).unwrap();
    controller.attack(coord(5, 5), &mut aim).unwrap();
    assert_eq!(*attacks.borrow(), 2);
}

#[test]
fn abandoning_returns_to_the_main_menu() {
    let mut controller = in_combat(Player::Human);
    controller.add_new_state(GameState::GameMenu);
    assert!(controller.abandon_game());
    assert_eq!(controller.current_state(), GameState::MainMenu);
    assert!(controller.session().is_none());
    assert!(!controller.abandon_game());
}

#[test]
fn restarting_discards_the_match() {
    let mut controller = in_combat(Player::Human);
    let mut aim = scripted(vec![]);
    controller.attack(coord(0, 0), &mut aim).unwrap();
    controller.add_new_state(GameState::GameMenu);
    controller.start_game();
    assert_eq!(controller.current_state(), GameState::Deploying);
    assert_eq!(controller.return_to(), Some(GameState::MainMenu));
    let grid = controller.grid(Player::Computer).unwrap();
    assert!(!grid.all_deployed());
    assert!(!grid.tile(coord(0, 0)).unwrap().shot());
}
