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
//! Ownership of a match and the transitions between its phases.
use log::{info, warn};

use crate::{
    board::{
        AttackCategory, AttackOutcome, Coordinate, Grid, GridView, Listener, ListenerId,
    },
    game::{GameError, GameState, Player, Settings, StateStack, Targeting},
    ships::{Orientation, Placement, ShipName},
};

/// Shot counts of one player over a match.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ShotStats {
    shots: u32,
    hits: u32,
    misses: u32,
}

impl ShotStats {
    /// Count one shot. Repeated shots count as shots but neither hit nor miss.
    fn record(&mut self, outcome: &AttackOutcome) {
        self.shots += 1;
        match outcome.category() {
            AttackCategory::Miss => self.misses += 1,
            AttackCategory::AlreadyShot => {}
            _ => self.hits += 1,
        }
    }

    /// Every shot fired, including repeats.
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Shots which struck a ship.
    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// Shots which landed in open water.
    pub fn misses(&self) -> u32 {
        self.misses
    }
}

/// A single attack made during a call to [`GameController::attack`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttackReport {
    /// The player who fired.
    pub attacker: Player,
    /// What happened.
    pub outcome: AttackOutcome,
}

impl AttackReport {
    /// Message for the player, e.g. "You hit something!".
    pub fn message(&self) -> String {
        match self.attacker {
            Player::Human => format!("You {}", self.outcome),
            Player::Computer => format!("The AI {}", self.outcome),
        }
    }
}

/// Summary of a finished match.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MatchResult {
    /// The player who destroyed the other's fleet.
    pub winner: Player,
    /// The human's final score.
    pub score: i32,
    /// Shots fired by the human.
    pub human: ShotStats,
    /// Shots fired by the computer.
    pub computer: ShotStats,
}

/// One player's side of a match.
#[derive(Debug)]
struct Side {
    grid: Grid,
    stats: ShotStats,
}

impl Side {
    fn new(settings: &Settings) -> Self {
        Self {
            grid: Grid::new(settings.dimensions),
            stats: ShotStats::default(),
        }
    }
}

/// State of a single match: both grids, whose turn it is and who has won. Created when a
/// match starts and dropped when it ends.
#[derive(Debug)]
pub struct Session {
    human: Side,
    computer: Side,
    current: Player,
    winner: Option<Player>,
}

impl Session {
    fn new(settings: &Settings) -> Self {
        Self {
            human: Side::new(settings),
            computer: Side::new(settings),
            current: settings.first_player,
            winner: None,
        }
    }

    fn side(&self, player: Player) -> &Side {
        match player {
            Player::Human => &self.human,
            Player::Computer => &self.computer,
        }
    }

    fn side_mut(&mut self, player: Player) -> &mut Side {
        match player {
            Player::Human => &mut self.human,
            Player::Computer => &mut self.computer,
        }
    }

    /// The full grid of `player`, as its owner sees it.
    pub fn grid(&self, player: Player) -> &Grid {
        &self.side(player).grid
    }

    /// The grid of `player` as their opponent sees it.
    pub fn view(&self, player: Player) -> GridView<&Grid> {
        GridView::new(self.grid(player))
    }

    /// The player whose turn it is.
    pub fn current(&self) -> Player {
        self.current
    }

    /// The winner, once a fleet has been destroyed.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Shot counts of `player`.
    pub fn stats(&self, player: Player) -> ShotStats {
        self.side(player).stats
    }

    /// Score of `player`: twelve per hit, minus one per shot, minus twenty per ship lost.
    /// A player whose fleet was destroyed scores zero.
    pub fn score(&self, player: Player) -> i32 {
        let side = self.side(player);
        if side.grid.is_defeated() {
            0
        } else {
            side.stats.hits as i32 * 12
                - side.stats.shots as i32
                - side.grid.ships_killed() as i32 * 20
        }
    }

    /// Fire at the opponent of `attacker` through the opponent's masked view, then pass
    /// the turn or declare the winner.
    fn fire(&mut self, attacker: Player, coord: Coordinate) -> AttackOutcome {
        let target = attacker.opponent();
        let outcome = GridView::new(&mut self.side_mut(target).grid).resolve_attack(coord);
        self.side_mut(attacker).stats.record(&outcome);
        if outcome.category() == AttackCategory::GameOver {
            self.winner = Some(attacker);
        } else if !outcome.category().keeps_turn() {
            self.current = target;
        }
        outcome
    }

    /// Let the computer fire until the turn passes back or the match is over.
    fn computer_turn(&mut self, targeting: &mut dyn Targeting, reports: &mut Vec<AttackReport>) {
        while self.current == Player::Computer && self.winner.is_none() {
            let coord = targeting.choose_target(&GridView::new(&mut self.human.grid));
            let outcome = self.fire(Player::Computer, coord);
            targeting.observe(&outcome);
            reports.push(AttackReport {
                attacker: Player::Computer,
                outcome,
            });
        }
    }
}

/// Owns the state stack and the current match. Front-ends drive the game entirely through
/// this type.
#[derive(Debug, Default)]
pub struct GameController {
    states: StateStack,
    settings: Settings,
    session: Option<Session>,
}

impl GameController {
    /// Construct a controller showing the main menu.
    pub fn new(settings: Settings) -> Self {
        Self {
            states: StateStack::new(),
            settings,
            session: None,
        }
    }

    /// The state at the top of the stack.
    pub fn current_state(&self) -> GameState {
        self.states.current()
    }

    /// The state the current state will return to. The volume menu uses this to tell
    /// whether it was opened from the main menu or the game menu.
    pub fn return_to(&self) -> Option<GameState> {
        self.states.return_to()
    }

    /// Returns true once the main menu has been left and the program should exit.
    pub fn is_quitting(&self) -> bool {
        self.states.is_quitting()
    }

    /// Enter a new state, keeping the current one to return to.
    pub fn add_new_state(&mut self, state: GameState) {
        info!("entering {:?} from {:?}", state, self.states.current());
        self.states.push(state);
    }

    /// Replace the current state.
    pub fn switch_state(&mut self, state: GameState) {
        info!("switching from {:?} to {:?}", self.states.current(), state);
        self.states.switch(state);
    }

    /// Leave the current state, returning to the previous one.
    pub fn end_current_state(&mut self) -> Option<GameState> {
        let left = self.states.pop();
        info!("left {:?}, now in {:?}", left, self.states.current());
        left
    }

    /// Settings used for the next match.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access to the settings. Dimension changes apply to the next match.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// The match in progress, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The full grid of `player` in the current match.
    pub fn grid(&self, player: Player) -> Option<&Grid> {
        self.session.as_ref().map(|session| session.grid(player))
    }

    /// The grid of `player` as their opponent sees it.
    pub fn view_of(&self, player: Player) -> Option<GridView<&Grid>> {
        self.session.as_ref().map(|session| session.view(player))
    }

    /// Start a new match, discarding any match in progress, and begin deployment.
    pub fn start_game(&mut self) {
        if self.session.take().is_some() {
            info!("discarding the previous match");
        }
        self.states.unwind_to(GameState::MainMenu);
        self.session = Some(Session::new(&self.settings));
        info!("new match on a {:?} grid", self.settings.dimensions);
        self.add_new_state(GameState::Deploying);
    }

    /// Subscribe to changes of `player`'s grid.
    pub fn subscribe(&mut self, player: Player, listener: Listener) -> Result<ListenerId, GameError> {
        let session = self.session.as_mut().ok_or(GameError::NoMatch)?;
        Ok(session.side_mut(player).grid.subscribe(listener))
    }

    /// Place one of `player`'s ships. The ship keeps its old position if this fails.
    pub fn place_ship(
        &mut self,
        player: Player,
        ship: ShipName,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let grid = self.deploying_grid(player)?;
        Ok(grid.place_ship(ship, origin, orientation)?)
    }

    /// Move one of `player`'s ships. The ship is left undeployed if this fails.
    pub fn move_ship(
        &mut self,
        player: Player,
        ship: ShipName,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let grid = self.deploying_grid(player)?;
        Ok(grid.move_ship(ship, origin, orientation)?)
    }

    /// Take one of `player`'s ships off the grid.
    pub fn remove_ship(
        &mut self,
        player: Player,
        ship: ShipName,
    ) -> Result<Option<Placement>, GameError> {
        let grid = self.deploying_grid(player)?;
        Ok(grid.remove_ship(ship))
    }

    /// Randomly place every ship `player` has not placed yet.
    #[cfg(feature = "rng_gen")]
    pub fn deploy_randomly(&mut self, player: Player, rng: &mut impl rand::Rng) -> Result<(), GameError> {
        let grid = self.deploying_grid(player)?;
        Ok(grid.deploy_randomly(rng)?)
    }

    /// Finish deployment and start combat. Both players must have deployed every ship.
    pub fn end_deployment(&mut self) -> Result<(), GameError> {
        self.expect_state(GameState::Deploying)?;
        let session = self.session.as_ref().ok_or(GameError::NoMatch)?;
        for &player in &[Player::Human, Player::Computer] {
            if !session.grid(player).all_deployed() {
                warn!("{:?} tried to start combat with ships left to deploy", player);
                return Err(GameError::NotDeployed(player));
            }
        }
        self.switch_state(GameState::Discovering);
        Ok(())
    }

    /// The human fires at `coord` on the computer's grid. A hit keeps the turn; a miss or a
    /// repeated shot passes it, after which the computer fires at tiles chosen by
    /// `targeting` until it passes the turn back. Returns every attack made, in order.
    ///
    /// Panics if `coord` is outside the grid.
    pub fn attack(
        &mut self,
        coord: Coordinate,
        targeting: &mut dyn Targeting,
    ) -> Result<Vec<AttackReport>, GameError> {
        let session = self.discovering_session()?;
        if session.current != Player::Human {
            warn!("human fired out of turn");
            return Err(GameError::OutOfTurn(Player::Human));
        }
        let mut reports = vec![AttackReport {
            attacker: Player::Human,
            outcome: session.fire(Player::Human, coord),
        }];
        session.computer_turn(targeting, &mut reports);
        self.check_game_over();
        Ok(reports)
    }

    /// Let the computer fire if it is its turn, e.g. when it moves first.
    pub fn computer_turn(
        &mut self,
        targeting: &mut dyn Targeting,
    ) -> Result<Vec<AttackReport>, GameError> {
        let session = self.discovering_session()?;
        let mut reports = Vec::new();
        session.computer_turn(targeting, &mut reports);
        self.check_game_over();
        Ok(reports)
    }

    /// Leave the end-of-game screen, returning to the state the match was started from,
    /// and drop the match.
    pub fn finish_game(&mut self) -> Result<MatchResult, GameError> {
        self.expect_state(GameState::EndingGame)?;
        let session = self.session.take().ok_or(GameError::NoMatch)?;
        let winner = session.winner.ok_or(GameError::NoMatch)?;
        let result = MatchResult {
            winner,
            score: session.score(Player::Human),
            human: session.stats(Player::Human),
            computer: session.stats(Player::Computer),
        };
        info!("match over, {:?} won, human scored {}", winner, result.score);
        self.end_current_state();
        Ok(result)
    }

    /// Drop the match in progress and return to the main menu. Returns false if there was
    /// no match.
    pub fn abandon_game(&mut self) -> bool {
        let had_match = self.session.take().is_some();
        if had_match {
            info!("match abandoned");
        }
        self.states.unwind_to(GameState::MainMenu);
        had_match
    }

    fn check_game_over(&mut self) {
        let over = self
            .session
            .as_ref()
            .map_or(false, |session| session.winner.is_some());
        if over && self.states.current() == GameState::Discovering {
            self.switch_state(GameState::EndingGame);
        }
    }

    fn expect_state(&self, expected: GameState) -> Result<(), GameError> {
        let actual = self.states.current();
        if actual == expected {
            Ok(())
        } else {
            warn!("expected {:?} but the game is in {:?}", expected, actual);
            Err(GameError::WrongPhase { expected, actual })
        }
    }

    fn deploying_grid(&mut self, player: Player) -> Result<&mut Grid, GameError> {
        self.expect_state(GameState::Deploying)?;
        let session = self.session.as_mut().ok_or(GameError::NoMatch)?;
        Ok(&mut session.side_mut(player).grid)
    }

    fn discovering_session(&mut self) -> Result<&mut Session, GameError> {
        self.expect_state(GameState::Discovering)?;
        self.session.as_mut().ok_or(GameError::NoMatch)
    }
}
