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
//! Game flow on top of the board model.
//!
//! [`state`] holds the stack of screens and phases the game moves through. [`controller`]
//! owns the match: both players' grids, whose turn it is, and the transitions between
//! deployment, combat and the end of the game. The computer opponent's choice of target
//! is delegated to a [`Targeting`] implementation, which is only ever shown a masked view
//! of the human's grid.

pub use self::{
    controller::{AttackReport, GameController, MatchResult, Session, ShotStats},
    errors::GameError,
    score::{Score, ScoreError},
    settings::Settings,
    state::{GameState, StateStack},
    targeting::Targeting,
};

pub mod controller;
mod errors;
mod score;
mod settings;
pub mod state;
mod targeting;

/// The two sides of a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}
