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
use thiserror::Error;

use crate::{
    board::PlaceError,
    game::{GameState, Player},
};

/// Error returned when the [`GameController`][crate::game::GameController] is asked to do
/// something the current phase of the match does not allow.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum GameError {
    /// No match has been started, or it has already finished.
    #[error("no match is in progress")]
    NoMatch,

    /// The operation belongs to a different phase.
    #[error("operation requires {expected:?} but the game is in {actual:?}")]
    WrongPhase {
        expected: GameState,
        actual: GameState,
    },

    /// Combat cannot start until the player has deployed every ship.
    #[error("{0:?} has not deployed all ships")]
    NotDeployed(Player),

    /// The player tried to fire while it was the opponent's turn.
    #[error("it is not {0:?}'s turn")]
    OutOfTurn(Player),

    /// A ship could not be placed.
    #[error(transparent)]
    Place(#[from] PlaceError),
}
