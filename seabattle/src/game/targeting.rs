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
use crate::board::{AttackOutcome, BoardView, Coordinate};

/// Chooses where the computer fires. Implementations only ever see the masked view of the
/// human's grid.
pub trait Targeting {
    /// Pick the next tile to fire at. Must be inside `view.dimensions()`.
    fn choose_target(&mut self, view: &dyn BoardView) -> Coordinate;

    /// Told the result of every shot chosen by this targeting.
    fn observe(&mut self, _outcome: &AttackOutcome) {}
}

impl<F> Targeting for F
where
    F: FnMut(&dyn BoardView) -> Coordinate,
{
    fn choose_target(&mut self, view: &dyn BoardView) -> Coordinate {
        self(view)
    }
}
