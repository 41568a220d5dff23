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
//! Errors used by the [`Grid`][crate::board::Grid].

use thiserror::Error;

use crate::ships::{Placement, ShipName};

/// Reason why a ship could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more segments of the ship would fall outside the grid.
    #[error("the ship can't fit on the board")]
    OutOfBounds,
    /// One or more of the tiles was already occupied by another ship.
    #[error("the requested position was already occupied")]
    Occupied,
}

/// Error caused when attempting to place a ship in an invalid position. The ship is left
/// exactly as it was before the attempt.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place {ship} at {}: {reason}", .placement.origin)]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: ShipName,
    placement: Placement,
}

impl PlaceError {
    /// Construct a placement error from a reason, ship, and placement.
    pub(super) fn new(reason: CannotPlaceReason, ship: ShipName, placement: Placement) -> Self {
        Self {
            reason,
            ship,
            placement,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// The ship that could not be placed.
    pub fn ship(&self) -> ShipName {
        self.ship
    }

    /// Get the [`Placement`] that was attempted.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }
}
