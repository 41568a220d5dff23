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
//! The tiles that make up a grid and the storage holding them.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::{
    board::{Coordinate, RectDimensions, TileAppearance},
    ships::ShipName,
};

/// A single tile in the player's grid.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub(super) struct Tile {
    /// The name of the ship that occupies this tile, if any.
    pub(super) ship: Option<ShipName>,

    /// Whether this tile has been shot. Never reset once set.
    pub(super) shot: bool,
}

impl Tile {
    /// What the owner of the grid sees at this tile.
    pub(super) fn appearance(&self) -> TileAppearance {
        match (self.ship, self.shot) {
            (Some(_), true) => TileAppearance::Hit,
            (None, true) => TileAppearance::Miss,
            (Some(_), false) => TileAppearance::Ship,
            (None, false) => TileAppearance::Sea,
        }
    }
}

/// Fixed-size storage of the tiles of one grid.
#[derive(Debug)]
pub(super) struct Tiles {
    /// Dimensions of this grid.
    pub(super) dim: RectDimensions,
    /// Tiles in row-major order.
    pub(super) cells: Box<[Tile]>,
}

impl Tiles {
    pub(super) fn new(dim: RectDimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Tile::default()).collect();
        Self { dim, cells }
    }

    /// Get a reference to the tile at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Tile> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Tiles {
    type Output = Tile;

    fn index(&self, coord: B) -> &Self::Output {
        &self.cells[self.dim.linearize(coord.borrow())]
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Tiles {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        let idx = self.dim.linearize(coord.borrow());
        &mut self.cells[idx]
    }
}
