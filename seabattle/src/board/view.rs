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
//! Read-only views of a grid, and the masking adapter shown to an opponent.
use std::ops::{Deref, DerefMut};

use crate::board::{
    AttackOutcome, Coordinate, Grid, Listener, ListenerId, RectDimensions,
};

/// What an observer sees at a single tile.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TileAppearance {
    /// Open water, or a ship the observer is not allowed to see.
    Sea,
    /// An undamaged ship segment.
    Ship,
    /// A ship segment that has been shot.
    Hit,
    /// A shot that landed in open water.
    Miss,
}

impl TileAppearance {
    /// Whether the tile has already been fired at.
    pub fn is_shot(self) -> bool {
        match self {
            TileAppearance::Hit | TileAppearance::Miss => true,
            TileAppearance::Sea | TileAppearance::Ship => false,
        }
    }
}

/// Capability shared by a grid and the views onto it: look at tiles, fire at them and
/// subscribe to changes. [`Grid`] implements this with full visibility, [`GridView`]
/// with ship positions hidden.
pub trait BoardView {
    /// Dimensions of the underlying grid.
    fn dimensions(&self) -> RectDimensions;

    /// What this view shows at `coord`. Panics if `coord` is out of bounds.
    fn tile_at(&self, coord: Coordinate) -> TileAppearance;

    /// Fire at `coord`. Panics if `coord` is out of bounds.
    fn resolve_attack(&mut self, coord: Coordinate) -> AttackOutcome;

    /// Register a listener that is called after every change to the underlying grid.
    fn subscribe(&mut self, listener: Listener) -> ListenerId;

    /// Remove a listener. Returns false if it was not registered.
    fn unsubscribe(&mut self, id: ListenerId) -> bool;

    /// Collect every coordinate of the view which has not been shot yet.
    fn unshot_tiles(&self) -> Vec<Coordinate> {
        self.dimensions()
            .iter_coordinates()
            .filter(|&coord| !self.tile_at(coord).is_shot())
            .collect()
    }
}

/// Masking adapter over a [`Grid`]: hides any ship segment that has not been hit. Holds
/// no state of its own, only the borrow of the grid.
///
/// A view over `&Grid` can only be looked at; a view over `&mut Grid` can also be fired
/// through and implements [`BoardView`].
#[derive(Debug)]
pub struct GridView<G> {
    grid: G,
}

impl<G: Deref<Target = Grid>> GridView<G> {
    /// Wrap the given grid.
    pub fn new(grid: G) -> Self {
        Self { grid }
    }

    /// Dimensions of the wrapped grid.
    pub fn dimensions(&self) -> RectDimensions {
        *self.grid.dimensions()
    }

    /// The grid's appearance at `coord`, with undamaged ships shown as sea.
    pub fn tile_at(&self, coord: Coordinate) -> TileAppearance {
        match self.grid.appearance(coord) {
            TileAppearance::Ship => TileAppearance::Sea,
            other => other,
        }
    }

    /// Number of ships destroyed on the wrapped grid. This is public knowledge, every
    /// destruction is announced.
    pub fn ships_killed(&self) -> usize {
        self.grid.ships_killed()
    }

    /// Get an iterator over the rows of the view. Each row is an iterator over the
    /// appearance of its tiles.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = TileAppearance>> {
        self.dimensions()
            .iter_rows()
            .map(move |row| row.map(move |coord| self.tile_at(coord)))
    }
}

impl<G: DerefMut<Target = Grid>> GridView<G> {
    /// Fire at `coord` on the wrapped grid.
    pub fn resolve_attack(&mut self, coord: Coordinate) -> AttackOutcome {
        self.grid.resolve_attack(coord)
    }

    /// Subscribe to changes of the wrapped grid.
    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        self.grid.subscribe(listener)
    }

    /// Remove a listener from the wrapped grid.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.grid.unsubscribe(id)
    }
}

impl<G: DerefMut<Target = Grid>> BoardView for GridView<G> {
    fn dimensions(&self) -> RectDimensions {
        GridView::dimensions(self)
    }

    fn tile_at(&self, coord: Coordinate) -> TileAppearance {
        GridView::tile_at(self, coord)
    }

    fn resolve_attack(&mut self, coord: Coordinate) -> AttackOutcome {
        GridView::resolve_attack(self, coord)
    }

    fn subscribe(&mut self, listener: Listener) -> ListenerId {
        GridView::subscribe(self, listener)
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        GridView::unsubscribe(self, id)
    }
}
