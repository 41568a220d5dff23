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
//! Types that make up the game board.

use std::collections::HashMap;

use log::debug;

use crate::ships::{Fleet, Line, Placement, ShapeProjection, ShipName};

use self::tiles::Tiles;
pub use self::{
    dimensions::{Coordinate, RectDimensions},
    errors::{CannotPlaceReason, PlaceError},
    listeners::{GridEvent, Listener, ListenerId},
    outcome::{AttackCategory, AttackOutcome},
    view::{BoardView, GridView, TileAppearance},
};

mod dimensions;
mod errors;
mod listeners;
mod outcome;
mod setup;
mod tiles;
mod view;

/// Deployment state of one ship of the fleet.
#[derive(Debug, Clone, Default)]
struct ShipInfo {
    /// Placement of this ship, if it has been deployed.
    placement: Option<Placement>,

    /// Tiles occupied by the ship. Empty while the ship is not deployed.
    footprint: ShapeProjection,
}

/// Handle to a ship that allows getting information about its status. Hits are counted
/// from the shot flags of the ship's tiles, so they can never be counted twice.
#[derive(Debug, Copy, Clone)]
pub struct ShipRef<'a> {
    /// Name of the ship.
    name: ShipName,

    /// Deployment state from the grid.
    info: &'a ShipInfo,

    /// Tiles of the grid.
    tiles: &'a Tiles,
}

impl<'a> ShipRef<'a> {
    /// Get the name of the ship.
    pub fn name(&self) -> ShipName {
        self.name
    }

    /// Number of tiles the ship occupies.
    pub fn size(&self) -> usize {
        self.name.size()
    }

    /// The shape of the ship.
    pub fn shape(&self) -> Line {
        self.name.shape()
    }

    /// Whether the ship is currently on the grid.
    pub fn is_deployed(&self) -> bool {
        self.info.placement.is_some()
    }

    /// Origin and orientation of the ship, if it is deployed.
    pub fn placement(&self) -> Option<Placement> {
        self.info.placement
    }

    /// The tiles occupied by this ship. Empty if it is not deployed.
    pub fn footprint(&self) -> &'a [Coordinate] {
        &self.info.footprint
    }

    /// Number of the ship's tiles that have been shot.
    pub fn hits_taken(&self) -> usize {
        let tiles = self.tiles;
        self.footprint()
            .iter()
            .filter(|&coord| tiles[coord].shot)
            .count()
    }

    /// Check if this ship has been destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.is_deployed() && self.hits_taken() >= self.size()
    }

    /// Get an iterator over the coordinates of this ship and whether those coords have
    /// been hit.
    pub fn hits(&self) -> impl 'a + Iterator<Item = (Coordinate, bool)> {
        let tiles = self.tiles;
        self.footprint()
            .iter()
            .map(move |&coord| (coord, tiles[coord].shot))
    }
}

/// Reference to a particular tile in the grid.
#[derive(Debug, Copy, Clone)]
pub struct TileRef<'a> {
    /// Coordinate of this tile.
    coord: Coordinate,

    /// Whether this tile was shot.
    shot: bool,

    /// Reference to the ship that occupies this tile if any.
    ship: Option<ShipRef<'a>>,
}

impl<'a> TileRef<'a> {
    /// The grid coordinate of this tile.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether this tile has been shot previously.
    pub fn shot(&self) -> bool {
        self.shot
    }

    /// The ship reference for the ship that occupies this tile, if any.
    pub fn ship(&self) -> Option<ShipRef<'a>> {
        self.ship
    }
}

/// A single player's side of the ocean: the tiles, the player's fleet and where it is
/// deployed. The grid is the only owner and mutator of this state; opponents see it
/// through a [`GridView`].
#[derive(Debug)]
pub struct Grid {
    /// Tiles of the grid.
    tiles: Tiles,

    /// Deployment state of every ship in the fleet.
    ships: HashMap<ShipName, ShipInfo>,

    /// Number of ships which are destroyed.
    ships_killed: usize,

    /// Subscribers to changes of this grid.
    listeners: listeners::Listeners,
}

impl Grid {
    /// Create an empty grid with the given dimensions holding the standard fleet.
    pub fn new(dim: RectDimensions) -> Self {
        Self::with_fleet(dim, ShipName::standard_fleet())
    }

    /// Create an empty grid with the given dimensions holding only the ships in `fleet`.
    pub fn with_fleet(dim: RectDimensions, fleet: Fleet) -> Self {
        Self {
            tiles: Tiles::new(dim),
            ships: ShipName::iter_fleet(fleet)
                .map(|ship| (ship, ShipInfo::default()))
                .collect(),
            ships_killed: 0,
            listeners: Default::default(),
        }
    }

    /// Get the [`RectDimensions`] of this [`Grid`].
    pub fn dimensions(&self) -> &RectDimensions {
        &self.tiles.dim
    }

    /// The set of ships this grid holds.
    pub fn fleet(&self) -> Fleet {
        self.ships.keys().fold(Fleet::empty(), |mut fleet, &ship| {
            fleet.insert(ship);
            fleet
        })
    }

    /// Returns true if every ship of the fleet is deployed.
    pub fn all_deployed(&self) -> bool {
        self.ships.values().all(|info| info.placement.is_some())
    }

    /// Ships which still need to be deployed.
    pub fn pending_ships(&self) -> Fleet {
        self.filter_fleet(|ship| !ship.is_deployed())
    }

    /// Ships which have been destroyed.
    pub fn destroyed_ships(&self) -> Fleet {
        self.filter_fleet(|ship| ship.is_destroyed())
    }

    /// Number of ships destroyed so far.
    pub fn ships_killed(&self) -> usize {
        self.ships_killed
    }

    /// Returns true if the grid has ships and all of them are destroyed.
    pub fn is_defeated(&self) -> bool {
        !self.ships.is_empty() && self.ships_killed == self.ships.len()
    }

    /// Get an iterator over all ships of the fleet, largest first.
    pub fn ships(&self) -> impl Iterator<Item = ShipRef> {
        ShipName::ALL
            .iter()
            .filter_map(move |&name| self.get_ship(name))
    }

    /// Get the ship with the specified name if it is part of the fleet.
    pub fn get_ship(&self, name: ShipName) -> Option<ShipRef> {
        self.ships.get(&name).map(|info| ShipRef {
            name,
            info,
            tiles: &self.tiles,
        })
    }

    /// Get the ship with the specified name. Panics if the ship is not part of the fleet.
    pub fn ship(&self, name: ShipName) -> ShipRef {
        match self.get_ship(name) {
            Some(ship) => ship,
            None => panic!("{} is not part of this grid's fleet", name),
        }
    }

    /// Get a reference to the tile at the given coordinate. Returns None if the
    /// coordinate is out of bounds.
    pub fn tile(&self, coord: Coordinate) -> Option<TileRef> {
        self.tiles.get(coord).map(|tile| TileRef {
            coord,
            shot: tile.shot,
            ship: tile.ship.map(|name| self.ship(name)),
        })
    }

    /// What the owner of the grid sees at `coord`. Panics if `coord` is out of bounds.
    pub fn appearance(&self, coord: Coordinate) -> TileAppearance {
        self.tiles[coord].appearance()
    }

    /// Get an iterator over the rows of the grid as seen by its owner. Each row is an
    /// iterator over the appearance of its tiles.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = TileAppearance>> {
        self.dimensions()
            .iter_rows()
            .map(move |row| row.map(move |coord| self.appearance(coord)))
    }

    /// Fire a shot at `coord`, returning what happened. Shooting a tile twice is not an
    /// error, it reports [`AlreadyShot`][AttackCategory::AlreadyShot] and changes nothing.
    /// Listeners are notified in every case.
    ///
    /// Panics if `coord` is out of bounds; the bounds are known to every caller.
    pub fn resolve_attack(&mut self, coord: Coordinate) -> AttackOutcome {
        let outcome = self.shoot(coord);
        debug!("attack at {} resolved as {:?}", coord, outcome.category());
        self.listeners.notify(&GridEvent::Attack(outcome));
        outcome
    }

    fn shoot(&mut self, coord: Coordinate) -> AttackOutcome {
        let tile = &mut self.tiles[coord];
        if tile.shot {
            return AttackOutcome::new(AttackCategory::AlreadyShot, coord);
        }
        tile.shot = true;
        let ship = match tile.ship {
            None => return AttackOutcome::new(AttackCategory::Miss, coord),
            Some(ship) => ship,
        };
        if self.ship(ship).is_destroyed() {
            self.refresh_kills();
            if self.is_defeated() {
                AttackOutcome::with_ship(AttackCategory::GameOver, coord, ship)
            } else {
                AttackOutcome::with_ship(AttackCategory::Destroyed, coord, ship)
            }
        } else {
            AttackOutcome::new(AttackCategory::Hit, coord)
        }
    }

    /// Recount destroyed ships. Keeps `ships_killed` exact even if ships are moved over
    /// tiles that were already shot.
    fn refresh_kills(&mut self) {
        self.ships_killed = self.ships().filter(|ship| ship.is_destroyed()).count();
    }

    /// Register a listener that is called after every change to this grid.
    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn ship_info_mut(&mut self, ship: ShipName) -> &mut ShipInfo {
        match self.ships.get_mut(&ship) {
            Some(info) => info,
            None => panic!("{} is not part of this grid's fleet", ship),
        }
    }

    fn filter_fleet<F: Fn(&ShipRef) -> bool>(&self, pred: F) -> Fleet {
        self.ships()
            .filter(|ship| pred(ship))
            .fold(Fleet::empty(), |mut fleet, ship| {
                fleet.insert(ship.name());
                fleet
            })
    }
}

impl Default for Grid {
    /// A 10x10 grid holding the standard fleet.
    fn default() -> Self {
        Self::new(RectDimensions::default())
    }
}

impl BoardView for Grid {
    fn dimensions(&self) -> RectDimensions {
        *Grid::dimensions(self)
    }

    fn tile_at(&self, coord: Coordinate) -> TileAppearance {
        self.appearance(coord)
    }

    fn resolve_attack(&mut self, coord: Coordinate) -> AttackOutcome {
        Grid::resolve_attack(self, coord)
    }

    fn subscribe(&mut self, listener: Listener) -> ListenerId {
        Grid::subscribe(self, listener)
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        Grid::unsubscribe(self, id)
    }
}
