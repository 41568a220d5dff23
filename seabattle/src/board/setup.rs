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
//! Deployment of ships onto a [`Grid`].
use std::mem;

use log::debug;

use crate::{
    board::{CannotPlaceReason, Coordinate, Grid, GridEvent, PlaceError},
    ships::{Orientation, Placement, ShapeProjection, ShipName},
};

impl Grid {
    /// Check whether `ship` could be placed at `origin` extending along `orientation`,
    /// without placing it. Tiles held by `ship` itself do not count as occupied. Returns
    /// the tiles the ship would occupy.
    ///
    /// Panics if `ship` is not part of this grid's fleet.
    pub fn check_placement(
        &self,
        ship: ShipName,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<ShapeProjection, PlaceError> {
        let placement = Placement::new(origin, orientation);
        let shape = self.ship(ship).shape();
        let footprint = shape
            .project(origin, orientation, self.dimensions())
            .ok_or_else(|| PlaceError::new(CannotPlaceReason::OutOfBounds, ship, placement))?;
        for coord in footprint.iter() {
            match self.tiles[coord].ship {
                Some(other) if other != ship => {
                    return Err(PlaceError::new(
                        CannotPlaceReason::Occupied,
                        ship,
                        placement,
                    ));
                }
                _ => {}
            }
        }
        Ok(footprint)
    }

    /// Place `ship` with its first tile at `origin`, extending along `orientation`.
    ///
    /// Placement is all-or-nothing: the whole footprint is checked before anything is
    /// written, so on failure the ship is left exactly as it was (including at its old
    /// position if it was already deployed). On success any previous position is released.
    /// Listeners are notified whether or not placement succeeds.
    ///
    /// Panics if `ship` is not part of this grid's fleet.
    pub fn place_ship(
        &mut self,
        ship: ShipName,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        let result = self
            .check_placement(ship, origin, orientation)
            .map(|footprint| {
                self.write_placement(ship, Placement::new(origin, orientation), footprint)
            });
        match result {
            Ok(()) => debug!("placed {} at {} {:?}", ship, origin, orientation),
            Err(ref err) => debug!("{}", err),
        }
        self.refresh_kills();
        self.listeners.notify(&GridEvent::Deployment(ship));
        result
    }

    /// Take `ship` off the grid, then place it at the new position. If the new position is
    /// invalid the ship stays off the grid; the old position is not restored.
    ///
    /// Panics if `ship` is not part of this grid's fleet.
    pub fn move_ship(
        &mut self,
        ship: ShipName,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        self.clear_footprint(ship);
        self.place_ship(ship, origin, orientation)
    }

    /// Take `ship` off the grid. Shot flags of its tiles are left untouched. Returns the
    /// previous placement, or `None` if it was not deployed.
    ///
    /// Panics if `ship` is not part of this grid's fleet.
    pub fn remove_ship(&mut self, ship: ShipName) -> Option<Placement> {
        let previous = self.clear_footprint(ship);
        self.refresh_kills();
        self.listeners.notify(&GridEvent::Deployment(ship));
        previous
    }

    /// Place every ship that is not yet deployed at a random valid position. Ships which
    /// are already deployed stay where they are. Fails with the last rejected placement
    /// if a ship cannot be fit after many attempts, which only happens on small grids.
    #[cfg(feature = "rng_gen")]
    pub fn deploy_randomly(&mut self, rng: &mut impl rand::Rng) -> Result<(), PlaceError> {
        const MAX_ATTEMPTS: usize = 1000;

        let (width, height) = (self.dimensions().width(), self.dimensions().height());
        for ship in ShipName::iter_fleet(self.pending_ships()) {
            let mut last_err = None;
            for _ in 0..MAX_ATTEMPTS {
                let origin = Coordinate::new(rng.gen_range(0, height), rng.gen_range(0, width));
                let orientation: Orientation = rng.gen();
                match self.check_placement(ship, origin, orientation) {
                    Ok(footprint) => {
                        self.write_placement(ship, Placement::new(origin, orientation), footprint);
                        last_err = None;
                        break;
                    }
                    Err(err) => last_err = Some(err),
                }
            }
            self.listeners.notify(&GridEvent::Deployment(ship));
            if let Some(err) = last_err {
                self.refresh_kills();
                return Err(err);
            }
            debug!("randomly placed {}", ship);
        }
        self.refresh_kills();
        Ok(())
    }

    /// Write a footprint that was already checked by [`Grid::check_placement`].
    fn write_placement(&mut self, ship: ShipName, placement: Placement, footprint: ShapeProjection) {
        self.clear_footprint(ship);
        for coord in footprint.iter() {
            self.tiles[coord].ship = Some(ship);
        }
        let info = self.ship_info_mut(ship);
        info.placement = Some(placement);
        info.footprint = footprint;
    }

    /// Release the tiles held by `ship`, returning its previous placement.
    fn clear_footprint(&mut self, ship: ShipName) -> Option<Placement> {
        let info = self.ship_info_mut(ship);
        let footprint = mem::take(&mut info.footprint);
        let previous = info.placement.take();
        for coord in footprint.iter() {
            self.tiles[coord].ship = None;
        }
        previous
    }
}
