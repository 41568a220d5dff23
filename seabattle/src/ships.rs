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
//! Types used for defining ships, their names and the way they are laid on the grid.
use std::fmt;

use enumflags2::BitFlags;

use crate::board::Coordinate;

pub use self::linear::{Line, ShapeProjection};

mod linear;

/// Name of a ship in the standard fleet. Every grid holds at most one ship of each name,
/// so the name doubles as the ship's ID.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ShipName {
    /// Carrier: length 5.
    Carrier = 0b00001,
    /// Battleship: length 4.
    Battleship = 0b00010,
    /// Cruiser: length 3.
    Cruiser = 0b00100,
    /// Submarine: length 3.
    Submarine = 0b01000,
    /// Destroyer: length 2.
    Destroyer = 0b10000,
}

/// A set of ship names.
pub type Fleet = BitFlags<ShipName>;

impl ShipName {
    /// Every ship of the standard fleet, largest first.
    pub const ALL: &'static [ShipName] = &[
        ShipName::Carrier,
        ShipName::Battleship,
        ShipName::Cruiser,
        ShipName::Submarine,
        ShipName::Destroyer,
    ];

    /// Get the length of this ship type.
    pub fn size(self) -> usize {
        match self {
            ShipName::Carrier => 5,
            ShipName::Battleship => 4,
            ShipName::Cruiser => 3,
            ShipName::Submarine => 3,
            ShipName::Destroyer => 2,
        }
    }

    /// Get the shape cooresponding to this ship name.
    pub fn shape(self) -> Line {
        Line::new(self.size())
    }

    /// The full, capitalized name of the ship.
    pub fn as_str(self) -> &'static str {
        match self {
            ShipName::Carrier => "Carrier",
            ShipName::Battleship => "Battleship",
            ShipName::Cruiser => "Cruiser",
            ShipName::Submarine => "Submarine",
            ShipName::Destroyer => "Destroyer",
        }
    }

    /// The standard fleet as a set.
    pub fn standard_fleet() -> Fleet {
        BitFlags::all()
    }

    /// Iterate the members of `fleet` in the order of [`ShipName::ALL`].
    pub fn iter_fleet(fleet: Fleet) -> impl Iterator<Item = ShipName> {
        ShipName::ALL
            .iter()
            .copied()
            .filter(move |&ship| fleet.contains(ship))
    }
}

impl fmt::Display for ShipName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Direction a ship extends in from its origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Towards increasing columns.
    Horizontal,
    /// Towards increasing rows.
    Vertical,
}

impl Orientation {
    /// The step taken from one segment of the ship to the next, as `(rows, cols)`.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    /// The other orientation.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

#[cfg(feature = "rng_gen")]
impl rand::distributions::Distribution<Orientation> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Where a deployed ship was placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    /// The first tile of the ship.
    pub origin: Coordinate,
    /// Direction the ship extends in from `origin`.
    pub orientation: Orientation,
}

impl Placement {
    /// Construct a [`Placement`].
    pub fn new(origin: Coordinate, orientation: Orientation) -> Self {
        Self {
            origin,
            orientation,
        }
    }
}
