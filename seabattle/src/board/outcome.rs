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
//! The result of firing at a single tile.
use std::fmt;

use crate::{board::Coordinate, ships::ShipName};

/// Classification of a single attack.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AttackCategory {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship, but did not destroy it.
    Hit,
    /// The shot destroyed a ship, but the grid still has ships left.
    Destroyed,
    /// The tile had already been shot. Nothing changed.
    AlreadyShot,
    /// The shot destroyed the last remaining ship of the grid.
    GameOver,
}

impl AttackCategory {
    /// Whether a ship segment was struck by this attack.
    pub fn is_hit(self) -> bool {
        match self {
            AttackCategory::Hit | AttackCategory::Destroyed | AttackCategory::GameOver => true,
            AttackCategory::Miss | AttackCategory::AlreadyShot => false,
        }
    }

    /// Whether the attacker keeps the turn after this attack.
    pub fn keeps_turn(self) -> bool {
        match self {
            AttackCategory::Hit | AttackCategory::Destroyed => true,
            AttackCategory::Miss | AttackCategory::AlreadyShot | AttackCategory::GameOver => false,
        }
    }
}

/// Outcome of resolving an attack against a grid. Produced fresh for every attack.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AttackOutcome {
    category: AttackCategory,
    coord: Coordinate,
    /// Only reported once the ship is destroyed.
    ship: Option<ShipName>,
}

impl AttackOutcome {
    pub(crate) fn new(category: AttackCategory, coord: Coordinate) -> Self {
        Self {
            category,
            coord,
            ship: None,
        }
    }

    pub(crate) fn with_ship(category: AttackCategory, coord: Coordinate, ship: ShipName) -> Self {
        Self {
            category,
            coord,
            ship: Some(ship),
        }
    }

    /// The classification of this attack.
    pub fn category(&self) -> AttackCategory {
        self.category
    }

    /// The tile that was attacked.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Row of the tile that was attacked.
    pub fn row(&self) -> usize {
        self.coord.row
    }

    /// Column of the tile that was attacked.
    pub fn col(&self) -> usize {
        self.coord.col
    }

    /// The ship that was destroyed, for [`Destroyed`][AttackCategory::Destroyed] and
    /// [`GameOver`][AttackCategory::GameOver] outcomes.
    pub fn ship(&self) -> Option<ShipName> {
        self.ship
    }

    /// Message describing the attack, phrased to follow "You" or "The AI".
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.category {
            AttackCategory::Miss => f.write_str("missed"),
            AttackCategory::Hit => f.write_str("hit something!"),
            AttackCategory::AlreadyShot => write!(f, "have already attacked {}!", self.coord),
            AttackCategory::Destroyed | AttackCategory::GameOver => match self.ship {
                Some(ship) => write!(f, "destroyed the enemy's {}", ship),
                None => f.write_str("destroyed the enemy's ship"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let coord = Coordinate::new(3, 7);
        assert_eq!(
            AttackOutcome::new(AttackCategory::Miss, coord).message(),
            "missed"
        );
        assert_eq!(
            AttackOutcome::new(AttackCategory::AlreadyShot, coord).message(),
            "have already attacked [7,3]!"
        );
        assert_eq!(
            AttackOutcome::with_ship(AttackCategory::Destroyed, coord, ShipName::Cruiser)
                .message(),
            "destroyed the enemy's Cruiser"
        );
    }

    #[test]
    fn only_hits_keep_the_turn() {
        assert!(AttackCategory::Hit.keeps_turn());
        assert!(AttackCategory::Destroyed.keeps_turn());
        assert!(!AttackCategory::Miss.keeps_turn());
        assert!(!AttackCategory::AlreadyShot.keeps_turn());
        assert!(!AttackCategory::GameOver.keeps_turn());
    }
}
