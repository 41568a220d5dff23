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
//! Configuration of a match.
use crate::{board::RectDimensions, game::Player};

/// Settings which apply to every match started by a
/// [`GameController`][crate::game::GameController].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Settings {
    /// Dimensions of both players' grids.
    pub dimensions: RectDimensions,

    /// The player who fires first once deployment ends.
    pub first_player: Player,

    /// Volume level, from `0.0` to `1.0`.
    volume: f32,
}

impl Settings {
    /// Amount the volume changes by per step in the volume menu.
    pub const VOLUME_STEP: f32 = 0.1;

    /// Get the volume level.
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set the volume level, clamped to `0.0..=1.0`.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_nan() {
            0.0
        } else {
            volume.max(0.0).min(1.0)
        };
    }

    /// Raise or lower the volume by one step.
    pub fn step_volume(&mut self, up: bool) {
        let step = if up {
            Self::VOLUME_STEP
        } else {
            -Self::VOLUME_STEP
        };
        self.set_volume(self.volume + step);
    }
}

impl Default for Settings {
    /// A 10x10 grid, the human firing first, at full volume.
    fn default() -> Self {
        Self {
            dimensions: RectDimensions::default(),
            first_player: Player::Human,
            volume: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_is_clamped() {
        let mut settings = Settings::default();
        settings.step_volume(true);
        assert_eq!(settings.volume(), 1.0);
        for _ in 0..15 {
            settings.step_volume(false);
        }
        assert_eq!(settings.volume(), 0.0);
        settings.set_volume(f32::NAN);
        assert_eq!(settings.volume(), 0.0);
    }
}
