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
//! Library implementing the rules of a single-player game of sea battle against the
//! computer: grids, ships and their placement, attacks, and the state machine that moves a
//! match from deployment through combat to its end.
//!
//! [`board`] holds the per-player [`Grid`](board::Grid) and the masked
//! [`GridView`](board::GridView) an opponent sees. [`ships`] defines the standard fleet.
//! [`game`] ties two grids into a match owned by a
//! [`GameController`](game::GameController).

pub mod board;
pub mod game;
pub mod ships;
