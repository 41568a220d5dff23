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
//! Change notification for grids.
use std::fmt;

use crate::{board::AttackOutcome, ships::ShipName};

/// Describes a mutation of a grid. Delivered to every listener before the mutating call
/// returns.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GridEvent {
    /// A ship was placed, moved or removed, or an attempt to place it failed.
    Deployment(ShipName),
    /// A tile was attacked.
    Attack(AttackOutcome),
}

/// Callback invoked whenever a grid changes.
pub type Listener = Box<dyn FnMut(&GridEvent)>;

/// Handle returned when subscribing, used to unsubscribe again.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

/// Registered listeners of a single grid. Delivery order is registration order, but
/// callers should not depend on it.
#[derive(Default)]
pub(super) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub(super) fn add(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove the listener with the given ID. Returns false if it was not registered.
    pub(super) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(super) fn notify(&mut self, event: &GridEvent) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
