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
//! Ship records owned by the grid.
use crate::board::Position;

/// A placed ship. Stored once in the grid's ship list; cells refer to it by index.
#[derive(Debug, Clone)]
pub(crate) struct Ship {
    /// Where the ship was placed.
    position: Position,

    /// How many unique hits the ship can take before being sunk.
    len: usize,

    /// How many of the ship's cells have been hit.
    hits: usize,
}

impl Ship {
    pub(crate) fn new(position: Position) -> Self {
        Self {
            position,
            len: position.len(),
            hits: 0,
        }
    }

    pub(crate) fn position(&self) -> &Position {
        &self.position
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn hits(&self) -> usize {
        self.hits
    }

    pub(crate) fn sunk(&self) -> bool {
        self.hits == self.len
    }

    /// Count a hit on a cell of this ship that had not been hit before.
    pub(crate) fn record_hit(&mut self) {
        debug_assert!(self.hits < self.len, "more unique hits than cells");
        self.hits += 1;
    }

    pub(crate) fn reset(&mut self) {
        self.hits = 0;
    }
}
