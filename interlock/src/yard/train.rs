// Interlock: A Deterministic Railway Interlocking Controller
// Copyright (C) 2022  The Interlock Developers
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! Module containing the train record.

use super::types::{SectionId, TrainId, TrainKind};

/// # Train
///
/// A train admitted to the network, together with its planned route. The record stays in the
/// registry forever, even after the train has left the network: this keeps identifiers unique
/// for the lifetime of the controller, and lets queries distinguish "known but exited" from
/// "never admitted".
///
/// A train leaves the network via the two-step exit protocol: the first tick it is nominated
/// while standing on its destination, it only gets marked for exit; the next tick it is
/// nominated, it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    id: TrainId,
    kind: TrainKind,
    path: Vec<SectionId>,
    path_pos: usize,
    marked_for_exit: bool,
    exited: bool,
}

impl Train {
    /// Create a new train standing on the first section of `path`. The path must not be empty.
    pub(crate) fn new(id: TrainId, kind: TrainKind, path: Vec<SectionId>) -> Self {
        debug_assert!(!path.is_empty());
        Self { id, kind, path, path_pos: 0, marked_for_exit: false, exited: false }
    }

    /// The identifier of the train.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The corridor classification of the train.
    pub fn kind(&self) -> TrainKind {
        self.kind
    }

    /// The full route of the train, entry section first, destination last.
    pub fn path(&self) -> &[SectionId] {
        &self.path
    }

    /// The destination section of the train.
    pub fn destination(&self) -> SectionId {
        self.path[self.path.len() - 1]
    }

    /// The section the train currently occupies, or `None` if it has left the network.
    pub fn section(&self) -> Option<SectionId> {
        if self.exited {
            None
        } else {
            Some(self.path[self.path_pos])
        }
    }

    /// The next section on the route, or `None` if the train stands on its destination (or has
    /// left the network).
    pub fn next_section(&self) -> Option<SectionId> {
        if self.exited {
            None
        } else {
            self.path.get(self.path_pos + 1).copied()
        }
    }

    /// True if the train is present and stands on its destination.
    pub fn at_destination(&self) -> bool {
        !self.exited && self.path_pos == self.path.len() - 1
    }

    /// True if the train halted on its destination and will exit the next tick it is nominated.
    pub fn is_marked_for_exit(&self) -> bool {
        self.marked_for_exit
    }

    /// True if the train has left the network.
    pub fn has_exited(&self) -> bool {
        self.exited
    }

    pub(crate) fn mark_for_exit(&mut self) {
        self.marked_for_exit = true;
    }

    /// Advance the train by one section on its route.
    pub(crate) fn advance_one(&mut self) {
        debug_assert!(self.path_pos + 1 < self.path.len());
        self.path_pos += 1;
    }

    /// Remove the train from the network.
    pub(crate) fn exit(&mut self) {
        self.exited = true;
        self.marked_for_exit = false;
    }
}
