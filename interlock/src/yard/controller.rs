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

//! # Top-level controller module
//!
//! This module owns the committed state of the network and drives the planner. All mutations go
//! through [`Interlocking::admit`] and [`Interlocking::advance`]; both validate their arguments
//! completely before touching any state, so an error never leaves partial mutations behind.

use super::occupancy::Occupancy;
use super::topology::Topology;
use super::train::Train;
use super::types::{SectionId, TrainId};
use crate::planner::{self, Action};
use crate::Error;

use itertools::Itertools;
use log::*;
use std::collections::HashMap;

/// # Interlocking controller
///
/// The struct contains the static track plan, the train registry, and the committed occupancy of
/// every section. It admits trains, advances nominated trains tick by tick, and answers
/// occupancy and position queries.
///
/// ## Atomicity
///
/// The tick is the unit of atomicity. [`advance`](Self::advance) plans against a snapshot of the
/// committed state, then commits every confirmed movement before returning; no partial hop is
/// ever observable. Between calls, the occupancy map and the train positions are mutually
/// consistent: a section maps to a train exactly when that train maps back to the section.
///
/// ## Exited trains
///
/// The registry keeps the record of every train that ever entered the network. Re-admitting an
/// identifier is always rejected, and [`get_position`](Self::get_position) reports `None` for a
/// train that has left, which is distinct from the [`Error::UnknownTrain`] of an identifier that
/// was never admitted.
#[derive(Debug, Clone)]
pub struct Interlocking {
    topology: Topology,
    trains: HashMap<TrainId, Train>,
    occupancy: Occupancy,
}

impl Default for Interlocking {
    fn default() -> Self {
        Self::new()
    }
}

impl Interlocking {
    /// Generate an empty network over the fixed track plan.
    pub fn new() -> Self {
        Self { topology: Topology::new(), trains: HashMap::new(), occupancy: Occupancy::new() }
    }

    /// Admit a new train at `entry`, bound for `destination`. The route is computed here, once;
    /// the planner only ever consults it.
    ///
    /// The checks run in this order, and the first failing one is returned:
    /// 1. the identifier must not be registered yet ([`Error::DuplicateTrain`]),
    /// 2. both sections must exist on the track plan ([`Error::InvalidSection`]),
    /// 3. the entry section must be empty ([`Error::EntryOccupied`]),
    /// 4. a route must exist ([`Error::NoRoute`], which rejects cross-corridor requests).
    pub fn admit<S: Into<String>>(
        &mut self,
        id: S,
        entry: SectionId,
        destination: SectionId,
    ) -> Result<(), Error> {
        let id = id.into();
        if self.trains.contains_key(&id) {
            return Err(Error::DuplicateTrain(id));
        }
        self.topology.check_section(entry)?;
        self.topology.check_section(destination)?;
        if !self.occupancy.is_empty(entry) {
            return Err(Error::EntryOccupied(entry));
        }
        let path = self.topology.find_path(entry, destination)?;
        let kind = self.topology.kind_of(entry);

        debug!("admitting {} ({}) at {}, bound for {}", id, kind, entry, destination);
        self.occupancy.place(entry, id.clone());
        self.trains.insert(id.clone(), Train::new(id, kind, path));
        Ok(())
    }

    /// Run one tick: advance as many of the nominated trains as the safety rules allow, by one
    /// section each (or out of the network), and return how many advanced. A train nominated
    /// while standing on its destination halts the first time and exits the next time it is
    /// nominated; both a hop and an exit count as one advancement.
    ///
    /// Every nominated identifier must be known, otherwise the call fails with
    /// [`Error::UnknownTrain`] before any train moves. Nominated trains that already left the
    /// network are ignored. Nominating no trains is allowed and advances nothing.
    ///
    /// A result of `Ok(0)` means no nominated train could move legally; the network is
    /// unchanged. This is a valid outcome, not an error, and it is how deadlocks are preserved.
    pub fn advance<I, S>(&mut self, candidates: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // validate all identifiers before planning, so the call fails atomically
        let mut nominated: Vec<TrainId> = Vec::new();
        for id in candidates {
            let id = id.as_ref();
            if !self.trains.contains_key(id) {
                return Err(Error::UnknownTrain(id.to_string()));
            }
            nominated.push(id.to_string());
        }

        let plan = planner::plan_tick(&self.topology, &self.trains, &self.occupancy, &nominated);

        // commit: halting trains are marked for exit
        for id in &plan.halted {
            self.trains.get_mut(id).unwrap().mark_for_exit();
        }
        // commit: clear all vacated sections first, then fill the targets; a chained entrant
        // may otherwise land on a slot its predecessor has not yet left
        for (id, _) in &plan.actions {
            let section = self.trains[id].section().unwrap();
            self.occupancy.clear(section);
        }
        for (id, action) in &plan.actions {
            let train = self.trains.get_mut(id).unwrap();
            match action {
                Action::Exit => {
                    debug!("{} leaves the network", id);
                    train.exit();
                }
                Action::Hop(to) => {
                    train.advance_one();
                    self.occupancy.place(*to, id.clone());
                }
            }
        }

        debug!("tick committed: {} advanced out of {} nominated", plan.actions.len(), nominated.len());
        Ok(plan.actions.len())
    }

    /// The train occupying the given section, or `None` if the section is empty.
    pub fn get_occupant(&self, section: SectionId) -> Result<Option<&str>, Error> {
        self.topology.check_section(section)?;
        Ok(self.occupancy.occupant(section))
    }

    /// The section the given train occupies, or `None` if it has left the network.
    pub fn get_position(&self, id: impl AsRef<str>) -> Result<Option<SectionId>, Error> {
        Ok(self.get_train(id)?.section())
    }

    /// The full record of the given train.
    pub fn get_train(&self, id: impl AsRef<str>) -> Result<&Train, Error> {
        self.trains
            .get(id.as_ref())
            .ok_or_else(|| Error::UnknownTrain(id.as_ref().to_string()))
    }

    /// The admitted route of the given train, entry section first, destination last.
    pub fn get_route(&self, id: impl AsRef<str>) -> Result<&[SectionId], Error> {
        Ok(self.get_train(id)?.path())
    }

    /// Identifiers of all trains currently present on the network, sorted.
    pub fn get_trains(&self) -> Vec<&str> {
        self.trains.values().filter(|t| !t.has_exited()).map(Train::id).sorted().collect()
    }

    /// Number of trains currently present on the network.
    pub fn num_present(&self) -> usize {
        self.trains.values().filter(|t| !t.has_exited()).count()
    }

    /// The committed occupancy of all sections.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// The static track plan.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }
}
