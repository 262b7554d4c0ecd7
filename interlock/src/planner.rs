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

//! # Movement Planner
//!
//! This module contains the per-tick movement planner. Given the committed state of the network
//! and the set of nominated trains, [`plan_tick`] computes which trains hop one section forward,
//! which leave the network, and which stay where they are. The planner never mutates anything;
//! the [`Interlocking`](crate::yard::Interlocking) commits the returned [`TickPlan`] atomically.
//!
//! ## Phases
//!
//! 1. **Ordering**: the nominated trains are sorted by classification (passenger before
//!    freight), then by identifier. Duplicated nominations collapse to one candidate. This
//!    ordering is the single source of determinism: it decides both who gets confirmed first
//!    and who wins a contended section.
//!
//! 2. **Intents**: each candidate either wants to exit (it stands on its destination and was
//!    already marked), halts (first tick on its destination, only gets marked), or wants to hop
//!    to the next section of its route.
//!
//! 3. **Confirmation**: candidates are confirmed one at a time. A hop is confirmed only if
//!    - the crossing is not locked against it (a freight 3↔4 hop while any of the fouling
//!      sections 1, 5, 6 is occupied in the *committed* state is refused; confirmed vacates do
//!      not unlock the crossing within the same tick),
//!    - no already confirmed hop targets the same section,
//!    - the target is empty, or its occupant is itself confirmed to leave it, and
//!    - the target's occupant is not confirmed to move into the candidate's own section
//!      (head-on swaps are always illegal).
//!
//!    Exits are always confirmable: they vacate a section without claiming one. After each
//!    confirmation, the scan restarts from the highest-priority unconfirmed candidate, so that
//!    a section freed by a confirmation is always claimed by the best-ranked train that wants
//!    it. The loop ends when a full scan confirms nothing; confirmations are never retracted,
//!    so at most one scan per candidate runs.
//!
//! A tick in which nothing is confirmed is a valid outcome. If no nominated train can move
//! without violating a rule, the plan is simply empty, and the network stays as it is.

use crate::yard::{Occupancy, SectionId, Topology, Train, TrainId, TrainKind};
use log::*;
use std::collections::HashMap;

/// Action confirmed for a single train in the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Advance by one section, onto the given target section.
    Hop(SectionId),
    /// Leave the network from the destination section.
    Exit,
}

/// The result of planning one tick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TickPlan {
    /// Confirmed actions, in candidate order. Hops and exits both count as one advancement.
    pub actions: Vec<(TrainId, Action)>,
    /// Trains halting on their destination this tick. They do not advance; committing the plan
    /// marks them for exit.
    pub halted: Vec<TrainId>,
}

/// What a candidate wants to do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    /// Hop from the occupied section to the next section of the route.
    Hop { from: SectionId, to: SectionId },
    /// Leave the network.
    Exit,
}

/// Compute the movement plan for one tick.
///
/// Every identifier in `nominated` must exist in `trains`; the controller validates this before
/// planning. Trains that have already left the network are ignored.
pub fn plan_tick(
    topology: &Topology,
    trains: &HashMap<TrainId, Train>,
    occupancy: &Occupancy,
    nominated: &[TrainId],
) -> TickPlan {
    // Phase 1: deterministic candidate order
    let mut ordered: Vec<&Train> = nominated
        .iter()
        .filter_map(|id| trains.get(id))
        .filter(|t| !t.has_exited())
        .collect();
    ordered.sort_by(|a, b| a.kind().cmp(&b.kind()).then_with(|| a.id().cmp(b.id())));
    ordered.dedup_by(|a, b| a.id() == b.id());

    // Phase 2: intents
    let mut halted: Vec<TrainId> = Vec::new();
    let mut intents: Vec<(&Train, Intent)> = Vec::new();
    for train in ordered {
        if train.at_destination() {
            if train.is_marked_for_exit() {
                intents.push((train, Intent::Exit));
            } else {
                // first tick on the destination: halt, exit next time
                trace!("{} reached {}, halting", train.id(), train.destination());
                halted.push(train.id().to_string());
            }
        } else {
            // present and not at destination, so the route has a next section
            let from = train.section().unwrap();
            let to = train.next_section().unwrap();
            intents.push((train, Intent::Hop { from, to }));
        }
    }

    // Phase 3: iterative confirmation
    let mut confirmed: HashMap<&str, Action> = HashMap::new();
    loop {
        let mut new_confirmation = false;
        for &(train, intent) in intents.iter() {
            if confirmed.contains_key(train.id()) {
                continue;
            }
            let action = match intent {
                Intent::Exit => Action::Exit,
                Intent::Hop { from, to } => {
                    if !hop_allowed(topology, occupancy, &confirmed, train, from, to) {
                        continue;
                    }
                    Action::Hop(to)
                }
            };
            trace!("confirming {}: {:?}", train.id(), action);
            confirmed.insert(train.id(), action);
            new_confirmation = true;
            // rescan from the top: what this confirmation freed goes to the best-ranked train
            break;
        }
        if !new_confirmation {
            break;
        }
    }

    let actions: Vec<(TrainId, Action)> = intents
        .iter()
        .filter_map(|(t, _)| confirmed.get(t.id()).map(|a| (t.id().to_string(), *a)))
        .collect();
    TickPlan { actions, halted }
}

/// Check the safety rules for a single hop against the committed occupancy and the confirmed
/// moves so far.
fn hop_allowed(
    topology: &Topology,
    occupancy: &Occupancy,
    confirmed: &HashMap<&str, Action>,
    train: &Train,
    from: SectionId,
    to: SectionId,
) -> bool {
    // crossing interlock: tested against the committed state only, never against lookahead
    if train.kind() == TrainKind::Freight
        && topology.is_crossing_hop(from, to)
        && occupancy.any_occupied(topology.crossing_fouling())
    {
        trace!("{}: crossing locked, holding at {}", train.id(), from);
        return false;
    }

    // single-target exclusivity
    if confirmed.values().any(|a| *a == Action::Hop(to)) {
        trace!("{}: {} is already claimed this tick", train.id(), to);
        return false;
    }

    // target availability, with chain unblocking
    match occupancy.occupant(to) {
        None => true,
        Some(occupant) => match confirmed.get(occupant) {
            Some(Action::Exit) => true,
            Some(Action::Hop(dest)) if *dest == from => {
                trace!("{}: swap with {} refused", train.id(), occupant);
                false
            }
            Some(Action::Hop(_)) => true,
            None => {
                trace!("{}: {} is held by {}", train.id(), to, occupant);
                false
            }
        },
    }
}
