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

//! Utility functions for displaying the network state in a human readable form, for log
//! messages and test diagnostics.

use super::controller::Interlocking;
use crate::Error;
use itertools::Itertools;

/// Get a vector of strings, one per occupied section in section order, each formatted like
/// `section 5: ICE-1`.
pub fn occupancy_table(yard: &Interlocking) -> Vec<String> {
    yard.occupancy().iter().map(|(section, train)| format!("{}: {}", section, train)).collect()
}

/// Returns the formatted one-line summary of a train: identifier, classification, position and
/// admitted route.
pub fn train_summary(yard: &Interlocking, id: &str) -> Result<String, Error> {
    let train = yard.get_train(id)?;
    let route = train.path().iter().map(|s| s.number()).join(" -> ");
    Ok(match train.section() {
        Some(section) => {
            format!("{} ({}) at {}, route {}", train.id(), train.kind(), section, route)
        }
        None => format!("{} ({}) has left the network", train.id(), train.kind()),
    })
}
