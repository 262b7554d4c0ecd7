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

//! Module containing all type definitions

use petgraph::graph::UnGraph;
use std::fmt;

/// Identification of a track section, numbered 1 through 11 on the track plan.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct SectionId(pub u8);

impl SectionId {
    /// Returns the section number as printed on the track plan.
    pub fn number(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section {}", self.0)
    }
}

/// Train identification. Identifiers stay unique for the lifetime of the controller, including
/// trains that have already left the network.
pub type TrainId = String;

/// Classification of a train, derived from the corridor of its entry section.
///
/// The declaration order encodes right of way: `Passenger` orders before `Freight`, and the
/// planner confirms movements in that order.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum TrainKind {
    /// A train running on the passenger corridor.
    Passenger,
    /// A train running on the freight corridor.
    Freight,
}

impl fmt::Display for TrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passenger => write!(f, "passenger"),
            Self::Freight => write!(f, "freight"),
        }
    }
}

/// Track graph: sections as nodes (weighted with their section number), track segments as
/// undirected edges.
pub type TrackGraph = UnGraph<u8, ()>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_kind_priority() {
        // passenger trains must order before freight trains
        assert!(TrainKind::Passenger < TrainKind::Freight);
    }

    #[test]
    fn test_section_display() {
        assert_eq!(SectionId(7).to_string(), "section 7");
        assert_eq!(SectionId(7).number(), 7);
    }
}
