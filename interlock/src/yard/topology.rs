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

//! # Track Plan
//!
//! The fixed topology of the controlled area: eleven sections on two corridors.
//!
//! ```text
//! 1 --.                 .-- 8
//!      5 --- 6 --- 10 --+          (passenger corridor)
//! 2 --'      x          '-- 9
//!            x
//! 4 --- 3 --- 7 --- 11             (freight corridor)
//! ```
//!
//! The corridors are disjoint as graphs, but the 3--4 segment physically crosses the passenger
//! mainline. While any of the fouling sections 1, 5 or 6 is occupied, the crossing is locked and
//! the 3↔4 hop is forbidden.

use super::types::{SectionId, TrackGraph, TrainKind};
use crate::Error;
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, VecDeque};

/// Number of track sections on the plan.
pub const NUM_SECTIONS: u8 = 11;

/// Track segments of the passenger corridor.
static PASSENGER_SEGMENTS: [(u8, u8); 6] = [(1, 5), (2, 5), (5, 6), (6, 10), (10, 8), (10, 9)];

/// Track segments of the freight corridor.
static FREIGHT_SEGMENTS: [(u8, u8); 3] = [(3, 4), (3, 7), (7, 11)];

/// The freight segment that crosses the passenger mainline.
static CROSSING_SEGMENT: (u8, u8) = (3, 4);

/// Passenger sections fouling the crossing.
static CROSSING_FOULING: [u8; 3] = [1, 5, 6];

/// Sections belonging to the freight corridor.
static FREIGHT_SECTIONS: [u8; 4] = [3, 4, 7, 11];

/// # Topology
///
/// The static track plan. The topology never changes at runtime; it is built once when the
/// [`Interlocking`](super::Interlocking) is created, and only answers questions (section
/// validity, corridor classification, crossing geometry, routes).
#[derive(Debug, Clone)]
pub struct Topology {
    graph: TrackGraph,
    nodes: HashMap<u8, NodeIndex>,
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}

impl Topology {
    /// Build the track plan.
    pub fn new() -> Self {
        let mut graph = TrackGraph::new_undirected();
        let mut nodes: HashMap<u8, NodeIndex> = HashMap::new();
        for section in 1..=NUM_SECTIONS {
            nodes.insert(section, graph.add_node(section));
        }
        for (a, b) in PASSENGER_SEGMENTS.iter().chain(FREIGHT_SEGMENTS.iter()) {
            graph.add_edge(nodes[a], nodes[b], ());
        }
        Self { graph, nodes }
    }

    /// Returns a reference to the underlying track graph.
    pub fn graph(&self) -> &TrackGraph {
        &self.graph
    }

    /// Returns true if the section exists on the track plan.
    pub fn contains(&self, section: SectionId) -> bool {
        (1..=NUM_SECTIONS).contains(&section.0)
    }

    /// Check that the section exists on the track plan.
    pub fn check_section(&self, section: SectionId) -> Result<(), Error> {
        if self.contains(section) {
            Ok(())
        } else {
            Err(Error::InvalidSection(section.0))
        }
    }

    /// Returns the corridor classification of a section. The section must exist on the plan.
    pub fn kind_of(&self, section: SectionId) -> TrainKind {
        if FREIGHT_SECTIONS.contains(&section.0) {
            TrainKind::Freight
        } else {
            TrainKind::Passenger
        }
    }

    /// Returns true if the hop traverses the crossing segment (in either direction).
    pub fn is_crossing_hop(&self, from: SectionId, to: SectionId) -> bool {
        let (a, b) = CROSSING_SEGMENT;
        (from.0, to.0) == (a, b) || (from.0, to.0) == (b, a)
    }

    /// The passenger sections that foul the crossing. A train on any of them locks the crossing.
    pub fn crossing_fouling(&self) -> impl Iterator<Item = SectionId> {
        CROSSING_FOULING.iter().map(|&s| SectionId(s))
    }

    /// The sections adjacent to the given section, in graph order.
    pub fn neighbors(&self, section: SectionId) -> Vec<SectionId> {
        match self.nodes.get(&section.0) {
            Some(node) => self.graph.neighbors(*node).map(|n| SectionId(self.graph[n])).collect(),
            None => Vec::new(),
        }
    }

    /// Find the route a train will take from `from` to `to`, by breadth-first search over the
    /// track graph. The returned path starts with `from` and ends with `to`. Both corridors are
    /// trees, so the shortest route is unique.
    ///
    /// Returns [`Error::NoRoute`] if the two sections are not connected, which is also how
    /// cross-corridor requests are rejected: the corridors share no segment, only the physical
    /// crossing.
    pub fn find_path(&self, from: SectionId, to: SectionId) -> Result<Vec<SectionId>, Error> {
        self.check_section(from)?;
        self.check_section(to)?;
        if from == to {
            return Ok(vec![from]);
        }

        let start = self.nodes[&from.0];
        let goal = self.nodes[&to.0];
        let mut predecessor: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut queue: VecDeque<NodeIndex> = VecDeque::new();
        queue.push_back(start);
        'search: while let Some(node) = queue.pop_front() {
            for next in self.graph.neighbors(node) {
                if next == start || predecessor.contains_key(&next) {
                    continue;
                }
                predecessor.insert(next, node);
                if next == goal {
                    break 'search;
                }
                queue.push_back(next);
            }
        }

        if !predecessor.contains_key(&goal) {
            return Err(Error::NoRoute(from, to));
        }

        // walk the predecessor chain back to the start
        let mut path: Vec<SectionId> = vec![to];
        let mut node = goal;
        while node != start {
            node = predecessor[&node];
            path.push(SectionId(self.graph[node]));
        }
        path.reverse();
        Ok(path)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn p(sections: &[u8]) -> Vec<SectionId> {
        sections.iter().map(|&s| SectionId(s)).collect()
    }

    #[test]
    fn test_track_plan() {
        let topo = Topology::new();
        assert_eq!(topo.graph().node_count(), 11);
        assert_eq!(topo.graph().edge_count(), 9);
        assert!(topo.contains(SectionId(1)));
        assert!(topo.contains(SectionId(11)));
        assert!(!topo.contains(SectionId(0)));
        assert!(!topo.contains(SectionId(12)));
    }

    #[test]
    fn test_classification() {
        let topo = Topology::new();
        for s in &[1u8, 2, 5, 6, 8, 9, 10] {
            assert_eq!(topo.kind_of(SectionId(*s)), TrainKind::Passenger);
        }
        for s in &[3u8, 4, 7, 11] {
            assert_eq!(topo.kind_of(SectionId(*s)), TrainKind::Freight);
        }
    }

    #[test]
    fn test_crossing_geometry() {
        let topo = Topology::new();
        assert!(topo.is_crossing_hop(SectionId(3), SectionId(4)));
        assert!(topo.is_crossing_hop(SectionId(4), SectionId(3)));
        assert!(!topo.is_crossing_hop(SectionId(3), SectionId(7)));
        assert!(!topo.is_crossing_hop(SectionId(5), SectionId(6)));
        assert_eq!(topo.crossing_fouling().collect::<Vec<_>>(), p(&[1, 5, 6]));
    }

    #[test]
    fn test_find_path() {
        let topo = Topology::new();
        assert_eq!(topo.find_path(SectionId(3), SectionId(11)), Ok(p(&[3, 7, 11])));
        assert_eq!(topo.find_path(SectionId(1), SectionId(9)), Ok(p(&[1, 5, 6, 10, 9])));
        assert_eq!(topo.find_path(SectionId(2), SectionId(8)), Ok(p(&[2, 5, 6, 10, 8])));
        assert_eq!(topo.find_path(SectionId(4), SectionId(11)), Ok(p(&[4, 3, 7, 11])));
        assert_eq!(topo.find_path(SectionId(9), SectionId(1)), Ok(p(&[9, 10, 6, 5, 1])));
    }

    #[test]
    fn test_find_path_trivial() {
        let topo = Topology::new();
        assert_eq!(topo.find_path(SectionId(5), SectionId(5)), Ok(p(&[5])));
    }

    #[test]
    fn test_find_path_cross_corridor() {
        let topo = Topology::new();
        assert_eq!(
            topo.find_path(SectionId(1), SectionId(3)),
            Err(Error::NoRoute(SectionId(1), SectionId(3)))
        );
        assert_eq!(
            topo.find_path(SectionId(11), SectionId(10)),
            Err(Error::NoRoute(SectionId(11), SectionId(10)))
        );
    }

    #[test]
    fn test_find_path_invalid_section() {
        let topo = Topology::new();
        assert_eq!(topo.find_path(SectionId(0), SectionId(5)), Err(Error::InvalidSection(0)));
        assert_eq!(topo.find_path(SectionId(5), SectionId(12)), Err(Error::InvalidSection(12)));
    }
}
