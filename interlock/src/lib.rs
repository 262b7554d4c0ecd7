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

#![deny(missing_docs)]

//! # Interlock: A Deterministic Railway Interlocking Controller
//!
//! This is a library implementing an interlocking controller for a fixed track plan of eleven
//! numbered sections, arranged as two corridors (one for passenger traffic, one for freight
//! traffic) that cross each other physically. The controller admits trains to the network, routes
//! them along the shortest path to their destination, and advances them one section at a time,
//! while guaranteeing that no two trains ever share a section, that no two trains swap sections
//! within a single step, and that no freight train passes the crossing while a passenger train is
//! anywhere on the fouling sections.
//!
//! ## Problem Statement
//! Given
//! - the committed occupancy of all track sections, and
//! - a set of trains nominated for movement,
//!
//! compute the largest set of single-section advancements that the safety rules permit, with
//! passenger trains taking priority over freight trains, and commit all of them atomically. The
//! same state and the same nomination must always produce the same result.
//!
//! ## Structure
//!
//! This library is structured in the following way:
//!
//! - **[`Yard`](yard)**: The state of the controlled area. See the main structure
//!   [`Interlocking`](yard::Interlocking), which owns the static [`Topology`](yard::Topology),
//!   the [`Train`](yard::Train) registry, and the committed [`Occupancy`](yard::Occupancy).
//!
//! - **[`Planner`](planner)**: The per-tick movement planner. Given the committed state and the
//!   nominated trains, it produces a [`TickPlan`](planner::TickPlan), the set of confirmed hops
//!   and exits for this tick. The planner never mutates any state; the controller commits the
//!   plan afterwards.
//!
//! A tick in which no nominated train can move legally is not an error: the planner simply
//! confirms nothing, and the controller reports zero advancements. This is how deadlocks (for
//! example two trains facing each other on a single track) are preserved instead of being
//! "resolved" by an unsafe move.
//!
//! ## Usage
//!
//! ```
//! use interlock::{Interlocking, SectionId};
//!
//! fn main() -> Result<(), interlock::Error> {
//!     let mut yard = Interlocking::new();
//!
//!     // a passenger train from section 1 to section 9, and a freight train from 3 to 11
//!     yard.admit("ICE-1", SectionId(1), SectionId(9))?;
//!     yard.admit("CARGO-7", SectionId(3), SectionId(11))?;
//!
//!     // one tick: both trains can advance
//!     assert_eq!(yard.advance(vec!["ICE-1", "CARGO-7"])?, 2);
//!     assert_eq!(yard.get_position("ICE-1")?, Some(SectionId(5)));
//!     assert_eq!(yard.get_position("CARGO-7")?, Some(SectionId(7)));
//!
//!     // sections report their occupant
//!     assert_eq!(yard.get_occupant(SectionId(5))?, Some("ICE-1"));
//!     assert_eq!(yard.get_occupant(SectionId(1))?, None);
//!
//!     Ok(())
//! }
//! ```

// test modules
mod test;

mod error;
pub mod planner;
pub mod yard;

pub use error::{Error, ErrorKind};
pub use yard::{Interlocking, SectionId, TrainKind};
