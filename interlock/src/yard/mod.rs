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

#![deny(missing_docs, missing_debug_implementations)]

//! # Yard
//!
//! The state of the controlled area: the static [`Topology`], the [`Train`] registry, and the
//! committed [`Occupancy`] of every section, all owned by the [`Interlocking`] controller.
//!
//! The controller is single threaded and externally driven: the host calls
//! [`admit`](Interlocking::admit) and [`advance`](Interlocking::advance) serially, and every
//! state transition is synchronous with the call that triggers it. There are no timers, no
//! queues, and no background work.
//!
//! ## Example usage
//!
//! The following example drives a freight train across its corridor and out of the network. Note
//! the two-step exit: the first nomination on the destination only halts the train, the second
//! one lets it leave.
//!
//! ```rust
//! use interlock::{Interlocking, SectionId};
//!
//! fn main() -> Result<(), interlock::Error> {
//!     let mut yard = Interlocking::new();
//!     yard.admit("F1", SectionId(3), SectionId(11))?;
//!
//!     assert_eq!(yard.advance(vec!["F1"])?, 1); // 3 -> 7
//!     assert_eq!(yard.advance(vec!["F1"])?, 1); // 7 -> 11
//!     assert_eq!(yard.advance(vec!["F1"])?, 0); // at destination: halt
//!     assert_eq!(yard.advance(vec!["F1"])?, 1); // leave the network
//!
//!     assert_eq!(yard.get_position("F1")?, None);
//!     assert_eq!(yard.get_occupant(SectionId(11))?, None);
//!     Ok(())
//! }
//! ```

pub mod controller;
pub mod occupancy;
pub mod printer;
pub mod topology;
pub mod train;
pub(crate) mod types;

pub use controller::Interlocking;
pub use occupancy::Occupancy;
pub use topology::{Topology, NUM_SECTIONS};
pub use train::Train;
pub use types::{SectionId, TrackGraph, TrainId, TrainKind};
