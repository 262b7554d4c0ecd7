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

//! Module containing all error types

use crate::yard::SectionId;
use std::fmt;
use thiserror::Error;

/// Main error type. Every operation fails before mutating any state, so an `Err` always leaves
/// the controller exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A train with the same identifier was already admitted (possibly exited since).
    #[error("Train {0} is already registered")]
    DuplicateTrain(String),
    /// The section number does not exist on the track plan.
    #[error("Section {0} does not exist on the track plan")]
    InvalidSection(u8),
    /// The train identifier was never admitted.
    #[error("Train {0} is not registered")]
    UnknownTrain(String),
    /// The two sections are not connected by any sequence of track segments.
    #[error("No route from {0} to {1}")]
    NoRoute(SectionId, SectionId),
    /// The entry section already holds a train.
    #[error("{0} is already occupied")]
    EntryOccupied(SectionId),
}

/// Coarse classification of an [`Error`], for callers that only need to distinguish bad arguments
/// from operations which are refused in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied a value that is meaningless against the fixed topology or the train
    /// registry.
    Argument,
    /// The arguments are meaningful, but the current occupancy forbids the operation.
    State,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument => write!(f, "argument error"),
            Self::State => write!(f, "state error"),
        }
    }
}

impl Error {
    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateTrain(_)
            | Self::InvalidSection(_)
            | Self::UnknownTrain(_)
            | Self::NoRoute(_, _) => ErrorKind::Argument,
            Self::EntryOccupied(_) => ErrorKind::State,
        }
    }
}
