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

//! Planner laws and cross-tick invariants, driven through the public controller interface.

use crate::yard::{Interlocking, SectionId};
use crate::Error;

/// Check that the occupancy map and the train positions are a bijection, and that both agree
/// with the per-train queries.
fn assert_consistent(yard: &Interlocking) {
    let mut present = 0;
    for id in yard.get_trains() {
        let position = yard.get_position(id).unwrap().unwrap();
        assert_eq!(yard.get_occupant(position).unwrap(), Some(id));
        assert!(yard.get_route(id).unwrap().contains(&position));
        present += 1;
    }
    assert_eq!(yard.occupancy().num_occupied(), present);
    assert_eq!(yard.num_present(), present);
}

#[test]
fn test_empty_nomination_is_a_noop() {
    let mut yard = Interlocking::new();
    yard.admit("T1", SectionId(3), SectionId(11)).unwrap();
    assert_eq!(yard.advance(Vec::<&str>::new()), Ok(0));
    assert_eq!(yard.get_position("T1"), Ok(Some(SectionId(3))));
    assert_consistent(&yard);
}

#[test]
fn test_unknown_train_fails_atomically() {
    let mut yard = Interlocking::new();
    yard.admit("T1", SectionId(3), SectionId(11)).unwrap();
    // T1 could move, but the unknown identifier aborts the whole tick
    assert_eq!(
        yard.advance(vec!["T1", "GHOST"]),
        Err(Error::UnknownTrain(String::from("GHOST")))
    );
    assert_eq!(yard.get_position("T1"), Ok(Some(SectionId(3))));
    assert_consistent(&yard);
}

#[test]
fn test_duplicate_nomination_counts_once() {
    let mut yard = Interlocking::new();
    yard.admit("T1", SectionId(3), SectionId(11)).unwrap();
    assert_eq!(yard.advance(vec!["T1", "T1", "T1"]), Ok(1));
    assert_eq!(yard.get_position("T1"), Ok(Some(SectionId(7))));
    assert_consistent(&yard);
}

#[test]
fn test_exited_trains_are_silently_ignored() {
    let mut yard = Interlocking::new();
    yard.admit("P1", SectionId(5), SectionId(5)).unwrap();
    yard.advance(vec!["P1"]).unwrap(); // halt
    yard.advance(vec!["P1"]).unwrap(); // exit
    assert_eq!(yard.advance(vec!["P1"]), Ok(0));
    assert_consistent(&yard);
}

#[test]
fn test_entry_equals_destination_advances_exactly_once() {
    let mut yard = Interlocking::new();
    yard.admit("P1", SectionId(6), SectionId(6)).unwrap();
    assert_eq!(yard.get_position("P1"), Ok(Some(SectionId(6))));
    let advanced = yard.advance(vec!["P1"]).unwrap() + yard.advance(vec!["P1"]).unwrap();
    assert_eq!(advanced, 1);
    assert_eq!(yard.get_position("P1"), Ok(None));
    assert_eq!(yard.get_occupant(SectionId(6)), Ok(None));
    assert_consistent(&yard);
}

#[test]
fn test_sustained_deadlock_is_stable() {
    let mut yard = Interlocking::new();
    yard.admit("T1", SectionId(3), SectionId(7)).unwrap();
    yard.admit("T2", SectionId(7), SectionId(3)).unwrap();
    for _ in 0..5 {
        assert_eq!(yard.advance(vec!["T1", "T2"]), Ok(0));
        assert_eq!(yard.get_position("T1"), Ok(Some(SectionId(3))));
        assert_eq!(yard.get_position("T2"), Ok(Some(SectionId(7))));
        assert_consistent(&yard);
    }
}

#[test]
fn test_one_hop_per_tick() {
    let mut yard = Interlocking::new();
    yard.admit("P1", SectionId(1), SectionId(9)).unwrap();
    // even with the whole corridor free, the train advances one section per tick
    for expected in &[5u8, 6, 10, 9] {
        assert_eq!(yard.advance(vec!["P1"]), Ok(1));
        assert_eq!(yard.get_position("P1"), Ok(Some(SectionId(*expected))));
        assert_consistent(&yard);
    }
}

#[test]
fn test_unnominated_trains_never_move() {
    let mut yard = Interlocking::new();
    yard.admit("P1", SectionId(1), SectionId(9)).unwrap();
    yard.admit("P2", SectionId(2), SectionId(8)).unwrap();
    assert_eq!(yard.advance(vec!["P1"]), Ok(1));
    assert_eq!(yard.get_position("P2"), Ok(Some(SectionId(2))));
    assert_consistent(&yard);
}

#[test]
fn test_marked_train_waits_until_nominated_again() {
    let mut yard = Interlocking::new();
    yard.admit("P1", SectionId(1), SectionId(5)).unwrap();
    yard.advance(vec!["P1"]).unwrap(); // 1 -> 5
    assert_eq!(yard.advance(vec!["P1"]), Ok(0)); // halt on the destination
    // ticks without the nomination leave the marked train in place
    assert_eq!(yard.advance(Vec::<&str>::new()), Ok(0));
    assert_eq!(yard.get_position("P1"), Ok(Some(SectionId(5))));
    assert_eq!(yard.advance(vec!["P1"]), Ok(1)); // now it leaves
    assert_eq!(yard.get_position("P1"), Ok(None));
}

#[test]
fn test_freight_moves_on_its_corridor_despite_passengers() {
    let mut yard = Interlocking::new();
    yard.admit("P1", SectionId(5), SectionId(9)).unwrap();
    yard.admit("F1", SectionId(3), SectionId(11)).unwrap();
    // 3 -> 7 does not touch the crossing, so the passenger on 5 is irrelevant
    assert_eq!(yard.advance(vec!["F1"]), Ok(1));
    assert_eq!(yard.get_position("F1"), Ok(Some(SectionId(7))));
    assert_consistent(&yard);
}

#[test]
fn test_crossing_interlock_both_directions() {
    let mut yard = Interlocking::new();
    yard.admit("P1", SectionId(6), SectionId(9)).unwrap();
    yard.admit("F1", SectionId(4), SectionId(3)).unwrap();
    // 4 -> 3 crosses the passenger mainline just like 3 -> 4
    assert_eq!(yard.advance(vec!["F1"]), Ok(0));
    assert_eq!(yard.get_position("F1"), Ok(Some(SectionId(4))));
    // once the passenger train clears section 6, the hop is granted
    yard.advance(vec!["P1"]).unwrap(); // 6 -> 10
    assert_eq!(yard.advance(vec!["F1"]), Ok(1));
    assert_eq!(yard.get_position("F1"), Ok(Some(SectionId(3))));
    assert_consistent(&yard);
}

#[test]
fn test_determinism_replay() {
    let run = || -> (Vec<usize>, Interlocking) {
        let mut yard = Interlocking::new();
        yard.admit("P1", SectionId(1), SectionId(9)).unwrap();
        yard.admit("P2", SectionId(2), SectionId(8)).unwrap();
        yard.admit("F1", SectionId(3), SectionId(4)).unwrap();
        yard.admit("F2", SectionId(11), SectionId(4)).unwrap();
        let mut counts = Vec::new();
        for _ in 0..6 {
            counts.push(yard.advance(vec!["P1", "P2", "F1", "F2"]).unwrap());
        }
        (counts, yard)
    };
    let (counts_a, yard_a) = run();
    let (counts_b, yard_b) = run();
    assert_eq!(counts_a, counts_b);
    assert_eq!(yard_a.occupancy(), yard_b.occupancy());
    assert_eq!(yard_a.get_trains(), yard_b.get_trains());
}
