/*
 * Ripple, a UCI-compatible chess engine
 * Copyright (C) 2024 Jasper Shovelton
 *
 * Ripple is free software: you can redistribute it and/or modify it under the
 * terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or (at your option) any later
 * version.
 *
 * Ripple is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
 * details.
 *
 * You should have received a copy of the GNU General Public License along with
 * Ripple. If not, see <https://www.gnu.org/licenses/>.
 */

//! Component G: the [`TranspositionTable`], a fixed-size, hash-indexed cache
//! of previously searched positions.
//!
//! Unlike some engines in this corpus, the table here is not shared across
//! threads — the core's search is single-threaded cooperative (§5) — so
//! entries are plain data behind a `Vec`, not atomics with an XOR-trick
//! torn-write guard.

use std::mem::size_of;

use crate::{
    board::Key,
    error::SearchError,
    evaluation::{Eval, MATE_THRESHOLD},
    moves::Move,
};

/// The smallest transposition table size the UCI `Hash` option accepts, in
/// MiB (§6).
const MIN_HASH_MIB: usize = 1;
/// The largest transposition table size the UCI `Hash` option accepts, in
/// MiB (§6).
const MAX_HASH_MIB: usize = 16384;
/// The table size a [`TranspositionTable`] is built with absent an explicit
/// `Hash` option.
const DEFAULT_HASH_MIB: usize = 64;

/// How a stored score relates to the search window it was obtained under.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Bound {
    /// `best_value >= beta`: a lower bound.
    Lower,
    /// `alpha < best_value < beta`: the exact value.
    Exact,
    /// `best_value <= alpha`: an upper bound.
    Upper,
}

/// One slot of the table.
#[derive(Clone, Copy)]
struct TranspositionEntry {
    /// The full Zobrist key, used to detect a hash collision on lookup.
    key: Key,
    /// The best move found the last time this position was searched.
    best_move: Move,
    /// The score, ply-adjusted for storage (see [`normalise`]).
    value: i16,
    /// The depth the score was obtained at.
    depth: i16,
    /// How `value` relates to the window it was searched under.
    bound: Bound,
}

/// The result of a successful [`TranspositionTable::probe`], with the
/// mate-distance ply adjustment already undone.
#[derive(Clone, Copy)]
pub struct ProbeHit {
    /// The best move found the last time this position was searched.
    pub best_move: Move,
    /// The score, adjusted back to the current ply.
    pub value: Eval,
    /// The depth the score was obtained at.
    pub depth: i16,
    /// How `value` relates to the window it was searched under.
    pub bound: Bound,
}

/// A hash-indexed, fixed-slot cache of previously searched positions.
pub struct TranspositionTable {
    entries: Vec<Option<TranspositionEntry>>,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::with_capacity_mib(DEFAULT_HASH_MIB).unwrap_or_else(|_| Self { entries: Vec::new() })
    }
}

impl TranspositionTable {
    /// Builds a table sized `size_mib` MiB, rejecting sizes outside the
    /// `1..=16384` range the UCI `Hash` option advertises (§6).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidHashSize`] if `size_mib` is out of
    /// range.
    pub fn with_capacity_mib(size_mib: usize) -> Result<Self, SearchError> {
        let mut table = Self { entries: Vec::new() };
        table.resize(size_mib)?;
        Ok(table)
    }

    /// Reallocates the table to `size_mib` MiB and clears it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidHashSize`] if `size_mib` is out of
    /// range.
    pub fn resize(&mut self, size_mib: usize) -> Result<(), SearchError> {
        if !(MIN_HASH_MIB..=MAX_HASH_MIB).contains(&size_mib) {
            return Err(SearchError::InvalidHashSize(size_mib));
        }
        let slots = size_mib * 1024 * 1024 / size_of::<TranspositionEntry>();
        self.entries = vec![None; slots.max(1)];
        #[cfg(feature = "logging")]
        log::debug!("resized transposition table to {size_mib} MiB ({slots} entries)");
        Ok(())
    }

    /// Clears every entry without changing the table's size.
    pub fn clear(&mut self) {
        self.entries.fill(None);
        #[cfg(feature = "logging")]
        log::debug!("cleared transposition table ({} entries)", self.entries.len());
    }

    /// The number of slots the table currently holds.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Looks `key` up, applying the mate-distance ply adjustment (§4.H) to
    /// bring a stored mate score back in line with the current search ply.
    #[must_use]
    pub fn probe(&self, key: Key, ply: usize) -> Option<ProbeHit> {
        let entry = self.entries[self.index(key)]?;
        if entry.key != key {
            return None;
        }
        Some(ProbeHit {
            best_move: entry.best_move,
            value: denormalise(Eval::from(entry.value), ply),
            depth: entry.depth,
            bound: entry.bound,
        })
    }

    /// Stores an entry, always replacing whatever was in that slot (§4.H).
    pub fn store(&mut self, key: Key, best_move: Move, value: Eval, depth: i16, bound: Bound, ply: usize) {
        let index = self.index(key);
        self.entries[index] = Some(TranspositionEntry {
            key,
            best_move,
            value: normalise(value, ply) as i16,
            depth,
            bound,
        });
    }

    /// Estimates how full the table is, in parts per mille, by sampling its
    /// first thousand slots.
    #[must_use]
    pub fn estimate_hashfull(&self) -> usize {
        self.entries.iter().take(1000).filter(|slot| slot.is_some()).count()
    }

    /// Maps a Zobrist key onto a slot.
    fn index(&self, key: Key) -> usize {
        (key % self.entries.len() as u64) as usize
    }
}

/// Offsets a mate score found at search ply `ply` so it is meaningful
/// relative to the root rather than to wherever it's stored (§4.H).
fn normalise(value: Eval, ply: usize) -> Eval {
    if value <= -MATE_THRESHOLD {
        value - ply as Eval
    } else if value >= MATE_THRESHOLD {
        value + ply as Eval
    } else {
        value
    }
}

/// The inverse of [`normalise`]: brings a stored mate score back in line
/// with the ply it's being looked up at.
fn denormalise(value: Eval, ply: usize) -> Eval {
    if value <= -MATE_THRESHOLD {
        value + ply as Eval
    } else if value >= MATE_THRESHOLD {
        value - ply as Eval
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{Bound, TranspositionTable};
    use crate::{defs::Square, evaluation::MATE_THRESHOLD, moves::Move};

    #[test]
    fn a_stored_entry_is_found_again_by_the_same_key() {
        let mut tt = TranspositionTable::with_capacity_mib(1).expect("1 MiB is in range");
        let mv = Move::new(Square::E2, Square::E4, 0);
        tt.store(0x1234_5678, mv, 55, 4, Bound::Exact, 0);
        let hit = tt.probe(0x1234_5678, 0).expect("entry was just stored");
        assert_eq!(hit.value, 55);
        assert_eq!(hit.depth, 4);
    }

    #[test]
    fn a_different_key_mapping_to_the_same_slot_is_not_a_hit() {
        let mut tt = TranspositionTable::with_capacity_mib(1).expect("1 MiB is in range");
        let capacity = tt.capacity() as u64;
        let mv = Move::new(Square::E2, Square::E4, 0);
        tt.store(5, mv, 10, 1, Bound::Exact, 0);
        assert!(tt.probe(5 + capacity, 0).is_none());
    }

    #[test]
    fn mate_scores_round_trip_through_store_and_lookup_at_different_plies() {
        let mut tt = TranspositionTable::with_capacity_mib(1).expect("1 MiB is in range");
        let mv = Move::new(Square::E2, Square::E4, 0);
        let mate_in_two = MATE_THRESHOLD + 4;
        tt.store(99, mv, mate_in_two, 6, Bound::Exact, 3);
        let hit = tt.probe(99, 5).expect("entry was just stored");
        assert_eq!(hit.value, mate_in_two - 3 + 5);
    }

    #[test]
    fn out_of_range_hash_sizes_are_rejected() {
        assert!(TranspositionTable::with_capacity_mib(0).is_err());
        assert!(TranspositionTable::with_capacity_mib(20_000).is_err());
    }

    #[test]
    fn clearing_keeps_the_capacity_but_drops_every_entry() {
        let mut tt = TranspositionTable::with_capacity_mib(1).expect("1 MiB is in range");
        let capacity = tt.capacity();
        let mv = Move::new(Square::E2, Square::E4, 0);
        tt.store(7, mv, 1, 1, Bound::Exact, 0);
        tt.clear();
        assert_eq!(tt.capacity(), capacity);
        assert!(tt.probe(7, 0).is_none());
    }
}
