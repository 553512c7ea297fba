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

//! Ripple: a bitboard move generator and PVS/negamax search core for a
//! UCI-compatible chess engine.
//!
//! This crate is the engine's core only: position representation, move
//! generation, and search. It has no UCI parser, no stdin/stdout loop, and no
//! bundled neural-network evaluator; an embedder supplies those. The
//! [`evaluation::MaterialEvaluator`] shipped here exists so the crate is
//! useful and testable standalone.

/// Precomputed attack tables: non-sliding knight/king/pawn attacks and
/// magic-bitboard lookups for bishop/rook.
pub mod attacks;
/// The 64-bit bitboard type and its shift/iteration operations.
pub mod bitboard;
/// [`board::Board`]: piece bitboards, mailbox, castling/en-passant state and
/// the incrementally-maintained Zobrist key.
pub mod board;
/// Geometry primitives: [`defs::Side`], [`defs::PieceType`], [`defs::Square`],
/// [`defs::Direction`].
pub mod defs;
/// Static evaluation: the [`evaluation::Evaluator`] trait and the default
/// [`evaluation::MaterialEvaluator`].
pub mod evaluation;
/// `ParseError` and `SearchError`: the core's two hand-rolled error types.
pub mod error;
/// Pseudolegal move enumeration.
pub mod movegen;
/// The packed 16-bit [`moves::Move`] and [`moves::MoveList`].
pub mod moves;
/// `perft`/`divide-perft` leaf counting, used by tests and an external
/// reporting front-end.
pub mod perft;
/// Iterative-deepening PVS/negamax search with quiescence and a
/// transposition table.
pub mod search;
/// The hash-indexed transposition table.
pub mod transposition_table;
/// Zobrist hashing: the random tables and the incremental update primitives.
pub mod zobrist;
