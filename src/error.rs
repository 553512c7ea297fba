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

use std::fmt::{self, Display, Formatter};

/// An error produced when a FEN string or a UCI move cannot be resolved
/// against the core's rules.
///
/// Both variants are ordinary, recoverable conditions a caller is expected to
/// match on; they are distinct from the programmer-error assertions sprinkled
/// through `board`/`movegen`, which `panic!` instead since they indicate a
/// caller violated an invariant rather than supplied bad external input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A FEN string did not have six fields, had a malformed placement
    /// field, or named a side/castling/en-passant token that isn't one of
    /// the legal tokens.
    InvalidPosition,
    /// A UCI move string didn't resolve to any pseudolegal move in the
    /// current position (wrong `from`/`to`/promotion piece).
    InvalidMove,
    /// A token was outside an expected range while parsing a single field
    /// (square, piece letter, etc).
    ErroneousToken,
    /// Expected a token but found nothing.
    ExpectedToken,
}

impl Display for ParseError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        fmt.write_str(match self {
            Self::InvalidPosition => "invalid position",
            Self::InvalidMove => "move does not match any pseudolegal move in this position",
            Self::ErroneousToken => "token outside the expected range",
            Self::ExpectedToken => "expected a token but found nothing",
        })
    }
}

impl std::error::Error for ParseError {}

/// An error produced when the searcher is configured with a value outside
/// the range the engine can act on.
///
/// This is the one recoverable error surfaced by the search/TT machinery;
/// everything else in that path is a programmer-error assertion and panics
/// (§7) rather than returning a `Result`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchError {
    /// A requested transposition table size, in MiB, fell outside
    /// `1..=16384` (the range the UCI `Hash` option advertises, §6).
    InvalidHashSize(usize),
}

impl Display for SearchError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHashSize(mib) => write!(fmt, "hash size {mib} MiB is outside the supported 1..=16384 range"),
        }
    }
}

impl std::error::Error for SearchError {}
