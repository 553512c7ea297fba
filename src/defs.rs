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

//! Geometry primitives: [`Side`], [`PieceType`]/[`Piece`], [`Square`],
//! [`Rank`]/[`File`], [`Direction`].
//!
//! Each is a newtype over a primitive with associated-`const` enumerators
//! rather than a Rust `enum`, so they convert to array indices for free and
//! compose with `const fn` table-building code elsewhere in the crate.

use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Sub},
    str::FromStr,
};

use crate::{bitboard::Bitboard, error::ParseError};

/// A cardinal direction, as a shift amount in little-endian rank-file
/// mapping.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Direction(pub i8);

/// A file: file A = 0 to file H = 7.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct File(pub u8);

/// A rank: rank 1 = 0 to rank 8 = 7.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Rank(pub u8);

/// A side to move, or [`Side::NONE`] for a mailbox sentinel.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Side(pub u8);

/// A square, little-endian rank-file mapping: a1 = 0, b1 = 1, ..., h8 = 63.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd)]
pub struct Square(pub u8);

/// A type of piece, independent of side: {Pawn, Knight, Bishop, Rook, Queen,
/// King}, plus [`PieceType::NONE`].
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct PieceType(pub u8);

/// A piece together with its side: used by the mailbox, where a single
/// sentinel value (`Piece::NONE`) can mean "empty".
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Piece(pub u8);

/// Characters for each piece, indexed by [`Piece::to_index`], with an extra
/// `'.'` at the end for [`Piece::NONE`].
static PIECE_CHARS: [char; Piece::TOTAL + 1] = [
    'P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k', '.',
];

#[allow(clippy::missing_docs_in_private_items)]
impl Direction {
    pub const N: Self = Self(8);
    pub const NE: Self = Self(9);
    pub const E: Self = Self(1);
    pub const SE: Self = Self(-7);
    pub const S: Self = Self(-8);
    pub const SW: Self = Self(-9);
    pub const W: Self = Self(-1);
    pub const NW: Self = Self(7);
}

#[allow(clippy::missing_docs_in_private_items)]
impl File {
    pub const FILE1: Self = Self(0);
    pub const FILE2: Self = Self(1);
    pub const FILE3: Self = Self(2);
    pub const FILE4: Self = Self(3);
    pub const FILE5: Self = Self(4);
    pub const FILE6: Self = Self(5);
    pub const FILE7: Self = Self(6);
    pub const FILE8: Self = Self(7);
    pub const TOTAL: usize = 8;
}

#[allow(clippy::missing_docs_in_private_items)]
impl Rank {
    pub const RANK1: Self = Self(0);
    pub const RANK2: Self = Self(1);
    pub const RANK3: Self = Self(2);
    pub const RANK4: Self = Self(3);
    pub const RANK5: Self = Self(4);
    pub const RANK6: Self = Self(5);
    pub const RANK7: Self = Self(6);
    pub const RANK8: Self = Self(7);
    pub const TOTAL: usize = 8;
}

#[allow(clippy::missing_docs_in_private_items)]
impl Side {
    pub const WHITE: Self = Self(0);
    pub const BLACK: Self = Self(1);
    pub const TOTAL: usize = 2;
    pub const NONE: Self = Self(2);
}

#[allow(clippy::missing_docs_in_private_items)]
impl PieceType {
    pub const PAWN: Self = Self(0);
    pub const KNIGHT: Self = Self(1);
    pub const BISHOP: Self = Self(2);
    pub const ROOK: Self = Self(3);
    pub const QUEEN: Self = Self(4);
    pub const KING: Self = Self(5);
    pub const TOTAL: usize = 6;
    pub const NONE: Self = Self(6);
}

#[allow(clippy::missing_docs_in_private_items)]
impl Piece {
    pub const WPAWN: Self = Self::new(PieceType::PAWN, Side::WHITE);
    pub const WKNIGHT: Self = Self::new(PieceType::KNIGHT, Side::WHITE);
    pub const WBISHOP: Self = Self::new(PieceType::BISHOP, Side::WHITE);
    pub const WROOK: Self = Self::new(PieceType::ROOK, Side::WHITE);
    pub const WQUEEN: Self = Self::new(PieceType::QUEEN, Side::WHITE);
    pub const WKING: Self = Self::new(PieceType::KING, Side::WHITE);
    pub const BPAWN: Self = Self::new(PieceType::PAWN, Side::BLACK);
    pub const BKNIGHT: Self = Self::new(PieceType::KNIGHT, Side::BLACK);
    pub const BBISHOP: Self = Self::new(PieceType::BISHOP, Side::BLACK);
    pub const BROOK: Self = Self::new(PieceType::ROOK, Side::BLACK);
    pub const BQUEEN: Self = Self::new(PieceType::QUEEN, Side::BLACK);
    pub const BKING: Self = Self::new(PieceType::KING, Side::BLACK);
    pub const TOTAL: usize = 12;
    pub const NONE: Self = Self(12);
}

#[allow(clippy::missing_docs_in_private_items)]
impl Square {
    pub const A1: Self = Self(0);
    pub const B1: Self = Self(1);
    pub const C1: Self = Self(2);
    pub const D1: Self = Self(3);
    pub const E1: Self = Self(4);
    pub const F1: Self = Self(5);
    pub const G1: Self = Self(6);
    pub const H1: Self = Self(7);
    pub const A8: Self = Self(56);
    pub const B8: Self = Self(57);
    pub const C8: Self = Self(58);
    pub const D8: Self = Self(59);
    pub const E8: Self = Self(60);
    pub const F8: Self = Self(61);
    pub const G8: Self = Self(62);
    pub const H8: Self = Self(63);
    pub const TOTAL: usize = 64;
    pub const NONE: Self = Self(64);
}

impl From<File> for char {
    fn from(file: File) -> Self {
        (b'a' + file.0) as Self
    }
}

impl From<Rank> for char {
    fn from(rank: Rank) -> Self {
        (b'1' + rank.0) as Self
    }
}

impl From<Side> for char {
    /// 'w' if White, 'b' if Black; undefined for [`Side::NONE`].
    fn from(side: Side) -> Self {
        if side == Side::WHITE {
            'w'
        } else {
            'b'
        }
    }
}

impl From<Piece> for char {
    fn from(piece: Piece) -> Self {
        PIECE_CHARS[piece.to_index()]
    }
}

impl From<PieceType> for char {
    /// Lowercase letter for the piece type ('p' for pawn to 'k' for king).
    fn from(piece_type: PieceType) -> Self {
        Self::from(Piece::new(piece_type, Side::BLACK))
    }
}

impl From<Square> for File {
    fn from(square: Square) -> Self {
        Self(square.0 & 7)
    }
}

impl From<Square> for Rank {
    fn from(square: Square) -> Self {
        Self(square.0 >> 3)
    }
}

impl From<Piece> for PieceType {
    fn from(piece: Piece) -> Self {
        if piece == Piece::NONE {
            Self::NONE
        } else {
            Self(piece.0 % 6)
        }
    }
}

impl From<Piece> for Side {
    fn from(piece: Piece) -> Self {
        if piece.0 < 6 {
            Self::WHITE
        } else {
            Self::BLACK
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = ParseError;

    /// Converts a FEN piece letter into a [`Piece`].
    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Ok(match letter {
            'P' => Self::WPAWN,
            'N' => Self::WKNIGHT,
            'B' => Self::WBISHOP,
            'R' => Self::WROOK,
            'Q' => Self::WQUEEN,
            'K' => Self::WKING,
            'p' => Self::BPAWN,
            'n' => Self::BKNIGHT,
            'b' => Self::BBISHOP,
            'r' => Self::BROOK,
            'q' => Self::BQUEEN,
            'k' => Self::BKING,
            _ => return Err(ParseError::ErroneousToken),
        })
    }
}

impl TryFrom<char> for PieceType {
    type Error = ParseError;

    /// Converts a FEN piece letter (either case) into a [`PieceType`].
    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Ok(match letter.to_ascii_lowercase() {
            'p' => Self::PAWN,
            'n' => Self::KNIGHT,
            'b' => Self::BISHOP,
            'r' => Self::ROOK,
            'q' => Self::QUEEN,
            'k' => Self::KING,
            _ => return Err(ParseError::ErroneousToken),
        })
    }
}

impl Add<Direction> for Square {
    type Output = Self;

    fn add(self, rhs: Direction) -> Self::Output {
        Self(self.0.wrapping_add_signed(rhs.0))
    }
}

impl Sub<Direction> for Square {
    type Output = Self;

    fn sub(self, rhs: Direction) -> Self::Output {
        Self(self.0.wrapping_add_signed(-rhs.0))
    }
}

impl Display for Square {
    /// e.g. "e4", or "-" for [`Square::NONE`].
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        if *self == Self::NONE {
            fmt.write_str("-")
        } else {
            write!(
                fmt,
                "{}{}",
                char::from(File::from(*self)),
                char::from(Rank::from(*self))
            )
        }
    }
}

impl From<Bitboard> for Square {
    /// The square of the least significant set bit of `bb`.
    fn from(bb: Bitboard) -> Self {
        Self(bb.0.trailing_zeros() as u8)
    }
}

impl FromStr for Square {
    type Err = ParseError;

    /// Parses e.g. "e4" into a [`Square`], or "-" into [`Square::NONE`].
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if string == "-" {
            return Ok(Self::NONE);
        }

        let bytes = string.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseError::ErroneousToken);
        }

        let file = bytes[0];
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ParseError::ErroneousToken);
        }

        Ok(Self((file - b'a') + (rank - b'1') * 8))
    }
}

impl Piece {
    /// Combines a [`PieceType`] and a [`Side`] into a [`Piece`].
    pub const fn new(piece_type: PieceType, side: Side) -> Self {
        Self(piece_type.0 + side.0 * 6)
    }

    /// Converts the piece into an array index: 0..12.
    pub const fn to_index(self) -> usize {
        self.0 as usize
    }
}

impl PieceType {
    /// Converts the piece type into an array index: 0..6.
    pub const fn to_index(self) -> usize {
        self.0 as usize
    }
}

impl Side {
    /// The other side. Undefined for [`Side::NONE`].
    pub const fn flip(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Converts the side into an array index: 0..2.
    pub const fn to_index(self) -> usize {
        self.0 as usize
    }
}

impl Square {
    /// Combines a [`Rank`] and [`File`] into a [`Square`].
    pub const fn from_pos(rank: Rank, file: File) -> Self {
        Self(rank.0 * 8 + file.0)
    }

    /// Converts the square into an array index: 0..64.
    pub const fn to_index(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::{File, Piece, PieceType, Rank, Side, Square};
    use std::str::FromStr;

    #[test]
    fn square_round_trips_through_its_string_form() {
        assert_eq!(Square::from_str("e4").unwrap(), Square::from_pos(Rank::RANK4, File::FILE5));
        assert_eq!(Square::from_pos(Rank::RANK4, File::FILE5).to_string(), "e4");
        assert_eq!(Square::from_str("-").unwrap(), Square::NONE);
    }

    #[test]
    fn piece_recovers_type_and_side() {
        let piece = Piece::new(PieceType::KNIGHT, Side::BLACK);
        assert_eq!(PieceType::from(piece), PieceType::KNIGHT);
        assert_eq!(Side::from(piece), Side::BLACK);
    }
}
