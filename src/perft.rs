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

//! `perft`: counts leaf nodes at a fixed depth by exhaustive move
//! generation, the standard way to cross-check a move generator's
//! correctness against published results.
//!
//! The core never prints; a front-end wanting `go perft`'s divide-style
//! output calls [`divide`] and formats it itself.

use std::time::Instant;

use crate::{board::Board, movegen::generate_moves, moves::MoveList};

/// Counts the leaf nodes `depth` plies from `board`, filtering out
/// pseudolegal moves that leave the mover's own king in check.
#[must_use]
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mover = board.side_to_move();
    let mut moves = MoveList::new();
    generate_moves(board, &mut moves);

    let mut total = 0;
    for &mv in moves.iter() {
        let mut copy = *board;
        copy.make_move(mv);
        if !copy.is_legal(mover) {
            continue;
        }
        total += perft(&copy, depth - 1);
    }
    total
}

/// A per-move breakdown of [`perft`] at `depth`: each legal move at the root
/// paired with the leaf count below it (the `go perft` UCI extension's
/// usual output).
#[must_use]
pub fn divide(board: &Board, depth: u8) -> Vec<(crate::moves::Move, u64)> {
    let mover = board.side_to_move();
    let mut moves = MoveList::new();
    generate_moves(board, &mut moves);

    let mut result = Vec::new();
    for &mv in moves.iter() {
        let mut copy = *board;
        copy.make_move(mv);
        if !copy.is_legal(mover) {
            continue;
        }
        let count = if depth == 0 { 1 } else { perft(&copy, depth - 1) };
        result.push((mv, count));
    }
    result
}

/// Runs [`perft`], returning the leaf count alongside the nodes-per-second
/// it was computed at.
#[must_use]
pub fn timed_perft(board: &Board, depth: u8) -> (u64, u64) {
    let start = Instant::now();
    let result = perft(board, depth);
    let elapsed_us = start.elapsed().as_micros().max(1) as u64;
    let nps = 1_000_000 * result / elapsed_us;
    (result, nps)
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::board::Board;

    fn startpos() -> Board {
        Board::default()
    }

    #[test]
    fn startpos_depth_1() {
        assert_eq!(perft(&startpos(), 1), 20);
    }

    #[test]
    fn startpos_depth_2() {
        assert_eq!(perft(&startpos(), 2), 400);
    }

    #[test]
    fn startpos_depth_3() {
        assert_eq!(perft(&startpos(), 3), 8_902);
    }

    #[test]
    fn startpos_depth_4() {
        assert_eq!(perft(&startpos(), 4), 197_281);
    }

    #[test]
    #[ignore = "slow: run with --ignored for the deeper perft suite"]
    fn startpos_depth_5() {
        assert_eq!(perft(&startpos(), 5), 4_865_609);
    }

    #[test]
    #[ignore = "slow: run with --ignored for the deeper perft suite"]
    fn startpos_depth_6() {
        assert_eq!(perft(&startpos(), 6), 119_060_324);
    }

    #[test]
    fn kiwipete_depth_3() {
        let board: Board = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -".parse().expect("valid FEN");
        assert_eq!(perft(&board, 3), 97_862);
    }

    #[test]
    #[ignore = "slow: run with --ignored for the deeper perft suite"]
    fn kiwipete_depth_4() {
        let board: Board = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -".parse().expect("valid FEN");
        assert_eq!(perft(&board, 4), 4_085_603);
    }

    #[test]
    fn endgame_position_depth_4() {
        let board: Board = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -".parse().expect("valid FEN");
        assert_eq!(perft(&board, 4), 43_238);
    }

    #[test]
    #[ignore = "slow: run with --ignored for the deeper perft suite"]
    fn endgame_position_depth_6() {
        let board: Board = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -".parse().expect("valid FEN");
        assert_eq!(perft(&board, 6), 11_030_083);
    }

    #[test]
    fn promotion_heavy_position_depth_3() {
        let board: Board = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -"
            .parse()
            .expect("valid FEN");
        assert_eq!(perft(&board, 3), 9_467);
    }

    #[test]
    #[ignore = "slow: run with --ignored for the deeper perft suite"]
    fn promotion_heavy_position_depth_4() {
        let board: Board = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -"
            .parse()
            .expect("valid FEN");
        assert_eq!(perft(&board, 4), 422_333);
    }
}
