//! Enumeration of legal jumps.
//!
//! The order in which moves are produced is part of the contract: holes are
//! scanned row by row, left to right, and the jumps landing on one hole come
//! in [`Axis::ALL`] × [`Direction::ALL`] order. The ranker keeps this order
//! among equally good moves, so it decides which solution is found first.

use crate::{
    board::Board,
    coord::Coord,
    error::Result,
    moves::{Axis, Direction, Move},
};

/// The six jumps that could possibly land on `dst`, legal or not.
fn candidates(dst: Coord) -> impl Iterator<Item = Move> {
    Axis::ALL
        .into_iter()
        .flat_map(move |axis| Direction::ALL.into_iter().map(move |dir| Move::new(axis, dir, dst)))
}

fn legal_moves_to(board: &Board, dst: Coord) -> impl Iterator<Item = Move> + '_ {
    candidates(dst).filter(move |mv| mv.can_apply(board))
}

/// All legal jumps landing on the hole at (`row`, `col`). Empty if the hole
/// holds a peg.
pub fn valid_moves_from(board: &Board, row: usize, col: usize) -> Result<Vec<Move>> {
    if board.get(row, col)? {
        return Ok(vec![]);
    }
    let dst = Coord::new(row as isize, col as isize);
    Ok(legal_moves_to(board, dst).collect())
}

/// Every legal jump on the board, in canonical order.
pub fn all_legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for (coord, occupied) in board.cells() {
        if !occupied {
            moves.extend(legal_moves_to(board, coord));
        }
    }
    moves
}

/// Same as `all_legal_moves(board).len()`, without collecting the moves.
pub fn count_legal_moves(board: &Board) -> usize {
    board
        .cells()
        .filter(|&(_, occupied)| !occupied)
        .map(|(coord, _)| legal_moves_to(board, coord).count())
        .sum()
}
