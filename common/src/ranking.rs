use std::cmp::Reverse;

use crate::{board::Board, error::Result, movegen::count_legal_moves, moves::Move};

/// Number of legal moves left after playing `mv` on `board`.
pub fn successor_mobility(board: &mut Board, mv: Move) -> Result<usize> {
    mv.apply(board)?;
    let mobility = count_legal_moves(board);
    mv.undo(board)?;
    Ok(mobility)
}

/// Order `moves` so that the ones leaving the most follow-up moves come
/// first. Nothing is dropped. The sort is stable, so moves with equal
/// mobility keep the order the generator produced them in.
///
/// Every move has to be legal on `board`.
pub fn rank(board: &Board, moves: Vec<Move>) -> Result<Vec<Move>> {
    let mut scratch = board.clone();

    let mut scored = Vec::with_capacity(moves.len());
    for mv in moves {
        let mobility = successor_mobility(&mut scratch, mv)?;
        scored.push((mv, mobility));
    }

    scored.sort_by_key(|&(_, mobility)| Reverse(mobility));
    Ok(scored.into_iter().map(|(mv, _)| mv).collect())
}
