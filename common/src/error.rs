use thiserror::Error;

use crate::moves::Move;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A coordinate outside the board's shape was accessed. Never happens
    /// for moves produced by the move generator.
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfRange { row: isize, col: isize },

    /// The row structure cannot be searched, e.g. a board without rows.
    #[error("malformed board: {0}")]
    MalformedBoard(String),

    /// The cells touched by a move don't hold the pegs and holes the move
    /// requires.
    #[error("move {mv} cannot be played on this board")]
    IllegalMove { mv: Move },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
