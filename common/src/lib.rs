//! Solver for peg solitaire on triangular boards.
//!
//! A [`Board`] is a jagged triangle of holes. Pegs jump along one of three
//! [`Axis`]es over a neighbouring peg into an empty hole, which removes the
//! jumped peg. [`solve`] searches for a sequence of such jumps that clears
//! the board down to one peg.

pub mod board;
pub mod coord;
pub mod error;
pub mod movegen;
pub mod moves;
pub mod ranking;
pub mod solver;

pub use board::Board;
pub use coord::Coord;
pub use error::{Error, Result};
pub use movegen::{all_legal_moves, count_legal_moves, valid_moves_from};
pub use moves::{Axis, Direction, Move};
pub use ranking::rank;
pub use solver::{SearchStats, SolveResult, Solver, replay, solve};
