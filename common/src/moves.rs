use std::fmt;

use crate::{
    board::Board,
    coord::Coord,
    error::{Error, Result},
};

/// One of the three lines along which a peg can jump on a triangular board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Axis {
    /// The row changes, the column stays. Drawn as a triangle, this runs
    /// down-left / up-right.
    DiagonalLeft,
    /// Row and column change together, i.e. down-right / up-left.
    DiagonalRight,
    /// The column changes within a row.
    Horizontal,
}

impl Axis {
    /// Enumeration order of the move generator. Changing it changes which
    /// solution the search finds first.
    pub const ALL: [Axis; 3] = [Axis::DiagonalLeft, Axis::DiagonalRight, Axis::Horizontal];

    /// One step in the forward direction, as (row, col) deltas.
    fn step(self) -> (isize, isize) {
        match self {
            Axis::DiagonalLeft => (1, 0),
            Axis::DiagonalRight => (1, 1),
            Axis::Horizontal => (0, 1),
        }
    }
}

/// Whether a jump runs towards increasing or decreasing axis values.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Forward, Direction::Backward];

    fn sign(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// The hole a peg has to start from in order to land on `dst` when jumping
/// along `axis` in direction `dir`. It lies two holes back along the axis
/// and may well be off the board.
pub fn origin(axis: Axis, dir: Direction, dst: Coord) -> Coord {
    let (row, col) = axis.step();
    let back = -2 * dir.sign();
    dst.shift(back * row, back * col)
}

/// A single jump, described by where it lands and how it got there.
///
/// The source and the jumped-over hole are derived from the destination.
/// A move doesn't know about any board, whether it can be played is up to
/// [`Move::can_apply`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    axis: Axis,
    dir: Direction,
    dst: Coord,
}

impl Move {
    pub fn new(axis: Axis, dir: Direction, dst: Coord) -> Self {
        Move { axis, dir, dst }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// Where the moving peg starts.
    pub fn src(&self) -> Coord {
        origin(self.axis, self.dir, self.dst)
    }

    /// The peg that gets removed.
    pub fn mid(&self) -> Coord {
        self.src().midpoint(self.dst)
    }

    /// Where the moving peg ends up.
    pub fn dst(&self) -> Coord {
        self.dst
    }

    /// True iff all three holes exist on the board, source and middle hold
    /// pegs and the destination is empty.
    pub fn can_apply(&self, board: &Board) -> bool {
        board.lookup(self.src()) == Some(true)
            && board.lookup(self.mid()) == Some(true)
            && board.lookup(self.dst) == Some(false)
    }

    /// Play the move: source and middle become holes, the destination gets
    /// the peg.
    pub fn apply(&self, board: &mut Board) -> Result<()> {
        self.flip(board, true)
    }

    /// Take back a move that was just played. `apply` followed by `undo`
    /// leaves the board exactly as it was.
    pub fn undo(&self, board: &mut Board) -> Result<()> {
        self.flip(board, false)
    }

    /// Toggle all three holes after checking that source and middle hold
    /// `src_occupied` and the destination holds the opposite.
    fn flip(&self, board: &mut Board, src_occupied: bool) -> Result<()> {
        let coords = [self.src(), self.mid(), self.dst];
        let expected = [src_occupied, src_occupied, !src_occupied];

        let mut idxs = [0; 3];
        for (idx, coord) in idxs.iter_mut().zip(coords) {
            *idx = board.index_of(coord).ok_or(Error::OutOfRange {
                row: coord.row,
                col: coord.col,
            })?;
        }

        if idxs
            .iter()
            .zip(expected)
            .any(|(&idx, occupied)| board.peg_at(idx) != occupied)
        {
            return Err(Error::IllegalMove { mv: *self });
        }

        for idx in idxs {
            board.toggle_at(idx);
        }
        Ok(())
    }
}

/// Source and destination, e.g. `(2, 0) -> (0, 0)`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.src(), self.dst)
    }
}
