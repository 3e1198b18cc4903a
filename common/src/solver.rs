//! Depth-first backtracking search for a complete solution.
//!
//! The search plays moves on a single board and takes them back when a
//! branch turns out to be a dead end. Moves are tried in the order given by
//! [`rank`], so the first solution found is the one reached by always
//! preferring the move that keeps the most options open.

use std::time::{Duration, Instant};

use crate::{
    board::Board,
    error::Result,
    movegen::all_legal_moves,
    moves::Move,
    ranking::rank,
};

/// Emit a progress message every this many explored positions.
const PROGRESS_INTERVAL: u64 = 1_000_000;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SolveResult {
    Solved(Vec<Move>),
    Unsolvable,
    /// A node or time limit was hit before the search could finish.
    TimedOut,
}

/// Counters describing the last search.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SearchStats {
    /// Number of positions the search entered, including the start.
    pub explored: u64,
    /// Number of moves that were taken back again.
    pub backtracks: u64,
    /// Length of the longest move sequence tried.
    pub max_depth: usize,
}

/// When the search is done.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Target {
    /// Perfect boards are done after this many moves. `None` if no number of
    /// moves can ever be enough.
    MoveCount(Option<usize>),
    /// Other boards are done once the number of moves played equals the
    /// number of pegs still on the board.
    PegCount,
}

impl Target {
    fn for_board(board: &Board) -> Self {
        if board.is_perfect() {
            let n = board.nr_rows();
            Target::MoveCount((n * (n + 1) / 2).checked_sub(2))
        } else {
            Target::PegCount
        }
    }

    fn reached(self, board: &Board, nr_moves: usize) -> bool {
        match self {
            Target::MoveCount(target) => target == Some(nr_moves),
            Target::PegCount => board.count() == nr_moves,
        }
    }
}

enum Outcome {
    Found,
    NotFound,
    Aborted,
}

/// State of one search run. `board` is always the start position with all
/// moves in `trace` applied.
struct Search {
    board: Board,
    trace: Vec<Move>,
    target: Target,
    stats: SearchStats,
    node_limit: Option<u64>,
    deadline: Option<Instant>,
}

impl Search {
    fn step(&mut self) -> Result<Outcome> {
        self.stats.explored += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.trace.len());

        if self.stats.explored % PROGRESS_INTERVAL == 0 {
            log::info!(
                "explored {} positions, {} moves deep",
                self.stats.explored,
                self.trace.len()
            );
            log::debug!("current board:\n{}", self.board);
        }

        if self.target.reached(&self.board, self.trace.len()) {
            return Ok(Outcome::Found);
        }

        let moves = rank(&self.board, all_legal_moves(&self.board))?;

        if self.limit_reached() {
            return Ok(Outcome::Aborted);
        }

        for mv in moves {
            mv.apply(&mut self.board)?;
            self.trace.push(mv);

            match self.step()? {
                Outcome::NotFound => {}
                // leave the board and trace as they are, they are the answer
                outcome => return Ok(outcome),
            }

            self.trace.pop();
            mv.undo(&mut self.board)?;
            self.stats.backtracks += 1;
        }

        Ok(Outcome::NotFound)
    }

    fn limit_reached(&self) -> bool {
        let explored = self.stats.explored;
        if self.node_limit.is_some_and(|limit| explored >= limit) {
            log::warn!("giving up after {explored} positions");
            return true;
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            log::warn!("giving up after {explored} positions, out of time");
            return true;
        }
        false
    }
}

/// Configurable solver. Without limits the search runs until it has either
/// found a solution or tried every move sequence.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    node_limit: Option<u64>,
    time_limit: Option<Duration>,
    stats: SearchStats,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop after entering this many positions.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Stop once this much time has passed since the search started.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Statistics of the most recent call to [`Solver::solve`].
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search for a solution starting at `board`. The board itself is left
    /// untouched, the search runs on a copy.
    pub fn solve(&mut self, board: &Board) -> Result<SolveResult> {
        let target = Target::for_board(board);
        log::info!(
            "solving a board with {} rows, {} holes and {} pegs, target {target:?}",
            board.nr_rows(),
            board.nr_holes(),
            board.count()
        );

        let start = Instant::now();
        let mut search = Search {
            board: board.clone(),
            trace: Vec::new(),
            target,
            stats: SearchStats::default(),
            node_limit: self.node_limit,
            deadline: self.time_limit.map(|limit| start + limit),
        };

        let outcome = search.step();
        self.stats = search.stats;
        let outcome = outcome?;

        log::info!(
            "explored {} positions in {}s",
            self.stats.explored,
            start.elapsed().as_secs_f32()
        );

        Ok(match outcome {
            Outcome::Found => SolveResult::Solved(search.trace),
            Outcome::NotFound => SolveResult::Unsolvable,
            Outcome::Aborted => SolveResult::TimedOut,
        })
    }
}

/// Find a move sequence that solves `board`, or `None` if there is none.
pub fn solve(board: &Board) -> Result<Option<Vec<Move>>> {
    match Solver::new().solve(board)? {
        SolveResult::Solved(moves) => Ok(Some(moves)),
        SolveResult::Unsolvable | SolveResult::TimedOut => Ok(None),
    }
}

/// The boards after each of the given moves, starting from `start`.
pub fn replay(start: &Board, moves: &[Move]) -> Result<Vec<Board>> {
    let mut board = start.clone();
    let mut boards = Vec::with_capacity(moves.len());
    for mv in moves {
        mv.apply(&mut board)?;
        boards.push(board.clone());
    }
    Ok(boards)
}
