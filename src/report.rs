use common::{Coord, Move, SearchStats, SolveResult};
use serde::Serialize;

/// Machine readable result of a search, printed with `--json`.
#[derive(Serialize, Debug)]
pub struct Report {
    pub solved: bool,
    pub explored: u64,
    pub moves: Vec<Jump>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Jump {
    pub from: [isize; 2],
    pub over: [isize; 2],
    pub to: [isize; 2],
}

fn pair(coord: Coord) -> [isize; 2] {
    [coord.row, coord.col]
}

impl From<Move> for Jump {
    fn from(mv: Move) -> Self {
        Jump {
            from: pair(mv.src()),
            over: pair(mv.mid()),
            to: pair(mv.dst()),
        }
    }
}

impl Report {
    pub fn new(result: &SolveResult, stats: SearchStats) -> Self {
        let moves = match result {
            SolveResult::Solved(moves) => moves.iter().copied().map(Jump::from).collect(),
            SolveResult::Unsolvable | SolveResult::TimedOut => Vec::new(),
        };
        Report {
            solved: matches!(result, SolveResult::Solved(_)),
            explored: stats.explored,
            moves,
        }
    }
}
