//! Command line front end: pick a board, solve it, print the answer.

use std::{path::PathBuf, process::ExitCode, time::Duration};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use common::{Board, SolveResult, Solver};
use env_logger::Env;

use crate::{parse::read_board, render, report::Report};

/// Built-in starting positions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Preset {
    /// 4 rows, hole at (1, 0)
    Small,
    /// 5 rows, hole at the apex
    Standard,
    /// 6 rows, hole at the apex
    Large,
    /// 7 rows, hole at (1, 0)
    Mega,
}

impl Preset {
    pub fn board(self) -> Board {
        match self {
            Preset::Small => Board::small(),
            Preset::Standard => Board::standard(),
            Preset::Large => Board::large(),
            Preset::Mega => Board::mega(),
        }
    }
}

/// Solve peg solitaire on a triangular board.
///
/// The board is read from FILE, or from stdin, one row per line with `1` for
/// a peg and `0` for a hole.
#[derive(Parser, Debug)]
#[command(about, version)]
pub struct Args {
    /// File with the starting board, `-` for stdin
    #[arg(conflicts_with = "preset")]
    file: Option<PathBuf>,

    /// Solve a built-in board instead of reading one
    #[arg(value_enum, short, long)]
    preset: Option<Preset>,

    /// Give up after exploring this many positions
    #[arg(long, value_name = "N")]
    max_nodes: Option<u64>,

    /// Give up after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<f64>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Don't highlight the last move
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// Only print the moves
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// More log output, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    fn solver(&self) -> anyhow::Result<Solver> {
        let mut solver = Solver::new();
        if let Some(limit) = self.max_nodes {
            solver = solver.with_node_limit(limit);
        }
        if let Some(secs) = self.timeout {
            let limit = Duration::try_from_secs_f64(secs)
                .with_context(|| format!("invalid timeout {secs}"))?;
            solver = solver.with_time_limit(limit);
        }
        Ok(solver)
    }

    fn board(&self) -> anyhow::Result<Board> {
        match self.preset {
            Some(preset) => Ok(preset.board()),
            None => read_board(self.file.as_deref()),
        }
    }
}

pub fn run() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level())).init();
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut solver = args.solver()?;
    let board = args.board()?;
    log::debug!("starting board:\n{board}");

    let show_board = !args.quiet && !args.json;
    if show_board {
        println!("{}", render::starting(&board));
    }

    let result = solver.solve(&board)?;

    if args.json {
        let report = Report::new(&result, solver.stats());
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &result {
            SolveResult::Solved(moves) if args.quiet => {
                for mv in moves {
                    println!("{mv}");
                }
            }
            SolveResult::Solved(moves) => print!("{}", render::solution(&board, moves)?),
            SolveResult::Unsolvable => println!("No solution"),
            SolveResult::TimedOut => println!(
                "No solution found after exploring {} positions",
                solver.stats().explored
            ),
        }
    }

    Ok(match result {
        SolveResult::Solved(_) => ExitCode::SUCCESS,
        SolveResult::Unsolvable | SolveResult::TimedOut => ExitCode::FAILURE,
    })
}
