use colored::Colorize;
use common::{replay, Board, Coord, Move};

const RULE: &str = "-----------------";

/// Draw the board as a triangle, `|` for a peg and `o` for a hole.
///
/// If `last` is given, the holes touched by that move are highlighted: the
/// landed peg on green, the vacated source on blue and the removed peg on
/// red.
pub fn draw(board: &Board, last: Option<Move>) -> String {
    let nr_rows = board.nr_rows();
    let mut out = String::new();

    for (row, cells) in board.rows().enumerate() {
        let mut line = " ".repeat(3 + nr_rows - row);
        for (col, peg) in cells.enumerate() {
            let coord = Coord::new(row as isize, col as isize);
            let symbol = if peg { "|" } else { "o" };
            let symbol = match last {
                Some(mv) if mv.dst() == coord => symbol.on_green().to_string(),
                Some(mv) if mv.src() == coord => symbol.on_blue().to_string(),
                Some(mv) if mv.mid() == coord => symbol.on_red().to_string(),
                _ => symbol.to_string(),
            };
            line.push_str(&symbol);
            line.push(' ');
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// The board between two rules.
pub fn framed(board: &Board, last: Option<Move>) -> String {
    format!("{RULE}\n\n{}\n{RULE}\n", draw(board, last))
}

/// The position the search starts from, under a heading.
pub fn starting(board: &Board) -> String {
    format!(" Starting Board:\n{}", framed(board, None))
}

/// Step by step listing of a solution, with the board after every move.
pub fn solution(start: &Board, moves: &[Move]) -> common::Result<String> {
    let boards = replay(start, moves)?;

    let mut out = format!("Moves:\n{RULE}\n(row, col) -> (row, col)\n=================\n\n");
    for (i, (mv, board)) in moves.iter().zip(&boards).enumerate() {
        out.push_str(&format!("Move: {}\n{mv}\n", i + 1));
        out.push_str(&framed(board, Some(*mv)));
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use common::{Axis, Direction};

    use super::*;

    fn no_colors() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_draw() {
        no_colors();
        let board = Board::triangle(3, Coord::new(1, 0)).unwrap();

        assert_eq!(draw(&board, None), "      |\n     o |\n    | | |\n");
    }

    #[test]
    fn test_draw_irregular() {
        no_colors();
        let board = Board::from_rows(vec![vec![true, false, true], vec![false]]).unwrap();

        assert_eq!(draw(&board, None), "     | o |\n    o\n");
    }

    #[test]
    fn test_starting_board_is_labelled() {
        no_colors();
        let board = Board::triangle(2, Coord::apex()).unwrap();

        assert_eq!(
            starting(&board),
            " Starting Board:\n-----------------\n\n     o\n    | |\n\n-----------------\n"
        );
    }

    #[test]
    fn test_solution_listing() {
        no_colors();
        let start = Board::from_rows(vec![vec![false], vec![true, false], vec![true, false, false]])
            .unwrap();
        let mv = Move::new(Axis::DiagonalLeft, Direction::Backward, Coord::apex());

        let listing = solution(&start, &[mv]).unwrap();

        assert!(listing.starts_with("Moves:\n"));
        assert!(listing.contains("Move: 1\n(2, 0) -> (0, 0)\n"));
        assert!(listing.contains("      |\n     o o\n    o o o\n"));
    }

    #[test]
    fn test_solution_with_illegal_move() {
        let start = Board::standard();
        let mv = Move::new(Axis::Horizontal, Direction::Forward, Coord::new(4, 2));
        assert!(solution(&start, &[mv]).is_err());
    }
}
