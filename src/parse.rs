use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{bail, Context};
use common::Board;

/// Parse the text form of a board.
///
/// Every non-empty line is a row, `1` is a peg and `0` a hole. Whitespace
/// between holes is ignored and `#` starts a comment, so a board can be
/// written as a triangle:
///
/// ```text
/// # standard board, apex empty
///     0
///    1 1
///   1 1 1
/// ```
pub fn parse_board(text: &str) -> anyhow::Result<Board> {
    let mut rows = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let content = line.split_once('#').map_or(line, |(before, _)| before);

        let mut row = Vec::new();
        for (col_idx, c) in content.chars().enumerate() {
            match c {
                '0' => row.push(false),
                '1' => row.push(true),
                c if c.is_whitespace() => {}
                c => bail!(
                    "invalid character {c:?} at line {}, column {}",
                    line_idx + 1,
                    col_idx + 1
                ),
            }
        }

        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok(Board::from_rows(rows)?)
}

/// Read a board from `path`, or from stdin if there's no path or it is `-`.
pub fn read_board(path: Option<&Path>) -> anyhow::Result<Board> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            parse_board(&text).with_context(|| format!("invalid board in {}", path.display()))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("cannot read board from stdin")?;
            parse_board(&text).context("invalid board on stdin")
        }
    }
}
