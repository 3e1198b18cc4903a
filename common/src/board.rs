use std::fmt;

use bitvec::{prelude::Lsb0, vec::BitVec};

use crate::{
    coord::Coord,
    error::{Error, Result},
};

/// A jagged triangular board of pegs and holes.
///
/// Row `i` of a classic board has `i + 1` holes, but every row length is
/// chosen independently when the board is built. The shape never changes
/// afterwards, only the pegs do.
///
/// All holes are stored in one flat bit buffer. The bits of `row` are
/// `offsets[row]..offsets[row + 1]`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    pegs: BitVec<u32, Lsb0>,
    offsets: Vec<usize>,
}

impl Board {
    /// Build a board from its rows, `true` meaning that the hole holds a peg.
    pub fn from_rows<R, C>(rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = bool>,
    {
        let mut pegs = BitVec::new();
        let mut offsets = vec![0];

        for (row, cells) in rows.into_iter().enumerate() {
            let start = pegs.len();
            pegs.extend(cells);
            if pegs.len() == start {
                return Err(Error::MalformedBoard(format!("row {row} has no holes")));
            }
            offsets.push(pegs.len());
        }

        if offsets.len() == 1 {
            return Err(Error::MalformedBoard("the board has no rows".to_string()));
        }

        Ok(Board { pegs, offsets })
    }

    /// A perfect triangle with `nr_rows` rows, filled with pegs except for
    /// the single hole at `hole`.
    pub fn triangle(nr_rows: usize, hole: Coord) -> Result<Self> {
        let mut board = Self::from_rows((1..=nr_rows).map(|len| vec![true; len]))?;
        let (row, col) = hole.as_indices().ok_or(Error::OutOfRange {
            row: hole.row,
            col: hole.col,
        })?;
        board.set(row, col, false)?;
        Ok(board)
    }

    /// Four rows, the second row's left hole empty.
    pub fn small() -> Self {
        Self::preset(4, Coord::new(1, 0))
    }

    /// The classic fifteen hole board with an empty apex.
    pub fn standard() -> Self {
        Self::preset(5, Coord::apex())
    }

    pub fn large() -> Self {
        Self::preset(6, Coord::apex())
    }

    pub fn mega() -> Self {
        Self::preset(7, Coord::new(1, 0))
    }

    fn preset(nr_rows: usize, hole: Coord) -> Self {
        Self::triangle(nr_rows, hole).expect("preset boards are well-formed")
    }

    pub fn nr_rows(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of holes in the given row.
    pub fn cell_count(&self, row: usize) -> Result<usize> {
        if row >= self.nr_rows() {
            return Err(Error::OutOfRange {
                row: row as isize,
                col: 0,
            });
        }
        Ok(self.offsets[row + 1] - self.offsets[row])
    }

    pub fn row_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.offsets.windows(2).map(|w| w[1] - w[0])
    }

    /// Total number of holes on the board.
    pub fn nr_holes(&self) -> usize {
        self.pegs.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        Ok(self.pegs[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        let idx = self.index(row, col)?;
        self.pegs.set(idx, value);
        Ok(())
    }

    /// Occupancy of the hole at `coord`, or `None` if the board has no such
    /// hole. Doesn't fail, so that callers probing possible jumps can check
    /// bounds and occupancy in one go.
    pub fn lookup(&self, coord: Coord) -> Option<bool> {
        self.index_of(coord).map(|idx| self.pegs[idx])
    }

    /// Number of pegs on the board
    pub fn count(&self) -> usize {
        self.pegs.count_ones()
    }

    /// Whether consecutive row lengths always differ by exactly one, as they
    /// do on an equilateral board. A single row is trivially perfect.
    pub fn is_perfect(&self) -> bool {
        let lengths: Vec<usize> = self.row_lengths().collect();
        lengths.windows(2).all(|pair| pair[0].abs_diff(pair[1]) == 1)
    }

    /// Every hole in row-major order, together with its occupancy.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        (0..self.nr_rows()).flat_map(move |row| {
            let start = self.offsets[row];
            (start..self.offsets[row + 1])
                .map(move |idx| (Coord::new(row as isize, (idx - start) as isize), self.pegs[idx]))
        })
    }

    /// The occupancy of each row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = bool> + '_> + '_ {
        self.offsets
            .windows(2)
            .map(move |w| self.pegs[w[0]..w[1]].iter().by_vals())
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        self.try_index(row, col).ok_or(Error::OutOfRange {
            row: row as isize,
            col: col as isize,
        })
    }

    fn try_index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.nr_rows() {
            return None;
        }
        let start = self.offsets[row];
        (col < self.offsets[row + 1] - start).then(|| start + col)
    }

    /// Flat index of a signed coordinate, `None` if it's off the board.
    pub(crate) fn index_of(&self, coord: Coord) -> Option<usize> {
        let (row, col) = coord.as_indices()?;
        self.try_index(row, col)
    }

    pub(crate) fn peg_at(&self, idx: usize) -> bool {
        self.pegs[idx]
    }

    pub(crate) fn toggle_at(&mut self, idx: usize) {
        let value = self.pegs[idx];
        self.pegs.set(idx, !value);
    }
}

/// One line per row, `1` for a peg and `0` for a hole.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, peg) in row.enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if peg { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a board from rows of 0s and 1s.
    pub(crate) fn board(rows: &[&[u8]]) -> Board {
        Board::from_rows(rows.iter().map(|row| row.iter().map(|&c| c == 1))).unwrap()
    }

    fn shape(lengths: &[usize]) -> Board {
        Board::from_rows(lengths.iter().map(|&len| vec![false; len])).unwrap()
    }

    #[test]
    fn test_from_rows_keeps_shape() {
        let b = board(&[&[0], &[1, 0], &[1, 0, 0], &[0, 1, 0, 0]]);

        assert_eq!(b.nr_rows(), 4);
        assert_eq!(b.row_lengths().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(b.nr_holes(), 10);
        assert_eq!(b.count(), 3);
        assert!(b.get(1, 0).unwrap());
        assert!(!b.get(1, 1).unwrap());
        assert!(b.get(3, 1).unwrap());
    }

    #[test]
    fn test_empty_board_is_malformed() {
        let rows: Vec<Vec<bool>> = vec![];
        assert!(matches!(
            Board::from_rows(rows),
            Err(Error::MalformedBoard(_))
        ));
    }

    #[test]
    fn test_empty_row_is_malformed() {
        let rows = vec![vec![true], vec![], vec![true, true, false]];
        assert!(matches!(
            Board::from_rows(rows),
            Err(Error::MalformedBoard(_))
        ));
    }

    #[test]
    fn test_out_of_range_access() {
        let mut b = board(&[&[1], &[1, 1], &[1, 1, 1]]);

        assert_eq!(b.get(3, 0), Err(Error::OutOfRange { row: 3, col: 0 }));
        assert_eq!(b.get(1, 2), Err(Error::OutOfRange { row: 1, col: 2 }));
        assert_eq!(
            b.set(0, 1, false),
            Err(Error::OutOfRange { row: 0, col: 1 })
        );
        assert_eq!(b.cell_count(5), Err(Error::OutOfRange { row: 5, col: 0 }));
        assert_eq!(b.lookup(Coord::new(-1, 0)), None);
        assert_eq!(b.lookup(Coord::new(2, 3)), None);
        assert_eq!(b.lookup(Coord::new(2, 2)), Some(true));
    }

    #[test]
    fn test_huge_column_is_out_of_range() {
        let mut b = board(&[&[1], &[0, 0]]);

        assert!(matches!(
            b.get(1, usize::MAX),
            Err(Error::OutOfRange { row: 1, .. })
        ));
        assert!(b.set(1, usize::MAX, true).is_err());
        assert!(b.set(0, usize::MAX - 1, false).is_err());
        assert_eq!(b, board(&[&[1], &[0, 0]]));
    }

    #[test]
    fn test_set_and_count() {
        let mut b = board(&[&[0], &[0, 0], &[0, 0, 0]]);
        assert_eq!(b.count(), 0);

        b.set(2, 1, true).unwrap();
        b.set(1, 0, true).unwrap();
        assert_eq!(b.count(), 2);
        assert!(b.get(2, 1).unwrap());

        b.set(2, 1, false).unwrap();
        assert_eq!(b.count(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::standard();
        let mut copy = original.clone();

        copy.set(0, 0, true).unwrap();
        copy.set(4, 4, false).unwrap();

        assert!(!original.get(0, 0).unwrap());
        assert!(original.get(4, 4).unwrap());
        assert_eq!(
            copy.row_lengths().collect::<Vec<_>>(),
            original.row_lengths().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_is_perfect() {
        assert!(shape(&[1]).is_perfect());
        assert!(shape(&[1, 2]).is_perfect());
        assert!(shape(&[1, 2, 3, 4, 5]).is_perfect());

        assert!(!shape(&[1, 2, 4]).is_perfect());
        assert!(!shape(&[1, 3]).is_perfect());
        assert!(!shape(&[3, 1, 3]).is_perfect());
    }

    #[test]
    fn test_presets() {
        let small = Board::small();
        assert_eq!(small.nr_rows(), 4);
        assert_eq!(small.count(), 9);
        assert!(!small.get(1, 0).unwrap());

        assert_eq!(Board::standard().count(), 14);
        assert!(!Board::standard().get(0, 0).unwrap());
        assert_eq!(Board::large().count(), 20);
        assert_eq!(Board::mega().count(), 27);
        assert!(Board::mega().is_perfect());
    }

    #[test]
    fn test_triangle_hole_outside() {
        assert_eq!(
            Board::triangle(3, Coord::new(1, 2)),
            Err(Error::OutOfRange { row: 1, col: 2 })
        );
        assert_eq!(
            Board::triangle(3, Coord::new(-1, 0)),
            Err(Error::OutOfRange { row: -1, col: 0 })
        );
    }

    #[test]
    fn test_cells_are_row_major() {
        let b = board(&[&[1], &[0, 1]]);
        let cells: Vec<_> = b.cells().collect();
        assert_eq!(
            cells,
            vec![
                (Coord::new(0, 0), true),
                (Coord::new(1, 0), false),
                (Coord::new(1, 1), true),
            ]
        );
    }

    #[test]
    fn test_display() {
        let b = board(&[&[0], &[1, 0], &[1, 1, 1]]);
        assert_eq!(b.to_string(), "0\n1 0\n1 1 1");
    }
}
