use std::{fmt, ops::Sub};

/// A hole coordinate on a triangular board. Row 0 is the apex, column 0 is
/// the left edge of every row.
///
/// Coordinates are signed so that jumps running off the top or the left
/// edge can still be described. Whether a coordinate actually lies on a
/// given board is up to [`crate::Board`] to decide.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Coord {
    pub row: isize,
    pub col: isize,
}

impl Sub for Coord {
    type Output = (isize, isize);

    fn sub(self, rhs: Self) -> Self::Output {
        (self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Coord {
    pub const fn new(row: isize, col: isize) -> Self {
        Coord { row, col }
    }

    pub const fn apex() -> Self {
        Coord { row: 0, col: 0 }
    }

    pub fn shift(self, row: isize, col: isize) -> Coord {
        Coord {
            row: self.row + row,
            col: self.col + col,
        }
    }

    /// The hole halfway between `self` and `other`. Only exact for
    /// coordinates that are an even number of holes apart on both axes,
    /// which is always the case for the two ends of a jump.
    pub fn midpoint(self, other: Coord) -> Coord {
        Coord {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }

    /// Both components as unsigned indices, or `None` if either is negative.
    pub fn as_indices(self) -> Option<(usize, usize)> {
        Some((usize::try_from(self.row).ok()?, usize::try_from(self.col).ok()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let a = Coord::new(4, 2);
        let b = Coord::new(2, 0);
        assert_eq!(a.midpoint(b), Coord::new(3, 1));
        assert_eq!(b.midpoint(a), Coord::new(3, 1));
    }

    #[test]
    fn test_sub() {
        assert_eq!(Coord::new(2, 2) - Coord::apex(), (2, 2));
        assert_eq!(Coord::new(3, 1) - Coord::new(3, 3), (0, -2));
    }

    #[test]
    fn test_negative_coordinates_have_no_indices() {
        assert_eq!(Coord::new(-2, 0).as_indices(), None);
        assert_eq!(Coord::new(1, -1).as_indices(), None);
        assert_eq!(Coord::new(3, 1).as_indices(), Some((3, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(-1, 4).to_string(), "(-1, 4)");
    }
}
