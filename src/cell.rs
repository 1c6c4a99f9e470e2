//! Grid coordinates.

use core::fmt;

/// A square on the board, addressed by row (`x`) and column (`y`).
///
/// Coordinates are signed so that footprint arithmetic can step off the
/// board; [`Grid::is_inside`](crate::Grid::is_inside) decides whether a cell
/// is real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell shifted by (`dx`, `dy`).
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Chebyshev distance: the number of king moves between two cells.
    pub fn chebyshev(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    /// Board notation: column letter then 1-based row, e.g. `C5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.y) {
            write!(f, "{}{}", (b'A' + self.y as u8) as char, self.x + 1)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}
