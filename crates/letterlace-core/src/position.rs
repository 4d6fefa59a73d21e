//! Board coordinates.

use std::fmt::{self, Display};

use tinyvec::ArrayVec;

/// A zero-based board coordinate.
///
/// Rows grow downwards and columns grow to the right. A position carries no
/// board size; bounds are checked against a [`Grid`](crate::Grid) when used.
///
/// # Examples
///
/// ```
/// use letterlace_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 5);
/// assert_eq!(pos.to_string(), "(2, 5)");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from a row and a column index.
    #[must_use]
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns `true` if the position lies inside a `size`×`size` board.
    #[must_use]
    #[inline]
    pub const fn is_within(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Returns the row-major index of this position on a `size`×`size` board.
    #[must_use]
    #[inline]
    pub const fn to_index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    /// Returns the in-bounds orthogonal neighbours on a `size`×`size` board.
    ///
    /// Neighbours are yielded in up, down, left, right order. Each direction is
    /// guarded independently, so corner and edge positions simply yield fewer
    /// neighbours; nothing wraps around and diagonals are never included.
    ///
    /// # Examples
    ///
    /// ```
    /// use letterlace_core::Position;
    ///
    /// let corner: Vec<_> = Position::new(0, 0).neighbors(6).into_iter().collect();
    /// assert_eq!(corner, [Position::new(1, 0), Position::new(0, 1)]);
    ///
    /// let inner = Position::new(3, 3).neighbors(6);
    /// assert_eq!(inner.len(), 4);
    /// ```
    #[must_use]
    pub fn neighbors(self, size: u8) -> ArrayVec<[Position; 4]> {
        let mut neighbors = ArrayVec::new();
        if !self.is_within(size) {
            return neighbors;
        }
        if self.row > 0 {
            neighbors.push(Self::new(self.row - 1, self.col));
        }
        if self.row + 1 < size {
            neighbors.push(Self::new(self.row + 1, self.col));
        }
        if self.col > 0 {
            neighbors.push(Self::new(self.row, self.col - 1));
        }
        if self.col + 1 < size {
            neighbors.push(Self::new(self.row, self.col + 1));
        }
        neighbors
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
