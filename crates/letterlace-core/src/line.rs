//! Scan lines and reading orientation.

use std::iter::FusedIterator;

use crate::Position;

/// The axis a word is read along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Orientation {
    /// Left to right along a row.
    #[display("row")]
    Row,
    /// Top to bottom along a column.
    #[display("column")]
    Column,
}

impl Orientation {
    /// Both orientations, rows first.
    pub const ALL: [Self; 2] = [Self::Row, Self::Column];

    /// Returns the position `offset` steps from `start` along this orientation.
    #[must_use]
    #[inline]
    pub const fn step(self, start: Position, offset: u8) -> Position {
        match self {
            Self::Row => Position::new(start.row(), start.col() + offset),
            Self::Column => Position::new(start.row() + offset, start.col()),
        }
    }
}

/// A single scan line of the board (one row or one column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// A row identified by its row index.
    Row {
        /// Row index.
        row: u8,
    },
    /// A column identified by its column index.
    Column {
        /// Column index.
        col: u8,
    },
}

impl Line {
    /// Returns the orientation words are read in along this line.
    #[must_use]
    #[inline]
    pub const fn orientation(self) -> Orientation {
        match self {
            Line::Row { .. } => Orientation::Row,
            Line::Column { .. } => Orientation::Column,
        }
    }

    /// Converts an offset along the line into an absolute [`Position`].
    #[must_use]
    #[inline]
    pub const fn position_at(self, i: u8) -> Position {
        match self {
            Line::Row { row } => Position::new(row, i),
            Line::Column { col } => Position::new(i, col),
        }
    }

    /// Returns every line of a `size`×`size` board with the given orientation.
    ///
    /// # Examples
    ///
    /// ```
    /// use letterlace_core::{Line, Orientation};
    ///
    /// let columns: Vec<_> = Line::all(Orientation::Column, 3).collect();
    /// assert_eq!(columns[2], Line::Column { col: 2 });
    /// assert_eq!(columns.len(), 3);
    /// ```
    pub fn all(orientation: Orientation, size: u8) -> impl DoubleEndedIterator<Item = Self> {
        (0..size).map(move |i| match orientation {
            Orientation::Row => Line::Row { row: i },
            Orientation::Column => Line::Column { col: i },
        })
    }

    /// Returns the positions of this line on a `size`×`size` board in increasing order.
    #[must_use]
    #[inline]
    pub fn positions(self, size: u8) -> LinePositions {
        LinePositions {
            line: self,
            front: 0,
            back: size,
        }
    }
}

/// Iterator over the positions of a [`Line`].
#[derive(Debug, Clone)]
pub struct LinePositions {
    line: Line,
    front: u8,
    back: u8,
}

impl Iterator for LinePositions {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.line.position_at(self.front);
        self.front += 1;
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.back.saturating_sub(self.front));
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for LinePositions {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.line.position_at(self.back))
    }
}

impl FusedIterator for LinePositions {}
impl ExactSizeIterator for LinePositions {}
