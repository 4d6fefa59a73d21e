//! The square board of tiles.

use std::{
    collections::HashSet,
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Letter, LetterId, Position, Tile, TileId, TileState};

/// Errors reported by [`Grid`] construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The grid has no rows.
    #[display("grid has no rows")]
    Empty,
    /// The side length does not fit the coordinate type.
    #[display("grid side length {size} exceeds {}", u8::MAX)]
    TooLarge {
        /// Requested side length.
        size: usize,
    },
    /// A row does not have exactly as many tiles as the grid has rows.
    #[display("row {row} has {len} tiles, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of tiles in that row.
        len: usize,
        /// Required number of tiles per row.
        expected: usize,
    },
    /// A tile's stored position disagrees with its place in the matrix.
    #[display("tile at {expected} claims to be at {found}")]
    PositionMismatch {
        /// Position implied by the matrix.
        expected: Position,
        /// Position stored in the tile.
        found: Position,
    },
    /// Two tiles share the same identity.
    #[display("tile id {id} appears more than once")]
    DuplicateTileId {
        /// The repeated tile id.
        id: TileId,
    },
    /// The same letter sits on two tiles.
    #[display("letter id {id} appears on more than one tile")]
    DuplicateLetterId {
        /// The repeated letter id.
        id: LetterId,
    },
    /// A position lies outside the board.
    #[display("position {pos} is outside a {size}x{size} grid")]
    OutOfBounds {
        /// The offending position.
        pos: Position,
        /// Side length of the board.
        size: u8,
    },
}

/// Errors reported when parsing a [`Grid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The text contains no rows.
    #[display("grid text contains no rows")]
    Empty,
    /// A row length differs from the number of rows.
    #[display("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of cells in that row.
        len: usize,
        /// Required number of cells per row.
        expected: usize,
    },
    /// The side length does not fit the coordinate type.
    #[display("grid side length {size} exceeds {}", u8::MAX)]
    TooLarge {
        /// Parsed side length.
        size: usize,
    },
}

/// A square `size`×`size` board of [`Tile`]s stored in row-major order.
///
/// Every tile's stored position matches its place in the matrix, and the
/// side length is fixed for the grid's lifetime.
///
/// # Text format
///
/// [`FromStr`] and [`Display`] use one line per row. `.` and `_` mark empty
/// tiles, every other non-whitespace character is a letter. Whitespace inside a
/// line and blank lines are ignored. Parsed letters get ids in row-major order.
///
/// # Examples
///
/// ```
/// use letterlace_core::{Grid, Letter, LetterId, Position};
///
/// let mut grid = Grid::new(4);
/// grid.place_letter(Position::new(1, 2), Letter::new(LetterId(0), 'q'))?;
///
/// assert_eq!(grid.letter_count(), 1);
/// assert_eq!(grid.to_string(), "....\n..q.\n....\n....");
/// # Ok::<(), letterlace_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates an empty grid with tile ids assigned in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "grid side length must be positive");
        let tiles = (0..size)
            .flat_map(|row| (0..size).map(move |col| Position::new(row, col)))
            .zip(0..)
            .map(|(pos, id)| Tile::new(TileId(id), pos))
            .collect();
        Self { size, tiles }
    }

    /// Builds a grid from caller-supplied rows of tiles.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] for zero rows, [`GridError::TooLarge`] if the
    /// side length exceeds the coordinate range, [`GridError::NotSquare`] for a
    /// jagged or non-square matrix and [`GridError::PositionMismatch`] if a
    /// tile's stored position disagrees with where it sits.
    /// [`GridError::DuplicateTileId`] and [`GridError::DuplicateLetterId`] are
    /// returned if two tiles share an id or hold the same letter.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let expected = rows.len();
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let size = u8::try_from(expected).map_err(|_| GridError::TooLarge { size: expected })?;

        let mut tiles = Vec::with_capacity(expected * expected);
        let mut tile_ids = HashSet::with_capacity(expected * expected);
        let mut letter_ids = HashSet::new();
        for (row, (r, cells)) in (0..size).zip(rows.into_iter().enumerate()) {
            if cells.len() != expected {
                return Err(GridError::NotSquare {
                    row: r,
                    len: cells.len(),
                    expected,
                });
            }
            for (col, tile) in (0..size).zip(cells) {
                let at = Position::new(row, col);
                if tile.position() != at {
                    return Err(GridError::PositionMismatch {
                        expected: at,
                        found: tile.position(),
                    });
                }
                if !tile_ids.insert(tile.id()) {
                    return Err(GridError::DuplicateTileId { id: tile.id() });
                }
                if let Some(letter) = tile.letter()
                    && !letter_ids.insert(letter.id())
                {
                    return Err(GridError::DuplicateLetterId { id: letter.id() });
                }
                tiles.push(tile);
            }
        }
        Ok(Self { size, tiles })
    }

    /// Returns the side length of the board.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    #[inline]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.size)
    }

    /// Returns the tile at `pos`, or `None` if it lies outside the board.
    #[must_use]
    #[inline]
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.contains(pos).then(|| &self.tiles[pos.to_index(self.size)])
    }

    /// Returns a mutable reference to the tile at `pos`, or `None` if it lies
    /// outside the board.
    #[inline]
    pub fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        if self.contains(pos) {
            Some(&mut self.tiles[pos.to_index(self.size)])
        } else {
            None
        }
    }

    /// Returns all tiles in row-major order.
    #[must_use]
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns all tiles mutably in row-major order.
    #[inline]
    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    /// Returns an iterator over the rows of the board.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Tile]> {
        self.tiles.chunks_exact(usize::from(self.size))
    }

    /// Returns the positions of all tiles holding a letter, in row-major order.
    pub fn occupied_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles
            .iter()
            .filter(|tile| tile.is_occupied())
            .map(Tile::position)
    }

    /// Returns the number of tiles holding a letter.
    ///
    /// Tiles are counted, not distinct characters.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_occupied()).count()
    }

    /// Returns the states of all tiles in row-major order.
    pub fn states(&self) -> impl Iterator<Item = TileState> + '_ {
        self.tiles.iter().map(Tile::state)
    }

    /// Puts `letter` on the tile at `pos` and returns the letter it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` lies outside the board.
    pub fn place_letter(&mut self, pos: Position, letter: Letter) -> Result<Option<Letter>, GridError> {
        let size = self.size;
        let tile = self
            .tile_mut(pos)
            .ok_or(GridError::OutOfBounds { pos, size })?;
        Ok(tile.replace_letter(Some(letter)))
    }

    /// Clears the tile at `pos` and returns the letter it held.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` lies outside the board.
    pub fn remove_letter(&mut self, pos: Position) -> Result<Option<Letter>, GridError> {
        let size = self.size;
        let tile = self
            .tile_mut(pos)
            .ok_or(GridError::OutOfBounds { pos, size })?;
        Ok(tile.replace_letter(None))
    }
}

impl Index<Position> for Grid {
    type Output = Tile;

    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        assert!(
            self.contains(pos),
            "position {pos} is outside a {0}x{0} grid",
            self.size
        );
        &self.tiles[pos.to_index(self.size)]
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let expected = rows.len();
        if expected == 0 {
            return Err(GridParseError::Empty);
        }
        let size =
            u8::try_from(expected).map_err(|_| GridParseError::TooLarge { size: expected })?;
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(GridParseError::NotSquare {
                row,
                len: cells.len(),
                expected,
            });
        }

        let mut grid = Grid::new(size);
        let mut next_id = 0;
        for (tile, &c) in grid.tiles.iter_mut().zip(rows.iter().flatten()) {
            if c == '.' || c == '_' {
                continue;
            }
            tile.replace_letter(Some(Letter::new(LetterId(next_id), c)));
            next_id += 1;
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.letter_value().unwrap_or('.'))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_grid_is_empty_and_idle() {
        let grid = Grid::new(6);
        assert_eq!(grid.size(), 6);
        assert_eq!(grid.tiles().len(), 36);
        assert_eq!(grid.letter_count(), 0);
        assert!(grid.states().all(|state| state.is_idle()));
    }

    #[test]
    fn test_tile_positions_match_matrix() {
        let grid = Grid::new(5);
        for (r, row) in grid.rows().enumerate() {
            for (c, tile) in row.iter().enumerate() {
                assert_eq!(usize::from(tile.position().row()), r);
                assert_eq!(usize::from(tile.position().col()), c);
            }
        }
    }

    #[test]
    fn test_parse_counts_tiles_not_characters() {
        let grid: Grid = "
            aa.
            ...
            ..a
        "
        .parse()
        .unwrap();
        assert_eq!(grid.letter_count(), 3);
        let ids: Vec<_> = grid
            .tiles()
            .iter()
            .filter_map(Tile::letter)
            .map(Letter::id)
            .collect();
        assert_eq!(ids, [LetterId(0), LetterId(1), LetterId(2)]);
    }

    #[test]
    fn test_parse_ignores_grouping_whitespace() {
        let grid: Grid = "ab_ c\n.... \n.... \n....".parse().unwrap();
        assert_eq!(grid[Position::new(0, 3)].letter_value(), Some('c'));
        assert!(!grid[Position::new(0, 2)].is_occupied());
    }

    #[test]
    fn test_parse_rejects_jagged_rows() {
        let err = "abc\nab\nabc".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            GridParseError::NotSquare {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn test_parse_rejects_empty_text() {
        assert_eq!("  \n\n".parse::<Grid>(), Err(GridParseError::Empty));
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let rows = vec![
            vec![Tile::new(TileId(0), Position::new(0, 0))],
            vec![Tile::new(TileId(1), Position::new(1, 0))],
        ];
        assert_eq!(
            Grid::from_rows(rows),
            Err(GridError::NotSquare {
                row: 0,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_from_rows_rejects_misplaced_tile() {
        let rows = vec![vec![Tile::new(TileId(0), Position::new(0, 1))]];
        assert_eq!(
            Grid::from_rows(rows),
            Err(GridError::PositionMismatch {
                expected: Position::new(0, 0),
                found: Position::new(0, 1),
            })
        );
    }

    #[test]
    fn test_from_rows_accepts_grid_rows() {
        let grid: Grid = "ab\nc.".parse().unwrap();
        let rows = grid.rows().map(<[Tile]>::to_vec).collect();
        assert_eq!(Grid::from_rows(rows), Ok(grid));
    }

    #[test]
    fn test_from_rows_keeps_caller_letters() {
        let letter = Letter::new(LetterId(3), 'k');
        let rows = vec![
            vec![
                Tile::new(TileId(10), Position::new(0, 0)).with_letter(letter),
                Tile::new(TileId(11), Position::new(0, 1)),
            ],
            vec![
                Tile::new(TileId(12), Position::new(1, 0)),
                Tile::new(TileId(13), Position::new(1, 1)),
            ],
        ];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.letter_count(), 1);
        assert_eq!(grid[Position::new(0, 0)].letter(), Some(letter));
        assert_eq!(grid[Position::new(1, 1)].id(), TileId(13));
    }

    #[test]
    fn test_from_rows_rejects_duplicate_tile_ids() {
        let a = Letter::new(LetterId(0), 'a');
        let b = Letter::new(LetterId(1), 'a');
        let rows = vec![
            vec![
                Tile::new(TileId(0), Position::new(0, 0)).with_letter(a),
                Tile::new(TileId(0), Position::new(0, 1)).with_letter(b),
            ],
            vec![
                Tile::new(TileId(0), Position::new(1, 0)),
                Tile::new(TileId(0), Position::new(1, 1)),
            ],
        ];
        assert_eq!(
            Grid::from_rows(rows),
            Err(GridError::DuplicateTileId { id: TileId(0) })
        );
    }

    #[test]
    fn test_from_rows_rejects_letter_on_two_tiles() {
        let letter = Letter::new(LetterId(5), 'a');
        let rows = vec![
            vec![
                Tile::new(TileId(0), Position::new(0, 0)).with_letter(letter),
                Tile::new(TileId(1), Position::new(0, 1)),
            ],
            vec![
                Tile::new(TileId(2), Position::new(1, 0)).with_letter(letter),
                Tile::new(TileId(3), Position::new(1, 1)),
            ],
        ];
        assert_eq!(
            Grid::from_rows(rows),
            Err(GridError::DuplicateLetterId { id: LetterId(5) })
        );
    }

    #[test]
    fn test_place_and_remove_letter() {
        let mut grid = Grid::new(3);
        let pos = Position::new(2, 1);
        let letter = Letter::new(LetterId(7), 'z');
        assert_eq!(grid.place_letter(pos, letter), Ok(None));
        assert_eq!(grid[pos].letter(), Some(letter));
        assert_eq!(grid.remove_letter(pos), Ok(Some(letter)));
        assert_eq!(grid.remove_letter(pos), Ok(None));
    }

    #[test]
    fn test_out_of_bounds_mutation() {
        let mut grid = Grid::new(3);
        let pos = Position::new(3, 0);
        assert_eq!(
            grid.remove_letter(pos),
            Err(GridError::OutOfBounds { pos, size: 3 })
        );
        assert!(grid.tile(pos).is_none());
    }

    proptest! {
        #[test]
        fn display_then_parse_preserves_layout(
            cells in prop::collection::vec(prop::option::of(prop::char::range('a', 'z')), 16)
        ) {
            let mut grid = Grid::new(4);
            let mut id = 0;
            let positions = (0..4).flat_map(|r| (0..4).map(move |c| Position::new(r, c)));
            for (pos, cell) in positions.zip(&cells) {
                if let Some(c) = cell {
                    grid.place_letter(pos, Letter::new(LetterId(id), *c)).unwrap();
                    id += 1;
                }
            }
            let parsed: Grid = grid.to_string().parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }
    }
}
