//! Core data structures for the Letterlace word-placement puzzle.
//!
//! This crate provides the passive board model shared by the validation engine
//! and the game session. Nothing here knows about dictionaries or word rules.
//!
//! # Overview
//!
//! 1. **Coordinates** - Where things are on the board
//!    - [`position`]: zero-based `(row, col)` coordinates and neighbour lookup
//!    - [`line`]: rows and columns as scan lines, plus [`Orientation`]
//!
//! 2. **Board contents** - What sits on the board
//!    - [`letter`]: letter tiles owned by the letter pool
//!    - [`tile`]: grid cells with an optional letter and a correctness state
//!    - [`grid`]: the square matrix of tiles
//!
//! # Examples
//!
//! ```
//! use letterlace_core::{Grid, Position, TileState};
//!
//! let grid: Grid = "
//!     cat...
//!     ......
//!     ......
//!     ......
//!     ......
//!     ......
//! "
//! .parse()?;
//!
//! assert_eq!(grid.size(), 6);
//! assert_eq!(grid.letter_count(), 3);
//! assert_eq!(grid[Position::new(0, 1)].letter_value(), Some('a'));
//! assert_eq!(grid[Position::new(0, 1)].state(), TileState::Idle);
//! # Ok::<(), letterlace_core::GridParseError>(())
//! ```

pub mod grid;
pub mod letter;
pub mod line;
pub mod position;
pub mod tile;

// Re-export commonly used types
pub use self::{
    grid::{Grid, GridError, GridParseError},
    letter::{Letter, LetterId},
    line::{Line, Orientation},
    position::Position,
    tile::{Tile, TileId, TileState},
};
