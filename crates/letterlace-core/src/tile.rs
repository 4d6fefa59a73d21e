//! Grid tiles and their correctness state.

use crate::{Letter, Position};

/// Stable identity of a grid tile.
///
/// [`Grid::new`](crate::Grid::new) numbers tiles in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("T{_0}")]
pub struct TileId(pub u32);

/// Correctness classification of a tile, used for rendering feedback.
///
/// A tile covered by a valid word in one orientation and an invalid word in the
/// other is reported as [`TileState::Invalid`].
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum TileState {
    /// The tile holds no letter, or has not been validated yet.
    #[default]
    #[display("idle")]
    Idle,
    /// Every word covering the tile is in the dictionary.
    #[display("valid")]
    Valid,
    /// The tile holds a letter that no accepted word fully vouches for.
    #[display("invalid")]
    Invalid,
}

/// A single cell of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    position: Position,
    letter: Option<Letter>,
    state: TileState,
}

impl Tile {
    /// Creates an empty, idle tile.
    #[must_use]
    pub const fn new(id: TileId, position: Position) -> Self {
        Self {
            id,
            position,
            letter: None,
            state: TileState::Idle,
        }
    }

    /// Returns a copy of this tile holding `letter`.
    #[must_use]
    pub fn with_letter(mut self, letter: Letter) -> Self {
        self.letter = Some(letter);
        self
    }

    /// Returns the tile's identity.
    #[must_use]
    #[inline]
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Returns the tile's fixed board position.
    #[must_use]
    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the letter on the tile, if any.
    #[must_use]
    #[inline]
    pub const fn letter(&self) -> Option<Letter> {
        self.letter
    }

    /// Returns the character on the tile, if any.
    #[must_use]
    #[inline]
    pub fn letter_value(&self) -> Option<char> {
        self.letter.map(Letter::value)
    }

    /// Returns `true` if the tile holds a letter.
    #[must_use]
    #[inline]
    pub const fn is_occupied(&self) -> bool {
        self.letter.is_some()
    }

    /// Returns the tile's correctness state.
    #[must_use]
    #[inline]
    pub const fn state(&self) -> TileState {
        self.state
    }

    /// Overwrites the tile's correctness state.
    #[inline]
    pub fn set_state(&mut self, state: TileState) {
        self.state = state;
    }

    pub(crate) fn replace_letter(&mut self, letter: Option<Letter>) -> Option<Letter> {
        std::mem::replace(&mut self.letter, letter)
    }
}
