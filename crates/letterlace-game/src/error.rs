use letterlace_core::{GridError, LetterId, Position};

/// Errors that can occur when moving letters in a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// The requested letter is not waiting in the pool.
    #[display("letter {letter} is not in the pool")]
    LetterNotInPool {
        /// The requested letter.
        letter: LetterId,
    },
    /// The target tile already holds a letter.
    #[display("tile {pos} already holds a letter")]
    TileOccupied {
        /// The target position.
        pos: Position,
    },
    /// The source tile holds no letter.
    #[display("tile {pos} is empty")]
    TileEmpty {
        /// The source position.
        pos: Position,
    },
    /// The board rejected the operation.
    #[display("grid error: {_0}")]
    #[from]
    Grid(GridError),
}

