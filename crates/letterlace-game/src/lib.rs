//! Game session management for Letterlace.
//!
//! A [`Game`] owns the board and the pool of letters not yet placed. It is the
//! only place where letters move; the validation engine only ever receives
//! snapshots of its board.
//!
//! # Examples
//!
//! ```
//! use letterlace_core::{LetterId, Position};
//! use letterlace_game::Game;
//! use letterlace_validator::{BoardValidator, WordList};
//!
//! let mut game = Game::new(6, "tca".chars());
//! game.place(Position::new(0, 0), LetterId(1))?;
//! game.place(Position::new(0, 1), LetterId(2))?;
//! game.place(Position::new(0, 2), LetterId(0))?;
//!
//! let validator = BoardValidator::new(WordList::from_iter(["cat"]));
//! assert!(game.is_solved(&validator));
//! # Ok::<(), letterlace_game::GameError>(())
//! ```

pub use self::{error::GameError, game::Game};

mod error;
mod game;
