use letterlace_core::{Grid, GridError, Letter, LetterId, Position};
use letterlace_validator::{BoardValidator, Dictionary, ValidationResult};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::GameError;

/// A Letterlace game session.
///
/// Every letter of the session lives in exactly one place: either in the pool
/// or on one tile of the board.
///
/// # Example
///
/// ```
/// use letterlace_core::{LetterId, Position};
/// use letterlace_game::Game;
///
/// let mut game = Game::new(5, "dog".chars());
/// assert_eq!(game.pool().len(), 3);
///
/// game.place(Position::new(2, 2), LetterId(0))?;
/// assert_eq!(game.pool().len(), 2);
/// assert_eq!(game.grid()[Position::new(2, 2)].letter_value(), Some('d'));
/// # Ok::<(), letterlace_game::GameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    pool: Vec<Letter>,
}

impl Game {
    /// Creates a game with an empty `size`×`size` board and a pool of letters.
    ///
    /// Letters get ids `0, 1, 2, ...` in the order they are given.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new<I>(size: u8, letters: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let pool = letters
            .into_iter()
            .zip(0..)
            .map(|(value, id)| Letter::new(LetterId(id), value))
            .collect();
        Self {
            grid: Grid::new(size),
            pool,
        }
    }

    /// Creates a game like [`Game::new`], with the pool order shuffled by a
    /// generator seeded with `seed`.
    ///
    /// Letter ids still follow the order of `letters`; only the pool order changes.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn with_shuffled_pool<I>(size: u8, letters: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut game = Self::new(size, letters);
        let mut rng = Pcg64::seed_from_u64(seed);
        game.pool.shuffle(&mut rng);
        game
    }

    /// Returns the current board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the letters waiting to be placed, in pool order.
    #[must_use]
    pub fn pool(&self) -> &[Letter] {
        &self.pool
    }

    /// Returns `true` if every letter is on the board.
    #[must_use]
    pub fn is_pool_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Moves a letter from the pool onto an empty tile.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Grid`] if `pos` is off the board,
    /// [`GameError::TileOccupied`] if the tile already holds a letter and
    /// [`GameError::LetterNotInPool`] if the letter is not waiting in the pool.
    pub fn place(&mut self, pos: Position, letter: LetterId) -> Result<(), GameError> {
        self.ensure_empty(pos)?;
        let index = self
            .pool
            .iter()
            .position(|l| l.id() == letter)
            .ok_or(GameError::LetterNotInPool { letter })?;

        let letter = self.pool.remove(index);
        self.grid.place_letter(pos, letter)?;
        log::trace!("placed {} ({}) at {pos}", letter.id(), letter.value());
        Ok(())
    }

    /// Takes the letter off the tile at `pos` and returns it to the pool.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Grid`] if `pos` is off the board and
    /// [`GameError::TileEmpty`] if the tile holds no letter.
    pub fn remove(&mut self, pos: Position) -> Result<LetterId, GameError> {
        let letter = self
            .grid
            .remove_letter(pos)?
            .ok_or(GameError::TileEmpty { pos })?;
        self.pool.push(letter);
        log::trace!("returned {} ({}) from {pos}", letter.id(), letter.value());
        Ok(letter.id())
    }

    /// Moves a placed letter from one tile to an empty tile.
    ///
    /// Moving a letter onto its own tile does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Grid`] if either position is off the board,
    /// [`GameError::TileEmpty`] if `from` holds no letter and
    /// [`GameError::TileOccupied`] if `to` already holds one.
    pub fn move_letter(&mut self, from: Position, to: Position) -> Result<(), GameError> {
        let size = self.grid.size();
        let source = self
            .grid
            .tile(from)
            .ok_or(GridError::OutOfBounds { pos: from, size })?;
        if !source.is_occupied() {
            return Err(GameError::TileEmpty { pos: from });
        }
        if from == to {
            return Ok(());
        }
        self.ensure_empty(to)?;

        if let Some(letter) = self.grid.remove_letter(from)? {
            self.grid.place_letter(to, letter)?;
            log::trace!("moved {} from {from} to {to}", letter.id());
        }
        Ok(())
    }

    /// Returns every placed letter to the pool, in row-major board order.
    pub fn clear(&mut self) {
        let positions: Vec<_> = self.grid.occupied_positions().collect();
        for pos in positions {
            if let Ok(Some(letter)) = self.grid.remove_letter(pos) {
                self.pool.push(letter);
            }
        }
        log::trace!("cleared board, {} letters in pool", self.pool.len());
    }

    /// Validates the current board with the connectivity gate.
    #[must_use]
    pub fn submit<D>(&self, validator: &BoardValidator<D>) -> ValidationResult
    where
        D: Dictionary,
    {
        let result = validator.validate(&self.grid);
        log::debug!(
            "submitted board with {} letters left in pool: {}",
            self.pool.len(),
            result.verdict()
        );
        result
    }

    /// Returns `true` if every letter is placed and the board is accepted.
    #[must_use]
    pub fn is_solved<D>(&self, validator: &BoardValidator<D>) -> bool
    where
        D: Dictionary,
    {
        self.is_pool_empty() && self.submit(validator).all_valid()
    }

    fn ensure_empty(&self, pos: Position) -> Result<(), GameError> {
        let size = self.grid.size();
        let tile = self
            .grid
            .tile(pos)
            .ok_or(GridError::OutOfBounds { pos, size })?;
        if tile.is_occupied() {
            return Err(GameError::TileOccupied { pos });
        }
        Ok(())
    }
}
