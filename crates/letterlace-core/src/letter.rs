//! Letter tiles.

use std::fmt::{self, Display};

/// Stable identity of a letter tile.
///
/// Letter identities are independent of tile identities: the same letter may
/// move between grid tiles while keeping its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("L{_0}")]
pub struct LetterId(pub u32);

/// A letter tile from the player's pool.
///
/// A grid tile holds a copy of the letter it currently displays; ownership of
/// the letter stays with the pool collaborator, which guarantees that a letter
/// id appears on at most one tile at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    id: LetterId,
    value: char,
}

impl Letter {
    /// Creates a letter with the given identity and character.
    #[must_use]
    #[inline]
    pub const fn new(id: LetterId, value: char) -> Self {
        Self { id, value }
    }

    /// Returns the letter's identity.
    #[must_use]
    #[inline]
    pub const fn id(self) -> LetterId {
        self.id
    }

    /// Returns the character shown on the letter.
    #[must_use]
    #[inline]
    pub const fn value(self) -> char {
        self.value
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
