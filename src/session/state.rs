//! Session data: the persisted shape of one guessing game.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::hints::Hint;
use crate::cards::{CardId, Mode};
use crate::compare::CardComparison;
use crate::core::GameRngState;

/// Opaque session key supplied by the request layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random key.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Lifecycle of a session.
///
/// `Won`, `Lost` and `Surrendered` are terminal: the store entry is
/// cleared and the next action must start a new game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
    Surrendered,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, SessionState::Won | SessionState::Lost | SessionState::Surrendered)
    }
}

/// One entry of the guess history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub card: CardId,
    pub name: String,
    pub comparison: CardComparison,
}

/// A guessing game in progress (or just finished, in a returned snapshot).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub id: SessionId,
    pub mode: Mode,
    pub target: CardId,

    /// Wrong guesses so far. A winning guess does not count.
    pub attempts: u32,
    pub max_attempts: u32,

    pub history: Vector<GuessRecord>,

    /// Hints in the order they were revealed.
    pub hints: Vector<Hint>,
    pub revealed_tags: Vector<String>,
    pub revealed_name_chars: Vector<char>,

    pub state: SessionState,

    /// Randomness for this session's hints.
    pub rng: GameRngState,
}

impl GameSession {
    /// A fresh in-progress session.
    #[must_use]
    pub fn new(id: SessionId, mode: Mode, target: CardId, max_attempts: u32, rng: GameRngState) -> Self {
        Self {
            id,
            mode,
            target,
            attempts: 0,
            max_attempts,
            history: Vector::new(),
            hints: Vector::new(),
            revealed_tags: Vector::new(),
            revealed_name_chars: Vector::new(),
            state: SessionState::InProgress,
            rng,
        }
    }

    #[must_use]
    pub fn attempts_left(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    #[must_use]
    pub fn last_comparison(&self) -> Option<&CardComparison> {
        self.history.last().map(|r| &r.comparison)
    }

    /// Record a hint. Returns false, changing nothing, if it was already revealed.
    pub fn reveal(&mut self, hint: Hint) -> bool {
        match &hint {
            Hint::EffectTag(tag) => {
                if self.revealed_tags.contains(tag) {
                    return false;
                }
                self.revealed_tags.push_back(tag.clone());
            }
            Hint::NameChar(c) => {
                if self.revealed_name_chars.contains(c) {
                    return false;
                }
                self.revealed_name_chars.push_back(*c);
            }
        }
        self.hints.push_back(hint);
        true
    }
}
