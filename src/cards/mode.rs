//! Card pool filters a session draws its target from.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::definition::Card;
use crate::core::GuessError;

/// Repository-side filter selecting a session's card pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Monsters, excluding Normal (vanilla) monsters.
    Monster,
    Spell,
    Trap,
    /// The `Monster` pool restricted to popular cards.
    Hot,
    #[default]
    All,
}

impl Mode {
    pub const ALL_MODES: [Mode; 5] = [Mode::Monster, Mode::Spell, Mode::Trap, Mode::Hot, Mode::All];

    /// Whether `card` belongs to this mode's pool.
    #[must_use]
    pub fn matches(self, card: &Card) -> bool {
        match self {
            Mode::Monster => card.is_monster() && !card.is_normal_monster(),
            Mode::Spell => card.is_spell(),
            Mode::Trap => card.is_trap(),
            Mode::Hot => Mode::Monster.matches(card) && card.popular,
            Mode::All => true,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Monster => "monster",
            Mode::Spell => "spell",
            Mode::Trap => "trap",
            Mode::Hot => "hot",
            Mode::All => "all",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Mode::ALL_MODES
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GuessError::UnknownMode(s.to_string()))
    }
}
