//! Game configuration.
//!
//! Holds the tunable rules of a guessing session: the default attempt
//! budget, the closeness thresholds used by the comparison engine, the
//! attempt counts at which hints fire, and the seed source.

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Closeness thresholds for numeric fields.
///
/// A difference at or below the threshold is "close", above it "far".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// ATK and DEF threshold.
    pub stat: u32,
    /// Level/rank and pendulum scale threshold.
    pub level: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { stat: 500, level: 2 }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Attempt budget used when the caller gives none (default: 5).
    pub default_max_attempts: u32,

    /// Numeric closeness thresholds.
    pub thresholds: Thresholds,

    /// History length that reveals one of the target's effect tags.
    pub effect_tag_hint_at: usize,

    /// History length that reveals one character of the target's name.
    pub name_char_hint_at: usize,

    /// Seed for target sampling and hints. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_max_attempts: 5,
            thresholds: Thresholds::default(),
            effect_tag_hint_at: 2,
            name_char_hint_at: 5,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from TOML. Missing keys keep their defaults.
    ///
    /// ```
    /// use card_guess::core::GameConfig;
    ///
    /// let config = GameConfig::from_toml_str("default_max_attempts = 8\nseed = 1").unwrap();
    /// assert_eq!(config.default_max_attempts, 8);
    /// assert_eq!(config.seed, Some(1));
    /// assert_eq!(config.thresholds.stat, 500);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the default attempt budget.
    #[must_use]
    pub fn with_default_max_attempts(mut self, attempts: u32) -> Self {
        self.default_max_attempts = attempts;
        self
    }

    /// Set the numeric thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Clamp a requested attempt budget; `None` selects the default.
    #[must_use]
    pub fn attempts_or_default(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.default_max_attempts).max(1)
    }
}
