//! Card records - raw packed card data.
//!
//! `Card` holds the fields exactly as the card database stores them.
//! Nothing here interprets the packed integers beyond the type flags
//! needed for mode filtering; see `decode` for the human-readable view.

use serde::{Deserialize, Serialize};

use crate::decode::tables::{TYPE_LINK, TYPE_MONSTER, TYPE_NORMAL, TYPE_PENDULUM, TYPE_SPELL, TYPE_TRAP};

/// Unique identifier for a card (the database passcode).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Immutable card record.
///
/// ## Example
///
/// ```
/// use card_guess::cards::{Card, CardId};
///
/// let dragon = Card::new(CardId::new(89631139), "Blue-Eyes White Dragon")
///     .with_type(0x11)
///     .with_stats(3000, 2500)
///     .with_level(8);
///
/// assert!(dragon.is_monster());
/// assert!(dragon.is_normal_monster());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,

    /// Category flags (Monster/Spell/Trap plus sub-types); several may be set.
    pub type_mask: u32,

    /// Race bitmask, normally a single bit.
    pub race: u32,

    /// Attribute bitmask, normally a single bit.
    pub attribute: u32,

    pub atk: i32,

    /// Defense, or the link-arrow bitmask for Link monsters.
    pub def: i32,

    /// Level/rank in the low byte, pendulum scale in bits 24..32.
    pub level: u32,

    /// 64-bit effect category set.
    pub category: u64,

    /// Concatenated 16-bit archetype codes.
    pub setcode: u64,

    /// Set by the popularity integration.
    pub popular: bool,
}

impl Card {
    /// Create a card with every packed field zeroed.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            type_mask: 0,
            race: 0,
            attribute: 0,
            atk: 0,
            def: 0,
            level: 0,
            category: 0,
            setcode: 0,
            popular: false,
        }
    }

    #[must_use]
    pub fn with_type(mut self, type_mask: u32) -> Self {
        self.type_mask = type_mask;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, atk: i32, def: i32) -> Self {
        self.atk = atk;
        self.def = def;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_race(mut self, race: u32) -> Self {
        self.race = race;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: u32) -> Self {
        self.attribute = attribute;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: u64) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_setcode(mut self, setcode: u64) -> Self {
        self.setcode = setcode;
        self
    }

    #[must_use]
    pub fn with_popular(mut self, popular: bool) -> Self {
        self.popular = popular;
        self
    }

    #[must_use]
    pub fn is_monster(&self) -> bool {
        self.type_mask & TYPE_MONSTER != 0
    }

    #[must_use]
    pub fn is_spell(&self) -> bool {
        self.type_mask & TYPE_SPELL != 0
    }

    #[must_use]
    pub fn is_trap(&self) -> bool {
        self.type_mask & TYPE_TRAP != 0
    }

    /// Monster with the Normal sub-type (no effect text).
    #[must_use]
    pub fn is_normal_monster(&self) -> bool {
        self.is_monster() && self.type_mask & TYPE_NORMAL != 0
    }

    #[must_use]
    pub fn is_link(&self) -> bool {
        self.type_mask & TYPE_LINK != 0
    }

    #[must_use]
    pub fn is_pendulum(&self) -> bool {
        self.type_mask & TYPE_PENDULUM != 0
    }
}
