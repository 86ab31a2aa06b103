//! Decoded, human-readable view of a card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::decoder::decode_card;
use super::tables::LinkArrow;
use crate::cards::Card;

/// A printed ATK or DEF.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stat {
    Value(i32),
    /// Printed as "?".
    Unknown,
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stat::Value(v) => write!(f, "{v}"),
            Stat::Unknown => f.write_str("?"),
        }
    }
}

/// Read-only snapshot of a card's decoded fields.
///
/// `None` marks a field that does not apply to the card: stats, level,
/// attribute and race for spells and traps, `def` for Link monsters,
/// `scale` for non-Pendulum cards, `arrows` for non-Link cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedTags {
    pub name: String,
    pub atk: Option<Stat>,
    pub def: Option<Stat>,
    pub level: Option<u32>,
    pub scale: Option<u32>,
    pub arrows: Option<SmallVec<[LinkArrow; 8]>>,
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub race: Option<String>,
    pub effect_tags: Vec<String>,
    pub archetypes: Vec<String>,
}

impl DecodedTags {
    /// Arrows of a Link monster; empty for every other card.
    #[must_use]
    pub fn arrows(&self) -> &[LinkArrow] {
        self.arrows.as_deref().unwrap_or(&[])
    }

    #[must_use]
    pub fn has_type(&self, label: &str) -> bool {
        self.types.iter().any(|t| t == label)
    }

    /// Characters of the name that can be revealed as hints, first
    /// occurrence order, whitespace excluded.
    #[must_use]
    pub fn name_chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = Vec::new();
        for c in self.name.chars().filter(|c| !c.is_whitespace()) {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        chars
    }
}

impl From<&Card> for DecodedTags {
    fn from(card: &Card) -> Self {
        decode_card(card)
    }
}
