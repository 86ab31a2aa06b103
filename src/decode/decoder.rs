//! Decoders for packed card fields.
//!
//! Every function here is pure and total. Codes missing from a table
//! degrade to a `0x..` label (single-code fields) or are dropped
//! (flag sets, effect tags, archetypes); nothing returns an error.

use smallvec::SmallVec;

use super::tables::{
    lookup, LinkArrow, ARCHETYPE_LABELS, ATTRIBUTE_LABELS, CATEGORY_BASE, CATEGORY_LABELS, RACE_LABELS,
    TYPE_LABELS, TYPE_PENDULUM, UNKNOWN_STAT,
};
use super::tags::{DecodedTags, Stat};
use crate::cards::Card;

/// Labels for every set bit of `mask` that the type table knows, in table order.
#[must_use]
pub fn decode_type_mask(mask: u32) -> Vec<&'static str> {
    TYPE_LABELS
        .iter()
        .filter(|(bit, _)| mask & bit != 0)
        .map(|(_, label)| *label)
        .collect()
}

/// Label for a single-valued code, or `0x{code:X}` when the table lacks it.
#[must_use]
pub fn decode_single_code(code: u32, table: &[(u32, &'static str)]) -> String {
    match lookup(table, code) {
        Some(label) => label.to_string(),
        None => {
            tracing::debug!("no label for code 0x{code:X}, using raw value");
            format!("0x{code:X}")
        }
    }
}

/// Split a packed level into `(level, scale)`.
///
/// The level (or rank, or link rating) is the low byte. The scale is bits
/// 24..32 and is only reported for Pendulum cards.
#[must_use]
pub fn decode_level_packed(value: u32, type_mask: u32) -> (u32, Option<u32>) {
    let level = value & 0xFF;
    let scale = (type_mask & TYPE_PENDULUM != 0).then_some((value >> 24) & 0xFF);
    (level, scale)
}

/// Reinterpret a Link monster's `def` field as its arrows, in canonical order.
#[must_use]
pub fn decode_link_arrows(def: i32) -> SmallVec<[LinkArrow; 8]> {
    LinkArrow::ALL.into_iter().filter(|arrow| def & arrow.bit() != 0).collect()
}

/// Effect-tag labels for the set bits of `bitset`, ascending bit index.
#[must_use]
pub fn decode_effect_tags(bitset: u64) -> Vec<&'static str> {
    (0..64u32)
        .filter(|i| (bitset >> i) & 1 == 1)
        .filter_map(|i| lookup(CATEGORY_LABELS, CATEGORY_BASE + i))
        .collect()
}

/// Archetype names packed in `packed`, most significant segment first.
///
/// The value is read as 16-bit segments (four hex digits each); zero
/// segments are skipped and unknown codes are dropped silently.
#[must_use]
pub fn decode_setcode(packed: u64) -> Vec<&'static str> {
    (0..4u32)
        .rev()
        .map(|segment| ((packed >> (segment * 16)) & 0xFFFF) as u32)
        .filter(|&code| code != 0)
        .filter_map(|code| lookup(ARCHETYPE_LABELS, code))
        .collect()
}

/// A printed ATK/DEF value; `-2` is the "?" stat.
#[must_use]
pub fn decode_stat(raw: i32) -> Stat {
    if raw == UNKNOWN_STAT {
        Stat::Unknown
    } else {
        Stat::Value(raw)
    }
}

/// Decode every field of `card`.
///
/// Spells and traps carry no stats, level, scale, attribute or race.
/// Link monsters carry arrows instead of a defense.
#[must_use]
pub fn decode_card(card: &Card) -> DecodedTags {
    let to_strings = |labels: Vec<&'static str>| labels.into_iter().map(String::from).collect::<Vec<_>>();

    let mut tags = DecodedTags {
        name: card.name.clone(),
        atk: None,
        def: None,
        level: None,
        scale: None,
        arrows: None,
        types: to_strings(decode_type_mask(card.type_mask)),
        attribute: None,
        race: None,
        effect_tags: to_strings(decode_effect_tags(card.category)),
        archetypes: to_strings(decode_setcode(card.setcode)),
    };

    if card.is_monster() {
        let (level, scale) = decode_level_packed(card.level, card.type_mask);
        tags.atk = Some(decode_stat(card.atk));
        tags.level = Some(level);
        tags.scale = scale;
        tags.attribute = Some(decode_single_code(card.attribute, ATTRIBUTE_LABELS));
        tags.race = Some(decode_single_code(card.race, RACE_LABELS));
        if card.is_link() {
            tags.arrows = Some(decode_link_arrows(card.def));
        } else {
            tags.def = Some(decode_stat(card.def));
        }
    }

    tags
}
