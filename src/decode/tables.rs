//! Lookup tables for the packed card fields.
//!
//! Every table is a slice of `(code, label)` pairs in ascending code
//! order; decoders iterate them in that order, so label lists come out in
//! table order.

use serde::{Deserialize, Serialize};

pub const TYPE_MONSTER: u32 = 0x1;
pub const TYPE_SPELL: u32 = 0x2;
pub const TYPE_TRAP: u32 = 0x4;
pub const TYPE_NORMAL: u32 = 0x10;
pub const TYPE_PENDULUM: u32 = 0x100_0000;
pub const TYPE_LINK: u32 = 0x400_0000;

/// Raw `atk`/`def` value meaning "?" on the printed card.
pub const UNKNOWN_STAT: i32 = -2;

/// First effect-category code; bit `i` of the category set is code `CATEGORY_BASE + i`.
pub const CATEGORY_BASE: u32 = 1100;

pub const TYPE_LABELS: &[(u32, &str)] = &[
    (0x1, "Monster"),
    (0x2, "Spell"),
    (0x4, "Trap"),
    (0x10, "Normal"),
    (0x20, "Effect"),
    (0x40, "Fusion"),
    (0x80, "Ritual"),
    (0x100, "Trap Monster"),
    (0x200, "Spirit"),
    (0x400, "Union"),
    (0x800, "Gemini"),
    (0x1000, "Tuner"),
    (0x2000, "Synchro"),
    (0x4000, "Token"),
    (0x1_0000, "Quick-Play"),
    (0x2_0000, "Continuous"),
    (0x4_0000, "Equip"),
    (0x8_0000, "Field"),
    (0x10_0000, "Counter"),
    (0x20_0000, "Flip"),
    (0x40_0000, "Toon"),
    (0x80_0000, "Xyz"),
    (0x100_0000, "Pendulum"),
    (0x200_0000, "Special Summon"),
    (0x400_0000, "Link"),
];

pub const ATTRIBUTE_LABELS: &[(u32, &str)] = &[
    (0x01, "Earth"),
    (0x02, "Water"),
    (0x04, "Fire"),
    (0x08, "Wind"),
    (0x10, "Light"),
    (0x20, "Dark"),
    (0x40, "Divine"),
];

pub const RACE_LABELS: &[(u32, &str)] = &[
    (0x1, "Warrior"),
    (0x2, "Spellcaster"),
    (0x4, "Fairy"),
    (0x8, "Fiend"),
    (0x10, "Zombie"),
    (0x20, "Machine"),
    (0x40, "Aqua"),
    (0x80, "Pyro"),
    (0x100, "Rock"),
    (0x200, "Winged Beast"),
    (0x400, "Plant"),
    (0x800, "Insect"),
    (0x1000, "Thunder"),
    (0x2000, "Dragon"),
    (0x4000, "Beast"),
    (0x8000, "Beast-Warrior"),
    (0x1_0000, "Dinosaur"),
    (0x2_0000, "Fish"),
    (0x4_0000, "Sea Serpent"),
    (0x8_0000, "Reptile"),
    (0x10_0000, "Psychic"),
    (0x20_0000, "Divine-Beast"),
    (0x40_0000, "Creator God"),
    (0x80_0000, "Wyrm"),
    (0x100_0000, "Cyberse"),
    (0x200_0000, "Illusion"),
];

pub const CATEGORY_LABELS: &[(u32, &str)] = &[
    (1100, "Destroy Spell/Trap"),
    (1101, "Destroy Monster"),
    (1102, "Banish"),
    (1103, "Send to GY"),
    (1104, "Return to Hand"),
    (1105, "Return to Deck"),
    (1106, "Destroy Hand"),
    (1107, "Destroy Deck"),
    (1108, "Draw"),
    (1109, "Search"),
    (1110, "Recover Card"),
    (1111, "Change Position"),
    (1112, "Take Control"),
    (1113, "Change ATK/DEF"),
    (1114, "Piercing"),
    (1115, "Multiple Attacks"),
    (1116, "Attack Restriction"),
    (1117, "Direct Attack"),
    (1118, "Special Summon"),
    (1119, "Token"),
    (1120, "Type-Related"),
    (1121, "Attribute-Related"),
    (1122, "Damage LP"),
    (1123, "Gain LP"),
    (1124, "Destruction Resistance"),
    (1125, "Effect Resistance"),
    (1126, "Counter"),
    (1127, "Gamble"),
    (1128, "Fusion-Related"),
    (1129, "Synchro-Related"),
    (1130, "Xyz-Related"),
    (1131, "Negate Effect"),
];

/// Known archetype codes. Unknown codes are skipped, not labelled.
pub const ARCHETYPE_LABELS: &[(u32, &str)] = &[
    (0x1, "Ally of Justice"),
    (0x2, "Genex"),
    (0x4, "Amazoness"),
    (0x5, "Arcana Force"),
    (0x6, "Dark World"),
    (0x7, "Ancient Gear"),
    (0x8, "HERO"),
    (0x9, "Neos"),
    (0x10, "Gusto"),
    (0x13, "Meklord"),
    (0x19, "Gladiator Beast"),
    (0x1f, "Neo-Spacian"),
    (0x33, "Blackwing"),
    (0x3b, "Red-Eyes"),
    (0xdd, "Blue-Eyes"),
    (0x3008, "Elemental HERO"),
    (0x6008, "Evil HERO"),
    (0xc008, "Destiny HERO"),
];

/// Look up `code` in a `(code, label)` table.
#[must_use]
pub fn lookup(table: &[(u32, &'static str)], code: u32) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, label)| *label)
}

/// One of the eight link-arrow positions around a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LinkArrow {
    BottomLeft,
    Bottom,
    BottomRight,
    Left,
    Right,
    TopLeft,
    Top,
    TopRight,
}

impl LinkArrow {
    /// All directions in canonical (ascending bit) order.
    pub const ALL: [LinkArrow; 8] = [
        LinkArrow::BottomLeft,
        LinkArrow::Bottom,
        LinkArrow::BottomRight,
        LinkArrow::Left,
        LinkArrow::Right,
        LinkArrow::TopLeft,
        LinkArrow::Top,
        LinkArrow::TopRight,
    ];

    /// Bit of this direction in a Link monster's `def` field.
    /// 0x10 is the card itself and is never an arrow.
    #[must_use]
    pub const fn bit(self) -> i32 {
        match self {
            LinkArrow::BottomLeft => 0x001,
            LinkArrow::Bottom => 0x002,
            LinkArrow::BottomRight => 0x004,
            LinkArrow::Left => 0x008,
            LinkArrow::Right => 0x020,
            LinkArrow::TopLeft => 0x040,
            LinkArrow::Top => 0x080,
            LinkArrow::TopRight => 0x100,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            LinkArrow::BottomLeft => "↙",
            LinkArrow::Bottom => "↓",
            LinkArrow::BottomRight => "↘",
            LinkArrow::Left => "←",
            LinkArrow::Right => "→",
            LinkArrow::TopLeft => "↖",
            LinkArrow::Top => "↑",
            LinkArrow::TopRight => "↗",
        }
    }
}

impl std::fmt::Display for LinkArrow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
