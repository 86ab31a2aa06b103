//! Attribute decoder: packed card integers to readable tags.
//!
//! - `tables`: bit/code to label tables and the `LinkArrow` directions
//! - `decoder`: pure, total decode functions for each packed field
//! - `tags`: `DecodedTags`, the per-card view the comparison engine reads

pub mod decoder;
pub mod tables;
pub mod tags;

pub use decoder::{
    decode_card, decode_effect_tags, decode_level_packed, decode_link_arrows, decode_setcode,
    decode_single_code, decode_stat, decode_type_mask,
};
pub use tables::LinkArrow;
pub use tags::{DecodedTags, Stat};
