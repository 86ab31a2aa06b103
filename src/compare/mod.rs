//! Comparison engine and its feedback vocabulary.
//!
//! ## Field Rules
//!
//! - Numeric (atk, def, level, scale): `exact`, `close-*` within the
//!   threshold, `far-*` beyond it; `-up` when the target is higher
//! - Name: `exact` or `absent-in-target`
//! - Attribute, race: `match` or `absent-in-target`
//! - Sets (types, effect tags, archetypes): each guess element `match` or
//!   `absent-in-target`, plus the target-only elements
//! - Arrows: all eight directions, every guess; non-Link cards have none
//!   lit, and the field is `unknown` when neither card has an arrow
//! - Any field missing on either side: `unknown`

pub mod engine;
pub mod feedback;

pub use engine::{compare_card, compare_card_with, numeric_token};
pub use feedback::{ArrowEntry, CardComparison, FeedbackToken, FieldFeedback, FieldKey, SetEntry};
