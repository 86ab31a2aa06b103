//! Feedback vocabulary produced by the comparison engine.
//!
//! A `CardComparison` maps every `FieldKey` to a `FieldFeedback`. The
//! presentation layer reads only these shapes and the `FeedbackToken` names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::decode::LinkArrow;

/// Classification of one compared value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackToken {
    Exact,
    /// Within the threshold, target is higher.
    CloseUp,
    /// Within the threshold, target is lower.
    CloseDown,
    FarUp,
    FarDown,
    /// Set element present on both sides.
    Match,
    /// Present on the target only.
    AbsentInGuess,
    /// Present on the guess only.
    AbsentInTarget,
    /// Not applicable to one side.
    Unknown,
}

impl FeedbackToken {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FeedbackToken::Exact => "exact",
            FeedbackToken::CloseUp => "close-up",
            FeedbackToken::CloseDown => "close-down",
            FeedbackToken::FarUp => "far-up",
            FeedbackToken::FarDown => "far-down",
            FeedbackToken::Match => "match",
            FeedbackToken::AbsentInGuess => "absent-in-guess",
            FeedbackToken::AbsentInTarget => "absent-in-target",
            FeedbackToken::Unknown => "unknown",
        }
    }

    /// True for `exact` and `match`.
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, FeedbackToken::Exact | FeedbackToken::Match)
    }

    /// True for the `far-*` and `absent-*` tokens.
    #[must_use]
    pub const fn is_miss(self) -> bool {
        matches!(
            self,
            FeedbackToken::FarUp | FeedbackToken::FarDown | FeedbackToken::AbsentInGuess | FeedbackToken::AbsentInTarget
        )
    }
}

impl std::fmt::Display for FeedbackToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compared fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKey {
    Name,
    Atk,
    Def,
    Level,
    Arrows,
    Scale,
    Types,
    Attribute,
    Race,
    EffectTags,
    Archetypes,
}

impl FieldKey {
    pub const ALL: [FieldKey; 11] = [
        FieldKey::Name,
        FieldKey::Atk,
        FieldKey::Def,
        FieldKey::Level,
        FieldKey::Arrows,
        FieldKey::Scale,
        FieldKey::Types,
        FieldKey::Attribute,
        FieldKey::Race,
        FieldKey::EffectTags,
        FieldKey::Archetypes,
    ];
}

/// One guess-side element of a set-valued field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetEntry {
    pub label: String,
    pub token: FeedbackToken,
}

/// One of the eight arrow positions.
///
/// `token` is `None` when neither card points that way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrowEntry {
    pub arrow: LinkArrow,
    pub token: Option<FeedbackToken>,
}

/// Feedback for one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldFeedback {
    /// The field does not apply to the guess, the target, or both.
    NotApplicable,

    /// Name, attribute, race and the numeric fields. `shown` is the
    /// guess's displayed value.
    Single { shown: String, token: FeedbackToken },

    /// Type labels, effect tags, archetypes.
    Set {
        /// Every guess element, classified.
        entries: Vec<SetEntry>,
        /// Target elements the guess lacks (`absent-in-guess`).
        target_only: Vec<String>,
        /// Number of elements on the target.
        target_len: usize,
    },

    /// Always all eight directions, canonical order, for every pair of
    /// cards. A non-Link card simply has no lit arrows.
    Arrows(Vec<ArrowEntry>),
}

impl FieldFeedback {
    /// Overall token for the field.
    #[must_use]
    pub fn token(&self) -> FeedbackToken {
        match self {
            FieldFeedback::NotApplicable => FeedbackToken::Unknown,
            FieldFeedback::Single { token, .. } => *token,
            FieldFeedback::Set { .. } | FieldFeedback::Arrows(_) => {
                let tokens = self.tokens();
                if tokens.is_empty() && matches!(self, FieldFeedback::Arrows(_)) {
                    // Neither card has an arrow.
                    FeedbackToken::Unknown
                } else if tokens.contains(&FeedbackToken::AbsentInTarget) {
                    FeedbackToken::AbsentInTarget
                } else if tokens.contains(&FeedbackToken::AbsentInGuess) {
                    FeedbackToken::AbsentInGuess
                } else {
                    FeedbackToken::Match
                }
            }
        }
    }

    /// Every token the field carries, element by element.
    #[must_use]
    pub fn tokens(&self) -> Vec<FeedbackToken> {
        match self {
            FieldFeedback::NotApplicable => vec![FeedbackToken::Unknown],
            FieldFeedback::Single { token, .. } => vec![*token],
            FieldFeedback::Set { entries, target_only, .. } => entries
                .iter()
                .map(|e| e.token)
                .chain(target_only.iter().map(|_| FeedbackToken::AbsentInGuess))
                .collect(),
            FieldFeedback::Arrows(entries) => entries.iter().filter_map(|e| e.token).collect(),
        }
    }
}

/// Per-field feedback for one guess.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardComparison {
    fields: BTreeMap<FieldKey, FieldFeedback>,
}

impl CardComparison {
    pub(crate) fn insert(&mut self, key: FieldKey, feedback: FieldFeedback) {
        self.fields.insert(key, feedback);
    }

    #[must_use]
    pub fn get(&self, key: FieldKey) -> Option<&FieldFeedback> {
        self.fields.get(&key)
    }

    /// Overall token for `key`; `unknown` if the field is absent.
    #[must_use]
    pub fn token(&self, key: FieldKey) -> FeedbackToken {
        self.get(key).map_or(FeedbackToken::Unknown, FieldFeedback::token)
    }

    /// Token for one element of a set-valued field, guess-side or target-only.
    #[must_use]
    pub fn set_token(&self, key: FieldKey, label: &str) -> Option<FeedbackToken> {
        match self.get(key)? {
            FieldFeedback::Set { entries, target_only, .. } => entries
                .iter()
                .find(|e| e.label == label)
                .map(|e| e.token)
                .or_else(|| target_only.iter().any(|l| l == label).then_some(FeedbackToken::AbsentInGuess)),
            _ => None,
        }
    }

    /// Token for one arrow position, `None` if unlit on both cards.
    #[must_use]
    pub fn arrow_token(&self, arrow: LinkArrow) -> Option<FeedbackToken> {
        match self.get(FieldKey::Arrows)? {
            FieldFeedback::Arrows(entries) => entries.iter().find(|e| e.arrow == arrow).and_then(|e| e.token),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &FieldFeedback)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    /// No field carries a `far-*` or `absent-*` token.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.fields.values().all(|f| f.tokens().iter().all(|t| !t.is_miss()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_names() {
        assert_eq!(FeedbackToken::CloseUp.to_string(), "close-up");
        assert_eq!(FeedbackToken::AbsentInGuess.as_str(), "absent-in-guess");
        assert_eq!(serde_json::to_string(&FeedbackToken::FarDown).unwrap(), "\"far-down\"");
    }

    #[test]
    fn test_hit_and_miss() {
        assert!(FeedbackToken::Exact.is_hit());
        assert!(FeedbackToken::Match.is_hit());
        assert!(!FeedbackToken::CloseUp.is_hit());
        assert!(!FeedbackToken::CloseUp.is_miss());
        assert!(!FeedbackToken::Unknown.is_miss());
        assert!(FeedbackToken::AbsentInGuess.is_miss());
    }

    #[test]
    fn test_set_summary_token() {
        let all_match = FieldFeedback::Set {
            entries: vec![SetEntry { label: "Draw".into(), token: FeedbackToken::Match }],
            target_only: vec![],
            target_len: 1,
        };
        assert_eq!(all_match.token(), FeedbackToken::Match);

        let missing = FieldFeedback::Set {
            entries: vec![SetEntry { label: "Draw".into(), token: FeedbackToken::Match }],
            target_only: vec!["Search".into()],
            target_len: 2,
        };
        assert_eq!(missing.token(), FeedbackToken::AbsentInGuess);
        assert_eq!(missing.tokens(), vec![FeedbackToken::Match, FeedbackToken::AbsentInGuess]);
    }

    #[test]
    fn test_empty_comparison_lookups() {
        let cmp = CardComparison::default();
        assert_eq!(cmp.token(FieldKey::Atk), FeedbackToken::Unknown);
        assert_eq!(cmp.set_token(FieldKey::Types, "Monster"), None);
        assert!(cmp.is_perfect());
    }
}
