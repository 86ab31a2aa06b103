//! Comparison engine: guess tags against target tags.
//!
//! `compare_card` is a pure function of its two inputs. Field order in the
//! result is fixed by `FieldKey`, so identical inputs give identical output.

use super::feedback::{ArrowEntry, CardComparison, FeedbackToken, FieldFeedback, FieldKey, SetEntry};
use crate::core::Thresholds;
use crate::decode::{DecodedTags, LinkArrow, Stat};

/// Compare with the default thresholds (ATK/DEF 500, level/scale 2).
#[must_use]
pub fn compare_card(guess: &DecodedTags, target: &DecodedTags) -> CardComparison {
    compare_card_with(guess, target, &Thresholds::default())
}

/// Compare every field of `guess` against `target`.
#[must_use]
pub fn compare_card_with(guess: &DecodedTags, target: &DecodedTags, thresholds: &Thresholds) -> CardComparison {
    let mut cmp = CardComparison::default();

    cmp.insert(
        FieldKey::Name,
        FieldFeedback::Single {
            shown: guess.name.clone(),
            token: if guess.name == target.name { FeedbackToken::Exact } else { FeedbackToken::AbsentInTarget },
        },
    );
    cmp.insert(FieldKey::Atk, compare_stat(guess.atk, target.atk, thresholds.stat));
    cmp.insert(FieldKey::Def, compare_stat(guess.def, target.def, thresholds.stat));
    cmp.insert(FieldKey::Level, compare_number(guess.level, target.level, thresholds.level));
    cmp.insert(FieldKey::Scale, compare_number(guess.scale, target.scale, thresholds.level));
    cmp.insert(FieldKey::Arrows, compare_arrows(guess.arrows(), target.arrows()));
    cmp.insert(FieldKey::Types, compare_sets(&guess.types, &target.types));
    cmp.insert(FieldKey::Attribute, compare_label(guess.attribute.as_deref(), target.attribute.as_deref()));
    cmp.insert(FieldKey::Race, compare_label(guess.race.as_deref(), target.race.as_deref()));
    cmp.insert(FieldKey::EffectTags, compare_sets(&guess.effect_tags, &target.effect_tags));
    cmp.insert(FieldKey::Archetypes, compare_sets(&guess.archetypes, &target.archetypes));

    cmp
}

/// Classify `guess` against `target` given a closeness threshold.
#[must_use]
pub fn numeric_token(guess: i64, target: i64, threshold: u32) -> FeedbackToken {
    let diff = guess.abs_diff(target);
    let up = target > guess;
    match (diff, diff <= u64::from(threshold), up) {
        (0, _, _) => FeedbackToken::Exact,
        (_, true, true) => FeedbackToken::CloseUp,
        (_, true, false) => FeedbackToken::CloseDown,
        (_, false, true) => FeedbackToken::FarUp,
        (_, false, false) => FeedbackToken::FarDown,
    }
}

fn compare_number(guess: Option<u32>, target: Option<u32>, threshold: u32) -> FieldFeedback {
    match (guess, target) {
        (Some(g), Some(t)) => FieldFeedback::Single {
            shown: g.to_string(),
            token: numeric_token(i64::from(g), i64::from(t), threshold),
        },
        _ => FieldFeedback::NotApplicable,
    }
}

fn compare_stat(guess: Option<Stat>, target: Option<Stat>, threshold: u32) -> FieldFeedback {
    let (Some(g), Some(t)) = (guess, target) else {
        return FieldFeedback::NotApplicable;
    };
    let token = match (g, t) {
        (Stat::Value(g), Stat::Value(t)) => numeric_token(i64::from(g), i64::from(t), threshold),
        (Stat::Unknown, Stat::Unknown) => FeedbackToken::Exact,
        // "?" has no magnitude to compare against a number.
        _ => FeedbackToken::Unknown,
    };
    FieldFeedback::Single { shown: g.to_string(), token }
}

fn compare_label(guess: Option<&str>, target: Option<&str>) -> FieldFeedback {
    match (guess, target) {
        (Some(g), Some(t)) => FieldFeedback::Single {
            shown: g.to_string(),
            token: if g == t { FeedbackToken::Match } else { FeedbackToken::AbsentInTarget },
        },
        _ => FieldFeedback::NotApplicable,
    }
}

fn compare_sets(guess: &[String], target: &[String]) -> FieldFeedback {
    let entries = guess
        .iter()
        .map(|label| SetEntry {
            label: label.clone(),
            token: if target.contains(label) { FeedbackToken::Match } else { FeedbackToken::AbsentInTarget },
        })
        .collect();
    let target_only = target.iter().filter(|label| !guess.contains(label)).cloned().collect();

    FieldFeedback::Set { entries, target_only, target_len: target.len() }
}

/// Non-Link cards take part with no arrows, so a Link target's layout
/// still shows against any guess.
fn compare_arrows(guess: &[LinkArrow], target: &[LinkArrow]) -> FieldFeedback {
    let entries = LinkArrow::ALL
        .into_iter()
        .map(|arrow| {
            let token = match (guess.contains(&arrow), target.contains(&arrow)) {
                (true, true) => Some(FeedbackToken::Match),
                (true, false) => Some(FeedbackToken::AbsentInTarget),
                (false, true) => Some(FeedbackToken::AbsentInGuess),
                (false, false) => None,
            };
            ArrowEntry { arrow, token }
        })
        .collect();
    FieldFeedback::Arrows(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId};

    fn tags(card: Card) -> DecodedTags {
        DecodedTags::from(&card)
    }

    #[test]
    fn test_numeric_token_thresholds() {
        assert_eq!(numeric_token(3000, 3000, 500), FeedbackToken::Exact);
        assert_eq!(numeric_token(2500, 3000, 500), FeedbackToken::CloseUp);
        assert_eq!(numeric_token(3500, 3000, 500), FeedbackToken::CloseDown);
        assert_eq!(numeric_token(2499, 3000, 500), FeedbackToken::FarUp);
        assert_eq!(numeric_token(3501, 3000, 500), FeedbackToken::FarDown);
        assert_eq!(numeric_token(6, 8, 2), FeedbackToken::CloseUp);
        assert_eq!(numeric_token(11, 8, 2), FeedbackToken::FarDown);
    }

    #[test]
    fn test_unknown_stat() {
        let a = tags(Card::new(CardId::new(1), "A").with_type(0x21).with_stats(-2, 1000));
        let b = tags(Card::new(CardId::new(2), "B").with_type(0x21).with_stats(-2, -2));
        let cmp = compare_card(&a, &b);

        assert_eq!(cmp.token(FieldKey::Atk), FeedbackToken::Exact);
        assert_eq!(cmp.token(FieldKey::Def), FeedbackToken::Unknown);
        assert_eq!(
            cmp.get(FieldKey::Atk),
            Some(&FieldFeedback::Single { shown: "?".into(), token: FeedbackToken::Exact })
        );
    }

    #[test]
    fn test_spell_against_monster_is_unknown() {
        let spell = tags(Card::new(CardId::new(1), "Spell").with_type(0x2));
        let monster = tags(Card::new(CardId::new(2), "Monster").with_type(0x21).with_stats(1000, 1000).with_level(4));
        let cmp = compare_card(&spell, &monster);

        for key in [FieldKey::Atk, FieldKey::Def, FieldKey::Level, FieldKey::Scale, FieldKey::Attribute, FieldKey::Race] {
            assert_eq!(cmp.token(key), FeedbackToken::Unknown, "{key:?}");
        }
        assert_eq!(cmp.token(FieldKey::Arrows), FeedbackToken::Unknown);
        assert_eq!(cmp.set_token(FieldKey::Types, "Spell"), Some(FeedbackToken::AbsentInTarget));
        assert_eq!(cmp.set_token(FieldKey::Types, "Effect"), Some(FeedbackToken::AbsentInGuess));
    }

    #[test]
    fn test_scale_only_between_pendulums() {
        let pendulum = tags(Card::new(CardId::new(1), "P").with_type(0x1000021).with_level((4 << 24) | 4));
        let other = tags(Card::new(CardId::new(2), "Q").with_type(0x1000021).with_level((7 << 24) | 7));
        let plain = tags(Card::new(CardId::new(3), "R").with_type(0x21).with_level(4));

        let cmp = compare_card(&pendulum, &other);
        assert_eq!(cmp.token(FieldKey::Scale), FeedbackToken::FarUp);
        assert_eq!(cmp.token(FieldKey::Level), FeedbackToken::FarUp);

        let cmp = compare_card(&pendulum, &plain);
        assert_eq!(cmp.token(FieldKey::Scale), FeedbackToken::Unknown);
        assert_eq!(cmp.token(FieldKey::Level), FeedbackToken::Exact);
    }

    #[test]
    fn test_arrows_enumerate_all_directions() {
        let guess = tags(Card::new(CardId::new(1), "G").with_type(0x4000021).with_stats(1000, 0x002 | 0x080));
        let target = tags(Card::new(CardId::new(2), "T").with_type(0x4000021).with_stats(1000, 0x080 | 0x100));
        let cmp = compare_card(&guess, &target);

        match cmp.get(FieldKey::Arrows) {
            Some(FieldFeedback::Arrows(entries)) => assert_eq!(entries.len(), 8),
            other => panic!("unexpected arrows feedback: {other:?}"),
        }
        assert_eq!(cmp.arrow_token(LinkArrow::Top), Some(FeedbackToken::Match));
        assert_eq!(cmp.arrow_token(LinkArrow::Bottom), Some(FeedbackToken::AbsentInTarget));
        assert_eq!(cmp.arrow_token(LinkArrow::TopRight), Some(FeedbackToken::AbsentInGuess));
        assert_eq!(cmp.arrow_token(LinkArrow::Left), None);
        // Link monsters have no defense to compare.
        assert_eq!(cmp.token(FieldKey::Def), FeedbackToken::Unknown);
    }

    #[test]
    fn test_arrows_against_non_link_guess() {
        let guess = tags(Card::new(CardId::new(1), "G").with_type(0x21).with_stats(1000, 0x080));
        let target = tags(Card::new(CardId::new(2), "T").with_type(0x4000021).with_stats(1000, 0x080 | 0x100));
        let cmp = compare_card(&guess, &target);

        match cmp.get(FieldKey::Arrows) {
            Some(FieldFeedback::Arrows(entries)) => assert_eq!(entries.len(), 8),
            other => panic!("unexpected arrows feedback: {other:?}"),
        }
        // The guess's defense is not read as arrows.
        assert_eq!(cmp.arrow_token(LinkArrow::Top), Some(FeedbackToken::AbsentInGuess));
        assert_eq!(cmp.arrow_token(LinkArrow::TopRight), Some(FeedbackToken::AbsentInGuess));
        assert_eq!(cmp.arrow_token(LinkArrow::Bottom), None);
        assert_eq!(cmp.token(FieldKey::Arrows), FeedbackToken::AbsentInGuess);

        let reverse = compare_card(&target, &guess);
        assert_eq!(reverse.arrow_token(LinkArrow::Top), Some(FeedbackToken::AbsentInTarget));
        assert_eq!(reverse.token(FieldKey::Arrows), FeedbackToken::AbsentInTarget);
    }

    #[test]
    fn test_arrows_unlit_on_both_sides() {
        let a = tags(Card::new(CardId::new(1), "A").with_type(0x21).with_stats(1000, 1000));
        let b = tags(Card::new(CardId::new(2), "B").with_type(0x2));
        let cmp = compare_card(&a, &b);

        match cmp.get(FieldKey::Arrows) {
            Some(FieldFeedback::Arrows(entries)) => assert!(entries.iter().all(|e| e.token.is_none())),
            other => panic!("unexpected arrows feedback: {other:?}"),
        }
        assert_eq!(cmp.token(FieldKey::Arrows), FeedbackToken::Unknown);
    }

    #[test]
    fn test_custom_thresholds() {
        let guess = tags(Card::new(CardId::new(1), "G").with_type(0x21).with_stats(2000, 0).with_level(4));
        let target = tags(Card::new(CardId::new(2), "T").with_type(0x21).with_stats(2400, 0).with_level(5));
        let tight = Thresholds { stat: 300, level: 0 };
        let cmp = compare_card_with(&guess, &target, &tight);

        assert_eq!(cmp.token(FieldKey::Atk), FeedbackToken::FarUp);
        assert_eq!(cmp.token(FieldKey::Level), FeedbackToken::FarUp);
    }
}
