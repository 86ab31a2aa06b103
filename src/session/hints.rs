//! Hint scheduler.
//!
//! Hints are an ordered list of `(history length, generator)` rules. After
//! every wrong guess the scheduler runs the generators whose trigger equals
//! the new history length. Generators are trait objects so new hint kinds
//! can be added without touching the session machine.

use serde::{Deserialize, Serialize};

use super::state::GameSession;
use crate::core::{GameConfig, GameRng};
use crate::decode::DecodedTags;

/// A revealed hint.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hint {
    /// One of the target's effect tags.
    EffectTag(String),
    /// One character of the target's name.
    NameChar(char),
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hint::EffectTag(tag) => write!(f, "Hint: the target card has the effect tag \"{tag}\""),
            Hint::NameChar(c) => write!(f, "Hint: the target card's name contains \"{c}\""),
        }
    }
}

/// What a generator may look at.
pub struct HintContext<'a> {
    pub target: &'a DecodedTags,
    /// Decoded tags of every guess in the history, oldest first.
    pub guesses: &'a [DecodedTags],
    pub session: &'a GameSession,
}

/// Produces at most one new hint.
pub trait HintGenerator: Send + Sync {
    /// Pick a hint that is not yet revealed, or `None` if nothing is left.
    fn generate(&self, ctx: &HintContext<'_>, rng: &mut GameRng) -> Option<Hint>;
}

/// Reveals a target effect tag that no guess has shown and no hint has revealed.
#[derive(Clone, Debug, Default)]
pub struct EffectTagHint;

impl HintGenerator for EffectTagHint {
    fn generate(&self, ctx: &HintContext<'_>, rng: &mut GameRng) -> Option<Hint> {
        let remaining: Vec<&String> = ctx
            .target
            .effect_tags
            .iter()
            .filter(|tag| !ctx.guesses.iter().any(|g| g.effect_tags.contains(tag)))
            .filter(|tag| !ctx.session.revealed_tags.contains(tag))
            .collect();
        rng.choose(&remaining).map(|tag| Hint::EffectTag((*tag).clone()))
    }
}

/// Reveals one not-yet-revealed, non-whitespace character of the target's name.
#[derive(Clone, Debug, Default)]
pub struct NameCharHint;

impl HintGenerator for NameCharHint {
    fn generate(&self, ctx: &HintContext<'_>, rng: &mut GameRng) -> Option<Hint> {
        let remaining: Vec<char> = ctx
            .target
            .name_chars()
            .into_iter()
            .filter(|c| !ctx.session.revealed_name_chars.contains(c))
            .collect();
        rng.choose(&remaining).copied().map(Hint::NameChar)
    }
}

/// Ordered hint rules.
#[derive(Default)]
pub struct HintScheduler {
    rules: Vec<(usize, Box<dyn HintGenerator>)>,
}

impl HintScheduler {
    /// A scheduler with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard rules: an effect tag, then a name character.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new()
            .with_rule(config.effect_tag_hint_at, EffectTagHint)
            .with_rule(config.name_char_hint_at, NameCharHint)
    }

    /// Add a rule firing when the history reaches `at` entries.
    #[must_use]
    pub fn with_rule(mut self, at: usize, generator: impl HintGenerator + 'static) -> Self {
        self.rules.push((at, Box::new(generator)));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run the rules triggered by the session's current history length and
    /// record what they reveal. Returns the newly revealed hints.
    pub fn on_miss(
        &self,
        session: &mut GameSession,
        target: &DecodedTags,
        guesses: &[DecodedTags],
        rng: &mut GameRng,
    ) -> Vec<Hint> {
        let len = session.history.len();
        let mut revealed = Vec::new();

        for (_, generator) in self.rules.iter().filter(|(at, _)| *at == len) {
            let ctx = HintContext { target, guesses, session: &*session };
            if let Some(hint) = generator.generate(&ctx, rng) {
                if session.reveal(hint.clone()) {
                    tracing::debug!(session = %session.id, history = len, "revealed hint");
                    revealed.push(hint);
                }
            }
        }

        revealed
    }
}

impl std::fmt::Debug for HintScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HintScheduler")
            .field("triggers", &self.rules.iter().map(|(at, _)| *at).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, Mode};
    use crate::compare::compare_card;
    use crate::session::state::{GuessRecord, SessionId};

    // Draw (1108), Search (1109), Special Summon (1118)
    const TARGET_CATEGORY: u64 = (1 << 8) | (1 << 9) | (1 << 18);

    fn target() -> DecodedTags {
        DecodedTags::from(&Card::new(CardId::new(1), "Ash Blossom").with_type(0x21).with_category(TARGET_CATEGORY))
    }

    fn guess(category: u64) -> DecodedTags {
        DecodedTags::from(&Card::new(CardId::new(2), "Guess").with_type(0x21).with_category(category))
    }

    fn session_with_history(len: usize, target: &DecodedTags, guess: &DecodedTags) -> GameSession {
        let mut session =
            GameSession::new(SessionId::new("h"), Mode::Monster, CardId::new(1), 10, GameRng::new(0).state());
        for _ in 0..len {
            session.history.push_back(GuessRecord {
                card: CardId::new(2),
                name: guess.name.clone(),
                comparison: compare_card(guess, target),
            });
        }
        session
    }

    #[test]
    fn test_hint_display() {
        assert_eq!(
            Hint::EffectTag("Draw".into()).to_string(),
            "Hint: the target card has the effect tag \"Draw\""
        );
        assert_eq!(Hint::NameChar('A').to_string(), "Hint: the target card's name contains \"A\"");
    }

    #[test]
    fn test_effect_tag_hint_excludes_guessed_tags() {
        let target = target();
        // Guess already shows Draw and Search.
        let guesses = vec![guess((1 << 8) | (1 << 9))];
        let session = session_with_history(2, &target, &guesses[0]);
        let ctx = HintContext { target: &target, guesses: &guesses, session: &session };

        let mut rng = GameRng::new(5);
        for _ in 0..10 {
            assert_eq!(EffectTagHint.generate(&ctx, &mut rng), Some(Hint::EffectTag("Special Summon".into())));
        }
    }

    #[test]
    fn test_effect_tag_hint_none_when_exhausted() {
        let target = target();
        let guesses = vec![guess(TARGET_CATEGORY)];
        let session = session_with_history(2, &target, &guesses[0]);
        let ctx = HintContext { target: &target, guesses: &guesses, session: &session };

        assert_eq!(EffectTagHint.generate(&ctx, &mut GameRng::new(1)), None);
    }

    #[test]
    fn test_name_char_hint_skips_revealed() {
        let target = DecodedTags::from(&Card::new(CardId::new(1), "A b"));
        let guesses = vec![guess(0)];
        let mut session = session_with_history(5, &target, &guesses[0]);
        session.reveal(Hint::NameChar('A'));
        let ctx = HintContext { target: &target, guesses: &guesses, session: &session };

        assert_eq!(NameCharHint.generate(&ctx, &mut GameRng::new(3)), Some(Hint::NameChar('b')));
    }

    #[test]
    fn test_scheduler_fires_only_at_trigger() {
        let scheduler = HintScheduler::from_config(&GameConfig::default());
        assert_eq!(scheduler.len(), 2);

        let target = target();
        let guesses = vec![guess(0)];
        let mut rng = GameRng::new(9);

        let mut session = session_with_history(1, &target, &guesses[0]);
        assert!(scheduler.on_miss(&mut session, &target, &guesses, &mut rng).is_empty());

        let mut session = session_with_history(2, &target, &guesses[0]);
        let hints = scheduler.on_miss(&mut session, &target, &guesses, &mut rng);
        assert_eq!(hints.len(), 1);
        assert!(matches!(hints[0], Hint::EffectTag(_)));
        assert_eq!(session.revealed_tags.len(), 1);

        let mut session = session_with_history(5, &target, &guesses[0]);
        let hints = scheduler.on_miss(&mut session, &target, &guesses, &mut rng);
        assert!(matches!(hints.as_slice(), [Hint::NameChar(_)]));
    }

    #[test]
    fn test_scheduler_is_debug() {
        let scheduler = HintScheduler::new().with_rule(3, NameCharHint);
        assert_eq!(format!("{scheduler:?}"), "HintScheduler { triggers: [3] }");
    }
}
