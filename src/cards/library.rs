//! Card library: the read-only card repository.
//!
//! The `CardLibrary` is built once from raw card records and then shared
//! (usually behind an `Arc`) by every session. Cards are kept in ascending
//! id order; that order drives both mode queries and name resolution.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId};
use super::mode::Mode;
use crate::core::{GameRng, GuessError, Result};

/// One autocomplete entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: CardId,
    pub name: String,
}

/// Read-only card repository.
///
/// ## Example
///
/// ```
/// use card_guess::cards::{Card, CardId, CardLibrary, Mode};
///
/// let library = CardLibrary::from_cards([
///     Card::new(CardId::new(20), "Pot of Greed").with_type(0x2),
///     Card::new(CardId::new(10), "Pot of Greed").with_type(0x2),
/// ]);
///
/// // Duplicate names keep the lowest id.
/// assert_eq!(library.len(), 1);
/// assert!(library.get(CardId::new(10)).is_some());
/// assert_eq!(library.query_by_mode(Mode::Spell).len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardLibrary {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl CardLibrary {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from raw records.
    ///
    /// Records are sorted by id and deduplicated by name, keeping the
    /// lowest id for each name. Repeated ids also keep only the first.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.sort_by_key(|c| c.id);

        let total = cards.len();
        let mut seen_names = FxHashSet::default();
        let mut seen_ids = FxHashSet::default();
        cards.retain(|c| seen_ids.insert(c.id) && seen_names.insert(c.name.clone()));

        if cards.len() < total {
            tracing::debug!(dropped = total - cards.len(), kept = cards.len(), "deduplicated card records");
        }

        let index = cards.iter().enumerate().map(|(i, c)| (c.id, i)).collect();
        Self { cards, index }
    }

    /// Flag every card whose name is in `names` as popular.
    ///
    /// Returns how many cards were flagged.
    pub fn mark_popular<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        let names: FxHashSet<&str> = names.iter().map(|n| n.as_ref()).collect();
        let mut marked = 0;
        for card in self.cards.iter_mut().filter(|c| names.contains(c.name.as_str())) {
            card.popular = true;
            marked += 1;
        }
        tracing::debug!(marked, requested = names.len(), "marked popular cards");
        marked
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Get a card by ID, or `InvalidCardReference`.
    pub fn require(&self, id: CardId) -> Result<&Card> {
        self.get(id).ok_or(GuessError::InvalidCardReference(id))
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards in `mode`'s pool, ascending id.
    #[must_use]
    pub fn query_by_mode(&self, mode: Mode) -> Vec<&Card> {
        self.cards.iter().filter(|c| mode.matches(c)).collect()
    }

    /// Pick one card from `pool` uniformly at random.
    pub fn sample_random<'a>(pool: &[&'a Card], rng: &mut GameRng) -> Option<&'a Card> {
        rng.choose(pool).copied()
    }

    /// Cards in `mode`'s pool whose name contains `query`, ignoring case,
    /// in ascending id order. A blank query matches nothing.
    pub fn search<'a>(&'a self, mode: Mode, query: &str) -> impl Iterator<Item = &'a Card> + 'a {
        let needle = query.trim().to_lowercase();
        self.cards
            .iter()
            .filter(move |c| !needle.is_empty() && mode.matches(c) && c.name.to_lowercase().contains(&needle))
    }

    /// The lowest-id card in `mode`'s pool whose name contains `query`.
    pub fn find_by_name(&self, mode: Mode, query: &str) -> Result<&Card> {
        self.search(mode, query)
            .next()
            .ok_or_else(|| GuessError::InputNotFound(query.trim().to_string()))
    }

    /// Autocomplete entries for `query`, at most `limit` of them.
    #[must_use]
    pub fn suggest(&self, mode: Mode, query: &str, limit: usize) -> Vec<Suggestion> {
        self.search(mode, query)
            .take(limit)
            .map(|c| Suggestion { id: c.id, name: c.name.clone() })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> CardLibrary {
        CardLibrary::from_cards([
            Card::new(CardId::new(30), "Dark Magician").with_type(0x11),
            Card::new(CardId::new(10), "Magician of Faith").with_type(0x200021),
            Card::new(CardId::new(20), "Dark Hole").with_type(0x2),
            Card::new(CardId::new(40), "Mirror Force").with_type(0x4),
            Card::new(CardId::new(50), "Magician's Rod").with_type(0x21).with_popular(true),
        ])
    }

    #[test]
    fn test_get_and_require() {
        let lib = library();
        assert_eq!(lib.get(CardId::new(20)).unwrap().name, "Dark Hole");
        assert!(lib.get(CardId::new(99)).is_none());
        assert_eq!(
            lib.require(CardId::new(99)).unwrap_err(),
            GuessError::InvalidCardReference(CardId::new(99))
        );
        assert!(lib.contains(CardId::new(40)));
    }

    #[test]
    fn test_ascending_order() {
        let lib = library();
        let ids: Vec<_> = lib.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_dedup_keeps_lowest_id() {
        let lib = CardLibrary::from_cards([
            Card::new(CardId::new(7), "Kuriboh"),
            Card::new(CardId::new(3), "Kuriboh"),
            Card::new(CardId::new(5), "Winged Kuriboh"),
        ]);
        assert_eq!(lib.len(), 2);
        assert!(lib.contains(CardId::new(3)));
        assert!(!lib.contains(CardId::new(7)));
    }

    #[test]
    fn test_query_by_mode() {
        let lib = library();
        let monsters: Vec<_> = lib.query_by_mode(Mode::Monster).iter().map(|c| c.id.raw()).collect();
        assert_eq!(monsters, vec![10, 50]);

        let hot: Vec<_> = lib.query_by_mode(Mode::Hot).iter().map(|c| c.id.raw()).collect();
        assert_eq!(hot, vec![50]);

        assert_eq!(lib.query_by_mode(Mode::All).len(), 5);
    }

    #[test]
    fn test_find_by_name_lowest_id_case_insensitive() {
        let lib = library();
        let found = lib.find_by_name(Mode::All, "MAGICIAN").unwrap();
        assert_eq!(found.id, CardId::new(10));

        // Dark Magician is Normal, so the monster pool skips it.
        let found = lib.find_by_name(Mode::Monster, "dark").unwrap_err();
        assert_eq!(found, GuessError::InputNotFound("dark".into()));
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let lib = library();
        assert!(lib.find_by_name(Mode::All, "   ").is_err());
        assert!(lib.suggest(Mode::All, "", 10).is_empty());
    }

    #[test]
    fn test_suggest_limit() {
        let lib = library();
        let entries = lib.suggest(Mode::All, "magician", 2);
        assert_eq!(
            entries,
            vec![
                Suggestion { id: CardId::new(10), name: "Magician of Faith".into() },
                Suggestion { id: CardId::new(30), name: "Dark Magician".into() },
            ]
        );
    }

    #[test]
    fn test_mark_popular() {
        let mut lib = library();
        let marked = lib.mark_popular(&["Magician of Faith", "Not A Card"]);
        assert_eq!(marked, 1);

        let hot: Vec<_> = lib.query_by_mode(Mode::Hot).iter().map(|c| c.id.raw()).collect();
        assert_eq!(hot, vec![10, 50]);
    }

    #[test]
    fn test_sample_random() {
        let lib = library();
        let pool = lib.query_by_mode(Mode::Monster);
        let mut rng = GameRng::new(42);

        for _ in 0..20 {
            let card = CardLibrary::sample_random(&pool, &mut rng).unwrap();
            assert!(Mode::Monster.matches(card));
        }

        assert!(CardLibrary::sample_random(&[], &mut rng).is_none());
    }
}
