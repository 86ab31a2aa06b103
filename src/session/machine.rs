//! Session state machine.
//!
//! `GuessGame` drives every session transition:
//!
//! ```text
//! NotStarted --start--> InProgress --guess(target)----> Won
//!                           |      --guess(last miss)--> Lost
//!                           |      --surrender-------->  Surrendered
//!                           +--guess(miss)--> InProgress (+hints)
//! ```
//!
//! Terminal transitions clear the session from the store; the returned
//! `Turn` still carries the final snapshot for display. All mutations of
//! one session id run under a per-id lock, so concurrent requests against
//! the same id are applied one after another.

use std::sync::{Arc, Mutex, PoisonError};

use rustc_hash::FxHashMap;

use super::hints::{Hint, HintScheduler};
use super::state::{GameSession, GuessRecord, SessionId, SessionState};
use super::store::SessionStore;
use crate::cards::{Card, CardId, CardLibrary, Mode, Suggestion};
use crate::compare::{compare_card_with, CardComparison};
use crate::core::{GameConfig, GameRng, GuessError, Result};
use crate::decode::DecodedTags;

/// How the player named their guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessInput {
    /// An exact card id (from autocomplete). Bypasses name search.
    Id(CardId),
    /// Free text, resolved to the lowest-id card in the pool whose name
    /// contains it, ignoring case.
    Name(String),
}

impl From<CardId> for GuessInput {
    fn from(id: CardId) -> Self {
        GuessInput::Id(id)
    }
}

impl From<&str> for GuessInput {
    fn from(s: &str) -> Self {
        GuessInput::Name(s.to_string())
    }
}

/// Result of one action.
#[derive(Clone, Debug)]
pub struct Turn {
    /// Session after the transition.
    pub session: GameSession,
    /// Hints revealed by this action.
    pub new_hints: Vec<Hint>,
    /// Target name, once the session has ended.
    pub answer: Option<String>,
}

impl Turn {
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session.state
    }

    /// Comparison appended by this action.
    #[must_use]
    pub fn comparison(&self) -> Option<&CardComparison> {
        self.session.last_comparison()
    }
}

/// The guessing game: card library, session store, and rules.
///
/// The per-id locks live in the game, not the store. Run exactly one
/// `GuessGame` per store: two games sharing a store (for example through
/// `Arc<MemorySessionStore>`) do not serialize against each other.
pub struct GuessGame<S> {
    library: Arc<CardLibrary>,
    store: S,
    config: GameConfig,
    hints: HintScheduler,
    seeds: Mutex<GameRng>,
    locks: Mutex<FxHashMap<SessionId, Arc<Mutex<()>>>>,
}

impl<S: SessionStore> GuessGame<S> {
    /// Create a game with the standard hint rules from `config`.
    pub fn new(library: Arc<CardLibrary>, store: S, config: GameConfig) -> Self {
        let seeds = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            library,
            store,
            hints: HintScheduler::from_config(&config),
            config,
            seeds: Mutex::new(seeds),
            locks: Mutex::new(FxHashMap::default()),
        }
    }

    /// Replace the hint rules.
    #[must_use]
    pub fn with_hint_scheduler(mut self, hints: HintScheduler) -> Self {
        self.hints = hints;
        self
    }

    #[must_use]
    pub fn library(&self) -> &CardLibrary {
        &self.library
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Start a new game, discarding any previous one under `id`.
    ///
    /// `max_attempts` of `None` uses the configured default; zero is raised to one.
    pub fn start(&self, id: &SessionId, mode: Mode, max_attempts: Option<u32>) -> Result<Turn> {
        self.with_lock(id, || self.start_locked(id, mode, max_attempts))
    }

    /// Submit a guess.
    ///
    /// Unresolvable input returns `InputNotFound`/`InvalidCardReference`
    /// and leaves the session untouched.
    pub fn guess(&self, id: &SessionId, input: impl Into<GuessInput>) -> Result<Turn> {
        let input = input.into();
        self.with_lock(id, || {
            let mut session = self.active_session(id)?;
            let guess = self.resolve(session.mode, &input)?;
            let target = self.library.require(session.target)?;
            let target_tags = DecodedTags::from(target);

            if guess.id == target.id {
                let comparison = compare_card_with(&target_tags, &target_tags, &self.config.thresholds);
                session.history.push_back(record(target, comparison));
                return self.finish(session, SessionState::Won, target, Vec::new());
            }

            session.attempts += 1;
            let comparison = compare_card_with(&DecodedTags::from(guess), &target_tags, &self.config.thresholds);
            session.history.push_back(record(guess, comparison));
            tracing::debug!(session = %id, attempts = session.attempts, guess = %guess.id, "wrong guess");

            let guesses: Vec<DecodedTags> = session
                .history
                .iter()
                .filter_map(|r| self.library.get(r.card))
                .map(DecodedTags::from)
                .collect();
            let mut rng = GameRng::from_state(&session.rng);
            let new_hints = self.hints.on_miss(&mut session, &target_tags, &guesses, &mut rng);
            session.rng = rng.state();

            if session.attempts >= session.max_attempts {
                return self.finish(session, SessionState::Lost, target, new_hints);
            }

            self.store.put(&session)?;
            Ok(Turn { session, new_hints, answer: None })
        })
    }

    /// Give up and reveal the target.
    pub fn surrender(&self, id: &SessionId) -> Result<Turn> {
        self.with_lock(id, || {
            let mut session = self.active_session(id)?;
            let target = self.library.require(session.target)?;
            let target_tags = DecodedTags::from(target);
            let comparison = compare_card_with(&target_tags, &target_tags, &self.config.thresholds);
            session.history.push_back(record(target, comparison));
            self.finish(session, SessionState::Surrendered, target, Vec::new())
        })
    }

    /// Drop the session; the player picks a mode again.
    pub fn restart(&self, id: &SessionId) -> Result<()> {
        self.with_lock(id, || {
            self.store.clear(id)?;
            tracing::info!(session = %id, "session restarted");
            Ok(())
        })
    }

    /// Start over in `mode`, keeping the current attempt budget.
    ///
    /// The attempt counter, history and hints are reset.
    pub fn change_mode(&self, id: &SessionId, mode: Mode) -> Result<Turn> {
        self.with_lock(id, || {
            let max_attempts = self.store.get(id)?.map(|s| s.max_attempts);
            self.start_locked(id, mode, max_attempts)
        })
    }

    /// Current state of `id`; `NotStarted` when nothing is stored.
    pub fn state(&self, id: &SessionId) -> Result<SessionState> {
        Ok(self.store.get(id)?.map_or(SessionState::NotStarted, |s| s.state))
    }

    /// Stored session for `id`, if any.
    pub fn session(&self, id: &SessionId) -> Result<Option<GameSession>> {
        self.store.get(id)
    }

    /// Autocomplete within the session's pool, or every card without a session.
    pub fn suggest(&self, id: &SessionId, query: &str, limit: usize) -> Result<Vec<Suggestion>> {
        let mode = self.store.get(id)?.map_or(Mode::All, |s| s.mode);
        Ok(self.library.suggest(mode, query, limit))
    }

    fn start_locked(&self, id: &SessionId, mode: Mode, max_attempts: Option<u32>) -> Result<Turn> {
        let max_attempts = self.config.attempts_or_default(max_attempts);
        let pool = self.library.query_by_mode(mode);

        let mut rng = self.seeds.lock().unwrap_or_else(PoisonError::into_inner).fork();
        let target = CardLibrary::sample_random(&pool, &mut rng).ok_or(GuessError::EmptyPool(mode))?;

        let session = GameSession::new(id.clone(), mode, target.id, max_attempts, rng.state());
        self.store.put(&session)?;

        tracing::info!(session = %id, %mode, pool = pool.len(), max_attempts, "session started");
        tracing::debug!(session = %id, target = %target.id, "target drawn");
        Ok(Turn { session, new_hints: Vec::new(), answer: None })
    }

    fn active_session(&self, id: &SessionId) -> Result<GameSession> {
        match self.store.get(id)? {
            Some(session) if session.state == SessionState::InProgress => Ok(session),
            _ => Err(GuessError::SessionMissing),
        }
    }

    fn resolve(&self, mode: Mode, input: &GuessInput) -> Result<&Card> {
        match input {
            GuessInput::Id(card) => self.library.require(*card),
            GuessInput::Name(query) => self.library.find_by_name(mode, query),
        }
    }

    fn finish(&self, mut session: GameSession, state: SessionState, target: &Card, new_hints: Vec<Hint>) -> Result<Turn> {
        session.state = state;
        self.store.clear(&session.id)?;
        tracing::info!(
            session = %session.id,
            ?state,
            attempts = session.attempts,
            answer = %target.name,
            "session ended"
        );
        Ok(Turn { session, new_hints, answer: Some(target.name.clone()) })
    }

    fn with_lock<T>(&self, id: &SessionId, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            // Entries only the map still references are idle.
            locks.retain(|_, l| Arc::strong_count(l) > 1);
            Arc::clone(locks.entry(id.clone()).or_default())
        };
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        f()
    }
}

fn record(card: &Card, comparison: CardComparison) -> GuessRecord {
    GuessRecord { card: card.id, name: card.name.clone(), comparison }
}
