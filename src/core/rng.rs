//! Seedable randomness for target draws and hint picks.
//!
//! A `GuessGame` owns one seed source. Every new session forks its own
//! stream from it, and that stream's position is saved with the session,
//! so a game built from a fixed seed replays the same targets and hints.
//!
//! ```
//! use card_guess::core::GameRng;
//!
//! let mut seeds = GameRng::new(42);
//! let mut session = seeds.fork();
//!
//! let saved = session.state();
//! let first = session.index(100);
//!
//! let mut restored = GameRng::from_state(&saved);
//! assert_eq!(restored.index(100), first);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream that can be saved and resumed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed), seed }
    }

    /// A stream seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Split off an independent stream.
    ///
    /// The child seed is drawn from this stream, so the n-th fork of two
    /// equally seeded sources is the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.gen())
    }

    /// Uniform index below `len`, `None` when `len` is zero.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.inner.gen_range(0..len))
    }

    /// Uniformly pick one element of `items`.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.index(items.len()).map(|i| &items[i])
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState { seed: self.seed, word_pos: self.inner.get_word_pos() }
    }

    /// Resume a stream where `state` left it.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.word_pos);
        rng
    }
}

/// Saved stream position, persisted inside each `GameSession`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha word counter.
    pub word_pos: u128,
}
