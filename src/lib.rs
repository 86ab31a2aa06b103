//! # card-guess
//!
//! Core of a card guessing game: the player guesses a secret card and
//! gets per-attribute feedback after every guess.
//!
//! ## Design Principles
//!
//! 1. **Pure decode and compare**: Decoding packed card fields and
//!    comparing two cards are total, side-effect free functions.
//!
//! 2. **Explicit collaborators**: The card library, session store and
//!    RNG are passed in, never reached through globals.
//!
//! 3. **Deterministic when seeded**: Target sampling and hint selection
//!    draw from a seedable ChaCha stream stored with each session.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card records, mode filters, the card library
//! - `decode`: Packed field tables and decoders
//! - `compare`: Feedback tokens and the comparison engine
//! - `session`: Session state, hint scheduler, store, state machine

pub mod core;
pub mod cards;
pub mod decode;
pub mod compare;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, GuessError, Result, Thresholds};

pub use crate::cards::{Card, CardId, CardLibrary, Mode, Suggestion};

pub use crate::decode::{decode_card, DecodedTags, LinkArrow, Stat};

pub use crate::compare::{compare_card, compare_card_with, CardComparison, FeedbackToken, FieldFeedback, FieldKey};

pub use crate::session::{
    GameSession, GuessGame, GuessInput, GuessRecord, Hint, HintScheduler,
    MemorySessionStore, SessionId, SessionState, SessionStore, Turn,
};
