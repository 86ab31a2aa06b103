//! Guessing sessions: state, hints, persistence, and the state machine.
//!
//! ## Key Types
//!
//! - `GameSession`: Persisted per-session state (target, attempts, history, hints)
//! - `HintScheduler`: Ordered `(history length, generator)` hint rules
//! - `SessionStore`: Persistence seam; `MemorySessionStore` for in-process use
//! - `GuessGame`: Start, guess, surrender, restart, change mode

pub mod hints;
pub mod machine;
pub mod state;
pub mod store;

pub use hints::{EffectTagHint, Hint, HintContext, HintGenerator, HintScheduler, NameCharHint};
pub use machine::{GuessGame, GuessInput, Turn};
pub use state::{GameSession, GuessRecord, SessionId, SessionState};
pub use store::{MemorySessionStore, SessionStore};
