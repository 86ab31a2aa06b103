//! Error type shared by the repository, session store and state machine.
//!
//! None of these are fatal: every variant is recoverable by the caller's
//! interaction loop (show a message, or send the player back to mode
//! selection for `SessionMissing`).

use thiserror::Error;

use crate::cards::{CardId, Mode};

/// Errors surfaced by session actions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// A name query matched no card in the mode pool.
    #[error("no card name contains \"{0}\"")]
    InputNotFound(String),

    /// An explicit card id does not exist in the library.
    #[error("invalid card selection: {0}")]
    InvalidCardReference(CardId),

    /// The action needs an active session and there is none.
    #[error("no active session")]
    SessionMissing,

    /// The mode pool has no cards to draw a target from.
    #[error("no cards available for mode {0}")]
    EmptyPool(Mode),

    /// A mode string could not be parsed.
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    /// The session store failed to encode or decode a session.
    ///
    /// `Store` and `Config` hold the source error's message rather than the
    /// error itself (`#[from]`), so `GuessError` stays `Clone + Eq`.
    #[error("session store error: {0}")]
    Store(String),

    /// The configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GuessError {
    /// True when the error means the player must pick a mode and start again.
    #[must_use]
    pub fn needs_restart(&self) -> bool {
        matches!(self, GuessError::SessionMissing)
    }
}

impl From<bincode::Error> for GuessError {
    fn from(err: bincode::Error) -> Self {
        GuessError::Store(err.to_string())
    }
}

impl From<toml::de::Error> for GuessError {
    fn from(err: toml::de::Error) -> Self {
        GuessError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GuessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GuessError::InputNotFound("drag".into());
        assert_eq!(err.to_string(), "no card name contains \"drag\"");

        let err = GuessError::InvalidCardReference(CardId::new(99));
        assert_eq!(err.to_string(), "invalid card selection: Card(99)");

        assert_eq!(GuessError::EmptyPool(Mode::Hot).to_string(), "no cards available for mode hot");
    }

    #[test]
    fn test_source_errors_keep_message() {
        let err: GuessError = bincode::deserialize::<u64>(&[1u8]).unwrap_err().into();
        assert!(matches!(&err, GuessError::Store(msg) if !msg.is_empty()));
        assert_eq!(err.clone(), err);

        let err: GuessError = toml::from_str::<toml::Table>("= 1").unwrap_err().into();
        assert!(matches!(err, GuessError::Config(_)));
    }

    #[test]
    fn test_needs_restart() {
        assert!(GuessError::SessionMissing.needs_restart());
        assert!(!GuessError::InputNotFound(String::new()).needs_restart());
    }
}
