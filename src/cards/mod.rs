//! Card system: raw records, mode filters, and the card library.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card records
//! - `Card`: Raw packed card data as stored in the card database
//! - `Mode`: Pool filter (monster, spell, trap, hot, all)
//! - `CardLibrary`: Immutable, id-ordered repository with name search

pub mod definition;
pub mod library;
pub mod mode;

pub use definition::{Card, CardId};
pub use library::{CardLibrary, Suggestion};
pub use mode::Mode;
