//! Persisting decks edited outside the markdown sources.

pub mod request;

pub use request::{EditableDeck, SaveAck, SaveError, SaveRequest, save_deck};
