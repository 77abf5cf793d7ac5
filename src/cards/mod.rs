//! Cards, card ranking, and the deck.
//!
//! Card strength depends on the hand's vira: see `Card::compare_value_to`.
//! This is the ranking the round resolver (`hand::Round`) relies on.

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
