//! The 40-card Truco deck.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;
use crate::error::{Result, TrucoError};

/// A deck of cards; the top of the deck is the end of the vec.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full deck in rank-then-suit order.
    #[must_use]
    pub fn new() -> Self {
        let cards = Rank::ALL
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::open(rank, suit)))
            .collect();
        Self { cards }
    }

    /// Full deck shuffled with the given RNG.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::new();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build a deck from explicit cards, top of the deck last.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Take `count` cards from the top.
    pub fn take(&mut self, count: usize) -> Result<Vec<Card>> {
        if count > self.cards.len() {
            return Err(TrucoError::illegal_state(format!(
                "cannot take {count} card(s) from a deck of {}",
                self.cards.len()
            )));
        }
        let split = self.cards.len() - count;
        let mut taken = self.cards.split_off(split);
        taken.reverse();
        Ok(taken)
    }

    /// Take the top card.
    pub fn take_one(&mut self) -> Result<Card> {
        self.cards
            .pop()
            .ok_or_else(|| TrucoError::illegal_state("cannot take a card from an empty deck"))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
