//! Player identity, cards in hand, and match score.
//!
//! ## PlayerId
//!
//! Stable identifier backed by a UUID. Two `Player` values are the same
//! player iff their ids match; names are for display only.
//!
//! ## Player
//!
//! Holds the cards a player has not played yet and the player's match
//! score. Playing or discarding a card the player does not hold is a caller
//! bug and fails with `IllegalArgument`.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use super::config::{CARDS_PER_PLAYER, MAX_SCORE};
use crate::cards::Card;
use crate::error::{Result, TrucoError};
use crate::hand::HandPoints;

/// Stable player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub const fn uuid(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cards held by a player. Inline storage covers a full Truco hand.
pub type PlayerCards = SmallVec<[Card; CARDS_PER_PLAYER]>;

/// A Truco player.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    username: String,
    cards: PlayerCards,
    score: u8,
    is_bot: bool,
}

impl Player {
    /// Human player with a fresh id.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self::with_id(PlayerId::random(), username)
    }

    /// Human player with a known id.
    #[must_use]
    pub fn with_id(id: PlayerId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            cards: SmallVec::new(),
            score: 0,
            is_bot: false,
        }
    }

    /// Bot player with a fresh id.
    #[must_use]
    pub fn bot(name: impl Into<String>) -> Self {
        Self {
            is_bot: true,
            ..Self::new(name)
        }
    }

    /// Replace the player's cards (builder form).
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.set_cards(cards);
        self
    }

    /// Set the player's match score (builder form), capped at `MAX_SCORE`.
    #[must_use]
    pub fn with_score(mut self, score: u8) -> Self {
        self.score = score.min(MAX_SCORE);
        self
    }

    /// Replace the player's cards, e.g. when a new hand is dealt.
    pub fn set_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards = cards.into_iter().collect();
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }

    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.is_bot
    }

    #[must_use]
    pub fn owns(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Remove `card` from the player's hand and return it face up.
    pub fn play(&mut self, card: Card) -> Result<Card> {
        self.remove(card, "play")?;
        Ok(card)
    }

    /// Remove `card` from the player's hand and return the closed card.
    pub fn discard(&mut self, card: Card) -> Result<Card> {
        self.remove(card, "discard")?;
        Ok(Card::closed())
    }

    /// Add hand points to the match score, saturating at `MAX_SCORE`.
    pub fn add_score(&mut self, points: HandPoints) {
        self.score = self.score.saturating_add(points.get()).min(MAX_SCORE);
    }

    fn remove(&mut self, card: Card, verb: &str) -> Result<()> {
        let pos = self.cards.iter().position(|&c| c == card).ok_or_else(|| {
            TrucoError::illegal_argument(format!(
                "{} does not own card {card} to {verb} it",
                self.username
            ))
        })?;
        self.cards.remove(pos);
        Ok(())
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl std::hash::Hash for Player {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) has {} point(s)", self.username, self.id, self.score)
    }
}
