//! Bot strategy seam.

use serde::{Deserialize, Serialize};

use super::intel::GameIntel;
use crate::cards::Card;
use crate::core::GameRng;

/// A card choice: thrown face up or face down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardToPlay {
    Play(Card),
    Discard(Card),
}

impl CardToPlay {
    /// The held card being thrown.
    #[must_use]
    pub fn card(self) -> Card {
        match self {
            CardToPlay::Play(card) | CardToPlay::Discard(card) => card,
        }
    }

    #[must_use]
    pub fn is_discard(self) -> bool {
        matches!(self, CardToPlay::Discard(_))
    }
}

/// Answer to a raise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaiseResponse {
    Quit,
    Accept,
    Raise,
}

/// Decision-making for a bot player.
///
/// Every method gets the bot's own view of the hand. The engine checks the
/// answers: an illegal choice comes back as an error from the driver.
pub trait BotStrategy: Send {
    /// Play the hand (`true`) or run (`false`) when the bot has 11 points.
    fn mao_de_onze_response(&mut self, intel: &GameIntel) -> bool;

    /// Asked before throwing a card, only when raising is legal.
    fn decide_if_raises(&mut self, intel: &GameIntel) -> bool;

    /// Pick a held card. Only called while the bot holds at least one.
    fn choose_card(&mut self, intel: &GameIntel) -> CardToPlay;

    /// Answer the opponent's raise.
    fn raise_response(&mut self, intel: &GameIntel) -> RaiseResponse;
}

/// Seeded random bot.
///
/// Plays a uniformly chosen card face up, raises one time in four, always
/// accepts raises and plays every mão de onze.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: GameRng,
}

impl RandomBot {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl BotStrategy for RandomBot {
    fn mao_de_onze_response(&mut self, _intel: &GameIntel) -> bool {
        true
    }

    fn decide_if_raises(&mut self, _intel: &GameIntel) -> bool {
        self.rng.gen_range_usize(0..4) == 0
    }

    fn choose_card(&mut self, intel: &GameIntel) -> CardToPlay {
        let cards = intel.cards();
        let idx = self.rng.gen_range_usize(0..cards.len());
        CardToPlay::Play(cards[idx])
    }

    fn raise_response(&mut self, _intel: &GameIntel) -> RaiseResponse {
        RaiseResponse::Accept
    }
}
