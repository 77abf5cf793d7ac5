//! Drives a hand between two bot strategies.
//!
//! Each `step` asks the current player's strategy for one decision and
//! applies it to the hand. `run` steps until the hand is done, with an
//! upper bound on the number of steps.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::strategy::{BotStrategy, CardToPlay, RaiseResponse};
use crate::cards::Card;
use crate::core::PlayerId;
use crate::error::{Result, TrucoError};
use crate::hand::{Hand, HandResult, HandState, PossibleAction};

/// Most steps a hand can take: six cards, four raises with their answers,
/// and the mão de onze answer, with room to spare.
pub const DEFAULT_MAX_STEPS: usize = 32;

/// A decision taken by a strategy and applied to the hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotDecision {
    Play(Card),
    Discard(Card),
    Raise,
    Accept,
    Quit,
}

/// Owns a hand and the strategy of each seat.
pub struct HandDriver {
    hand: Hand,
    strategies: FxHashMap<PlayerId, Box<dyn BotStrategy>>,
}

impl HandDriver {
    /// `first` plays for `hand.players()[0]`, `last` for the other seat.
    #[must_use]
    pub fn new(hand: Hand, first: Box<dyn BotStrategy>, last: Box<dyn BotStrategy>) -> Self {
        let [a, b] = hand.players();
        let mut strategies: FxHashMap<PlayerId, Box<dyn BotStrategy>> = FxHashMap::default();
        strategies.insert(a.id(), first);
        strategies.insert(b.id(), last);
        Self { hand, strategies }
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn into_hand(self) -> Hand {
        self.hand
    }

    /// Ask the current player for one decision and apply it.
    pub fn step(&mut self) -> Result<BotDecision> {
        let player = self.hand.current_player();
        let intel = self.hand.intel_for(player)?;
        let can_raise = self.hand.possible_actions().contains(PossibleAction::Raise);
        let strategy = self
            .strategies
            .get_mut(&player)
            .ok_or_else(|| TrucoError::illegal_argument(format!("no strategy for {player}")))?;

        let decision = match self.hand.state() {
            HandState::WaitingMaoDeOnze => {
                if strategy.mao_de_onze_response(&intel) {
                    BotDecision::Accept
                } else {
                    BotDecision::Quit
                }
            }
            HandState::WaitingRaiseResponse => match strategy.raise_response(&intel) {
                RaiseResponse::Quit => BotDecision::Quit,
                RaiseResponse::Accept => BotDecision::Accept,
                RaiseResponse::Raise => BotDecision::Raise,
            },
            HandState::NoCard | HandState::OneCard => {
                if can_raise && strategy.decide_if_raises(&intel) {
                    BotDecision::Raise
                } else if intel.cards().is_empty() {
                    return Err(TrucoError::illegal_state(format!(
                        "{player} has no card left to play"
                    )));
                } else {
                    match strategy.choose_card(&intel) {
                        CardToPlay::Play(card) => BotDecision::Play(card),
                        CardToPlay::Discard(card) => BotDecision::Discard(card),
                    }
                }
            }
            HandState::Done => return Err(TrucoError::illegal_state("hand is already done")),
        };

        debug!(player = %player, decision = ?decision, "bot decision");
        match decision {
            BotDecision::Play(card) => self.hand.play_card(player, card)?,
            BotDecision::Discard(card) => self.hand.discard_card(player, card)?,
            BotDecision::Raise => self.hand.raise(player)?,
            BotDecision::Accept => self.hand.accept(player)?,
            BotDecision::Quit => self.hand.quit(player)?,
        }
        Ok(decision)
    }

    /// Step until the hand is done, at most `max_steps` times.
    pub fn run(&mut self, max_steps: usize) -> Result<HandResult> {
        for _ in 0..max_steps {
            if let Some(result) = self.hand.result() {
                return Ok(result);
            }
            self.step()?;
        }
        self.hand.result().ok_or_else(|| {
            TrucoError::illegal_state(format!("hand not finished after {max_steps} steps"))
        })
    }
}

impl std::fmt::Debug for HandDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandDriver")
            .field("hand", &self.hand)
            .field("seats", &self.strategies.len())
            .finish()
    }
}
