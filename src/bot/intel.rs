//! Read-only hand snapshot for bot strategies.
//!
//! `GameIntel` is assembled through a typestate builder. Each step returns
//! a different type, so the required order is checked at compile time:
//!
//! ```
//! use rust_truco::bot::{GameIntel, RoundResult};
//! use rust_truco::cards::Card;
//! use rust_truco::hand::HandPoints;
//!
//! let vira: Card = "4D".parse().unwrap();
//! let intel = GameIntel::builder()
//!     .game_info(vec![RoundResult::Won], vec![vira], vira, HandPoints::One)
//!     .bot_info(vec!["3C".parse().unwrap()], 5)
//!     .opponent_score(7)
//!     .opponent_card("KH".parse().unwrap())
//!     .build();
//!
//! assert_eq!(intel.opponent_score(), 7);
//! assert!(intel.opponent_card().is_some());
//! ```
//!
//! Leaving out a step does not compile:
//!
//! ```compile_fail
//! use rust_truco::bot::GameIntel;
//!
//! let intel = GameIntel::builder().opponent_score(3).build();
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::hand::HandPoints;

/// Outcome of a played round from one player's seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    Won,
    Drew,
    Lost,
}

impl RoundResult {
    /// Outcome for `player` of a round won by `winner` (`None` = draw).
    #[must_use]
    pub fn for_player(winner: Option<PlayerId>, player: PlayerId) -> Self {
        match winner {
            None => RoundResult::Drew,
            Some(w) if w == player => RoundResult::Won,
            Some(_) => RoundResult::Lost,
        }
    }
}

/// What a bot may know about the hand when asked for a decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameIntel {
    round_results: Vec<RoundResult>,
    /// Vira first, then every thrown card.
    open_cards: Vec<Card>,
    vira: Card,
    hand_points: HandPoints,
    cards: Vec<Card>,
    score: u8,
    opponent_score: u8,
    /// Card waiting for this bot's answer.
    opponent_card: Option<Card>,
}

impl GameIntel {
    /// Start building a snapshot.
    #[must_use]
    pub fn builder() -> GameInfoStep {
        GameInfoStep(())
    }

    #[must_use]
    pub fn round_results(&self) -> &[RoundResult] {
        &self.round_results
    }

    #[must_use]
    pub fn open_cards(&self) -> &[Card] {
        &self.open_cards
    }

    #[must_use]
    pub fn vira(&self) -> Card {
        self.vira
    }

    #[must_use]
    pub fn hand_points(&self) -> HandPoints {
        self.hand_points
    }

    /// Cards the bot still holds.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }

    #[must_use]
    pub fn opponent_score(&self) -> u8 {
        self.opponent_score
    }

    #[must_use]
    pub fn opponent_card(&self) -> Option<Card> {
        self.opponent_card
    }

    /// Whether the bot opens the current round.
    #[must_use]
    pub fn is_first_to_play(&self) -> bool {
        self.opponent_card.is_none()
    }
}

/// Builder step 1: hand-wide information.
#[must_use]
#[derive(Debug)]
pub struct GameInfoStep(());

impl GameInfoStep {
    pub fn game_info(
        self,
        round_results: Vec<RoundResult>,
        open_cards: Vec<Card>,
        vira: Card,
        hand_points: HandPoints,
    ) -> BotInfoStep {
        BotInfoStep {
            round_results,
            open_cards,
            vira,
            hand_points,
        }
    }
}

/// Builder step 2: the bot's own cards and score.
#[must_use]
#[derive(Debug)]
pub struct BotInfoStep {
    round_results: Vec<RoundResult>,
    open_cards: Vec<Card>,
    vira: Card,
    hand_points: HandPoints,
}

impl BotInfoStep {
    pub fn bot_info(self, cards: Vec<Card>, score: u8) -> OpponentScoreStep {
        OpponentScoreStep {
            game: self,
            cards,
            score,
        }
    }
}

/// Builder step 3: the opponent's score.
#[must_use]
#[derive(Debug)]
pub struct OpponentScoreStep {
    game: BotInfoStep,
    cards: Vec<Card>,
    score: u8,
}

impl OpponentScoreStep {
    pub fn opponent_score(self, opponent_score: u8) -> ReadyStep {
        let OpponentScoreStep { game, cards, score } = self;
        ReadyStep(GameIntel {
            round_results: game.round_results,
            open_cards: game.open_cards,
            vira: game.vira,
            hand_points: game.hand_points,
            cards,
            score,
            opponent_score,
            opponent_card: None,
        })
    }
}

/// Final builder step. The opponent card is optional.
#[must_use]
#[derive(Debug)]
pub struct ReadyStep(GameIntel);

impl ReadyStep {
    /// Card the bot has to answer. Calling again replaces it.
    pub fn opponent_card(mut self, card: Card) -> Self {
        self.0.opponent_card = Some(card);
        self
    }

    pub fn build(self) -> GameIntel {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_round_result_for_player() {
        let (a, b) = (PlayerId::random(), PlayerId::random());
        assert_eq!(RoundResult::for_player(Some(a), a), RoundResult::Won);
        assert_eq!(RoundResult::for_player(Some(b), a), RoundResult::Lost);
        assert_eq!(RoundResult::for_player(None, a), RoundResult::Drew);
    }

    #[test]
    fn test_builder_without_opponent_card() {
        let intel = GameIntel::builder()
            .game_info(vec![], vec![card("4D")], card("4D"), HandPoints::Three)
            .bot_info(vec![card("3C"), card("KH")], 2)
            .opponent_score(9)
            .build();

        assert_eq!(intel.cards(), &[card("3C"), card("KH")]);
        assert_eq!(intel.score(), 2);
        assert_eq!(intel.opponent_score(), 9);
        assert_eq!(intel.hand_points(), HandPoints::Three);
        assert_eq!(intel.opponent_card(), None);
        assert!(intel.is_first_to_play());
    }

    #[test]
    fn test_opponent_card_last_write_wins() {
        let intel = GameIntel::builder()
            .game_info(vec![RoundResult::Lost], vec![card("4D")], card("4D"), HandPoints::One)
            .bot_info(vec![card("3C")], 0)
            .opponent_score(1)
            .opponent_card(card("KH"))
            .opponent_card(card("7S"))
            .build();

        assert_eq!(intel.opponent_card(), Some(card("7S")));
        assert!(!intel.is_first_to_play());
        assert_eq!(intel.round_results(), &[RoundResult::Lost]);
    }
}
