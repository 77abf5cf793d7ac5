//! A single round: one card from each player, resolved against the vira.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::error::{Result, TrucoError};

/// A played and resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    first_to_play: PlayerId,
    first_card: Card,
    last_to_play: PlayerId,
    last_card: Card,
    vira: Card,
    winner: Option<PlayerId>,
}

impl Round {
    /// Resolve a round. The stronger card under `vira` wins; equal
    /// strength is a draw.
    ///
    /// Two identical open cards, or a played vira, cannot come out of a
    /// single deck and are rejected as rule violations.
    pub fn play(
        first_to_play: PlayerId,
        first_card: Card,
        last_to_play: PlayerId,
        last_card: Card,
        vira: Card,
    ) -> Result<Self> {
        if first_to_play == last_to_play {
            return Err(TrucoError::illegal_argument(
                "a round needs two different players",
            ));
        }
        if first_card == last_card && !first_card.is_closed() {
            return Err(TrucoError::rule_violation(format!(
                "card {first_card} can not be played twice in a round"
            )));
        }
        if first_card == vira || last_card == vira {
            return Err(TrucoError::rule_violation(format!(
                "vira {vira} can not be played in a round"
            )));
        }

        let winner = match first_card.compare_value_to(last_card, vira) {
            Ordering::Greater => Some(first_to_play),
            Ordering::Less => Some(last_to_play),
            Ordering::Equal => None,
        };

        Ok(Self {
            first_to_play,
            first_card,
            last_to_play,
            last_card,
            vira,
            winner,
        })
    }

    /// Round winner, `None` on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Card that won the round, `None` on a draw.
    #[must_use]
    pub fn winning_card(&self) -> Option<Card> {
        self.winner.map(|w| {
            if w == self.first_to_play {
                self.first_card
            } else {
                self.last_card
            }
        })
    }

    #[must_use]
    pub fn first_to_play(&self) -> PlayerId {
        self.first_to_play
    }

    #[must_use]
    pub fn last_to_play(&self) -> PlayerId {
        self.last_to_play
    }

    #[must_use]
    pub fn first_card(&self) -> Card {
        self.first_card
    }

    #[must_use]
    pub fn last_card(&self) -> Card {
        self.last_card
    }

    #[must_use]
    pub fn vira(&self) -> Card {
        self.vira
    }
}
