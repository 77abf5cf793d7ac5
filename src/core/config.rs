//! Rule constants and per-hand configuration.

use serde::{Deserialize, Serialize};

use crate::hand::HandPoints;

/// Score that wins a match. Player scores saturate here.
pub const MAX_SCORE: u8 = 12;

/// Score that puts a player in "mão de onze".
pub const MAO_DE_ONZE_SCORE: u8 = 11;

/// Cards dealt to each player at the start of a hand.
pub const CARDS_PER_PLAYER: usize = 3;

/// Tunable rules for a hand.
///
/// Defaults follow Truco Paulista.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandConfig {
    /// Stake of the hand once the mão de onze player accepts to play it.
    pub mao_de_onze_stake: HandPoints,

    /// Points the opponent receives when the mão de onze player runs.
    pub mao_de_onze_quit_stake: HandPoints,

    /// Whether the closed card may be played in the first round.
    pub allow_closed_card_in_first_round: bool,
}

impl Default for HandConfig {
    fn default() -> Self {
        Self {
            mao_de_onze_stake: HandPoints::Three,
            mao_de_onze_quit_stake: HandPoints::One,
            allow_closed_card_in_first_round: false,
        }
    }
}

impl HandConfig {
    /// Set the stake of an accepted mão de onze.
    pub fn with_mao_de_onze_stake(mut self, points: HandPoints) -> Self {
        self.mao_de_onze_stake = points;
        self
    }

    /// Set the points awarded when the mão de onze player runs.
    pub fn with_mao_de_onze_quit_stake(mut self, points: HandPoints) -> Self {
        self.mao_de_onze_quit_stake = points;
        self
    }

    /// Allow or forbid the closed card in the first round.
    pub fn with_closed_card_in_first_round(mut self, allowed: bool) -> Self {
        self.allow_closed_card_in_first_round = allowed;
        self
    }
}
