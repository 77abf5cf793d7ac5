//! Hand history entries.
//!
//! The hand appends one `Intel` per accepted action (plus one when it
//! starts). Entries are immutable snapshots; the history only grows.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Event, PossibleActions};
use super::points::HandPoints;
use super::result::HandResult;
use super::state::HandState;
use crate::cards::Card;
use crate::core::PlayerId;

/// Point-in-time view of a hand, recorded after each accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intel {
    /// Position in the hand history, starting at 0.
    pub sequence: u32,
    pub event: Event,
    /// Player who caused the event; `None` for `HandStart`.
    pub event_player: Option<PlayerId>,
    /// Player expected to act next.
    pub current_player: PlayerId,
    pub state: HandState,
    pub possible_actions: PossibleActions,
    pub points: HandPoints,
    pub points_proposal: Option<HandPoints>,
    pub vira: Card,
    pub open_cards: Vector<Card>,
    /// Winner of each played round, `None` for a drawn round.
    pub round_winners: Vector<Option<PlayerId>>,
    pub card_to_play_against: Option<Card>,
    /// Match scores as `(player, score)`, first-to-play order at the time.
    pub scores: [(PlayerId, u8); 2],
    pub result: Option<HandResult>,
}

impl Intel {
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.result.is_some()
    }

    /// Score of a player at the time of this entry.
    #[must_use]
    pub fn score_of(&self, player: PlayerId) -> Option<u8> {
        self.scores
            .iter()
            .find(|(id, _)| *id == player)
            .map(|&(_, score)| score)
    }
}
