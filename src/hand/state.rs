//! Hand states and their transitions.
//!
//! ## States
//!
//! | State                  | Legal actions                           |
//! |------------------------|-----------------------------------------|
//! | `NoCard`               | PLAY, RAISE (if the bet can be raised)  |
//! | `OneCard`              | PLAY, RAISE (if the bet can be raised)  |
//! | `WaitingMaoDeOnze`     | ACCEPT, QUIT                            |
//! | `WaitingRaiseResponse` | ACCEPT, QUIT, RAISE (re-raise)          |
//! | `Done`                 | none                                    |
//!
//! `HandState::transition` matches every `(state, action)` pair. Pairs the
//! hand never advertises still have an arm, which rejects them with
//! `IllegalState`.
//!
//! Transitions mutate the hand they are given. `Hand` only hands them a
//! working copy and keeps it when the transition returns `Ok`, so an
//! error midway leaves the live hand untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::action::{Action, Event, PossibleAction, PossibleActions};
use super::aggregate::Hand;
use super::points::HandPoints;
use super::result::HandResult;
use crate::cards::Card;
use crate::core::PlayerId;
use crate::error::{Result, TrucoError};

/// The five hand states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandState {
    /// Waiting for the first card of a round.
    NoCard,
    /// Waiting for the second card of a round.
    OneCard,
    /// The player with 11 points decides whether to play the hand.
    WaitingMaoDeOnze,
    /// A raise is waiting for an answer.
    WaitingRaiseResponse,
    /// The hand has a result.
    Done,
}

impl HandState {
    /// Legal actions when entering this state.
    pub(super) fn possible_actions(self, can_raise_bet: bool) -> PossibleActions {
        let base = match self {
            HandState::NoCard | HandState::OneCard => {
                PossibleActions::of(&[PossibleAction::Play])
            }
            HandState::WaitingMaoDeOnze => {
                return PossibleActions::of(&[PossibleAction::Accept, PossibleAction::Quit])
            }
            HandState::WaitingRaiseResponse => {
                PossibleActions::of(&[PossibleAction::Accept, PossibleAction::Quit])
            }
            HandState::Done => return PossibleActions::none(),
        };
        if can_raise_bet {
            base.with(PossibleAction::Raise)
        } else {
            base
        }
    }

    /// Run `action` by `actor` against `hand`, which must be in this state.
    pub(super) fn transition(self, hand: &mut Hand, actor: PlayerId, action: Action) -> Result<()> {
        match (self, action) {
            (HandState::NoCard, Action::PlayFirstCard(card)) => play_first_card(hand, card),
            (HandState::NoCard, Action::PlaySecondCard(_)) => Err(TrucoError::illegal_state(
                "can not play a second card before playing a first one",
            )),
            (HandState::NoCard | HandState::OneCard, Action::Raise) => raise(hand, actor),
            (HandState::NoCard | HandState::OneCard, Action::Accept) => Err(
                TrucoError::illegal_state("no raising bet request to be accepted"),
            ),
            (HandState::NoCard | HandState::OneCard, Action::Quit) => Err(
                TrucoError::illegal_state("no raising bet request to quit"),
            ),

            (HandState::OneCard, Action::PlayFirstCard(_)) => {
                let pending = hand.card_to_play_against.unwrap_or_else(Card::closed);
                Err(TrucoError::illegal_state(format!(
                    "first card has already been played: {pending}"
                )))
            }
            (HandState::OneCard, Action::PlaySecondCard(card)) => play_second_card(hand, card),

            (HandState::WaitingMaoDeOnze, Action::PlayFirstCard(_) | Action::PlaySecondCard(_)) => {
                Err(TrucoError::illegal_state(
                    "can not play a card before answering the mão de onze",
                ))
            }
            (HandState::WaitingMaoDeOnze, Action::Raise) => Err(TrucoError::illegal_state(
                "can not raise the bet in mão de onze",
            )),
            (HandState::WaitingMaoDeOnze, Action::Accept) => accept_mao_de_onze(hand),
            (HandState::WaitingMaoDeOnze, Action::Quit) => quit_mao_de_onze(hand, actor),

            (
                HandState::WaitingRaiseResponse,
                Action::PlayFirstCard(_) | Action::PlaySecondCard(_),
            ) => Err(TrucoError::illegal_state(
                "can not play a card while a raise is waiting for an answer",
            )),
            (HandState::WaitingRaiseResponse, Action::Raise) => re_raise(hand, actor),
            (HandState::WaitingRaiseResponse, Action::Accept) => accept_raise(hand),
            (HandState::WaitingRaiseResponse, Action::Quit) => quit_raise(hand, actor),

            (HandState::Done, _) => Err(TrucoError::illegal_state("hand is already done")),
        }
    }
}

impl fmt::Display for HandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandState::NoCard => "NOCARD",
            HandState::OneCard => "ONECARD",
            HandState::WaitingMaoDeOnze => "WAITINGMAODEONZE",
            HandState::WaitingRaiseResponse => "WAITINGRAISERESPONSE",
            HandState::Done => "DONE",
        };
        f.write_str(name)
    }
}

fn reject_closed_card_in_first_round(hand: &Hand, card: Card) -> Result<()> {
    if hand.rounds_played.is_empty()
        && card.is_closed()
        && !hand.config.allow_closed_card_in_first_round
    {
        return Err(TrucoError::rule_violation(
            "can not throw a closed card in first round",
        ));
    }
    Ok(())
}

// === Card play ===

fn play_first_card(hand: &mut Hand, card: Card) -> Result<()> {
    reject_closed_card_in_first_round(hand, card)?;
    hand.add_open_card(card)?;
    hand.card_to_play_against = Some(card);
    hand.current_player = hand.last_to_play;
    hand.enter(HandState::OneCard);
    hand.record(Event::Play);
    Ok(())
}

fn play_second_card(hand: &mut Hand, card: Card) -> Result<()> {
    reject_closed_card_in_first_round(hand, card)?;
    hand.add_open_card(card)?;
    hand.play_round(card)?;
    hand.card_to_play_against = None;

    match hand.number_of_rounds_played() {
        1 => {
            hand.define_round_playing_order();
            hand.enter(HandState::NoCard);
        }
        2 => {
            hand.check_for_winner_after_second_round()?;
            if hand.result.is_some() {
                hand.enter(HandState::Done);
            } else {
                hand.define_round_playing_order();
                hand.current_player = hand.first_to_play;
                hand.enter(HandState::NoCard);
            }
        }
        3 => {
            hand.check_for_winner_after_third_round()?;
            hand.enter(HandState::Done);
        }
        n => {
            return Err(TrucoError::illegal_state(format!(
                "a hand has at most three rounds, found {n}"
            )))
        }
    }

    hand.record(Event::Play);
    Ok(())
}

// === Bet negotiation ===

fn raise(hand: &mut Hand, requester: PlayerId) -> Result<()> {
    hand.points_proposal = Some(hand.points.increase()?);
    hand.last_bet_raiser = Some(requester);
    hand.current_player = hand.other_player(requester);
    hand.enter(HandState::WaitingRaiseResponse);
    hand.record(Event::Raise);
    Ok(())
}

/// Raising over a pending proposal accepts it first.
fn re_raise(hand: &mut Hand, requester: PlayerId) -> Result<()> {
    let accepted = pending_proposal(hand)?;
    hand.points = accepted;
    hand.points_proposal = Some(accepted.increase()?);
    hand.last_bet_raiser = Some(requester);
    hand.current_player = hand.other_player(requester);
    hand.enter(HandState::WaitingRaiseResponse);
    hand.record(Event::Raise);
    Ok(())
}

fn accept_raise(hand: &mut Hand) -> Result<()> {
    hand.points = pending_proposal(hand)?;
    hand.points_proposal = None;
    // Play resumes with whoever raised: the leader before the first card,
    // the answering player after it.
    if hand.card_to_play_against.is_some() {
        hand.current_player = hand.last_to_play;
        hand.enter(HandState::OneCard);
    } else {
        hand.current_player = hand.first_to_play;
        hand.enter(HandState::NoCard);
    }
    hand.record(Event::Accept);
    Ok(())
}

fn quit_raise(hand: &mut Hand, responder: PlayerId) -> Result<()> {
    let winner = hand.other_player(responder);
    hand.result = Some(HandResult::of(winner, hand.points)?);
    hand.points_proposal = None;
    hand.enter(HandState::Done);
    hand.record(Event::Quit);
    Ok(())
}

fn pending_proposal(hand: &Hand) -> Result<HandPoints> {
    hand.points_proposal
        .ok_or_else(|| TrucoError::illegal_state("no raising bet request is pending"))
}

// === Mão de onze ===

fn accept_mao_de_onze(hand: &mut Hand) -> Result<()> {
    hand.points = hand.config.mao_de_onze_stake;
    hand.current_player = hand.first_to_play;
    hand.enter(HandState::NoCard);
    hand.record(Event::AcceptHand);
    Ok(())
}

fn quit_mao_de_onze(hand: &mut Hand, responder: PlayerId) -> Result<()> {
    let winner = hand.other_player(responder);
    hand.result = Some(HandResult::of(winner, hand.config.mao_de_onze_quit_stake)?);
    hand.enter(HandState::Done);
    hand.record(Event::QuitHand);
    Ok(())
}
