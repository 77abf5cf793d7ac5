//! The hand aggregate.
//!
//! ## Hand
//!
//! Owns both players, the dealt and open cards, the played rounds, the
//! bet negotiation and the append-only history. Every action goes through
//! [`Hand::apply`]:
//!
//! 1. The actor must be the current player (`IllegalArgument`).
//! 2. The action must be in the legal set (`IllegalState`).
//! 3. The current [`HandState`] runs the transition on a clone of the hand.
//!
//! The clone replaces the hand only when the transition succeeds. All
//! collections are `im` persistent structures, so the clone is cheap.
//!
//! ## Turn order
//!
//! `first_to_play` leads each round. After a round won by `last_to_play`
//! the two roles swap; a drawn round keeps them.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::action::{Action, Event, PossibleAction, PossibleActions};
use super::intel::Intel;
use super::points::HandPoints;
use super::result::HandResult;
use super::round::Round;
use super::state::HandState;
use crate::bot::{GameIntel, RoundResult};
use crate::cards::{Card, Deck};
use crate::core::{HandConfig, Player, PlayerId, CARDS_PER_PLAYER, MAO_DE_ONZE_SCORE, MAX_SCORE};
use crate::error::{Result, TrucoError};

/// One hand of Truco between two players.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Hand {
    // === Setup ===
    pub(super) config: HandConfig,
    /// Players in construction order.
    players: [Player; 2],
    vira: Card,
    dealt_cards: Vector<Card>,

    // === Play ===
    /// Vira first, then every card thrown in this hand.
    pub(super) open_cards: Vector<Card>,
    pub(super) rounds_played: Vector<Round>,
    pub(super) card_to_play_against: Option<Card>,
    pub(super) first_to_play: PlayerId,
    pub(super) last_to_play: PlayerId,
    pub(super) current_player: PlayerId,
    pub(super) event_player: Option<PlayerId>,

    // === Bet ===
    pub(super) points: HandPoints,
    pub(super) points_proposal: Option<HandPoints>,
    pub(super) last_bet_raiser: Option<PlayerId>,

    // === Outcome ===
    pub(super) state: HandState,
    pub(super) possible_actions: PossibleActions,
    pub(super) result: Option<HandResult>,
    history: Vector<Intel>,
}

impl Hand {
    /// Start a hand with default rules. `first` leads the first round.
    pub fn new(first: Player, last: Player, vira: Card) -> Result<Self> {
        Self::with_config(first, last, vira, HandConfig::default())
    }

    /// Start a hand with custom rules.
    ///
    /// The vira and both players' cards must be distinct open cards. If
    /// exactly one player has 11 points the hand starts waiting for that
    /// player's mão de onze decision.
    pub fn with_config(first: Player, last: Player, vira: Card, config: HandConfig) -> Result<Self> {
        if first.id() == last.id() {
            return Err(TrucoError::illegal_argument(
                "a hand needs two different players",
            ));
        }
        if vira.is_closed() {
            return Err(TrucoError::rule_violation("vira must be an open card"));
        }
        if config.mao_de_onze_stake == HandPoints::Zero
            || config.mao_de_onze_quit_stake == HandPoints::Zero
        {
            return Err(TrucoError::illegal_argument(
                "mao de onze stakes must not be zero",
            ));
        }

        let dealt_cards: Vector<Card> = std::iter::once(vira)
            .chain(first.cards().iter().copied())
            .chain(last.cards().iter().copied())
            .collect();
        let mut seen = FxHashSet::default();
        for &card in &dealt_cards {
            if card.is_closed() {
                return Err(TrucoError::rule_violation("closed cards can not be dealt"));
            }
            if !seen.insert(card) {
                return Err(TrucoError::rule_violation(format!(
                    "card {card} has been dealt more than once"
                )));
            }
        }

        let (first_id, last_id) = (first.id(), last.id());
        let mut hand = Self {
            config,
            players: [first, last],
            vira,
            dealt_cards,
            open_cards: Vector::new(),
            rounds_played: Vector::new(),
            card_to_play_against: None,
            first_to_play: first_id,
            last_to_play: last_id,
            current_player: first_id,
            event_player: None,
            points: HandPoints::One,
            points_proposal: None,
            last_bet_raiser: None,
            state: HandState::NoCard,
            possible_actions: PossibleActions::none(),
            result: None,
            history: Vector::new(),
        };
        hand.add_open_card(vira)?;

        if hand.is_mao_de_onze() {
            hand.current_player = hand
                .players
                .iter()
                .find(|p| p.score() == MAO_DE_ONZE_SCORE)
                .map_or(first_id, Player::id);
            hand.enter(HandState::WaitingMaoDeOnze);
        } else {
            hand.enter(HandState::NoCard);
        }
        hand.record(Event::HandStart);

        debug!(
            vira = %vira,
            first = %first_id,
            last = %last_id,
            state = %hand.state,
            "hand started"
        );
        Ok(hand)
    }

    /// Deal three cards to each player and draw the vira from `deck`.
    pub fn deal(first: Player, last: Player, deck: &mut Deck) -> Result<Self> {
        Self::deal_with_config(first, last, deck, HandConfig::default())
    }

    pub fn deal_with_config(
        mut first: Player,
        mut last: Player,
        deck: &mut Deck,
        config: HandConfig,
    ) -> Result<Self> {
        first.set_cards(deck.take(CARDS_PER_PLAYER)?);
        last.set_cards(deck.take(CARDS_PER_PLAYER)?);
        let vira = deck.take_one()?;
        Self::with_config(first, last, vira, config)
    }

    // === Actions ===

    /// Open a round with `card`.
    pub fn play_first_card(&mut self, player: PlayerId, card: Card) -> Result<()> {
        self.act(player, Action::PlayFirstCard(card))
    }

    /// Answer the card waiting on the table with `card`, closing the round.
    pub fn play_second_card(&mut self, player: PlayerId, card: Card) -> Result<()> {
        self.act(player, Action::PlaySecondCard(card))
    }

    /// Ask the opponent to raise the stake.
    pub fn raise(&mut self, player: PlayerId) -> Result<()> {
        self.act(player, Action::Raise)
    }

    /// Accept the pending raise or the mão de onze.
    pub fn accept(&mut self, responder: PlayerId) -> Result<()> {
        self.act(responder, Action::Accept)
    }

    /// Run from the pending raise or the mão de onze. The opponent wins.
    pub fn quit(&mut self, responder: PlayerId) -> Result<()> {
        self.act(responder, Action::Quit)
    }

    /// Throw a card the player holds, face up.
    ///
    /// Opens or closes the round depending on whether a card is waiting
    /// to be answered. The card leaves the player's hand only if the play
    /// is accepted.
    pub fn play_card(&mut self, player: PlayerId, card: Card) -> Result<()> {
        self.throw_card(player, card, false)
    }

    /// Throw a card the player holds, face down.
    pub fn discard_card(&mut self, player: PlayerId, card: Card) -> Result<()> {
        self.throw_card(player, card, true)
    }

    /// Run `action` against a copy of this hand and return the copy.
    ///
    /// `self` is never modified. The `&mut self` action methods are built
    /// on this.
    pub fn apply(&self, actor: PlayerId, action: Action) -> Result<Hand> {
        self.validate_request(actor, action.requires())?;
        let mut next = self.clone();
        next.event_player = Some(actor);
        self.state.transition(&mut next, actor, action)?;
        Ok(next)
    }

    fn throw_card(&mut self, player: PlayerId, card: Card, face_down: bool) -> Result<()> {
        self.validate_request(player, PossibleAction::Play)?;
        let holder = self.player(player)?;
        if !holder.owns(card) {
            return Err(TrucoError::illegal_argument(format!(
                "{} does not hold card {card}",
                holder.username()
            )));
        }

        let thrown = if face_down { Card::closed() } else { card };
        let action = match self.card_to_play_against {
            Some(_) => Action::PlaySecondCard(thrown),
            None => Action::PlayFirstCard(thrown),
        };
        self.commit(player, action, |next| {
            let holder = next.player_mut(player)?;
            if face_down {
                holder.discard(card)?;
            } else {
                holder.play(card)?;
            }
            Ok(())
        })
    }

    fn act(&mut self, actor: PlayerId, action: Action) -> Result<()> {
        self.commit(actor, action, |_| Ok(()))
    }

    fn commit(
        &mut self,
        actor: PlayerId,
        action: Action,
        finish: impl FnOnce(&mut Hand) -> Result<()>,
    ) -> Result<()> {
        let next = self.apply(actor, action).and_then(|mut next| {
            finish(&mut next)?;
            Ok(next)
        });
        match next {
            Ok(next) => {
                *self = next;
                debug!(
                    player = %actor,
                    action = ?action,
                    state = %self.state,
                    points = self.points.get(),
                    legal = %self.possible_actions,
                    "hand action applied"
                );
                if let Some(result) = self.result {
                    debug!(%result, rounds = self.rounds_played.len(), "hand finished");
                }
                Ok(())
            }
            Err(err) => {
                debug!(player = %actor, action = ?action, error = %err, "hand action rejected");
                Err(err)
            }
        }
    }

    fn validate_request(&self, actor: PlayerId, required: PossibleAction) -> Result<()> {
        if actor != self.current_player {
            return Err(TrucoError::illegal_argument(format!(
                "{actor} can not {required} in {} turn",
                self.current_player
            )));
        }
        if !self.possible_actions.contains(required) {
            return Err(TrucoError::illegal_state(format!(
                "can not {required} in state {}; legal actions are {}",
                self.state, self.possible_actions
            )));
        }
        Ok(())
    }

    // === Transition support ===

    /// Install `state` and recompute the legal actions for the current
    /// player.
    pub(super) fn enter(&mut self, state: HandState) {
        self.state = state;
        self.possible_actions = state.possible_actions(self.can_raise_bet());
        trace!(state = %state, legal = %self.possible_actions, "legal actions recomputed");
    }

    /// Append a history entry describing the hand as it is now.
    pub(super) fn record(&mut self, event: Event) {
        let scores = [self.first_to_play, self.last_to_play]
            .map(|id| (id, self.players.iter().find(|p| p.id() == id).map_or(0, Player::score)));
        let intel = Intel {
            sequence: self.history.len() as u32,
            event,
            event_player: match event {
                Event::HandStart => None,
                _ => self.event_player,
            },
            current_player: self.current_player,
            state: self.state,
            possible_actions: self.possible_actions,
            points: self.points,
            points_proposal: self.points_proposal,
            vira: self.vira,
            open_cards: self.open_cards.clone(),
            round_winners: self.rounds_played.iter().map(Round::winner).collect(),
            card_to_play_against: self.card_to_play_against,
            scores,
            result: self.result,
        };
        self.history.push_back(intel);
    }

    /// Record a card as thrown. Open cards must come from this deal and can
    /// be thrown once; the closed card can be thrown any number of times.
    pub(super) fn add_open_card(&mut self, card: Card) -> Result<()> {
        if !card.is_closed() {
            if !self.dealt_cards.contains(&card) {
                return Err(TrucoError::rule_violation(format!(
                    "card {card} has not been dealt in this hand"
                )));
            }
            if self.open_cards.contains(&card) {
                return Err(TrucoError::rule_violation(format!(
                    "card {card} has already been played in this hand"
                )));
            }
        }
        self.open_cards.push_back(card);
        Ok(())
    }

    /// Resolve the round opened by `card_to_play_against`.
    pub(super) fn play_round(&mut self, last_card: Card) -> Result<()> {
        let first_card = self
            .card_to_play_against
            .ok_or_else(|| TrucoError::illegal_state("no card is waiting to be answered"))?;
        let round = Round::play(
            self.first_to_play,
            first_card,
            self.last_to_play,
            last_card,
            self.vira,
        )?;
        trace!(winner = ?round.winner(), first_card = %first_card, last_card = %last_card, "round resolved");
        self.rounds_played.push_back(round);
        Ok(())
    }

    pub(super) fn define_round_playing_order(&mut self) {
        let last_winner = self.rounds_played.last().and_then(Round::winner);
        if last_winner == Some(self.last_to_play) {
            std::mem::swap(&mut self.first_to_play, &mut self.last_to_play);
        }
        self.current_player = self.first_to_play;
    }

    pub(super) fn check_for_winner_after_second_round(&mut self) -> Result<()> {
        let first = self.round_winner(0);
        let second = self.round_winner(1);
        let winner = match (first, second) {
            (None, Some(w)) | (Some(w), None) => Some(w),
            (Some(a), Some(b)) if a == b => Some(a),
            _ => None,
        };
        if let Some(winner) = winner {
            self.result = Some(HandResult::of(winner, self.points)?);
        }
        Ok(())
    }

    pub(super) fn check_for_winner_after_third_round(&mut self) -> Result<()> {
        let winner = match self.round_winner(2) {
            Some(w) => Some(w),
            None => self.round_winner(0),
        };
        self.result = Some(match winner {
            Some(w) => HandResult::of(w, self.points)?,
            None => HandResult::draw(),
        });
        Ok(())
    }

    fn round_winner(&self, index: usize) -> Option<PlayerId> {
        self.rounds_played.get(index).and_then(Round::winner)
    }

    /// The participant that is not `id`. Callers pass a participant.
    pub(super) fn other_player(&self, id: PlayerId) -> PlayerId {
        if self.players[0].id() == id {
            self.players[1].id()
        } else {
            self.players[0].id()
        }
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| TrucoError::illegal_argument(format!("{id} is not playing this hand")))
    }

    // === Rules ===

    /// Whether the current player may raise the stake now.
    ///
    /// Nobody raises twice in a row, while a player is at 11 points or
    /// beyond the ceiling of [`Hand::max_hand_points`].
    #[must_use]
    pub fn can_raise_bet(&self) -> bool {
        let max = self.max_hand_points();
        let fits = |points: HandPoints| points.increase().is_ok_and(|next| next.get() <= max);

        self.last_bet_raiser != Some(self.current_player)
            && self.players.iter().all(|p| p.score() < MAO_DE_ONZE_SCORE)
            && fits(self.points)
            && self.points_proposal.map_or(true, fits)
    }

    /// Highest stake worth playing for: what the trailing player still
    /// needs to win the match, rounded up to a multiple of three.
    #[must_use]
    pub fn max_hand_points(&self) -> u8 {
        let lowest = self.players.iter().map(Player::score).min().unwrap_or(0);
        let needed = MAX_SCORE.saturating_sub(lowest);
        needed.div_ceil(3) * 3
    }

    /// Exactly one player has 11 points.
    #[must_use]
    pub fn is_mao_de_onze(&self) -> bool {
        self.players
            .iter()
            .filter(|p| p.score() == MAO_DE_ONZE_SCORE)
            .count()
            == 1
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> HandState {
        self.state
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn possible_actions(&self) -> PossibleActions {
        self.possible_actions
    }

    /// The hand has a result, a draw included.
    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<HandResult> {
        self.result
    }

    /// Committed stake.
    #[must_use]
    pub fn points(&self) -> HandPoints {
        self.points
    }

    /// Stake of the raise waiting for an answer.
    #[must_use]
    pub fn points_proposal(&self) -> Option<HandPoints> {
        self.points_proposal
    }

    #[must_use]
    pub fn vira(&self) -> Card {
        self.vira
    }

    #[must_use]
    pub fn open_cards(&self) -> &Vector<Card> {
        &self.open_cards
    }

    #[must_use]
    pub fn dealt_cards(&self) -> &Vector<Card> {
        &self.dealt_cards
    }

    #[must_use]
    pub fn rounds_played(&self) -> &Vector<Round> {
        &self.rounds_played
    }

    #[must_use]
    pub fn number_of_rounds_played(&self) -> usize {
        self.rounds_played.len()
    }

    #[must_use]
    pub fn card_to_play_against(&self) -> Option<Card> {
        self.card_to_play_against
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
    pub fn last_bet_raiser(&self) -> Option<PlayerId> {
        self.last_bet_raiser
    }

    /// Player behind the most recent accepted action.
    #[must_use]
    pub fn event_player(&self) -> Option<PlayerId> {
        self.event_player
    }

    #[must_use]
    pub fn config(&self) -> &HandConfig {
        &self.config
    }

    /// Full history, oldest first. Starts with the `HandStart` entry.
    #[must_use]
    pub fn intel_history(&self) -> &Vector<Intel> {
        &self.history
    }

    #[must_use]
    pub fn last_intel(&self) -> Option<&Intel> {
        self.history.last()
    }

    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| TrucoError::illegal_argument(format!("{id} is not playing this hand")))
    }

    pub fn opponent_of(&self, id: PlayerId) -> Result<PlayerId> {
        self.player(id)?;
        Ok(self.other_player(id))
    }

    /// Snapshot of the hand from `player`'s seat, for bot strategies.
    ///
    /// The opponent's card is included only while it waits for `player`'s
    /// answer.
    pub fn intel_for(&self, player: PlayerId) -> Result<GameIntel> {
        let me = self.player(player)?;
        let opponent = self.player(self.other_player(player))?;

        let round_results = self
            .rounds_played
            .iter()
            .map(|round| RoundResult::for_player(round.winner(), player))
            .collect();

        let mut intel = GameIntel::builder()
            .game_info(
                round_results,
                self.open_cards.iter().copied().collect(),
                self.vira,
                self.points,
            )
            .bot_info(me.cards().to_vec(), me.score())
            .opponent_score(opponent.score());
        if let Some(card) = self.card_to_play_against {
            if self.last_to_play == player {
                intel = intel.opponent_card(card);
            }
        }
        Ok(intel.build())
    }

    /// Give the players back, e.g. to credit the result and deal again.
    #[must_use]
    pub fn into_players(self) -> [Player; 2] {
        self.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn cards(list: &[&str]) -> Vec<Card> {
        list.iter().map(|c| card(c)).collect()
    }

    fn hand_with_scores(first_score: u8, last_score: u8) -> Hand {
        let first = Player::new("Ana")
            .with_cards(cards(&["3C", "2S", "AH"]))
            .with_score(first_score);
        let last = Player::new("Bia")
            .with_cards(cards(&["KD", "JC", "7H"]))
            .with_score(last_score);
        Hand::new(first, last, card("4D")).unwrap()
    }

    #[test]
    fn test_new_hand_starts_in_no_card() {
        let hand = hand_with_scores(0, 0);

        assert_eq!(hand.state(), HandState::NoCard);
        assert_eq!(hand.current_player(), hand.first_to_play());
        assert_eq!(hand.points(), HandPoints::One);
        assert_eq!(hand.open_cards().len(), 1);
        assert_eq!(hand.open_cards()[0], card("4D"));
        assert_eq!(hand.dealt_cards().len(), 7);
        assert!(hand
            .possible_actions()
            .contains(PossibleAction::Raise));

        let start = hand.last_intel().unwrap();
        assert_eq!(start.event, Event::HandStart);
        assert_eq!(start.event_player, None);
        assert_eq!(start.sequence, 0);
    }

    #[test]
    fn test_duplicate_and_closed_deals_rejected() {
        let first = Player::new("Ana").with_cards(cards(&["3C", "2S", "AH"]));
        let last = Player::new("Bia").with_cards(cards(&["3C", "JC", "7H"]));
        let err = Hand::new(first.clone(), last, card("4D")).unwrap_err();
        assert!(err.is_rule_violation());

        let last = Player::new("Bia").with_cards(cards(&["KD", "JC", "7H"]));
        let err = Hand::new(first.clone(), last.clone(), Card::closed()).unwrap_err();
        assert!(err.is_rule_violation());

        let err = Hand::new(first.clone(), first, card("4D")).unwrap_err();
        assert!(err.is_illegal_argument());
    }

    #[test]
    fn test_max_hand_points() {
        assert_eq!(hand_with_scores(0, 0).max_hand_points(), 12);
        assert_eq!(hand_with_scores(4, 2).max_hand_points(), 12);
        assert_eq!(hand_with_scores(4, 5).max_hand_points(), 9);
        assert_eq!(hand_with_scores(7, 10).max_hand_points(), 6);
        assert_eq!(hand_with_scores(10, 9).max_hand_points(), 3);
    }

    #[test]
    fn test_mao_de_onze_detection() {
        assert!(hand_with_scores(11, 3).is_mao_de_onze());
        assert!(hand_with_scores(3, 11).is_mao_de_onze());
        assert!(!hand_with_scores(11, 11).is_mao_de_onze());
        assert!(!hand_with_scores(10, 3).is_mao_de_onze());
    }

    #[test]
    fn test_no_raise_when_a_player_has_eleven() {
        let hand = hand_with_scores(11, 11);
        assert_eq!(hand.state(), HandState::NoCard);
        assert!(!hand.can_raise_bet());
        assert!(!hand.possible_actions().contains(PossibleAction::Raise));
    }

    #[test]
    fn test_add_open_card_rules() {
        let mut hand = hand_with_scores(0, 0);

        assert!(hand.add_open_card(card("5S")).unwrap_err().is_rule_violation());
        assert!(hand.add_open_card(card("4D")).unwrap_err().is_rule_violation());

        hand.add_open_card(card("3C")).unwrap();
        assert!(hand.add_open_card(card("3C")).unwrap_err().is_rule_violation());

        hand.add_open_card(Card::closed()).unwrap();
        hand.add_open_card(Card::closed()).unwrap();
        assert_eq!(hand.open_cards().len(), 4);
    }

    #[test]
    fn test_half_hidden_card_never_reaches_open_cards() {
        let mut hand = hand_with_scores(0, 0);

        let forged = serde_json::from_str::<Card>(r#"{"rank":"Hidden","suit":"Clubs"}"#);
        assert!(forged.is_err());

        let closed: Card = serde_json::from_str(r#"{"rank":"Hidden","suit":"Hidden"}"#).unwrap();
        hand.add_open_card(closed).unwrap();
        assert_eq!(hand.open_cards().last(), Some(&Card::closed()));
    }

    #[test]
    fn test_zero_mao_de_onze_stakes_rejected() {
        let build = |config: HandConfig| {
            let first = Player::new("Ana")
                .with_cards(cards(&["3C", "2S", "AH"]))
                .with_score(11);
            let last = Player::new("Bia").with_cards(cards(&["KD", "JC", "7H"]));
            Hand::with_config(first, last, card("4D"), config)
        };

        let err = build(HandConfig::default().with_mao_de_onze_stake(HandPoints::Zero)).unwrap_err();
        assert!(err.is_illegal_argument());

        let err = build(HandConfig::default().with_mao_de_onze_quit_stake(HandPoints::Zero))
            .unwrap_err();
        assert!(err.is_illegal_argument());

        let hand = build(HandConfig::default().with_mao_de_onze_stake(HandPoints::Six)).unwrap();
        assert_eq!(hand.state(), HandState::WaitingMaoDeOnze);
    }

    #[test]
    fn test_apply_leaves_receiver_untouched() {
        let hand = hand_with_scores(0, 0);
        let first = hand.first_to_play();

        let next = hand.apply(first, Action::PlayFirstCard(card("3C"))).unwrap();
        assert_eq!(next.state(), HandState::OneCard);
        assert_eq!(next.intel_history().len(), 2);

        assert_eq!(hand.state(), HandState::NoCard);
        assert_eq!(hand.intel_history().len(), 1);
        assert_eq!(hand.open_cards().len(), 1);
    }

    #[test]
    fn test_play_card_moves_card_out_of_player() {
        let mut hand = hand_with_scores(0, 0);
        let first = hand.first_to_play();

        hand.play_card(first, card("2S")).unwrap();
        assert!(!hand.player(first).unwrap().owns(card("2S")));
        assert_eq!(hand.card_to_play_against(), Some(card("2S")));

        let last = hand.last_to_play();
        let err = hand.play_card(last, card("3C")).unwrap_err();
        assert!(err.is_illegal_argument());
        assert_eq!(hand.player(last).unwrap().cards().len(), 3);
    }

    #[test]
    fn test_opponent_of_unknown_player() {
        let hand = hand_with_scores(0, 0);
        let err = hand.opponent_of(PlayerId::random()).unwrap_err();
        assert!(err.is_illegal_argument());
        assert_eq!(hand.opponent_of(hand.first_to_play()).unwrap(), hand.last_to_play());
    }

    #[test]
    fn test_hand_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Hand>();
    }
}
