//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use rust_truco::bot::{BotStrategy, CardToPlay, GameIntel, RaiseResponse};
use rust_truco::{Card, Hand, Player, PlayerId};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level from `TEST_LOG`, then `RUST_LOG`,
/// then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(s: &str) -> Card {
    s.parse().unwrap()
}

pub fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|c| card(c)).collect()
}

/// A hand with its two player ids. `first` leads the first round.
pub struct Table {
    pub hand: Hand,
    pub first: PlayerId,
    pub last: PlayerId,
}

/// Deal fixed cards and scores.
pub fn table(
    first_cards: &[&str],
    first_score: u8,
    last_cards: &[&str],
    last_score: u8,
    vira: &str,
) -> Table {
    init_logging();
    let first = Player::new("Ana")
        .with_cards(cards(first_cards))
        .with_score(first_score);
    let last = Player::new("Bia")
        .with_cards(cards(last_cards))
        .with_score(last_score);
    let (first_id, last_id) = (first.id(), last.id());
    Table {
        hand: Hand::new(first, last, card(vira)).unwrap(),
        first: first_id,
        last: last_id,
    }
}

/// Vira 4D (manilha: fives). Ana holds 3C 2S AH, Bia holds KD JC 7H, so
/// Ana wins any round she plays a card in.
pub fn strong_first() -> Table {
    table(&["3C", "2S", "AH"], 0, &["KD", "JC", "7H"], 0, "4D")
}

/// Same cards as `strong_first` with the given scores.
pub fn scored(first_score: u8, last_score: u8) -> Table {
    table(&["3C", "2S", "AH"], first_score, &["KD", "JC", "7H"], last_score, "4D")
}

/// Bot that replays a fixed script of answers.
#[derive(Debug, Default)]
pub struct ScriptedBot {
    pub mao_de_onze: VecDeque<bool>,
    pub raises: VecDeque<bool>,
    pub cards: VecDeque<CardToPlay>,
    pub raise_responses: VecDeque<RaiseResponse>,
}

impl ScriptedBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn playing(cards: &[&str]) -> Self {
        Self {
            cards: cards.iter().map(|c| CardToPlay::Play(card(c))).collect(),
            ..Self::default()
        }
    }

    pub fn with_raises(mut self, raises: &[bool]) -> Self {
        self.raises = raises.iter().copied().collect();
        self
    }

    pub fn with_raise_responses(mut self, responses: &[RaiseResponse]) -> Self {
        self.raise_responses = responses.iter().copied().collect();
        self
    }

    pub fn with_mao_de_onze(mut self, answer: bool) -> Self {
        self.mao_de_onze.push_back(answer);
        self
    }

    pub fn with_discard(mut self, c: &str) -> Self {
        self.cards.push_back(CardToPlay::Discard(card(c)));
        self
    }
}

impl BotStrategy for ScriptedBot {
    fn mao_de_onze_response(&mut self, _intel: &GameIntel) -> bool {
        self.mao_de_onze.pop_front().unwrap_or(true)
    }

    fn decide_if_raises(&mut self, _intel: &GameIntel) -> bool {
        self.raises.pop_front().unwrap_or(false)
    }

    /// Scripted card, or the first held card once the script runs out.
    fn choose_card(&mut self, intel: &GameIntel) -> CardToPlay {
        self.cards
            .pop_front()
            .unwrap_or_else(|| CardToPlay::Play(intel.cards()[0]))
    }

    fn raise_response(&mut self, _intel: &GameIntel) -> RaiseResponse {
        self.raise_responses
            .pop_front()
            .unwrap_or(RaiseResponse::Accept)
    }
}
