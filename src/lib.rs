//! # rust-truco
//!
//! Rules engine for a single hand of two-player Truco (Truco Paulista).
//!
//! ## Design Principles
//!
//! 1. **One Authority**: `Hand` decides whose turn it is, which actions are
//!    legal, how rounds resolve and when the hand ends. Callers only ask.
//!
//! 2. **Closed State Machine**: hand states are an enum and every
//!    `(state, action)` pair has an explicit outcome.
//!
//! 3. **All or Nothing**: an action either commits completely or returns an
//!    error and leaves the hand as it was.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`. Transitions
//!   run on a clone and the history is an append-only `im::Vector`.
//!
//! - **Deterministic Dealing**: decks are shuffled with a seeded ChaCha8
//!   RNG so any hand can be replayed.
//!
//! ## Modules
//!
//! - `core`: players, rule constants and configuration, RNG
//! - `cards`: cards, manilha ranking, deck
//! - `hand`: stake ladder, rounds, hand states, the `Hand` aggregate
//! - `bot`: bot snapshot, strategy trait, hand driver
//! - `error`: the engine error type
//!
//! ## Example
//!
//! ```
//! use rust_truco::{Card, Hand, HandState, Player};
//!
//! let card = |s: &str| s.parse::<Card>().unwrap();
//! let ana = Player::new("Ana").with_cards([card("3C"), card("2S"), card("AH")]);
//! let bia = Player::new("Bia").with_cards([card("KD"), card("JC"), card("7H")]);
//! let (ana_id, bia_id) = (ana.id(), bia.id());
//!
//! let mut hand = Hand::new(ana, bia, card("4D")).unwrap();
//! hand.play_card(ana_id, card("3C")).unwrap();
//! hand.play_card(bia_id, card("KD")).unwrap();
//!
//! assert_eq!(hand.number_of_rounds_played(), 1);
//! assert_eq!(hand.state(), HandState::NoCard);
//! assert_eq!(hand.current_player(), ana_id);
//! ```

pub mod bot;
pub mod cards;
pub mod core;
pub mod error;
pub mod hand;

// Re-export commonly used types
pub use crate::core::{
    GameRng, HandConfig, Player, PlayerId, CARDS_PER_PLAYER, MAO_DE_ONZE_SCORE,
    MAX_SCORE,
};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::hand::{
    Action, Event, Hand, HandPoints, HandResult, HandState, Intel, PossibleAction,
    PossibleActions, Round,
};

pub use crate::bot::{BotStrategy, CardToPlay, GameIntel, HandDriver, RaiseResponse, RoundResult};

pub use crate::error::{Result, TrucoError};
