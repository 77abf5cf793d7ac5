//! Core engine types: players, rule constants and configuration, RNG.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{HandConfig, CARDS_PER_PLAYER, MAO_DE_ONZE_SCORE, MAX_SCORE};
pub use player::{Player, PlayerCards, PlayerId};
pub use rng::GameRng;
