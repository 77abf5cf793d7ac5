//! Bot integration: the snapshot a strategy sees, the strategy trait, and
//! a driver that plays a hand between two strategies.

pub mod driver;
pub mod intel;
pub mod strategy;

pub use driver::{BotDecision, HandDriver, DEFAULT_MAX_STEPS};
pub use intel::{BotInfoStep, GameInfoStep, GameIntel, OpponentScoreStep, ReadyStep, RoundResult};
pub use strategy::{BotStrategy, CardToPlay, RaiseResponse, RandomBot};
