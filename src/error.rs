//! Error type shared by every engine operation.
//!
//! Failures fall into three kinds so an orchestrator can tell a caller bug
//! (wrong player, card not owned) from an out-of-phase request and from a
//! breach of the game rules:
//!
//! - `IllegalArgument`: the request names the wrong player or a card/value
//!   the caller has no right to use.
//! - `IllegalState`: the action is not in the hand's current legal set.
//! - `RuleViolation`: the request is well-formed but breaks a Truco rule.
//!
//! Every failing operation returns before committing any change.

use thiserror::Error;

/// Engine error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrucoError {
    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    #[error("illegal state: {0}")]
    IllegalState(String),

    #[error("game rule violation: {0}")]
    RuleViolation(String),
}

impl TrucoError {
    pub fn illegal_argument(detail: impl Into<String>) -> Self {
        Self::IllegalArgument(detail.into())
    }

    pub fn illegal_state(detail: impl Into<String>) -> Self {
        Self::IllegalState(detail.into())
    }

    pub fn rule_violation(detail: impl Into<String>) -> Self {
        Self::RuleViolation(detail.into())
    }

    #[must_use]
    pub fn is_illegal_argument(&self) -> bool {
        matches!(self, Self::IllegalArgument(_))
    }

    #[must_use]
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState(_))
    }

    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, Self::RuleViolation(_))
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TrucoError>;
