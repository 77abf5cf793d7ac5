//! Outcome of a finished hand.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::points::HandPoints;
use crate::core::PlayerId;
use crate::error::{Result, TrucoError};

/// Result of a hand: a winner with the points earned, or a draw worth
/// nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandResult {
    winner: Option<PlayerId>,
    points: HandPoints,
}

impl HandResult {
    /// A won hand. A winner never takes zero points.
    pub fn of(winner: PlayerId, points: HandPoints) -> Result<Self> {
        if points == HandPoints::Zero {
            return Err(TrucoError::illegal_argument(
                "points of an untied hand must not be zero",
            ));
        }
        Ok(Self {
            winner: Some(winner),
            points,
        })
    }

    /// The drawn hand.
    #[must_use]
    pub const fn draw() -> Self {
        Self {
            winner: None,
            points: HandPoints::Zero,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn points(&self) -> HandPoints {
        self.points
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == Some(player)
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(winner) => write!(f, "{winner} won {}", self.points),
            None => write!(f, "draw {}", self.points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_won_result() {
        let winner = PlayerId::random();
        let result = HandResult::of(winner, HandPoints::Three).unwrap();

        assert!(result.is_winner(winner));
        assert!(!result.is_winner(PlayerId::random()));
        assert!(!result.is_draw());
        assert_eq!(result.points(), HandPoints::Three);
    }

    #[test]
    fn test_zero_points_rejected_for_winner() {
        let err = HandResult::of(PlayerId::random(), HandPoints::Zero).unwrap_err();
        assert!(err.is_illegal_argument());
    }

    #[test]
    fn test_draw() {
        let draw = HandResult::draw();
        assert!(draw.is_draw());
        assert_eq!(draw.winner(), None);
        assert_eq!(draw.points(), HandPoints::Zero);
        assert_eq!(draw, HandResult::draw());
    }
}
