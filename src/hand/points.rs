//! The stake ladder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrucoError};

/// Points a hand is worth: 0, 1, 3, 6, 9 or 12.
///
/// `Zero` only appears on a drawn hand's result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandPoints {
    Zero,
    One,
    Three,
    Six,
    Nine,
    Twelve,
}

impl HandPoints {
    /// Next rung of the ladder.
    ///
    /// ```
    /// use rust_truco::hand::HandPoints;
    ///
    /// assert_eq!(HandPoints::One.increase().unwrap(), HandPoints::Three);
    /// assert!(HandPoints::Twelve.increase().is_err());
    /// ```
    pub fn increase(self) -> Result<HandPoints> {
        match self {
            HandPoints::One => Ok(HandPoints::Three),
            HandPoints::Three => Ok(HandPoints::Six),
            HandPoints::Six => Ok(HandPoints::Nine),
            HandPoints::Nine => Ok(HandPoints::Twelve),
            HandPoints::Zero | HandPoints::Twelve => Err(TrucoError::rule_violation(format!(
                "can not increase points from {self}"
            ))),
        }
    }

    /// Numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        match self {
            HandPoints::Zero => 0,
            HandPoints::One => 1,
            HandPoints::Three => 3,
            HandPoints::Six => 6,
            HandPoints::Nine => 9,
            HandPoints::Twelve => 12,
        }
    }

    /// Rung with the given numeric value.
    pub fn from_value(points: u8) -> Result<HandPoints> {
        match points {
            0 => Ok(HandPoints::Zero),
            1 => Ok(HandPoints::One),
            3 => Ok(HandPoints::Three),
            6 => Ok(HandPoints::Six),
            9 => Ok(HandPoints::Nine),
            12 => Ok(HandPoints::Twelve),
            _ => Err(TrucoError::illegal_argument(format!(
                "illegal point value {points}"
            ))),
        }
    }
}

impl fmt::Display for HandPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} point(s)", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_escalation() {
        let mut points = HandPoints::One;
        let mut seen = vec![points.get()];
        while points != HandPoints::Twelve {
            points = points.increase().unwrap();
            seen.push(points.get());
        }
        assert_eq!(seen, vec![1, 3, 6, 9, 12]);
    }

    #[test]
    fn test_increase_out_of_bounds_is_rule_violation() {
        assert!(HandPoints::Zero.increase().unwrap_err().is_rule_violation());
        assert!(HandPoints::Twelve.increase().unwrap_err().is_rule_violation());
    }

    #[test]
    fn test_from_value() {
        for points in [
            HandPoints::Zero,
            HandPoints::One,
            HandPoints::Three,
            HandPoints::Six,
            HandPoints::Nine,
            HandPoints::Twelve,
        ] {
            assert_eq!(HandPoints::from_value(points.get()).unwrap(), points);
        }
        assert!(HandPoints::from_value(2).unwrap_err().is_illegal_argument());
    }

    #[test]
    fn test_ordering_follows_value() {
        assert!(HandPoints::Three < HandPoints::Six);
        assert!(HandPoints::Zero < HandPoints::One);
    }
}
