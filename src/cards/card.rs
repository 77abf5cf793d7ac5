//! Truco cards and their relative value.
//!
//! ## Ranking
//!
//! Ranks from low to high: 4, 5, 6, 7, Q, J, K, A, 2, 3.
//! The rank right after the vira's rank (wrapping 3 → 4) is the manilha
//! rank; manilhas beat every other card and are ordered by suit:
//! Diamonds < Spades < Hearts < Clubs. Two ordinary cards of the same rank
//! tie. The closed card is worth less than any open card.
//!
//! ```
//! use rust_truco::cards::{Card, Rank, Suit};
//!
//! let vira = Card::try_new(Rank::Seven, Suit::Spades)?;
//! let manilha = Card::try_new(Rank::Queen, Suit::Diamonds)?;
//! let three: Card = "3C".parse()?;
//!
//! assert!(manilha.is_manilha(vira));
//! assert!(manilha.beats(three, vira));
//! # Ok::<(), rust_truco::TrucoError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrucoError};

/// Card rank. `Hidden` only appears on the closed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Hidden,
    Four,
    Five,
    Six,
    Seven,
    Queen,
    Jack,
    King,
    Ace,
    Two,
    Three,
}

impl Rank {
    /// Every rank of the 40-card deck, low to high.
    pub const ALL: [Rank; 10] = [
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
    ];

    /// Ordinary (non-manilha) strength, 0 for `Hidden`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank that follows this one; this is how the manilha is derived from
    /// the vira.
    #[must_use]
    pub const fn next(self) -> Rank {
        match self {
            Rank::Hidden => Rank::Hidden,
            Rank::Four => Rank::Five,
            Rank::Five => Rank::Six,
            Rank::Six => Rank::Seven,
            Rank::Seven => Rank::Queen,
            Rank::Queen => Rank::Jack,
            Rank::Jack => Rank::King,
            Rank::King => Rank::Ace,
            Rank::Ace => Rank::Two,
            Rank::Two => Rank::Three,
            Rank::Three => Rank::Four,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Rank::Hidden => 'X',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
        }
    }

    fn from_symbol(symbol: char) -> Option<Rank> {
        let rank = match symbol.to_ascii_uppercase() {
            'X' => Rank::Hidden,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            'Q' => Rank::Queen,
            'J' => Rank::Jack,
            'K' => Rank::King,
            'A' => Rank::Ace,
            '2' => Rank::Two,
            '3' => Rank::Three,
            _ => return None,
        };
        Some(rank)
    }
}

/// Card suit, in manilha order. `Hidden` only appears on the closed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hidden,
    Diamonds,
    Spades,
    Hearts,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Spades, Suit::Hearts, Suit::Clubs];

    /// Tie-break value among manilhas, 0 for `Hidden`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    const fn symbol(self) -> char {
        match self {
            Suit::Hidden => 'X',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
        }
    }

    fn from_symbol(symbol: char) -> Option<Suit> {
        let suit = match symbol.to_ascii_uppercase() {
            'X' => Suit::Hidden,
            'D' => Suit::Diamonds,
            'S' => Suit::Spades,
            'H' => Suit::Hearts,
            'C' => Suit::Clubs,
            _ => return None,
        };
        Some(suit)
    }
}

/// A playing card, or the closed (face-down) card.
///
/// Deserialization goes through [`Card::try_new`], so a card with only one
/// of rank/suit hidden can not be built from the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardRepr")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

/// Unchecked wire form of [`Card`].
#[derive(Deserialize)]
struct CardRepr {
    rank: Rank,
    suit: Suit,
}

impl TryFrom<CardRepr> for Card {
    type Error = TrucoError;

    fn try_from(repr: CardRepr) -> Result<Self> {
        Card::try_new(repr.rank, repr.suit)
    }
}

impl Card {
    /// Open card from deck constants. Both arguments must be open.
    pub(crate) const fn open(rank: Rank, suit: Suit) -> Self {
        debug_assert!(!matches!(rank, Rank::Hidden) && !matches!(suit, Suit::Hidden));
        Self { rank, suit }
    }

    /// Build a card, open or closed. Rank and suit must be both hidden or
    /// both open.
    pub fn try_new(rank: Rank, suit: Suit) -> Result<Self> {
        if (rank == Rank::Hidden) != (suit == Suit::Hidden) {
            return Err(TrucoError::illegal_argument(format!(
                "rank {rank:?} and suit {suit:?} must both be hidden or both be open"
            )));
        }
        Ok(Self { rank, suit })
    }

    /// The face-down card played when a player discards.
    #[must_use]
    pub const fn closed() -> Self {
        Self {
            rank: Rank::Hidden,
            suit: Suit::Hidden,
        }
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Whether this is the face-down card.
    #[must_use]
    pub fn is_closed(self) -> bool {
        self == Card::closed()
    }

    /// Whether this card is a manilha for the given vira.
    #[must_use]
    pub fn is_manilha(self, vira: Card) -> bool {
        !self.is_closed() && self.rank == vira.rank.next()
    }

    /// Strength of this card in a hand with the given vira.
    ///
    /// Ordinary cards score 1..=10, manilhas 11..=14, the closed card 0.
    #[must_use]
    pub fn relative_value(self, vira: Card) -> u8 {
        if self.is_closed() {
            0
        } else if self.is_manilha(vira) {
            Rank::Three.value() + self.suit.value()
        } else {
            self.rank.value()
        }
    }

    /// Compare two cards under the given vira. `Equal` means the round draws.
    #[must_use]
    pub fn compare_value_to(self, other: Card, vira: Card) -> Ordering {
        self.relative_value(vira).cmp(&other.relative_value(vira))
    }

    #[must_use]
    pub fn beats(self, other: Card, vira: Card) -> bool {
        self.compare_value_to(other, vira) == Ordering::Greater
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}{}]", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = TrucoError;

    /// Parse the two-character form used in fixtures and logs: `"7S"`,
    /// `"QD"`, `"XX"` for the closed card. Brackets are optional.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']');
        let mut chars = trimmed.chars();
        let (Some(rank_symbol), Some(suit_symbol), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(TrucoError::illegal_argument(format!("cannot parse card {s:?}")));
        };
        let rank = Rank::from_symbol(rank_symbol)
            .ok_or_else(|| TrucoError::illegal_argument(format!("unknown rank {rank_symbol:?}")))?;
        let suit = Suit::from_symbol(suit_symbol)
            .ok_or_else(|| TrucoError::illegal_argument(format!("unknown suit {suit_symbol:?}")))?;
        Card::try_new(rank, suit)
    }
}
