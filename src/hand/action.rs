//! Hand actions, the legal-action set, and history events.
//!
//! `PossibleAction` is what a player may do right now (what the hand
//! advertises); `Action` is a concrete request carrying its card, if any.
//! Every `Action` needs exactly one `PossibleAction` to be legal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Kind of action a player may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PossibleAction {
    Play,
    Raise,
    Accept,
    Quit,
}

impl PossibleAction {
    pub const ALL: [PossibleAction; 4] = [
        PossibleAction::Play,
        PossibleAction::Raise,
        PossibleAction::Accept,
        PossibleAction::Quit,
    ];

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for PossibleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PossibleAction::Play => "PLAY",
            PossibleAction::Raise => "RAISE",
            PossibleAction::Accept => "ACCEPT",
            PossibleAction::Quit => "QUIT",
        };
        f.write_str(name)
    }
}

/// Set of legal actions, stored as a bit mask.
///
/// ```
/// use rust_truco::hand::{PossibleAction, PossibleActions};
///
/// let actions = PossibleActions::of(&[PossibleAction::Accept, PossibleAction::Quit]);
/// assert!(actions.contains(PossibleAction::Quit));
/// assert!(!actions.contains(PossibleAction::Play));
/// assert_eq!(actions.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PossibleActions(u8);

impl PossibleActions {
    #[must_use]
    pub const fn none() -> Self {
        Self(0)
    }

    #[must_use]
    pub fn of(actions: &[PossibleAction]) -> Self {
        actions.iter().fold(Self::none(), |set, &a| set.with(a))
    }

    /// Copy of this set with `action` added.
    #[must_use]
    pub const fn with(self, action: PossibleAction) -> Self {
        Self(self.0 | action.bit())
    }

    pub fn insert(&mut self, action: PossibleAction) {
        self.0 |= action.bit();
    }

    #[must_use]
    pub const fn contains(self, action: PossibleAction) -> bool {
        self.0 & action.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = PossibleAction> {
        PossibleAction::ALL
            .into_iter()
            .filter(move |&a| self.contains(a))
    }
}

impl fmt::Display for PossibleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, action) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{action}")?;
        }
        f.write_str("]")
    }
}

impl FromIterator<PossibleAction> for PossibleActions {
    fn from_iter<I: IntoIterator<Item = PossibleAction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

/// A concrete request to the hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    PlayFirstCard(Card),
    PlaySecondCard(Card),
    Raise,
    Accept,
    Quit,
}

impl Action {
    /// The legal-set entry this request needs.
    #[must_use]
    pub const fn requires(self) -> PossibleAction {
        match self {
            Action::PlayFirstCard(_) | Action::PlaySecondCard(_) => PossibleAction::Play,
            Action::Raise => PossibleAction::Raise,
            Action::Accept => PossibleAction::Accept,
            Action::Quit => PossibleAction::Quit,
        }
    }
}

/// What happened in a history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    HandStart,
    Play,
    Raise,
    Accept,
    Quit,
    /// Mão de onze accepted.
    AcceptHand,
    /// Mão de onze refused.
    QuitHand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_insert_and_contains() {
        let mut actions = PossibleActions::none();
        assert!(actions.is_empty());

        actions.insert(PossibleAction::Play);
        actions.insert(PossibleAction::Play);
        assert_eq!(actions.len(), 1);
        assert!(actions.contains(PossibleAction::Play));
        assert!(!actions.contains(PossibleAction::Raise));
    }

    #[test]
    fn test_iter_order_is_stable() {
        let actions: PossibleActions = [PossibleAction::Quit, PossibleAction::Accept]
            .into_iter()
            .collect();
        let listed: Vec<_> = actions.iter().collect();
        assert_eq!(listed, vec![PossibleAction::Accept, PossibleAction::Quit]);
        assert_eq!(actions.to_string(), "[ACCEPT, QUIT]");
    }

    #[test]
    fn test_action_requirements() {
        let card = Card::closed();
        assert_eq!(Action::PlayFirstCard(card).requires(), PossibleAction::Play);
        assert_eq!(Action::PlaySecondCard(card).requires(), PossibleAction::Play);
        assert_eq!(Action::Raise.requires(), PossibleAction::Raise);
        assert_eq!(Action::Accept.requires(), PossibleAction::Accept);
        assert_eq!(Action::Quit.requires(), PossibleAction::Quit);
    }

    #[test]
    fn test_possible_actions_serialization() {
        let actions = PossibleActions::of(&[PossibleAction::Play, PossibleAction::Raise]);
        let json = serde_json::to_string(&actions).unwrap();
        let back: PossibleActions = serde_json::from_str(&json).unwrap();
        assert_eq!(actions, back);
    }
}
