//! Hand rules: the stake ladder, rounds, the hand state machine and its
//! history.

pub mod action;
pub mod aggregate;
pub mod intel;
pub mod points;
pub mod result;
pub mod round;
pub mod state;

pub use action::{Action, Event, PossibleAction, PossibleActions};
pub use aggregate::Hand;
pub use intel::Intel;
pub use points::HandPoints;
pub use result::HandResult;
pub use round::Round;
pub use state::HandState;
