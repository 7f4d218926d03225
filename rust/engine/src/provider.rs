//! Decision sources for seats.
//!
//! A seat is either driven by a [`DecisionProvider`] the engine polls on
//! [`step`](crate::engine::HandEngine::step), or is manual and waits for the
//! host to call [`apply_action`](crate::engine::HandEngine::apply_action).

use std::fmt;

use serde::Serialize;

use crate::cards::Card;
use crate::game::Street;
use crate::player::PlayerAction;
use crate::rules::LegalActions;

/// Everything the acting player is allowed to see when deciding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActingView {
    pub seat: usize,
    pub name: String,
    pub street: Street,
    pub hole_cards: Vec<Card>,
    pub board: Vec<Card>,
    pub pot: u32,
    pub stack: u32,
    /// Chips this player already put in on the street
    pub street_bet: u32,
    /// Street total to match
    pub current_bet: u32,
    pub to_call: u32,
    pub can_check: bool,
    pub legal: LegalActions,
    /// Players still holding a claim on the pot, this one included
    pub contenders: usize,
    /// Active seats between the dealer and this player; 0 is the dealer
    pub position: usize,
    /// Active (non-eliminated) seats at the table
    pub active_players: usize,
}

impl ActingView {
    /// Positions in the back half of the active seats, the dealer included.
    pub fn is_late_position(&self) -> bool {
        self.position == 0 || self.position * 2 > self.active_players
    }
}

/// Picks an action for an autonomous seat.
///
/// Implementations should return an action `view.legal` allows; the engine
/// rejects anything else and leaves the hand untouched.
pub trait DecisionProvider: Send {
    fn decide(&mut self, view: &ActingView) -> PlayerAction;
    fn name(&self) -> &str;
}

/// Where a seat's decisions come from.
pub enum Seat {
    Autonomous(Box<dyn DecisionProvider>),
    Manual,
}

impl Seat {
    pub fn is_manual(&self) -> bool {
        matches!(self, Seat::Manual)
    }

    /// Provider name, or `"manual"`.
    pub fn label(&self) -> &str {
        match self {
            Seat::Autonomous(p) => p.name(),
            Seat::Manual => "manual",
        }
    }
}

impl fmt::Debug for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Autonomous(p) => f.debug_tuple("Autonomous").field(&p.name()).finish(),
            Seat::Manual => f.write_str("Manual"),
        }
    }
}
