//! Notifications the engine emits while a hand plays out.
//!
//! Observers (hand logger, renderers, statistics) implement [`EventSink`].
//! Any `FnMut(&TableEvent)` closure works as a sink.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::{Street, WinType};
use crate::player::PlayerAction;
use crate::pot::Payout;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TableEvent {
    HandStarted {
        game_number: u64,
        hand_number: u64,
        dealer: usize,
        small_blind: usize,
        big_blind: usize,
    },
    BlindPosted {
        seat: usize,
        player: String,
        amount: u32,
    },
    ActionTaken {
        seat: usize,
        player: String,
        street: Street,
        action: PlayerAction,
        /// Chips the action moved into the pot
        amount: u32,
    },
    StreetDealt {
        street: Street,
        cards: Vec<Card>,
    },
    HandResolved {
        hand_number: u64,
        winners: Vec<String>,
        payouts: Vec<Payout>,
        pot: u32,
        win_type: WinType,
        board: Vec<Card>,
    },
    PlayerEliminated {
        seat: usize,
        player: String,
    },
    GameRestarted {
        game_number: u64,
    },
}

pub trait EventSink: Send {
    fn on_event(&mut self, event: &TableEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&TableEvent) + Send,
{
    fn on_event(&mut self, event: &TableEvent) {
        self(event)
    }
}
