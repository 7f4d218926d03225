use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::provider::Seat;

/// A decision for the acting player.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Give up the hand and any claim on the pot
    Fold,
    /// Pass without betting, only valid when nothing is owed
    Check,
    /// Match the current bet, or put in the whole stack if it is smaller
    Call,
    /// Raise the street contribution to this total
    Raise(u32),
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// A seated player: chips, hole cards and the flags the betting round reads.
///
/// Players are never removed mid-game; folding and elimination are flags so
/// seat indices stay stable for dealer and blind rotation.
#[derive(Debug)]
pub struct Player {
    name: String,
    stack: u32,
    hole: Vec<Card>,
    folded: bool,
    checked: bool,
    has_acted: bool,
    all_in: bool,
    eliminated: bool,
    /// Chips put in on the current street
    current_bet: u32,
    /// Chips put in over the whole hand
    hand_contribution: u32,
    seat: Seat,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: u32, seat: Seat) -> Self {
        Self {
            name: name.into(),
            stack,
            hole: Vec::with_capacity(2),
            folded: false,
            checked: false,
            has_acted: false,
            all_in: false,
            eliminated: false,
            current_bet: 0,
            hand_contribution: 0,
            seat,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn has_checked(&self) -> bool {
        self.checked
    }
    pub fn has_acted(&self) -> bool {
        self.has_acted
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    /// Chips put in over the whole hand. Unlike
    /// [`current_bet`](Self::current_bet) it is not cleared between streets.
    pub fn hand_contribution(&self) -> u32 {
        self.hand_contribution
    }
    pub fn seat(&self) -> &Seat {
        &self.seat
    }

    /// Still holding a claim on the pot.
    pub fn is_contender(&self) -> bool {
        !self.folded && !self.eliminated
    }

    /// Still owes decisions this hand.
    pub fn can_act(&self) -> bool {
        self.is_contender() && !self.all_in
    }

    pub(crate) fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }

    pub(crate) fn give_card(&mut self, c: Card) {
        self.hole.push(c);
    }

    /// Moves up to `amount` chips from the stack into the player's bets and
    /// returns how many actually moved. Emptying the stack sets all-in.
    pub(crate) fn contribute(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.current_bet += paid;
        self.hand_contribution += paid;
        if self.stack == 0 {
            self.all_in = true;
        }
        paid
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    pub(crate) fn mark_checked(&mut self) {
        self.checked = true;
    }

    pub(crate) fn mark_acted(&mut self) {
        self.has_acted = true;
    }

    /// Another player raised: this one has to respond again.
    pub(crate) fn reopen(&mut self) {
        self.has_acted = false;
        self.checked = false;
    }

    pub(crate) fn reset_street(&mut self) {
        self.checked = false;
        self.has_acted = false;
        self.current_bet = 0;
    }

    pub(crate) fn reset_hand(&mut self) {
        self.reset_street();
        self.hole.clear();
        self.folded = false;
        self.all_in = false;
        self.hand_contribution = 0;
    }

    pub(crate) fn eliminate(&mut self) {
        self.eliminated = true;
    }

    /// Back to a fresh seat for a new game.
    pub(crate) fn reinstate(&mut self, stack: u32) {
        self.reset_hand();
        self.eliminated = false;
        self.stack = stack;
    }

    #[cfg(test)]
    pub(crate) fn set_flags_for_test(&mut self, folded: bool, all_in: bool, eliminated: bool) {
        self.folded = folded;
        self.all_in = all_in;
        self.eliminated = eliminated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contribute_caps_at_stack_and_marks_all_in() {
        let mut p = Player::new("short", 30, Seat::Manual);
        assert_eq!(p.contribute(50), 30);
        assert_eq!(p.stack(), 0);
        assert_eq!(p.current_bet(), 30);
        assert!(p.is_all_in());
        assert!(p.is_contender());
        assert!(!p.can_act());
    }

    #[test]
    fn street_reset_keeps_hand_total() {
        let mut p = Player::new("a", 1000, Seat::Manual);
        p.contribute(100);
        p.mark_acted();
        p.reset_street();
        assert_eq!(p.current_bet(), 0);
        assert_eq!(p.hand_contribution(), 100);
        assert!(!p.has_acted());
    }

    #[test]
    fn reinstate_clears_elimination() {
        let mut p = Player::new("a", 10, Seat::Manual);
        p.contribute(10);
        p.eliminate();
        p.reinstate(1000);
        assert!(!p.is_eliminated());
        assert!(!p.is_all_in());
        assert_eq!(p.stack(), 1000);
    }
}
