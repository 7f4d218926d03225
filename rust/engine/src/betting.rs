//! Turn order within a hand: blind seats, the acting order for each street,
//! and the test for a finished betting round.

use crate::errors::GameError;
use crate::game::Street;
use crate::player::Player;

/// Tracks who acts next and what has to be matched.
///
/// Seats are indices into the table's player list. The order for a street is
/// built once when the street opens; skipping folded, all-in and eliminated
/// players happens both then and on every [`next`](TurnSequencer::next) call,
/// so a player who goes all-in mid-street drops out of the rotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnSequencer {
    dealer: usize,
    small_blind: usize,
    big_blind: usize,
    current_bet: u32,
    order: Vec<usize>,
    cursor: usize,
}

impl TurnSequencer {
    pub fn new(dealer: usize) -> Self {
        Self {
            dealer,
            ..Self::default()
        }
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn small_blind(&self) -> usize {
        self.small_blind
    }
    pub fn big_blind(&self) -> usize {
        self.big_blind
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Seat whose turn it is, if betting is open.
    pub fn current(&self) -> Option<usize> {
        self.order.get(self.cursor).copied()
    }

    /// Assigns the blinds relative to `dealer` among non-eliminated seats:
    /// small blind on the dealer, big blind on the next active seat.
    ///
    /// An eliminated dealer seat hands the button to the next active seat.
    pub fn set_blinds(&mut self, players: &[Player], dealer: usize) -> Result<(), GameError> {
        let active: Vec<usize> = players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_eliminated())
            .map(|(i, _)| i)
            .collect();
        if active.len() < 2 {
            return Err(GameError::InvalidTable(format!(
                "blinds need two active players, found {}",
                active.len()
            )));
        }
        let pos = active
            .iter()
            .position(|&s| s >= dealer)
            .unwrap_or(0);
        self.dealer = active[pos];
        self.small_blind = active[pos];
        self.big_blind = active[(pos + 1) % active.len()];
        tracing::trace!(
            dealer = self.dealer,
            small_blind = self.small_blind,
            big_blind = self.big_blind,
            "blinds assigned"
        );
        Ok(())
    }

    /// Builds the acting order for `street`: pre-flop from the seat after the
    /// big blind, later streets from the seat after the dealer, wrapping around
    /// and leaving out anyone who cannot act.
    pub fn build_acting_order(&mut self, players: &[Player], street: Street) {
        self.cursor = 0;
        self.order.clear();
        if !street.is_betting() || players.is_empty() {
            return;
        }
        let n = players.len();
        let start = match street {
            Street::PreFlop => self.big_blind + 1,
            _ => self.dealer + 1,
        };
        self.order.extend(
            (0..n)
                .map(|k| (start + k) % n)
                .filter(|&s| players[s].can_act()),
        );
    }

    /// Moves to the next seat in the order that can act and has not acted
    /// since the last raise. `None` when nobody is left to act.
    pub fn next(&mut self, players: &[Player]) -> Option<usize> {
        let len = self.order.len();
        for step in 1..=len {
            let idx = (self.cursor + step) % len;
            let seat = self.order[idx];
            let p = &players[seat];
            if p.can_act() && !p.has_acted() {
                self.cursor = idx;
                return Some(seat);
            }
        }
        None
    }

    /// Every player who can still act has acted since the last raise.
    pub fn all_acted(players: &[Player]) -> bool {
        players
            .iter()
            .filter(|p| p.can_act())
            .all(|p| p.has_acted())
    }

    /// Every player who can still act has matched the current bet.
    /// All-in players are exempt.
    pub fn all_bets_equal(&self, players: &[Player]) -> bool {
        players
            .iter()
            .filter(|p| p.can_act())
            .all(|p| p.current_bet() == self.current_bet)
    }

    pub fn betting_complete(&self, players: &[Player]) -> bool {
        Self::all_acted(players) && self.all_bets_equal(players)
    }

    /// First active seat strictly after `from`, wrapping around.
    pub fn next_active_seat(players: &[Player], from: usize) -> Option<usize> {
        let n = players.len();
        (1..=n)
            .map(|k| (from + k) % n)
            .find(|&s| !players[s].is_eliminated())
    }

    pub(crate) fn set_dealer(&mut self, dealer: usize) {
        self.dealer = dealer;
    }

    pub(crate) fn raise_to(&mut self, amount: u32) {
        self.current_bet = self.current_bet.max(amount);
    }

    pub(crate) fn reset_street_bet(&mut self) {
        self.current_bet = 0;
    }
}
