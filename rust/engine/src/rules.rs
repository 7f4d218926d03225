use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// An action that passed validation, with the chips it moves already worked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Puts `amount` chips in; less than the full difference when the caller
    /// is short, which leaves them all-in.
    Call { amount: u32 },
    /// Brings the street contribution up to `to`, putting `amount` chips in.
    Raise { to: u32, amount: u32 },
}

impl ValidatedAction {
    /// Chips moved from the stack into the pot.
    pub fn chips(&self) -> u32 {
        match self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call { amount } | ValidatedAction::Raise { amount, .. } => *amount,
        }
    }
}

/// What the acting player may do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalActions {
    /// Nothing owed: checking is allowed and calling is not.
    pub can_check: bool,
    /// Chips a call puts in (capped by the stack), zero when nothing is owed.
    pub call_amount: u32,
    /// Smallest legal raise-to total, `None` when the stack cannot beat the current bet.
    pub min_raise_to: Option<u32>,
    /// Largest raise-to total: everything the player has.
    pub max_raise_to: u32,
}

impl LegalActions {
    pub fn compute(stack: u32, street_bet: u32, current_bet: u32) -> Self {
        let to_call = current_bet.saturating_sub(street_bet);
        let max_raise_to = street_bet + stack;
        let min_raise_to = current_bet + 1;
        Self {
            can_check: to_call == 0,
            call_amount: to_call.min(stack),
            min_raise_to: (max_raise_to >= min_raise_to).then_some(min_raise_to),
            max_raise_to,
        }
    }

    pub fn can_call(&self) -> bool {
        !self.can_check && self.call_amount > 0
    }

    pub fn can_raise(&self) -> bool {
        self.min_raise_to.is_some()
    }

    pub fn allows(&self, action: &A) -> bool {
        match action {
            A::Fold => true,
            A::Check => self.can_check,
            A::Call => self.can_call(),
            A::Raise(to) => self
                .min_raise_to
                .is_some_and(|min| *to >= min && *to <= self.max_raise_to),
        }
    }

    /// Every distinct kind of action available, raises at their minimum.
    pub fn options(&self) -> Vec<A> {
        let mut v = vec![A::Fold];
        if self.can_check {
            v.push(A::Check);
        }
        if self.can_call() {
            v.push(A::Call);
        }
        if let Some(min) = self.min_raise_to {
            v.push(A::Raise(min));
        }
        v
    }
}

/// Validates a player action against the betting state without touching it.
///
/// # Arguments
///
/// * `stack` - Player's remaining chip stack
/// * `street_bet` - Chips the player already put in on this street
/// * `current_bet` - Street total every player has to match
/// * `action` - The action the player wishes to perform
///
/// # Errors
///
/// - [`GameError::CannotCheck`] - check while chips are owed
/// - [`GameError::NothingToCall`] - call while nothing is owed
/// - [`GameError::RaiseTooSmall`] - raise-to total not above the current bet
/// - [`GameError::InsufficientChips`] - raise needs more chips than the stack holds
///
/// # Examples
///
/// ```
/// use pokerbots_engine::rules::{validate_action, ValidatedAction};
/// use pokerbots_engine::player::PlayerAction;
///
/// // Small blind completing: 25 in, 50 to match
/// let call = validate_action(975, 25, 50, PlayerAction::Call);
/// assert_eq!(call, Ok(ValidatedAction::Call { amount: 25 }));
///
/// let raise = validate_action(975, 25, 50, PlayerAction::Raise(150));
/// assert_eq!(raise, Ok(ValidatedAction::Raise { to: 150, amount: 125 }));
///
/// assert!(validate_action(975, 25, 50, PlayerAction::Check).is_err());
/// ```
pub fn validate_action(
    stack: u32,
    street_bet: u32,
    current_bet: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let to_call = current_bet.saturating_sub(street_bet);
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::CannotCheck { to_call })
            }
        }
        A::Call => {
            if to_call == 0 {
                Err(GameError::NothingToCall)
            } else {
                Ok(ValidatedAction::Call {
                    amount: to_call.min(stack),
                })
            }
        }
        A::Raise(to) => {
            if to <= current_bet {
                return Err(GameError::RaiseTooSmall {
                    amount: to,
                    minimum: current_bet + 1,
                });
            }
            let needed = to - street_bet;
            if needed > stack {
                return Err(GameError::InsufficientChips { needed, stack });
            }
            Ok(ValidatedAction::Raise { to, amount: needed })
        }
    }
}
