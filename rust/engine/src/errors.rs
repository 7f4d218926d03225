use thiserror::Error;

/// Errors raised by the engine.
///
/// Two classes share this enum. Rejected actions are recoverable: the state is
/// left untouched and the caller may retry with a legal action. The rest signal
/// a violated precondition or a broken invariant and should abort whatever the
/// caller was doing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("Hand still in progress")]
    HandInProgress,
    #[error("Cannot check: {to_call} chips to call")]
    CannotCheck { to_call: u32 },
    #[error("Nothing to call")]
    NothingToCall,
    #[error("Raise to {amount} is too small, minimum: {minimum}")]
    RaiseTooSmall { amount: u32, minimum: u32 },
    #[error("Insufficient chips: action needs {needed}, stack is {stack}")]
    InsufficientChips { needed: u32, stack: u32 },
    #[error("Seat {0} cannot act (folded, all-in or eliminated)")]
    PlayerNotActive(usize),
    #[error("Seat {0} is manual; supply its action through apply_action")]
    AwaitingManualInput(usize),

    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Seat {0} does not exist")]
    SeatOutOfRange(usize),
    #[error("No contenders left to award the pot")]
    NoContenders,
    #[error("Invalid table: {0}")]
    InvalidTable(String),
}

impl GameError {
    /// True for rejected actions the caller can correct and retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::NotPlayersTurn { .. }
                | GameError::NoHandInProgress
                | GameError::HandAlreadyComplete
                | GameError::HandInProgress
                | GameError::CannotCheck { .. }
                | GameError::NothingToCall
                | GameError::RaiseTooSmall { .. }
                | GameError::InsufficientChips { .. }
                | GameError::PlayerNotActive(_)
                | GameError::AwaitingManualInput(_)
        )
    }

    pub fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_are_recoverable_and_invariants_are_fatal() {
        assert!(GameError::CannotCheck { to_call: 25 }.is_recoverable());
        assert!(GameError::RaiseTooSmall { amount: 50, minimum: 51 }.is_recoverable());
        assert!(GameError::DeckExhausted.is_fatal());
        assert!(GameError::NoContenders.is_fatal());
        assert!(GameError::SeatOutOfRange(12).is_fatal());
    }

    #[test]
    fn messages_carry_amounts() {
        let e = GameError::InsufficientChips { needed: 300, stack: 120 };
        assert_eq!(e.to_string(), "Insufficient chips: action needs 300, stack is 120");
    }
}
