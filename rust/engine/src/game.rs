use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandRank;
use crate::pot::Payout;

/// Stage of a hand. The four betting streets run in order; a hand ends in
/// either `Showdown` or `EndedByFold`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Street {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    EndedByFold,
}

impl Street {
    /// The street that follows once betting here is complete, with the number
    /// of community cards it reveals. River leads to showdown with no deal;
    /// terminal stages have no successor.
    pub fn advance(self) -> Option<(Street, usize)> {
        match self {
            Street::PreFlop => Some((Street::Flop, 3)),
            Street::Flop => Some((Street::Turn, 1)),
            Street::Turn => Some((Street::River, 1)),
            Street::River => Some((Street::Showdown, 0)),
            Street::Showdown | Street::EndedByFold => None,
        }
    }

    pub fn is_betting(self) -> bool {
        matches!(
            self,
            Street::PreFlop | Street::Flop | Street::Turn | Street::River
        )
    }

    pub fn is_terminal(self) -> bool {
        !self.is_betting()
    }

    /// Community cards visible during this stage.
    pub fn board_len(self) -> usize {
        match self {
            Street::PreFlop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River | Street::Showdown => 5,
            // depends on when the fold happened
            Street::EndedByFold => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Street::PreFlop => "PreFlop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
            Street::Showdown => "Showdown",
            Street::EndedByFold => "EndedByFold",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinType {
    /// Everyone else folded
    Fold,
    /// Hands were compared
    Showdown,
}

impl fmt::Display for WinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinType::Fold => f.write_str("fold"),
            WinType::Showdown => f.write_str("showdown"),
        }
    }
}

/// A contender's hand as revealed at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownHand {
    pub seat: usize,
    pub name: String,
    pub hole_cards: Vec<Card>,
    pub rank: HandRank,
}

/// Outcome of a finished hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand_number: u64,
    pub win_type: WinType,
    /// Pot size before distribution
    pub pot: u32,
    /// Winner names in payout order
    pub winners: Vec<String>,
    pub payouts: Vec<Payout>,
    pub board: Vec<Card>,
    /// Every contender's hand, empty when the hand ended by fold
    pub showdown: Vec<ShowdownHand>,
}

impl HandResult {
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }

    /// Rank of the winning hand, when there was a showdown.
    pub fn winning_rank(&self) -> Option<HandRank> {
        self.showdown.iter().map(|h| h.rank).max()
    }

    /// One line like `"alice wins 150 by fold"` or `"alice, bob split 150 at showdown (Flush ...)"`.
    pub fn summary(&self) -> String {
        let names = self.winners.join(", ");
        let verb = if self.is_split() { "split" } else { "wins" };
        match (self.win_type, self.winning_rank()) {
            (WinType::Showdown, Some(rank)) => {
                format!("{} {} {} at showdown ({})", names, verb, self.pot, rank)
            }
            (WinType::Showdown, None) => format!("{} {} {} at showdown", names, verb, self.pot),
            (WinType::Fold, _) => format!("{} {} {} by fold", names, verb, self.pot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streets_advance_in_order() {
        let mut s = Street::PreFlop;
        let mut dealt = 0;
        let mut seen = vec![s];
        while let Some((next, n)) = s.advance() {
            dealt += n;
            s = next;
            seen.push(s);
        }
        assert_eq!(
            seen,
            vec![
                Street::PreFlop,
                Street::Flop,
                Street::Turn,
                Street::River,
                Street::Showdown
            ]
        );
        assert_eq!(dealt, 5);
        assert!(Street::EndedByFold.advance().is_none());
    }

    #[test]
    fn terminal_stages() {
        assert!(Street::Showdown.is_terminal());
        assert!(Street::EndedByFold.is_terminal());
        assert!(Street::River.is_betting());
    }

    #[test]
    fn fold_summary() {
        let r = HandResult {
            hand_number: 1,
            win_type: WinType::Fold,
            pot: 75,
            winners: vec!["bob".into()],
            payouts: vec![Payout { seat: 1, amount: 75 }],
            board: vec![],
            showdown: vec![],
        };
        assert_eq!(r.summary(), "bob wins 75 by fold");
        assert!(!r.is_split());
        assert_eq!(r.winning_rank(), None);
    }
}
