use serde::{Deserialize, Serialize};

/// Chips a single winner collects from a pot award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub seat: usize,
    pub amount: u32,
}

/// The single pot of a hand. Everyone still contending is eligible for all
/// of it, including players who went all-in for less.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pot {
    total: u32,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn add(&mut self, amount: u32) {
        self.total += amount;
    }

    /// Splits the whole pot among `winners` and empties it.
    ///
    /// Each winner gets `total / n`; the `total % n` leftover chips go out one
    /// at a time starting from the first seat in `winners`, so callers pass
    /// winners in payout order (seating order after the dealer).
    /// Returns an empty list and keeps the pot when `winners` is empty.
    pub fn award(&mut self, winners: &[usize]) -> Vec<Payout> {
        if winners.is_empty() {
            return Vec::new();
        }
        let n = winners.len() as u32;
        let share = self.total / n;
        let remainder = (self.total % n) as usize;
        self.total = 0;
        winners
            .iter()
            .enumerate()
            .map(|(i, &seat)| Payout {
                seat,
                amount: share + u32::from(i < remainder),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundred_split_three_ways_gives_extra_chip_to_first() {
        let mut pot = Pot::new();
        pot.add(100);
        let payouts = pot.award(&[2, 0, 1]);
        assert_eq!(
            payouts,
            vec![
                Payout { seat: 2, amount: 34 },
                Payout { seat: 0, amount: 33 },
                Payout { seat: 1, amount: 33 },
            ]
        );
        assert!(pot.is_empty());
    }

    #[test]
    fn single_winner_takes_everything() {
        let mut pot = Pot::new();
        pot.add(75);
        assert_eq!(pot.award(&[1]), vec![Payout { seat: 1, amount: 75 }]);
        assert_eq!(pot.total(), 0);
    }

    #[test]
    fn no_winners_keeps_the_pot() {
        let mut pot = Pot::new();
        pot.add(40);
        assert!(pot.award(&[]).is_empty());
        assert_eq!(pot.total(), 40);
    }

    #[test]
    fn payouts_always_sum_to_pot() {
        for total in [1u32, 7, 99, 100, 1001] {
            for n in 1..=6usize {
                let mut pot = Pot::new();
                pot.add(total);
                let seats: Vec<usize> = (0..n).collect();
                let sum: u32 = pot.award(&seats).iter().map(|p| p.amount).sum();
                assert_eq!(sum, total);
            }
        }
    }
}
