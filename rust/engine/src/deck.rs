use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// An ordered source of the 52 cards, drawn without replacement.
///
/// A deck built with a seed replays the same sequence of shuffles; one built
/// with [`Deck::new_shuffled`] is seeded from entropy.
///
/// ```
/// use pokerbots_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(42);
/// let mut b = Deck::new_with_seed(42);
/// a.shuffle();
/// b.shuffle();
/// assert_eq!(a.draw().unwrap(), b.draw().unwrap());
/// assert_eq!(a.remaining(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
    stacked: bool,
}

impl Deck {
    /// A full deck in factory order. Call [`Deck::shuffle`] before dealing.
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
            stacked: false,
        }
    }

    /// A freshly shuffled deck with an unpredictable seed.
    pub fn new_shuffled() -> Self {
        let mut deck = Self::new_with_seed(rand::random());
        deck.shuffle();
        deck
    }

    /// A deck that deals `cards` in the given order, first element on top.
    /// Shuffling a stacked deck only rewinds it, so every hand replays the
    /// same order.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self {
            cards,
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(0),
            stacked: true,
        }
    }

    pub fn shuffle(&mut self) {
        self.position = 0;
        if self.stacked {
            return;
        }
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.deal_card().ok_or(GameError::DeckExhausted)
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn is_stacked(&self) -> bool {
        self.stacked
    }

    /// Drops a stacked order; later shuffles permute all 52 cards again.
    pub fn reset_to_random(&mut self) {
        self.stacked = false;
        self.shuffle();
    }
}
