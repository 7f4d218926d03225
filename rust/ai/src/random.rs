use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pokerbots_engine::player::PlayerAction;
use pokerbots_engine::provider::{ActingView, DecisionProvider};

/// Picks uniformly among the legal kinds of action; raises land anywhere in
/// the legal range.
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionProvider for RandomBot {
    fn decide(&mut self, view: &ActingView) -> PlayerAction {
        let options = view.legal.options();
        match options[self.rng.random_range(0..options.len())] {
            PlayerAction::Raise(min) => {
                PlayerAction::Raise(self.rng.random_range(min..=view.legal.max_raise_to))
            }
            other => other,
        }
    }

    fn name(&self) -> &str {
        "RandomBot"
    }
}
