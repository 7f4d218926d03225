use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use pokerbots_engine::config::TableConfig;
use pokerbots_engine::engine::HandEngine;
use pokerbots_engine::game::{Street, WinType};
use pokerbots_engine::player::PlayerAction;
use pokerbots_engine::provider::{ActingView, DecisionProvider, Seat};

/// Picks uniformly among legal moves, raises anywhere in the legal range.
struct Wild {
    rng: ChaCha20Rng,
}

impl DecisionProvider for Wild {
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
        "wild"
    }
}

fn wild_table(players: usize, seed: u64) -> HandEngine {
    let roster = (0..players)
        .map(|i| {
            let bot = Wild {
                rng: ChaCha20Rng::seed_from_u64(seed * 100 + i as u64),
            };
            (format!("bot{}", i), Seat::Autonomous(Box::new(bot) as Box<dyn DecisionProvider>))
        })
        .collect();
    HandEngine::new(TableConfig::with_seed(seed), roster).unwrap()
}

#[test]
fn chips_are_conserved_across_many_hands() {
    for players in [2, 3, 6, 10] {
        let mut engine = wild_table(players, players as u64);
        let total = players as u32 * 1000;
        engine.start_hand().unwrap();
        for hand in 0..150 {
            if hand > 0 {
                engine.next_hand().unwrap();
            }
            assert_eq!(engine.chips_in_play(), total);
            let result = engine.run_hand().unwrap();
            assert_eq!(engine.chips_in_play(), total);
            assert_eq!(engine.pot(), 0);
            let paid: u32 = result.payouts.iter().map(|p| p.amount).sum();
            assert_eq!(paid, result.pot);
            match result.win_type {
                WinType::Fold => assert_eq!(engine.street(), Street::EndedByFold),
                WinType::Showdown => {
                    assert_eq!(engine.street(), Street::Showdown);
                    assert_eq!(result.board.len(), 5);
                }
            }
        }
    }
}

#[test]
fn same_seeds_replay_the_same_hands() {
    let run = || {
        let mut engine = wild_table(4, 77);
        engine.start_hand().unwrap();
        let mut out = Vec::new();
        for hand in 0..20 {
            if hand > 0 {
                engine.next_hand().unwrap();
            }
            out.push(engine.run_hand().unwrap());
        }
        out
    };
    assert_eq!(run(), run());
}
