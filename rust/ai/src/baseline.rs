//! Rule-based bot used as the reference opponent in simulations.
//!
//! Decisions are deterministic: the same view always produces the same action.

use pokerbots_engine::player::PlayerAction;
use pokerbots_engine::provider::{ActingView, DecisionProvider};
use pokerbots_engine::rules::LegalActions;

use crate::strength::current_strength;

/// Plays by hand strength and pot odds.
///
/// **Facing a bet:** 9-10 raises about half the pot, 7-8 calls, 5-6 and 3-4
/// call when the price is right, anything weaker folds.
///
/// **Unopened:** 7+ bets half to two thirds of the pot, everything else checks.
///
/// # Example
///
/// ```rust
/// use pokerbots_ai::baseline::BaselineAI;
/// use pokerbots_engine::config::TableConfig;
/// use pokerbots_engine::engine::HandEngine;
/// use pokerbots_engine::provider::{DecisionProvider, Seat};
///
/// let roster = vec![
///     ("hero".to_string(), Seat::Manual),
///     ("villain".to_string(), Seat::Manual),
/// ];
/// let mut engine = HandEngine::new(TableConfig::with_seed(42), roster).unwrap();
/// engine.start_hand().unwrap();
///
/// let mut ai = BaselineAI::new();
/// let view = engine.acting_view().unwrap();
/// let action = ai.decide(&view);
/// assert!(view.legal.allows(&action));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// Share of the final pot a call would buy: `pot / (pot + call)`.
    fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }

    fn decide_action(strength: u8, view: &ActingView) -> PlayerAction {
        let legal = view.legal;
        if legal.can_check {
            return Self::decide_unopened(strength, view);
        }
        let to_call = view.to_call;
        let pot = view.pot;

        // calling puts us all in
        if to_call >= view.stack {
            return if strength >= 7 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            };
        }

        let pot_odds = Self::pot_odds(pot, to_call);
        match strength {
            9..=10 => {
                raise_by(&legal, view.current_bet, pot / 2).unwrap_or(PlayerAction::Call)
            }
            7..=8 => PlayerAction::Call,
            5..=6 if pot_odds >= 0.3 || to_call <= pot / 4 => PlayerAction::Call,
            3..=4 if pot_odds >= 0.4 || to_call <= pot / 6 => PlayerAction::Call,
            _ => PlayerAction::Fold,
        }
    }

    fn decide_unopened(strength: u8, view: &ActingView) -> PlayerAction {
        let pot = view.pot;
        let size = match strength {
            9..=10 => pot * 2 / 3,
            7..=8 => pot / 2,
            _ => return PlayerAction::Check,
        };
        raise_by(&view.legal, view.current_bet, size).unwrap_or(PlayerAction::Check)
    }
}

/// A raise `extra` chips over the current bet, clamped to the legal range.
pub(crate) fn raise_by(legal: &LegalActions, current_bet: u32, extra: u32) -> Option<PlayerAction> {
    let min = legal.min_raise_to?;
    let to = current_bet
        .saturating_add(extra)
        .clamp(min, legal.max_raise_to);
    Some(PlayerAction::Raise(to))
}

impl DecisionProvider for BaselineAI {
    fn decide(&mut self, view: &ActingView) -> PlayerAction {
        if view.hole_cards.len() != 2 {
            return if view.can_check {
                PlayerAction::Check
            } else {
                PlayerAction::Fold
            };
        }
        let strength = current_strength(&view.hole_cards, &view.board);
        Self::decide_action(strength, view)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
