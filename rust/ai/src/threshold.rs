//! Bots that map a normalized hand strength to fold, call or raise through
//! fixed thresholds.

use pokerbots_engine::player::PlayerAction;
use pokerbots_engine::provider::{ActingView, DecisionProvider};

use crate::baseline::raise_by;
use crate::strength::normalized_strength;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Same thresholds everywhere
    Steady,
    /// Tighter in early position, looser on the button and behind it
    Positional,
}

/// Strength has to be strictly above these to raise or to continue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub raise: f32,
    pub call: f32,
}

impl Style {
    pub fn thresholds(self, view: &ActingView) -> Thresholds {
        match self {
            Style::Steady => Thresholds {
                raise: 0.8,
                call: 0.4,
            },
            Style::Positional if view.is_late_position() => Thresholds {
                raise: 0.7,
                call: 0.3,
            },
            Style::Positional => Thresholds {
                raise: 0.85,
                call: 0.6,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThresholdBot {
    style: Style,
    name: String,
}

impl ThresholdBot {
    pub fn new(style: Style) -> Self {
        let name = match style {
            Style::Steady => "SteadyBot",
            Style::Positional => "PositionalBot",
        };
        Self {
            style,
            name: name.to_string(),
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    fn continue_cheaply(view: &ActingView) -> PlayerAction {
        if view.can_check {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        }
    }
}

impl DecisionProvider for ThresholdBot {
    fn decide(&mut self, view: &ActingView) -> PlayerAction {
        let strength = normalized_strength(&view.hole_cards, &view.board);
        let t = self.style.thresholds(view);
        if strength > t.raise {
            // half the pot, at least one big blind's worth over the bet
            let extra = (view.pot / 2).max(view.current_bet);
            raise_by(&view.legal, view.current_bet, extra)
                .unwrap_or_else(|| Self::continue_cheaply(view))
        } else if strength > t.call {
            Self::continue_cheaply(view)
        } else if view.can_check {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerbots_engine::cards::parse_cards;
    use pokerbots_engine::game::Street;
    use pokerbots_engine::rules::LegalActions;

    fn view(hole: &str, position: usize, active: usize, can_check: bool) -> ActingView {
        let (street_bet, current_bet) = if can_check { (50, 50) } else { (0, 50) };
        let legal = LegalActions::compute(1000 - street_bet, street_bet, current_bet);
        ActingView {
            seat: position,
            name: "bot".into(),
            street: Street::PreFlop,
            hole_cards: parse_cards(hole).unwrap(),
            board: vec![],
            pot: 75,
            stack: 1000 - street_bet,
            street_bet,
            current_bet,
            to_call: current_bet - street_bet,
            can_check,
            legal,
            contenders: active,
            position,
            active_players: active,
        }
    }

    #[test]
    fn steady_raises_premiums_and_folds_trash() {
        let mut bot = ThresholdBot::new(Style::Steady);
        let aces = view("Ah As", 3, 6, false);
        assert!(matches!(bot.decide(&aces), PlayerAction::Raise(_)));
        let trash = view("7h 2s", 3, 6, false);
        assert_eq!(bot.decide(&trash), PlayerAction::Fold);
        let free = view("7h 2s", 1, 6, true);
        assert_eq!(bot.decide(&free), PlayerAction::Check);
    }

    #[test]
    fn steady_calls_middling_hands() {
        // 88 scores 0.6
        let mut bot = ThresholdBot::new(Style::Steady);
        assert_eq!(bot.decide(&view("8h 8s", 3, 6, false)), PlayerAction::Call);
    }

    #[test]
    fn positional_tightens_up_front() {
        let mut bot = ThresholdBot::new(Style::Positional);
        // 88 = 0.6: not enough to call early, enough on the button
        assert_eq!(bot.decide(&view("8h 8s", 2, 6, false)), PlayerAction::Fold);
        assert_eq!(bot.decide(&view("8h 8s", 0, 6, false)), PlayerAction::Call);
        // TT = 0.8: a late raise, an early call
        assert!(matches!(
            bot.decide(&view("Th Ts", 5, 6, false)),
            PlayerAction::Raise(_)
        ));
        assert_eq!(bot.decide(&view("Th Ts", 2, 6, false)), PlayerAction::Call);
    }

    #[test]
    fn raises_are_legal() {
        let mut bot = ThresholdBot::new(Style::Steady);
        let v = view("Kh Ks", 3, 6, false);
        let action = bot.decide(&v);
        assert!(v.legal.allows(&action));
    }
}
