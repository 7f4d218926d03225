//! # pokerbots-ai: decision providers
//!
//! Ready-made [`DecisionProvider`] implementations for autonomous seats.
//!
//! ## Core Components
//!
//! - [`baseline`] - Deterministic strength and pot-odds bot
//! - [`threshold`] - Fixed-threshold bots, optionally position aware
//! - [`random`] - Uniformly random legal play
//! - [`strength`] - Hand-strength scores the rule-based bots share
//! - [`create_ai`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerbots_ai::create_ai;
//! use pokerbots_engine::config::TableConfig;
//! use pokerbots_engine::engine::HandEngine;
//! use pokerbots_engine::provider::Seat;
//!
//! let roster = ["baseline", "steady", "positional"]
//!     .iter()
//!     .map(|kind| (kind.to_string(), Seat::Autonomous(create_ai(kind).unwrap())))
//!     .collect();
//! let mut engine = HandEngine::new(TableConfig::with_seed(42), roster).unwrap();
//! engine.start_hand().unwrap();
//! let result = engine.run_hand().unwrap();
//! assert!(!result.winners.is_empty());
//! ```

pub use pokerbots_engine::provider::DecisionProvider;

pub mod baseline;
pub mod random;
pub mod strength;
pub mod threshold;

/// Names accepted by [`create_ai`].
pub const AI_KINDS: [&str; 4] = ["baseline", "steady", "positional", "random"];

/// Builds a provider by name, `None` for an unknown name.
///
/// ```rust
/// use pokerbots_ai::create_ai;
///
/// let ai = create_ai("baseline").unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("nope").is_none());
/// ```
pub fn create_ai(kind: &str) -> Option<Box<dyn DecisionProvider>> {
    build(kind, None)
}

/// Like [`create_ai`], with a fixed seed for the bots that use randomness.
pub fn create_ai_seeded(kind: &str, seed: u64) -> Option<Box<dyn DecisionProvider>> {
    build(kind, Some(seed))
}

fn build(kind: &str, seed: Option<u64>) -> Option<Box<dyn DecisionProvider>> {
    let ai: Box<dyn DecisionProvider> = match kind.trim().to_ascii_lowercase().as_str() {
        "baseline" => Box::new(baseline::BaselineAI::new()),
        "steady" => Box::new(threshold::ThresholdBot::new(threshold::Style::Steady)),
        "positional" => Box::new(threshold::ThresholdBot::new(threshold::Style::Positional)),
        "random" => match seed {
            Some(s) => Box::new(random::RandomBot::with_seed(s)),
            None => Box::new(random::RandomBot::new()),
        },
        _ => return None,
    };
    Some(ai)
}
