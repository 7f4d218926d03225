//! # pokerbots-engine: Texas Hold'em rules core
//!
//! Plays no-limit hold'em hands for 2 to 10 seats with a single pot.
//! Seats are driven either by pluggable decision providers or manually by
//! the host, and everything the table does is reported through an event sink.
//!
//! ## Core Modules
//!
//! - [`cards`] - Suit, Rank and Card with short and long notation
//! - [`deck`] - Seeded or entropy-shuffled 52-card deck
//! - [`hand`] - Best-five-of-seven evaluation and hand comparison
//! - [`pot`] - Chip collection and split distribution
//! - [`rules`] - Legal actions and action validation
//! - [`betting`] - Blinds, acting order and round completion
//! - [`engine`] - The hand state machine
//! - [`provider`] - Decision providers and the acting player's view
//! - [`events`] - Table events and sinks
//! - [`logger`] - JSONL hand history
//! - [`errors`] - Rejections and invariant violations
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerbots_engine::cards::parse_cards;
//! use pokerbots_engine::hand::{evaluate, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! assert_eq!(evaluate(&cards).category, Category::RoyalFlush);
//! ```
//!
//! ## Validating actions
//!
//! ```rust
//! use pokerbots_engine::errors::GameError;
//! use pokerbots_engine::player::PlayerAction;
//! use pokerbots_engine::rules::validate_action;
//!
//! // 50 to match, nothing in yet
//! let err = validate_action(1000, 0, 50, PlayerAction::Check).unwrap_err();
//! assert_eq!(err, GameError::CannotCheck { to_call: 50 });
//! assert!(err.is_recoverable());
//! ```

pub mod betting;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod provider;
pub mod rules;
