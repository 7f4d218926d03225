use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::STARTING_STACK;

pub const DEFAULT_SMALL_BLIND: u32 = 25;
pub const DEFAULT_BIG_BLIND: u32 = 50;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

/// Stakes and deck seeding for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    pub starting_stack: u32,
    /// Fixed shuffle seed for reproducible play; random when `None`
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: DEFAULT_SMALL_BLIND,
            big_blind: DEFAULT_BIG_BLIND,
            starting_stack: STARTING_STACK,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == 0 || self.big_blind == 0 {
            return Err(GameError::InvalidTable("blinds must be positive".into()));
        }
        if self.small_blind > self.big_blind {
            return Err(GameError::InvalidTable(format!(
                "small blind {} exceeds big blind {}",
                self.small_blind, self.big_blind
            )));
        }
        if self.starting_stack == 0 {
            return Err(GameError::InvalidTable(
                "starting stack must be positive".into(),
            ));
        }
        Ok(())
    }
}
