//! Table configuration resolved from defaults, a TOML file and the
//! environment, with the source of every value tracked for `cfg`.
//!
//! | Variable | Effect |
//! |---|---|
//! | `POKERBOTS_CONFIG` | path of a TOML file read before the overrides |
//! | `POKERBOTS_SEED` | deck seed |
//! | `POKERBOTS_STARTING_STACK` | chips per player at the start of a game |
//! | `POKERBOTS_SMALL_BLIND` | small blind |
//! | `POKERBOTS_BIG_BLIND` | big blind |

use pokerbots_engine::config::{DEFAULT_BIG_BLIND, DEFAULT_SMALL_BLIND, TableConfig};
use pokerbots_engine::player::STARTING_STACK;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            small_blind: DEFAULT_SMALL_BLIND,
            big_blind: DEFAULT_BIG_BLIND,
            seed: None,
        }
    }
}

impl Config {
    /// Engine settings for a table. `seed` overrides the configured one.
    pub fn to_table_config(&self, seed: Option<u64>) -> TableConfig {
        TableConfig {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            starting_stack: self.starting_stack,
            seed: seed.or(self.seed),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
            other => write!(f, "{:?}", other),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("POKERBOTS_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("POKERBOTS_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_chips("POKERBOTS_STARTING_STACK", "starting_stack")? {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(v) = env_chips("POKERBOTS_SMALL_BLIND", "small_blind")? {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_chips("POKERBOTS_BIG_BLIND", "big_blind")? {
        cfg.big_blind = v;
        sources.big_blind = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_chips(var: &str, field: &str) -> Result<Option<u32>, ConfigError> {
    match std::env::var(var) {
        Ok(v) if !v.is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}", field))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.to_table_config(None)
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_engine() {
        let cfg = Config::default();
        let table = cfg.to_table_config(None);
        assert_eq!(table, TableConfig::default());
    }

    #[test]
    fn explicit_seed_wins_over_configured() {
        let cfg = Config {
            seed: Some(1),
            ..Config::default()
        };
        assert_eq!(cfg.to_table_config(Some(9)).seed, Some(9));
        assert_eq!(cfg.to_table_config(None).seed, Some(1));
    }

    #[test]
    fn validation_rejects_inverted_blinds() {
        let cfg = Config {
            small_blind: 100,
            big_blind: 50,
            ..Config::default()
        };
        let e = validate(&cfg).unwrap_err();
        assert!(e.to_string().starts_with("Invalid configuration"));
    }
}
