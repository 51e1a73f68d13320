use rand::{rngs::SmallRng, SeedableRng};
use serde::Deserialize;

use crate::{error::GameError, participant::Chips};

pub const BANKROLL_ENV: &str = "STARFALL_BANKROLL";
pub const SEED_ENV: &str = "STARFALL_SEED";

fn default_starting_bankroll() -> Chips {
    100
}

/// Session settings. Rules are fixed; only the purse and the seed vary.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    #[serde(default = "default_starting_bankroll")]
    pub starting_bankroll: Chips,
    /// Fixed seed for a replayable session. Entropy when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_bankroll: default_starting_bankroll(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GameError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = GameConfig::default();
        if let Some(raw) = lookup(BANKROLL_ENV) {
            config.starting_bankroll = raw
                .trim()
                .parse::<Chips>()
                .map_err(|err| GameError::Config(format!("{BANKROLL_ENV}={raw:?}: {err}")))?;
        }
        if let Some(raw) = lookup(SEED_ENV) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|err| GameError::Config(format!("{SEED_ENV}={raw:?}: {err}")))?;
            config.seed = Some(seed);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.starting_bankroll == 0 {
            return Err(GameError::Config(
                "starting bankroll must be at least $1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }
}
