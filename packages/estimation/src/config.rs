//! Engine configuration loaded from defaults, JSON, or environment variables.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::domain::rules::DEFAULT_MAX_REDEALS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    InvalidVar {
        key: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("invalid engine config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Shuffle seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Forced re-deals allowed before a deal fails.
    pub max_redeals: u32,
    /// Players reject hands missing a suit, forcing a re-deal.
    pub redeal_short_suited: bool,
    /// First bidder of session round n is seat n mod 4. Otherwise seat 0 always bids first.
    pub rotate_first_bidder: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_redeals: DEFAULT_MAX_REDEALS,
            redeal_short_suited: false,
            rotate_first_bidder: true,
        }
    }
}

const SEED_VAR: &str = "ESTIMATION_SEED";
const MAX_REDEALS_VAR: &str = "ESTIMATION_MAX_REDEALS";
const REDEAL_VAR: &str = "ESTIMATION_REDEAL_SHORT_SUITED";
const ROTATE_VAR: &str = "ESTIMATION_ROTATE_FIRST_BIDDER";

impl EngineConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &JsonValue) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(json.clone())?)
    }

    /// Load from `ESTIMATION_*` environment variables over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from any key lookup over the defaults. Blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(v) = get(SEED_VAR) {
            config.seed = Some(parse_var(SEED_VAR, &v, "an unsigned integer")?);
        }
        if let Some(v) = get(MAX_REDEALS_VAR) {
            config.max_redeals = parse_var(MAX_REDEALS_VAR, &v, "an unsigned integer")?;
        }
        if let Some(v) = get(REDEAL_VAR) {
            config.redeal_short_suited = parse_flag(REDEAL_VAR, &v)?;
        }
        if let Some(v) = get(ROTATE_VAR) {
            config.rotate_first_bidder = parse_flag(ROTATE_VAR, &v)?;
        }
        Ok(config)
    }
}

fn parse_var<T: FromStr>(
    key: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.parse::<T>().map_err(|_| ConfigError::InvalidVar {
        key,
        expected,
        value: value.to_string(),
    })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidVar {
            key,
            expected: "a boolean",
            value: value.to_string(),
        }),
    }
}
