use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::slot::{Slot, UnknownSlot};

/// Runtime options passed to the service at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FortuneConfig {
    /// Allow one fresh draw per slot per day. Off means every draw is fresh.
    pub daily_limit_enabled: bool,
    /// Use this slot instead of the clock
    pub slot_override: Option<Slot>,
    /// Start deep-night videos muted; the user unmutes manually
    pub start_muted: bool,
    /// Pick a new video on every deep-night trigger instead of once per page
    pub repick_video_each_trigger: bool,
    /// Honour `?slot=`, `?dailyLimit=` and `?muted=` in the page URL.
    /// Off in production so a crafted link cannot lift the daily limit.
    pub allow_query_overrides: bool,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            daily_limit_enabled: true,
            slot_override: None,
            start_muted: true,
            repick_video_each_trigger: false,
            allow_query_overrides: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    UnknownSlot(#[from] UnknownSlot),
    #[error("Invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}

impl FortuneConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply `slot=<name>` and `dailyLimit=on|off` from a URL query string.
    ///
    /// Returns an unchanged copy unless `allow_query_overrides` is set. A
    /// leading `?` is accepted and unrelated keys are ignored. The first bad
    /// value aborts and leaves `self` untouched.
    pub fn with_query_overrides(&self, query: &str) -> Result<Self, ConfigError> {
        let mut config = self.clone();
        if !self.allow_query_overrides {
            if !query.trim_start_matches('?').is_empty() {
                debug!("Ignoring URL overrides, not enabled in config");
            }
            return Ok(config);
        }
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "slot" => {
                    config.slot_override = match value {
                        "" | "auto" => None,
                        name => Some(name.parse::<Slot>()?),
                    };
                }
                "dailyLimit" => {
                    config.daily_limit_enabled = parse_switch(key, value)?;
                }
                "muted" => {
                    config.start_muted = parse_switch(key, value)?;
                }
                _ => {}
            }
        }

        if config.slot_override.is_some() || !config.daily_limit_enabled {
            warn!(
                "Test overrides active (slot override: {:?}, daily limit: {})",
                config.slot_override, config.daily_limit_enabled
            );
        }

        Ok(config)
    }
}

fn parse_switch(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "on" | "1" | "true" => Ok(true),
        "off" | "0" | "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key: key.to_string(), value: value.to_string() }),
    }
}
