use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{FortuneConfig, FortuneService, MessagePools, PoolError, SystemClock};

use crate::services::logging::Logger;
use crate::services::storage::{js_reason, LocalFlagStore};

const CONFIG_JSON: &str = include_str!("../../config.json");
const MESSAGES_JSON: &str = include_str!("../../data/messages.json");

pub type AppService = FortuneService<LocalFlagStore, SystemClock, StdRng>;

/// Embedded config, plus `?slot=` / `?dailyLimit=` overrides from the URL when
/// the config allows them. Broken input is logged and skipped.
pub fn load_config() -> FortuneConfig {
    let base = parse_config(CONFIG_JSON);
    if !base.allow_query_overrides {
        return base;
    }

    let query = match web_sys::window().map(|w| w.location().search()) {
        Some(Ok(query)) => query,
        Some(Err(e)) => {
            Logger::warn_with_component("bootstrap", &format!("cannot read location: {}", js_reason(&e)));
            return base;
        }
        None => return base,
    };

    match base.with_query_overrides(&query) {
        Ok(config) => config,
        Err(e) => {
            Logger::warn_with_component("bootstrap", &format!("ignoring query overrides: {}", e));
            base
        }
    }
}

fn parse_config(json: &str) -> FortuneConfig {
    FortuneConfig::from_json(json).unwrap_or_else(|e| {
        Logger::warn_with_component("bootstrap", &format!("{}, using defaults", e));
        FortuneConfig::default()
    })
}

pub fn load_pools() -> Result<MessagePools, PoolError> {
    MessagePools::from_json(MESSAGES_JSON)
}

pub fn build_service() -> Result<AppService, PoolError> {
    let config = load_config();
    let pools = load_pools()?;
    Ok(FortuneService::new(
        config,
        pools,
        LocalFlagStore::open(),
        SystemClock,
        StdRng::from_entropy(),
    ))
}
