//! Engine configuration with explicit defaults and optional environment
//! overrides. The defaults reproduce the production desk constants.

use thiserror::Error;

use crate::strategies::weights::StrategyKind;

/// Deployment environment, selects the log formatter.
pub fn get_environment() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Symbols eligible for the extended strategy set.
    pub top_assets: Vec<String>,
    /// The one symbol whose scalp emissions are capped per UTC day.
    pub scalp_symbol: String,
    pub scalp_daily_cap: u32,
    /// Advisory notional assumed when the host passes none of its own.
    pub default_balance: f64,
    /// Minimum spacing between emissions on one symbol, any strategy.
    pub asset_cooldown_secs: i64,
    /// Tighter spacing allowed when the winner is the scalp strategy.
    pub scalp_cooldown_secs: i64,
    /// Half-width of the news impact window around now, in minutes.
    pub news_window_mins: i64,
    /// Fear-index level above which confidence is gated down.
    pub vix_threshold: f64,
    /// Lowercased macro terms that escalate the news penalty.
    pub macro_keywords: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_assets: [
                "GOLD",
                "EURUSD",
                "GBPUSD",
                "USDJPY",
                "BTCUSD",
                "ETHUSD",
                "Apple",
                "MICROSOFT",
                "US500Cash",
                "US30Cash",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            scalp_symbol: "GOLD".to_string(),
            scalp_daily_cap: 3,
            default_balance: 10_000.0,
            asset_cooldown_secs: 10 * 60,
            scalp_cooldown_secs: 5 * 60,
            news_window_mins: 30,
            vix_threshold: 25.0,
            macro_keywords: ["fed", "cpi", "inflation"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl EngineConfig {
    /// Defaults with numeric overrides taken from the environment. The demo
    /// binary loads `.env` via dotenvy before calling this.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = read_env("SIGNALFORGE_ASSET_COOLDOWN_SECS")? {
            config.asset_cooldown_secs = v;
        }
        if let Some(v) = read_env("SIGNALFORGE_SCALP_COOLDOWN_SECS")? {
            config.scalp_cooldown_secs = v;
        }
        if let Some(v) = read_env("SIGNALFORGE_SCALP_DAILY_CAP")? {
            config.scalp_daily_cap = v;
        }
        if let Some(v) = read_env("SIGNALFORGE_VIX_THRESHOLD")? {
            config.vix_threshold = v;
        }
        Ok(config)
    }

    pub fn is_privileged(&self, symbol: &str) -> bool {
        self.top_assets.iter().any(|s| s == symbol)
    }

    /// Required emission spacing for a winning strategy, in seconds.
    pub fn cooldown_secs_for(&self, strategy: StrategyKind) -> i64 {
        if strategy == StrategyKind::ScalpGold {
            self.scalp_cooldown_secs
        } else {
            self.asset_cooldown_secs
        }
    }
}

fn read_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_desk_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.asset_cooldown_secs, 600);
        assert_eq!(config.scalp_cooldown_secs, 300);
        assert_eq!(config.scalp_daily_cap, 3);
        assert!(config.is_privileged("GOLD"));
        assert!(!config.is_privileged("SILVER"));
    }

    #[test]
    fn scalp_gets_the_short_cooldown() {
        let config = EngineConfig::default();
        assert_eq!(config.cooldown_secs_for(StrategyKind::ScalpGold), 300);
        assert_eq!(config.cooldown_secs_for(StrategyKind::Breakout), 600);
        assert_eq!(config.cooldown_secs_for(StrategyKind::Rsi), 600);
    }
}
