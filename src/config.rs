//! Runtime configuration read from the process environment.
//!
//! `main` populates the environment from `.env` (or the bundled
//! `assets/config.env`) before calling [`AppConfig::from_env`].

use std::env;
use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("reply delay range is empty: min {min_ms}ms >= max {max_ms}ms")]
    EmptyDelayRange { min_ms: u64, max_ms: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatbotConfig {
    pub auto_show_delay: Duration,
    pub auto_close_delay: Duration,
    pub reply_delay_min: Duration,
    pub reply_delay_max: Duration,
    /// Fixed RNG seed; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            auto_show_delay: Duration::from_millis(120_000),
            auto_close_delay: Duration::from_millis(10_000),
            reply_delay_min: Duration::from_millis(1_000),
            reply_delay_max: Duration::from_millis(2_000),
            seed: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub auth_api_url: Option<String>,
    pub log_level: Option<String>,
    pub chatbot: ChatbotConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so tests don't touch the real env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ChatbotConfig::default();
        let millis = |key: &'static str, fallback: Duration| -> Result<Duration, ConfigError> {
            match non_empty(lookup(key)) {
                Some(raw) => parse_u64(key, &raw).map(Duration::from_millis),
                None => Ok(fallback),
            }
        };

        let chatbot = ChatbotConfig {
            auto_show_delay: millis("CHATBOT_AUTO_SHOW_MS", defaults.auto_show_delay)?,
            auto_close_delay: millis("CHATBOT_AUTO_CLOSE_MS", defaults.auto_close_delay)?,
            reply_delay_min: millis("CHATBOT_REPLY_DELAY_MIN_MS", defaults.reply_delay_min)?,
            reply_delay_max: millis("CHATBOT_REPLY_DELAY_MAX_MS", defaults.reply_delay_max)?,
            seed: non_empty(lookup("CHATBOT_SEED"))
                .map(|raw| parse_u64("CHATBOT_SEED", &raw))
                .transpose()?,
        };

        if chatbot.reply_delay_min >= chatbot.reply_delay_max {
            return Err(ConfigError::EmptyDelayRange {
                min_ms: chatbot.reply_delay_min.as_millis() as u64,
                max_ms: chatbot.reply_delay_max.as_millis() as u64,
            });
        }

        Ok(Self {
            auth_api_url: non_empty(lookup("AUTH_API_URL"))
                .map(|url| url.trim_end_matches('/').to_string()),
            log_level: non_empty(lookup("LOG_LEVEL")),
            chatbot,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_u64(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.chatbot, ChatbotConfig::default());
        assert_eq!(config.chatbot.auto_show_delay, Duration::from_secs(120));
        assert_eq!(config.chatbot.auto_close_delay, Duration::from_secs(10));
        assert!(config.auth_api_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CHATBOT_AUTO_SHOW_MS", "5000"),
            ("CHATBOT_SEED", "99"),
            ("AUTH_API_URL", "https://api.carehub.example/"),
            ("LOG_LEVEL", " debug "),
        ])
        .unwrap();
        assert_eq!(config.chatbot.auto_show_delay, Duration::from_millis(5000));
        assert_eq!(config.chatbot.seed, Some(99));
        assert_eq!(
            config.auth_api_url.as_deref(),
            Some("https://api.carehub.example")
        );
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_number() {
        let err = config_from(&[("CHATBOT_AUTO_CLOSE_MS", "ten")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                key: "CHATBOT_AUTO_CLOSE_MS",
                value: "ten".to_string()
            }
        );
    }

    #[test]
    fn test_empty_delay_range_rejected() {
        let err = config_from(&[
            ("CHATBOT_REPLY_DELAY_MIN_MS", "2000"),
            ("CHATBOT_REPLY_DELAY_MAX_MS", "2000"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDelayRange { .. }));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config_from(&[("CHATBOT_SEED", "  "), ("AUTH_API_URL", "")]).unwrap();
        assert_eq!(config.chatbot.seed, None);
        assert!(config.auth_api_url.is_none());
    }
}
