//! Transport configuration: bot token, optional Bot API URL, log file path.

use std::env;

use anyhow::{Context, Result};

/// Log file used when `LOG_FILE` is not set.
pub const DEFAULT_LOG_FILE: &str = "logs/relay-bot.log";

/// Telegram transport configuration.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: String,
}

impl TelegramConfig {
    /// Uses `bot_token`; reads `TELEGRAM_API_URL` (or `TELOXIDE_API_URL`) and `LOG_FILE` from the environment.
    pub fn from_token(bot_token: String) -> Self {
        Self::from_lookup(bot_token, |k| env::var(k).ok())
    }

    pub fn from_lookup<F>(bot_token: String, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
        Self {
            bot_token,
            telegram_api_url: non_blank("TELEGRAM_API_URL").or_else(|| non_blank("TELOXIDE_API_URL")),
            log_file: non_blank("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        }
    }

    /// Token only; default API URL and log file.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }

    /// Creates the teloxide Bot, pointing it at `telegram_api_url` when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match &self.telegram_api_url {
            Some(url) => {
                let url = reqwest::Url::parse(url)
                    .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_from_lookup_prefers_telegram_api_url() {
        let config = TelegramConfig::from_lookup("t".to_string(), |k| match k {
            "TELEGRAM_API_URL" => Some("http://localhost:8081".to_string()),
            "TELOXIDE_API_URL" => Some("http://other:8081".to_string()),
            "LOG_FILE" => Some("/tmp/relay.log".to_string()),
            _ => None,
        });
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://localhost:8081"));
        assert_eq!(config.log_file, "/tmp/relay.log");
    }

    #[test]
    fn test_from_lookup_falls_back_to_teloxide_api_url() {
        let config = TelegramConfig::from_lookup("t".to_string(), |k| match k {
            "TELOXIDE_API_URL" => Some("http://other:8081".to_string()),
            _ => None,
        });
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://other:8081"));
    }

    #[test]
    fn test_build_bot_rejects_invalid_url() {
        let mut config = TelegramConfig::with_token("t".to_string());
        config.telegram_api_url = Some("not-a-valid-url".to_string());
        assert!(config.build_bot().is_err());
    }

    #[test]
    fn test_build_bot_without_url() {
        assert!(TelegramConfig::with_token("t".to_string()).build_bot().is_ok());
    }
}
