//! Secrets loading: `.env` file (once) then process environment.
//!
//! A missing required variable is a fatal startup condition; callers get
//! [`ConfigError::MissingVar`] with the variable name and no retry happens.

use crate::error::ConfigError;
use std::env;
use std::fmt;
use std::sync::Once;

pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";

static DOTENV: Once = Once::new();

/// Loads `.env` from the working directory into the process environment, at most once.
/// Variables already present in the environment are not overridden; a missing file is fine.
pub fn load_dotenv() {
    DOTENV.call_once(|| {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded secrets file");
        }
    });
}

/// Looks up `key` in the process environment (after [`load_dotenv`]).
pub fn get(key: &str) -> Result<String, ConfigError> {
    load_dotenv();
    get_with(key, |k| env::var(k).ok())
}

/// Looks up `key` through `lookup`. Only absence is an error; an empty value is returned as-is.
pub fn get_with<F>(key: &str, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or_else(|| ConfigError::MissingVar {
        key: key.to_string(),
    })
}

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// The three secrets the relay requires at startup.
#[derive(Clone)]
pub struct Secrets {
    pub telegram_bot_token: String,
    pub openai_api_key: String,
    /// Loaded and validated for parity with the deployment env; the pipeline does not use it.
    pub google_api_key: String,
}

impl Secrets {
    /// Required keys, in the order they are checked.
    pub const REQUIRED: [&'static str; 3] = [TELEGRAM_BOT_TOKEN, OPENAI_API_KEY, GOOGLE_API_KEY];

    /// Loads `.env` once, then reads every required key from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Reads every required key through `lookup`; fails on the first missing one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            telegram_bot_token: get_with(TELEGRAM_BOT_TOKEN, &lookup)?,
            openai_api_key: get_with(OPENAI_API_KEY, &lookup)?,
            google_api_key: get_with(GOOGLE_API_KEY, &lookup)?,
        })
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("telegram_bot_token", &mask_token(&self.telegram_bot_token))
            .field("openai_api_key", &mask_token(&self.openai_api_key))
            .field("google_api_key", &mask_token(&self.google_api_key))
            .finish()
    }
}
