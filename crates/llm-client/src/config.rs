//! LLM configuration: trait and env-based implementation.

use openai_client::DEFAULT_API_BASE;
use std::env;

/// Model used when `MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
}

/// LLM config: API key from the required secrets, base URL and model from optional env vars.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub llm_model: String,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn base_url(&self) -> &str {
        &self.openai_base_url
    }
    fn model(&self) -> &str {
        &self.llm_model
    }
}

impl EnvLlmConfig {
    /// Uses `api_key`; reads `OPENAI_BASE_URL` and `MODEL` from the environment.
    pub fn from_api_key(api_key: String) -> Self {
        Self::from_lookup(api_key, |k| env::var(k).ok())
    }

    /// Same as [`from_api_key`](Self::from_api_key) with an explicit lookup. Blank values fall back to defaults.
    pub fn from_lookup<F>(api_key: String, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
        Self {
            openai_api_key: api_key,
            openai_base_url: non_blank("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            llm_model: non_blank("MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}
