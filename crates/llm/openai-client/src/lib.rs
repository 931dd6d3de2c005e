//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for (non-streaming) chat completion.
//! Logs the model, message count and masked API key for every request.
//! Failed requests (including HTTP 429) are returned to the caller on the first attempt.

use async_openai::{config::OpenAIConfig, types::CreateChatCompletionRequestArgs, Client};
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use relay_core::mask_token;
use std::sync::Arc;
use std::time::Duration;

pub use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

/// Default API base for OpenAI.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Backoff that gives up on the first failure; async-openai retries 429 and 5xx by default.
fn no_retry() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

/// OpenAI chat client. Wraps async-openai client and holds the API key for masked logging.
#[derive(Clone)]
pub struct OpenAIClient {
    /// Shared async-openai client used for all API calls.
    client: Arc<Client<OpenAIConfig>>,
    /// API key stored only for logging (masked).
    api_key_for_logging: String,
}

impl OpenAIClient {
    /// Builds a client for `base_url` ([`DEFAULT_API_BASE`] or a compatible endpoint).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let api_key_for_logging = api_key.clone();
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config).with_backoff(no_retry())),
            api_key_for_logging,
        }
    }

    fn masked_key(&self) -> String {
        mask_token(&self.api_key_for_logging)
    }

    /// Sends a chat completion request and returns the first choice's text.
    ///
    /// Only the model is set; temperature, max tokens etc. keep the backend defaults.
    /// A choice without content yields an empty string; no choices at all is an error.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> anyhow::Result<String> {
        tracing::info!(
            model = %model,
            message_count = messages.len(),
            api_key = %self.masked_key(),
            "OpenAI chat_completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            tracing::debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        match response.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content.unwrap_or_default()),
            None => anyhow::bail!("No response from OpenAI"),
        }
    }
}
