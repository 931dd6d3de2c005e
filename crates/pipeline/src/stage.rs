//! Pipeline stages. Each stage takes the whole [`ConversationState`] and returns the next one.

use std::sync::Arc;

use async_trait::async_trait;
use llm_client::LlmClient;
use prompt::{ChatMessage, SYSTEM_INSTRUCTION};
use relay_core::{GenerationError, Result};
use tracing::{debug, instrument};

use crate::state::ConversationState;

/// One node of the pipeline.
#[async_trait]
pub trait Stage: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    async fn run(&self, state: ConversationState) -> Result<ConversationState>;
}

/// Builds the prompt: `[system(instruction), user(user_query)]`. Never fails and never edits the query.
#[derive(Debug, Clone)]
pub struct AnalyzeQuery {
    instruction: String,
}

impl AnalyzeQuery {
    pub fn new() -> Self {
        Self::with_instruction(SYSTEM_INSTRUCTION)
    }

    pub fn with_instruction(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
        }
    }

    /// The prompt for `state`, without consuming it.
    pub fn prompt_for(&self, state: &ConversationState) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.instruction.clone()),
            ChatMessage::user(state.user_query()),
        ]
    }
}

impl Default for AnalyzeQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Stage for AnalyzeQuery {
    fn name(&self) -> &'static str {
        "analyze_query"
    }

    async fn run(&self, state: ConversationState) -> Result<ConversationState> {
        let messages = self.prompt_for(&state);
        Ok(state.with_messages(messages))
    }
}

/// Sends the current messages to the LLM once; the single assistant reply replaces the message list.
#[derive(Clone)]
pub struct GenerateResponse {
    llm: Arc<dyn LlmClient>,
}

impl GenerateResponse {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Stage for GenerateResponse {
    fn name(&self) -> &'static str {
        "generate_response"
    }

    #[instrument(skip(self, state), fields(message_count = state.messages().len()))]
    async fn run(&self, state: ConversationState) -> Result<ConversationState> {
        debug!(prompt = %prompt::format_transcript(state.messages()), "Calling LLM");
        let reply = self
            .llm
            .generate(state.messages().to_vec())
            .await
            .map_err(GenerationError::new)?;
        debug!(reply_len = reply.content.len(), "LLM replied");
        Ok(state.with_messages(vec![ChatMessage::assistant(reply.content)]))
    }
}
