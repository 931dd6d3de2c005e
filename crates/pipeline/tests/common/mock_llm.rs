//! Mock implementations of [`llm_client::LlmClient`] for pipeline tests.
//!
//! `MockLlm` records every prompt it receives and answers with a fixed text;
//! `FailingLlm` always fails, standing in for an unreachable or unauthorized backend.

use async_trait::async_trait;
use llm_client::LlmClient;
use prompt::ChatMessage;
use std::sync::Mutex;

pub struct MockLlm {
    reply: String,
    received: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockLlm {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt passed to `generate`, in call order.
    pub fn received(&self) -> Vec<Vec<ChatMessage>> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn generate(&self, messages: Vec<ChatMessage>) -> anyhow::Result<ChatMessage> {
        self.received.lock().unwrap().push(messages);
        Ok(ChatMessage::assistant(self.reply.clone()))
    }
}

pub struct FailingLlm {
    pub cause: &'static str,
}

#[async_trait]
impl LlmClient for FailingLlm {
    async fn generate(&self, _messages: Vec<ChatMessage>) -> anyhow::Result<ChatMessage> {
        anyhow::bail!("{}", self.cause)
    }
}
