//! Mock [`llm_client::LlmClient`] implementations: fixed reply (counting calls) or always failing.

use async_trait::async_trait;
use llm_client::LlmClient;
use prompt::ChatMessage;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct MockLlm {
    reply: String,
    calls: AtomicUsize,
}

impl MockLlm {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn generate(&self, _messages: Vec<ChatMessage>) -> anyhow::Result<ChatMessage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ChatMessage::assistant(self.reply.clone()))
    }
}

pub struct FailingLlm;

#[async_trait]
impl LlmClient for FailingLlm {
    async fn generate(&self, _messages: Vec<ChatMessage>) -> anyhow::Result<ChatMessage> {
        anyhow::bail!("429 Too Many Requests")
    }
}
